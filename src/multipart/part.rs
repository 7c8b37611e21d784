use ::anyhow::Context;
use ::anyhow::Result;
use ::bytes::Bytes;
use ::mime::Mime;
use ::std::fmt::Display;

///
/// One section of an image edit form, usually the image uploaded as `input_reference`.
///
/// Text fields are normally added with [`MultipartForm::add_text()`](crate::multipart::MultipartForm::add_text()).
/// A `Part` is for when the content needs a file name or a mime type,
/// and is attached with [`MultipartForm::add_part()`](crate::multipart::MultipartForm::add_part()).
///
#[derive(Debug, Clone)]
pub struct Part {
    pub(crate) bytes: Bytes,
    pub(crate) file_name: Option<String>,
    pub(crate) mime_type: Mime,
}

impl Part {
    /// A `text/plain` part, such as a prompt sent as a file.
    pub fn text<T>(text: T) -> Self
    where
        T: Display,
    {
        Self {
            bytes: Bytes::from(text.to_string()),
            file_name: None,
            mime_type: mime::TEXT_PLAIN,
        }
    }

    /// Raw image bytes for `input_reference`.
    ///
    /// These are sent as `application/octet-stream` until
    /// [`Part::mime_type()`] says otherwise, e.g. `image/png`.
    pub fn bytes<B>(bytes: B) -> Self
    where
        B: Into<Bytes>,
    {
        Self {
            bytes: bytes.into(),
            file_name: None,
            mime_type: mime::APPLICATION_OCTET_STREAM,
        }
    }

    /// The file name the upstream service sees, such as `cat.png`.
    pub fn file_name<T>(self, file_name: T) -> Self
    where
        T: Display,
    {
        Self {
            file_name: Some(file_name.to_string()),
            ..self
        }
    }

    /// Replaces the mime type for this part.
    ///
    /// Returns an error if the mime type given cannot be parsed.
    pub fn mime_type<M>(mut self, mime_type: M) -> Result<Self>
    where
        M: AsRef<str>,
    {
        let raw_mime_type = mime_type.as_ref();
        self.mime_type = raw_mime_type
            .parse()
            .with_context(|| format!("Failed to parse '{raw_mime_type}' as a Mime type"))?;

        Ok(self)
    }
}
