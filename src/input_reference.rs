use ::serde_json::Value;

const URL_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Unicode whitespace, plus the information separators `\x1c` to `\x1f`.
fn is_trimmed_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

///
/// The shapes an `input_reference` value can take in a JSON request body.
///
/// Build one with [`InputReference::from_value()`], then turn it into the
/// text of the form field with [`InputReference::into_field_value()`].
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputReference {
    /// The key was missing, or set to `null`.
    ///
    /// A `null` is left out, rather than being sent as the text `None`.
    Absent,

    /// An empty array, meaning no attachment was sent.
    Empty,

    /// A string starting with `http://` or `https://`, already trimmed.
    Url(String),

    /// Any other string, after trimming whitespace and surrounding backticks.
    ///
    /// Trimming also removes the information separators `\x1c` to `\x1f`.
    ///
    /// This is not guaranteed to be a URL, and can be empty.
    Raw(String),

    /// A value of any other JSON type, as compact JSON text.
    Other(String),
}

impl InputReference {
    pub fn from_value(maybe_value: Option<&Value>) -> Self {
        match maybe_value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::Array(items)) if items.is_empty() => Self::Empty,
            Some(Value::String(raw)) => Self::from_str_value(raw),
            Some(other) => Self::Other(other.to_string()),
        }
    }

    fn from_str_value(raw: &str) -> Self {
        let trimmed = raw.trim_matches(is_trimmed_char);
        if URL_PREFIXES
            .iter()
            .any(|prefix| trimmed.starts_with(prefix))
        {
            return Self::Url(trimmed.to_string());
        }

        // Only the outer backticks go, so "`a`b`" becomes "a`b".
        let cleaned = trimmed.trim_matches('`').trim_matches(is_trimmed_char);
        Self::Raw(cleaned.to_string())
    }

    /// The text to send as the `input_reference` form field,
    /// or `None` when the field should be left out.
    pub fn into_field_value(self) -> Option<String> {
        match self {
            Self::Absent | Self::Empty => None,
            Self::Url(text) | Self::Raw(text) | Self::Other(text) => Some(text),
        }
    }
}

#[cfg(test)]
mod test_from_value {
    use super::*;

    use ::pretty_assertions::assert_eq;
    use ::serde_json::json;

    #[test]
    fn it_should_be_absent_when_missing() {
        assert_eq!(InputReference::from_value(None), InputReference::Absent);
    }

    #[test]
    fn it_should_be_absent_when_null() {
        let value = json!(null);
        assert_eq!(
            InputReference::from_value(Some(&value)),
            InputReference::Absent
        );
    }

    #[test]
    fn it_should_be_empty_for_empty_array() {
        let value = json!([]);
        assert_eq!(
            InputReference::from_value(Some(&value)),
            InputReference::Empty
        );
    }

    #[test]
    fn it_should_trim_https_urls() {
        let value = json!("  https://example.com/a.png \n");
        assert_eq!(
            InputReference::from_value(Some(&value)),
            InputReference::Url("https://example.com/a.png".to_string())
        );
    }

    #[test]
    fn it_should_trim_http_urls() {
        let value = json!("\thttp://example.com/a.png");
        assert_eq!(
            InputReference::from_value(Some(&value)),
            InputReference::Url("http://example.com/a.png".to_string())
        );
    }

    #[test]
    fn it_should_keep_backticks_inside_urls() {
        let value = json!("https://example.com/`a`.png`");
        assert_eq!(
            InputReference::from_value(Some(&value)),
            InputReference::Url("https://example.com/`a`.png`".to_string())
        );
    }

    #[test]
    fn it_should_strip_backticks_from_raw_strings() {
        let value = json!("`abc`");
        assert_eq!(
            InputReference::from_value(Some(&value)),
            InputReference::Raw("abc".to_string())
        );
    }

    #[test]
    fn it_should_strip_whitespace_inside_backticks() {
        let value = json!("  ` https://example.com/a.png ` ");
        assert_eq!(
            InputReference::from_value(Some(&value)),
            InputReference::Raw("https://example.com/a.png".to_string())
        );
    }

    // Interior backticks survive. This is the current behaviour, not a verified requirement.
    #[test]
    fn it_should_keep_interior_backticks_in_raw_strings() {
        let value = json!("`a`b`");
        assert_eq!(
            InputReference::from_value(Some(&value)),
            InputReference::Raw("a`b".to_string())
        );
    }

    #[test]
    fn it_should_trim_information_separators() {
        let value = json!("\u{1f}`abc`\u{1c}");
        assert_eq!(
            InputReference::from_value(Some(&value)),
            InputReference::Raw("abc".to_string())
        );
    }

    #[test]
    fn it_should_trim_information_separators_around_urls() {
        let value = json!("\u{1e} https://example.com/a.png\u{1d}");
        assert_eq!(
            InputReference::from_value(Some(&value)),
            InputReference::Url("https://example.com/a.png".to_string())
        );
    }

    #[test]
    fn it_should_allow_raw_strings_to_become_empty() {
        let value = json!(" `` ");
        assert_eq!(
            InputReference::from_value(Some(&value)),
            InputReference::Raw(String::new())
        );
    }

    #[test]
    fn it_should_stringify_objects() {
        let value = json!({ "url": "x" });
        assert_eq!(
            InputReference::from_value(Some(&value)),
            InputReference::Other(r#"{"url":"x"}"#.to_string())
        );
    }

    #[test]
    fn it_should_stringify_non_empty_arrays() {
        let value = json!(["https://example.com/a.png"]);
        assert_eq!(
            InputReference::from_value(Some(&value)),
            InputReference::Other(r#"["https://example.com/a.png"]"#.to_string())
        );
    }

    #[test]
    fn it_should_stringify_numbers_and_bools() {
        let number = json!(42);
        let boolean = json!(false);

        assert_eq!(
            InputReference::from_value(Some(&number)),
            InputReference::Other("42".to_string())
        );
        assert_eq!(
            InputReference::from_value(Some(&boolean)),
            InputReference::Other("false".to_string())
        );
    }
}
