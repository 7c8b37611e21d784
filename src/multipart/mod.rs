//!
//! Building blocks for sending converted fields as a `multipart/form-data` body.
//!
//! Most of the time a [`MultipartForm`] is built straight from [`FormFields`](crate::FormFields):
//!
//! ```rust
//! use ::images_edit_form::convert_json_str;
//! use ::images_edit_form::multipart::MultipartForm;
//!
//! # fn test() -> ::anyhow::Result<()> {
//! let fields = convert_json_str(r#"{ "model": "sora2-hd", "prompt": "动起来" }"#)?;
//! let multipart_form = MultipartForm::from_fields(&fields);
//!
//! let content_type = multipart_form.content_type();
//! let body: ::axum::body::Body = multipart_form.into();
//! #
//! # Ok(()) }
//! ```
//!
//! # Attaching a file
//!
//! An image can be sent as `input_reference` instead of a URL:
//!
//! ```rust
//! use ::images_edit_form::multipart::MultipartForm;
//! use ::images_edit_form::multipart::Part;
//!
//! # fn test() -> ::anyhow::Result<()> {
//! let image_bytes = include_bytes!("../../README.md");
//! let image_part = Part::bytes(image_bytes.as_slice())
//!     .file_name("cat.png")
//!     .mime_type("image/png")?;
//!
//! let multipart_form = MultipartForm::new()
//!     .add_text("model", "sora2-hd")
//!     .add_part("input_reference", image_part);
//! #
//! # Ok(()) }
//! ```
//!

mod multipart_form;
pub use self::multipart_form::*;

mod part;
pub use self::part::*;

/// The endpoint these forms are sent to.
pub const IMAGES_EDITS_PATH: &str = "/v1/images/edits";
