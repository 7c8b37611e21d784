//!
//! Images Edit Form converts the JSON body of an image edit request
//! into the `multipart/form-data` fields expected by `/v1/images/edits`.
//!
//!  * Pass the decoded JSON object to [`convert_json_to_formdata()`],
//!  * receive back [`FormFields`], holding string values only,
//!  * then send them using a [`MultipartForm`](crate::multipart::MultipartForm).
//!
//! Only `size`, `model`, `prompt`, `seconds`, and `input_reference` are kept.
//! Anything else in the body is dropped.
//!
//! ## Getting Started
//!
//! ```rust
//! use ::images_edit_form::convert_json_to_formdata;
//! use ::serde_json::json;
//!
//! let body = json!({
//!     "size": "1024x1792",
//!     "model": "sora2-hd",
//!     "seconds": "8",
//!     "prompt": "动起来",
//!     "input_reference": [],
//! });
//!
//! let fields = convert_json_to_formdata(body.as_object().unwrap());
//!
//! assert_eq!(fields.get("size"), Some("1024x1792"));
//! assert_eq!(fields.get("input_reference"), None);
//! ```
//!
//! ## `input_reference`
//!
//! This is the one field with rules of its own, see [`InputReference`]:
//!
//!  * missing, `null`, or an empty array, leaves the field out,
//!  * a `http://` or `https://` string is trimmed and sent as is,
//!  * any other string is trimmed, and has surrounding backticks removed,
//!  * anything else is sent as its JSON text.
//!
//! ## Logging
//!
//! Decisions which change or drop data are reported as `tracing` debug events.
//! No subscriber is installed by this crate.
//!

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod multipart;

mod field_mapper;
pub use self::field_mapper::*;

mod form_fields;
pub use self::form_fields::*;

mod input_reference;
pub use self::input_reference::*;
