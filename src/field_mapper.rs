use ::anyhow::Context;
use ::anyhow::Result;
use ::serde_json::Map;
use ::serde_json::Value;

use crate::FormFields;
use crate::InputReference;

pub const SIZE: &str = "size";
pub const MODEL: &str = "model";
pub const PROMPT: &str = "prompt";
pub const SECONDS: &str = "seconds";
pub const INPUT_REFERENCE: &str = "input_reference";

/// Fields copied straight across, in the order they are written.
const PASS_THROUGH_FIELDS: [&str; 4] = [SIZE, MODEL, PROMPT, SECONDS];

///
/// Converts the JSON body of an image edit request into form fields.
///
/// `size`, `model`, `prompt`, and `seconds` are copied across.
/// Strings are copied verbatim, and other values are written as JSON text.
/// `input_reference` is cleaned up as described on [`InputReference`].
/// Every other key is dropped.
///
/// This never fails. Fields which are missing or `null` are left out.
///
/// ```rust
/// use ::images_edit_form::convert_json_to_formdata;
/// use ::serde_json::json;
///
/// let body = json!({
///     "model": "sora2-hd",
///     "prompt": "动起来",
///     "input_reference": "`https://example.com/cat.png`",
/// });
///
/// let fields = convert_json_to_formdata(body.as_object().unwrap());
/// assert_eq!(fields.get("model"), Some("sora2-hd"));
/// assert_eq!(fields.get("input_reference"), Some("https://example.com/cat.png"));
/// ```
///
pub fn convert_json_to_formdata(json_data: &Map<String, Value>) -> FormFields {
    let mut form_data = FormFields::new();

    for name in PASS_THROUGH_FIELDS {
        if let Some(text) = json_data.get(name).and_then(value_to_field_text) {
            form_data.push(name, text);
        }
    }

    let input_reference = InputReference::from_value(json_data.get(INPUT_REFERENCE));
    match &input_reference {
        InputReference::Absent => {}
        InputReference::Empty => {
            ::tracing::debug!("input_reference is an empty array, leaving it out");
        }
        InputReference::Raw(text) => {
            ::tracing::debug!(input_reference = %text, "input_reference is not a URL, sending it as cleaned text");
        }
        InputReference::Other(text) => {
            ::tracing::debug!(input_reference = %text, "input_reference is not a string, sending it as JSON text");
        }
        InputReference::Url(_) => {}
    }
    if let Some(text) = input_reference.into_field_value() {
        form_data.push(INPUT_REFERENCE, text);
    }

    for key in json_data.keys() {
        if !is_known_field(key) {
            ::tracing::debug!(key = %key, "dropping unrecognised field");
        }
    }

    form_data
}

/// As [`convert_json_to_formdata`], for any JSON value.
///
/// Values which are not objects have no fields, and give an empty result.
pub fn convert_json_value(json_data: &Value) -> FormFields {
    match json_data {
        Value::Object(map) => convert_json_to_formdata(map),
        other => {
            ::tracing::debug!(body = %other, "request body is not a JSON object, no fields to convert");
            FormFields::new()
        }
    }
}

/// Decodes a JSON request body, and converts it into form fields.
pub fn convert_json_str(raw_body: &str) -> Result<FormFields> {
    let json_data: Value = ::serde_json::from_str(raw_body)
        .with_context(|| format!("Failed to deserialize request body as Json, for body '{raw_body}'"))?;

    Ok(convert_json_value(&json_data))
}

/// Decodes a JSON request body from raw bytes, and converts it into form fields.
pub fn convert_json_slice(raw_body: &[u8]) -> Result<FormFields> {
    let json_data: Value = ::serde_json::from_slice(raw_body).with_context(|| {
        let debug_body = String::from_utf8_lossy(raw_body);
        format!("Failed to deserialize request body as Json, for body '{debug_body}'")
    })?;

    Ok(convert_json_value(&json_data))
}

fn is_known_field(key: &str) -> bool {
    key == INPUT_REFERENCE || PASS_THROUGH_FIELDS.contains(&key)
}

/// `null` counts as missing, so it is never sent as the text `None`.
fn value_to_field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
