//! Request helpers (multipart).
//!
//! The part encoder lives here rather than on `reqwest::multipart`: the
//! servers this layer talks to index parts by a nonstandard `filelength`
//! parameter inside `Content-Disposition`, which reqwest's form writer
//! cannot emit. The framing matches a standard `multipart/form-data` body
//! otherwise.

use super::common::{ensure_ok, read_bytes, send_post};
use crate::config::HttpConfig;
use crate::error::HttpError;

/// One multipart form field; a file part when `filename` is non-empty.
#[derive(Debug, Clone)]
pub struct FormField {
    /// Form field name
    pub name: String,
    /// File name reported to the server; empty for non-file fields
    pub filename: String,
    /// Content type of this part
    pub content_type: String,
    /// Raw field bytes
    pub value: Vec<u8>,
}

impl FormField {
    /// Create a form field.
    pub fn new(
        name: impl Into<String>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        value: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            name: name.into(),
            filename: filename.into(),
            content_type: content_type.into(),
            value: value.into(),
        }
    }
}

/// POST `fields` to `uri` as one `multipart/form-data` request and return
/// the raw response bytes.
///
/// Fields are encoded in the order given; servers that index parts
/// positionally rely on it.
pub async fn post_multipart_form(
    config: &HttpConfig,
    fields: &[FormField],
    uri: &str,
) -> Result<Vec<u8>, HttpError> {
    let boundary = format!("httpkit-{}", uuid::Uuid::new_v4().simple());
    let body = encode_form(&boundary, fields);
    let content_type = format!("multipart/form-data; boundary={boundary}");
    let response = ensure_ok(uri, send_post(config, uri, &content_type, body).await?)?;
    read_bytes(uri, response).await
}

/// Upload a single file field to `uri` and return the raw response bytes.
///
/// Convenience wrapper over [`post_multipart_form`].
pub async fn post_file(
    config: &HttpConfig,
    field_name: &str,
    filename: &str,
    content_type: &str,
    data: &[u8],
    uri: &str,
) -> Result<Vec<u8>, HttpError> {
    let fields = [FormField::new(field_name, filename, content_type, data)];
    post_multipart_form(config, &fields, uri).await
}

/// Encode `fields` into a `multipart/form-data` body with the given boundary.
fn encode_form(boundary: &str, fields: &[FormField]) -> Vec<u8> {
    let mut body = Vec::new();
    for field in fields {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"; filelength={}\r\n",
                field.name,
                field.filename,
                field.value.len()
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", field.content_type).as_bytes());
        body.extend_from_slice(&field.value);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_single_field() {
        let fields = [FormField::new("f1", "a.txt", "text/plain", b"hi".to_vec())];
        let body = encode_form("b0", &fields);
        let expected = "--b0\r\n\
             Content-Disposition: form-data; name=\"f1\"; filename=\"a.txt\"; filelength=2\r\n\
             Content-Type: text/plain\r\n\
             \r\n\
             hi\r\n\
             --b0--\r\n";
        assert_eq!(body, expected.as_bytes());
    }

    #[test]
    fn test_encode_preserves_field_order() {
        let fields = [
            FormField::new("first", "", "text/plain", b"1".to_vec()),
            FormField::new("second", "", "text/plain", b"2".to_vec()),
        ];
        let body = String::from_utf8(encode_form("b0", &fields)).unwrap();
        let first = body.find("name=\"first\"").unwrap();
        let second = body.find("name=\"second\"").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_encode_binary_value() {
        let fields = [FormField::new(
            "blob",
            "raw.bin",
            "application/octet-stream",
            vec![0u8, 159, 146, 150],
        )];
        let body = encode_form("b0", &fields);
        let needle = [0u8, 159, 146, 150];
        assert!(body.windows(4).any(|w| w == &needle[..]));
        let header = String::from_utf8_lossy(&body);
        assert!(header.contains("filelength=4"));
    }

    #[test]
    fn test_encode_empty_field_list() {
        let body = encode_form("b0", &[]);
        assert_eq!(body, b"--b0--\r\n");
    }
}
