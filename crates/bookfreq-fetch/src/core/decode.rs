use crate::error::Result;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode a response body as UTF-8 text, dropping a leading byte-order mark.
///
/// ```
/// use bookfreq_fetch::decode_text;
///
/// assert_eq!(decode_text(b"\xEF\xBB\xBFhello".to_vec()).unwrap(), "hello");
/// ```
pub fn decode_text(mut body: Vec<u8>) -> Result<String> {
    if body.starts_with(UTF8_BOM) {
        body.drain(..UTF8_BOM.len());
    }
    Ok(String::from_utf8(body)?)
}
