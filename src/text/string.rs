use crate::constants::escape_letter;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// True when `value` can be written between quotes without any escaping.
pub fn is_plain(value: &str) -> bool {
    !value.bytes().any(needs_escape)
}

#[inline]
fn needs_escape(byte: u8) -> bool {
    byte < 0x20 || byte == b'"' || byte == b'\\'
}

/// Appends `value` to `out` as a quoted JSON string.
///
/// Bytes from the escape table use their short form; any other control
/// character is written as `\u00XX`.
pub(crate) fn write_quoted_into(out: &mut Vec<u8>, value: &str) {
    out.push(b'"');
    let bytes = value.as_bytes();
    if is_plain(value) {
        out.extend_from_slice(bytes);
        out.push(b'"');
        return;
    }
    let mut start = 0;
    for (idx, &byte) in bytes.iter().enumerate() {
        if !needs_escape(byte) {
            continue;
        }
        out.extend_from_slice(&bytes[start..idx]);
        match escape_letter(byte) {
            Some(letter) => out.extend_from_slice(&[b'\\', letter]),
            None => out.extend_from_slice(&[
                b'\\',
                b'u',
                b'0',
                b'0',
                HEX[usize::from(byte >> 4)],
                HEX[usize::from(byte & 0x0f)],
            ]),
        }
        start = idx + 1;
    }
    out.extend_from_slice(&bytes[start..]);
    out.push(b'"');
}
