pub const DEFAULT_INDENT: usize = 2;

pub const MAX_DEPTH: usize = 256;

/// Largest magnitude written as a plain integer; beyond it `f64` can no
/// longer represent every integer exactly.
pub(crate) const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Escape letters the parser understands, paired with the byte they decode to.
pub(crate) const ESCAPES: &[(u8, u8)] = &[
    (b'"', b'"'),
    (b'\\', b'\\'),
    (b'b', 0x08),
    (b'f', 0x0c),
    (b'n', b'\n'),
    (b'r', b'\r'),
    (b't', b'\t'),
];

#[inline]
pub(crate) fn unescape(letter: u8) -> Option<u8> {
    ESCAPES
        .iter()
        .find(|(key, _)| *key == letter)
        .map(|(_, value)| *value)
}

#[inline]
pub(crate) fn escape_letter(byte: u8) -> Option<u8> {
    ESCAPES
        .iter()
        .find(|(_, value)| *value == byte)
        .map(|(key, _)| *key)
}
