use itoa::Buffer as ItoaBuffer;
use ryu::Buffer as RyuBuffer;

use crate::constants::MAX_EXACT_INTEGER;

/// Returns `n` as an integer when it is integral and every neighbouring
/// integer is still representable, so printing it without a fraction is exact.
pub fn exact_integer(n: f64) -> Option<i64> {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER {
        Some(n as i64)
    } else {
        None
    }
}

/// Appends the JSON spelling of `n` to `out`.
pub(crate) fn write_number_into(n: f64, out: &mut Vec<u8>) {
    if let Some(i) = exact_integer(n) {
        let mut buf = ItoaBuffer::new();
        out.extend_from_slice(buf.format(i).as_bytes());
        return;
    }
    // JSON has no spelling for NaN or the infinities.
    if !n.is_finite() {
        out.extend_from_slice(b"null");
        return;
    }
    let mut buf = RyuBuffer::new();
    out.extend_from_slice(buf.format_finite(n).as_bytes());
}
