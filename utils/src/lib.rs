//! Encoding helpers shared across the tpmscan analysis crates.

use num_bigint::BigInt;

/// Converts bytes to a lowercase hexadecimal string.
pub fn hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes.iter() {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

/// Converts a hexadecimal string to bytes.
pub fn from_hex(hex: &str) -> Option<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return None;
    }

    (0..hex.len())
        .step_by(2)
        .map(|i| match u8::from_str_radix(&hex[i..i + 2], 16) {
            Ok(byte) => Some(byte),
            Err(_) => None,
        })
        .collect()
}

/// Converts a hexadecimal string to bytes, stripping whitespace and/or a `0x` prefix. Commonly used
/// in testing to encode external test vectors without modification.
pub fn from_hex_formatted(hex: &str) -> Option<Vec<u8>> {
    let hex = hex.replace(['\t', '\n', '\r', ' '], "");
    let res = hex.strip_prefix("0x").unwrap_or(&hex);
    from_hex(res)
}

/// Encodes a non-negative integer as big-endian bytes, left-padded with zeros
/// to exactly `width` bytes.
///
/// The value must fit in `width` bytes.
pub fn be_bytes(value: &BigInt, width: usize) -> Vec<u8> {
    let (_, magnitude) = value.to_bytes_be();
    assert!(
        magnitude.len() <= width,
        "value does not fit in {} bytes",
        width
    );
    let mut out = vec![0u8; width - magnitude.len()];
    out.extend_from_slice(&magnitude);
    out
}

/// Strips leading zero bytes, returning the remaining suffix (possibly empty).
pub fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}
