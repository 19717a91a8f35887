//! Byte-string encoding for Michelson storage literals.

/// Lowercase two-hex-digit-per-byte encoding of the UTF-8 bytes of `input`,
/// byte order preserved. Bijective: decoding the output reproduces `input`
/// exactly.
pub fn hex_encode(input: &str) -> String {
    hex::encode(input.as_bytes())
}
