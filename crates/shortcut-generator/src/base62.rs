//! Base-62 encoding of byte strings.

/// The base-62 alphabet: digits, then upper-case, then lower-case.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Encodes a byte string in base-62, most significant digit first.
///
/// The input is treated as a big-endian base-256 number. Leading zero
/// bytes are preserved as leading `'0'` digits (the same convention
/// base-58 encoders use with `'1'`), so the encoded length never drops
/// below the input length.
pub fn encode(bytes: &[u8]) -> String {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();

    // Base-62 digits of the remaining bytes, least significant first.
    let mut digits: Vec<u8> = Vec::with_capacity(bytes.len() * 2);
    for &byte in &bytes[zeros..] {
        let mut carry = byte as u32;
        for digit in digits.iter_mut() {
            carry += (*digit as u32) << 8;
            *digit = (carry % 62) as u8;
            carry /= 62;
        }
        while carry > 0 {
            digits.push((carry % 62) as u8);
            carry /= 62;
        }
    }

    let mut out = String::with_capacity(zeros + digits.len());
    out.extend(std::iter::repeat('0').take(zeros));
    out.extend(digits.iter().rev().map(|&d| ALPHABET[d as usize] as char));
    out
}

/// The maximum number of base-62 digits that encoding `byte_len` bytes
/// can produce: `ceil(byte_len * 8 / log2(62))`.
pub fn max_encoded_len(byte_len: usize) -> usize {
    ((byte_len * 8) as f64 / 62f64.log2()).ceil() as usize
}
