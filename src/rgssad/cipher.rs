//! Keystream ciphers used by RGSSAD archives.
//!
//! Everything here is a plain XOR against a keystream derived from a 32-bit
//! key. Version 1 steps its directory key with [`advance`] after every
//! integer and every name byte; version 3 keeps the directory key fixed.
//! File content uses the same step, but only once per 4-byte group, for
//! both versions.
//!
//! The v1 functions take the key by value and hand back the advanced key so
//! the caller owns the key state between calls.

/// Byte written in place of a decoded backslash.
const PATH_SEPARATOR: u8 = b'/';

/// One step of the key generator: `key * 7 + 3` modulo 2^32.
#[inline]
pub fn advance(key: u32) -> u32 {
    key.wrapping_mul(7).wrapping_add(3)
}

/// Fixed v3 directory key derived from the header value.
#[inline]
pub fn v3_directory_key(header_value: u32) -> u32 {
    header_value.wrapping_mul(9).wrapping_add(3)
}

/// Decrypt one v1 directory integer, returning `(plain, next_key)`.
#[inline]
pub fn decrypt_v1_int(input: u32, key: u32) -> (u32, u32) {
    (input ^ key, advance(key))
}

/// Decrypt a v1 file name, returning `(name_bytes, next_key)`.
///
/// The key steps once per byte.
pub fn decrypt_v1_name(input: &[u8], mut key: u32) -> (Vec<u8>, u32) {
    let mut output = Vec::with_capacity(input.len());
    for &byte in input {
        output.push(normalize(byte ^ (key & 0xFF) as u8));
        key = advance(key);
    }
    (output, key)
}

#[inline]
pub fn decrypt_v3_int(input: u32, key: u32) -> u32 {
    input ^ key
}

/// Decrypt a v3 file name. Byte `i` uses byte `i % 4` of the key.
pub fn decrypt_v3_name(input: &[u8], key: u32) -> Vec<u8> {
    input
        .iter()
        .enumerate()
        .map(|(i, &byte)| normalize(byte ^ key_byte(key, i)))
        .collect()
}

/// Decrypt entry content in place.
///
/// Byte `i` uses byte `i % 4` of the running key; the key steps after each
/// complete 4-byte group.
pub fn decrypt_content(buf: &mut [u8], mut key: u32) {
    for chunk in buf.chunks_mut(4) {
        for (i, byte) in chunk.iter_mut().enumerate() {
            *byte ^= key_byte(key, i);
        }
        key = advance(key);
    }
}

#[inline]
fn key_byte(key: u32, index: usize) -> u8 {
    (key >> (8 * (index % 4))) as u8
}

#[inline]
fn normalize(byte: u8) -> u8 {
    if byte == b'\\' { PATH_SEPARATOR } else { byte }
}
