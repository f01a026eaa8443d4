//! Bit packing between the logical '0'/'1' string and packed bytes.
//!
//! The logical payload keeps bits as characters; the binary frame packs
//! them eight to a byte, MSB-first, with the final partial byte padded with
//! trailing zeros. Padding bits are indistinguishable from data, so the
//! exact bit count travels alongside the packed bytes and the unpacked
//! logical sequence round-trips identically.

use crate::error::{CodecError, PayloadError, Result};

/// Accumulates single bits into packed bytes, MSB-first.
///
/// # Invariants
/// - `bit_buffer` holds fewer than 8 bits at all times
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_buffer: u8,
    bit_count: u8,
    total_bits: u64,
}

impl BitWriter {
    /// Create a writer with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single bit.
    pub fn push(&mut self, bit: bool) {
        self.bit_buffer = (self.bit_buffer << 1) | bit as u8;
        self.bit_count += 1;
        self.total_bits += 1;
        if self.bit_count == 8 {
            self.bytes.push(self.bit_buffer);
            self.bit_buffer = 0;
            self.bit_count = 0;
        }
    }

    /// Finish writing, padding the final partial byte with zeros.
    ///
    /// Returns the packed bytes and the exact number of bits written.
    pub fn finish(mut self) -> (Vec<u8>, u64) {
        if self.bit_count > 0 {
            self.bytes.push(self.bit_buffer << (8 - self.bit_count));
        }
        (self.bytes, self.total_bits)
    }
}

/// Reads single bits back out of a packed buffer, MSB-first.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    position: u64,
    bit_len: u64,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `data` that yields exactly `bit_len` bits.
    ///
    /// # Errors
    /// Returns `PayloadError::BitLenMismatch` if `bit_len` exceeds the
    /// buffer's capacity.
    pub fn new(data: &'a [u8], bit_len: u64) -> Result<Self> {
        let capacity = data.len() as u64 * 8;
        if bit_len > capacity {
            return Err(PayloadError::BitLenMismatch {
                declared: bit_len,
                capacity,
            }
            .into());
        }
        Ok(Self {
            data,
            position: 0,
            bit_len,
        })
    }

    /// Read the next bit, or `None` once `bit_len` bits have been read.
    pub fn next_bit(&mut self) -> Option<bool> {
        if self.position >= self.bit_len {
            return None;
        }
        let byte = self.data[(self.position / 8) as usize];
        let offset = (self.position % 8) as u8;
        self.position += 1;
        Some((byte >> (7 - offset)) & 1 == 1)
    }
}

/// Pack a '0'/'1' string into bytes plus its exact bit count.
///
/// # Errors
/// Returns `CodecError::InvalidBit` on any other character.
pub fn pack_bits(bits: &str) -> Result<(Vec<u8>, u64)> {
    let mut writer = BitWriter::new();
    for (position, ch) in bits.chars().enumerate() {
        match ch {
            '0' => writer.push(false),
            '1' => writer.push(true),
            other => {
                return Err(CodecError::InvalidBit {
                    found: other,
                    position,
                }
                .into())
            }
        }
    }
    Ok(writer.finish())
}

/// Unpack `bit_len` bits from packed bytes back into a '0'/'1' string.
///
/// # Errors
/// Returns `PayloadError::BitLenMismatch` if `bit_len` exceeds the buffer.
pub fn unpack_bits(bytes: &[u8], bit_len: u64) -> Result<String> {
    let mut reader = BitReader::new(bytes, bit_len)?;
    let mut bits = String::with_capacity(bit_len as usize);
    while let Some(bit) = reader.next_bit() {
        bits.push(if bit { '1' } else { '0' });
    }
    Ok(bits)
}
