//! Compact binary container for persisted payloads.
//!
//! The JSON document is the canonical artifact, but it inflates every bit
//! to a full character. The frame packs the bit sequence eight to a byte
//! and protects everything with a CRC32:
//!
//! ```text
//! +------------------+
//! | Magic (4 bytes)  |  0x48 0x55 0x46 0x31 ("HUF1")
//! +------------------+
//! | table_len (4)    |  u32 LE, length of code table JSON
//! +------------------+
//! | bit_len (8)      |  u64 LE, exact number of encoded bits
//! +------------------+
//! | crc32 (4)        |  u32 LE, checksum over everything below + lengths
//! +------------------+
//! | code table JSON  |  table_len bytes
//! +------------------+
//! | packed bits      |  ceil(bit_len / 8) bytes, MSB-first, zero-padded
//! +------------------+
//! ```
//!
//! # CRC Coverage
//!
//! The CRC32 covers table_len, bit_len, the code table bytes, and the
//! packed bits, detecting corruption in either header or data.

use crate::bitio::{pack_bits, unpack_bits};
use crate::code::CodeTable;
use crate::error::{Error, PayloadError, Result};
use crate::payload::Payload;

/// Magic number for payload frames: "HUF1"
const MAGIC: [u8; 4] = [0x48, 0x55, 0x46, 0x31];

/// Size of the frame header in bytes
const HEADER_SIZE: usize = 20;

/// Serialize a payload into the framed binary form.
pub fn write_frame(payload: &Payload) -> Result<Vec<u8>> {
    let table_bytes =
        serde_json::to_vec(&payload.codes).map_err(PayloadError::Json)?;
    let (packed, bit_len) = pack_bits(&payload.encoded)?;

    let table_len = table_bytes.len() as u32;
    let crc32 = compute_crc(table_len, bit_len, &table_bytes, &packed);

    let mut frame = Vec::with_capacity(HEADER_SIZE + table_bytes.len() + packed.len());
    frame.extend_from_slice(&MAGIC);
    frame.extend_from_slice(&table_len.to_le_bytes());
    frame.extend_from_slice(&bit_len.to_le_bytes());
    frame.extend_from_slice(&crc32.to_le_bytes());
    frame.extend_from_slice(&table_bytes);
    frame.extend_from_slice(&packed);

    Ok(frame)
}

/// Parse a framed binary payload.
///
/// # Errors
/// - `PayloadError::FrameTooShort` if the buffer cannot hold the header or
///   the declared contents
/// - `PayloadError::InvalidMagic` if the magic number does not match
/// - `Error::Crc` if the checksum does not validate
/// - `PayloadError::BitLenMismatch` if the declared bit count exceeds the
///   packed bytes
pub fn read_frame(bytes: &[u8]) -> Result<Payload> {
    if bytes.len() < HEADER_SIZE {
        return Err(PayloadError::FrameTooShort {
            required: HEADER_SIZE,
            actual: bytes.len(),
        }
        .into());
    }

    let magic: [u8; 4] = bytes[0..4].try_into().unwrap();
    if magic != MAGIC {
        return Err(PayloadError::InvalidMagic {
            expected: MAGIC,
            actual: magic,
        }
        .into());
    }

    let table_len = u32::from_le_bytes(bytes[4..8].try_into().unwrap());
    let bit_len = u64::from_le_bytes(bytes[8..16].try_into().unwrap());
    let crc32 = u32::from_le_bytes(bytes[16..20].try_into().unwrap());

    let packed_len = bit_len.div_ceil(8) as usize;
    let expected_size = HEADER_SIZE + table_len as usize + packed_len;
    if bytes.len() != expected_size {
        return Err(PayloadError::FrameTooShort {
            required: expected_size,
            actual: bytes.len(),
        }
        .into());
    }

    let table_end = HEADER_SIZE + table_len as usize;
    let table_bytes = &bytes[HEADER_SIZE..table_end];
    let packed = &bytes[table_end..];

    let computed = compute_crc(table_len, bit_len, table_bytes, packed);
    if computed != crc32 {
        return Err(Error::Crc {
            expected: crc32,
            actual: computed,
        });
    }

    let codes: CodeTable =
        serde_json::from_slice(table_bytes).map_err(PayloadError::Json)?;
    let encoded = unpack_bits(packed, bit_len)?;

    Ok(Payload { codes, encoded })
}

fn compute_crc(table_len: u32, bit_len: u64, table_bytes: &[u8], packed: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&table_len.to_le_bytes());
    hasher.update(&bit_len.to_le_bytes());
    hasher.update(table_bytes);
    hasher.update(packed);
    hasher.finalize()
}
