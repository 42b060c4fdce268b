//! Container envelope: the 16-byte big-endian prefix on every capture file.
//!
//! ```text
//! [tag:       4 bytes]  "SVS " (trailing space)
//! [sequence:  4 bytes]  u32, big-endian
//! [timestamp: 8 bytes]  u64, big-endian, ns since GPS epoch
//! ```

use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

use super::error::{DecodeError, ReadContext};
use super::timestamp::Timestamp;

pub const MAGIC: [u8; 4] = *b"SVS ";
pub const ENVELOPE_LEN: usize = 16;
/// Sequence value reserved for the introductory record.
pub const INTRO_SEQUENCE: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Envelope {
    pub sequence: u32,
    pub timestamp: Timestamp,
}

impl Envelope {
    pub fn is_intro(&self) -> bool {
        self.sequence == INTRO_SEQUENCE
    }
}

/// Outcome of reading the envelope. An unknown tag is a skip, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Header {
    Recognized(Envelope),
    NotRecognized,
}

/// Read exactly [`ENVELOPE_LEN`] bytes. On success the reader sits on the first payload byte.
pub fn read_envelope<R: Read>(r: &mut R) -> Result<Header, DecodeError> {
    let mut raw = [0u8; ENVELOPE_LEN];
    r.read_exact(&mut raw).field("envelope")?;

    if raw[..4] != MAGIC {
        return Ok(Header::NotRecognized);
    }
    let mut rest = &raw[4..];
    let sequence = rest.read_u32::<BigEndian>().field("envelope sequence")?;
    let ticks = rest.read_u64::<BigEndian>().field("envelope timestamp")?;
    Ok(Header::Recognized(Envelope {
        sequence,
        timestamp: Timestamp(ticks),
    }))
}
