//! Packet metadata record: flat, little-endian, no padding. Follows the envelope on data records.

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Read;

use super::error::{DecodeError, ReadContext};
use super::timestamp::Timestamp;
use super::upi::{UPI_LEN, Upi};

/// Wire width of [`PacketMetadata`] in bytes.
pub const METADATA_LEN: usize = 8 + 4 + 8 + 1 + 2 + 2 + 1 + 2 + 2 + 2 + 2 + 2 + 2 + 2 + 1 + UPI_LEN;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PacketMetadata {
    pub acquisition: Timestamp,
    pub sequence: u32,
    pub auxiliary: u64,
    pub source: u8,
    pub x: u16,
    pub y: u16,
    pub format: u8,
    pub drop: u16,
    pub offset_x: u16,
    pub size_x: u16,
    pub offset_y: u16,
    pub size_y: u16,
    pub scale_x: u16,
    pub scale_y: u16,
    pub ratio: u8,
    pub upi: Upi,
}

impl PacketMetadata {
    /// Read one record. The whole record is pulled in a single fixed-size read,
    /// so a short stream fails as [`DecodeError::Truncated`] before any field is decoded.
    pub fn read_from<R: Read>(r: &mut R) -> Result<Self, DecodeError> {
        let mut raw = [0u8; METADATA_LEN];
        r.read_exact(&mut raw).field("packet metadata")?;
        Self::decode(&raw)
    }

    fn decode(raw: &[u8; METADATA_LEN]) -> Result<Self, DecodeError> {
        let mut c = &raw[..];
        let acquisition = Timestamp(c.read_u64::<LittleEndian>().field("acquisition-time")?);
        let sequence = c.read_u32::<LittleEndian>().field("originator-seq-no")?;
        let auxiliary = c.read_u64::<LittleEndian>().field("auxiliary-time")?;
        let source = c.read_u8().field("originator-id")?;
        let x = c.read_u16::<LittleEndian>().field("source-x-size")?;
        let y = c.read_u16::<LittleEndian>().field("source-y-size")?;
        let format = c.read_u8().field("format")?;
        let drop = c.read_u16::<LittleEndian>().field("fdrp")?;
        let offset_x = c.read_u16::<LittleEndian>().field("roi-x-offset")?;
        let size_x = c.read_u16::<LittleEndian>().field("roi-x-size")?;
        let offset_y = c.read_u16::<LittleEndian>().field("roi-y-offset")?;
        let size_y = c.read_u16::<LittleEndian>().field("roi-y-size")?;
        let scale_x = c.read_u16::<LittleEndian>().field("scale-x-size")?;
        let scale_y = c.read_u16::<LittleEndian>().field("scale-y-size")?;
        let ratio = c.read_u8().field("scale-far")?;
        let mut upi = [0u8; UPI_LEN];
        c.read_exact(&mut upi).field("user-packet-info")?;
        debug_assert!(c.is_empty(), "METADATA_LEN out of step with field reads");
        Ok(PacketMetadata {
            acquisition,
            sequence,
            auxiliary,
            source,
            x,
            y,
            format,
            drop,
            offset_x,
            size_x,
            offset_y,
            size_y,
            scale_x,
            scale_y,
            ratio,
            upi: Upi::new(upi),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_width() {
        assert_eq!(METADATA_LEN, 73);
    }

    #[test]
    fn short_record_is_truncated() {
        let raw = vec![0u8; METADATA_LEN - 1];
        let err = PacketMetadata::read_from(&mut raw.as_slice()).unwrap_err();
        assert!(err.is_truncated());
    }

    #[test]
    fn reader_left_at_sample_block() {
        let mut raw = vec![0u8; METADATA_LEN];
        raw[8] = 7;
        raw.extend_from_slice(&[2, 5, 0]);
        let mut r = raw.as_slice();
        let meta = PacketMetadata::read_from(&mut r).unwrap();
        assert_eq!(meta.sequence, 7);
        assert_eq!(r, &[2u8, 5, 0][..]);
    }
}
