//! Binary layout of capture files: envelope, packet metadata, and their field codecs.

pub mod envelope;
pub mod error;
pub mod metadata;
pub mod timestamp;
pub mod upi;

pub use envelope::{ENVELOPE_LEN, Envelope, Header, INTRO_SEQUENCE, MAGIC, read_envelope};
pub use error::{DecodeError, ReadContext};
pub use metadata::{METADATA_LEN, PacketMetadata};
pub use timestamp::{Timestamp, gps_epoch};
pub use upi::{UPI_LEN, Upi};
