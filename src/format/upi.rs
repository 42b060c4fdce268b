//! User-packet-info identifier: fixed 32-byte buffer, zero padded.

use std::fmt;

pub const UPI_LEN: usize = 32;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Upi([u8; UPI_LEN]);

impl Upi {
    pub fn new(bytes: [u8; UPI_LEN]) -> Self {
        Upi(bytes)
    }

    /// Build from text, zero-padding (or cutting) to the fixed width.
    pub fn from_text(s: &str) -> Self {
        let mut buf = [0u8; UPI_LEN];
        let n = s.len().min(UPI_LEN);
        buf[..n].copy_from_slice(&s.as_bytes()[..n]);
        Upi(buf)
    }

    pub fn as_bytes(&self) -> &[u8; UPI_LEN] {
        &self.0
    }

    /// Content bytes with zero fill removed from both ends.
    pub fn trimmed(&self) -> &[u8] {
        let start = self.0.iter().position(|&b| b != 0).unwrap_or(UPI_LEN);
        let end = self.0.iter().rposition(|&b| b != 0).map_or(start, |i| i + 1);
        &self.0[start..end]
    }

    /// Trimmed content as text; invalid UTF-8 is replaced rather than rejected.
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(self.trimmed()).into_owned()
    }
}

impl fmt::Display for Upi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl fmt::Debug for Upi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Upi({:?})", self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_padding_dropped() {
        assert_eq!(Upi::from_text("FOO").to_text(), "FOO");
    }

    #[test]
    fn all_zero_is_empty() {
        assert_eq!(Upi::new([0; UPI_LEN]).to_text(), "");
    }

    #[test]
    fn interior_zero_kept() {
        let mut raw = [0u8; UPI_LEN];
        raw[..3].copy_from_slice(b"A\0B");
        assert_eq!(Upi::new(raw).trimmed(), b"A\0B");
    }

    #[test]
    fn full_width_has_no_padding() {
        let s = "X".repeat(UPI_LEN + 4);
        assert_eq!(Upi::from_text(&s).to_text().len(), UPI_LEN);
    }
}
