//! Tick timestamps: nanoseconds since the GPS epoch (1980-01-06T00:00:00Z).

use chrono::{DateTime, TimeDelta, Timelike, Utc};
use std::fmt;

const NANOS_PER_SEC: u64 = 1_000_000_000;
/// 1980-01-06T00:00:00Z as Unix seconds.
const GPS_EPOCH_UNIX_SECS: i64 = 315_964_800;

/// Unsigned 64-bit nanosecond tick count since [`gps_epoch`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub u64);

pub fn gps_epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(GPS_EPOCH_UNIX_SECS, 0).unwrap_or_default()
}

impl Timestamp {
    /// Absolute UTC time. Full u64 range (~584 years) stays well inside chrono's bounds.
    pub fn to_datetime(self) -> DateTime<Utc> {
        let secs = (self.0 / NANOS_PER_SEC) as i64;
        let nanos = (self.0 % NANOS_PER_SEC) as i64;
        gps_epoch() + TimeDelta::seconds(secs) + TimeDelta::nanoseconds(nanos)
    }

    /// `2024-03-01T12:30:05.25Z`: fractional seconds trimmed of trailing zeros, dot dropped when whole.
    pub fn to_precise(self) -> String {
        let dt = self.to_datetime();
        let mut out = dt.format("%Y-%m-%dT%H:%M:%S").to_string();
        let nanos = dt.nanosecond();
        if nanos > 0 {
            let frac = format!("{:09}", nanos);
            out.push('.');
            out.push_str(frac.trim_end_matches('0'));
        }
        out.push('Z');
        out
    }

    /// `20240301_123005`, safe for filenames.
    pub fn to_compact(self) -> String {
        self.to_datetime().format("%Y%m%d_%H%M%S").to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_precise())
    }
}
