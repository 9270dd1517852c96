//! Timezone references.

use chrono::{FixedOffset, Local, Offset, Utc};
use chrono_tz::Tz;

use crate::error::LocationError;

/// A timezone reference that can report its UTC offset at the current
/// instant.
///
/// This is the only external capability the converter consumes. It is
/// implemented for the chrono zone types, for IANA zones from `chrono_tz`,
/// and for zone names (`"Europe/Berlin"`), where resolution can fail.
pub trait Location {
    /// Returns the offset from UTC in seconds east, as of now.
    fn current_utc_offset(&self) -> Result<i32, LocationError>;
}

impl Location for Utc {
    fn current_utc_offset(&self) -> Result<i32, LocationError> {
        Ok(0)
    }
}

impl Location for FixedOffset {
    fn current_utc_offset(&self) -> Result<i32, LocationError> {
        Ok(self.local_minus_utc())
    }
}

impl Location for Local {
    fn current_utc_offset(&self) -> Result<i32, LocationError> {
        Ok(Local::now().offset().local_minus_utc())
    }
}

impl Location for Tz {
    fn current_utc_offset(&self) -> Result<i32, LocationError> {
        Ok(Utc::now().with_timezone(self).offset().fix().local_minus_utc())
    }
}

impl Location for str {
    /// Resolves an IANA zone name such as `"Asia/Tokyo"`.
    fn current_utc_offset(&self) -> Result<i32, LocationError> {
        let tz: Tz = self.parse().map_err(|_| LocationError::UnknownTimeZone {
            name: self.to_string(),
        })?;
        tz.current_utc_offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_is_zero() {
        assert_eq!(Utc.current_utc_offset(), Ok(0));
    }

    #[test]
    fn test_unknown_zone_name() {
        let err = "Atlantis/Capital".current_utc_offset().unwrap_err();
        assert_eq!(
            err,
            LocationError::UnknownTimeZone {
                name: "Atlantis/Capital".to_string()
            }
        );
    }
}
