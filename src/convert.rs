//! Stateless layout conversion.

use crate::tokens::TOKEN_TABLE;

#[cfg(feature = "chrono")]
use crate::error::LocationError;
#[cfg(feature = "chrono")]
use crate::location::Location;

/// Converts a Moment.js date/time format string to a Go layout string.
///
/// The input is scanned left to right. At each position the token table is
/// tried in order and the first matching rule is substituted; characters
/// that start no token (separators, literal text) are copied through
/// unchanged. Every string is valid input, so this cannot fail.
///
/// ```
/// use momentgo::convert_format;
///
/// assert_eq!(convert_format("YYYY-MM-DD"), "2006-01-02");
/// assert_eq!(convert_format("HH:mm:ss"), "15:04:05");
/// ```
pub fn convert_format(moment_format: &str) -> String {
    let mut out = String::with_capacity(moment_format.len());
    let mut rest = moment_format;

    while !rest.is_empty() {
        match TOKEN_TABLE.iter().find(|r| rest.starts_with(r.moment)) {
            Some(r) => {
                out.push_str(r.go);
                rest = &rest[r.moment.len()..];
            }
            None => {
                let ch = rest.chars().next().unwrap(); // rest is non-empty
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    out
}

/// Converts a Moment.js layout to a Go layout and appends the location's
/// UTC offset as a literal ` HH:MM` suffix (`-` prefixed when west of UTC).
///
/// The offset is taken at the current instant, not at the instant a
/// timestamp will later be formatted with the layout, so the suffix can be
/// off by the DST delta for historical or future dates. Callers rely on
/// this behavior; do not resolve the offset per formatted timestamp.
#[cfg(feature = "chrono")]
pub fn convert_layout_with_location<L>(
    moment_layout: &str,
    location: &L,
) -> Result<String, LocationError>
where
    L: Location + ?Sized,
{
    let offset = location.current_utc_offset()?;
    let minutes = offset.abs() / 60;
    let sign = if offset < 0 { "-" } else { "" };

    let mut go_layout = convert_format(moment_layout);
    go_layout.push_str(&format!(" {}{:02}:{:02}", sign, minutes / 60, minutes % 60));
    Ok(go_layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(convert_format(""), "");
    }

    #[test]
    fn test_no_tokens_passes_through() {
        assert_eq!(convert_format("40 knot run, OK!?"), "40 knot run, OK!?");
    }

    #[test]
    fn test_multibyte_literals_pass_through() {
        assert_eq!(convert_format("YYYY年MM月DD日"), "2006年01月02日");
    }
}
