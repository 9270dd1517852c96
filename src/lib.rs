//! momentgo - Moment.js date/time formats as Go reference layouts
//!
//! This crate rewrites format strings written with Moment.js tokens
//! (`YYYY`, `MM`, `DD`, ...) into Go's reference-date layout notation
//! (`2006`, `01`, `02`, ...), and can render chrono timestamps through the
//! converted layouts.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use momentgo::{convert_format, Converter};
//!
//! assert_eq!(convert_format("YYYY-MM-DDTHH:mm:ssZZ"), "2006-01-02T15:04:05-0700");
//!
//! let converter = Converter::new();
//! let t = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
//! assert_eq!(converter.format("YYYY-MM-DD", &t), "2023-01-01");
//! ```

pub mod error;
pub mod tokens;

mod convert;
mod converter;
#[cfg(feature = "chrono")]
mod location;
#[cfg(feature = "chrono")]
mod render;

pub use convert::convert_format;
#[cfg(feature = "chrono")]
pub use convert::convert_layout_with_location;
pub use converter::Converter;
pub use error::LocationError;
#[cfg(feature = "chrono")]
pub use location::Location;
#[cfg(feature = "chrono")]
pub use render::format_datetime;
pub use tokens::{TokenRule, TOKEN_TABLE};
