//! Caching layout converter.

use std::collections::HashMap;
use std::sync::RwLock;

#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

use crate::convert::convert_format;
#[cfg(feature = "chrono")]
use crate::render::format_datetime;

/// A thread-safe converter that memoizes converted layouts.
///
/// Conversion output depends only on the input string, so each distinct
/// layout is tokenized at most once per instance under normal operation
/// and served from the cache afterwards. The cache is owned by the
/// instance; independent instances have independent caches.
#[derive(Debug, Default)]
pub struct Converter {
    cache: RwLock<HashMap<String, String>>,
}

impl Converter {
    /// Creates a converter with an empty cache.
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Converts a Moment.js layout to a Go layout, consulting the cache
    /// first.
    ///
    /// Two callers racing on an uncached layout may both compute it; the
    /// last write wins, and both computations produce the same string, so
    /// readers never observe anything but the pure conversion result.
    pub fn convert(&self, moment_layout: &str) -> String {
        {
            let cache = self.cache.read().unwrap();
            if let Some(go_layout) = cache.get(moment_layout) {
                return go_layout.clone();
            }
        }

        // Compute outside the lock; hold the write guard only for the insert.
        let go_layout = convert_format(moment_layout);

        let mut cache = self.cache.write().unwrap();
        cache.insert(moment_layout.to_string(), go_layout.clone());
        go_layout
    }

    /// Formats a timestamp using a Moment.js layout.
    ///
    /// The layout conversion is cached; the rendered text is not, since it
    /// varies with the timestamp.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use momentgo::Converter;
    ///
    /// let converter = Converter::new();
    /// let t = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    /// assert_eq!(converter.format("YYYY-MM-DD", &t), "2023-01-01");
    /// ```
    #[cfg(feature = "chrono")]
    pub fn format<Tz: TimeZone>(&self, moment_layout: &str, t: &DateTime<Tz>) -> String {
        let go_layout = self.convert(moment_layout);
        format_datetime(t, &go_layout)
    }

    /// Populates the cache entry for a layout without returning it, for
    /// prewarming ahead of latency-sensitive calls.
    pub fn precompute(&self, moment_layout: &str) {
        self.convert(moment_layout);
    }
}
