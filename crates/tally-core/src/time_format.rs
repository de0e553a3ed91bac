use std::fmt;

use time::OffsetDateTime;
use time::format_description::{self, OwnedFormatItem};

use crate::error::TimeFormatError;

/// Format description used when nothing else is configured.
pub const DEFAULT_TIME_FORMAT: &str = "[hour]:[minute]:[second]";

/// Parsed `time` format description for the creation-time column.
#[derive(Clone)]
pub struct TimeFormat {
    source: String,
    items: OwnedFormatItem,
}

impl TimeFormat {
    /// Parse a format description such as `"[hour]:[minute]"`.
    ///
    /// # Errors
    /// Returns [`TimeFormatError`] when the description is malformed.
    pub fn parse(source: &str) -> Result<Self, TimeFormatError> {
        let items =
            format_description::parse_owned::<2>(source).map_err(|err| TimeFormatError {
                format: source.to_owned(),
                source: err,
            })?;
        Ok(Self {
            source: source.to_owned(),
            items,
        })
    }

    /// The description this format was parsed from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Render a timestamp. Falls back to the plain clock time if formatting fails.
    #[must_use]
    pub fn render(&self, at: OffsetDateTime) -> String {
        at.format(&self.items)
            .unwrap_or_else(|_| at.time().to_string())
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        let items = format_description::parse_owned::<2>(DEFAULT_TIME_FORMAT)
            .unwrap_or_else(|_| OwnedFormatItem::Compound(Box::new([])));
        Self {
            source: DEFAULT_TIME_FORMAT.to_owned(),
            items,
        }
    }
}

impl fmt::Debug for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TimeFormat").field(&self.source).finish()
    }
}

impl PartialEq for TimeFormat {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for TimeFormat {}
