//! Presentation helpers for dates and tag lists.

use chrono::{DateTime, FixedOffset};

use crate::error::DateError;

/// Rendered in place of a missing or unreadable creation date.
pub const UNKNOWN_DATE: &str = "Date unknown";

/// `MMMM d, yyyy`.
const DISPLAY_FORMAT: &str = "%B %-d, %Y";

/// Fallback for offsets written without a colon (`+0530`).
const COMPACT_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Parse an API timestamp such as `2023-05-01T12:00:00.000Z`.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, DateError> {
    let trimmed = raw.trim();
    DateTime::parse_from_rfc3339(trimmed)
        .or_else(|_| DateTime::parse_from_str(trimmed, COMPACT_OFFSET_FORMAT))
        .map_err(|err| DateError {
            raw: raw.to_string(),
            reason: err.to_string(),
        })
}

/// Render a creation timestamp as `May 1, 2023`.
///
/// The calendar day is taken in the timestamp's own offset so the output does
/// not depend on the viewer's time zone.
pub fn display_date(created_at: Option<&str>) -> String {
    let Some(raw) = created_at else {
        return UNKNOWN_DATE.to_string();
    };
    match parse_timestamp(raw) {
        Ok(parsed) => parsed.format(DISPLAY_FORMAT).to_string(),
        Err(err) => {
            tracing::warn!(error = %err, "unreadable article timestamp");
            UNKNOWN_DATE.to_string()
        },
    }
}

/// One renderable tag label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLabel {
    /// Stable list key; tags are not unique so the position is part of it.
    pub key: String,
    /// Tag text as authored.
    pub text: String,
}

/// Drop blank tags and key the rest by text and position, keeping order.
pub fn visible_tags(tags: &[String]) -> Vec<TagLabel> {
    tags.iter()
        .filter(|tag| !tag.trim().is_empty())
        .enumerate()
        .map(|(index, tag)| TagLabel {
            key: format!("{tag}-{index}"),
            text: tag.clone(),
        })
        .collect()
}
