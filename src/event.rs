use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, ErrorKind, Result};

pub const CLOCK_FORMAT: &str = "%H:%M";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Badge colors for the categories offered by the event form. Anything else
// falls back to the configured default color.
static CATEGORY_COLORS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "Music" => "#a855f7",
    "Technology" => "#3b82f6",
    "Community" => "#22c55e",
    "Art" => "#ec4899",
};

pub fn color_for_category(category: &str) -> Option<&'static str> {
    CATEGORY_COLORS.get(category).copied()
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| Error::new(ErrorKind::DateParse, &format!("'{}': {}", s, e)))
}

pub fn parse_clock_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, CLOCK_FORMAT)
        .map_err(|e| Error::new(ErrorKind::TimeParse, &format!("'{}': {}", s, e)))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "clock_serde")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_serde")]
    pub end_time: NaiveTime,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Event {
    pub fn new(
        title: String,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        color: String,
    ) -> Self {
        // An inverted range is stored as-is; the form never checked it.
        if start_time > end_time {
            log::warn!(
                "event '{}' ends before it starts ({} > {})",
                title,
                start_time.format(CLOCK_FORMAT),
                end_time.format(CLOCK_FORMAT)
            );
        }

        Event {
            id: Uuid::new_v4(),
            title,
            date,
            start_time,
            end_time,
            color,
            location: None,
            description: None,
            category: None,
        }
    }

    pub fn with_location(mut self, location: String) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_category(mut self, category: String) -> Self {
        self.category = Some(category);
        self
    }
}

// Wall-clock times serialize as zero-padded "HH:MM". The padded form orders
// lexically the same way the time values order.
pub mod clock_serde {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::CLOCK_FORMAT;

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(CLOCK_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, CLOCK_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn parses_clock_times() {
        assert_eq!(
            parse_clock_time("09:05").unwrap(),
            NaiveTime::from_hms_opt(9, 5, 0).unwrap()
        );

        let err = parse_clock_time("25:99").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::TimeParse));
        assert!(matches!(
            parse_clock_time("noon").unwrap_err().kind,
            ErrorKind::TimeParse
        ));
    }

    #[test]
    fn parses_dates() {
        assert_eq!(
            parse_date("2024-07-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
        );
        assert!(matches!(
            parse_date("15.07.2024").unwrap_err().kind,
            ErrorKind::DateParse
        ));
    }

    #[test]
    fn serde_round_trip_keeps_clock_format() {
        let event = Event::new(
            "Tech Conference".to_string(),
            NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            "#3b82f6".to_string(),
        )
        .with_location("Convention Center".to_string())
        .with_category("Technology".to_string());

        let raw = toml::to_string(&event).unwrap();
        assert!(raw.contains("start_time = \"09:00\""));
        assert!(raw.contains("date = \"2024-03-20\""));

        let parsed: Event = toml::from_str(&raw).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn category_colors() {
        assert_eq!(color_for_category("Music"), Some("#a855f7"));
        assert_eq!(color_for_category("Gardening"), None);
    }
}
