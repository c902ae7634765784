// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Recording duration on the wire.
//!
//! The registry stores `duracao` as entered, so a record may carry any of
//! `"03:45"`, `"1:02:30"`, `"3.45"`, `"225"` or a bare number. Recognised
//! forms decode to whole seconds and are sent back as `"mm:ss"`. Anything
//! else is kept verbatim and sent back unchanged, so one odd record never
//! fails a whole response.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Duration of a recording.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrackDuration {
    /// A recognised duration, in whole seconds.
    Seconds(u32),
    /// Text the registry holds that is not a recognised duration.
    Unparsed(String),
}

impl TrackDuration {
    /// Interprets registry text. Blank text is no duration at all.
    pub fn from_text(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match parse_duration(trimmed) {
            Ok(seconds) => TrackDuration::Seconds(seconds),
            Err(_) => TrackDuration::Unparsed(text.to_string()),
        })
    }

    /// Total seconds, when the duration was recognised.
    pub fn seconds(&self) -> Option<u32> {
        match self {
            TrackDuration::Seconds(seconds) => Some(*seconds),
            TrackDuration::Unparsed(_) => None,
        }
    }
}

impl From<u32> for TrackDuration {
    fn from(seconds: u32) -> Self {
        TrackDuration::Seconds(seconds)
    }
}

impl fmt::Display for TrackDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackDuration::Seconds(seconds) => f.write_str(&format_mm_ss(*seconds)),
            TrackDuration::Unparsed(text) => f.write_str(text),
        }
    }
}

/// Formats seconds as `mm:ss` (minutes are not capped at 59).
pub fn format_mm_ss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Parses `h:mm:ss`, `m:ss`, `m.ss` or a plain count of seconds.
pub fn parse_duration(text: &str) -> Result<u32, String> {
    let text = text.trim();

    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return text
            .parse()
            .map_err(|_| format!("duration '{}' overflows", text));
    }

    let fields: Vec<&str> = if text.contains(':') {
        text.split(':').collect()
    } else {
        match text.split_once('.') {
            // m.ss always has two second digits; "3.5" is not 3:05.
            Some((minutes, seconds)) if seconds.len() == 2 => vec![minutes, seconds],
            _ => return Err(format!("duration '{}' is not a recognised format", text)),
        }
    };

    let numbers = fields
        .iter()
        .map(|field| field_value(field, text))
        .collect::<Result<Vec<u32>, String>>()?;

    let (hours, minutes, seconds) = match numbers[..] {
        [minutes, seconds] => (0, minutes, seconds),
        [hours, minutes, seconds] if minutes < 60 => (hours, minutes, seconds),
        _ => return Err(format!("duration '{}' is not a recognised format", text)),
    };
    if seconds >= 60 {
        return Err(format!("seconds out of range in duration '{}'", text));
    }

    hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|total| total.checked_add(seconds))
        .ok_or_else(|| format!("duration '{}' overflows", text))
}

fn field_value(field: &str, text: &str) -> Result<u32, String> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("invalid field in duration '{}'", text));
    }
    field
        .parse()
        .map_err(|_| format!("duration '{}' overflows", text))
}

fn is_whole_seconds(number: f64) -> bool {
    number >= 0.0 && number.fract() == 0.0 && number <= f64::from(u32::MAX)
}

impl Serialize for TrackDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TrackDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Seconds(u32),
            Number(f64),
            Text(String),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Seconds(seconds) => Ok(TrackDuration::Seconds(seconds)),
            Wire::Number(number) if is_whole_seconds(number) => {
                Ok(TrackDuration::Seconds(number as u32))
            }
            // 3.45 arrives as a float when the cell was numeric.
            Wire::Number(number) => {
                let text = format!("{:.2}", number);
                Ok(TrackDuration::from_text(&text).unwrap_or(TrackDuration::Unparsed(text)))
            }
            Wire::Text(text) => TrackDuration::from_text(&text)
                .ok_or_else(|| D::Error::custom("blank duration")),
        }
    }
}

/// `#[serde(with)]` adapter for an optional duration; blank text decodes as absent.
pub mod optional {
    use super::TrackDuration;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Option<TrackDuration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<TrackDuration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Text(String),
            Other(TrackDuration),
        }

        match Option::<Wire>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Wire::Text(text)) => Ok(TrackDuration::from_text(&text)),
            Some(Wire::Other(duration)) => Ok(Some(duration)),
        }
    }
}
