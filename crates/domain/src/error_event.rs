//! Client-submitted playback error reports and their date partitioning.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use gateview_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const PARTITION_DATE_FORMAT: &str = "%Y-%m-%d";

/// Category of a playback failure reported by the monitoring UI.
///
/// The set is open: unknown categories are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorType {
    /// The player could not establish a connection.
    ConnectionFailed,
    /// The WHEP offer POST was rejected or failed.
    WhepPostFailed,
    /// An established connection was closed.
    ConnectionClosed,
    /// Any category not known to this service.
    Other(String),
}

impl ErrorType {
    /// Returns the wire value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ConnectionFailed => "connection_failed",
            Self::WhepPostFailed => "whep_post_failed",
            Self::ConnectionClosed => "connection_closed",
            Self::Other(value) => value.as_str(),
        }
    }
}

impl From<String> for ErrorType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "connection_failed" => Self::ConnectionFailed,
            "whep_post_failed" => Self::WhepPostFailed,
            "connection_closed" => Self::ConnectionClosed,
            _ => Self::Other(value),
        }
    }
}

impl From<ErrorType> for String {
    fn from(value: ErrorType) -> Self {
        match value {
            ErrorType::Other(value) => value,
            known => known.as_str().to_owned(),
        }
    }
}

impl Display for ErrorType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// One structured error report, persisted verbatim once accepted.
///
/// Field order is the persisted record layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEvent {
    /// Client-side timestamp, ISO-8601. Preserved as submitted.
    pub timestamp: String,
    /// Stream the player was attached to.
    pub stream_id: String,
    /// Failure category.
    pub error_type: ErrorType,
    /// Human-readable failure description.
    pub error_message: String,
    /// HTTP status returned by the media server, when there was one.
    pub status_code: Option<i64>,
    /// WHEP endpoint the player used.
    pub whep_url: Option<String>,
    /// Browser user agent.
    pub user_agent: Option<String>,
    /// Free-form client environment details.
    pub client_info: Option<Map<String, Value>>,
}

impl ErrorEvent {
    /// Resolves the partition this event belongs to.
    ///
    /// Fails with a validation error when the timestamp is not ISO-8601.
    pub fn partition_date(&self) -> AppResult<PartitionDate> {
        PartitionDate::from_timestamp(self.timestamp.as_str())
    }
}

/// Parses an ISO-8601 instant into UTC.
///
/// Accepts extended and basic forms, hour, minute or second precision, a `.`
/// or `,` fraction and `Z`, `±hh`, `±hhmm` or `±hh:mm` offsets. Timestamps
/// without an offset and bare dates are interpreted as UTC.
pub fn parse_event_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    parse_iso8601(trimmed).ok_or_else(|| {
        AppError::Validation(format!("timestamp '{value}' is not a valid ISO-8601 instant"))
    })
}

fn parse_iso8601(value: &str) -> Option<DateTime<Utc>> {
    let (date_part, time_part) = match value.find(['T', 't', ' ']) {
        Some(index) => (&value[..index], Some(&value[index + 1..])),
        None => (value, None),
    };

    let date = parse_calendar_date(date_part)?;
    let Some(time_part) = time_part else {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    };

    let (clock, offset) = split_utc_offset(time_part)?;
    let local = date.and_time(parse_clock(clock)?);

    match offset {
        Some(offset) => local
            .and_local_timezone(offset)
            .single()
            .map(|instant| instant.with_timezone(&Utc)),
        None => Some(local.and_utc()),
    }
}

fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    if value.len() == 8 && value.bytes().all(|byte| byte.is_ascii_digit()) {
        let year = value[..4].parse().ok()?;
        let month = value[4..6].parse().ok()?;
        let day = value[6..].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    NaiveDate::parse_from_str(value, PARTITION_DATE_FORMAT).ok()
}

/// Splits a trailing `Z` or numeric offset from the clock part.
fn split_utc_offset(value: &str) -> Option<(&str, Option<FixedOffset>)> {
    if let Some(clock) = value.strip_suffix(['Z', 'z']) {
        return Some((clock, FixedOffset::east_opt(0)));
    }

    let Some(sign_index) = value.rfind(['+', '-']) else {
        return Some((value, None));
    };

    let (clock, offset) = value.split_at(sign_index);
    let sign = if offset.starts_with('-') { -1 } else { 1 };
    let body = &offset[1..];
    let digits = match body.split_once(':') {
        Some((hours, minutes)) if hours.len() == 2 && minutes.len() == 2 => {
            format!("{hours}{minutes}")
        }
        Some(_) => return None,
        None => body.to_owned(),
    };
    if !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    let (hours, minutes): (i32, i32) = match digits.len() {
        2 => (digits.parse().ok()?, 0),
        4 => (digits[..2].parse().ok()?, digits[2..].parse().ok()?),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }

    Some((
        clock,
        Some(FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))?),
    ))
}

/// Parses `hh`, `hh:mm`, `hh:mm:ss` or their basic forms, with an optional
/// `.` or `,` fraction on the last component.
fn parse_clock(value: &str) -> Option<NaiveTime> {
    let normalized = value.replace(',', ".");
    let (whole, fraction) = match normalized.find('.') {
        Some(index) => normalized.split_at(index),
        None => (normalized.as_str(), ""),
    };

    let extended = if whole.contains(':') {
        whole.to_owned()
    } else {
        if !whole.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
        match whole.len() {
            2 => format!("{whole}:00"),
            4 => format!("{}:{}", &whole[..2], &whole[2..]),
            6 => format!("{}:{}:{}", &whole[..2], &whole[2..4], &whole[4..]),
            _ => return None,
        }
    };

    let components = extended.split(':').count();
    if extended.split(':').any(|component| component.len() != 2)
        || (!fraction.is_empty() && components != 3)
    {
        return None;
    }

    let format = match components {
        2 => "%H:%M",
        3 => "%H:%M:%S%.f",
        _ => return None,
    };
    NaiveTime::parse_from_str(&format!("{extended}{fraction}"), format).ok()
}

/// UTC calendar date identifying one log partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartitionDate(NaiveDate);

impl PartitionDate {
    /// Creates a partition date from a calendar date.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Resolves the UTC calendar date of an ISO-8601 timestamp.
    pub fn from_timestamp(timestamp: &str) -> AppResult<Self> {
        parse_event_timestamp(timestamp).map(|instant| Self(instant.date_naive()))
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl Display for PartitionDate {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0.format(PARTITION_DATE_FORMAT))
    }
}

impl FromStr for PartitionDate {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(value, PARTITION_DATE_FORMAT)
            .map(Self)
            .map_err(|error| {
                AppError::Validation(format!("invalid partition date '{value}': {error}"))
            })
    }
}

/// Validated upper bound on the number of events returned by a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLimit(usize);

impl LogLimit {
    /// Creates a limit, rejecting zero and clamping to `max`.
    pub fn new(requested: usize, max: usize) -> AppResult<Self> {
        if requested == 0 {
            return Err(AppError::Validation(
                "limit must be a positive integer".to_owned(),
            ));
        }

        Ok(Self(requested.min(max.max(1))))
    }

    /// Returns the effective limit.
    #[must_use]
    pub fn get(&self) -> usize {
        self.0
    }
}
