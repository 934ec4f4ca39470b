use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::config::{MAX_RATING, MIN_RATING};
use crate::error::ValidationError;

/// Server-assigned complaint identifier.
///
/// The backend derives it from the creation time in milliseconds, so it is
/// unique per complaint but carries no meaning on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplaintId(u64);

impl ComplaintId {
    pub fn from_u64(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Complaint urgency. Also the grouping key of the admin triage board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Board order: most urgent first.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "High" => Ok(Priority::High),
            "Medium" => Ok(Priority::Medium),
            "Low" => Ok(Priority::Low),
            "" => Err(ValidationError::MissingField("priority")),
            other => Err(ValidationError::InvalidPriority(other.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complaint lifecycle. The only transition is `Pending -> Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplaintStatus {
    #[default]
    Pending,
    Resolved,
}

impl ComplaintStatus {
    /// Wire form, also used in student list badges.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "pending",
            ComplaintStatus::Resolved => "resolved",
        }
    }

    /// Capitalised form for badges on the admin views.
    pub fn label(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "Pending",
            ComplaintStatus::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which rating widget produced a feedback rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackCategory {
    Star,
    Emoji,
}

impl FeedbackCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackCategory::Star => "star",
            FeedbackCategory::Emoji => "emoji",
        }
    }

    /// Glyph prefixed to ratings in the history list.
    pub fn glyph(&self) -> &'static str {
        match self {
            FeedbackCategory::Star => "\u{2b50}",
            FeedbackCategory::Emoji => "\u{1f60a}",
        }
    }
}

impl fmt::Display for FeedbackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rating in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (MIN_RATING..=MAX_RATING).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidRating(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dashboard a successful login routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
}

/// A UTC instant as exchanged with the backend.
///
/// Accepts RFC 3339 (`2025-03-01T10:00:00.000Z`, what browsers emit) and naive
/// ISO 8601 without an offset (`2025-03-01T10:00:00.123456`, what the backend
/// stores). Naive values are the backend's local wall-clock time and are read
/// in the local zone. Always written as RFC 3339 with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }
        let naive = s
            .parse::<NaiveDateTime>()
            .map_err(|e| format!("invalid timestamp '{}': {}", s, e))?;
        // A wall-clock time skipped by a DST jump has no local reading
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| Self(local.with_timezone(&Utc)))
            .ok_or_else(|| format!("timestamp '{}' does not exist in the local zone", s))
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Local calendar date in `YYYY-MM-DD`, the format of the date filter input.
    pub fn date_key(&self) -> String {
        self.local().format("%Y-%m-%d").to_string()
    }

    pub fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    pub fn to_wire(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw).map_err(serde::de::Error::custom)
    }
}
