// FAQ API types.
// Defines the records served by the FAQ endpoint and the body used to create one.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};

/// A question/answer pair as stored by the server.
///
/// Missing or `null` fields decode as empty strings so one odd record does not
/// sink the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(rename = "_id", default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answer: String,
    /// ISO-8601 creation timestamp assigned by the server.
    #[serde(rename = "createdAt", default, deserialize_with = "null_as_empty")]
    pub created_at: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Faq {
    /// Creation date in the local time zone.
    pub fn created_date(&self) -> String {
        self.created_date_in(&Local)
    }

    /// Creation date in the given time zone, or the raw timestamp if it does not parse.
    pub fn created_date_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        match DateTime::parse_from_rfc3339(&self.created_at) {
            Ok(dt) => dt.with_timezone(tz).format("%Y-%m-%d").to_string(),
            Err(_) => self.created_at.clone(),
        }
    }
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFaq {
    pub question: String,
    pub answer: String,
}
