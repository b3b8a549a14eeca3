//! A single customer entry from the uploaded file.
//!
//! Each line is decoded in two steps. [`RawRecord`] accepts any JSON object
//! and only tags its values as text, number or something else. Converting it
//! into a [`Customer`] then checks presence, types and ranges field by field,
//! so every rejection names the field that caused it.

use std::collections::HashMap;

use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::error::{InviteError, Result};
use crate::geo::Coordinate;

pub const LONGITUDE: &str = "longitude";
pub const LATITUDE: &str = "latitude";
pub const USER_ID: &str = "user_id";
pub const NAME: &str = "name";

const REQUIRED_FIELDS: [&str; 4] = [LONGITUDE, LATITUDE, USER_ID, NAME];

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(String),
    Number(f64),
    Other(IgnoredAny),
}

/// A JSON object with loosely typed values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(HashMap<String, RawValue>);

impl RawRecord {
    pub fn parse(line: &str) -> Result<Self> {
        serde_json::from_str(line).map_err(|e| InviteError::InvalidRecordSyntax {
            record: line.to_string(),
            message: e.to_string(),
        })
    }

    pub fn insert(&mut self, field: impl Into<String>, value: RawValue) {
        self.0.insert(field.into(), value);
    }

    fn has_required_fields(&self) -> Result<()> {
        match REQUIRED_FIELDS.iter().find(|f| !self.0.contains_key(**f)) {
            Some(&field) => Err(InviteError::MissingField { field }),
            None => Ok(()),
        }
    }

    fn text(&self, field: &'static str) -> Result<&str> {
        match self.0.get(field) {
            Some(RawValue::Text(s)) => Ok(s.as_str()),
            Some(_) => Err(InviteError::TypeMismatch {
                field,
                expected: "string",
            }),
            None => Err(InviteError::MissingField { field }),
        }
    }

    fn number(&self, field: &'static str) -> Result<f64> {
        match self.0.get(field) {
            Some(RawValue::Number(n)) => Ok(*n),
            Some(_) => Err(InviteError::TypeMismatch {
                field,
                expected: "number",
            }),
            None => Err(InviteError::MissingField { field }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub user_id: i64,
    pub name: String,
    /// Longitude as uploaded, in decimal degrees.
    pub raw_longitude: String,
    /// Latitude as uploaded, in decimal degrees.
    pub raw_latitude: String,
    pub location: Coordinate,
}

impl Customer {
    /// Parses one line of the upload.
    pub fn from_json(line: &str) -> Result<Self> {
        Self::try_from(RawRecord::parse(line)?)
    }
}

impl TryFrom<RawRecord> for Customer {
    type Error = InviteError;

    fn try_from(record: RawRecord) -> Result<Self> {
        record.has_required_fields()?;

        let raw_longitude = record.text(LONGITUDE)?;
        let raw_latitude = record.text(LATITUDE)?;
        let user_id = record.number(USER_ID)?;
        let name = record.text(NAME)?;

        let longitude = parse_degrees(LONGITUDE, raw_longitude)?;
        let latitude = parse_degrees(LATITUDE, raw_latitude)?;
        let location = Coordinate::from_degrees(longitude, latitude)?;

        Ok(Self {
            // truncates toward zero
            user_id: user_id as i64,
            name: name.to_string(),
            raw_longitude: raw_longitude.to_string(),
            raw_latitude: raw_latitude.to_string(),
            location,
        })
    }
}

fn parse_degrees(field: &'static str, value: &str) -> Result<f64> {
    value.parse().map_err(|_| InviteError::NumericParse {
        field,
        value: value.to_string(),
    })
}
