use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use entity::time_record::{self, RecordStatus};
use serde::{Deserialize, Deserializer, Serialize};

/// Staff-created record. A supplied `status` marks the caller as validator.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RTimeRecordCreate {
    pub employee_id: i32,
    pub date: NaiveDate,
    #[serde(deserialize_with = "de_time")]
    pub start_time: NaiveTime,
    #[serde(deserialize_with = "de_time")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub description: String,
    pub status: Option<RecordStatus>,
}

/// Employee-created record, always for the session's own employee id.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ROwnTimeRecordCreate {
    pub date: NaiveDate,
    #[serde(deserialize_with = "de_time")]
    pub start_time: NaiveTime,
    #[serde(deserialize_with = "de_time")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub description: String,
}

/// Either a decision (`status` only) or a full edit (`date`, `startTime` and
/// `endTime` together, optionally with `description`/`status`).
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RTimeRecordUpdate {
    pub status: Option<RecordStatus>,
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de_opt_time")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "de_opt_time")]
    pub end_time: Option<NaiveTime>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecordQuery {
    pub status: Option<RecordStatus>,
    pub employee_id: Option<i32>,
    pub unit_id: Option<i32>,
    /// Inclusive lower bound on the record date.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the record date.
    pub to: Option<NaiveDate>,
}

pub struct DBTimeRecordCreate {
    pub employee_id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub description: String,
    pub status: RecordStatus,
    pub validator_id: Option<i32>,
}

/// Parsed form of `RTimeRecordUpdate` once its shape has been checked.
pub enum RecordChange {
    Decide {
        status: RecordStatus,
        validator_id: i32,
    },
    Edit {
        date: NaiveDate,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        description: Option<String>,
        decision: Option<(RecordStatus, i32)>,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordEmployee {
    pub name: String,
    pub cpf: String,
    pub unit_name: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct TimeRecordView {
    #[serde(flatten)]
    pub record: time_record::Model,
    /// Worked time as `HH:MMh`.
    pub duration: String,
    pub employee: Option<RecordEmployee>,
}

/// Approved and pending totals, computed on read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HourSummary {
    pub approved_minutes: i64,
    pub pending_minutes: i64,
    pub approved: String,
    pub pending: String,
}

fn parse_time(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S").or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
}

/// Accepts both "HH:MM" (form inputs) and "HH:MM:SS".
fn de_time<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
    let raw = String::deserialize(d)?;
    parse_time(raw.trim()).map_err(serde::de::Error::custom)
}

fn de_opt_time<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
    match Option::<String>::deserialize(d)? {
        Some(raw) if !raw.trim().is_empty() => parse_time(raw.trim())
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
