use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// The weekly grid shows Monday through Saturday; Sunday entries are kept in
/// the buckets but never rendered.
pub const DISPLAY_DAYS: [&str; 6] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("expected 5 '/'-separated fields, got {0}")]
    FieldCount(usize),
    #[error("invalid notification minutes: {0}")]
    Notification(String),
    #[error("field contains the '/' delimiter: {0}")]
    EmbeddedDelimiter(String),
}

/// A named time-boxed entry tied to one day. `day` is an `M-D-YYYY` string
/// on the monthly screen and a weekday name on the weekly one; the codec
/// does not care which.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub start_hour: String,
    pub end_hour: String,
    pub notifications: Option<u32>,
    pub day: String,
}

impl Activity {
    /// Encodes to the stored `name/start/end/notification/day` line. A
    /// missing notification becomes the literal `null`. Fields holding the
    /// delimiter would corrupt the line, so they are rejected outright.
    pub fn encode(&self) -> Result<String, CodecError> {
        for field in [&self.name, &self.start_hour, &self.end_hour, &self.day] {
            if field.contains('/') {
                return Err(CodecError::EmbeddedDelimiter(field.clone()));
            }
        }
        let notifications = match self.notifications {
            Some(minutes) => minutes.to_string(),
            None => "null".to_string(),
        };
        Ok(format!(
            "{}/{}/{}/{}/{}",
            self.name, self.start_hour, self.end_hour, notifications, self.day
        ))
    }

    pub fn decode(entry: &str) -> Result<Self, CodecError> {
        let fields: Vec<&str> = entry.split('/').collect();
        if fields.len() != 5 {
            return Err(CodecError::FieldCount(fields.len()));
        }
        let notifications = match fields[3] {
            "null" => None,
            raw => Some(
                raw.parse::<u32>()
                    .map_err(|_| CodecError::Notification(raw.to_string()))?,
            ),
        };
        Ok(Activity {
            name: fields[0].to_string(),
            start_hour: fields[1].to_string(),
            end_hour: fields[2].to_string(),
            notifications,
            day: fields[4].to_string(),
        })
    }

    /// `"<name> <start> - <end>"`, with the notification notice tacked on
    /// when one is set. Wording kept exactly as shipped.
    pub fn display_line(&self) -> String {
        let line = format!("{} {} - {}", self.name, self.start_hour, self.end_hour);
        match self.notifications {
            Some(minutes) => format!(
                "{} App will notificate {} minutes before {}",
                line, minutes, self.start_hour
            ),
            None => line,
        }
    }
}

/// Decodes a whole plan, dropping lines the codec cannot read.
pub fn decode_plan(plan: &[String]) -> Vec<Activity> {
    plan.iter()
        .filter_map(|entry| match Activity::decode(entry) {
            Ok(activity) => Some(activity),
            Err(err) => {
                tracing::warn!(entry = %entry, "skipping undecodable plan entry: {err}");
                None
            }
        })
        .collect()
}

/// Exact string match on the stored day field. `3-01-2024` and `3-1-2024`
/// are different days as far as the plan is concerned.
pub fn activities_for_date(plan: &[String], date: &str) -> Vec<Activity> {
    decode_plan(plan)
        .into_iter()
        .filter(|activity| activity.day == date)
        .collect()
}

/// The daily summary line the calendar screen shows. `None` means the
/// record had no plan at all.
pub fn activities_text_for_date(plan: Option<&[String]>, date: &str) -> String {
    let Some(plan) = plan else {
        return "No activities found.".to_string();
    };
    let formatted: Vec<String> = activities_for_date(plan, date)
        .iter()
        .map(Activity::display_line)
        .collect();
    if formatted.is_empty() {
        "You don't have activities for this day.".to_string()
    } else {
        format!("Activities for {}: {}", date, formatted.join(", "))
    }
}

/// Activities bucketed by the literal day string stored in each entry.
#[derive(Debug, Default)]
pub struct WeekPlan {
    buckets: HashMap<String, Vec<Activity>>,
}

impl WeekPlan {
    pub fn from_plan(plan: &[String]) -> Self {
        let mut buckets: HashMap<String, Vec<Activity>> = DAY_NAMES
            .iter()
            .map(|day| (day.to_string(), Vec::new()))
            .collect();
        for activity in decode_plan(plan) {
            buckets.entry(activity.day.clone()).or_default().push(activity);
        }
        WeekPlan { buckets }
    }

    pub fn activities_for(&self, day: &str) -> &[Activity] {
        self.buckets.get(day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Monday through Saturday, in grid order.
    pub fn display_days(&self) -> impl Iterator<Item = (&'static str, &[Activity])> + '_ {
        DISPLAY_DAYS.iter().map(|day| (*day, self.activities_for(day)))
    }
}
