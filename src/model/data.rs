//! Calendar data source - the read-only mapping the renderer consumes
//!
//! Fixtures are YAML files mapping `YYYY-MM-DD` dates to meeting lists or
//! lead counts. The renderer only ever looks records up by date; nothing
//! here is mutated after load.
//!
//! A demo fixture is embedded at compile time (`data/demo.yaml`) so the
//! app runs without any arguments.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer};

/// Embedded demo fixture (March 2024 sample data)
pub const DEMO_YAML: &str = include_str!("../../data/demo.yaml");

/// A single scheduled meeting
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Meeting {
    /// Time of day, parsed from "HH:MM" (seconds optional)
    #[serde(deserialize_with = "deserialize_time")]
    pub time: NaiveTime,
    /// Company the meeting is with
    pub company: String,
}

fn deserialize_time<'de, D>(deserializer: D) -> std::result::Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(&s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
        .map_err(|e| serde::de::Error::custom(format!("invalid time {:?}: {}", s, e)))
}

fn deserialize_month<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid month {:?}: {}", s, e))),
    }
}

/// Headline figures shown in the panel chrome
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MetricSummary {
    /// Formatted revenue figure (e.g. "$47,280")
    pub revenue: String,
    pub new_leads: u32,
    pub meetings: u32,
    pub closed: u32,
}

impl Default for MetricSummary {
    fn default() -> Self {
        Self {
            revenue: "$47,280".to_string(),
            new_leads: 24,
            meetings: 8,
            closed: 5,
        }
    }
}

/// The injected data source: date-keyed meeting and lead records.
///
/// Deterministic lookup by date; a day's meetings are kept in
/// chronological order for display.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarData {
    /// First day of the month this fixture describes ("YYYY-MM" in YAML).
    /// When absent, the app falls back to the current month.
    #[serde(default, deserialize_with = "deserialize_month")]
    pub month: Option<NaiveDate>,
    #[serde(default)]
    meetings: BTreeMap<NaiveDate, Vec<Meeting>>,
    #[serde(default)]
    leads: BTreeMap<NaiveDate, u32>,
    /// Panel headline figures; fixtures may override the demo defaults
    #[serde(default)]
    pub summary: MetricSummary,
}

impl CalendarData {
    /// Parse a fixture from YAML, sorting each day's meetings by time
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let mut data: CalendarData =
            serde_yaml::from_str(yaml).context("failed to parse calendar fixture")?;
        for meetings in data.meetings.values_mut() {
            meetings.sort_by_key(|m| m.time);
        }
        Ok(data)
    }

    /// Load a fixture from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read fixture {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("invalid fixture {}", path.display()))
    }

    /// The embedded demo fixture
    pub fn demo() -> Self {
        Self::from_yaml(DEMO_YAML).expect("embedded demo fixture is valid")
    }

    /// Meetings scheduled on a date, in chronological order
    pub fn meetings_on(&self, date: NaiveDate) -> Option<&[Meeting]> {
        self.meetings.get(&date).map(|v| v.as_slice())
    }

    /// The first (earliest) meeting on a date
    pub fn first_meeting(&self, date: NaiveDate) -> Option<&Meeting> {
        self.meetings.get(&date).and_then(|v| v.first())
    }

    /// Whether a date has at least one meeting record
    pub fn has_meetings(&self, date: NaiveDate) -> bool {
        self.meetings.get(&date).is_some_and(|v| !v.is_empty())
    }

    /// Lead count recorded for a date, if any
    pub fn lead_count(&self, date: NaiveDate) -> Option<u32> {
        self.leads.get(&date).copied()
    }

    /// Number of dates carrying meeting records
    pub fn meeting_day_count(&self) -> usize {
        self.meetings.len()
    }
}

/// Indicator glow intensity for a lead count: `min(count / 4, 1)`.
///
/// Zero counts produce no indicator at all, so callers gate on
/// `lead_count` returning a positive value before scaling.
pub fn leads_intensity(count: u32) -> f32 {
    (count as f32 / 4.0).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_demo_fixture_parses() {
        let data = CalendarData::demo();
        assert_eq!(data.month, Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(data.has_meetings(date(3)));
        assert_eq!(data.lead_count(date(4)), Some(3));
    }

    #[test]
    fn test_demo_march_third_is_meta_at_ten() {
        let data = CalendarData::demo();
        let meeting = data.first_meeting(date(3)).unwrap();
        assert_eq!(meeting.company, "Meta");
        assert_eq!(meeting.time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    }

    #[test]
    fn test_meetings_sorted_chronologically() {
        let yaml = "
meetings:
  2024-03-10:
    - { time: \"15:00\", company: Late }
    - { time: \"09:30\", company: Early }
";
        let data = CalendarData::from_yaml(yaml).unwrap();
        let meetings = data.meetings_on(date(10)).unwrap();
        assert_eq!(meetings[0].company, "Early");
        assert_eq!(meetings[1].company, "Late");
    }

    #[test]
    fn test_missing_date_has_no_records() {
        let data = CalendarData::demo();
        assert!(!data.has_meetings(date(31)));
        assert_eq!(data.meetings_on(date(31)), None);
        assert_eq!(data.lead_count(date(31)), None);
    }

    #[test]
    fn test_time_accepts_seconds() {
        let yaml = "
meetings:
  2024-03-10:
    - { time: \"15:00:30\", company: Acme }
";
        let data = CalendarData::from_yaml(yaml).unwrap();
        let m = data.first_meeting(date(10)).unwrap();
        assert_eq!(m.time, NaiveTime::from_hms_opt(15, 0, 30).unwrap());
    }

    #[test]
    fn test_invalid_time_is_rejected() {
        let yaml = "
meetings:
  2024-03-10:
    - { time: \"25:99\", company: Acme }
";
        assert!(CalendarData::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        assert!(CalendarData::from_yaml("month: not-a-month").is_err());
    }

    #[test]
    fn test_empty_fixture_is_valid() {
        let data = CalendarData::from_yaml("{}").unwrap();
        assert_eq!(data.month, None);
        assert_eq!(data.meeting_day_count(), 0);
    }

    #[test]
    fn test_summary_defaults() {
        let data = CalendarData::from_yaml("{}").unwrap();
        assert_eq!(data.summary.revenue, "$47,280");
        assert_eq!(data.summary.new_leads, 24);
        assert_eq!(data.summary.meetings, 8);
        assert_eq!(data.summary.closed, 5);
    }

    #[test]
    fn test_summary_override() {
        let data = CalendarData::from_yaml("summary: { revenue: \"$9,000\", closed: 2 }").unwrap();
        assert_eq!(data.summary.revenue, "$9,000");
        assert_eq!(data.summary.closed, 2);
        assert_eq!(data.summary.meetings, 8);
    }

    #[test]
    fn test_leads_intensity_scaling() {
        assert_eq!(leads_intensity(2), 0.5);
        assert_eq!(leads_intensity(4), 1.0);
        assert_eq!(leads_intensity(9), 1.0);
        assert_eq!(leads_intensity(1), 0.25);
    }
}
