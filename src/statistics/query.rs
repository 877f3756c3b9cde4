use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::Bin;
use crate::error::{ChartError, ChartResult};

/// Query payload understood by the statistics endpoints.
///
/// Unset fields are omitted; the endpoint treats them as wildcards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatisticsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl StatisticsQuery {
    pub fn to_payload(&self) -> ChartResult<String> {
        serde_json::to_string(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize statistics query: {e}"))
        })
    }
}

/// Aggregation window of a statistics chart. The window decides the bin
/// shape: hours of a day, days of a month, months of a year, or years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum QueryScope {
    Day { date: NaiveDate },
    Month { year: i32, month: u32 },
    Year { year: i32 },
    All,
}

impl QueryScope {
    #[must_use]
    pub fn day(date: NaiveDate) -> Self {
        Self::Day { date }
    }

    #[must_use]
    pub fn month_of(date: NaiveDate) -> Self {
        Self::Month {
            year: date.year(),
            month: date.month(),
        }
    }

    #[must_use]
    pub fn year_of(date: NaiveDate) -> Self {
        Self::Year { year: date.year() }
    }

    #[must_use]
    pub fn query(self) -> StatisticsQuery {
        match self {
            Self::Day { date } => StatisticsQuery {
                day: Some(date.day()),
                month: Some(date.month()),
                year: Some(date.year()),
            },
            Self::Month { year, month } => StatisticsQuery {
                day: None,
                month: Some(month),
                year: Some(year),
            },
            Self::Year { year } => StatisticsQuery {
                day: None,
                month: None,
                year: Some(year),
            },
            Self::All => StatisticsQuery::default(),
        }
    }

    /// Bins the endpoint reports for this window. `All` depends on the data
    /// on disk and yields an empty list.
    pub fn expected_bins(self) -> ChartResult<Vec<Bin>> {
        match self {
            Self::Day { .. } => Ok((0..24).map(Bin::Index).collect()),
            Self::Month { year, month } => {
                let days = days_in_month(year, month)?;
                Ok((1..=i64::from(days)).map(Bin::Index).collect())
            }
            Self::Year { .. } => Ok((1..=12u8)
                .filter_map(|number| Month::try_from(number).ok())
                .map(|month| Bin::Label(month_abbreviation(month).to_owned()))
                .collect()),
            Self::All => Ok(Vec::new()),
        }
    }
}

fn days_in_month(year: i32, month: u32) -> ChartResult<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        ChartError::InvalidData(format!("invalid statistics month: {year}-{month}"))
    })?;
    let next = first
        .checked_add_months(chrono::Months::new(1))
        .ok_or_else(|| ChartError::InvalidData(format!("month out of range: {year}-{month}")))?;
    Ok(next.signed_duration_since(first).num_days() as u32)
}

fn month_abbreviation(month: Month) -> &'static str {
    &month.name()[..3]
}
