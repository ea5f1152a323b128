use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::CUSTOM_TIMEFRAME_DAYS;

/// The symbolic period a goal is scoped to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Weekly,
    Monthly,
    Yearly,
    Custom,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Weekly => "weekly",
            Timeframe::Monthly => "monthly",
            Timeframe::Yearly => "yearly",
            Timeframe::Custom => "custom",
        }
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(Timeframe::Weekly),
            "monthly" => Ok(Timeframe::Monthly),
            "yearly" => Ok(Timeframe::Yearly),
            "custom" => Ok(Timeframe::Custom),
            _ => Err(format!("Unknown timeframe: {}", s)),
        }
    }
}

/// Concrete start/end dates a symbolic timeframe resolves to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DateWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Resolves a timeframe to the concrete window containing `today`.
///
/// Weeks run Sunday through Saturday. Custom windows take the supplied
/// dates, defaulting the start to `today` and the end to `today` plus 30
/// days; start/end ordering is not enforced here, callers decide whether an
/// inverted range is acceptable.
pub fn resolve_window(
    timeframe: Timeframe,
    today: NaiveDate,
    custom_start: Option<NaiveDate>,
    custom_end: Option<NaiveDate>,
) -> DateWindow {
    match timeframe {
        Timeframe::Weekly => {
            let start = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
            DateWindow {
                start_date: start,
                end_date: start + Duration::days(6),
            }
        }
        Timeframe::Monthly => DateWindow {
            start_date: today.with_day(1).unwrap_or(today),
            end_date: last_day_of_month(today),
        },
        Timeframe::Yearly => DateWindow {
            start_date: NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
            end_date: NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today),
        },
        Timeframe::Custom => DateWindow {
            start_date: custom_start.unwrap_or(today),
            end_date: custom_end.unwrap_or(today + Duration::days(CUSTOM_TIMEFRAME_DAYS)),
        },
    }
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first_of_next| first_of_next - Duration::days(1))
        .unwrap_or(date)
}
