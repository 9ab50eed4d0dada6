use std::collections::BTreeMap;

use chrono::{Months, NaiveDate};

use super::model::{month_label, Measure, Record};

// ---------------------------------------------------------------------------
// Last 12 months vs previous 12 months
// ---------------------------------------------------------------------------

/// Which trailing window a month falls into, relative to the latest month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// `(latest − 12 months, latest]`
    Last,
    /// `(latest − 24 months, latest − 12 months]`
    Previous,
}

impl Window {
    pub fn label(self) -> &'static str {
        match self {
            Window::Last => "Last 12 Months",
            Window::Previous => "Previous 12 Months",
        }
    }
}

/// Classify `date` against the windows anchored on `latest`.
pub fn window_of(date: NaiveDate, latest: NaiveDate) -> Option<Window> {
    let one_year_ago = latest.checked_sub_months(Months::new(12))?;
    let two_years_ago = latest.checked_sub_months(Months::new(24))?;
    if date > one_year_ago && date <= latest {
        Some(Window::Last)
    } else if date > two_years_ago && date <= one_year_ago {
        Some(Window::Previous)
    } else {
        None
    }
}

/// Year-over-year change for one month label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YoyChange {
    /// `(last − previous) / previous × 100`
    Change(f64),
    /// One of the windows has no data for this month.
    MissingPeriod,
    /// The previous value is zero, so no ratio exists.
    ZeroBaseline,
}

impl YoyChange {
    fn between(last: Option<f64>, previous: Option<f64>) -> Self {
        match (last, previous) {
            (Some(_), Some(p)) if p == 0.0 => YoyChange::ZeroBaseline,
            (Some(l), Some(p)) => YoyChange::Change((l - p) / p * 100.0),
            _ => YoyChange::MissingPeriod,
        }
    }

    pub fn percent(self) -> Option<f64> {
        match self {
            YoyChange::Change(pct) => Some(pct),
            YoyChange::MissingPeriod | YoyChange::ZeroBaseline => None,
        }
    }
}

/// One calendar month, both windows overlaid.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    /// Month of year, 1-12.
    pub month: u32,
    pub last_period_value: Option<f64>,
    pub previous_period_value: Option<f64>,
    pub yoy: YoyChange,
}

impl ComparisonRow {
    pub fn label(&self) -> &'static str {
        month_label(self.month)
    }

    pub fn value(&self, window: Window) -> Option<f64> {
        match window {
            Window::Last => self.last_period_value,
            Window::Previous => self.previous_period_value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodComparison {
    pub measure: Measure,
    pub latest_date: NaiveDate,
    /// First month inside the last window.
    pub last_window_start: NaiveDate,
    /// First month inside the previous window.
    pub previous_window_start: NaiveDate,
    /// Jan → Dec, only months present in at least one window.
    pub rows: Vec<ComparisonRow>,
}

/// Compare the last 12 months against the 12 before them, by month label.
///
/// Returns `None` when there is nothing to anchor on (no records).
pub fn compare_periods<'a, I>(records: I, measure: Measure) -> Option<PeriodComparison>
where
    I: IntoIterator<Item = &'a Record>,
    I::IntoIter: Clone,
{
    let records = records.into_iter();
    let latest_date = records.clone().map(|r| r.full_date).max()?;

    let mut last: BTreeMap<u32, f64> = BTreeMap::new();
    let mut previous: BTreeMap<u32, f64> = BTreeMap::new();
    for rec in records {
        let bucket = match window_of(rec.full_date, latest_date) {
            Some(Window::Last) => &mut last,
            Some(Window::Previous) => &mut previous,
            None => continue,
        };
        *bucket.entry(rec.month).or_insert(0.0) += measure.value(rec);
    }

    let rows = (1..=12)
        .filter_map(|month| {
            let last_value = last.get(&month).copied();
            let previous_value = previous.get(&month).copied();
            if last_value.is_none() && previous_value.is_none() {
                return None;
            }
            Some(ComparisonRow {
                month,
                last_period_value: last_value,
                previous_period_value: previous_value,
                yoy: YoyChange::between(last_value, previous_value),
            })
        })
        .collect();

    Some(PeriodComparison {
        measure,
        latest_date,
        last_window_start: latest_date.checked_sub_months(Months::new(11))?,
        previous_window_start: latest_date.checked_sub_months(Months::new(23))?,
        rows,
    })
}
