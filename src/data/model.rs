use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Measure – one of the three summable columns
// ---------------------------------------------------------------------------

/// A numeric sales measure. Labels mirror the source spreadsheet headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Measure {
    CaseEquivalents,
    UnitsSold,
    NetPrice,
}

impl Measure {
    pub const ALL: [Measure; 3] = [Measure::CaseEquivalents, Measure::UnitsSold, Measure::NetPrice];

    /// Column header used in the source file and on chart legends.
    pub fn label(self) -> &'static str {
        match self {
            Measure::CaseEquivalents => "Case Equivs",
            Measure::UnitsSold => "Units Sold",
            Measure::NetPrice => "Net Price",
        }
    }

    /// Read this measure from a record.
    pub fn value(self, record: &Record) -> f64 {
        match self {
            Measure::CaseEquivalents => record.case_equivalents,
            Measure::UnitsSold => record.units_sold,
            Measure::NetPrice => record.net_price,
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short English month label (`Jan`..`Dec`) for a month number 1-12.
pub fn month_label(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_LABELS.get(i as usize))
        .copied()
        .unwrap_or("???")
}

// ---------------------------------------------------------------------------
// Record – one row of the sales sheet
// ---------------------------------------------------------------------------

/// A single sales row. [`Record::new`] is the only constructor that checks
/// `full_date` equals the first day of `(year, month)`; code that builds or
/// mutates the fields directly must keep that invariant itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub item_name: String,
    pub distributor: String,
    pub state: String,
    pub year: i32,
    pub month: u32,
    pub full_date: NaiveDate,
    pub case_equivalents: f64,
    pub units_sold: f64,
    pub net_price: f64,
}

impl Record {
    /// Returns `None` when `(year, month)` is not a calendar month.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        item_name: impl Into<String>,
        distributor: impl Into<String>,
        state: impl Into<String>,
        year: i32,
        month: u32,
        case_equivalents: f64,
        units_sold: f64,
        net_price: f64,
    ) -> Option<Self> {
        let full_date = first_of_month(year, month)?;
        Some(Record {
            item_name: item_name.into(),
            distributor: distributor.into(),
            state: state.into(),
            year,
            month,
            full_date,
            case_equivalents,
            units_sold,
            net_price,
        })
    }
}

/// First calendar day of `(year, month)`.
pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

// ---------------------------------------------------------------------------
// SalesDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed filter universes.
#[derive(Debug, Clone, Default)]
pub struct SalesDataset {
    /// All rows, in file order.
    pub records: Vec<Record>,
    pub items: BTreeSet<String>,
    pub distributors: BTreeSet<String>,
    pub states: BTreeSet<String>,
    /// Inclusive `(min, max)` year; `None` for an empty dataset.
    pub year_bounds: Option<(i32, i32)>,
}

impl SalesDataset {
    /// Build the option sets from the loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut items = BTreeSet::new();
        let mut distributors = BTreeSet::new();
        let mut states = BTreeSet::new();
        let mut year_bounds: Option<(i32, i32)> = None;

        for rec in &records {
            items.insert(rec.item_name.clone());
            distributors.insert(rec.distributor.clone());
            states.insert(rec.state.clone());
            year_bounds = Some(match year_bounds {
                Some((lo, hi)) => (lo.min(rec.year), hi.max(rec.year)),
                None => (rec.year, rec.year),
            });
        }

        SalesDataset {
            records,
            items,
            distributors,
            states,
            year_bounds,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
