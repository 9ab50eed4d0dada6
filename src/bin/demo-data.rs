use anyhow::{Context, Result};
use chrono::{Datelike, Months, NaiveDate};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

const OUTPUT_PATH: &str = "27_Month_rolling.xlsx";
const SHEET_NAME: &str = "Rolling Periods 27 Month";
const MONTHS: u32 = 27;

const HEADERS: [&str; 8] = [
    "Item Names",
    "Distributors",
    "State",
    "Year",
    "Month",
    "Case Equivs",
    "Units Sold",
    "Net Price",
];

/// (item, bottles per case, price per bottle, first month offset it sells in)
const ITEMS: [(&str, f64, f64, u32); 4] = [
    ("Agave Blanco 750ml", 12.0, 24.0, 0),
    ("Agave Reposado 750ml", 12.0, 31.0, 0),
    ("Smoked Rye 750ml", 6.0, 42.0, 5),
    ("Citrus Gin 1L", 12.0, 19.5, 18),
];
const DISTRIBUTORS: [&str; 3] = ["Southern Spirits", "Lone Star Beverage", "Pacific Wine & Spirits"];
const STATES: [&str; 4] = ["TX", "CA", "NM", "AZ"];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Higher sales in summer and December.
fn seasonality(month: u32) -> f64 {
    match month {
        6..=8 => 1.25,
        12 => 1.4,
        1 | 2 => 0.8,
        _ => 1.0,
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let last_month = NaiveDate::from_ymd_opt(2025, 3, 1).context("anchor date")?;
    let first_month = last_month
        .checked_sub_months(Months::new(MONTHS - 1))
        .context("start of rolling period")?;

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let year_format = Format::new().set_num_format("yyyy-mm-dd");
    let money_format = Format::new().set_num_format("#,##0.00");

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    for (col, title) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }

    let mut row: u32 = 1;
    for offset in 0..MONTHS {
        let date = first_month
            .checked_add_months(Months::new(offset))
            .context("month in rolling period")?;
        let year_cell = ExcelDateTime::from_ymd(date.year() as u16, 1, 1)?;
        // Mild year-over-year growth so the comparison view has signal.
        let trend = 1.0 + offset as f64 * 0.01;

        for &(item, per_case, price, starts_at) in &ITEMS {
            if offset < starts_at {
                continue;
            }
            for distributor in DISTRIBUTORS {
                for state in STATES {
                    // Not every distributor carries every item in every state.
                    if rng.chance(0.3) {
                        continue;
                    }
                    let base = 20.0 + rng.next_f64() * 80.0;
                    let units = (base * seasonality(date.month()) * trend).round();
                    let cases = units / per_case;
                    let net = units * price * (0.9 + rng.next_f64() * 0.2);

                    sheet.write_string(row, 0, item)?;
                    sheet.write_string(row, 1, distributor)?;
                    sheet.write_string(row, 2, state)?;
                    sheet.write_datetime_with_format(row, 3, &year_cell, &year_format)?;
                    sheet.write_number(row, 4, date.month())?;
                    sheet.write_number(row, 5, (cases * 100.0).round() / 100.0)?;
                    sheet.write_number(row, 6, units)?;
                    sheet.write_number_with_format(row, 7, (net * 100.0).round() / 100.0, &money_format)?;
                    row += 1;
                }
            }
        }
    }

    workbook
        .save(OUTPUT_PATH)
        .with_context(|| format!("writing {OUTPUT_PATH}"))?;

    println!(
        "Wrote {} rows ({} months ending {}) to {OUTPUT_PATH}",
        row - 1,
        MONTHS,
        last_month.format("%b %Y")
    );
    Ok(())
}
