use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::model::{first_of_month, Measure, Record};

/// Measure sums for one `(year, month)`.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyAggregate {
    pub year: i32,
    pub month: u32,
    pub full_date: NaiveDate,
    pub sums: Totals,
}

impl MonthlyAggregate {
    pub fn get(&self, measure: Measure) -> f64 {
        self.sums.get(measure)
    }
}

/// Row count and measure sums over a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub rows: usize,
    pub case_equivalents: f64,
    pub units_sold: f64,
    pub net_price: f64,
}

impl Totals {
    pub fn add(&mut self, rec: &Record) {
        self.rows += 1;
        self.case_equivalents += rec.case_equivalents;
        self.units_sold += rec.units_sold;
        self.net_price += rec.net_price;
    }

    pub fn get(&self, measure: Measure) -> f64 {
        match measure {
            Measure::CaseEquivalents => self.case_equivalents,
            Measure::UnitsSold => self.units_sold,
            Measure::NetPrice => self.net_price,
        }
    }
}

/// Sum every measure over all `records`. Empty input gives zeros.
pub fn totals<'a>(records: impl IntoIterator<Item = &'a Record>) -> Totals {
    records.into_iter().fold(Totals::default(), |mut acc, rec| {
        acc.add(rec);
        acc
    })
}

/// Group by `(year, month)` and sum each measure, oldest month first.
pub fn monthly_summary<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<MonthlyAggregate> {
    let mut groups: BTreeMap<(i32, u32), Totals> = BTreeMap::new();
    for rec in records {
        groups.entry((rec.year, rec.month)).or_default().add(rec);
    }

    groups
        .into_iter()
        .filter_map(|((year, month), sums)| {
            Some(MonthlyAggregate {
                year,
                month,
                full_date: first_of_month(year, month)?,
                sums,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(year: i32, month: u32, cases: f64, units: f64, net: f64) -> Record {
        Record::new("Gin", "Acme", "TX", year, month, cases, units, net).unwrap()
    }

    #[test]
    fn three_groups_in_chronological_order() {
        let records = vec![
            rec(2024, 3, 1.0, 10.0, 100.0),
            rec(2023, 12, 2.0, 20.0, 200.0),
            rec(2024, 3, 0.5, 5.0, 50.0),
            rec(2024, 1, 4.0, 40.0, 400.0),
            rec(2023, 12, 1.0, 1.0, 1.0),
        ];
        let summary = monthly_summary(&records);
        assert_eq!(summary.len(), 3);

        let keys: Vec<_> = summary.iter().map(|m| (m.year, m.month)).collect();
        assert_eq!(keys, vec![(2023, 12), (2024, 1), (2024, 3)]);

        assert_eq!(summary[0].sums.case_equivalents, 3.0);
        assert_eq!(summary[0].sums.units_sold, 21.0);
        assert_eq!(summary[0].get(Measure::NetPrice), 201.0);
        assert_eq!(summary[1].get(Measure::NetPrice), 400.0);
        assert_eq!(summary[2].get(Measure::UnitsSold), 15.0);
        assert_eq!(summary[2].full_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn grouped_sums_match_ungrouped_totals() {
        let records: Vec<Record> = (0..40)
            .map(|i| rec(2022 + i / 12, (i % 12 + 1) as u32, i as f64 * 0.25, i as f64, 3.5 * i as f64))
            .chain((0..7).map(|i| rec(2023, 6, 1.0, i as f64, 0.1)))
            .collect();
        let summary = monthly_summary(&records);
        let total = totals(&records);
        for measure in Measure::ALL {
            let grouped: f64 = summary.iter().map(|m| m.get(measure)).sum();
            assert!((grouped - total.get(measure)).abs() < 1e-9, "{measure}");
        }
        assert_eq!(total.rows, 47);

        let grouped_rows: usize = summary.iter().map(|m| m.sums.rows).sum();
        assert_eq!(grouped_rows, total.rows);
        let june_2023 = summary.iter().find(|m| (m.year, m.month) == (2023, 6)).unwrap();
        assert_eq!(june_2023.sums.rows, 8);
    }

    #[test]
    fn empty_input() {
        let records: Vec<Record> = Vec::new();
        assert!(monthly_summary(&records).is_empty());
        assert_eq!(totals(&records), Totals::default());
    }
}
