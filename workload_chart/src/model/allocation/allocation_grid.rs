use crate::common::*;

use crate::utils_modules::io_utils::*;

#[doc = r#"
    Effort per category per day: `rows[category][day]`.

    Out-of-range writes are dropped instead of panicking.
"#]
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationGrid {
    rows: Vec<Vec<f64>>,
    num_days: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct AllocationSummary {
    peak: f64,
    near_term_total: f64,
    window_total: f64,
}

impl AllocationGrid {
    pub fn new(num_categories: usize, num_days: usize) -> Self {
        AllocationGrid {
            rows: vec![vec![0.0; num_days]; num_categories],
            num_days,
        }
    }

    pub fn num_days(&self) -> usize {
        self.num_days
    }

    pub fn add(&mut self, category: usize, day: i64, amount: f64) {
        if day < 0 || day as usize >= self.num_days {
            return;
        }

        if let Some(row) = self.rows.get_mut(category) {
            row[day as usize] += amount;
        }
    }

    #[cfg(test)]
    pub fn cell(&self, category: usize, day: usize) -> f64 {
        self.rows
            .get(category)
            .and_then(|row| row.get(day))
            .copied()
            .unwrap_or(0.0)
    }

    #[doc = "Row for one category, values rounded to two decimals for display"]
    pub fn rounded_row(&self, category: usize) -> Vec<f64> {
        self.rows
            .get(category)
            .map(|row| row.iter().map(|v| round2(*v)).collect())
            .unwrap_or_else(|| vec![0.0; self.num_days])
    }

    #[doc = "Sum across categories for each day"]
    pub fn day_totals(&self) -> Vec<f64> {
        (0..self.num_days)
            .map(|day| round2(self.rows.iter().map(|row| row[day]).sum()))
            .collect()
    }

    #[doc = r#"
        * `peak`            - largest single-day total
        * `near_term_total` - effort on days `< short_window`
        * `window_total`    - effort over the whole window
    "#]
    pub fn summarize(&self, short_window: usize) -> AllocationSummary {
        let totals: Vec<f64> = self.day_totals();

        let peak: f64 = totals.iter().copied().fold(0.0, f64::max);
        let near_term_total: f64 = round2(totals.iter().take(short_window).sum());
        let window_total: f64 = round2(totals.iter().sum());

        AllocationSummary::new(peak, near_term_total, window_total)
    }
}
