//! Pure aggregations over a [`Dataset`].
//!
//! Nothing here mutates its input or keeps state between calls; the presentation
//! layer re-runs whichever functions it needs after every zone selection.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Dataset, Transaction};
use crate::types::{Category, Gender, InvalidInput, Month, MonthLabel, ALL_ZONES};

/// Quantity compared by [`month_over_month`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MonthMetric {
    /// Number of transactions.
    Count,
    /// Sum of discounted total prices.
    Revenue
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyFigure {
    pub month: Month,
    pub label: &'static str,
    pub value: Decimal
}

/// Figures for a month and the one before it, ordered by month number.
///
/// A month without transactions has no figure at all, so this holds zero, one
/// or two entries. Use [`MonthOverMonth::current`] and [`MonthOverMonth::previous`]
/// instead of positional access.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthOverMonth {
    pub current_month: Month,
    pub previous_month: Month,
    pub metric: MonthMetric,
    pub label: MonthLabel,
    figures: Vec<MonthlyFigure>
}

impl MonthOverMonth {
    pub fn figures(&self) -> &[MonthlyFigure] {
        &self.figures
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    pub fn get(&self, month: Month) -> Option<&MonthlyFigure> {
        self.figures.iter().find(|figure| figure.month == month)
    }

    pub fn current(&self) -> Option<&MonthlyFigure> {
        self.get(self.current_month)
    }

    pub fn previous(&self) -> Option<&MonthlyFigure> {
        self.get(self.previous_month)
    }

    /// Current minus previous, only when both months have data.
    pub fn delta(&self) -> Option<Decimal> {
        Some(self.current()?.value - self.previous()?.value)
    }
}

/// Row count for one (gender, category) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub gender: Gender,
    pub category: Category,
    pub count: usize
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyRevenue {
    pub week_start: NaiveDate,
    pub revenue: Decimal
}

/// Sum of every row's total price; zero for an empty dataset.
///
/// Datasets from [`crate::storage::CsvDatasetLoader`] are rejected at load time when
/// this sum would leave the `Decimal` range, so it cannot overflow for them.
pub fn total_revenue(data: &Dataset) -> Decimal {
    data.iter().map(Transaction::total_price).sum()
}

/// Compares `current_month` with the month before it (December before January).
///
/// # Errors
/// Returns `InvalidInput::MonthOutOfRange` if `current_month` is not within 1-12.
pub fn month_over_month(data: &Dataset, current_month: u32, metric: MonthMetric, label: MonthLabel) -> Result<MonthOverMonth, InvalidInput> {
    let current_month = Month::try_from(current_month)?;
    let previous_month = current_month.previous();
    let mut groups = BTreeMap::<Month, (usize, Decimal)>::new();

    for transaction in data.iter().filter(|transaction| {
        transaction.month() == current_month || transaction.month() == previous_month
    }) {
        let (count, revenue) = groups.entry(transaction.month()).or_insert((0, Decimal::ZERO));
        *count += 1;
        *revenue += transaction.total_price();
    }

    let figures = groups.into_iter()
        .map(|(month, (count, revenue))| MonthlyFigure {
            month,
            label: month.label(label),
            value: match metric {
                MonthMetric::Count => Decimal::from(count),
                MonthMetric::Revenue => revenue
            }
        })
        .collect();

    Ok(MonthOverMonth {
        current_month,
        previous_month,
        metric,
        label,
        figures
    })
}

/// Counts rows per (gender, category) and keeps the first `top_n` categories of each gender.
///
/// Genders appear in first-seen order. Categories are sorted by count with a stable
/// sort, so equal counts keep the order in which the categories first appeared.
pub fn top_categories_by_gender(data: &Dataset, top_n: usize, ascending: bool) -> Vec<CategoryCount> {
    let mut genders: Vec<(Gender, Vec<CategoryCount>)> = Vec::new();

    for transaction in data {
        let index = match genders.iter().position(|(gender, _)| *gender == transaction.gender) {
            Some(index) => index,
            None => {
                genders.push((transaction.gender.clone(), Vec::new()));
                genders.len() - 1
            }
        };

        let categories = &mut genders[index].1;

        match categories.iter_mut().find(|entry| entry.category == transaction.product_category) {
            Some(entry) => entry.count += 1,
            None => categories.push(CategoryCount {
                gender: transaction.gender.clone(),
                category: transaction.product_category.clone(),
                count: 1
            })
        }
    }

    genders.into_iter()
        .flat_map(|(_, mut categories)| {
            if ascending {
                categories.sort_by_key(|entry| entry.count);
            } else {
                categories.sort_by_key(|entry| Reverse(entry.count));
            }

            categories.truncate(top_n);
            categories
        })
        .collect()
}

/// Revenue per week, ascending by week start.
///
/// Weeks without transactions are absent rather than reported as zero.
pub fn weekly_revenue_trend(data: &Dataset) -> Vec<WeeklyRevenue> {
    let mut weeks = BTreeMap::<NaiveDate, Decimal>::new();

    for transaction in data {
        *weeks.entry(transaction.week_start()).or_insert(Decimal::ZERO) += transaction.total_price();
    }

    weeks.into_iter()
        .map(|(week_start, revenue)| WeeklyRevenue { week_start, revenue })
        .collect()
}

/// Rows recorded in `zone`, in dataset order. `"all"` keeps every row.
pub fn filter_by_zone(data: &Dataset, zone: &str) -> Dataset {
    if zone == ALL_ZONES {
        return data.clone();
    }

    data.iter()
        .filter(|transaction| &*transaction.location == zone)
        .cloned()
        .collect()
}

/// The last `n` rows in dataset order, or every row when there are fewer.
pub fn recent_transactions(data: &Dataset, n: usize) -> &[Transaction] {
    let rows = data.rows();
    &rows[rows.len().saturating_sub(n)..]
}
