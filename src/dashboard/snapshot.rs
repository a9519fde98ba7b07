use rust_decimal::Decimal;

use crate::engine::{
    filter_by_zone, month_over_month, recent_transactions, top_categories_by_gender, total_revenue,
    weekly_revenue_trend, CategoryCount, MonthMetric, MonthOverMonth, WeeklyRevenue
};
use crate::models::{Dataset, Transaction};
use crate::types::{InvalidInput, Month, MonthLabel};

/// Parameters applied to every zone selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardOptions {
    /// Month compared against its predecessor in the indicators.
    pub current_month: Month,
    /// Categories kept per gender.
    pub top_n: usize,
    pub ascending: bool,
    /// Rows shown in the recent transactions table.
    pub recent: usize
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            current_month: Month::DECEMBER,
            top_n: 10,
            ascending: false,
            recent: 100
        }
    }
}

/// Everything the dashboard shows for one zone selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub zone: String,
    pub transaction_count: usize,
    pub total_revenue: Decimal,
    /// Revenue indicator, keyed by full month names.
    pub revenue_indicator: MonthOverMonth,
    /// Sales count indicator, keyed by abbreviated month names.
    pub sales_indicator: MonthOverMonth,
    pub top_categories: Vec<CategoryCount>,
    pub weekly_trend: Vec<WeeklyRevenue>,
    pub recent_transactions: Vec<Transaction>
}

impl DashboardSnapshot {
    /// Filters `data` to `zone` and computes every dashboard figure from the result.
    pub fn build(data: &Dataset, zone: &str, options: &DashboardOptions) -> Result<Self, InvalidInput> {
        let filtered = filter_by_zone(data, zone);
        let current_month = options.current_month.number();

        Ok(Self {
            zone: zone.to_string(),
            transaction_count: filtered.len(),
            total_revenue: total_revenue(&filtered),
            revenue_indicator: month_over_month(&filtered, current_month, MonthMetric::Revenue, MonthLabel::Full)?,
            sales_indicator: month_over_month(&filtered, current_month, MonthMetric::Count, MonthLabel::Abbreviated)?,
            top_categories: top_categories_by_gender(&filtered, options.top_n, options.ascending),
            weekly_trend: weekly_revenue_trend(&filtered),
            recent_transactions: recent_transactions(&filtered, options.recent).to_vec()
        })
    }
}
