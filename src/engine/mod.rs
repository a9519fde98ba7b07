mod aggregation;
#[cfg(test)]
mod tests;

pub use aggregation::{
    filter_by_zone,
    month_over_month,
    recent_transactions,
    top_categories_by_gender,
    total_revenue,
    weekly_revenue_trend,
    CategoryCount,
    MonthMetric,
    MonthOverMonth,
    MonthlyFigure,
    WeeklyRevenue
};
