use std::io::{self, Write};

use rust_decimal::Decimal;

use crate::dashboard::DashboardSnapshot;
use crate::engine::{MonthMetric, MonthOverMonth};
use crate::types::Zone;

/// Writes one zone's dashboard as plain text sections.
pub fn render_report<W: Write>(snapshot: &DashboardSnapshot, output: &mut W) -> io::Result<()> {
    writeln!(output, "== Sales dashboard [{}] ==", snapshot.zone)?;
    writeln!(output, "Transactions: {}", snapshot.transaction_count)?;
    writeln!(output, "Total revenue: {:.2}", snapshot.total_revenue)?;
    writeln!(output, "Revenue {}", describe_indicator(&snapshot.revenue_indicator))?;
    writeln!(output, "Sales {}", describe_indicator(&snapshot.sales_indicator))?;

    writeln!(output)?;
    writeln!(output, "Top categories by gender")?;
    writeln!(output, "gender,category,count")?;

    for entry in &snapshot.top_categories {
        writeln!(output, "{},{},{}", entry.gender, entry.category, entry.count)?;
    }

    writeln!(output)?;
    writeln!(output, "Weekly revenue (weeks without sales are omitted)")?;
    writeln!(output, "week_start,revenue")?;

    for week in &snapshot.weekly_trend {
        writeln!(output, "{},{:.2}", week.week_start, week.revenue)?;
    }

    writeln!(output)?;
    writeln!(output, "Recent transactions ({})", snapshot.recent_transactions.len())?;
    writeln!(output, "date,gender,location,product_category,quantity,avg_price,discount_pct")?;

    for transaction in &snapshot.recent_transactions {
        writeln!(
            output,
            "{},{},{},{},{},{},{}",
            transaction.date.format("%Y-%m-%d"),
            transaction.gender,
            transaction.location,
            transaction.product_category,
            transaction.quantity,
            transaction.avg_price,
            transaction.discount_pct
        )?;
    }

    writeln!(output)?;

    Ok(())
}

/// Writes the zones found in the dataset, one per line.
pub fn render_zones<W: Write>(zones: &[Zone], output: &mut W) -> io::Result<()> {
    for zone in zones {
        writeln!(output, "{zone}")?;
    }

    Ok(())
}

fn describe_indicator(indicator: &MonthOverMonth) -> String {
    let current_label = indicator.current_month.label(indicator.label);
    let previous_label = indicator.previous_month.label(indicator.label);

    let Some(current) = indicator.current() else {
        return format!("{current_label}: n/a");
    };

    let value = format_value(indicator.metric, current.value);

    match indicator.delta() {
        Some(delta) => {
            let sign = if delta < Decimal::ZERO { "" } else { "+" };
            format!("{current_label}: {value} ({sign}{} vs {previous_label})", format_value(indicator.metric, delta))
        }
        None => format!("{current_label}: {value} (no data for {previous_label})")
    }
}

fn format_value(metric: MonthMetric, value: Decimal) -> String {
    match metric {
        MonthMetric::Count => value.to_string(),
        MonthMetric::Revenue => format!("{value:.2}")
    }
}
