use super::{
    filter_by_zone, month_over_month, recent_transactions, top_categories_by_gender, total_revenue,
    weekly_revenue_trend, CategoryCount, MonthMetric
};

use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::models::{Dataset, Transaction};
use crate::types::{InvalidInput, Month, MonthLabel, ALL_ZONES};

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow!("invalid test date {year}-{month}-{day}"))
}

fn create_transaction(sold_on: NaiveDate, gender: &str, location: &str, category: &str, quantity: u32, avg_price: &str, discount_pct: &str) -> Result<Transaction> {
    let timestamp = sold_on.and_hms_opt(12, 0, 0).ok_or_else(|| anyhow!("invalid test time"))?;

    Ok(Transaction::new(
        timestamp,
        gender,
        location,
        category,
        quantity,
        Decimal::from_str(avg_price)?,
        Decimal::from_str(discount_pct)?,
        Weekday::Mon
    )?)
}

fn create_zone_sale(location: &str, sold_on: NaiveDate, avg_price: &str) -> Result<Transaction> {
    create_transaction(sold_on, "F", location, "Apparel", 1, avg_price, "0")
}

fn create_category_sale(gender: &str, category: &str) -> Result<Transaction> {
    create_transaction(date(2019, 6, 1)?, gender, "Chicago", category, 1, "1", "0")
}

fn create_mixed_dataset() -> Result<Dataset> {
    Ok(Dataset::new(vec![
        create_transaction(date(2019, 1, 1)?, "M", "Chicago", "Nest-USA", 2, "10.00", "0")?,
        create_transaction(date(2019, 1, 2)?, "F", "New York", "Apparel", 1, "50.00", "100")?,
        create_transaction(date(2019, 1, 9)?, "F", "Chicago", "Office", 4, "2.50", "20")?,
        create_transaction(date(2019, 2, 14)?, "M", "California", "Nest-USA", 1, "120.00", "10")?,
        create_transaction(date(2019, 12, 24)?, "F", "New York", "Drinkware", 3, "5.00", "0")?,
    ]))
}

#[test]
fn test_total_revenue_of_empty_dataset_is_zero() {
    assert!(total_revenue(&Dataset::default()).is_zero());
}

#[test]
fn test_total_revenue_sums_discounted_row_totals() -> Result<()> {
    let dataset = create_mixed_dataset()?;

    // 20 + 0 (full discount) + 8 + 108 + 15
    assert_eq!(total_revenue(&dataset), Decimal::from_str("151")?);

    let by_row: Decimal = dataset.iter().map(Transaction::total_price).sum();
    assert_eq!(total_revenue(&dataset), by_row);

    Ok(())
}

#[test]
fn test_filter_by_all_returns_identical_dataset() -> Result<()> {
    let dataset = create_mixed_dataset()?;

    assert_eq!(filter_by_zone(&dataset, ALL_ZONES), dataset);

    Ok(())
}

#[test]
fn test_filter_by_zone_keeps_only_matching_rows_in_order() -> Result<()> {
    let dataset = create_mixed_dataset()?;

    let new_york = filter_by_zone(&dataset, "New York");

    assert_eq!(new_york.len(), 2);
    assert!(new_york.iter().all(|transaction| &*transaction.location == "New York"));
    assert_eq!(new_york.rows()[0], dataset.rows()[1]);
    assert_eq!(new_york.rows()[1], dataset.rows()[4]);

    Ok(())
}

#[test]
fn test_filter_by_zone_is_idempotent() -> Result<()> {
    let dataset = create_mixed_dataset()?;

    let once = filter_by_zone(&dataset, "Chicago");
    let twice = filter_by_zone(&once, "Chicago");

    assert_eq!(once, twice);

    Ok(())
}

#[test]
fn test_filter_by_unknown_zone_is_empty_not_an_error() -> Result<()> {
    let dataset = create_mixed_dataset()?;

    assert!(filter_by_zone(&dataset, "Atlantis").is_empty());
    assert!(filter_by_zone(&dataset, "chicago").is_empty());

    Ok(())
}

#[test]
fn test_weekly_trend_is_ascending_and_sums_to_total_revenue() -> Result<()> {
    let dataset = Dataset::new(vec![
        create_zone_sale("Chicago", date(2019, 3, 20)?, "7.25")?,
        create_zone_sale("Chicago", date(2019, 1, 1)?, "10")?,
        create_zone_sale("Chicago", date(2019, 1, 3)?, "5")?,
        create_zone_sale("Chicago", date(2019, 1, 8)?, "1.75")?,
    ]);

    let trend = weekly_revenue_trend(&dataset);

    assert!(trend.windows(2).all(|pair| pair[0].week_start < pair[1].week_start));

    let trend_total: Decimal = trend.iter().map(|week| week.revenue).sum();
    assert_eq!(trend_total, total_revenue(&dataset));

    assert_eq!(trend.len(), 3);
    assert_eq!(trend[0].week_start, date(2018, 12, 31)?);
    assert_eq!(trend[0].revenue, Decimal::from(15));
    assert_eq!(trend[1].week_start, date(2019, 1, 7)?);
    assert_eq!(trend[2].week_start, date(2019, 3, 18)?);

    Ok(())
}

#[test]
fn test_weekly_trend_of_empty_dataset_is_empty() {
    assert!(weekly_revenue_trend(&Dataset::default()).is_empty());
}

#[test]
fn test_top_categories_keeps_gender_order_and_top_counts() -> Result<()> {
    let mut rows = Vec::new();
    let counts = [("M", "A", 5), ("F", "A", 2), ("M", "B", 3), ("F", "B", 9), ("M", "C", 1)];

    for (gender, category, count) in counts {
        for _ in 0..count {
            rows.push(create_category_sale(gender, category)?);
        }
    }

    let result = top_categories_by_gender(&Dataset::new(rows), 2, false);
    let flattened: Vec<(&str, &str, usize)> = result.iter()
        .map(|entry| (&*entry.gender, &*entry.category, entry.count))
        .collect();

    assert_eq!(flattened, vec![("M", "A", 5), ("M", "B", 3), ("F", "B", 9), ("F", "A", 2)]);

    Ok(())
}

#[test]
fn test_top_categories_ascending_puts_smallest_counts_first() -> Result<()> {
    let dataset = Dataset::new(vec![
        create_category_sale("F", "Apparel")?,
        create_category_sale("F", "Apparel")?,
        create_category_sale("F", "Office")?,
        create_category_sale("F", "Bags")?,
        create_category_sale("F", "Bags")?,
        create_category_sale("F", "Bags")?,
    ]);

    let result = top_categories_by_gender(&dataset, 10, true);
    let categories: Vec<&str> = result.iter().map(|entry| &*entry.category).collect();

    assert_eq!(categories, vec!["Office", "Apparel", "Bags"]);

    Ok(())
}

#[test]
fn test_top_categories_ties_keep_first_seen_order() -> Result<()> {
    let dataset = Dataset::new(vec![
        create_category_sale("M", "Lifestyle")?,
        create_category_sale("M", "Nest")?,
        create_category_sale("M", "Bags")?,
    ]);

    let result = top_categories_by_gender(&dataset, 2, false);

    assert_eq!(result, vec![
        CategoryCount { gender: "M".into(), category: "Lifestyle".into(), count: 1 },
        CategoryCount { gender: "M".into(), category: "Nest".into(), count: 1 },
    ]);

    Ok(())
}

#[test]
fn test_top_categories_with_zero_top_n_is_empty() -> Result<()> {
    let dataset = create_mixed_dataset()?;

    assert!(top_categories_by_gender(&dataset, 0, false).is_empty());
    assert!(top_categories_by_gender(&Dataset::default(), 5, false).is_empty());

    Ok(())
}

#[test]
fn test_month_over_month_wraps_january_to_december() -> Result<()> {
    let dataset = create_mixed_dataset()?;

    let indicator = month_over_month(&dataset, 1, MonthMetric::Count, MonthLabel::Abbreviated)?;

    assert_eq!(indicator.previous_month, Month::DECEMBER);
    assert_eq!(indicator.len(), 2);

    let labels: Vec<&str> = indicator.figures().iter().map(|figure| figure.label).collect();
    assert_eq!(labels, vec!["Jan", "Dec"]);

    assert_eq!(indicator.current().map(|figure| figure.value), Some(Decimal::from(3)));
    assert_eq!(indicator.previous().map(|figure| figure.value), Some(Decimal::ONE));
    assert_eq!(indicator.delta(), Some(Decimal::from(2)));

    Ok(())
}

#[test]
fn test_month_over_month_revenue_uses_full_names() -> Result<()> {
    let dataset = create_mixed_dataset()?;

    let indicator = month_over_month(&dataset, 2, MonthMetric::Revenue, MonthLabel::Full)?;
    let figures = indicator.figures();

    assert_eq!(figures.len(), 2);
    assert_eq!((figures[0].label, figures[0].value), ("January", Decimal::from(28)));
    assert_eq!((figures[1].label, figures[1].value), ("February", Decimal::from(108)));
    assert_eq!(indicator.delta(), Some(Decimal::from(80)));

    Ok(())
}

#[test]
fn test_month_over_month_omits_month_without_data() -> Result<()> {
    let dataset = create_mixed_dataset()?;

    let indicator = month_over_month(&dataset, 3, MonthMetric::Count, MonthLabel::Full)?;

    assert_eq!(indicator.len(), 1);
    assert!(indicator.current().is_none());
    assert_eq!(indicator.previous().map(|figure| figure.label), Some("February"));
    assert_eq!(indicator.delta(), None);

    let empty = month_over_month(&dataset, 7, MonthMetric::Revenue, MonthLabel::Full)?;
    assert!(empty.is_empty());

    Ok(())
}

#[test]
fn test_month_over_month_rejects_invalid_month() -> Result<()> {
    let dataset = create_mixed_dataset()?;

    assert_eq!(
        month_over_month(&dataset, 13, MonthMetric::Count, MonthLabel::Full),
        Err(InvalidInput::MonthOutOfRange(13))
    );
    assert_eq!(
        month_over_month(&dataset, 0, MonthMetric::Revenue, MonthLabel::Abbreviated),
        Err(InvalidInput::MonthOutOfRange(0))
    );

    Ok(())
}

#[test]
fn test_recent_transactions_returns_everything_when_short() -> Result<()> {
    let start = date(2019, 1, 1)?;
    let rows = (0..50u64)
        .map(|offset| {
            let sold_on = start.checked_add_days(chrono::Days::new(offset)).ok_or_else(|| anyhow!("date overflow"))?;
            create_zone_sale("Chicago", sold_on, "1")
        })
        .collect::<Result<Vec<_>>>()?;
    let dataset = Dataset::new(rows);

    let recent = recent_transactions(&dataset, 100);

    assert_eq!(recent, dataset.rows());

    Ok(())
}

#[test]
fn test_recent_transactions_returns_last_rows_in_dataset_order() -> Result<()> {
    let dataset = create_mixed_dataset()?;

    let recent = recent_transactions(&dataset, 2);

    assert_eq!(recent, &dataset.rows()[3..]);
    assert!(recent_transactions(&dataset, 0).is_empty());

    Ok(())
}
