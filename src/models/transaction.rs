use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::errors::TransactionError;
use crate::types::{Category, Gender, Month, Zone};

/// Represents a single row from the input CSV file.
///
/// Column names follow the sales export; columns not listed here are ignored.
/// The date stays a raw string because the export mixes several date layouts.
#[derive(Debug, Clone, Deserialize)]
pub struct SaleRecord {
    #[serde(rename = "Transaction_Date")]
    pub date: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Product_Category")]
    pub product_category: String,
    #[serde(rename = "Quantity")]
    pub quantity: u32,
    #[serde(rename = "Avg_Price", with = "rust_decimal::serde::str")]
    pub avg_price: Decimal,
    /// Empty in the export when no discount applied.
    #[serde(rename = "Discount_pct", with = "rust_decimal::serde::str_option")]
    pub discount_pct: Option<Decimal>
}

/// A validated sale line with its derived fields.
///
/// `total_price`, `week_start` and `month` are computed once in [`Transaction::new`]
/// and cannot drift from the fields they are derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// When the sale happened.
    pub date: NaiveDateTime,
    pub gender: Gender,
    /// Zone (city or region) the sale was recorded in.
    pub location: Zone,
    pub product_category: Category,
    pub quantity: u32,
    /// Unit price before discount.
    pub avg_price: Decimal,
    /// Percentage discount within 0-100.
    pub discount_pct: Decimal,
    total_price: Decimal,
    week_start: NaiveDate,
    month: Month
}

impl Transaction {
    /// Builds a transaction and derives its total price, week and month.
    ///
    /// # Errors
    /// Returns `TransactionError` if:
    /// - The average price is negative.
    /// - The discount is outside 0-100.
    /// - The total price overflows.
    /// - The week start falls before the earliest representable date.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: NaiveDateTime,
        gender: impl Into<Gender>,
        location: impl Into<Zone>,
        product_category: impl Into<Category>,
        quantity: u32,
        avg_price: Decimal,
        discount_pct: Decimal,
        first_day_of_week: Weekday
    ) -> Result<Self, TransactionError> {
        if avg_price < Decimal::ZERO {
            return Err(TransactionError::NegativePrice(avg_price))
        }

        if discount_pct < Decimal::ZERO || discount_pct > Decimal::ONE_HUNDRED {
            return Err(TransactionError::DiscountOutOfRange(discount_pct))
        }

        let total_price = total_price(quantity, avg_price, discount_pct)?;
        let day = date.date();
        let week_start = week_start(day, first_day_of_week)
            .ok_or(TransactionError::DateOutOfRange(day))?;
        let month = Month::new(day.month())
            .map_err(|_| TransactionError::DateOutOfRange(day))?;

        Ok(Self {
            date,
            gender: gender.into(),
            location: location.into(),
            product_category: product_category.into(),
            quantity,
            avg_price,
            discount_pct,
            total_price,
            week_start,
            month
        })
    }

    /// Discounted extended price of the line.
    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    pub fn month(&self) -> Month {
        self.month
    }
}

fn total_price(quantity: u32, avg_price: Decimal, discount_pct: Decimal) -> Result<Decimal, TransactionError> {
    let remaining = Decimal::ONE - discount_pct / Decimal::ONE_HUNDRED;

    Decimal::from(quantity)
        .checked_mul(avg_price)
        .and_then(|gross| gross.checked_mul(remaining))
        .ok_or(TransactionError::Overflow)
}

/// First day of the calendar week containing `date`, weeks starting on `first_day_of_week`.
fn week_start(date: NaiveDate, first_day_of_week: Weekday) -> Option<NaiveDate> {
    let offset = (7 + date.weekday().num_days_from_monday() - first_day_of_week.num_days_from_monday()) % 7;
    date.checked_sub_days(Days::new(u64::from(offset)))
}
