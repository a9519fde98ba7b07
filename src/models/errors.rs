use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionError {
    #[error("Average price [{0}] must not be negative")]
    NegativePrice(Decimal),
    #[error("Discount [{0}] must be between 0 and 100 percent")]
    DiscountOutOfRange(Decimal),
    #[error("Numeric overflow occurred while computing the total price")]
    Overflow,
    #[error("Week start for date [{0}] is outside the supported calendar")]
    DateOutOfRange(NaiveDate)
}
