use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("Invalid input: month [{0}] is outside the range 1-12")]
    MonthOutOfRange(u32),
    #[error("Invalid input: unknown month name [{0}]")]
    UnknownMonthName(String)
}
