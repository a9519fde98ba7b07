use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::models::{Dataset, SaleRecord, Transaction};
use crate::storage::{DataLoadError, DataSource};

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Loads the sales dataset from a comma-delimited file with a header row.
pub struct CsvDatasetLoader {
    path: PathBuf,
    first_day_of_week: Weekday
}

impl CsvDatasetLoader {
    /// Creates a loader for the given path; weeks start on Monday.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            first_day_of_week: Weekday::Mon
        }
    }

    pub fn with_first_day_of_week(mut self, first_day_of_week: Weekday) -> Self {
        self.first_day_of_week = first_day_of_week;
        self
    }

    /// Parses every row from `source`, failing on the first malformed one.
    pub fn load_from_reader<R: Read>(&self, source: R) -> Result<Dataset, DataLoadError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(source);

        let headers = match reader.headers() {
            Ok(headers) => headers.clone(),
            Err(source) => return Err(DataLoadError::Csv { line: 1, source })
        };

        let mut record = StringRecord::new();
        let mut rows = Vec::new();
        let mut revenue = Decimal::ZERO;

        loop {
            let has_record = match reader.read_record(&mut record) {
                Ok(has_record) => has_record,
                Err(source) => return Err(DataLoadError::Csv { line: reader.position().line(), source })
            };

            if !has_record {
                break;
            }

            let line = record.position().map(|position| position.line()).unwrap_or_default();
            let sale: SaleRecord = record.deserialize(Some(&headers))
                .map_err(|source| DataLoadError::Csv { line, source })?;

            let transaction = self.build_transaction(sale, line)?;

            // Row totals are non-negative, so every zone, month or week sum stays below this one
            revenue = revenue.checked_add(transaction.total_price())
                .ok_or(DataLoadError::RevenueOverflow { line })?;

            rows.push(transaction);
        }

        info!("Loaded {} transactions from [{}]", rows.len(), self.path.display());

        Ok(Dataset::new(rows))
    }

    fn build_transaction(&self, sale: SaleRecord, line: u64) -> Result<Transaction, DataLoadError> {
        let date = parse_transaction_date(&sale.date)
            .ok_or_else(|| DataLoadError::InvalidDate { line, value: sale.date.clone() })?;

        let discount_pct = sale.discount_pct.unwrap_or_else(|| {
            debug!("No discount recorded at line [{line}], assuming none");
            Decimal::ZERO
        });

        Transaction::new(
            date,
            sale.gender,
            sale.location,
            sale.product_category,
            sale.quantity,
            sale.avg_price,
            discount_pct,
            self.first_day_of_week
        ).map_err(|source| DataLoadError::InvalidRow { line, source })
    }
}

impl DataSource for CsvDatasetLoader {
    fn load(&self) -> Result<Dataset, DataLoadError> {
        let file = File::open(&self.path).map_err(|source| DataLoadError::Io {
            path: self.path.clone(),
            source
        })?;

        self.load_from_reader(BufReader::new(file))
    }
}

/// Parses the date layouts found in sales exports; date-only values land at midnight.
pub fn parse_transaction_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    DATE_TIME_FORMATS.iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_FORMATS.iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
