use crate::types::errors::InvalidInput;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"
];

const NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December"
];

/// Calendar month number, always within 1-12.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Month(u32);

/// Which month label a caller wants on indicator keys.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MonthLabel {
    Abbreviated,
    Full
}

impl Month {
    pub const JANUARY: Month = Month(1);
    pub const DECEMBER: Month = Month(12);

    pub fn new(number: u32) -> Result<Self, InvalidInput> {
        if (1..=12).contains(&number) {
            Ok(Month(number))
        } else {
            Err(InvalidInput::MonthOutOfRange(number))
        }
    }

    pub fn number(self) -> u32 {
        self.0
    }

    /// The month before this one, December preceding January.
    pub fn previous(self) -> Month {
        if self.0 == 1 { Month::DECEMBER } else { Month(self.0 - 1) }
    }

    pub fn abbreviation(self) -> &'static str {
        ABBREVIATIONS[self.index()]
    }

    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    pub fn label(self, label: MonthLabel) -> &'static str {
        match label {
            MonthLabel::Abbreviated => self.abbreviation(),
            MonthLabel::Full => self.name()
        }
    }

    fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u32> for Month {
    type Error = InvalidInput;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Month::new(number)
    }
}

impl Display for Month {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.name())
    }
}

impl FromStr for Month {
    type Err = InvalidInput;

    /// Accepts a month number ("1".."12"), a full name or an abbreviation, ignoring case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if let Ok(number) = value.parse::<u32>() {
            return Month::new(number);
        }

        NAMES.iter()
            .zip(ABBREVIATIONS.iter())
            .position(|(name, abbreviation)| {
                name.eq_ignore_ascii_case(value) || abbreviation.eq_ignore_ascii_case(value)
            })
            .map(|index| Month(index as u32 + 1))
            .ok_or_else(|| InvalidInput::UnknownMonthName(value.to_string()))
    }
}
