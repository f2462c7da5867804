//! Record validation.
//!
//! The store never decides on its own whether a candidate is acceptable: it asks a
//! [`RecordValidator`]. The only implementation shipped is [`RuleSet`], a table of
//! thresholds checked in a fixed order:
//!
//! 1. first name presence, then length
//! 2. last name presence, then length
//! 3. date of birth range
//! 4. area code range
//! 5. savings range
//! 6. gender set
//!
//! The first failing check wins, so callers can rely on which message they get back.
//!
//! Two presets exist, picked at startup through [`ValidationMode`]:
//!
//! | rule         | default    | custom     |
//! |--------------|------------|------------|
//! | name length  | 2-60       | 2-30       |
//! | earliest DOB | 1-Jan-1950 | 1-Jan-1920 |
//! | area code    | >= 0       | 0-999      |
//! | gender       | F, M, N    | F, M       |

use crate::error::{CabinetError, Result};
use crate::model::{RecordData, RecordField};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

const GENDER_FEMALE: char = 'F';
const GENDER_MALE: char = 'M';
const GENDER_NOT_SPECIFIED: char = 'N';

/// Checks a candidate record before the store accepts it.
///
/// Implementations must be pure: no state changes, no mutation of the candidate.
pub trait RecordValidator {
    fn validate(&self, data: &RecordData) -> Result<()>;
}

impl<V: RecordValidator + ?Sized> RecordValidator for Box<V> {
    fn validate(&self, data: &RecordData) -> Result<()> {
        (**self).validate(data)
    }
}

/// Which preset rule set to run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    #[default]
    Default,
    Custom,
}

impl ValidationMode {
    pub fn rules(self) -> RuleSet {
        match self {
            ValidationMode::Default => RuleSet::default_rules(),
            ValidationMode::Custom => RuleSet::custom_rules(),
        }
    }

    /// Startup banner line announcing the active rules.
    pub fn description(self) -> &'static str {
        match self {
            ValidationMode::Default => "Using default validation rules.",
            ValidationMode::Custom => "Using custom validation rules.",
        }
    }
}

impl std::fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationMode::Default => write!(f, "default"),
            ValidationMode::Custom => write!(f, "custom"),
        }
    }
}

impl std::str::FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(ValidationMode::Default),
            "custom" => Ok(ValidationMode::Custom),
            other => Err(format!("The validation rule '{}' is not recognized.", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    pub min_name_length: usize,
    pub max_name_length: usize,
    pub earliest_birth_date: NaiveDate,
    /// `None` leaves the area code bounded only below by zero.
    pub max_area_code: Option<i16>,
    pub genders: Vec<char>,
    /// Fixed "today" for reproducible checks; the local clock when unset.
    today: Option<NaiveDate>,
}

impl RuleSet {
    pub fn default_rules() -> Self {
        Self {
            min_name_length: 2,
            max_name_length: 60,
            earliest_birth_date: ymd(1950, 1, 1),
            max_area_code: None,
            genders: vec![GENDER_FEMALE, GENDER_MALE, GENDER_NOT_SPECIFIED],
            today: None,
        }
    }

    pub fn custom_rules() -> Self {
        Self {
            min_name_length: 2,
            max_name_length: 30,
            earliest_birth_date: ymd(1920, 1, 1),
            max_area_code: Some(999),
            genders: vec![GENDER_FEMALE, GENDER_MALE],
            today: None,
        }
    }

    /// Pins the upper bound on dates of birth instead of reading the clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn check_name(&self, field: RecordField, label: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(CabinetError::validation(
                field,
                format!("{} cannot be null or white space.", label),
            ));
        }

        let length = value.chars().count();
        if length < self.min_name_length || length > self.max_name_length {
            return Err(CabinetError::validation(
                field,
                format!(
                    "{} cannot be shorter than {} characters and longer than {} characters.",
                    label, self.min_name_length, self.max_name_length
                ),
            ));
        }

        Ok(())
    }

    fn check_date_of_birth(&self, date: NaiveDate) -> Result<()> {
        if date < self.earliest_birth_date || date > self.today() {
            return Err(CabinetError::validation(
                RecordField::DateOfBirth,
                format!(
                    "Date of birth cannot be earlier than {} or later than the current date.",
                    self.earliest_birth_date.format("%-d-%b-%Y")
                ),
            ));
        }
        Ok(())
    }

    fn check_area_code(&self, area_code: i16) -> Result<()> {
        match self.max_area_code {
            Some(max) if area_code < 0 || area_code > max => Err(CabinetError::validation(
                RecordField::AreaCode,
                format!(
                    "Area code cannot be a negative number or be longer than {} digits.",
                    max.to_string().len()
                ),
            )),
            None if area_code < 0 => Err(CabinetError::validation(
                RecordField::AreaCode,
                "Area code cannot be a negative number.",
            )),
            _ => Ok(()),
        }
    }

    fn check_savings(&self, savings: Decimal) -> Result<()> {
        if savings < Decimal::ZERO {
            return Err(CabinetError::validation(
                RecordField::Savings,
                "Savings cannot be a negative number.",
            ));
        }
        Ok(())
    }

    fn check_gender(&self, gender: char) -> Result<()> {
        if !self.genders.contains(&gender) {
            return Err(CabinetError::validation(
                RecordField::Gender,
                format!("Gender can only be {}.", describe_choices(&self.genders)),
            ));
        }
        Ok(())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::default_rules()
    }
}

impl RecordValidator for RuleSet {
    fn validate(&self, data: &RecordData) -> Result<()> {
        let outcome = self
            .check_name(RecordField::FirstName, "First name", &data.first_name)
            .and_then(|_| self.check_name(RecordField::LastName, "Last name", &data.last_name))
            .and_then(|_| self.check_date_of_birth(data.date_of_birth))
            .and_then(|_| self.check_area_code(data.area_code))
            .and_then(|_| self.check_savings(data.savings))
            .and_then(|_| self.check_gender(data.gender));

        if let Err(CabinetError::Validation { field, reason }) = &outcome {
            debug!(%field, %reason, "candidate record rejected");
        }
        outcome
    }
}

/// "F or M", "F, M or N".
fn describe_choices(choices: &[char]) -> String {
    match choices {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(|c| c.to_string()).collect();
            format!("{} or {}", head.join(", "), last)
        }
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
