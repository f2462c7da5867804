//! Conversion of raw console text into record field values.
//!
//! These are the forgiving front door: they turn text into typed values and catch
//! obvious mistakes early so a prompt can ask again. They do not replace the
//! store's validator, which has the final say on every field.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Accepts `3/5/1990` as well as `03/05/1990`.
pub const INPUT_DATE_FORMAT: &str = "%m/%d/%Y";

pub type Conversion<T> = Result<T, String>;

pub fn parse_name(label: &str, input: &str) -> Conversion<String> {
    let name = input.trim();
    if name.is_empty() {
        return Err(format!("Please enter a {}.", label));
    }
    Ok(name.to_string())
}

pub fn parse_date(input: &str) -> Conversion<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), INPUT_DATE_FORMAT).map_err(|_| {
        "Please enter the date of birth in the correct format. Ex.: mm/dd/yyyy - 01/01/1973"
            .to_string()
    })
}

pub fn parse_area_code(input: &str) -> Conversion<i16> {
    let area_code: i16 = input
        .trim()
        .parse()
        .map_err(|_| "Please enter an area code.".to_string())?;
    if area_code < 0 {
        return Err("The area code cannot be a negative number.".to_string());
    }
    Ok(area_code)
}

pub fn parse_savings(input: &str) -> Conversion<Decimal> {
    let savings = Decimal::from_str(input.trim())
        .map_err(|_| "Please enter an amount of savings.".to_string())?;
    if savings < Decimal::ZERO {
        return Err("The amount of savings cannot be a negative number.".to_string());
    }
    Ok(savings)
}

/// Exactly one character, uppercased (`f` becomes `F`).
pub fn parse_gender(input: &str) -> Conversion<char> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c.to_ascii_uppercase()),
        _ => Err(
            "Please enter the gender in a correct format. Ex: 'F' - female, 'M' - male or 'N' - not specified."
                .to_string(),
        ),
    }
}

/// Positive record id, as typed after `edit`.
pub fn parse_id(input: &str) -> Conversion<u32> {
    match input.trim().parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err("Please enter the Id of an existing record.".to_string()),
    }
}
