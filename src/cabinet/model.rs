use chrono::NaiveDate;
use rust_decimal::Decimal;

pub type RecordId = u32;

/// The fields a record carries, named so validation errors can point at one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    FirstName,
    LastName,
    DateOfBirth,
    AreaCode,
    Savings,
    Gender,
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecordField::FirstName => "first name",
            RecordField::LastName => "last name",
            RecordField::DateOfBirth => "date of birth",
            RecordField::AreaCode => "area code",
            RecordField::Savings => "savings",
            RecordField::Gender => "gender",
        };
        f.write_str(name)
    }
}

/// Candidate field values for a create or an edit. Everything but the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordData {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub area_code: i16,
    pub savings: Decimal,
    pub gender: char,
}

impl RecordData {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: NaiveDate,
        area_code: i16,
        savings: Decimal,
        gender: char,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth,
            area_code,
            savings,
            gender,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub area_code: i16,
    pub savings: Decimal,
    pub gender: char,
}

impl Record {
    pub fn new(id: RecordId, data: RecordData) -> Self {
        Self {
            id,
            first_name: data.first_name,
            last_name: data.last_name,
            date_of_birth: data.date_of_birth,
            area_code: data.area_code,
            savings: data.savings,
            gender: data.gender,
        }
    }

    /// Overwrites every field except the id.
    pub(crate) fn apply(&mut self, data: RecordData) {
        self.first_name = data.first_name;
        self.last_name = data.last_name;
        self.date_of_birth = data.date_of_birth;
        self.area_code = data.area_code;
        self.savings = data.savings;
        self.gender = data.gender;
    }

    pub fn data(&self) -> RecordData {
        RecordData {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_birth: self.date_of_birth,
            area_code: self.area_code,
            savings: self.savings,
            gender: self.gender,
        }
    }
}
