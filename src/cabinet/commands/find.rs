use crate::commands::CmdResult;
use crate::error::{CabinetError, Result};
use crate::input::parse_date;
use crate::store::RecordService;
use chrono::NaiveDate;

/// One exact-match lookup against a secondary index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindQuery {
    FirstName(String),
    LastName(String),
    DateOfBirth(NaiveDate),
}

impl FindQuery {
    /// Builds a query from a category word (`firstname`, `lastname`,
    /// `dateofbirth`, any case) and the value to look for.
    pub fn parse(category: &str, value: &str) -> Result<Self> {
        match category.to_ascii_lowercase().as_str() {
            "firstname" => Ok(FindQuery::FirstName(value.to_string())),
            "lastname" => Ok(FindQuery::LastName(value.to_string())),
            "dateofbirth" => parse_date(value)
                .map(FindQuery::DateOfBirth)
                .map_err(|reason| CabinetError::invalid_argument("date_of_birth", reason)),
            _ => Err(CabinetError::invalid_argument(
                "category",
                "Please enter a search category and a record data.",
            )),
        }
    }
}

pub fn run<S: RecordService>(store: &S, query: &FindQuery) -> Result<CmdResult> {
    let found = match query {
        FindQuery::FirstName(name) => store.find_by_first_name(name)?,
        FindQuery::LastName(name) => store.find_by_last_name(name)?,
        FindQuery::DateOfBirth(date) => store.find_by_date_of_birth(*date),
    };
    Ok(CmdResult::default().with_listed_records(found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    fn store() -> crate::store::RecordStore {
        StoreFixture::new()
            .with_person("Jon", "Smith", 1990, 3, 5)
            .with_person("Ann", "Smith", 1985, 7, 1)
            .store
    }

    #[test]
    fn parses_categories_in_any_case() {
        assert_eq!(
            FindQuery::parse("FirstName", "jon").unwrap(),
            FindQuery::FirstName("jon".into())
        );
        assert_eq!(
            FindQuery::parse("LASTNAME", "smith").unwrap(),
            FindQuery::LastName("smith".into())
        );
        assert_eq!(
            FindQuery::parse("dateofbirth", "03/05/1990").unwrap(),
            FindQuery::DateOfBirth(NaiveDate::from_ymd_opt(1990, 3, 5).unwrap())
        );
    }

    #[test]
    fn rejects_unknown_category_and_bad_date() {
        assert!(FindQuery::parse("age", "30").is_err());
        assert!(matches!(
            FindQuery::parse("dateofbirth", "1990-03-05"),
            Err(CabinetError::InvalidArgument {
                name: "date_of_birth",
                ..
            })
        ));
    }

    #[test]
    fn finds_by_each_index() {
        let store = store();

        let res = run(&store, &FindQuery::LastName("SMITH".into())).unwrap();
        assert_eq!(res.listed_records.len(), 2);

        let res = run(&store, &FindQuery::FirstName("ann".into())).unwrap();
        assert_eq!(res.listed_records[0].id, 2);

        let date = NaiveDate::from_ymd_opt(1990, 3, 5).unwrap();
        let res = run(&store, &FindQuery::DateOfBirth(date)).unwrap();
        assert_eq!(res.listed_records[0].id, 1);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let res = run(&store(), &FindQuery::FirstName("NoSuchName".into())).unwrap();
        assert!(res.listed_records.is_empty());
    }

    #[test]
    fn blank_name_is_error() {
        let err = run(&store(), &FindQuery::FirstName(" ".into())).unwrap_err();
        assert!(matches!(err, CabinetError::InvalidArgument { .. }));
    }
}
