use super::Session;
use cabinet::input::{self, Conversion};
use cabinet::model::RecordData;
use cabinet::store::RecordService;
use std::io::{self, BufRead, Write};

impl<S: RecordService, R: BufRead, W: Write> Session<S, R, W> {
    /// Reads one line, `None` at end of input.
    pub(super) fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Asks for a value until it converts. `None` when input runs out.
    pub(super) fn ask<T>(
        &mut self,
        label: &str,
        convert: impl Fn(&str) -> Conversion<T>,
    ) -> io::Result<Option<T>> {
        loop {
            write!(self.output, "{}: ", label)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match convert(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(reason) => writeln!(self.output, "{}", reason)?,
            }
        }
    }

    pub(super) fn ask_record_data(&mut self) -> io::Result<Option<RecordData>> {
        let Some(first_name) = self.ask("First name", |s| input::parse_name("first name", s))?
        else {
            return Ok(None);
        };
        let Some(last_name) = self.ask("Last name", |s| input::parse_name("last name", s))? else {
            return Ok(None);
        };
        let Some(date_of_birth) = self.ask("Date of birth", input::parse_date)? else {
            return Ok(None);
        };
        let Some(area_code) = self.ask("Area code", input::parse_area_code)? else {
            return Ok(None);
        };
        let Some(savings) = self.ask("Amount of savings", input::parse_savings)? else {
            return Ok(None);
        };
        let Some(gender) = self.ask("Gender", input::parse_gender)? else {
            return Ok(None);
        };

        Ok(Some(RecordData::new(
            first_name,
            last_name,
            date_of_birth,
            area_code,
            savings,
            gender,
        )))
    }

    /// Yes unless the answer starts with `n`. End of input is a no.
    pub(super) fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{} [Y/n] ", question)?;
        self.output.flush()?;
        let Some(answer) = self.read_line()? else {
            return Ok(false);
        };
        Ok(!answer.trim().to_ascii_lowercase().starts_with('n'))
    }
}
