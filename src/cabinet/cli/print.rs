use cabinet::api::{CmdMessage, MessageLevel};
use cabinet::error::CabinetError;
use cabinet::model::Record;
use colored::Colorize;
use std::io::{self, Write};

const DISPLAY_DATE_FORMAT: &str = "%Y-%b-%d";

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content)?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
        }
    }
    Ok(())
}

pub(super) fn print_error<W: Write>(out: &mut W, error: &CabinetError) -> io::Result<()> {
    writeln!(out, "{}", error.to_string().red())
}

pub(super) fn print_records<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "No records found.");
    }

    for record in records {
        writeln!(out, "{}", format_record(record))?;
    }
    Ok(())
}

/// `#1, Jon, Smith, 1990-Mar-05, +212, 1500.00, M.`
pub(super) fn format_record(record: &Record) -> String {
    format!(
        "#{}, {}, {}, {}, +{}, {}, {}.",
        record.id,
        record.first_name,
        record.last_name,
        record.date_of_birth.format(DISPLAY_DATE_FORMAT),
        record.area_code,
        record.savings,
        record.gender
    )
}
