//! The interactive command loop.
//!
//! A [`Session`] owns the API and the two ends of the console. It reads one
//! command per line, dispatches through [`Command`], prints what came back and
//! keeps going until `exit` or end of input. Errors from the cabinet are printed
//! and the loop continues; only console I/O failures end it.

mod print;
mod prompt;

use cabinet::api::{CabinetApi, CmdResult};
use cabinet::error::Result;
use cabinet::export::ExportFormat;
use cabinet::input::parse_id;
use cabinet::store::RecordService;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use print::{print_error, print_messages, print_records};

pub const HINT_MESSAGE: &str = "Enter your command, or enter 'help' to get help.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Stat,
    Create,
    List,
    Edit,
    Find,
    Export,
}

impl Command {
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Exit,
        Command::Stat,
        Command::Create,
        Command::List,
        Command::Edit,
        Command::Find,
        Command::Export,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Stat => "stat",
            Command::Create => "create",
            Command::List => "list",
            Command::Edit => "edit",
            Command::Find => "find",
            Command::Export => "export",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Command::Help => "prints the help screen",
            Command::Exit => "exits the application",
            Command::Stat => "shows statistics on record",
            Command::Create => "creates a new record",
            Command::List => "prints the list of all records",
            Command::Edit => "edits a record",
            Command::Find => "finds records",
            Command::Export => "exports all records to a file",
        }
    }

    pub fn explanation(self) -> &'static str {
        match self {
            Command::Help => "The 'help' command prints the help screen.",
            Command::Exit => "The 'exit' command exits the application.",
            Command::Stat => "The 'stat' command shows statistics on record.",
            Command::Create => "The 'create' command creates a new record.",
            Command::List => "The 'list' command prints the list of all records.",
            Command::Edit => "The 'edit <id>' command edits an existing record.",
            Command::Find => {
                "The 'find firstname <first name>' command finds existing records by the first name.\n\
                 The 'find lastname <last name>' command finds existing records by the last name.\n\
                 The 'find dateofbirth <mm/dd/yyyy>' command finds existing records by the date of birth."
            }
            Command::Export => {
                "The 'export csv <file>' command exports all records to a CSV file.\n\
                 The 'export xml <file>' command exports all records to an XML file."
            }
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

pub struct Session<S: RecordService, R: BufRead, W: Write> {
    api: CabinetApi<S>,
    input: R,
    output: W,
    running: bool,
}

impl<S: RecordService, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(api: CabinetApi<S>, input: R, output: W) -> Self {
        Self {
            api,
            input,
            output,
            running: true,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        while self.running {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            let (name, parameters) = line.trim().split_once(' ').unwrap_or((line.trim(), ""));

            if name.is_empty() {
                writeln!(self.output, "{}", HINT_MESSAGE)?;
                continue;
            }

            match Command::from_name(name) {
                Some(command) => self.dispatch(command, parameters.trim())?,
                None => {
                    writeln!(self.output, "There is no '{}' command.", name)?;
                    writeln!(self.output)?;
                }
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, command: Command, parameters: &str) -> io::Result<()> {
        match command {
            Command::Help => self.help(parameters),
            Command::Exit => self.exit(),
            Command::Stat => {
                let outcome = self.api.stat();
                self.show(outcome, false)
            }
            Command::Create => self.create(),
            Command::List => {
                let outcome = self.api.list_records();
                self.show(outcome, true)
            }
            Command::Edit => self.edit(parameters),
            Command::Find => self.find(parameters),
            Command::Export => self.export(parameters),
        }
    }

    fn show(&mut self, outcome: Result<CmdResult>, listing: bool) -> io::Result<()> {
        match outcome {
            Ok(result) => {
                if listing {
                    print_records(&mut self.output, &result.listed_records)?;
                }
                print_messages(&mut self.output, &result.messages)
            }
            Err(e) => print_error(&mut self.output, &e),
        }
    }

    fn help(&mut self, parameters: &str) -> io::Result<()> {
        if parameters.is_empty() {
            writeln!(self.output, "Available commands:")?;
            for command in Command::ALL {
                writeln!(self.output, "\t{}\t- {}", command.name(), command.summary())?;
            }
        } else {
            match Command::from_name(parameters) {
                Some(command) => writeln!(self.output, "{}", command.explanation())?,
                None => writeln!(
                    self.output,
                    "There is no explanation for '{}' command.",
                    parameters
                )?,
            }
        }
        writeln!(self.output)
    }

    fn exit(&mut self) -> io::Result<()> {
        writeln!(self.output, "Exiting an application...")?;
        self.running = false;
        Ok(())
    }

    fn create(&mut self) -> io::Result<()> {
        let Some(data) = self.ask_record_data()? else {
            return Ok(());
        };
        let outcome = self.api.create_record(data);
        self.show(outcome, false)
    }

    fn edit(&mut self, parameters: &str) -> io::Result<()> {
        let id = match parse_id(parameters) {
            Ok(id) => id,
            Err(reason) => return writeln!(self.output, "{}", reason),
        };
        if !self.api.record_exists(id) {
            return writeln!(self.output, "#{} record is not found.", id);
        }

        let Some(data) = self.ask_record_data()? else {
            return Ok(());
        };
        let outcome = self.api.edit_record(id, data);
        self.show(outcome, false)
    }

    fn find(&mut self, parameters: &str) -> io::Result<()> {
        let Some((category, value)) = parameters.split_once(' ') else {
            return writeln!(self.output, "Please enter a search category and a record data.");
        };
        let value = unquote(value.trim());
        if value.trim().is_empty() {
            return writeln!(self.output, "Please enter a search category and a record data.");
        }

        let outcome = self.api.find_records(category, value);
        self.show(outcome, true)
    }

    fn export(&mut self, parameters: &str) -> io::Result<()> {
        let Some((format, target)) = parameters.split_once(' ') else {
            return writeln!(self.output, "Please enter an export format and a file name.");
        };
        let format = match ExportFormat::from_str(format) {
            Ok(format) => format,
            Err(reason) => return writeln!(self.output, "{}", reason),
        };
        let target = unquote(target.trim());

        let path = self.api.config().export_path(target);
        if path.exists() {
            let question = format!("File is exist - rewrite {}?", path.display());
            if !self.confirm(&question)? {
                return Ok(());
            }
        }

        let outcome = self.api.export_records(format, target);
        self.show(outcome, false)
    }
}

/// Strips one pair of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
