//! Snapshot writers.
//!
//! Both writers take any [`Write`] sink and emit one entry per record, in the
//! order they are handed records. Dates are written as `MM/dd/yyyy` and savings
//! keep their decimal scale (`1500.00` stays `1500.00`).

use crate::error::Result;
use crate::model::Record;
use std::io::Write;

pub const EXPORT_DATE_FORMAT: &str = "%m/%d/%Y";
pub const CSV_HEADER: &str = "Id,First Name,Last Name,Date of Birth,Area code,Savings,Gender";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xml,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xml => "xml",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "xml" => Ok(ExportFormat::Xml),
            other => Err(format!("Unknown export format: {}", other)),
        }
    }
}

pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    /// Writes the header row straight away.
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "{}", CSV_HEADER)?;
        Ok(Self { writer })
    }

    pub fn write(&mut self, record: &Record) -> Result<()> {
        writeln!(
            self.writer,
            "{},{},{},{},{},{},{}",
            record.id,
            csv_field(&record.first_name),
            csv_field(&record.last_name),
            record.date_of_birth.format(EXPORT_DATE_FORMAT),
            record.area_code,
            record.savings,
            csv_field(&record.gender.to_string()),
        )?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Quotes a field only when it would otherwise break the row.
fn csv_field(value: &str) -> std::borrow::Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\"")).into()
    } else {
        value.into()
    }
}

pub struct XmlWriter<W: Write> {
    writer: W,
}

impl<W: Write> XmlWriter<W> {
    /// Writes the declaration and opens the `<records>` root.
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "<?xml version=\"1.0\" encoding=\"utf-8\"?>")?;
        writeln!(writer, "<records>")?;
        Ok(Self { writer })
    }

    pub fn write(&mut self, record: &Record) -> Result<()> {
        let w = &mut self.writer;
        writeln!(w, "  <record id=\"{}\">", record.id)?;
        writeln!(
            w,
            "    <name first=\"{}\" last=\"{}\" />",
            xml_escape(&record.first_name),
            xml_escape(&record.last_name)
        )?;
        writeln!(
            w,
            "    <dateofBirth>{}</dateofBirth>",
            record.date_of_birth.format(EXPORT_DATE_FORMAT)
        )?;
        writeln!(w, "    <areaCode>{}</areaCode>", record.area_code)?;
        writeln!(w, "    <savings>{}</savings>", record.savings)?;
        writeln!(
            w,
            "    <gender>{}</gender>",
            xml_escape(&record.gender.to_string())
        )?;
        writeln!(w, "  </record>")?;
        Ok(())
    }

    /// Closes the root element.
    pub fn finish(mut self) -> Result<W> {
        writeln!(self.writer, "</records>")?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

fn xml_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordData;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn jon() -> Record {
        Record::new(
            1,
            RecordData::new(
                "Jon",
                "Smith",
                NaiveDate::from_ymd_opt(1990, 3, 5).unwrap(),
                212,
                Decimal::from_str("1500.00").unwrap(),
                'M',
            ),
        )
    }

    #[test]
    fn csv_row_layout() {
        let mut csv = CsvWriter::new(Vec::new()).unwrap();
        csv.write(&jon()).unwrap();
        let text = String::from_utf8(csv.finish().unwrap()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "1,Jon,Smith,03/05/1990,212,1500.00,M");
    }

    #[test]
    fn csv_quotes_awkward_names() {
        assert_eq!(csv_field("Smith"), "Smith");
        assert_eq!(csv_field("Smith, Jr"), "\"Smith, Jr\"");
        assert_eq!(csv_field("The \"Rock\""), "\"The \"\"Rock\"\"\"");
    }

    #[test]
    fn xml_record_layout() {
        let mut xml = XmlWriter::new(Vec::new()).unwrap();
        xml.write(&jon()).unwrap();
        let text = String::from_utf8(xml.finish().unwrap()).unwrap();

        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<records>\n"));
        assert!(text.contains("<record id=\"1\">"));
        assert!(text.contains("<name first=\"Jon\" last=\"Smith\" />"));
        assert!(text.contains("<dateofBirth>03/05/1990</dateofBirth>"));
        assert!(text.contains("<areaCode>212</areaCode>"));
        assert!(text.contains("<savings>1500.00</savings>"));
        assert!(text.contains("<gender>M</gender>"));
        assert!(text.trim_end().ends_with("</records>"));
    }

    #[test]
    fn xml_escapes_attribute_values() {
        assert_eq!(xml_escape("O'Neil & <Co>"), "O&apos;Neil &amp; &lt;Co&gt;");
    }

    #[test]
    fn format_parsing() {
        assert_eq!(ExportFormat::from_str("CSV").unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_str("xml").unwrap(), ExportFormat::Xml);
        assert!(ExportFormat::from_str("json").is_err());
    }
}
