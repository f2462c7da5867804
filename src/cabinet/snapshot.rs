use crate::error::Result;
use crate::export::{CsvWriter, XmlWriter};
use crate::model::Record;
use std::io::Write;

/// Point-in-time copy of the cabinet's records, in storage order.
///
/// The records are owned copies, so nothing done to the store afterwards shows
/// up here, and writers only ever get shared access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    records: Vec<Record>,
}

impl Snapshot {
    pub fn new(records: impl IntoIterator<Item = Record>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn save_to_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv = CsvWriter::new(writer)?;
        for record in self {
            csv.write(record)?;
        }
        csv.finish()?;
        Ok(())
    }

    pub fn save_to_xml<W: Write>(&self, writer: W) -> Result<()> {
        let mut xml = XmlWriter::new(writer)?;
        for record in self {
            xml.write(record)?;
        }
        xml.finish()?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
