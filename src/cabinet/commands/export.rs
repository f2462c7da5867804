use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::export::ExportFormat;
use crate::snapshot::Snapshot;
use crate::store::RecordService;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::debug;

pub fn run<S: RecordService>(store: &S, format: ExportFormat, path: &Path) -> Result<CmdResult> {
    // 1. Freeze the records
    let snapshot = store.make_snapshot();

    // 2. Write the file
    let file = File::create(path)?;
    write_snapshot(&snapshot, format, BufWriter::new(file))?;
    debug!(records = snapshot.len(), %format, path = %path.display(), "snapshot exported");

    let mut result = CmdResult::default()
        .with_record_count(snapshot.len())
        .with_export_path(path.to_path_buf());
    result.add_message(CmdMessage::success(format!(
        "All records are exported to file {}.",
        path.display()
    )));
    Ok(result)
}

fn write_snapshot<W: std::io::Write>(
    snapshot: &Snapshot,
    format: ExportFormat,
    writer: W,
) -> Result<()> {
    match format {
        ExportFormat::Csv => snapshot.save_to_csv(writer),
        ExportFormat::Xml => snapshot.save_to_xml(writer),
    }
}
