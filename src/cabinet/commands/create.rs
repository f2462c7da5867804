use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordData;
use crate::store::RecordService;

pub fn run<S: RecordService>(store: &mut S, data: RecordData) -> Result<CmdResult> {
    let id = store.create_record(data)?;

    let mut result = CmdResult::default();
    if let Some(record) = store.get_record(id) {
        result.affected_records.push(record.clone());
    }
    result.add_message(CmdMessage::success(format!("Record #{} was created!", id)));
    Ok(result)
}
