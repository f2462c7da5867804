use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{RecordData, RecordId};
use crate::store::RecordService;

pub fn run<S: RecordService>(store: &mut S, id: RecordId, data: RecordData) -> Result<CmdResult> {
    store.edit_record(id, data)?;

    let mut result = CmdResult::default();
    if let Some(record) = store.get_record(id) {
        result.affected_records.push(record.clone());
    }
    result.add_message(CmdMessage::success(format!("Record #{} is updated.", id)));
    Ok(result)
}
