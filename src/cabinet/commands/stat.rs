use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordService;

pub fn run<S: RecordService>(store: &S) -> Result<CmdResult> {
    let count = store.get_stat();
    let mut result = CmdResult::default().with_record_count(count);
    result.add_message(CmdMessage::info(format!("{} record(s).", count)));
    Ok(result)
}
