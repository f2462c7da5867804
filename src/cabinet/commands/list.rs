use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::RecordService;

pub fn run<S: RecordService>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_records(store.get_records()))
}
