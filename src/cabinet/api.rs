//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for cabinet operations, whatever the client.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (find categories, export targets)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own beyond what a command needs (export writes a file),
//! and no presentation: it returns data, not strings to print.
//!
//! ## Generic Over RecordService
//!
//! `CabinetApi<S: RecordService>` is generic over the store, so a client can run
//! against `RecordStore<RuleSet>` or any other implementation of the boundary.

use crate::commands;
use crate::config::CabinetConfig;
use crate::error::Result;
use crate::export::ExportFormat;
use crate::model::{RecordData, RecordId};
use crate::store::RecordService;
use std::path::Path;

pub use crate::commands::find::FindQuery;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct CabinetApi<S: RecordService> {
    store: S,
    config: CabinetConfig,
}

impl<S: RecordService> CabinetApi<S> {
    pub fn new(store: S, config: CabinetConfig) -> Self {
        Self { store, config }
    }

    pub fn create_record(&mut self, data: RecordData) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, data)
    }

    pub fn edit_record(&mut self, id: RecordId, data: RecordData) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, id, data)
    }

    pub fn list_records(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn stat(&self) -> Result<commands::CmdResult> {
        commands::stat::run(&self.store)
    }

    /// `category` is `firstname`, `lastname` or `dateofbirth` in any case.
    pub fn find_records(&self, category: &str, value: &str) -> Result<commands::CmdResult> {
        let query = FindQuery::parse(category, value)?;
        commands::find::run(&self.store, &query)
    }

    /// Relative targets are resolved against the configured export directory.
    pub fn export_records<P: AsRef<Path>>(
        &self,
        format: ExportFormat,
        target: P,
    ) -> Result<commands::CmdResult> {
        let path = self.config.export_path(target);
        commands::export::run(&self.store, format, &path)
    }

    pub fn record_exists(&self, id: RecordId) -> bool {
        self.store.get_record(id).is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &CabinetConfig {
        &self.config
    }
}
