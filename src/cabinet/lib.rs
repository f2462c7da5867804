//! # Cabinet Architecture
//!
//! Cabinet keeps person records (name, date of birth, area code, savings, gender)
//! in memory and answers exact-match lookups by first name, last name and date of
//! birth. Like any library that happens to have a CLI client, the interesting part
//! lives here, not in the binary.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, cli/)                                        │
//! │  - Startup flags, prompting, the command loop, printing     │
//! │  - The ONLY place that touches stdin/stdout                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create, edit, list, stat, find, export                   │
//! │  - Operates on Rust types, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordService trait, RecordStore with three indexes      │
//! │  - Asks a RecordValidator before every create and edit      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Index Invariant
//!
//! The store keeps one primary list and three secondary indexes. After every
//! create or edit, each record is filed exactly once per index under the key its
//! current value derives. See `store/mod.rs`.
//!
//! ## Testing Strategy
//!
//! 1. **Store** (`store/`): unit tests plus a property test over random
//!    create/edit sequences checking the index invariant.
//! 2. **Commands** (`commands/*.rs`): result shape and messages.
//! 3. **API** (`api.rs`, `tests/`): dispatch and end-to-end scenarios.
//! 4. **CLI** (`tests/cli_session.rs`): drives the binary over stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: The indexed record store
//! - [`validation`]: Record validators and the two preset rule sets
//! - [`snapshot`]: Immutable point-in-time copies of the records
//! - [`export`]: CSV and XML snapshot writers
//! - [`model`]: Core data types (`Record`, `RecordData`)
//! - [`input`]: Console text to field value conversion
//! - [`config`]: Configuration management
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod logging;
pub mod model;
pub mod snapshot;
pub mod store;
pub mod validation;
