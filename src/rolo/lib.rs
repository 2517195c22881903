//! # rolo
//!
//! A file-backed address book and notebook for the command line. Contacts
//! carry validated phone numbers and an optional birthday; notes carry
//! free text and tags. Everything lives in two pretty-printed JSON files
//! plus a config file under one data directory.
//!
//! ## Architecture
//!
//! The crate is layered; each layer only calls downward:
//!
//! ```text
//! main.rs / repl.rs      interactive shell: prompt, tokenizer, rendering
//!         |
//!       api.rs           Assistant facade: owns loaded state, write-through saves
//!         |
//!      commands/         one function per command: args in, display string out
//!         |
//!  field / record / book / notes     the data model and its algorithms
//!         |
//!       store/           DataStore trait: FileStore (disk), InMemoryStore (tests)
//! ```
//!
//! - [`field`]: validated scalars (`Name`, `Phone`, `Birthday`) sharing the
//!   `{"value": ...}` wire shape
//! - [`record`]: one contact and its phone/birthday operations
//! - [`book`]: the name-keyed collection and the upcoming-birthday window
//! - [`notes`]: free-text notes with tag and keyword search
//! - [`commands`]: the user-command boundary (usage errors, message strings)
//! - [`api`]: the [`Assistant`](api::Assistant) facade
//! - [`store`]: persistence behind the [`DataStore`](store::DataStore) trait
//! - [`config`]: settings (`config.json`), currently the birthday window
//! - [`error`]: [`RoloError`](error::RoloError) and the crate [`Result`](error::Result)
//!
//! ## Error model
//!
//! Validation and usage problems are typed errors that render exactly the
//! message the user should see. "Not found" outcomes are ordinary reply
//! strings, not errors. A missing data file is a recoverable "start empty"
//! condition; any other I/O failure propagates.

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod field;
pub mod notes;
pub mod record;
pub mod store;
