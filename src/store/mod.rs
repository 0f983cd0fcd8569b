//! Store Module
//!
//! Moves records between the flat data file and memory.
//!
//! ## Responsibilities
//! - Load every record at startup (creating the file if missing)
//! - Overwrite the file with the in-memory collection on save
//! - Inspect the file on disk independently of the collection
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ 1|Alice|a@x.com|CS|88.5                  │
//! │ 2|Bob|b@x.com|CS|72.0                    │
//! │                        (blank lines skip)│
//! │ ... one record per line, '\n' terminated │
//! └──────────────────────────────────────────┘
//! ```
//!
//! The file is opened, read fully and closed on load, then opened,
//! truncated, written and closed on save. Nothing is held open in between.

mod inspect;
mod reader;
mod writer;

pub use inspect::{attributes, read_first_line, FileAttributes};
pub use reader::{load, PartialLoad};
pub use writer::{save, LINE_ENDING};
