//! # Roster
//!
//! An interactive student record manager backed by a flat text file:
//! - One pipe-delimited line per record
//! - Whole file loaded at startup, written back on save-and-exit
//! - In-memory add / search / delete / sort
//! - Numbered console menu
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Shell (menu loop)                       │
//! │                 stdin choice → dispatch                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Manager                               │
//! │              (owns Vec<Record>, single thread)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Store    │          │   Record    │
//!   │ load / save │◄─────────│ line format │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │students.txt │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod manager;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RosterError};
pub use config::Config;
pub use record::Record;
pub use manager::Manager;
pub use shell::{Choice, Shell, ShellState};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Roster
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
