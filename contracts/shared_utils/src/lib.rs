#![no_std]

//! Shared utility library for escrow contracts
//!
//! This library provides the helpers and patterns the lock contracts are
//! built from:
//! - Time utilities (ledger clock, schedule checks)
//! - Validation utilities
//! - Storage helpers
//! - Error codes, revert reasons and error logging
//! - Access control patterns
//! - Event emission patterns

pub mod access_control;
pub mod error_codes;
pub mod errors;
pub mod events;
pub mod storage;
pub mod time;
pub mod validation;


// Re-export commonly used items
pub use access_control::*;
pub use error_codes::*;
pub use errors::*;
pub use events::*;
pub use storage::Storage;
pub use time::*;
pub use validation::*;
