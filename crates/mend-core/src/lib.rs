//! # mend-core
//!
//! Core library for Mend. Scans text for merge-conflict markers,
//! plans a resolution per conflict region and applies the resulting
//! edits against a host-owned document.

pub mod config;
pub mod document;
mod error;
pub mod resolver;
pub mod scanner;
pub mod traits;

pub use config::Config;
pub use document::{FileDocument, MemoryDocument};
pub use error::{Error, Result};
pub use resolver::{FixedChoice, Resolution, ResolutionPlan, ResolveSummary, ScriptedChoices};
pub use scanner::{ConflictRegion, scan};
pub use traits::{ChoiceSource, Document};
