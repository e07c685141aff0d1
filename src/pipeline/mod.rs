//! Prospect search pipeline and its failure reporting
//!
//! # Error Handling Strategy
//!
//! Every failure surfaces to the caller as one [`SearchError`] with a user-facing
//! message and a best-guess implicated [`Stage`]:
//!
//! - **Sourcing failures** (no candidates, empty list) implicate the maps lookup.
//! - **Synthesis failures** (citations but no list, unreadable list) implicate the
//!   AI synthesis step.
//! - **Transport failures** are attributed by [`classify`], which inspects the
//!   error text.
//!
//! Nothing is retried automatically. The [`StageBoard`] is display state owned by
//! the caller; the pipeline only supplies its inputs.

pub mod classifier;
pub mod errors;
pub mod search;
pub mod stages;

pub use classifier::{classify, classify_message};
pub use errors::SearchError;
pub use search::{interpret, search_prospects};
pub use stages::{Stage, StageBoard, StageStatus};
