//! Parsers for model output and persisted history
//!
//! # Error Handling Strategy
//!
//! Model output is unreliable, so parsing is split into a strict outer layer and a
//! lenient inner layer:
//!
//! - **Payload isolation** ([`extractor`]): the record list must be present and must
//!   parse. Missing delimiters and malformed JSON are hard failures, reported as
//!   distinct [`SearchError`](crate::pipeline::SearchError) variants so the caller can
//!   tell sourcing problems from synthesis problems.
//!
//! - **Record cleanup** ([`normalizer`]): individual records never fail. Missing keys
//!   take defaults, placeholder values such as "N/A" become empty strings, and the
//!   batch succeeds as long as the list is non-empty.
//!
//! - **History deserialization** ([`deserializers`]): timestamps are accepted as
//!   Unix milliseconds or RFC3339 strings.

pub mod deserializers;
pub mod extractor;
pub mod normalizer;

pub use extractor::{Extraction, extract, map_citations, parse_payload};
pub use normalizer::{PLACEHOLDERS, is_placeholder, normalize, normalize_record, renormalize};
