// src/specs/mod.rs
//! # Source "specs"
//!
//! Knowledge of how the Disease-Symptom KB page encodes its data lives here,
//! kept apart from the generic scanning in `core::html`.
//!
//! ## What lives here
//! - **Row interpretation** (`kb`): turning the table's merged-cell layout
//!   into `(disease, frequency, symptom)` triples by carrying the last seen
//!   disease across continuation rows.
//! - **Code normalization** (`umls`): turning coded cells such as
//!   `UMLS:C0018681_headache` into display names.
//!
//! ## What does **not** live here
//! - Fetching, charset decoding and tag scanning (`core`).
//! - Validation, relation building, snapshot I/O (`validate`, `relations`,
//!   `store`).
//!
//! ## Typical call chain
//! ```text
//! runner → core::net::Fetcher::fetch → core::html::extract
//!        → specs::kb::interpret → validate → relations → store
//! ```
//!
//! Specs are pure functions over extracted rows, so they are tested offline
//! against hand-built rows.
pub mod kb;
pub mod umls;
