//! Core building blocks: the in-memory `Table`, column selection, inversion
//! parameters and the inversion itself. These are consumed by the high-level
//! `api` module.
pub mod params;
pub mod processing;
pub mod table;
