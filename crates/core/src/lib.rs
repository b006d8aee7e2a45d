//! agendo_core - domain logic for the agendo scheduling client.
//!
//! Everything in here is pure: wire types, timestamp normalization, time
//! window filtering and chronological ordering. All I/O lives in the
//! client crate.

pub mod agenda;
