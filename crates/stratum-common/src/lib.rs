//! Common utilities for the stratum layer engine.
//!
//! This crate provides shared infrastructure used by the box tree and the
//! layer engine:
//! - **Warning System** - deduplicated diagnostics routed through [`log`]

pub mod warning;
