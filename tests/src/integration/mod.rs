//! # Integration Scenarios
//!
//! Cyclic values, cyclic lists and interval configuration used together.

pub mod flows;
