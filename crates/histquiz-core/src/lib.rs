//! histquiz-core — lesson data model and quiz session state machine.
//!
//! This crate defines the wire types the lessons API serves and the pure,
//! synchronous state machine that scores one quiz session. All I/O lives
//! in the `histquiz-client` and `histquiz-cli` crates.

pub mod catalog;
pub mod model;
pub mod search;
pub mod session;
