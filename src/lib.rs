//! A contact book with normalized phone numbers, mirrored into a key-value
//! store after every change.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod prelude;
pub mod storage;
