//! namepick library — application logic for the name picker binary.

pub mod app;
pub mod config;
pub mod errors;
