//! Library components of the STRAC converter CLI.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
