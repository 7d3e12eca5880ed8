// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;

pub mod csv;
pub mod file;
pub mod progress;
pub mod scrape;
