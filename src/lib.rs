#[macro_use]
extern crate failure;

use failure::Error;
use std::fs;

pub mod dial;

/// Read the puzzle input named by the first command-line argument, falling
/// back to `default` when no argument was given.
pub fn read_input(default: &str) -> Result<String, Error> {
    let path = std::env::args().nth(1).unwrap_or_else(|| default.to_string());
    Ok(fs::read_to_string(path)?)
}
