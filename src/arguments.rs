//! Result of a read: positional arguments and which options were supplied.

use std::collections::BTreeSet;

use crate::errors::{OptionsError, Result};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedArguments {
    positional: Vec<String>,
    supplied: BTreeSet<String>,
}

impl ParsedArguments {
    pub fn new(positional: Vec<String>, supplied: BTreeSet<String>) -> Self {
        Self {
            positional,
            supplied,
        }
    }

    pub fn num_args(&self) -> usize {
        self.positional.len()
    }

    /// Positional argument `i`, counting from 1.
    pub fn try_get_arg(&self, i: usize) -> Result<&str> {
        if i == 0 || i > self.positional.len() {
            return Err(OptionsError::PositionalIndexOutOfRange {
                index: i,
                count: self.positional.len(),
            });
        }
        Ok(&self.positional[i - 1])
    }

    /// Positional argument `i`, counting from 1.
    ///
    /// # Panics
    /// If `i` is outside `1..=num_args()`; asking for an argument the program
    /// never validated is a bug in the program.
    pub fn get_arg(&self, i: usize) -> &str {
        self.try_get_arg(i).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Like [`get_arg`](Self::get_arg) but returns `""` when out of range.
    pub fn get_opt_arg(&self, i: usize) -> &str {
        self.try_get_arg(i).unwrap_or_default()
    }

    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// True if `name` was set on the command line or in a config file.
    pub fn was_supplied(&self, name: &str) -> bool {
        self.supplied.contains(name)
    }

    pub fn supplied(&self) -> impl Iterator<Item = &str> {
        self.supplied.iter().map(String::as_str)
    }
}
