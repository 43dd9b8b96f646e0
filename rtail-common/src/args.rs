// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;

use thiserror::Error;

use crate::limits::{DEFAULT_LINES, LINE_COUNT_LIMIT};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("Expected a number after -n")]
    MissingCount,
    #[error("Expected a number after -n, got \"{0}\"")]
    InvalidCount(String),
    #[error("Number is too large or smaller than 0: {0}")]
    CountTooLarge(u64),
    #[error("Number is too large or smaller than 0: {0}")]
    NegativeCount(String),
}

/// Where the lines are read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Input {
    #[default]
    Stdin,
    File(PathBuf),
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdin => write!(f, "standard input"),
            Self::File(path) => write!(f, "\"{}\"", path.display()),
        }
    }
}

impl Input {
    fn from_arg(arg: String) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub lines: u64,
    pub input: Input,
    pub show_help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            lines: DEFAULT_LINES,
            input: Input::Stdin,
            show_help: false,
        }
    }
}

impl Args {
    /// Parse the command line. The first item is the program name.
    ///
    /// Only the last FILE argument is used. `-i` turns every following
    /// argument, including ones that look like switches, into a FILE.
    ///
    /// # Errors
    /// Returns an [`ArgsError`] when `-n` is missing its value, the value is not an
    /// unsigned integer, or it exceeds [`LINE_COUNT_LIMIT`].
    pub fn parse<It: Iterator<Item = String>>(mut it: It) -> Result<Self, ArgsError> {
        trace!("Parsing args");

        let _program_name = it.next();
        let mut args = Self::default();
        let mut process_switches = true;

        while let Some(arg) = it.next() {
            if !process_switches {
                args.input = Input::from_arg(arg);
                continue;
            }

            match arg.as_str() {
                "--help" => {
                    args.show_help = true;
                    return Ok(args);
                }
                "-i" => process_switches = false,
                "-n" => {
                    let value = it.next().ok_or(ArgsError::MissingCount)?;
                    args.lines = parse_count(&value)?;
                }
                _ => args.input = Input::from_arg(arg),
            }
        }

        debug!("Parsed args: {args:?}");
        Ok(args)
    }

    #[must_use]
    pub fn help(program_name: Option<&str>) -> String {
        let program_name = program_name.unwrap_or("rtail");
        format!(
            "\
                 Usage: {program_name} [OPTION]... [FILE]\n\
                 Print the last {DEFAULT_LINES} lines of FILE to standard output.\n\
                 With no FILE, or when FILE is -, read standard input.\n\
                 Options:\n\
                 \x20   -n [X]      Prints the last X lines.\n\
                 \x20   --help      Prints out this help.\n\
                 \x20   -i          Ignores switches/options after this one.\n\
                 \x20               {program_name} -i --help   reads file with name \"--help\"\n\
                 "
        )
    }
}

fn parse_count(value: &str) -> Result<u64, ArgsError> {
    let trimmed = value.trim();
    if trimmed
        .strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(ArgsError::NegativeCount(trimmed.to_string()));
    }

    let count = trimmed
        .parse::<u64>()
        .map_err(|_| ArgsError::InvalidCount(value.to_string()))?;

    if count > LINE_COUNT_LIMIT {
        return Err(ArgsError::CountTooLarge(count));
    }

    Ok(count)
}
