use std::{ffi::OsStr, path::PathBuf};

use crate::BenchCompareError;

const USAGE: &str = "Usage: benchcompare <old.txt> <new.txt>";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub old: PathBuf,
    pub new: PathBuf,
}

impl CommandLineConfig {
    /// Parses a full argument vector, program name included. Every argument
    /// after the program name is a report path; exactly two are required.
    pub fn from_args<S: AsRef<OsStr>>(args: &[S]) -> Result<Self, BenchCompareError> {
        match args {
            [_, old, new] => Ok(Self {
                old: PathBuf::from(old),
                new: PathBuf::from(new),
            }),
            _ => Err(BenchCompareError::usage(USAGE)),
        }
    }

    pub fn usage() -> &'static str {
        USAGE
    }
}
