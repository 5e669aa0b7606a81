//! CLI argument definitions using clap.
//!
//! `dashi18n <input> [<output>]` labels the literals of one dashboard
//! document and prints the result, or writes it to `<output>`.

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Dashboard JSON document to translate
    pub input: Option<PathBuf>,

    /// Write the result to this file instead of standard output
    pub output: Option<PathBuf>,

    /// Primary authoring language (overrides config file)
    #[arg(long)]
    pub primary_locale: Option<String>,

    /// Fail when a translation has no primary-language entry instead of dropping it
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Return the input path, or print help to stdout and return None.
    pub fn input_or_help(&self) -> Option<&Path> {
        match &self.input {
            Some(input) => Some(input),
            None => {
                Self::command().print_help().ok();
                None
            }
        }
    }
}
