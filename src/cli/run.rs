use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::debug;

use super::args::Arguments;
use crate::{
    config::load_config,
    document::{self, TranslatedFile},
    translations::OrphanPolicy,
};

pub struct RunResult {
    pub input: PathBuf,
    /// `None` when the document went to stdout.
    pub output: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub translated: TranslatedFile,
}

/// Translate `input` and emit the result.
///
/// Nothing is written anywhere unless the whole transformation succeeds.
pub fn run(args: &Arguments, input: &Path) -> Result<RunResult> {
    let config_dir = input
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let loaded = load_config(config_dir)?;
    let mut config = loaded.config;
    if let Some(path) = &loaded.path {
        debug!("Using config {}", path.display());
    }

    if let Some(locale) = &args.primary_locale {
        config.primary_locale = locale.clone();
    }
    if args.strict {
        config.orphan_policy = OrphanPolicy::Fail;
    }
    config.validate()?;

    let translated = document::translate_file(input, &config)?;

    match &args.output {
        Some(output) => document::write(output, &translated.content)?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", translated.content).context("Failed to write to stdout")?;
        }
    }

    Ok(RunResult {
        input: input.to_path_buf(),
        output: args.output.clone(),
        config_path: loaded.path,
        translated,
    })
}
