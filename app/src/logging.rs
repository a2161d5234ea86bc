use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::ValueEnum;
use log::LevelFilter;
use pretty_env_logger::env_logger::{
    Builder,
    fmt::{Target, TimestampPrecision},
};
use strum::Display;

pub const LOG_DIRECTORY: &str = "logs";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
        }
    }
}

/// Installs the global logger. Every level but `Off` writes to a fresh
/// timestamped file under [`LOG_DIRECTORY`].
pub fn init(level: LogLevel) -> Result<()> {
    configure(Path::new(LOG_DIRECTORY), level, Local::now().naive_local())?
        .try_init()
        .context("logger is already installed")
}

fn configure(directory: &Path, level: LogLevel, timestamp: NaiveDateTime) -> Result<Builder> {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder
        .format_timestamp(Some(TimestampPrecision::Seconds))
        .filter(None, level.into());

    if level != LogLevel::Off {
        let log_file = open_log_file(directory, timestamp)?;
        builder.target(Target::Pipe(Box::from(log_file)));
    }

    Ok(builder)
}

fn open_log_file(directory: &Path, timestamp: NaiveDateTime) -> Result<File> {
    fs::create_dir_all(directory)
        .with_context(|| format!("failed to create log directory {}", directory.display()))?;

    let path = log_file_path(directory, timestamp);
    File::create(&path).with_context(|| format!("failed to create log file {}", path.display()))
}

fn log_file_path(directory: &Path, timestamp: NaiveDateTime) -> PathBuf {
    directory.join(format!(
        "ygocdb-tui_{}.log",
        timestamp.format("%Y-%m-%d_%H-%M-%S")
    ))
}
