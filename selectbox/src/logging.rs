use std::fs::File;
use std::path::Path;

use simplelog::{Config, WriteLogger};

pub use simplelog::LevelFilter;

use crate::error::SelectError;

/// Send `log` output to a file. The terminal is busy drawing, so hosts log
/// to disk instead of stderr.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<(), SelectError> {
    let file = File::create(path)?;
    WriteLogger::init(level, Config::default(), file).map_err(|e| SelectError::Logger(e.to_string()))
}
