use crate::args::Args;
use crate::errors::SizeError;
use filesize::PathExt;
use std::path::{Path, PathBuf};

/// Where the byte count of a run came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Value,
    File(PathBuf),
}

/// Configuration structure containing runtime settings.
///
/// # Fields
///
/// * `bytes` - Byte count that will be formatted
/// * `source` - Whether `bytes` was given directly or measured from a file
///
#[derive(Debug, Clone)]
pub struct Config {
    pub bytes: f64,
    pub source: Source,
}

impl Config {
    /// Builds a new Config instance from provided command line arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * Neither a byte count nor a file was supplied
    /// * The supplied file path is not a regular file
    /// * The file's metadata or on-disk size cannot be read
    ///
    pub fn build(args: &Args) -> Result<Config, SizeError> {
        match (args.bytes, &args.file) {
            (Some(bytes), None) => {
                log::debug!("Formatting byte count given on the command line: {}", bytes);
                Ok(Config {
                    bytes,
                    source: Source::Value,
                })
            }
            (None, Some(file)) => {
                let path = PathBuf::from(file);
                let bytes = size_on_disk(&path)?;
                log::debug!("Measured {} bytes on disk for {}", bytes, path.display());
                Ok(Config {
                    bytes: bytes as f64,
                    source: Source::File(path),
                })
            }
            (Some(_), Some(_)) => Err(SizeError::InputError(
                "pass either a byte count or --file, not both".to_string(),
            )),
            (None, None) => Err(SizeError::InputError(
                "expected a byte count or --file <PATH>".to_string(),
            )),
        }
    }
}

fn size_on_disk(path: &Path) -> Result<u64, SizeError> {
    let metadata = path.metadata()?;
    if !metadata.is_file() {
        return Err(SizeError::PathError(format!(
            "{} is not a regular file",
            path.display()
        )));
    }

    Ok(path.size_on_disk_fast(&metadata)?)
}
