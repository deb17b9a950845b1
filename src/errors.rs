/// Error type representing failures while resolving the byte count to format.
///
/// The formatter itself never fails; these errors only arise when the command line
/// input cannot be turned into a single byte count.
#[derive(Debug)]
pub enum SizeError {
    /// Represents underlying I/O errors from the standard library.
    ///
    /// This variant wraps [`std::io::Error`] and is produced when the metadata of a
    /// file passed with `--file` cannot be read.
    IoError(std::io::Error),

    /// Represents a path that does not point at a regular file.
    PathError(String),

    /// Represents missing or conflicting command line input.
    InputError(String),
}

impl From<std::io::Error> for SizeError {
    /// Converts a [`std::io::Error`] into a [`SizeError`].
    ///
    /// # Examples
    /// ```
    /// use std::fs::File;
    /// use kbsize::errors::SizeError;
    ///
    /// fn open_missing() -> Result<(), SizeError> {
    ///     let _file = File::open("nonexistent.txt")?;
    ///     Ok(())
    /// }
    /// assert!(matches!(open_missing(), Err(SizeError::IoError(_))));
    /// ```
    fn from(err: std::io::Error) -> Self {
        SizeError::IoError(err)
    }
}

impl std::fmt::Display for SizeError {
    /// # Examples
    /// ```
    /// use kbsize::errors::SizeError;
    /// let err = SizeError::PathError("/tmp is a directory".to_string());
    /// assert_eq!(format!("{}", err), "Path error: /tmp is a directory");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeError::IoError(e) => write!(f, "IO error: {}", e),
            SizeError::PathError(e) => write!(f, "Path error: {}", e),
            SizeError::InputError(e) => write!(f, "Input error: {}", e),
        }
    }
}

impl std::error::Error for SizeError {
    /// Only [`SizeError::IoError`] wraps another error, so it is the only variant with a source.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SizeError::IoError(e) => Some(e),
            _ => None,
        }
    }
}
