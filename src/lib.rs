pub mod args;
pub mod config;
pub mod errors;
pub mod traits;


pub use traits::{format_size, ByteSize, Unit, GB, KB, MB};

use config::{Config, Source};

/// Renders the line printed for a resolved configuration.
///
/// A size measured from a file is followed by a tab and the file's path.
pub fn render(config: &Config) -> String {
    let size = format_size(config.bytes);
    match &config.source {
        Source::Value => size,
        Source::File(path) => format!("{}\t{}", size, path.display()),
    }
}
