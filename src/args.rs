use clap::Parser;
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Byte count to format (negative and non-finite values print "0 KB")
    #[arg(allow_negative_numbers = true, conflicts_with = "file")]
    pub bytes: Option<f64>,

    /// (optional) Format the on-disk size of this file instead of a value
    #[arg(short = 'f', long = "file")]
    pub file: Option<String>,

    #[arg(short, long)]
    pub verbose: bool,
}
