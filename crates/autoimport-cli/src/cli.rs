use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "autoimport",
    version,
    about = "Generate Rust glue for a Ruby library by discovering its sources and constants"
)]
pub struct Cli {
    /// Base path of the Ruby library sources
    pub base: String,

    /// Library (package) to import
    pub package: String,

    /// Output file for the generated glue
    pub out_file: PathBuf,

    /// Comma-separated list of raw source paths under the base path
    pub sources: Option<String>,
}
