use clap::{Parser, Subcommand, ValueEnum};
use picstash_config::{StorageKind, DEFAULT_CONFIG_FILE};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "picstash", version, about = "Generate and store resized and cropped image variants")]
pub struct Cli {
    /// JSON config file
    #[arg(long, env = "PICSTASH_CONFIG", default_value = DEFAULT_CONFIG_FILE, global = true)]
    pub config: String,

    /// Storage backend to write to: dir or aws
    #[arg(long, default_value = "dir", value_parser = parse_storage, global = true)]
    pub storage: StorageKind,

    /// Image tool used to render variants
    #[arg(long, value_enum, default_value_t = Imaging::Native, global = true)]
    pub imaging: Imaging,

    /// ImageMagick binary used with `--imaging magick`
    #[arg(long, default_value = "convert", global = true)]
    pub convert: String,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON log lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Only print results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Imaging {
    /// In-process decoding and encoding
    Native,
    /// Shell out to ImageMagick
    Magick,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a starter config file
    Init,

    /// Generate and store every variant of an image, print its name
    Upload {
        file: PathBuf,

        /// MIME type, guessed from the extension when omitted
        #[arg(long)]
        content_type: Option<String>,
    },

    /// Delete every variant of a previously uploaded name
    Remove { name: String },

    /// Print the URL of one variant, or of all variants
    Url { name: String, variant: Option<String> },
}

fn parse_storage(value: &str) -> Result<StorageKind, String> {
    value.parse().map_err(|e: picstash_config::ConfigError| e.to_string())
}
