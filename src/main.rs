mod bootstrap;

use crate::bootstrap::cli::{Cli, Command, Imaging};
use crate::bootstrap::{config, logging};
use anyhow::{Context, Result};
use clap::Parser;
use picstash_events::{AppEvent, EventBus};
use picstash_filesystem::FileSystem;
use picstash_imaging::{ImageTool, MagickTool, NativeTool};
use picstash_models::UploadedFile;
use picstash_utils::naming;
use picstash_variants::Picstash;
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.verbose, cli.json_logs);

    let events = EventBus::new(cli.quiet);

    if let Command::Init = cli.command {
        let path = config::write_template(&cli.config).await?;
        println!("{}", path);
        return Ok(());
    }

    let config = config::load(&cli.config, &events).await?;
    let tool: Arc<dyn ImageTool> = match cli.imaging {
        Imaging::Native => Arc::new(NativeTool::new()),
        Imaging::Magick => Arc::new(MagickTool::new(cli.convert.clone())),
    };
    let service = Picstash::with_tool(config, cli.storage, tool, events.clone()).await?;

    match cli.command {
        Command::Init => {}
        Command::Upload { file, content_type } => {
            let content_type =
                content_type.unwrap_or_else(|| FileSystem::guess_content_type(&file));
            let upload = stage_upload(&file, content_type).await?;

            match service.upload(&upload).await {
                Ok(name) => println!("{}", name),
                Err(e) => {
                    events.emit(AppEvent::Error {
                        context: format!("Upload of {}", file.display()),
                        error: e.to_string(),
                    });
                    return Err(e.into());
                }
            }
        }
        Command::Remove { name } => {
            service.remove(&name).await?;
        }
        Command::Url { name, variant } => match variant {
            Some(variant) => println!("{}", service.url(&name, &variant)?),
            None => {
                for (variant, url) in service.urls(&name)? {
                    println!("{}\t{}", variant, url);
                }
            }
        },
    }

    Ok(())
}

/// Copies the input to a temp file so the pipeline can consume it without
/// deleting the user's original
async fn stage_upload(file: &Path, content_type: String) -> Result<UploadedFile> {
    let staged = std::env::temp_dir().join(format!("picstash-{}", naming::generate_token()));
    tokio::fs::copy(file, &staged)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    tracing::debug!("Staged {} at {}", file.display(), staged.display());
    Ok(UploadedFile::new(staged, content_type))
}
