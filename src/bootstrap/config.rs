use anyhow::{Context, Result};
use picstash_config::{Config, DEFAULT_CONFIG_TEMPLATE};
use picstash_events::{AppEvent, EventBus};
use picstash_filesystem::FileSystem;
use std::sync::Arc;

pub async fn load(config_path: &str, events: &Arc<EventBus>) -> Result<Config> {
    let abs_config_path = FileSystem::get_absolute_path_string(config_path)?;

    events.emit(AppEvent::ConfigLoading {
        path: abs_config_path,
    });

    let config = Config::from_file(config_path).await?;

    events.emit(AppEvent::ConfigLoaded {
        resize_count: config.variants.resize.len(),
        crop_count: config.variants.crop.len(),
    });

    Ok(config)
}

/// Writes the starter config, refusing to overwrite an existing file
pub async fn write_template(config_path: &str) -> Result<String> {
    let abs_config_path = FileSystem::get_absolute_path_string(config_path)?;

    if tokio::fs::try_exists(config_path).await? {
        anyhow::bail!("{} already exists", abs_config_path);
    }

    tokio::fs::write(config_path, DEFAULT_CONFIG_TEMPLATE)
        .await
        .with_context(|| format!("Failed to write {}", abs_config_path))?;
    tracing::info!("Created default configuration at: {}", abs_config_path);

    Ok(abs_config_path)
}
