use super::models::{AppEvent, EventBus};
use colored::Colorize;
use std::sync::Arc;

impl EventBus {
    pub fn new(silent_mode: bool) -> Arc<Self> {
        Arc::new(Self { silent_mode })
    }

    /// Bus that only forwards to tracing (library default)
    pub fn silent() -> Arc<Self> {
        Self::new(true)
    }

    pub fn emit(&self, event: AppEvent) {
        match event {
            // Configuration
            AppEvent::ConfigLoading { path } => {
                tracing::debug!("Loading config from {}", path);
                if !self.silent_mode {
                    println!("  {} {}", "Loading config".dimmed(), path.cyan());
                }
            }
            AppEvent::ConfigLoaded { resize_count, crop_count } => {
                tracing::debug!("Config loaded: {} resize, {} crop", resize_count, crop_count);
                if self.silent_mode {
                    return;
                }
                if resize_count + crop_count == 0 {
                    println!("  {} No variants configured", "⚠".yellow());
                } else {
                    println!(
                        "  {} {} resize, {} crop variant(s)",
                        "✓".green(),
                        resize_count.to_string().cyan(),
                        crop_count.to_string().cyan()
                    );
                }
            }

            // Storage
            AppEvent::StorageReady { kind, location, remote } => {
                let scope = if remote { "remote" } else { "local" };
                tracing::info!("Storage backend ready: {} {} ({})", scope, kind, location);
                if !self.silent_mode {
                    println!(
                        "  {} Storage {} ({}) {}",
                        "✓".green(),
                        kind.cyan(),
                        scope,
                        location.dimmed()
                    );
                }
            }

            // Uploads
            AppEvent::UploadStarted { source, name } => {
                tracing::debug!("Generating variants of {} as {}", source, name);
            }
            AppEvent::VariantStored { variant, url } => {
                tracing::debug!("Stored variant {} at {}", variant, url);
                if !self.silent_mode {
                    println!("  {} {} {}", "+".green(), variant.cyan(), url.dimmed());
                }
            }
            AppEvent::VariantFailed { variant, error } => {
                tracing::warn!("Variant {} failed: {}", variant, error);
                if !self.silent_mode {
                    println!("  {} {} {}", "✗".red(), variant.cyan(), error.dimmed());
                }
            }
            AppEvent::UploadCompleted { name, stored, failed, duration } => {
                tracing::info!(
                    "Upload {} finished in {:?}: {} stored, {} failed",
                    name,
                    duration,
                    stored,
                    failed
                );
                if self.silent_mode {
                    return;
                }
                if failed == 0 {
                    println!("  {} Uploaded {} ({} variant(s))", "✓".green(), name.cyan(), stored);
                } else {
                    println!(
                        "  {} Uploaded {} with {} failure(s)",
                        "⚠".yellow(),
                        name.cyan(),
                        failed.to_string().red()
                    );
                }
            }

            // Removal
            AppEvent::RemoveCompleted { name, removed, failed } => {
                tracing::info!("Removed {}: {} ok, {} failed", name, removed, failed);
                if !self.silent_mode {
                    println!("  {} Removed {} ({} variant(s))", "-".red(), name.cyan(), removed);
                }
            }

            // Errors
            AppEvent::Error { context, error } => {
                tracing::error!("{}: {}", context, error);
            }
        }
    }
}
