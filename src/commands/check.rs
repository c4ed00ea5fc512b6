//! Validate every content collection

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::path::Path;
use std::time::Duration;

use crate::Site;

/// Record counts of a successful check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub posts: usize,
    pub leaders: usize,
    pub outreach_events: usize,
    pub sponsors: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.posts + self.leaders + self.outreach_events + self.sponsors
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} posts, {} leaders, {} outreach events, {} sponsors",
            self.posts, self.leaders, self.outreach_events, self.sponsors
        )
    }
}

/// Load every collection, failing on the first invalid file
pub fn run(site: &Site) -> Result<Summary> {
    let start = std::time::Instant::now();

    let summary = Summary {
        posts: site.posts()?.len(),
        leaders: site.leaders()?.len(),
        outreach_events: site.outreach_events()?.len(),
        sponsors: site.sponsors()?.len(),
    };

    tracing::info!(
        "Validated {} records in {:.2}s",
        summary.total(),
        start.elapsed().as_secs_f64()
    );
    Ok(summary)
}

/// Whether a changed path can affect the check result
fn is_relevant(site: &Site, path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    if path_str.contains(".DS_Store") || path_str.ends_with('~') {
        return false;
    }
    path.starts_with(&site.content_dir) || path == site.config_path()
}

/// Re-run the check whenever content or configuration changes
pub fn watch(site: &Site) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();

    // Create debouncer to avoid multiple rapid re-checks
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    // The content directory may not exist yet, or the config may move it,
    // so watch the whole site and filter events
    debouncer
        .watcher()
        .watch(&site.base_dir, RecursiveMode::Recursive)?;
    tracing::debug!("Watching: {:?}", site.base_dir);
    if !site.content_dir.exists() {
        tracing::info!(
            "Content directory {:?} does not exist yet, waiting for it",
            site.content_dir
        );
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut site = site.clone();
    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant: Vec<_> = events
                    .iter()
                    .filter(|e| is_relevant(&site, &e.path))
                    .collect();

                if relevant.is_empty() {
                    continue;
                }

                for event in &relevant {
                    tracing::info!("File changed: {}", event.path.display());
                }

                // The config may have moved the content directories
                site = match Site::new(&site.base_dir) {
                    Ok(site) => site,
                    Err(e) => {
                        tracing::error!("Failed to reload configuration: {}", e);
                        continue;
                    }
                };

                match run(&site) {
                    Ok(summary) => println!("Content OK: {}", summary),
                    Err(e) => println!("Content invalid: {}", e),
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}
