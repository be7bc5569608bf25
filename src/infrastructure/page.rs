// src/infrastructure/page.rs
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempDir};
use tracing::{debug, instrument};

use crate::constants::BROWSER_LAUNCH_DELAY_MS;

/// Writes page snapshots to disk and hands them to the browser.
#[derive(Debug, Default)]
pub struct PageWriter {
    /// Directory of the last temp page; removed when the writer drops.
    temp_dir: Option<TempDir>,
}

impl PageWriter {
    pub fn new() -> Self {
        Self { temp_dir: None }
    }

    /// Wrap container markup in a minimal standalone document.
    pub fn wrap(body: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Restaurant Directory</title>
</head>
<body>
{body}</body>
</html>
"#
        )
    }

    pub fn write_to(&self, path: &Path, body: &str) -> Result<PathBuf> {
        File::create(path)
            .with_context(|| format!("Failed to create page at {}", path.display()))?
            .write_all(Self::wrap(body).as_bytes())
            .context("Failed to write page")?;
        debug!(path = %path.display(), "Wrote page");
        Ok(path.to_path_buf())
    }

    pub fn create_temp_file(&mut self, body: &str) -> Result<PathBuf> {
        let temp_dir = Builder::new()
            .prefix("dinedir-")
            .rand_bytes(5)
            .tempdir()
            .context("Failed to create temporary directory")?;

        let file_path = self.write_to(&temp_dir.path().join("directory.html"), body)?;

        self.temp_dir = Some(temp_dir);

        Ok(file_path)
    }

    #[instrument(level = "debug")]
    pub fn open_in_browser(&self, path: &Path) -> Result<()> {
        let path_str = path.to_str().context("Failed to convert path to string")?;

        #[cfg(target_os = "macos")]
        {
            std::process::Command::new("open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "windows")]
        {
            std::process::Command::new("cmd")
                .args(["/C", "start", path_str])
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "linux")]
        {
            std::process::Command::new("xdg-open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }

        // Keep the temp directory alive briefly
        std::thread::sleep(std::time::Duration::from_millis(BROWSER_LAUNCH_DELAY_MS));

        Ok(())
    }
}
