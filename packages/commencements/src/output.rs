//! JSON and YAML output for tables of contents and provision lists.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Result;

/// Serialization format for command output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Render `value` in the given format.
///
/// JSON is pretty-printed. YAML starts with a document start marker and
/// has trailing whitespace removed.
pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(value)?)),
        OutputFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(value)?;
            let lines: Vec<&str> = yaml.lines().map(str::trim_end).collect();
            Ok(format!("---\n{}\n", lines.join("\n")))
        }
    }
}

/// Write `value` to `path` in the given format.
///
/// Writes to a temporary file next to `path` and renames it into place, so
/// an interrupted write never leaves a truncated file behind.
pub fn save<T: Serialize + ?Sized>(value: &T, format: OutputFormat, path: &Path) -> Result<()> {
    let content = render(value, format)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    tracing::debug!(path = %path.display(), "Saved output");

    Ok(())
}
