//! Saving templates to disk.
//!
//! Writes go to a temporary sibling file which is synced and then renamed over
//! the target, so an interrupted save never leaves a truncated template. On
//! crash a `.{filename}.tmp` file may remain next to the target.

use crate::error::{Result, ScaffoldError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write `template` to `path`, followed by a trailing newline.
///
/// Missing parent directories are created.
pub fn save_template<P: AsRef<Path>>(path: P, template: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            ScaffoldError::Io(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    let mut content = String::with_capacity(template.len() + 1);
    content.push_str(template);
    if !content.ends_with('\n') {
        content.push('\n');
    }

    write_and_sync(&temp_path, content.as_bytes())?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ScaffoldError::Io(format!("failed to write '{}': {}", path.display(), e))
    })?;

    tracing::info!(path = %path.display(), bytes = content.len(), "saved template");
    Ok(())
}

/// `.{filename}.tmp` in the same directory as `target`.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            ScaffoldError::UserError(format!("invalid output path '{}'", target.display()))
        })?;

    let temp_name = format!(".{}.tmp", filename);
    Ok(match target.parent() {
        Some(parent) => parent.join(temp_name),
        None => PathBuf::from(temp_name),
    })
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        ScaffoldError::Io(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            ScaffoldError::Io(format!("failed to write temporary file: {}", e))
        })
}
