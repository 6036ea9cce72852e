//! Database backup: plain copy with optional zip compression.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::FileOptions;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if dest.exists() {
            return Err(AppError::Other(format!(
                "Backup target already exists: {}",
                dest.display()
            )));
        }

        fs::copy(src, dest)?;

        let final_path = if compress {
            let compressed = compress_backup(dest)?;
            if compressed != dest.to_path_buf() {
                fs::remove_file(dest)?;
            }
            compressed
        } else {
            dest.to_path_buf()
        };

        success(format!("Backup created: {}", final_path.display()));
        Ok(())
    }
}

fn compress_backup(dest: &Path) -> AppResult<PathBuf> {
    let zip_path = dest.with_extension("zip");
    if zip_path == dest {
        return Ok(dest.to_path_buf());
    }

    let file = File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    let entry_name = dest
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "database.sqlite".to_string());

    zip.start_file(entry_name, options)
        .map_err(|e| AppError::Other(format!("Backup failed (start_file): {e}")))?;

    let content = fs::read(dest)?;
    zip.write_all(&content)?;

    zip.finish()
        .map_err(|e| AppError::Other(format!("Backup failed (finish): {e}")))?;

    Ok(zip_path)
}
