use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::fs::{ensure_parent, ensure_writable};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the storage file to `dest`; with `compress`, also pack it into a `.zip` beside it.
    /// Returns the paths written.
    pub fn backup(src: &Path, dest: &Path, compress: bool, force: bool) -> AppResult<Vec<PathBuf>> {
        if !src.exists() {
            return Err(AppError::StorageNotFound(src.display().to_string()));
        }

        ensure_writable(dest, force)?;
        ensure_parent(dest)?;

        fs::copy(src, dest)?;
        info(format!("Copied {} → {}", src.display(), dest.display()));

        let mut written = vec![dest.to_path_buf()];
        if compress {
            written.push(compress_backup(dest)?);
        }

        Ok(written)
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    // `x.zip` would overwrite the copy being archived: use `x.zip.zip`
    let mut zip_path = path.with_extension("zip");
    if zip_path == path {
        let mut name = path.as_os_str().to_owned();
        name.push(".zip");
        zip_path = PathBuf::from(name);
    }
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "backup.json".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish()?;

    info(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
