//! Nerd Font installation
//!
//! Downloads the Meslo Nerd Font release archive to a temporary file,
//! extracts the font faces flat into the platform font directory, and
//! refreshes the fontconfig cache where the platform needs it. Presence is a
//! filename scan of the font directory for the family prefix the archive is
//! guaranteed to contain.

use std::fs;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use walkdir::WalkDir;
use zip::ZipArchive;

use crate::error::{Result, ShellsmithError};
use crate::net;
use crate::pkg;

pub const FONT_ARCHIVE_URL: &str =
    "https://github.com/ryanoasis/nerd-fonts/releases/latest/download/Meslo.zip";

/// Every face in the archive carries this family prefix
pub const FONT_FILE_PREFIX: &str = "MesloLGS";

/// Whether any face of the family is already installed
pub fn installed(font_dir: &Path) -> bool {
    if !font_dir.is_dir() {
        return false;
    }
    WalkDir::new(font_dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .any(|entry| {
            entry.file_type().is_file()
                && entry
                    .file_name()
                    .to_string_lossy()
                    .starts_with(FONT_FILE_PREFIX)
        })
}

/// Download and extract the font faces into `font_dir`
pub fn install(font_dir: &Path, refresh_cache: bool) -> Result<()> {
    fs::create_dir_all(font_dir)?;

    let mut archive_file = tempfile::tempfile()?;
    net::download_to(FONT_ARCHIVE_URL, &mut archive_file)?;
    archive_file.seek(SeekFrom::Start(0))?;

    let extracted = extract_faces(archive_file, font_dir)?;
    if extracted == 0 {
        return Err(ShellsmithError::ArchiveExtractFailed {
            reason: "archive contains no font faces".to_string(),
        });
    }

    if refresh_cache {
        refresh_font_cache()?;
    }
    Ok(())
}

/// Extract `.ttf`/`.otf` entries flat into the font directory
fn extract_faces<R: Read + Seek>(reader: R, font_dir: &Path) -> Result<usize> {
    let mut archive =
        ZipArchive::new(reader).map_err(|e| ShellsmithError::ArchiveExtractFailed {
            reason: e.to_string(),
        })?;

    let mut extracted = 0;
    for index in 0..archive.len() {
        let mut file = archive
            .by_index(index)
            .map_err(|e| ShellsmithError::ArchiveExtractFailed {
                reason: e.to_string(),
            })?;
        let Some(enclosed) = file.enclosed_name().map(Path::to_path_buf) else {
            continue;
        };
        if !is_font_face(&enclosed) {
            continue;
        }
        // Flatten: archives nest faces under variant directories
        let Some(file_name) = enclosed.file_name() else {
            continue;
        };
        let out_path = font_dir.join(file_name);
        let mut out_file = fs::File::create(&out_path)?;
        io::copy(&mut file, &mut out_file)?;
        extracted += 1;
    }

    Ok(extracted)
}

fn is_font_face(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("ttf" | "otf")
    )
}

fn refresh_font_cache() -> Result<()> {
    pkg::run_command("fc-cache", &["-f".to_string()])
}
