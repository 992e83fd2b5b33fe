//! UI font discovery
//!
//! Locates a usable TrueType font on the host system and parses it with
//! fontdue. Well-known faces are tried first, then the system font
//! directories are scanned for any parseable .ttf/.otf file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use fontdue::Font;

/// Well-known font files, tried in order
const CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Directories scanned when no well-known font is found
const SCAN_DIRS: &[&str] = &[
    "/usr/share/fonts",
    "/usr/local/share/fonts",
    "/System/Library/Fonts",
    "C:\\Windows\\Fonts",
];

/// Load the UI font from the host system
pub fn load_ui_font() -> Result<Font> {
    for path in CANDIDATES {
        let path = Path::new(path);
        if path.exists() {
            match load_font_file(path) {
                Ok(font) => {
                    tracing::info!("Loaded UI font from {}", path.display());
                    return Ok(font);
                }
                Err(e) => {
                    tracing::debug!("Skipping font {}: {}", path.display(), e);
                }
            }
        }
    }

    for dir in SCAN_DIRS {
        if let Some(font) = scan_dir(Path::new(dir), 0) {
            return Ok(font);
        }
    }

    Err(anyhow!("no usable system font found"))
}

fn load_font_file(path: &Path) -> Result<Font> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Font::from_bytes(bytes, fontdue::FontSettings::default())
        .map_err(|e| anyhow!("parsing {}: {}", path.display(), e))
}

fn scan_dir(dir: &Path, depth: usize) -> Option<Font> {
    if depth > 3 {
        return None;
    }
    let entries = fs::read_dir(dir).ok()?;
    let mut subdirs: Vec<PathBuf> = Vec::new();
    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        } else if path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("ttf") || e.eq_ignore_ascii_case("otf"))
        {
            if let Ok(font) = load_font_file(&path) {
                tracing::info!("Loaded UI font from {}", path.display());
                return Some(font);
            }
        }
    }
    subdirs.into_iter().find_map(|d| scan_dir(&d, depth + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_font_file(Path::new("/nonexistent/font.ttf")).is_err());
    }
}
