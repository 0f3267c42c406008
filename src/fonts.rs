//! Font discovery and registration for Plotters' `ab_glyph` text path.
//!
//! `ab_glyph` does not look at OS fonts, so every family a chart uses must be
//! registered from raw bytes first. Each family maps to a list of candidate
//! files, the real font first and metric-compatible free substitutes after it.

use log::debug;
use plotters::style::{FontFamily, FontStyle};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Mutex, OnceLock};

use crate::error::{Error, Result};

/// The six font families offered to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum FontChoice {
    #[default]
    TimesNewRoman,
    Arial,
    Helvetica,
    Calibri,
    Cambria,
    Georgia,
}

impl FontChoice {
    pub const ALL: [FontChoice; 6] = [
        FontChoice::TimesNewRoman,
        FontChoice::Arial,
        FontChoice::Helvetica,
        FontChoice::Calibri,
        FontChoice::Cambria,
        FontChoice::Georgia,
    ];

    pub fn family_name(&self) -> &'static str {
        match self {
            FontChoice::TimesNewRoman => "Times New Roman",
            FontChoice::Arial => "Arial",
            FontChoice::Helvetica => "Helvetica",
            FontChoice::Calibri => "Calibri",
            FontChoice::Cambria => "Cambria",
            FontChoice::Georgia => "Georgia",
        }
    }

    /// Lower-case file names tried in order.
    fn candidates(&self) -> &'static [&'static str] {
        match self {
            FontChoice::TimesNewRoman => &[
                "times new roman.ttf",
                "timesnewroman.ttf",
                "times.ttf",
                "liberationserif-regular.ttf",
                "tinos-regular.ttf",
                "dejavuserif.ttf",
                "freeserif.ttf",
            ],
            FontChoice::Arial => &[
                "arial.ttf",
                "liberationsans-regular.ttf",
                "arimo-regular.ttf",
                "dejavusans.ttf",
                "freesans.ttf",
            ],
            FontChoice::Helvetica => &[
                "helvetica.ttf",
                "nimbussans-regular.otf",
                "liberationsans-regular.ttf",
                "dejavusans.ttf",
                "freesans.ttf",
            ],
            FontChoice::Calibri => &[
                "calibri.ttf",
                "carlito-regular.ttf",
                "dejavusans.ttf",
                "liberationsans-regular.ttf",
            ],
            FontChoice::Cambria => &[
                "cambria.ttf",
                "caladea-regular.ttf",
                "dejavuserif.ttf",
                "liberationserif-regular.ttf",
            ],
            FontChoice::Georgia => &[
                "georgia.ttf",
                "gelasio-regular.ttf",
                "dejavuserif.ttf",
                "liberationserif-regular.ttf",
            ],
        }
    }

    /// Plotters family handle; valid once [`ensure_registered`] succeeded.
    pub fn family(&self) -> FontFamily<'static> {
        FontFamily::Name(self.family_name())
    }
}

impl fmt::Display for FontChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.family_name())
    }
}

impl FromStr for FontChoice {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let squash = |v: &str| v.to_ascii_lowercase().replace([' ', '_', '-'], "");
        let wanted = squash(s.trim());
        Self::ALL
            .iter()
            .copied()
            .find(|f| squash(f.family_name()) == wanted)
            .ok_or_else(|| Error::UnknownKeyword {
                kind: "font",
                value: s.to_string(),
            })
    }
}

/// Registered families and the file each was loaded from.
static REGISTERED: OnceLock<Mutex<HashMap<FontChoice, PathBuf>>> = OnceLock::new();

fn registry() -> &'static Mutex<HashMap<FontChoice, PathBuf>> {
    REGISTERED.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Directories searched for font files: `extra` first, then the platform's.
pub fn search_dirs(extra: &[PathBuf]) -> Vec<PathBuf> {
    let mut dirs_out: Vec<PathBuf> = extra.to_vec();
    if let Some(d) = dirs::font_dir() {
        dirs_out.push(d);
    }
    if let Some(home) = dirs::home_dir() {
        dirs_out.push(home.join(".fonts"));
        dirs_out.push(home.join(".local/share/fonts"));
    }
    for d in [
        "/usr/share/fonts",
        "/usr/local/share/fonts",
        "/Library/Fonts",
        "/System/Library/Fonts",
        "C:\\Windows\\Fonts",
    ] {
        dirs_out.push(PathBuf::from(d));
    }
    dirs_out.retain(|d| d.is_dir());
    dirs_out.dedup();
    dirs_out
}

/// All `.ttf` / `.otf` files below `dirs`, depth-limited.
fn font_files(dirs: &[PathBuf]) -> Vec<PathBuf> {
    fn walk(dir: &Path, depth: usize, out: &mut Vec<PathBuf>) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                if depth > 0 {
                    walk(&path, depth - 1, out);
                }
            } else if matches!(
                path.extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e.to_ascii_lowercase())
                    .as_deref(),
                Some("ttf") | Some("otf")
            ) {
                out.push(path);
            }
        }
    }
    let mut out = Vec::new();
    for d in dirs {
        walk(d, 4, &mut out);
    }
    out
}

/// Pick the best file for `choice` among `files`: first candidate name that
/// exists, otherwise the first font file found at all.
pub fn locate(choice: FontChoice, files: &[PathBuf]) -> Option<PathBuf> {
    let lower_name = |p: &PathBuf| {
        p.file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_ascii_lowercase())
    };
    for cand in choice.candidates() {
        if let Some(hit) = files.iter().find(|p| lower_name(p).as_deref() == Some(*cand)) {
            return Some(hit.clone());
        }
    }
    let mut sorted: Vec<&PathBuf> = files.iter().collect();
    sorted.sort();
    sorted.first().map(|p| (*p).clone())
}

/// Make `choice` drawable. Idempotent; the first successful load wins.
pub fn ensure_registered(choice: FontChoice, extra_dirs: &[PathBuf]) -> Result<FontFamily<'static>> {
    let mut reg = registry()
        .lock()
        .map_err(|_| Error::Config("font registry poisoned".into()))?;
    if reg.contains_key(&choice) {
        return Ok(choice.family());
    }

    let files = font_files(&search_dirs(extra_dirs));
    let unavailable = || Error::FontUnavailable {
        family: choice.family_name().to_string(),
    };
    let path = locate(choice, &files).ok_or_else(unavailable)?;
    let bytes = fs::read(&path)?;
    // Plotters keeps a reference for the lifetime of the process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    plotters::style::register_font(choice.family_name(), FontStyle::Normal, bytes)
        .map_err(|_| unavailable())?;
    debug!("registered font '{}' from {}", choice, path.display());
    reg.insert(choice, path);
    Ok(choice.family())
}

/// File backing a registered family, if any.
pub fn registered_file(choice: FontChoice) -> Option<PathBuf> {
    registry().lock().ok()?.get(&choice).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_keywords_parse() {
        assert_eq!(
            "times new roman".parse::<FontChoice>().unwrap(),
            FontChoice::TimesNewRoman
        );
        assert_eq!("GEORGIA".parse::<FontChoice>().unwrap(), FontChoice::Georgia);
        assert!("Comic Sans".parse::<FontChoice>().is_err());
    }

    #[test]
    fn locate_prefers_candidates_then_anything() {
        let files = vec![
            PathBuf::from("/f/zzz.ttf"),
            PathBuf::from("/f/DejaVuSerif.ttf"),
            PathBuf::from("/f/LiberationSerif-Regular.ttf"),
        ];
        assert_eq!(
            locate(FontChoice::TimesNewRoman, &files),
            Some(PathBuf::from("/f/LiberationSerif-Regular.ttf"))
        );
        // no Arial candidates at all: falls back to the first file by path
        assert_eq!(
            locate(FontChoice::Arial, &files[..1]),
            Some(PathBuf::from("/f/zzz.ttf"))
        );
        assert_eq!(locate(FontChoice::Arial, &[]), None);
    }
}
