use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::Track;
use super::title::{public_src, title_from_file_name};

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// List the audio directory in file-name order.
///
/// Only the directory itself is read. Any failure to open it (missing,
/// not a directory, permission denied) yields an empty catalog.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    // A missing root only shows up as a walk error; probe it so it gets logged.
    if let Err(e) = fs::read_dir(dir) {
        warn!(dir = %dir.display(), error = %e, "audio directory unavailable, serving empty catalog");
        return Vec::new();
    }

    let mut tracks: Vec<Track> = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!(error = %err, "skipping unreadable catalog entry");
                None
            }
        })
    {
        let path = entry.path();
        if !path.is_file()
            || (!settings.include_hidden && is_hidden(path))
            || !is_audio_file(path, settings)
        {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|s| s.to_str()) else {
            debug!(path = %path.display(), "skipping non UTF-8 file name");
            continue;
        };

        tracks.push(Track {
            title: title_from_file_name(file_name),
            src: public_src(&settings.public_prefix, file_name),
        });
    }

    debug!(dir = %dir.display(), count = tracks.len(), "catalog listed");
    tracks
}
