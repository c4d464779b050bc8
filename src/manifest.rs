// src/manifest.rs
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::debug;

use crate::error::{IconError, Result};
use crate::garden::render_garden_icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// App-wide source icon.
    Resource,
    Launcher,
    LauncherRound,
    /// Foreground layer of an Android adaptive icon.
    AdaptiveForeground,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    pub path: &'static str,
    pub size: u32,
    pub kind: IconKind,
}

const fn entry(path: &'static str, size: u32, kind: IconKind) -> ManifestEntry {
    ManifestEntry { path, size, kind }
}

use IconKind::*;

pub const MANIFEST: &[ManifestEntry] = &[
    entry("resources/icon.png", 1024, Resource),
    entry("android/app/src/main/res/mipmap-mdpi/ic_launcher.png", 48, Launcher),
    entry("android/app/src/main/res/mipmap-hdpi/ic_launcher.png", 72, Launcher),
    entry("android/app/src/main/res/mipmap-xhdpi/ic_launcher.png", 96, Launcher),
    entry("android/app/src/main/res/mipmap-xxhdpi/ic_launcher.png", 144, Launcher),
    entry("android/app/src/main/res/mipmap-xxxhdpi/ic_launcher.png", 192, Launcher),
    entry("android/app/src/main/res/mipmap-mdpi/ic_launcher_round.png", 48, LauncherRound),
    entry("android/app/src/main/res/mipmap-hdpi/ic_launcher_round.png", 72, LauncherRound),
    entry("android/app/src/main/res/mipmap-xhdpi/ic_launcher_round.png", 96, LauncherRound),
    entry("android/app/src/main/res/mipmap-xxhdpi/ic_launcher_round.png", 144, LauncherRound),
    entry("android/app/src/main/res/mipmap-xxxhdpi/ic_launcher_round.png", 192, LauncherRound),
    entry("android/app/src/main/res/mipmap-mdpi/ic_launcher_foreground.png", 108, AdaptiveForeground),
    entry("android/app/src/main/res/mipmap-hdpi/ic_launcher_foreground.png", 162, AdaptiveForeground),
    entry("android/app/src/main/res/mipmap-xhdpi/ic_launcher_foreground.png", 216, AdaptiveForeground),
    entry("android/app/src/main/res/mipmap-xxhdpi/ic_launcher_foreground.png", 324, AdaptiveForeground),
    entry("android/app/src/main/res/mipmap-xxxhdpi/ic_launcher_foreground.png", 432, AdaptiveForeground),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub path: PathBuf,
    pub size: u32,
}

/// Render every entry of `manifest` under `root`, creating directories as needed.
/// Existing files are overwritten; the first failure aborts the run.
pub fn generate_icons(root: &Path, manifest: &[ManifestEntry]) -> Result<Vec<GeneratedIcon>> {
    let mut generated = Vec::with_capacity(manifest.len());

    for entry in manifest {
        let path = root.join(entry.path);
        if let Some(parent) = path.parent() {
            debug!("Ensuring directory {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|source| IconError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let started = Instant::now();
        let icon = render_garden_icon(entry.size);
        debug!("Rendered {}x{} in {:?}", entry.size, entry.size, started.elapsed());

        icon.save(&path).map_err(|source| IconError::Save {
            path: path.clone(),
            source,
        })?;

        let label = match entry.kind {
            AdaptiveForeground => "Created adaptive",
            _ => "Created",
        };
        println!("{}: {} ({}x{})", label, entry.path, entry.size, entry.size);

        generated.push(GeneratedIcon {
            path,
            size: entry.size,
        });
    }

    Ok(generated)
}
