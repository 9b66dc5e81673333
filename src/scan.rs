use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

pub const DEFAULT_BUNDLE_SUFFIX: &str = ".app";
const ICON_EXTENSION: &str = "icns";

/// An application discovered on disk. Rebuilt on every scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstalledApp {
    pub name: String,
    pub path: String,
    pub icon_path: String,
}

#[derive(Debug, Error)]
#[error("Failed to read directory {path}: {source}")]
pub struct ScanError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

pub struct Scanner {
    dirs: Vec<PathBuf>,
    suffix: String,
}

impl Scanner {
    pub fn new(dirs: Vec<PathBuf>, suffix: &str) -> Self {
        Self {
            dirs,
            suffix: suffix.to_string(),
        }
    }

    /// Scan every directory in order. Unreadable directories are logged and skipped.
    pub fn scan(&self) -> Vec<InstalledApp> {
        let mut apps = Vec::new();
        for dir in &self.dirs {
            match self.scan_dir(dir) {
                Ok(found) => {
                    debug!("Found {} apps in {}", found.len(), dir.display());
                    apps.extend(found);
                }
                Err(e) => warn!("Skipping directory: {e}"),
            }
        }
        info!("Scanned {} apps from {} directories", apps.len(), self.dirs.len());
        apps
    }

    /// Bundles directly inside `dir`, sorted by file name.
    pub fn scan_dir(&self, dir: &Path) -> Result<Vec<InstalledApp>, ScanError> {
        let entries = fs::read_dir(dir).map_err(|source| ScanError {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        names.sort();

        let apps = names
            .iter()
            .filter_map(|file_name| {
                let app_name = file_name.strip_suffix(self.suffix.as_str())?;
                if app_name.is_empty() {
                    return None;
                }
                let bundle = dir.join(file_name);
                Some(InstalledApp {
                    name: app_name.to_string(),
                    path: executable_dir(&bundle).to_string_lossy().to_string(),
                    icon_path: find_icon(&bundle)
                        .map(|p| p.to_string_lossy().to_string())
                        .unwrap_or_default(),
                })
            })
            .collect();
        Ok(apps)
    }
}

fn executable_dir(bundle: &Path) -> PathBuf {
    bundle.join("Contents").join("MacOS")
}

/// First `.icns` file (by name) in the bundle's resources, if any.
fn find_icon(bundle: &Path) -> Option<PathBuf> {
    let resources = bundle.join("Contents").join("Resources");
    let entries = fs::read_dir(&resources).ok()?;
    let mut icons: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|x| x.to_str()) == Some(ICON_EXTENSION))
        .collect();
    icons.sort();
    icons.into_iter().next()
}

/// Expand a bare `~` or a leading `~/` to the home directory. `~user` forms are
/// left as they are.
pub fn expand_home(dir: &str) -> PathBuf {
    let Some(rest) = dir.strip_prefix('~') else {
        return PathBuf::from(dir);
    };
    if !(rest.is_empty() || rest.starts_with(['/', '\\'])) {
        return PathBuf::from(dir);
    }
    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(dir),
    }
}
