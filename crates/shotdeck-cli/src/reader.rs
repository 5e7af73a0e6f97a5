use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use shotdeck_core::catalogs::RE_IMAGE_EXT;
use shotdeck_core::{Documentation, FileEntry, ProjectInfo};
use shotdeck_lint::LintConfig;
use thiserror::Error;

pub const CONFIG_FILE: &str = "shotdeck.config.yaml";

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Invalid YAML config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Project configuration from shotdeck.config.yaml.
#[derive(Debug, Default, Deserialize)]
pub struct ShotdeckConfig {
    pub name: Option<String>,
    pub version: Option<String>,
    /// Glob patterns, relative to the library directory.
    pub sources: Option<Vec<String>>,
    /// Read `<Component>.md` files as documentation (default: true).
    pub documentation: Option<bool>,
    /// Per-rule lint levels (`off`, `info`, `warn`, `error`).
    #[serde(default)]
    pub lint: LintConfig,
}

/// One screenshot found by the scanner.
#[derive(Debug)]
pub enum ScannedFile {
    Ok(FileEntry),
    /// Metadata could not be read; becomes an error record.
    Failed { filename: String },
}

/// Everything read from a screenshot directory.
#[derive(Debug, Default)]
pub struct Library {
    pub files: Vec<ScannedFile>,
    pub documentation: Documentation,
    pub project: ProjectInfo,
    pub lint: LintConfig,
}

/// Scan a screenshot directory.
pub fn read_library(dir_path: &Path) -> Result<Library, ReadError> {
    if !dir_path.exists() {
        return Err(ReadError::NotFound(dir_path.to_path_buf()));
    }
    if !dir_path.is_dir() {
        return Err(ReadError::NotADirectory(dir_path.to_path_buf()));
    }

    let config = read_project_config(dir_path)?.unwrap_or_default();

    let mut paths = match config.sources {
        Some(ref patterns) if !patterns.is_empty() => glob_sources(dir_path, patterns)?,
        _ => scan_directory(dir_path)?,
    };
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let files = paths.iter().map(|p| scan_file(p)).collect();

    let documentation = if config.documentation.unwrap_or(true) {
        read_documentation(dir_path)?
    } else {
        Documentation::new()
    };

    Ok(Library {
        files,
        documentation,
        project: ProjectInfo {
            name: config.name,
            version: config.version,
        },
        lint: config.lint,
    })
}

/// Read project config from shotdeck.config.yaml if it exists.
pub fn read_project_config(dir_path: &Path) -> Result<Option<ShotdeckConfig>, ReadError> {
    let config_path = dir_path.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&config_path).map_err(|source| ReadError::Io {
        path: config_path.clone(),
        source,
    })?;
    let config = serde_yaml::from_str(&content).map_err(|source| ReadError::Config {
        path: config_path.clone(),
        source,
    })?;
    log::info!("Loaded configuration from {}", config_path.display());
    Ok(Some(config))
}

fn is_image(path: &Path) -> bool {
    path.file_name()
        .map(|n| RE_IMAGE_EXT.is_match(&n.to_string_lossy()))
        .unwrap_or(false)
}

fn scan_directory(dir_path: &Path) -> Result<Vec<PathBuf>, ReadError> {
    let entries = fs::read_dir(dir_path).map_err(|source| ReadError::Io {
        path: dir_path.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ReadError::Io {
            path: dir_path.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    Ok(paths)
}

fn glob_sources(base_dir: &Path, patterns: &[String]) -> Result<Vec<PathBuf>, ReadError> {
    let mut paths = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for pattern in patterns {
        let full_pattern = base_dir.join(pattern);
        let pattern_str = full_pattern.to_string_lossy().replace('\\', "/");
        let entries = glob::glob(&pattern_str).map_err(|source| ReadError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;

        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    log::warn!("Skipping unreadable source {}: {e}", e.path().display());
                    continue;
                }
            };
            if !is_image(&path) {
                log::debug!("Skipping non-image source {}", path.display());
                continue;
            }
            if seen.insert(path.clone()) {
                paths.push(path);
            }
        }
    }

    Ok(paths)
}

fn scan_file(path: &Path) -> ScannedFile {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match file_date(path) {
        Ok(date) => ScannedFile::Ok(FileEntry {
            filename,
            date: Some(date),
        }),
        Err(e) => {
            log::warn!("Failed to read metadata of {}: {e}", path.display());
            ScannedFile::Failed { filename }
        }
    }
}

/// Creation time as an RFC 3339 string, falling back to modification time
/// on file systems without birth times.
fn file_date(path: &Path) -> std::io::Result<String> {
    let meta = fs::metadata(path)?;
    let time = meta.created().or_else(|_| meta.modified())?;
    Ok(format_date(time))
}

pub fn format_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `<Component>.md` files in the library directory, keyed by file stem.
/// Unreadable files are logged and skipped.
fn read_documentation(dir_path: &Path) -> Result<Documentation, ReadError> {
    let entries = fs::read_dir(dir_path).map_err(|source| ReadError::Io {
        path: dir_path.to_path_buf(),
        source,
    })?;

    let mut docs = Documentation::new();
    for entry in entries.flatten() {
        let path = entry.path();
        let is_markdown = path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("md"));
        if !path.is_file() || !is_markdown {
            continue;
        }
        let Some(component) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };
        match fs::read_to_string(&path) {
            Ok(content) => {
                docs.insert(component, content);
            }
            Err(e) => log::error!("Error reading markdown file {}: {e}", path.display()),
        }
    }
    Ok(docs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn format_date_is_iso() {
        let t = UNIX_EPOCH + Duration::from_millis(1_714_557_600_123);
        assert_eq!(format_date(t), "2024-05-01T10:00:00.123Z");
    }

    #[test]
    fn scans_images_and_docs() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Card_hover.png");
        touch(dir.path(), "Button_primary.JPG");
        touch(dir.path(), "notes.txt");
        fs::write(dir.path().join("Button.md"), "# Button").unwrap();

        let lib = read_library(dir.path()).unwrap();
        let names: Vec<&str> = lib
            .files
            .iter()
            .map(|f| match f {
                ScannedFile::Ok(e) => e.filename.as_str(),
                ScannedFile::Failed { filename } => filename.as_str(),
            })
            .collect();
        assert_eq!(names, vec!["Button_primary.JPG", "Card_hover.png"]);
        assert_eq!(lib.documentation.get("Button").map(String::as_str), Some("# Button"));
    }

    #[test]
    fn config_sources_and_project() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("captures")).unwrap();
        touch(&dir.path().join("captures"), "Map_type-route.png");
        touch(dir.path(), "Ignored_root.png");
        fs::write(
            dir.path().join(CONFIG_FILE),
            "name: demo\nversion: \"2\"\nsources:\n  - captures/*.png\ndocumentation: false\nlint:\n  rules:\n    one-off-property: \"off\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("Map.md"), "# Map").unwrap();

        let lib = read_library(dir.path()).unwrap();
        assert_eq!(lib.files.len(), 1);
        assert_eq!(lib.project.name.as_deref(), Some("demo"));
        assert_eq!(lib.project.version.as_deref(), Some("2"));
        assert!(lib.documentation.is_empty());
        assert!(!lib.lint.is_enabled("one-off-property"));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_glob_entry_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let open = dir.path().join("shots").join("open");
        let locked = dir.path().join("shots").join("locked");
        fs::create_dir_all(&open).unwrap();
        fs::create_dir_all(&locked).unwrap();
        touch(&open, "Card_hover.png");
        touch(&locked, "Card_active.png");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged runners can read the locked directory anyway.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let found = glob_sources(dir.path(), &["shots/*/*.png".to_string()]);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let found = found.unwrap();
        assert_eq!(found, vec![open.join("Card_hover.png")]);
    }

    #[test]
    fn invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "sources: [unclosed").unwrap();
        let err = read_library(dir.path()).unwrap_err();
        assert!(matches!(err, ReadError::Config { .. }));
    }

    #[test]
    fn missing_path() {
        let err = read_library(Path::new("/definitely/not/here")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
