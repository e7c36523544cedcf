//! Application folder layout.
//!
//! Every application keeps its files in its own folder below the ODK
//! folder:
//!
//! ```text
//! <external_root>/opendatakit/
//! └─ <app_name>/
//!    ├─ config/          # Forms, table definitions, assets
//!    ├─ data/
//!    │  └─ tables/       # Per-table instance attachments
//!    ├─ output/          # Exports and logs
//!    ├─ permanent/       # Files that survive a reset
//!    └─ system/          # Internal state
//! ```
//!
//! The layout is a plain value built from [`Config`]; there is no
//! process-wide state to reset between uses.

use crate::config::Config;
use crate::error::{KvsError, KvsResult};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Folder names within an application folder.
const CONFIG_FOLDER: &str = "config";
const SYSTEM_FOLDER: &str = "system";
const PERMANENT_FOLDER: &str = "permanent";
const DATA_FOLDER: &str = "data";
const TABLES_FOLDER: &str = "tables";
const OUTPUT_FOLDER: &str = "output";

/// File name of each application's SQLite database.
const SQLITE_DATABASE_NAME: &str = "sqlite.db";

/// Returns the file name of an application's SQLite database.
#[must_use]
pub fn sqlite_database_name() -> &'static str {
    SQLITE_DATABASE_NAME
}

/// Resolves application paths below the ODK folder.
#[derive(Debug, Clone)]
pub struct FileLayout {
    odk_folder: PathBuf,
}

impl FileLayout {
    /// Creates a layout from `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            odk_folder: config.external_root.join(&config.odk_folder_name),
        }
    }

    /// Returns the folder that holds every application.
    #[must_use]
    pub fn odk_folder(&self) -> &Path {
        &self.odk_folder
    }

    /// Returns the folder of `app_name`.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the name is not a valid application name.
    pub fn app_folder(&self, app_name: &str) -> KvsResult<PathBuf> {
        let name = validate_app_name(Some(app_name))?;
        Ok(self.odk_folder.join(name))
    }

    /// Returns the `config` folder of `app_name`.
    pub fn config_folder(&self, app_name: &str) -> KvsResult<PathBuf> {
        Ok(self.app_folder(app_name)?.join(CONFIG_FOLDER))
    }

    /// Returns the `system` folder of `app_name`.
    pub fn system_folder(&self, app_name: &str) -> KvsResult<PathBuf> {
        Ok(self.app_folder(app_name)?.join(SYSTEM_FOLDER))
    }

    /// Returns the `permanent` folder of `app_name`.
    pub fn permanent_folder(&self, app_name: &str) -> KvsResult<PathBuf> {
        Ok(self.app_folder(app_name)?.join(PERMANENT_FOLDER))
    }

    /// Returns the `data` folder of `app_name`.
    pub fn data_folder(&self, app_name: &str) -> KvsResult<PathBuf> {
        Ok(self.app_folder(app_name)?.join(DATA_FOLDER))
    }

    /// Returns the `data/tables` folder of `app_name`.
    pub fn tables_folder(&self, app_name: &str) -> KvsResult<PathBuf> {
        Ok(self.data_folder(app_name)?.join(TABLES_FOLDER))
    }

    /// Returns the `output` folder of `app_name`.
    pub fn output_folder(&self, app_name: &str) -> KvsResult<PathBuf> {
        Ok(self.app_folder(app_name)?.join(OUTPUT_FOLDER))
    }

    /// Returns the path of the SQLite database of `app_name`.
    pub fn database_path(&self, app_name: &str) -> KvsResult<PathBuf> {
        Ok(self.system_folder(app_name)?.join(SQLITE_DATABASE_NAME))
    }

    /// Resolves a fragment relative to an existing application folder.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the application name is missing, empty or
    /// invalid, if its folder does not exist, or if the fragment is missing,
    /// empty or leaves the application folder.
    pub fn get_as_file(
        &self,
        app_name: Option<&str>,
        uri_fragment: Option<&str>,
    ) -> KvsResult<PathBuf> {
        let name = validate_app_name(app_name)?;
        let app_folder = self.odk_folder.join(name);
        if !app_folder.is_dir() {
            return Err(KvsError::validation(format!(
                "application folder does not exist: {}",
                app_folder.display()
            )));
        }
        let fragment = uri_fragment
            .map(|f| f.trim_start_matches('/'))
            .filter(|f| !f.is_empty())
            .ok_or_else(|| KvsError::validation("uri fragment is missing or empty"))?;
        if !stays_below(fragment) {
            return Err(KvsError::validation(format!(
                "uri fragment escapes the application folder: {fragment:?}"
            )));
        }
        Ok(app_folder.join(fragment))
    }

    /// Maps a web-server request path onto a file in a served folder.
    ///
    /// The path has the form `[/]<app_name>/<folder>/<rest>`, where
    /// `<folder>` is `config`, `system`, `permanent` or `data/tables`.
    /// Returns `None` for anything else, including a `<rest>` that
    /// climbs out of `<folder>`.
    #[must_use]
    pub fn file_from_uri_on_web_server(&self, path: &str) -> Option<PathBuf> {
        let path = path.strip_prefix('/').unwrap_or(path);
        let (app_name, rest) = path.split_once('/')?;
        let app_name = match validate_app_name(Some(app_name)) {
            Ok(name) => name,
            Err(err) => {
                debug!(%err, path, "rejecting web server path");
                return None;
            }
        };

        let app_folder = self.odk_folder.join(app_name);
        let (base, file) = match rest.split_once('/')? {
            (folder @ (CONFIG_FOLDER | SYSTEM_FOLDER | PERMANENT_FOLDER), file) => {
                (app_folder.join(folder), file)
            }
            (DATA_FOLDER, tail) => match tail.split_once('/')? {
                (TABLES_FOLDER, file) => (app_folder.join(DATA_FOLDER).join(TABLES_FOLDER), file),
                _ => return None,
            },
            _ => return None,
        };
        if !stays_below(file) {
            debug!(path, "rejecting web server path outside served folder");
            return None;
        }
        (!file.is_empty()).then(|| base.join(file))
    }
}

/// Whether `relative` names something below the folder it is joined to.
fn stays_below(relative: &str) -> bool {
    Path::new(relative)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

impl Default for FileLayout {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Validates an application name, tolerating one trailing `/`.
///
/// Valid names are non-empty and consist of ASCII letters, digits and
/// underscores.
fn validate_app_name(app_name: Option<&str>) -> KvsResult<&str> {
    let raw = match app_name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(KvsError::validation("application name is missing or empty")),
    };
    let name = raw.strip_suffix('/').unwrap_or(raw);
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(KvsError::validation(format!(
            "invalid application name: {raw:?}"
        )));
    }
    Ok(name)
}

/// Creates `path` and any missing parents.
///
/// Returns whether `path` is a directory afterwards.
pub fn create_folder(path: &Path) -> KvsResult<bool> {
    if !path.exists() {
        debug!(path = %path.display(), "creating folder");
        fs::create_dir_all(path)?;
    }
    Ok(path.is_dir())
}

/// Recursively deletes `path`. A missing directory is not an error.
pub fn delete_directory(path: &Path) -> KvsResult<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
