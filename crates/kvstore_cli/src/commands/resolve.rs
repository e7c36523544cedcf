//! Resolve command implementation.

use kvstore_core::paths::create_folder;
use kvstore_core::{Config, FileLayout, KvsResult};
use serde::Serialize;
use std::path::PathBuf;

/// Resolved folders of one application.
#[derive(Debug, Serialize)]
pub struct ResolveResult {
    /// Application folder.
    pub app_folder: PathBuf,
    /// SQLite database path.
    pub database: PathBuf,
    /// Folders created by `--init`.
    pub created: Vec<PathBuf>,
    /// Resolved fragment, if one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn standard_folders(layout: &FileLayout, app_name: &str) -> KvsResult<Vec<PathBuf>> {
    Ok(vec![
        layout.config_folder(app_name)?,
        layout.system_folder(app_name)?,
        layout.permanent_folder(app_name)?,
        layout.tables_folder(app_name)?,
        layout.output_folder(app_name)?,
    ])
}

/// Resolves the folders of `app_name` and, optionally, a fragment below it.
pub fn resolve(
    config: &Config,
    app_name: &str,
    fragment: Option<&str>,
    init: bool,
) -> KvsResult<ResolveResult> {
    let layout = FileLayout::new(config);
    let mut created = Vec::new();
    if init {
        for folder in standard_folders(&layout, app_name)? {
            if !folder.is_dir() && create_folder(&folder)? {
                created.push(folder);
            }
        }
    }

    let file = match fragment {
        Some(fragment) => Some(layout.get_as_file(Some(app_name), Some(fragment))?),
        None => None,
    };

    Ok(ResolveResult {
        app_folder: layout.app_folder(app_name)?,
        database: layout.database_path(app_name)?,
        created,
        file,
    })
}

/// Runs the resolve command.
pub fn run(
    config: &Config,
    app_name: &str,
    fragment: Option<&str>,
    init: bool,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = resolve(config, app_name, fragment, init)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            println!("App folder: {}", result.app_folder.display());
            println!("Database:   {}", result.database.display());
            for folder in &result.created {
                println!("Created:    {}", folder.display());
            }
            if let Some(file) = &result.file {
                println!("File:       {}", file.display());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_standard_folders_once() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new().external_root(dir.path());

        let first = resolve(&config, "survey", None, true).unwrap();
        assert_eq!(first.created.len(), 5);
        assert!(first.app_folder.join("data").join("tables").is_dir());

        let second = resolve(&config, "survey", None, true).unwrap();
        assert!(second.created.is_empty());
    }

    #[test]
    fn fragment_requires_existing_app() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new().external_root(dir.path());

        assert!(resolve(&config, "survey", Some("config/a.csv"), false).is_err());

        let result = resolve(&config, "survey", Some("/config/a.csv"), true).unwrap();
        assert_eq!(
            result.file.unwrap(),
            result.app_folder.join("config/a.csv")
        );
    }

    #[test]
    fn invalid_app_name_is_rejected() {
        let config = Config::default();
        assert!(resolve(&config, "bad name", None, false)
            .unwrap_err()
            .to_string()
            .contains("invalid application name"));
    }
}
