use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use serde::de::DeserializeOwned;
use toml::{map::Map, Value};

pub const DATABASE_URL: &str = "DATABASE_URL";

pub fn workspace_dir() -> anyhow::Result<PathBuf> {
    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .context("failed to locate workspace")?
        .stdout;
    let cargo_path = Path::new(
        std::str::from_utf8(&output)
            .context("workspace path is not utf-8")?
            .trim(),
    )
    .to_path_buf();

    cargo_path
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("workspace manifest has no parent directory"))
}

/// Reads `config_name` from the workspace root into `T`.
pub fn load_config<T: DeserializeOwned>(config_name: &str) -> anyhow::Result<T> {
    read_toml(&workspace_dir()?.join(config_name))
}

pub fn read_toml<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let config = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str::<T>(&config)
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// Secrets from `Secrets.toml`. A missing file yields an empty table so the
/// process environment alone can carry them.
pub fn load_env() -> anyhow::Result<Map<String, Value>> {
    let path = workspace_dir()?.join("Secrets.toml");
    if !path.exists() {
        return Ok(Map::new());
    }

    read_toml(&path)
}

/// `DATABASE_URL` from the environment, else from secrets. Empty counts as
/// missing.
pub fn database_url(secrets: &Map<String, Value>) -> anyhow::Result<String> {
    let from_env = std::env::var(DATABASE_URL).ok();
    let from_secrets = secrets
        .get(DATABASE_URL)
        .and_then(Value::as_str)
        .map(str::to_string);

    from_env
        .into_iter()
        .chain(from_secrets)
        .find(|url| !url.trim().is_empty())
        .context(
            "Please define DATABASE_URL in the environment or in Secrets.toml",
        )
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Database {
        max_connections: u32,
    }

    #[derive(Debug, Deserialize)]
    struct Config {
        database: Database,
    }

    #[test]
    fn test_read_toml() {
        // Arrange
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[database]\nmax_connections = 7").unwrap();

        // Act
        let config = read_toml::<Config>(file.path()).unwrap();

        // Assert
        assert_eq!(config.database.max_connections, 7);
    }

    #[test]
    fn test_read_toml_reports_path() {
        let err = read_toml::<Config>(Path::new("/no/such/Config.toml"))
            .unwrap_err();

        assert!(err.to_string().contains("/no/such/Config.toml"));
    }

    #[test]
    fn test_database_url_from_secrets() {
        // Arrange
        let mut secrets = Map::new();
        secrets.insert(
            DATABASE_URL.to_string(),
            Value::String("postgres://localhost/events".to_string()),
        );
        let mut blank = Map::new();
        blank.insert(DATABASE_URL.to_string(), Value::String("  ".to_string()));

        // Act & Assert
        if std::env::var(DATABASE_URL).is_err() {
            assert_eq!(
                database_url(&secrets).unwrap(),
                "postgres://localhost/events"
            );
            assert!(database_url(&blank).is_err());
            assert!(database_url(&Map::new()).is_err());
        }
    }
}
