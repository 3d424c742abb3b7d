use repository::StoreOptions;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: Database,
    pub seed: Seed,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Database {
    pub max_connections: u32,
    pub min_connections: u32,
    pub sqlx_logging: bool,
}

impl Default for Database {
    fn default() -> Self {
        let options = StoreOptions::default();
        Self {
            max_connections: options.max_connections,
            min_connections: options.min_connections,
            sqlx_logging: options.sqlx_logging,
        }
    }
}

impl From<Database> for StoreOptions {
    fn from(value: Database) -> Self {
        Self {
            max_connections: value.max_connections,
            min_connections: value.min_connections,
            sqlx_logging: value.sqlx_logging,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Seed {
    pub file: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_database_section_is_optional() {
        let config: Config =
            toml::from_str("[seed]\nfile = \"Seed.toml\"").unwrap();

        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.seed.file, "Seed.toml");
    }
}
