use config::{Config, ConfigError, File};
use reports::categories::default_contribution_categories;
use reports::FIRST_REPORT_YEAR;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ClientConfig {
    pub server: Option<ServerConfig>,
    pub reports: Option<ReportsConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReportsConfig {
    #[serde(default = "default_contribution_categories")]
    pub contribution_categories: Vec<String>,
    /// When unset, expense categories are discovered from the records
    pub expense_categories: Option<Vec<String>>,
    #[serde(default = "default_first_year")]
    pub first_year: i32,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            contribution_categories: default_contribution_categories(),
            expense_categories: None,
            first_year: FIRST_REPORT_YEAR,
        }
    }
}

fn default_first_year() -> i32 {
    FIRST_REPORT_YEAR
}

const DEFAULT_CONFIG_FILE: &str = r#"
[server]
base_url = "http://localhost:8000"
timeout_secs = 30

[reports]
contribution_categories = [
    "Dizimos",
    "Ofertas",
    "Ofertas Missionarias",
    "Campanhas",
    "Eventos",
    "Venda Materiais",
    "Doacoes Empresas",
    "Parcerias Ongs",
    "Apoio Outras Igrejas",
    "Investimentos",
]
# expense_categories = ["Agua", "Luz", "Manutencao Predial"]
first_year = 2023
"#;

impl ClientConfig {
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let config_path = get_config_path();
        let config = Self::load_from(&config_path)?;
        Ok((config, config_path))
    }

    /// Loads `config_path`, writing the default file first if it is missing
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        if !config_path.exists() {
            std::fs::write(config_path, DEFAULT_CONFIG_FILE).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.to_path_buf()))
            .build()?;

        builder.try_deserialize()
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        let toml_string = toml::to_string(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        std::fs::write(config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))
    }

    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    pub fn reports(&self) -> ReportsConfig {
        self.reports.clone().unwrap_or_default()
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("igreja").join("client.toml")
    } else {
        PathBuf::from("client.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_is_written_and_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("client.toml");

        let config = ClientConfig::load_from(&path).unwrap();
        assert!(path.exists());

        assert_eq!(config.server(), ServerConfig::default());
        let reports = config.reports();
        assert_eq!(reports, ReportsConfig::default());
        assert_eq!(reports.contribution_categories.len(), 10);
        assert_eq!(reports.contribution_categories[0], "Dizimos");
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.toml");
        std::fs::write(
            &path,
            r#"
[server]
base_url = "http://10.0.0.5:8000"

[reports]
expense_categories = ["Agua", "Luz"]
"#,
        )
        .unwrap();

        let config = ClientConfig::load_from(&path).unwrap();
        let server = config.server();
        assert_eq!(server.base_url, "http://10.0.0.5:8000");
        assert_eq!(server.timeout_secs, 30);

        let reports = config.reports();
        assert_eq!(reports.first_year, 2023);
        assert_eq!(
            reports.expense_categories,
            Some(vec!["Agua".to_string(), "Luz".to_string()])
        );
        assert_eq!(reports.contribution_categories, default_contribution_categories());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.server().base_url, "http://localhost:8000");
        assert!(config.reports().expense_categories.is_none());
    }

    #[test]
    fn test_save_round_trips_through_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.toml");

        let mut config = ClientConfig::load_from(&path).unwrap();
        config.server = Some(ServerConfig {
            base_url: "http://192.168.0.20:8000".to_string(),
            timeout_secs: 5,
        });
        config.save_to(&path).unwrap();

        let reloaded = ClientConfig::load_from(&path).unwrap();
        assert_eq!(reloaded.server().base_url, "http://192.168.0.20:8000");
        assert_eq!(reloaded.server().timeout_secs, 5);
    }
}
