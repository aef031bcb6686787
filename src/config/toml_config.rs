use crate::core::ConfigProvider;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{validate_bind_address, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    pub cv_dir: Option<String>,
    pub industries_dir: Option<String>,
    pub projects_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default = "default_template_dir")]
    pub template_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_data_dir() -> String {
    "./data".to_string()
}

fn default_static_dir() -> String {
    "./static".to_string()
}

fn default_template_dir() -> String {
    "./templates".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            cv_dir: None,
            industries_dir: None,
            projects_file: None,
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
            template_dir: default_template_dir(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| PortfolioError::ConfigError {
            message: format!("Cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PortfolioError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未定義的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PortfolioError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("content.data_dir", &self.content.data_dir)?;

        let overrides = [
            ("content.cv_dir", &self.content.cv_dir),
            ("content.industries_dir", &self.content.industries_dir),
            ("content.projects_file", &self.content.projects_file),
        ];
        for (field, value) in overrides {
            if let Some(path) = value {
                validate_path(field, path)?;
            }
        }

        validate_path("assets.static_dir", &self.assets.static_dir)?;
        validate_path("assets.template_dir", &self.assets.template_dir)?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn host(&self) -> &str {
        &self.server.host
    }

    fn port(&self) -> u16 {
        self.server.port
    }

    fn data_dir(&self) -> &str {
        &self.content.data_dir
    }

    fn static_dir(&self) -> &str {
        &self.assets.static_dir
    }

    fn template_dir(&self) -> &str {
        &self.assets.template_dir
    }

    fn bind_address(&self) -> Result<SocketAddr> {
        validate_bind_address("server.host", &self.server.host, self.server.port)
    }

    fn cv_dir(&self) -> PathBuf {
        match &self.content.cv_dir {
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(&self.content.data_dir).join("cv"),
        }
    }

    fn industries_dir(&self) -> PathBuf {
        match &self.content.industries_dir {
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(&self.content.data_dir).join("industries"),
        }
    }

    fn projects_file(&self) -> PathBuf {
        match &self.content.projects_file {
            Some(file) => PathBuf::from(file),
            None => PathBuf::from(&self.content.data_dir).join("projects.yaml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(config.port(), 5000);
        assert_eq!(config.projects_file(), PathBuf::from("./data/projects.yaml"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_individual_paths() {
        let config = TomlConfig::from_toml_str(
            r#"
[server]
host = "127.0.0.1"
port = 8080

[content]
data_dir = "/srv/content"
projects_file = "/etc/portfolio/projects.yaml"

[assets]
static_dir = "/srv/static"
"#,
        )
        .unwrap();

        assert_eq!(config.port(), 8080);
        assert_eq!(
            config.bind_address().unwrap(),
            SocketAddr::from(([127, 0, 0, 1], 8080))
        );
        assert_eq!(config.cv_dir(), PathBuf::from("/srv/content/cv"));
        assert_eq!(
            config.projects_file(),
            PathBuf::from("/etc/portfolio/projects.yaml")
        );
        assert_eq!(config.static_dir(), "/srv/static");
        assert_eq!(config.template_dir(), "./templates");
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("PORTFOLIO_TEST_CONTENT_ROOT", "/tmp/portfolio-content");
        let config = TomlConfig::from_toml_str(
            r#"
[content]
data_dir = "${PORTFOLIO_TEST_CONTENT_ROOT}"
cv_dir = "${PORTFOLIO_TEST_UNDEFINED_VAR}/cv"
"#,
        )
        .unwrap();

        assert_eq!(config.data_dir(), "/tmp/portfolio-content");
        assert_eq!(
            config.cv_dir(),
            PathBuf::from("${PORTFOLIO_TEST_UNDEFINED_VAR}/cv")
        );
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = TomlConfig::from_toml_str("[server]\nhost = \"\"\n").unwrap();
        assert!(config.validate().is_ok());
        let err = config.bind_address().unwrap_err();
        assert!(err.to_string().contains("server.host"));

        let config = TomlConfig::from_toml_str("[content]\ndata_dir = \"\"\n").unwrap();
        assert!(config.validate().is_err());

        assert!(TomlConfig::from_toml_str("[server]\nport = \"eighty\"\n").is_err());
    }
}
