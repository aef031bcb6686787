pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
mod cli {
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "portfolio-api")]
    #[command(about = "Serves portfolio content (CV, industries, projects) as a JSON API")]
    pub struct CliConfig {
        #[arg(long, env = "PORTFOLIO_HOST", default_value = "0.0.0.0")]
        pub host: String,

        #[arg(long, env = "PORTFOLIO_PORT", default_value = "5000")]
        pub port: u16,

        #[arg(long, env = "PORTFOLIO_DATA_DIR", default_value = "./data")]
        pub data_dir: String,

        #[arg(long, env = "PORTFOLIO_STATIC_DIR", default_value = "./static")]
        pub static_dir: String,

        #[arg(long, env = "PORTFOLIO_TEMPLATE_DIR", default_value = "./templates")]
        pub template_dir: String,

        #[arg(long, help = "Load settings from a TOML file instead of the flags above")]
        pub config: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub json_logs: bool,
    }

    impl ConfigProvider for CliConfig {
        fn host(&self) -> &str {
            &self.host
        }

        fn port(&self) -> u16 {
            self.port
        }

        fn data_dir(&self) -> &str {
            &self.data_dir
        }

        fn static_dir(&self) -> &str {
            &self.static_dir
        }

        fn template_dir(&self) -> &str {
            &self.template_dir
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("data_dir", &self.data_dir)?;
            validate_path("static_dir", &self.static_dir)?;
            validate_path("template_dir", &self.template_dir)?;
            if let Some(path) = &self.config {
                validate_path("config", path)?;
            }
            Ok(())
        }
    }

}
