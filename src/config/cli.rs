#![cfg(feature = "cli")]

use crate::config::GeoConfig;
use crate::utils::error::Result;
use clap::Parser;

/// Command-line demo driver: wires the cascade controller to an in-memory
/// page and fires a chain of selections against live endpoints.
#[derive(Debug, Clone, Parser)]
#[command(name = "geochange")]
#[command(about = "Drive a geographic selection cascade against geo endpoints")]
pub struct DemoArgs {
    #[arg(long, help = "Base URL of the geo endpoints, e.g. https://host/app/")]
    pub webroot: Option<String>,

    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Request joined result sets instead of filtered ones")]
    pub joined: bool,

    #[arg(long, help = "Log upstream values on every change")]
    pub debug: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Continent id to select first")]
    pub continente: Option<String>,

    #[arg(long, help = "Country id to select after the continent")]
    pub pais: Option<String>,

    #[arg(long, help = "State id to select after the country")]
    pub estado: Option<String>,
}

impl DemoArgs {
    /// Builds the plugin configuration: the TOML file (when given) merged
    /// over defaults, then command-line overrides on top.
    pub fn build_config(&self) -> Result<GeoConfig> {
        let mut config = match &self.config {
            Some(path) => GeoConfig::from_file(path)?,
            None => GeoConfig::default(),
        };

        if let Some(webroot) = &self.webroot {
            config.webroot = webroot.clone();
        }
        if self.joined {
            config.joined = true;
        }
        if self.debug {
            config.debug = true;
        }

        // The demo page always exposes all four controls
        if config.continente_id.is_empty() {
            config.continente_id = "#ContinenteId".to_string();
        }
        if config.pais_id.is_empty() {
            config.pais_id = "#PaisId".to_string();
        }
        if config.estado_id.is_empty() {
            config.estado_id = "#EstadoId".to_string();
        }
        if config.cidade_id.is_empty() {
            config.cidade_id = "#CidadeId".to_string();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_win_over_defaults() {
        let args = DemoArgs::parse_from([
            "geochange",
            "--webroot",
            "https://example.com/app/",
            "--joined",
        ]);

        let config = args.build_config().unwrap();
        assert_eq!(config.webroot, "https://example.com/app/");
        assert!(config.joined);
        assert!(!config.debug);
        assert_eq!(config.pais_id, "#PaisId");
    }
}
