use crate::config::ApiConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "wellness-api")]
#[command(about = "HTTP service for the wellness tracker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Address to bind, overrides `server.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overrides `server.port`
    #[arg(long)]
    pub port: Option<u16>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command line overrides on top of the loaded configuration
    pub fn apply(&self, config: &mut ApiConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::parse_from([
            "wellness-api",
            "--config",
            "/tmp/api.toml",
            "--port",
            "9000",
            "--verbose",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/api.toml")));
        assert!(cli.verbose);

        let mut config = ApiConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::parse_from(["wellness-api"]);
        let mut config = ApiConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }
}
