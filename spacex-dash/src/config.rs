//! Command line configuration.

use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "fixtures/spacex_launch_dash.csv";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8050;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "spacex-dash",
    version,
    about = "SpaceX Launch Records Dashboard"
)]
pub struct Cli {
    /// Launch records CSV, read once at startup
    #[arg(short = 'd', long, env = "SPACEX_DASH_DATA", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Address to listen on
    #[arg(long, env = "SPACEX_DASH_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short = 'p', long, env = "SPACEX_DASH_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Cli {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dash_server() {
        let cli = Cli::try_parse_from(["spacex-dash"]).unwrap();
        assert_eq!(cli.data, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(cli.bind_addr(), "127.0.0.1:8050");
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "spacex-dash",
            "--data",
            "/tmp/launches.csv",
            "--host",
            "0.0.0.0",
            "-p",
            "9000",
        ])
        .unwrap();
        assert_eq!(cli.data, PathBuf::from("/tmp/launches.csv"));
        assert_eq!(cli.bind_addr(), "0.0.0.0:9000");
    }
}
