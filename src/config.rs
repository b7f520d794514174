use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use clap_serde_derive::ClapSerde;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "SentiHotel.toml";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file
    #[arg(short, long, env, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: String,

    /// Configuration options
    #[command(flatten)]
    pub opt_config: <Config as ClapSerde>::Opt,
}

// Defaults live in `#[default]` rather than clap's `default_value` so that
// flags left unset on the command line do not mask values from the file.
#[derive(ClapSerde, Debug)]
pub struct Config {
    /// The address the listener binds to
    #[default("0.0.0.0".to_string())]
    #[arg(short, long, env)]
    pub address: String,

    /// The port the listener binds to
    #[default(25566)]
    #[arg(short, long, env)]
    pub port: u16,

    /// Endpoint of the external sentiment model server
    #[default("http://127.0.0.1:5000/predict".to_string())]
    #[arg(short, long, env)]
    pub model_server_url: String,

    /// Timeout in seconds for requests to the model server, unbounded if unset
    #[arg(long, env)]
    pub upstream_timeout: Option<u64>,

    /// OpenTelemetry collector endpoint, console logging only if unset
    #[arg(long, env)]
    pub otel_endpoint: Option<String>,

    /// Keep console logging enabled while exporting to a collector
    #[default(false)]
    #[arg(long, env)]
    pub console: bool,
}

impl Config {
    /// Layers defaults, the configuration file and command line options, in
    /// increasing precedence. A missing file is only tolerated when it is the
    /// default one.
    pub fn resolve(args: Args) -> Result<Self> {
        let config = match Config::from_toml(&args.config_file) {
            Ok(conf) => conf,
            Err(_) if args.config_file == DEFAULT_CONFIG_FILE => Config::default(),
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to read configuration file {}", args.config_file)
                })
            }
        };
        Ok(config.merge(args.opt_config))
    }

    pub fn from_toml(path: &str) -> Result<Self> {
        let str = std::fs::read_to_string(path)?;
        let opt: <Config as ClapSerde>::Opt = toml::from_str(&str)?;
        Ok(Config::from(opt))
    }

    pub fn model_server_url(&self) -> Result<Url> {
        let url = Url::parse(&self.model_server_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!(
                "Model server URL must use http or https, got {}",
                url.scheme()
            );
        }
        Ok(url)
    }

    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream_timeout.map(Duration::from_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}
