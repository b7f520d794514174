use std::env;

use anyhow::{bail, Result};
use reqwest::Url;

const DEFAULT_HEALTH_URL: &str = "http://127.0.0.1:25566/health";

fn main() -> Result<()> {
    let url = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_HEALTH_URL.to_string());
    let url = Url::parse(&url)?;

    let response = reqwest::blocking::get(url)?;
    if !response.status().is_success() {
        bail!("Health check failed with status {}", response.status());
    }

    Ok(())
}
