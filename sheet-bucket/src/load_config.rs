//! Config and credential loading for the CLI.
//!
//! The YAML config file carries no secrets: it declares the bucket name,
//! viewer base URL, output directory and the source selector list. The R2
//! credentials come from the environment (or a `.env` file loaded at
//! startup) and are bundled into an explicit [`R2Credentials`] struct here,
//! at the boundary, so nothing deeper in the pipeline reads ambient
//! environment state.

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sheet_bucket_core::config::Config;
use tracing::{error, info};

use crate::upload::R2Credentials;

/// Load and parse the YAML config file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = fs::read_to_string(path_ref).map_err(|e| {
        error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
        anyhow::anyhow!("Failed to read config file {:?}: {}", path_ref, e)
    })?;

    let config: Config = serde_yaml::from_str(&config_content).map_err(|e| {
        error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
        anyhow::anyhow!("Failed to parse config YAML: {e}")
    })?;

    info!(config_path = ?path_ref, "Parsed config YAML successfully");
    Ok(config)
}

/// Build the R2 credential bundle from the environment.
///
/// Expects `R2_ACCESS_KEY`, `R2_SECRET_KEY` and `R2_ACCOUNT_ID`.
pub fn load_credentials() -> Result<R2Credentials> {
    let access_key = env::var("R2_ACCESS_KEY").context("R2_ACCESS_KEY missing in environment")?;
    let secret_key = env::var("R2_SECRET_KEY").context("R2_SECRET_KEY missing in environment")?;
    let account_id = env::var("R2_ACCOUNT_ID").context("R2_ACCOUNT_ID missing in environment")?;

    info!(
        account_id = %account_id,
        access_key_set = !access_key.is_empty(),
        "Loaded R2 credentials from environment"
    );
    Ok(R2Credentials {
        access_key,
        secret_key,
        account_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_sources_with_defaults() {
        let yaml = r#"
bucket: line-lift
view_base_url: https://viewer.example/list
sources:
  - name: 更新影片
    sheet_id: sheet-video
    columns:
      price: 內容
  - name: Vendor A
    sheet_id: sheet-vendor-a
    prefix: vendor-a
"#;
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(yaml.as_bytes()).expect("write config");

        let config = load_config(file.path()).expect("config should load");
        assert_eq!(config.bucket, "line-lift");
        assert_eq!(config.sources.len(), 2);

        let video = config.source("更新影片").expect("video source");
        assert_eq!(video.prefix, "video");
        assert_eq!(video.columns.price, "內容");
        assert_eq!(video.columns.address, "內容");

        let vendor = config.source("Vendor A").expect("vendor source");
        assert_eq!(vendor.prefix, "vendor-a");
        assert_eq!(vendor.columns.price, "價格");
    }

    #[test]
    fn rejects_malformed_yaml() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(b"bucket: [unclosed").expect("write config");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    #[serial]
    fn credentials_come_from_env() {
        env::set_var("R2_ACCESS_KEY", "ak");
        env::set_var("R2_SECRET_KEY", "sk");
        env::set_var("R2_ACCOUNT_ID", "acct-1");

        let creds = load_credentials().expect("credentials should load");
        assert_eq!(creds.access_key, "ak");
        assert_eq!(creds.account_id, "acct-1");
    }

    #[test]
    #[serial]
    fn missing_account_id_is_an_error() {
        env::set_var("R2_ACCESS_KEY", "ak");
        env::set_var("R2_SECRET_KEY", "sk");
        env::remove_var("R2_ACCOUNT_ID");

        let err = load_credentials().expect_err("must fail");
        assert!(err.to_string().contains("R2_ACCOUNT_ID"));
    }
}
