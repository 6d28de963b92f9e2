use std::path::{Path, PathBuf};

use asset_verify_core::{InventoryPort, InventoryRecord, PortError};

use crate::VerifyAdapterConfig;

const BUNDLED_INVENTORY: &str = include_str!("../fixtures/sample_inventory.json");

#[derive(Debug, Clone)]
pub struct InventoryAdapter {
    mode: InventoryMode,
}

#[derive(Debug, Clone)]
enum InventoryMode {
    Disabled(String),
    Bundled,
    File(PathBuf),
    Http(HttpSource),
}

#[derive(Debug, Clone)]
struct HttpSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl InventoryAdapter {
    pub fn bundled() -> Self {
        Self {
            mode: InventoryMode::Bundled,
        }
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            mode: InventoryMode::File(path.into()),
        }
    }

    /// Picks the source from config: file path, then URL, then the bundled
    /// sample. The production profile never falls back to the sample.
    pub fn with_config(config: VerifyAdapterConfig) -> Self {
        let mode = if let Some(path) = config.inventory_path.clone() {
            InventoryMode::File(path)
        } else if let Some(ref url) = config.inventory_url {
            match reqwest::blocking::Client::builder()
                .timeout(config.http_timeout())
                .build()
            {
                Ok(client) => InventoryMode::Http(HttpSource {
                    url: url.clone(),
                    client,
                }),
                Err(e) => {
                    InventoryMode::Disabled(format!("failed to initialize inventory client: {e}"))
                }
            }
        } else if config.strict_runtime_required() {
            InventoryMode::Disabled(
                "inventory source not configured in production runtime profile".to_owned(),
            )
        } else {
            InventoryMode::Bundled
        };
        Self { mode }
    }

    /// Human-readable description of where assets come from.
    pub fn source_label(&self) -> String {
        match &self.mode {
            InventoryMode::Disabled(_) => "unavailable".to_owned(),
            InventoryMode::Bundled => "bundled sample".to_owned(),
            InventoryMode::File(path) => format!("file {}", path.display()),
            InventoryMode::Http(source) => source.url.clone(),
        }
    }

    fn read_file(path: &Path) -> Result<Vec<InventoryRecord>, PortError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            PortError::Transport(format!("failed to read {}: {e}", path.display()))
        })?;
        parse_inventory(&raw)
    }

    fn fetch_http(source: &HttpSource) -> Result<Vec<InventoryRecord>, PortError> {
        let response = source
            .client
            .get(&source.url)
            .header("accept", "application/json")
            .send()
            .map_err(|e| PortError::Transport(format!("inventory request failed: {e}")))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| PortError::Transport(format!("inventory body read failed: {e}")))?;
        if !status.is_success() {
            return Err(PortError::Rejected {
                status: status.as_u16(),
                body: crate::truncate_body(&body),
            });
        }
        parse_inventory(&body)
    }
}

impl InventoryPort for InventoryAdapter {
    fn fetch_assets(&self) -> Result<Vec<InventoryRecord>, PortError> {
        let result = match &self.mode {
            InventoryMode::Disabled(reason) => Err(PortError::Policy(reason.clone())),
            InventoryMode::Bundled => parse_inventory(BUNDLED_INVENTORY),
            InventoryMode::File(path) => Self::read_file(path),
            InventoryMode::Http(source) => Self::fetch_http(source),
        };
        match &result {
            Ok(records) => tracing::info!(
                source = %self.source_label(),
                count = records.len(),
                "inventory loaded"
            ),
            Err(e) => tracing::warn!(source = %self.source_label(), error = %e, "inventory load failed"),
        }
        result
    }
}

pub fn parse_inventory(raw: &str) -> Result<Vec<InventoryRecord>, PortError> {
    serde_json::from_str(raw)
        .map_err(|e| PortError::Validation(format!("inventory is not a valid asset list: {e}")))
}
