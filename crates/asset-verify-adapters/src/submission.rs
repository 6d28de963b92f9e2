use std::sync::{Arc, Mutex};

use serde::Deserialize;

use asset_verify_core::{
    PortError, SubmissionPayload, SubmissionPort, SubmissionReceipt, TimestampMs,
};

use crate::VerifyAdapterConfig;

#[derive(Debug, Clone)]
pub struct SubmissionAdapter {
    mode: SubmissionMode,
}

#[derive(Debug, Clone)]
enum SubmissionMode {
    Disabled(String),
    Recording(Arc<Mutex<Vec<SubmissionPayload>>>),
    Http(HttpEndpoint),
}

#[derive(Debug, Clone)]
struct HttpEndpoint {
    url: String,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServiceAck {
    reference: Option<String>,
    accepted_at_ms: Option<u64>,
}

impl SubmissionAdapter {
    /// In-memory endpoint that keeps every payload it accepts.
    pub fn recording() -> Self {
        Self {
            mode: SubmissionMode::Recording(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    pub fn with_config(config: VerifyAdapterConfig) -> Self {
        let mode = if let Some(ref url) = config.submission_url {
            match reqwest::blocking::Client::builder()
                .timeout(config.http_timeout())
                .build()
            {
                Ok(client) => SubmissionMode::Http(HttpEndpoint {
                    url: url.clone(),
                    client,
                }),
                Err(e) => SubmissionMode::Disabled(format!(
                    "failed to initialize submission client: {e}"
                )),
            }
        } else if config.strict_runtime_required() {
            SubmissionMode::Disabled(
                "submission URL not configured in production runtime profile".to_owned(),
            )
        } else {
            SubmissionMode::Recording(Arc::new(Mutex::new(Vec::new())))
        };
        Self { mode }
    }

    pub fn target_label(&self) -> String {
        match &self.mode {
            SubmissionMode::Disabled(_) => "unavailable".to_owned(),
            SubmissionMode::Recording(_) => "local recorder".to_owned(),
            SubmissionMode::Http(endpoint) => endpoint.url.clone(),
        }
    }

    /// Payloads accepted so far; empty for non-recording modes.
    pub fn recorded(&self) -> Result<Vec<SubmissionPayload>, PortError> {
        match &self.mode {
            SubmissionMode::Recording(store) => {
                let g = store
                    .lock()
                    .map_err(|e| PortError::Transport(format!("recorder lock poisoned: {e}")))?;
                Ok(g.clone())
            }
            _ => Ok(Vec::new()),
        }
    }

    fn record(
        store: &Mutex<Vec<SubmissionPayload>>,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionReceipt, PortError> {
        let mut g = store
            .lock()
            .map_err(|e| PortError::Transport(format!("recorder lock poisoned: {e}")))?;
        g.push(payload.clone());
        Ok(SubmissionReceipt {
            reference: Some(format!("LOCAL-{:04}", g.len())),
            accepted_at_ms: payload.submitted_at_ms,
        })
    }

    fn post(
        endpoint: &HttpEndpoint,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionReceipt, PortError> {
        let response = endpoint
            .client
            .post(&endpoint.url)
            .json(payload)
            .send()
            .map_err(|e| PortError::Transport(format!("submission request failed: {e}")))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| PortError::Transport(format!("submission body read failed: {e}")))?;
        if !status.is_success() {
            return Err(PortError::Rejected {
                status: status.as_u16(),
                body: crate::truncate_body(&body),
            });
        }
        // An empty or non-JSON acknowledgement still counts as accepted.
        let ack: ServiceAck = serde_json::from_str(&body).unwrap_or_default();
        Ok(SubmissionReceipt {
            reference: ack.reference,
            accepted_at_ms: ack
                .accepted_at_ms
                .map(TimestampMs)
                .unwrap_or(payload.submitted_at_ms),
        })
    }
}

impl SubmissionPort for SubmissionAdapter {
    fn submit(&self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, PortError> {
        tracing::info!(
            target_service = %self.target_label(),
            entries = payload.entries.len(),
            "submitting verification"
        );
        let result = match &self.mode {
            SubmissionMode::Disabled(reason) => Err(PortError::Policy(reason.clone())),
            SubmissionMode::Recording(store) => Self::record(store, payload),
            SubmissionMode::Http(endpoint) => Self::post(endpoint, payload),
        };
        match &result {
            Ok(receipt) => tracing::info!(reference = ?receipt.reference, "verification accepted"),
            Err(e) => tracing::warn!(error = %e, "verification submission failed"),
        }
        result
    }
}
