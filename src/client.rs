use log::{debug, info};
use tracing::info_span;

use crate::{
    errors::{Error, Result},
    models::{HealthDocument, HealthStatus},
    vars::USER_AGENT,
};

#[derive(Debug, Clone)]
pub struct ClusterClient {
    endpoint: String,
    api_key: String,
    timeout: Option<u64>,
}

impl ClusterClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        ClusterClient {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout_secs: Option<u64>) -> Self {
        self.timeout = timeout_secs;
        self
    }

    pub fn health_url(&self) -> String {
        format!("{}/_cluster/health?pretty", self.endpoint.trim_end_matches('/'))
    }

    /// 请求集群健康接口并解码响应，不做任何重试。
    pub fn cluster_health(&self) -> Result<HealthDocument> {
        let url = self.health_url();
        let _span = info_span!("cluster_health", url = %url).entered();
        info!("Requesting cluster health: {url}");

        let mut request = minreq::get(&url)
            .with_header("Authorization", format!("ApiKey {}", self.api_key))
            .with_header("User-Agent", USER_AGENT);
        if let Some(timeout) = self.timeout {
            request = request.with_timeout(timeout);
        }
        let resp = request.send()?;
        debug!("Cluster health responded with status: {}", resp.status_code);

        check_status(resp.status_code, &resp.reason_phrase)?;

        let doc = HealthDocument::from_slice(resp.as_bytes())?;
        debug!(
            "Decoded {} field(s), status: {}",
            doc.len(),
            HealthStatus::from(doc.status())
        );

        Ok(doc)
    }
}

fn check_status(code: i32, reason: &str) -> Result<()> {
    if (200..300).contains(&code) {
        Ok(())
    } else {
        Err(Error::ApiStatus {
            code,
            reason: reason.to_string(),
        })
    }
}
