use crate::{
    errors::{Error, Result},
    vars::{ELASTIC_API_KEY, ELASTIC_CLOUD_ID},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub cloud_id: String,
    pub api_key: String,
}

impl Credentials {
    /// 命令行参数优先于环境变量，两者都必须非空。
    pub fn resolve(cloud_id: Option<String>, api_key: Option<String>) -> Result<Self> {
        Self::resolve_with(cloud_id, api_key, *ELASTIC_CLOUD_ID, *ELASTIC_API_KEY)
    }

    fn resolve_with(
        cloud_id: Option<String>,
        api_key: Option<String>,
        env_cloud_id: &str,
        env_api_key: &str,
    ) -> Result<Self> {
        let cloud_id = cloud_id.unwrap_or_else(|| env_cloud_id.to_string());
        let api_key = api_key.unwrap_or_else(|| env_api_key.to_string());
        if cloud_id.trim().is_empty() || api_key.trim().is_empty() {
            return Err(Error::MissingConfig(
                "ELASTIC_CLOUD_ID and ELASTIC_API_KEY".to_string(),
            ));
        }

        Ok(Credentials { cloud_id, api_key })
    }
}
