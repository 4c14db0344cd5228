use base64::{Engine, engine::general_purpose::STANDARD};

#[derive(Debug, thiserror::Error)]
pub enum CloudIdError {
    // 缺少或多出 `:` 分隔符
    #[error("unexpected format, expected '<name>:<base64>'")]
    UnexpectedFormat,
    // base64 解码失败
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
    // 解码结果不是 UTF-8
    #[error("decoded payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    // 解码结果缺少主机或 UUID
    #[error("invalid encoded value: {0}")]
    InvalidPayload(String),
}

/// 将 Elastic Cloud ID 解析为 Elasticsearch 访问地址。
///
/// Cloud ID 形如 `<name>:<base64>`，base64 部分解码后为 `<host>$<es-uuid>$<kibana-uuid>`，
/// 主机可以附带端口。返回的地址为 `https://<es-uuid>.<host>`。
pub fn endpoint(cloud_id: &str) -> Result<String, CloudIdError> {
    let mut parts = cloud_id.split(':');
    let encoded = match (parts.next(), parts.next(), parts.next()) {
        (Some(_name), Some(encoded), None) => encoded,
        _ => return Err(CloudIdError::UnexpectedFormat),
    };
    let decoded = String::from_utf8(STANDARD.decode(encoded.trim())?)?;
    let values = decoded.split('$').collect::<Vec<_>>();
    match values.as_slice() {
        [host, uuid, ..] if !host.is_empty() && !uuid.is_empty() => {
            Ok(format!("https://{uuid}.{host}"))
        }
        _ => Err(CloudIdError::InvalidPayload(decoded)),
    }
}
