pub type Result<T> = std::result::Result<T, Error>;

// 退出码规划：
//  - 1: 默认（请求、响应、输出错误）
//  - 2: 配置错误
pub const DEFAULT_EXIT_CODE: i32 = 1;

#[derive(Debug, thiserror::Error, strum_macros::EnumProperty)]
pub enum Error {
    // 缺少必需的配置
    #[strum(props(exit_code = 2))]
    #[error("{0} environment variables must be set")]
    MissingConfig(String),
    // 包装 crate::cloud_id::CloudIdError
    #[strum(props(exit_code = 2))]
    #[error("invalid cloud ID: {0}")]
    CloudId(#[from] crate::cloud_id::CloudIdError),
    // 接口返回非成功状态码
    #[error("cluster health API returned error: {code} {reason}")]
    ApiStatus { code: i32, reason: String },
    // 包装 minreq::Error
    #[error("failed to get cluster health: {0}")]
    Transport(#[from] minreq::Error),
    // 包装 serde_json::Error
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    // 包装 std::io::Error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        use strum::EnumProperty;

        self.get_int("exit_code")
            .and_then(|code| i32::try_from(code).ok())
            .unwrap_or(DEFAULT_EXIT_CODE)
    }
}
