use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::errors::Result;

pub const STATUS_KEY: &str = "status";
pub const UNASSIGNED_SHARDS_KEY: &str = "unassigned_shards";
pub const UNKNOWN_STATUS: &str = "unknown";

const I64_MIN_F64: f64 = i64::MIN as f64;
// 2^63，i64::MAX 转为 f64 后会进位到此值
const I64_MAX_EXCLUSIVE_F64: f64 = 9_223_372_036_854_775_808.0;

/// 集群健康响应中的单个字段值，在解码时即确定类型。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
    // 数组或对象，保存为紧凑的单行 JSON 文本
    Composite(String),
}

impl FieldValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(n) => Some(*n as f64),
            FieldValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    fn from_number(n: &serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            return FieldValue::Integer(i);
        }
        let f = n.as_f64().unwrap_or(f64::NAN);
        // 在 i64 范围内且与截断后的值相等才视为整数，避免饱和转换
        if (I64_MIN_F64..I64_MAX_EXCLUSIVE_F64).contains(&f) && f.trunc() == f {
            FieldValue::Integer(f as i64)
        } else {
            FieldValue::Float(f)
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => FieldValue::String(s),
            Value::Number(n) => FieldValue::from_number(&n),
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Null => FieldValue::Null,
            composite @ (Value::Array(_) | Value::Object(_)) => FieldValue::Composite(
                serde_json::to_string(&composite).unwrap_or_else(|_| composite.to_string()),
            ),
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{s}"),
            FieldValue::Integer(n) => write!(f, "{n}"),
            // 超出 i64 范围的整数值不带小数
            FieldValue::Float(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{n:.0}"),
            FieldValue::Float(n) => write!(f, "{n:.2}"),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Null => write!(f, "<null>"),
            FieldValue::Composite(json) => write!(f, "{json}"),
        }
    }
}

/// 解码后的集群健康文档。
///
/// 不约束字段结构，所有字段原样保留，并按键的字节序排列。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct HealthDocument {
    fields: BTreeMap<String, FieldValue>,
}

impl HealthDocument {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// 状态字段缺失或不是字符串时返回 `unknown`。
    pub fn status(&self) -> &str {
        match self.fields.get(STATUS_KEY) {
            Some(FieldValue::String(status)) => status.as_str(),
            _ => UNKNOWN_STATUS,
        }
    }

    /// 除状态以外的所有字段，按键升序。
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields
            .iter()
            .filter(|(key, _)| key.as_str() != STATUS_KEY)
            .map(|(key, value)| (key.as_str(), value))
    }

    /// 大于零的未分配分片数。
    pub fn unassigned_shards(&self) -> Option<f64> {
        self.get(UNASSIGNED_SHARDS_KEY)
            .and_then(FieldValue::as_f64)
            .filter(|count| *count > 0.0)
    }
}

impl std::str::FromStr for HealthDocument {
    type Err = crate::errors::Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}
