use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// 单个抓取目标
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    pub method: String,
    pub url: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
    /// 覆盖默认的超时时间（秒）
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// 要提取的字段，以及上报时使用的指标名
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub selector: String,
    pub metric_name: String,
}

impl Field {
    pub fn new(selector: impl Into<String>, metric_name: impl Into<String>) -> Self {
        Field {
            selector: selector.into(),
            metric_name: metric_name.into(),
        }
    }
}

impl FetchConfig {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        FetchConfig {
            method: method.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_field(mut self, selector: impl Into<String>, metric_name: impl Into<String>) -> Self {
        self.fields.push(Field::new(selector, metric_name));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let raw = r#"{"method":"GET","url":"http://127.0.0.1:26657/status"}"#;
        let config: FetchConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config, FetchConfig::new("GET", "http://127.0.0.1:26657/status"));
        assert!(config.fields.is_empty());
    }

    #[test]
    fn test_deserialize_full() {
        let raw = r#"{
            "method": "POST",
            "url": "http://localhost:8545",
            "body": "{\"jsonrpc\":\"2.0\",\"method\":\"eth_blockNumber\",\"params\":[],\"id\":1}",
            "headers": {"Content-Type": "application/json"},
            "timeout_secs": 5,
            "fields": [{"selector": "result", "metric_name": "eth_block_number"}]
        }"#;
        let config: FetchConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.timeout_secs, Some(5));
        assert_eq!(config.fields, vec![Field::new("result", "eth_block_number")]);
        assert_eq!(
            config.headers.unwrap().get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert!(config.body.unwrap().contains("eth_blockNumber"));
    }
}
