use std::str::FromStr;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::selector::{PathSelector, Selector};
use crate::core::to_float::to_float;
use crate::error::{FetchError, FieldError};
use crate::models::fetch_config::{FetchConfig, Field};
use crate::models::result::ConversionResult;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// 抓取json并把字段转换为指标值
///
/// 每次 [`Converter::fetch`] 只发一个请求，不重试、不缓存，调用之间不共享可变状态，
/// 可以在多个任务里并发使用同一个实例。
pub struct Converter<S = PathSelector> {
    client: Client,
    selector: S,
    timeout: Duration,
    user_agent: String,
}

impl Converter<PathSelector> {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_selector(PathSelector)
    }
}

impl<S: Selector> Converter<S> {
    pub fn with_selector(selector: S) -> Result<Self, FetchError> {
        let client = Client::builder().build().map_err(FetchError::Client)?;
        Ok(Converter {
            client,
            selector,
            timeout: DEFAULT_TIMEOUT,
            user_agent: user_agent(),
        })
    }

    /// 默认超时时间，`FetchConfig::timeout_secs` 优先
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 返回的结果与 `config.fields` 一一对应；只有请求、状态码、解析失败才返回错误
    pub async fn fetch(&self, config: &FetchConfig) -> Result<Vec<ConversionResult>, FetchError> {
        let timeout = config
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(self.timeout);
        let request = self.build_request(config, timeout)?;

        debug!(method = %config.method, url = %config.url, "sending request");
        let response = request
            .send()
            .await
            .map_err(|e| transport_error(e, timeout))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                timeout_error(e, timeout)
            } else {
                FetchError::Body(e)
            }
        })?;
        debug!(url = %config.url, bytes = body.len(), "response received");

        let tree = decode_object(&body)?;
        Ok(self.convert_fields(&tree, &config.fields))
    }

    /// 对已解析的json逐个字段提取转换，单个字段失败不影响其他字段
    pub fn convert_fields(&self, tree: &Value, fields: &[Field]) -> Vec<ConversionResult> {
        fields
            .iter()
            .map(|field| {
                let outcome = self.convert_field(tree, field);
                match &outcome {
                    Ok(value) => {
                        debug!(metric = %field.metric_name, value = *value, "field converted")
                    }
                    Err(e) => {
                        warn!(metric = %field.metric_name, selector = %field.selector, error = %e, "field conversion failed")
                    }
                }
                ConversionResult::new(field.selector.clone(), field.metric_name.clone(), outcome)
            })
            .collect()
    }

    fn convert_field(&self, tree: &Value, field: &Field) -> Result<f64, FieldError> {
        let value = self.selector.find(tree, &field.selector)?;
        Ok(to_float(value)?)
    }

    fn build_request(&self, config: &FetchConfig, timeout: Duration) -> Result<RequestBuilder, FetchError> {
        if config.method.trim().is_empty() {
            return Err(FetchError::InvalidRequest("method is empty".to_string()));
        }
        let method = Method::from_str(&config.method.to_uppercase())
            .map_err(|_| FetchError::InvalidRequest(format!("invalid method: {}", config.method)))?;
        let url = Url::parse(&config.url)
            .map_err(|e| FetchError::InvalidRequest(format!("invalid url `{}`: {}", config.url, e)))?;

        // 构建请求头
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&self.user_agent)
            .map_err(|e| FetchError::InvalidRequest(format!("invalid user agent: {}", e)))?;
        headers.insert(USER_AGENT, user_agent);
        if let Some(ref headers_map) = config.headers {
            for (k, v) in headers_map {
                let name = k
                    .parse::<HeaderName>()
                    .map_err(|_| FetchError::InvalidRequest(format!("invalid header name: {}", k)))?;
                let value = v
                    .parse::<HeaderValue>()
                    .map_err(|_| FetchError::InvalidRequest(format!("invalid header value for {}", k)))?;
                headers.insert(name, value);
            }
        }

        let mut request = self
            .client
            .request(method, url)
            .headers(headers)
            .timeout(timeout);
        // 请求体原样发送，不设置content-type
        if let Some(body) = config.body.as_ref().filter(|b| !b.is_empty()) {
            request = request.body(body.clone());
        }
        Ok(request)
    }
}

/// 使用默认配置抓取一次
pub async fn fetch(config: &FetchConfig) -> Result<Vec<ConversionResult>, FetchError> {
    Converter::new()?.fetch(config).await
}

fn decode_object(body: &[u8]) -> Result<Value, FetchError> {
    let tree: Value = serde_json::from_slice(body)?;
    match tree {
        Value::Object(_) => Ok(tree),
        Value::Null => Err(FetchError::NotAnObject { kind: "null" }),
        Value::Bool(_) => Err(FetchError::NotAnObject { kind: "boolean" }),
        Value::Number(_) => Err(FetchError::NotAnObject { kind: "number" }),
        Value::String(_) => Err(FetchError::NotAnObject { kind: "string" }),
        Value::Array(_) => Err(FetchError::NotAnObject { kind: "array" }),
    }
}

fn transport_error(e: reqwest::Error, timeout: Duration) -> FetchError {
    if e.is_timeout() {
        timeout_error(e, timeout)
    } else {
        FetchError::Transport(e)
    }
}

fn timeout_error(source: reqwest::Error, timeout: Duration) -> FetchError {
    FetchError::Timeout {
        timeout_secs: timeout.as_secs_f64(),
        source,
    }
}

fn user_agent() -> String {
    let info = os_info::get();
    format!(
        "{} {} ({}; {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        info.os_type(),
        info.version()
    )
}

/*
    单测
*/
