//! 从http接口抓取json，按选择器提取字段并转换为指标值。
//!
//! ```no_run
//! # async fn run() -> Result<(), metric_converter::FetchError> {
//! use metric_converter::{Converter, FetchConfig};
//!
//! let config = FetchConfig::new("GET", "http://127.0.0.1:26657/status")
//!     .with_field("result.sync_info.latest_block_height", "block_height");
//! for r in Converter::new()?.fetch(&config).await? {
//!     if let Some(value) = r.metric_value() {
//!         println!("{} {}", r.metric_name, value);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod error;
pub mod models;

pub use crate::core::convert::{fetch, Converter, DEFAULT_TIMEOUT};
pub use crate::core::selector::{DottedSelector, JsonPathSelector, PathSelector, Selector};
pub use crate::core::to_float::to_float;
pub use crate::error::{ConvertError, FetchError, FieldError, SelectorError};
pub use crate::models::fetch_config::{FetchConfig, Field};
pub use crate::models::result::ConversionResult;
