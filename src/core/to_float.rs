use serde_json::Value;

use crate::error::ConvertError;

/// 把json值转换为指标值
///
/// - `0x` 开头的字符串：去掉左侧所有的 `0` 和 `x` 字符，按16进制解析
/// - 其他字符串：先按10进制解析，失败再按16进制解析
/// - 整数直接转换，布尔值转换为 1.0 / 0.0
/// - 其余类型（包括浮点数）返回 0.0，不报错
pub fn to_float(value: &Value) -> Result<f64, ConvertError> {
    match value {
        Value::String(s) => parse_numeric_string(s),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i as f64)
            } else if let Some(u) = n.as_u64() {
                Ok(u as f64)
            } else {
                // 浮点数不做转换
                Ok(0.0)
            }
        }
        Value::Bool(true) => Ok(1.0),
        Value::Bool(false) => Ok(0.0),
        Value::Null | Value::Array(_) | Value::Object(_) => Ok(0.0),
    }
}

fn parse_numeric_string(s: &str) -> Result<f64, ConvertError> {
    if s.starts_with("0x") {
        let digits = s.trim_start_matches(|c: char| c == '0' || c == 'x');
        return parse_radix(s, digits, 16);
    }
    if let Ok(v) = s.parse::<i64>() {
        return Ok(v as f64);
    }
    parse_radix(s, s, 16)
}

fn parse_radix(input: &str, digits: &str, radix: u32) -> Result<f64, ConvertError> {
    i64::from_str_radix(digits, radix)
        .map(|v| v as f64)
        .map_err(|source| ConvertError::InvalidInteger {
            input: input.to_string(),
            source,
        })
}
