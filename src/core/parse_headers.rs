use std::collections::HashMap;
use tracing::warn;

/// 解析 `Name: value` 形式的请求头，格式不对的直接跳过
pub fn parse_headers(header_strs: &[String]) -> Option<HashMap<String, String>> {
    if header_strs.is_empty() {
        return None;
    }
    let headers = header_strs
        .iter()
        .filter_map(|header| {
            let parts: Vec<&str> = header.splitn(2, ':').collect();
            if parts.len() == 2 && !parts[0].trim().is_empty() {
                Some((parts[0].trim().to_string(), parts[1].trim().to_string()))
            } else {
                warn!(header = %header, "ignoring malformed header");
                None
            }
        })
        .collect();
    Some(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_headers() {
        let headers = parse_headers(&[
            "Content-Type: application/json".to_string(),
            "Authorization:Bearer a:b".to_string(),
        ])
        .unwrap();
        assert_eq!(headers.get("Content-Type").map(String::as_str), Some("application/json"));
        assert_eq!(headers.get("Authorization").map(String::as_str), Some("Bearer a:b"));
    }

    #[test]
    fn test_skip_malformed() {
        let headers = parse_headers(&["no-colon".to_string(), ": empty-name".to_string()]).unwrap();
        assert!(headers.is_empty());
        assert!(parse_headers(&[]).is_none());
    }
}
