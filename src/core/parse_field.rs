use crate::models::fetch_config::Field;

/// 解析 `selector=metric_name`，没有 `=` 时指标名与选择器相同
pub fn parse_field(field_str: &str) -> Field {
    let mut parts = field_str.splitn(2, '=');
    match (parts.next(), parts.next()) {
        (Some(selector), Some(metric_name)) => Field::new(selector.trim(), metric_name.trim()),
        _ => Field::new(field_str.trim(), field_str.trim()),
    }
}

pub fn parse_fields(field_strs: &[String]) -> Vec<Field> {
    field_strs.iter().map(|f| parse_field(f)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field("result.height=block_height"), Field::new("result.height", "block_height"));
        assert_eq!(parse_field(" result = r "), Field::new("result", "r"));
        assert_eq!(parse_field("result"), Field::new("result", "result"));
    }

    #[test]
    fn test_jsonpath_filter_keeps_later_equals() {
        // 只按第一个 = 切分
        assert_eq!(parse_field("$.a=b=c"), Field::new("$.a", "b=c"));
    }

    #[test]
    fn test_parse_fields_keeps_order() {
        let fields = parse_fields(&["b=2".to_string(), "a=1".to_string()]);
        assert_eq!(fields, vec![Field::new("b", "2"), Field::new("a", "1")]);
    }
}
