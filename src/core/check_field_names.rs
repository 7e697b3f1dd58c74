use std::collections::HashSet;
use anyhow::anyhow;
use crate::models::fetch_config::Field;

/// 检查指标名不为空且不重复
pub fn check_field_names(fields: &[Field]) -> anyhow::Result<()> {
    let mut names_set = HashSet::new();
    for field in fields {
        if field.selector.is_empty() {
            return Err(anyhow!("selector cannot be empty"));
        }
        if field.metric_name.is_empty() {
            return Err(anyhow!("metric name cannot be empty (selector: {})", field.selector));
        }
        if !names_set.insert(field.metric_name.as_str()) {
            return Err(anyhow!("duplicate metric name: {}", field.metric_name));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_names() {
        let fields = vec![Field::new("a", "m_a"), Field::new("b", "m_b")];
        assert!(check_field_names(&fields).is_ok());
        assert!(check_field_names(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_name() {
        let fields = vec![Field::new("a", "m"), Field::new("b", "m")];
        let err = check_field_names(&fields).unwrap_err();
        assert!(err.to_string().contains("duplicate metric name: m"));
    }

    #[test]
    fn test_empty_values() {
        assert!(check_field_names(&[Field::new("a", "")]).is_err());
        assert!(check_field_names(&[Field::new("", "m")]).is_err());
    }
}
