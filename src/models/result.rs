use crate::error::FieldError;

/// 单个字段的转换结果，`error` 有值时 `value` 恒为 0.0
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub selector: String,
    pub metric_name: String,
    pub value: f64,
    pub error: Option<FieldError>,
}

impl ConversionResult {
    pub fn new(selector: String, metric_name: String, outcome: Result<f64, FieldError>) -> Self {
        let (value, error) = match outcome {
            Ok(v) => (v, None),
            Err(e) => (0.0, Some(e)),
        };
        ConversionResult {
            selector,
            metric_name,
            value,
            error,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// 可以导出的指标值，出错时为 `None`
    pub fn metric_value(&self) -> Option<f64> {
        match self.error {
            None => Some(self.value),
            Some(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SelectorError;

    #[test]
    fn test_error_zeroes_value() {
        let err = FieldError::from(SelectorError::NotFound { selector: "a.b".to_string() });
        let r = ConversionResult::new("a.b".to_string(), "m".to_string(), Err(err));
        assert_eq!(r.value, 0.0);
        assert!(!r.is_ok());
        assert_eq!(r.metric_value(), None);
    }

    #[test]
    fn test_ok_value() {
        let r = ConversionResult::new("a".to_string(), "m".to_string(), Ok(12.0));
        assert!(r.is_ok());
        assert_eq!(r.metric_value(), Some(12.0));
    }
}
