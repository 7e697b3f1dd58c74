use prettytable::{format, row, Cell, Row, Table};
use crate::models::result::ConversionResult;

pub fn build_result_table(results: &[ConversionResult]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

    table.add_row(row!["指标", "选择器", "值", "错误"]);
    for r in results {
        let (value, error) = match &r.error {
            None => (format!("{}", r.value), String::new()),
            Some(e) => ("-".to_string(), e.to_string()),
        };
        table.add_row(Row::new(vec![
            Cell::new(&r.metric_name),
            Cell::new(&r.selector),
            Cell::new(&value).style_spec("r"),
            Cell::new(&error),
        ]));
    }
    table
}

pub fn show_result_with_table(results: &[ConversionResult]) {
    let failed = results.iter().filter(|r| !r.is_ok()).count();
    println!("转换结果: {} 个字段, {} 个失败", results.len(), failed);
    build_result_table(results).printstd();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FieldError, SelectorError};

    #[test]
    fn test_table_rows() {
        let results = vec![
            ConversionResult::new("result".to_string(), "height".to_string(), Ok(42.0)),
            ConversionResult::new(
                "missing".to_string(),
                "missing".to_string(),
                Err(FieldError::Selector(SelectorError::NotFound {
                    selector: "missing".to_string(),
                })),
            ),
        ];
        let table = build_result_table(&results);
        assert_eq!(table.len(), 3);
        let rendered = table.to_string();
        assert!(rendered.contains("height"));
        assert!(rendered.contains("42"));
        assert!(rendered.contains("no value found for selector `missing`"));
    }
}
