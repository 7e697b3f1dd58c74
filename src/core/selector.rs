use jsonpath_lib::select;
use serde_json::Value;

use crate::error::SelectorError;

/// 在json树中定位一个值
///
/// 找不到时必须返回 [`SelectorError::NotFound`]，值为 `null` 的键视为找到。
pub trait Selector: Send + Sync {
    fn find<'v>(&self, tree: &'v Value, selector: &str) -> Result<&'v Value, SelectorError>;
}

/// 默认选择器：`$` 开头的走 JSONPath，其余按点号路径解析
#[derive(Debug, Clone, Copy, Default)]
pub struct PathSelector;

impl Selector for PathSelector {
    fn find<'v>(&self, tree: &'v Value, selector: &str) -> Result<&'v Value, SelectorError> {
        if selector.starts_with('$') {
            JsonPathSelector.find(tree, selector)
        } else {
            DottedSelector.find(tree, selector)
        }
    }
}

/// JSONPath 选择器，要求恰好匹配一个值
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPathSelector;

impl Selector for JsonPathSelector {
    fn find<'v>(&self, tree: &'v Value, selector: &str) -> Result<&'v Value, SelectorError> {
        let results = select(tree, selector).map_err(|e| SelectorError::Invalid {
            selector: selector.to_string(),
            reason: format!("{:?}", e),
        })?;
        match results.as_slice() {
            [] => Err(SelectorError::NotFound {
                selector: selector.to_string(),
            }),
            [value] => Ok(*value),
            many => Err(SelectorError::Ambiguous {
                selector: selector.to_string(),
                count: many.len(),
            }),
        }
    }
}

/// 点号路径选择器，例如 `result.items[0].value` 或 `result.items.0.value`
#[derive(Debug, Clone, Copy, Default)]
pub struct DottedSelector;

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

impl Selector for DottedSelector {
    fn find<'v>(&self, tree: &'v Value, selector: &str) -> Result<&'v Value, SelectorError> {
        let segments = parse_segments(selector)?;
        let mut current = tree;
        for segment in segments {
            let next = match (segment, current) {
                (Segment::Key(key), Value::Object(map)) => map.get(key),
                // 纯数字的key可以当作数组下标
                (Segment::Key(key), Value::Array(items)) => {
                    key.parse::<usize>().ok().and_then(|i| items.get(i))
                }
                (Segment::Index(i), Value::Array(items)) => items.get(i),
                _ => None,
            };
            current = next.ok_or_else(|| SelectorError::NotFound {
                selector: selector.to_string(),
            })?;
        }
        Ok(current)
    }
}

fn parse_segments(selector: &str) -> Result<Vec<Segment<'_>>, SelectorError> {
    let invalid = |reason: &str| SelectorError::Invalid {
        selector: selector.to_string(),
        reason: reason.to_string(),
    };
    if selector.is_empty() {
        return Err(invalid("empty selector"));
    }
    let mut segments = Vec::new();
    for part in selector.split('.') {
        let (key, mut rest) = match part.find('[') {
            Some(pos) => part.split_at(pos),
            None => (part, ""),
        };
        if part.is_empty() {
            return Err(invalid("empty path segment"));
        }
        if !key.is_empty() {
            segments.push(Segment::Key(key));
        }
        while !rest.is_empty() {
            let inner = rest
                .strip_prefix('[')
                .ok_or_else(|| invalid("unexpected characters after index"))?;
            let end = inner.find(']').ok_or_else(|| invalid("unterminated index"))?;
            let index = inner[..end]
                .parse::<usize>()
                .map_err(|_| invalid("index is not a non-negative integer"))?;
            segments.push(Segment::Index(index));
            rest = &inner[end + 1..];
        }
    }
    Ok(segments)
}
