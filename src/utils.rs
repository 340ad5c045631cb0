use serde_json::Value;

/// 判断 JSON 值是否"存在"
///
/// `null`、`false`、`0` 和空字符串视为不存在，其余（包括只含空白的字符串、
/// 空数组和空对象）视为存在
#[inline]
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// 判断 JSON 值是否为"真值"
///
/// 在 [`is_present`] 的基础上，只含空白的字符串也视为假值
#[inline]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.trim().is_empty(),
        other => is_present(other),
    }
}

/// 把 JSON 值渲染为可以嵌入提示词的文本
///
/// 字符串原样返回（不转义、不裁剪）；整数值的浮点数去掉小数部分；
/// 数组按元素渲染后用逗号连接，其中的 `null` 渲染为空；对象渲染为 `[object Object]`
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => value_to_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_values() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!("  \n")] {
            assert!(!is_truthy(&value), "{value} should be falsy");
        }
    }

    #[test]
    fn truthy_values() {
        for value in [json!(true), json!(1), json!(-2.5), json!("x"), json!([]), json!({})] {
            assert!(is_truthy(&value), "{value} should be truthy");
        }
    }

    #[test]
    fn whitespace_strings_are_present_but_not_truthy() {
        for value in [json!(" "), json!("\n"), json!("\t  ")] {
            assert!(is_present(&value), "{value:?} should be present");
            assert!(!is_truthy(&value), "{value:?} should not be truthy");
        }
        assert!(!is_present(&json!("")));
        assert!(!is_present(&json!(null)));
        assert!(!is_present(&json!(0)));
        assert!(is_present(&json!({})));
    }

    #[test]
    fn strings_render_verbatim() {
        assert_eq!(value_to_text(&json!("  \"quoted\"  ")), "  \"quoted\"  ");
    }

    #[test]
    fn non_strings_render_like_template_interpolation() {
        assert_eq!(value_to_text(&json!(42)), "42");
        assert_eq!(value_to_text(&json!(2025.0)), "2025");
        assert_eq!(value_to_text(&json!(2.5)), "2.5");
        assert_eq!(value_to_text(&json!(true)), "true");
        assert_eq!(value_to_text(&json!([1, 2])), "1,2");
        assert_eq!(value_to_text(&json!(["a", null, [3, 4]])), "a,,3,4");
        assert_eq!(value_to_text(&json!({"a": 1})), "[object Object]");
    }
}
