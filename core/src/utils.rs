pub fn strbool(value: &str) -> bool {
    ["true", "True", "t", "T", "1"].contains(&value)
}

/// Quote `value` as an XPath 1.0 string literal. XPath has no escape
/// sequence, values holding both quote kinds are built with `concat()`.
pub fn xpath_literal(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{}'", value);
    }
    if !value.contains('"') {
        return format!("\"{}\"", value);
    }

    let parts = value
        .split('\'')
        .map(|part| format!("'{}'", part))
        .collect::<Vec<String>>()
        .join(", \"'\", ");
    format!("concat({})", parts)
}
