use crate::lua::table::OrderedTable;
use crate::prelude::Value;
use std::borrow::Cow;

/// Resolves a raw token against the variables bound so far.
///
/// Bound names win over literals. Tokens containing `.` only ever parse as
/// floats; everything that fails to parse becomes a string with one layer of
/// surrounding quotes removed.
pub fn resolve(token: &str, variables: &OrderedTable<Value>) -> Value {
    let token = token.trim();

    if let Some(bound) = variables.get(token) {
        return bound.clone();
    }

    let digits = without_digit_separators(token);
    let parsed = if token.contains('.') {
        digits.parse::<f64>().ok().map(Value::Float)
    } else {
        digits.parse::<i64>().ok().map(Value::Int)
    };

    parsed.unwrap_or_else(|| Value::Str(unquote(token).to_string()))
}

/// Drops `_` separators that sit between two digits (`1_000`). Any other
/// underscore leaves the token untouched so it fails to parse.
fn without_digit_separators(token: &str) -> Cow<'_, str> {
    if !token.contains('_') {
        return Cow::Borrowed(token);
    }
    let bytes = token.as_bytes();
    let grouped = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if grouped {
        Cow::Owned(token.replace('_', ""))
    } else {
        Cow::Borrowed(token)
    }
}

fn unquote(token: &str) -> &str {
    strip_pair(strip_pair(token, '"'), '\'')
}

fn strip_pair(text: &str, quote: char) -> &str {
    text.strip_prefix(quote)
        .and_then(|inner| inner.strip_suffix(quote))
        .unwrap_or(text)
}
