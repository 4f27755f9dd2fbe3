/// Lua line comment marker; everything from here to end of line is dropped.
const COMMENT_MARKER: &str = "--";

/// Shape of one script line after comment stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Blank, comment-only, or anything the two grammars below reject.
    Ignored,
    /// `NAME = expr`
    Variable { name: &'a str, expr: &'a str },
    /// `object.method(args)`
    Call {
        object: &'a str,
        method: &'a str,
        args: &'a str,
    },
}

/// Classifies a raw script line. Never fails; unrecognised shapes are `Ignored`.
pub fn classify(raw: &str) -> LineKind<'_> {
    let line = match raw.find(COMMENT_MARKER) {
        Some(cut) => &raw[..cut],
        None => raw,
    }
    .trim();

    if line.is_empty() {
        return LineKind::Ignored;
    }

    if let Some((name, expr)) = match_variable(line) {
        return LineKind::Variable { name, expr };
    }

    if let Some((object, method, args)) = match_call(line) {
        return LineKind::Call {
            object,
            method,
            args,
        };
    }

    LineKind::Ignored
}

/// Splits a call's argument text on commas, trimming each piece.
///
/// Only a truly empty list has zero arguments: `( )` carries one empty argument.
pub fn split_args(args: &str) -> Vec<&str> {
    if args.is_empty() {
        return Vec::new();
    }
    args.split(',').map(str::trim).collect()
}

fn match_variable(line: &str) -> Option<(&str, &str)> {
    let len = scan_ident(line, is_upper_start, is_upper_continue)?;
    let (name, rest) = line.split_at(len);
    let expr = rest.trim_start().strip_prefix('=')?.trim_start();
    if expr.is_empty() {
        return None;
    }
    Some((name, expr))
}

fn match_call(line: &str) -> Option<(&str, &str, &str)> {
    let len = scan_ident(line, is_ident_start, is_ident_continue)?;
    let (object, rest) = line.split_at(len);
    let rest = rest.strip_prefix('.')?;

    let len = scan_ident(rest, is_ident_start, is_ident_continue)?;
    let (method, rest) = rest.split_at(len);
    let args = rest.strip_prefix('(')?.strip_suffix(')')?;

    Some((object, method, args))
}

/// Byte length of the identifier at the start of `text`, if one is there.
fn scan_ident(text: &str, start: fn(char) -> bool, cont: fn(char) -> bool) -> Option<usize> {
    let mut chars = text.chars();
    if !chars.next().is_some_and(start) {
        return None;
    }
    Some(1 + chars.take_while(|&c| cont(c)).count())
}

fn is_upper_start(c: char) -> bool {
    c.is_ascii_uppercase() || c == '_'
}

fn is_upper_continue(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
