use crate::cursor::Cursor;

/// Read the right-hand side of a property up to its end.
///
/// The value ends at a newline or `;` seen outside quotes with every bracket
/// kind balanced. A `}` that would close the enclosing block is left unread
/// so the block parser can consume it. Trailing whitespace is trimmed and a
/// value that is exactly one quoted run loses its quotes.
pub fn read_value(cursor: &mut Cursor<'_>) -> String {
    let mut value = String::new();
    let mut in_quote = false;
    let mut braces = 0usize;
    let mut parens = 0usize;
    let mut brackets = 0usize;

    cursor.skip_blanks();

    while let Some(ch) = cursor.advance() {
        let balanced = !in_quote && braces == 0 && parens == 0 && brackets == 0;

        if ch == '\n' && balanced {
            break;
        }

        if ch == '"' && !(in_quote && escaped(&value)) {
            in_quote = !in_quote;
        } else if !in_quote {
            match ch {
                '{' => braces += 1,
                '}' if braces == 0 => {
                    cursor.retreat();
                    break;
                }
                '}' => braces -= 1,
                '(' => parens += 1,
                ')' => parens = parens.saturating_sub(1),
                '[' => brackets += 1,
                ']' => brackets = brackets.saturating_sub(1),
                ';' if balanced => break,
                _ => {}
            }
        }

        value.push(ch);
    }

    let trimmed_len = value.trim_end().len();
    value.truncate(trimmed_len);
    unquote(value)
}

/// True when `text` ends in an odd run of backslashes, i.e. the next char
/// is escaped.
fn escaped(text: &str) -> bool {
    text.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

/// Strip the quotes of a value that is one quoted run: `"..."` with no
/// unescaped `"` in between.
fn unquote(value: String) -> String {
    if value.len() < 2 || !value.starts_with('"') || !value.ends_with('"') {
        return value;
    }
    let inner = &value[1..value.len() - 1];
    let framed = inner
        .match_indices('"')
        .all(|(i, _)| escaped(&inner[..i]));
    if framed { inner.to_string() } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(src: &str) -> (String, Option<char>, usize) {
        let mut c = Cursor::new(src);
        let v = read_value(&mut c);
        (v, c.peek(), c.line())
    }

    #[test]
    fn stops_at_newline() {
        assert_eq!(read("  42\nnext"), ("42".into(), Some('n'), 2));
    }

    #[test]
    fn stops_at_semicolon() {
        assert_eq!(read("10; height: 5"), ("10".into(), Some(' '), 1));
    }

    #[test]
    fn strips_framing_quotes() {
        assert_eq!(read("\"#ff0000\"\n").0, "#ff0000");
    }

    #[test]
    fn keeps_inner_quotes() {
        assert_eq!(read("\"a\" + \"b\"\n").0, "\"a\" + \"b\"");
    }

    #[test]
    fn leaves_closing_brace_unread() {
        assert_eq!(read("\"hi\" }"), ("hi".into(), Some('}'), 1));
    }

    #[test]
    fn newline_inside_quotes_is_kept() {
        assert_eq!(read("\"a\nb\"\nx"), ("a\nb".into(), Some('x'), 3));
    }

    #[test]
    fn semicolon_inside_quotes_is_kept() {
        assert_eq!(read("\"a;b\"").0, "a;b");
    }

    #[test]
    fn balanced_braces_span_lines() {
        let (v, next, line) = read("() {\n  return 1;\n}\nnext");
        assert_eq!(v, "() {\n  return 1;\n}");
        assert_eq!(next, Some('n'));
        assert_eq!(line, 4);
    }

    #[test]
    fn brackets_and_parens_span_lines() {
        assert_eq!(read("[1,\n 2]\n").0, "[1,\n 2]");
        assert_eq!(read("Qt.rgba(1,\n 0, 0, 1)\n").0, "Qt.rgba(1,\n 0, 0, 1)");
    }

    #[test]
    fn escaped_quote_does_not_close() {
        assert_eq!(read(r#""say \"hi\"; ok""#).0, r#"say \"hi\"; ok"#);
    }

    #[test]
    fn escaped_backslash_closes_quote() {
        let (v, next, line) = read("\"C:\\\\\"\n  width: 5");
        assert_eq!(v, r"C:\\");
        assert_eq!(next, Some(' '));
        assert_eq!(line, 2);
    }

    #[test]
    fn separate_quoted_runs_keep_their_quotes() {
        assert_eq!(read(r#""a" + "b""#).0, r#""a" + "b""#);
        assert_eq!(read(r#""x" === "y" ? "1" : "2""#).0, r#""x" === "y" ? "1" : "2""#);
    }

    #[test]
    fn escaped_inner_quote_still_framed() {
        assert_eq!(read(r#""a\"b""#).0, r#"a\"b"#);
    }

    #[test]
    fn empty_value() {
        assert_eq!(read("   \nx"), (String::new(), Some('x'), 2));
    }
}
