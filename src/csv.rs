// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant).
/// Blank lines are skipped; an unterminated quote runs to EOF.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // doubled quote
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a final newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row to any writer, quoting only where required.
pub fn write_row<W, S>(mut w: W, row: &[S], sep: char) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_fields_survive() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["plain", "with, comma", "say \"hi\""], ',').unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "plain,\"with, comma\",\"say \"\"hi\"\"\"\n");
        assert_eq!(
            parse_rows(&text, ','),
            vec![vec![s!("plain"), s!("with, comma"), s!("say \"hi\"")]]
        );
    }

    #[test]
    fn crlf_blank_lines_and_missing_final_newline() {
        let rows = parse_rows("a,b\r\n\r\nc,\"d\ne\"\nf,g", ',');
        assert_eq!(
            rows,
            vec![
                vec![s!("a"), s!("b")],
                vec![s!("c"), s!("d\ne")],
                vec![s!("f"), s!("g")],
            ]
        );
    }

    #[test]
    fn empty_fields_kept() {
        assert_eq!(parse_rows(",x,\n", ','), vec![vec![s!(), s!("x"), s!()]]);
        assert!(parse_rows("", ',').is_empty());
    }
}
