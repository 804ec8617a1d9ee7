// src/core/html.rs
//
// Single-pass table scanner. No DOM: a tokenizer walks the markup once and a
// small state machine rebuilds the first table's rows and cells.
//
// Tolerant by construction: unclosed <td>/<tr> are closed by the next
// sibling, tag names are case-insensitive, attribute values may contain '>',
// comments and <script>/<style> bodies never leak into cell text.

use crate::core::sanitize::decode_entities;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    Open(&'a str),
    Close(&'a str),
    Text(&'a str),
}

impl Token<'_> {
    fn is_open(&self, tag: &str) -> bool {
        matches!(self, Token::Open(n) if n.eq_ignore_ascii_case(tag))
    }
    fn is_close(&self, tag: &str) -> bool {
        matches!(self, Token::Close(n) if n.eq_ignore_ascii_case(tag))
    }
}

/// Tag/text token stream over a markup string.
pub struct Tokens<'a> {
    src: &'a str,
    pos: usize,
    /// Set after <script>/<style>: skip straight to the matching close tag.
    raw_close: Option<&'static str>,
}

impl<'a> Tokens<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0, raw_close: None }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let bytes = self.src.as_bytes();

        if let Some(close) = self.raw_close.take() {
            self.pos = find_ci(self.src, close, self.pos).unwrap_or(bytes.len());
        }

        loop {
            if self.pos >= bytes.len() {
                return None;
            }
            let start = self.pos;

            if bytes[start] != b'<' {
                let end = self.src[start..].find('<').map_or(bytes.len(), |i| start + i);
                self.pos = end;
                return Some(Token::Text(&self.src[start..end]));
            }

            let rest = &self.src[start..];
            if rest.starts_with("<!--") {
                self.pos = rest[4..].find("-->").map_or(bytes.len(), |i| start + 4 + i + 3);
                continue;
            }

            match bytes.get(start + 1) {
                Some(b'!') | Some(b'?') => {
                    self.pos = rest.find('>').map_or(bytes.len(), |i| start + i + 1);
                    continue;
                }
                Some(b'/') => {
                    let name = tag_name(self.src, start + 2);
                    self.pos = rest.find('>').map_or(bytes.len(), |i| start + i + 1);
                    if name.is_empty() {
                        continue;
                    }
                    return Some(Token::Close(name));
                }
                Some(c) if c.is_ascii_alphabetic() => {
                    let name = tag_name(self.src, start + 1);
                    // Incomplete tag at EOF: nothing more to read.
                    let end = tag_end(bytes, start + 1 + name.len())?;
                    self.pos = end + 1;
                    if name.eq_ignore_ascii_case("script") {
                        self.raw_close = Some("</script");
                    } else if name.eq_ignore_ascii_case("style") {
                        self.raw_close = Some("</style");
                    }
                    return Some(Token::Open(name));
                }
                _ => {
                    // A stray '<' is just text.
                    let end = self.src[start + 1..].find('<').map_or(bytes.len(), |i| start + 1 + i);
                    self.pos = end;
                    return Some(Token::Text(&self.src[start..end]));
                }
            }
        }
    }
}

fn tag_name(src: &str, from: usize) -> &str {
    let tail = src.get(from..).unwrap_or("");
    let len = tail
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'-' || *b == b':')
        .count();
    &tail[..len]
}

/// Index of the '>' closing a start tag.
///
/// A quote only opens a quoted value right after `=` (whitespace allowed
/// between), so `title=don't` stays unquoted. An unterminated quote falls
/// back to the first '>' after the tag name.
fn tag_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    let mut after_eq = false;
    for (i, &b) in bytes.iter().enumerate().skip(from) {
        match quote {
            Some(q) => {
                if b == q {
                    quote = None;
                }
            }
            None => match b {
                b'>' => return Some(i),
                b'"' | b'\'' if after_eq => quote = Some(b),
                b'=' => {
                    after_eq = true;
                    continue;
                }
                _ if b.is_ascii_whitespace() => continue,
                _ => {}
            },
        }
        after_eq = false;
    }
    bytes.get(from..)?.iter().position(|&b| b == b'>').map(|i| from + i)
}

/// ASCII case-insensitive substring search starting at byte `from`.
fn find_ci(hay: &str, needle: &str, from: usize) -> Option<usize> {
    let n = needle.len();
    hay.as_bytes()
        .get(from..)?
        .windows(n)
        .position(|w| w.eq_ignore_ascii_case(needle.as_bytes()))
        .map(|i| from + i)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    BeforeTable,
    InTable,
    Done,
}

/// Rebuilds rows/cells of the first `<table>` from a token stream.
#[derive(Debug, Default)]
pub struct TableExtractor {
    phase: Phase,
    row: Option<Vec<String>>,
    cell: Option<String>,
    rows: Vec<Vec<String>>,
}

impl TableExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, tok: Token<'_>) {
        match self.phase {
            Phase::Done => {}
            Phase::BeforeTable => {
                if tok.is_open("table") {
                    self.phase = Phase::InTable;
                }
            }
            Phase::InTable => match tok {
                t if t.is_close("table") => {
                    self.close_row();
                    self.phase = Phase::Done;
                }
                t if t.is_open("tr") => {
                    self.close_row();
                    self.row = Some(Vec::new());
                }
                t if t.is_close("tr") => self.close_row(),
                t if t.is_open("td") => {
                    if self.row.is_some() {
                        self.close_cell();
                        self.cell = Some(s!());
                    }
                }
                t if t.is_close("td") => self.close_cell(),
                Token::Text(text) => {
                    if let Some(cell) = self.cell.as_mut() {
                        cell.push_str(&decode_entities(text));
                    }
                }
                _ => {}
            },
        }
    }

    pub fn finish(mut self) -> Vec<Vec<String>> {
        // Unterminated table at EOF: keep whatever row was open.
        self.close_row();
        self.rows
    }

    fn close_cell(&mut self) {
        if let Some(text) = self.cell.take() {
            if let Some(row) = self.row.as_mut() {
                row.push(text.trim().to_string());
            }
        }
    }

    fn close_row(&mut self) {
        self.close_cell();
        if let Some(row) = self.row.take() {
            if !row.is_empty() {
                self.rows.push(row);
            }
        }
    }
}

/// Rows of the first table in `markup`, each a list of trimmed cell texts.
pub fn extract(markup: &str) -> Vec<Vec<String>> {
    let mut ex = TableExtractor::new();
    for tok in Tokens::new(markup) {
        ex.feed(tok);
    }
    let rows = ex.finish();
    logf!("Extract: found {} table rows", rows.len());
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn tokenizes_tags_text_and_skips_comments() {
        let toks: Vec<_> = Tokens::new("<p class=\"a>b\">hi<!-- x<td> --></P>").collect();
        assert_eq!(toks, vec![Token::Open("p"), Token::Text("hi"), Token::Close("P")]);
    }

    #[test]
    fn basic_rows_and_cells() {
        let html = "<html><body><table>\
            <tr><td> a </td><td>b</td></tr>\
            <tr><td>c</td></tr>\
            </table></body></html>";
        assert_eq!(extract(html), vec![v(&["a", "b"]), v(&["c"])]);
    }

    #[test]
    fn cell_text_concatenates_nested_fragments() {
        let html = "<table><tr><td><p><span>UMLS:C0011849_</span>diabetes\n mellitus</p></td></tr></table>";
        assert_eq!(extract(html), vec![v(&["UMLS:C0011849_diabetes\n mellitus"])]);
    }

    #[test]
    fn empty_rows_are_dropped_and_th_ignored() {
        let html = "<TABLE><TR><TH>Disease</TH></TR><tr></tr><tr><TD>x</TD></tr></TABLE>";
        assert_eq!(extract(html), vec![v(&["x"])]);
    }

    #[test]
    fn unclosed_cells_and_rows_close_on_next_sibling() {
        let html = "<table><tr><td>a<td>b<tr><td>c</table>";
        assert_eq!(extract(html), vec![v(&["a", "b"]), v(&["c"])]);
    }

    #[test]
    fn stray_quotes_in_attributes_do_not_swallow_markup() {
        let html = "<table><tr><td title=don't>UMLS:C1_a</td><td>5</td><td>UMLS:C2_b</td></tr>\
                    <tr><td></td><td></td><td>UMLS:C3_c</td></tr></table>";
        assert_eq!(
            extract(html),
            vec![v(&["UMLS:C1_a", "5", "UMLS:C2_b"]), v(&["", "", "UMLS:C3_c"])]
        );

        // Quoted values still hide '>'; an unterminated one ends at the first '>'.
        assert_eq!(extract("<table><tr><td title = 'a>b'>x</td></tr></table>"), vec![v(&["x"])]);
        assert_eq!(extract("<table><tr><td class=\"x>y</td></tr></table>"), vec![v(&["y"])]);
    }

    #[test]
    fn only_first_table_is_captured() {
        let html = "<p>pre<td>nope</td></p><table><tr><td>1</td></tr></table>\
                    <table><tr><td>2</td></tr></table>";
        assert_eq!(extract(html), vec![v(&["1"])]);
    }

    #[test]
    fn entities_decoded_and_scripts_skipped() {
        let html = "<table><tr><td>A&amp;B&nbsp;</td><td><script>if (a<b) {}</script>z</td></tr></table>";
        assert_eq!(extract(html), vec![v(&["A&B", "z"])]);
    }

    #[test]
    fn empty_cells_are_kept_as_positions() {
        let html = "<table><tr><td></td><td>&nbsp;</td><td>UMLS:C1_x</td></tr></table>";
        assert_eq!(extract(html), vec![v(&["", "", "UMLS:C1_x"])]);
    }

    #[test]
    fn unterminated_table_keeps_open_row() {
        assert_eq!(extract("<table><tr><td>a"), vec![v(&["a"])]);
        assert!(extract("no table here").is_empty());
    }
}
