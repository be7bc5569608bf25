// src/util/text.rs
use html_escape::decode_html_entities;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref TABLE_ROW: Regex = Regex::new(r"<tr[\s>]").unwrap();
    static ref BLOCK_BREAK: Regex = Regex::new(r"</?(p|div|br|li|tr|h[1-6])[^>]*>").unwrap();
    static ref ROW_BREAK: Regex = Regex::new(r"</?(tr|br)[^>]*>").unwrap();
    static ref CELL_END: Regex = Regex::new(r"</td>").unwrap();
    static ref TAG: Regex = Regex::new(r"<[^>]+>").unwrap();
}

/// Convert a markup fragment into plain text lines.
///
/// Block elements start a new line. When the fragment holds table rows, each
/// row becomes one line with cells separated by ` | `.
///
/// # Examples
///
/// ```
/// use dinedir::util::text::plain_lines;
///
/// let html = "<div><h3>KFC</h3><p>Chicken &amp; wings</p></div>";
/// assert_eq!(plain_lines(html), vec!["KFC", "Chicken & wings"]);
/// ```
pub fn plain_lines(html: &str) -> Vec<String> {
    let collapsed = WHITESPACE.replace_all(html, " ");

    let breaks: &Regex = if TABLE_ROW.is_match(&collapsed) {
        &ROW_BREAK
    } else {
        &BLOCK_BREAK
    };
    let with_newlines = breaks.replace_all(&collapsed, "\n");
    let with_cells = CELL_END.replace_all(&with_newlines, " | ");
    let no_tags = TAG.replace_all(&with_cells, "");

    // Decode after stripping so encoded angle brackets survive as text
    let decoded = decode_html_entities(&no_tags).to_string();

    decoded
        .lines()
        .map(|line| WHITESPACE.replace_all(line.trim(), " ").into_owned())
        .map(|line| line.trim_end_matches('|').trim_end().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

pub fn plain_text(html: &str) -> String {
    plain_lines(html).join("\n")
}
