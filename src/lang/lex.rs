/// Splits source text into one token list per physical line.
/// A trailing newline yields a final empty list.
pub fn lex(s: &str) -> Vec<Vec<String>> {
    s.split('\n').map(lex_line).collect()
}

pub fn lex_line(s: &str) -> Vec<String> {
    strip_comment(s)
        .split_whitespace()
        .map(|word| word.to_string())
        .collect()
}

fn strip_comment(s: &str) -> &str {
    let mut quoted = false;
    for (index, ch) in s.char_indices() {
        match ch {
            '"' => quoted = !quoted,
            ';' if !quoted => return &s[..index],
            _ => {}
        }
    }
    s
}
