/// Escapes text coming from the recipe service before it is spliced into markup.
///
/// `&`, `<`, `>` and `"` become named entities; everything else passes through.
/// A missing value renders as the empty string. The result is not idempotent,
/// so raw text must be escaped exactly once.
pub fn escape<'a>(text: impl Into<Option<&'a str>>) -> String {
    let Some(text) = text.into() else {
        return String::new();
    };
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
