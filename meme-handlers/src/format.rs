//! Conversion of the model's minimal Markdown emphasis to the HTML subset Telegram accepts.
//!
//! The vision prompt allows at most `**bold**`; models still slip in `*italic*` or backtick code
//! now and then, so those pairs are converted too. Everything else is escaped plain text —
//! Telegram rejects messages containing unknown tags, so escaping comes first.

/// Escapes the three characters Telegram's HTML parse mode requires escaping.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Replaces each `delim`-delimited span having non-empty content with `open`/`close`.
/// Unpaired and empty-content delimiters stay literal text, so a lone `**` survives the later
/// single-asterisk pass untouched.
fn replace_pairs(text: &str, delim: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(delim) {
        let after = &rest[start + delim.len()..];
        match after.find(delim) {
            Some(end) if end > 0 => {
                out.push_str(&rest[..start]);
                out.push_str(open);
                out.push_str(&after[..end]);
                out.push_str(close);
                rest = &after[end + delim.len()..];
            }
            _ => {
                // No closing delimiter, or nothing between the two: keep it literal.
                out.push_str(&rest[..start + delim.len()]);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Converts `**bold**`, `*italic*`, and `` `code` `` to `<b>/<i>/<code>` and escapes everything
/// else. Bold runs first so its double asterisks are not eaten by the italic pass.
pub fn markdown_to_telegram_html(text: &str) -> String {
    let escaped = escape_html(text);
    let bold = replace_pairs(&escaped, "**", "<b>", "</b>");
    let code = replace_pairs(&bold, "`", "<code>", "</code>");
    replace_pairs(&code, "*", "<i>", "</i>")
}

#[cfg(test)]
mod tests {
    use super::markdown_to_telegram_html;

    /// **Test: Bold pairs become <b> tags.**
    #[test]
    fn bold_pairs_converted() {
        assert_eq!(
            markdown_to_telegram_html("a **big** deal"),
            "a <b>big</b> deal"
        );
        assert_eq!(
            markdown_to_telegram_html("**one** and **two**"),
            "<b>one</b> and <b>two</b>"
        );
    }

    /// **Test: Italic and code pairs become <i> and <code> tags.**
    #[test]
    fn italic_and_code_converted() {
        assert_eq!(markdown_to_telegram_html("so *subtle*"), "so <i>subtle</i>");
        assert_eq!(
            markdown_to_telegram_html("the `404` joke"),
            "the <code>404</code> joke"
        );
    }

    /// **Test: HTML metacharacters are escaped before any tag is inserted.**
    #[test]
    fn html_is_escaped() {
        assert_eq!(
            markdown_to_telegram_html("1 < 2 & 3 > 2"),
            "1 &lt; 2 &amp; 3 &gt; 2"
        );
        assert_eq!(
            markdown_to_telegram_html("<script>**x**</script>"),
            "&lt;script&gt;<b>x</b>&lt;/script&gt;"
        );
    }

    /// **Test: Unpaired and empty-content delimiters stay literal text.**
    #[test]
    fn unpaired_delimiter_kept() {
        assert_eq!(markdown_to_telegram_html("2 ** 3"), "2 ** 3");
        assert_eq!(
            markdown_to_telegram_html("a **b** c **d"),
            "a <b>b</b> c **d"
        );
    }

    /// **Test: Plain text passes through unchanged.**
    #[test]
    fn plain_text_unchanged() {
        assert_eq!(
            markdown_to_telegram_html("nothing fancy here"),
            "nothing fancy here"
        );
    }
}
