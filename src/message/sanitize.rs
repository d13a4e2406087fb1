/// Escapes markup-significant characters so stored bodies render as plain
/// text. Applied exactly once, at write time.
pub fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_markup(r#"<b>"hi" & 'bye'</b>"#),
            "&lt;b&gt;&quot;hi&quot; &amp; &#39;bye&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn ampersand_is_escaped_first() {
        // A later pass over '&' would double-escape the entities.
        assert_eq!(escape_markup("&lt;"), "&amp;lt;");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_markup("hello there"), "hello there");
    }
}
