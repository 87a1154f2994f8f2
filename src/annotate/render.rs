use super::tokenizer::Token;

/// Four-cell filler standing in for a tab stop.
const TAB_FILLER: &str = "&nbsp;&nbsp;&nbsp;&nbsp;";

/// Escape text destined for HTML output. Covers the characters that can open
/// tags or entities, plus double quotes since fragments sit next to quoted
/// class attributes.
pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        push_escaped(&mut out, c);
    }
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        _ => out.push(c),
    }
}

pub(crate) fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        render_token(token, &mut out);
    }
    out
}

fn render_token(token: &Token, out: &mut String) {
    match token {
        Token::Break => out.push_str("<br>"),
        Token::Tab => out.push_str(TAB_FILLER),
        Token::Latin(run) => {
            out.push_str(r#"<span class="zhuyin-box halfwidth"><span class="zhuyin-char">"#);
            out.push_str(&escape_html(run));
            out.push_str("</span></span>");
        }
        // One box per character, ruby text above the base glyph. The shared
        // wrapper lets the stylesheet align the pair vertically.
        Token::Han { text, readings } => {
            for (ch, syllable) in text.chars().zip(readings) {
                out.push_str(r#"<span class="zhuyin-box"><span class="zhuyin-rt">"#);
                out.push_str(&escape_html(syllable));
                out.push_str(r#"</span><span class="zhuyin-char">"#);
                push_escaped(out, ch);
                out.push_str("</span></span>");
            }
        }
        Token::Bare(c) => {
            out.push_str(r#"<span class="zhuyin-box"><span class="zhuyin-char">"#);
            push_escaped(out, *c);
            out.push_str("</span></span>");
        }
        // Boxed even without phonetic data, for consistent layout spacing.
        Token::Other(c) => {
            out.push_str(r#"<span class="zhuyin-box no-zhuyin"><span class="zhuyin-char">"#);
            push_escaped(out, *c);
            out.push_str("</span></span>");
        }
    }
}
