use super::*;
use crate::annotate::tokenizer::{tokenize, Token, TokenizerOptions};
use crate::annotate::{annotate, annotate_key};

// --- Tokenizer ---

#[test]
fn longest_match_beats_single_characters() {
    let dict = make_test_dict();
    let tokens = tokenize("台灣", &dict, TokenizerOptions::default());
    assert_eq!(
        tokens,
        vec![Token::Han {
            text: "台灣".to_string(),
            readings: vec!["ㄊㄞˊ".to_string(), "ㄨㄢ".to_string()],
        }]
    );
}

#[test]
fn han_tokens_stay_aligned() {
    let dict = make_test_dict();
    for text in ["台灣", "你好", "台灣你好", "一二三四五六七"] {
        for token in tokenize(text, &dict, TokenizerOptions::default()) {
            if let Token::Han { text, readings } = token {
                assert_eq!(text.chars().count(), readings.len(), "misaligned: {text}");
            }
        }
    }
}

#[test]
fn mismatched_single_char_entry_is_refused() {
    let dict = make_test_dict();
    // "阿" has two syllables for one character; it must render unannotated.
    let tokens = tokenize("阿", &dict, TokenizerOptions::default());
    assert_eq!(tokens, vec![Token::Other('阿')]);
}

#[test]
fn mismatched_phrase_falls_back_to_single_char() {
    let dict = make_test_dict();
    // "早安" is malformed (one syllable for two chars): the tokenizer must
    // not use it and must not retry shorter windows either. "早" resolves
    // through the single-character fallback; "安" has no entry at all.
    let tokens = tokenize("早安", &dict, TokenizerOptions::default());
    assert_eq!(
        tokens,
        vec![
            Token::Han {
                text: "早".to_string(),
                readings: vec!["ㄗㄠˇ".to_string()],
            },
            Token::Other('安'),
        ]
    );
}

#[test]
fn latin_runs_are_not_split() {
    let dict = make_test_dict();
    let tokens = tokenize("mid-20th", &dict, TokenizerOptions::default());
    assert_eq!(tokens, vec![Token::Latin("mid-20th".to_string())]);
}

#[test]
fn punctuation_breaks_phrases() {
    let dict = make_test_dict();
    // Even with "台灣" in the dictionary, "台。灣" must not match across
    // the full-width period.
    let tokens = tokenize("台。灣", &dict, TokenizerOptions::default());
    assert_eq!(
        tokens,
        vec![
            Token::Han {
                text: "台".to_string(),
                readings: vec!["ㄊㄞˊ".to_string()],
            },
            Token::Other('。'),
            Token::Han {
                text: "灣".to_string(),
                readings: vec!["ㄨㄢ".to_string()],
            },
        ]
    );
}

// --- Rendering scenarios ---

#[test]
fn mixed_script_scenario() {
    let dict = make_test_dict();
    let out = annotate("Taiwan台灣!", &active_ctx(&dict));
    let expected = format!(
        "{}{}{}{}",
        latin_box("Taiwan"),
        ruby_box("ㄊㄞˊ", '台'),
        ruby_box("ㄨㄢ", '灣'),
        plain_box("!"),
    );
    assert_eq!(out, expected);
}

#[test]
fn newline_and_tab_scenario() {
    let dict = make_test_dict();
    let out = annotate("a\nb\tc", &active_ctx(&dict));
    let expected = format!(
        "{}<br>{}&nbsp;&nbsp;&nbsp;&nbsp;{}",
        latin_box("a"),
        latin_box("b"),
        latin_box("c"),
    );
    assert_eq!(out, expected);
}

#[test]
fn input_specials_are_escaped() {
    let dict = make_test_dict();
    let out = annotate("<台>", &active_ctx(&dict));
    let expected = format!(
        "{}{}{}",
        plain_box("&lt;"),
        ruby_box("ㄊㄞˊ", '台'),
        plain_box("&gt;"),
    );
    assert_eq!(out, expected);
}

#[test]
fn empty_input_renders_empty() {
    let dict = make_test_dict();
    assert_eq!(annotate("", &active_ctx(&dict)), "");
}

// --- Context gating ---

#[test]
fn disabled_toggle_escapes_and_passes_through() {
    let dict = make_test_dict();
    let ctx = AnnotationContext::new(Lang::Zh, false, &dict);
    assert_eq!(annotate("台灣 <b>&\"", &ctx), "台灣 &lt;b&gt;&amp;&quot;");
}

#[test]
fn non_chinese_language_forces_annotation_off() {
    let dict = make_test_dict();
    let ctx = AnnotationContext::new(Lang::En, true, &dict);
    assert!(!ctx.zhuyin_enabled);
    assert_eq!(annotate("台灣", &ctx), "台灣");
}

#[test]
fn empty_dictionary_degrades_to_boxes() {
    let dict = ZhuyinDict::new();
    let out = annotate("台灣", &active_ctx(&dict));
    assert_eq!(out, format!("{}{}", plain_box("台"), plain_box("灣")));
}

// --- Translation facade ---

#[test]
fn annotate_key_resolves_then_annotates() {
    let dict = make_test_dict();
    let translate = |key: &str| (key == "title").then(|| "台灣".to_string());
    let out = annotate_key("title", translate, &active_ctx(&dict));
    assert_eq!(out, format!("{}{}", ruby_box("ㄊㄞˊ", '台'), ruby_box("ㄨㄢ", '灣')));
}

#[test]
fn annotate_key_unknown_key_falls_back_to_key() {
    let dict = make_test_dict();
    let ctx = AnnotationContext::new(Lang::En, false, &dict);
    assert_eq!(annotate_key("missing_key", |_| None, &ctx), "missing_key");
}
