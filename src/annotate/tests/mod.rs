mod basic;

use super::AnnotationContext;
use crate::dict::ZhuyinDict;
use crate::lang::Lang;

pub(super) fn make_test_dict() -> ZhuyinDict {
    ZhuyinDict::from_entries([
        ("台灣", "ㄊㄞˊ ㄨㄢ"),
        ("台", "ㄊㄞˊ"),
        ("灣", "ㄨㄢ"),
        ("你好", "ㄋㄧˇ ㄏㄠˇ"),
        ("你", "ㄋㄧˇ"),
        ("好", "ㄏㄠˇ"),
        // Malformed on purpose: one character, two syllables.
        ("阿", "ㄚ ㄌㄧㄡˊ"),
        // Malformed on purpose: two characters, one syllable.
        ("早安", "ㄗㄠˇ"),
        ("早", "ㄗㄠˇ"),
        // Longer than the markup-preserving window (6), within the plain one.
        ("一二三四五六七", "ㄧ ㄦˋ ㄙㄢ ㄙˋ ㄨˇ ㄌㄧㄡˋ ㄑㄧ"),
    ])
}

pub(super) fn active_ctx(dict: &ZhuyinDict) -> AnnotationContext<'_> {
    AnnotationContext::new(Lang::Zh, true, dict)
}

// Expected-fragment builders mirroring the renderer's markup contract.

pub(super) fn ruby_box(syllable: &str, ch: char) -> String {
    format!(
        r#"<span class="zhuyin-box"><span class="zhuyin-rt">{syllable}</span><span class="zhuyin-char">{ch}</span></span>"#
    )
}

pub(super) fn latin_box(run: &str) -> String {
    format!(r#"<span class="zhuyin-box halfwidth"><span class="zhuyin-char">{run}</span></span>"#)
}

pub(super) fn plain_box(text: &str) -> String {
    format!(r#"<span class="zhuyin-box no-zhuyin"><span class="zhuyin-char">{text}</span></span>"#)
}

pub(super) fn bare_box(ch: char) -> String {
    format!(r#"<span class="zhuyin-box"><span class="zhuyin-char">{ch}</span></span>"#)
}
