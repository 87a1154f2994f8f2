//! Ruby-annotated rendering of Traditional Chinese text.
//!
//! The pipeline is classification → longest-match tokenization → per-token
//! HTML fragments. [`AnnotationContext`] carries the language, the annotation
//! toggle, and the shared dictionary explicitly through every call; nothing
//! is read from ambient state.

mod markup;
mod render;
mod tokenizer;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::dict::ZhuyinDict;
use crate::lang::Lang;

use markup::Span;
use render::{escape_html, render_tokens};
use tokenizer::{tokenize, TokenizerOptions, MARKUP_MAX_WINDOW};

/// Read-only configuration bundle threaded through every annotation call.
/// Never mutated mid-render.
#[derive(Clone, Copy)]
pub struct AnnotationContext<'a> {
    pub lang: Lang,
    pub zhuyin_enabled: bool,
    pub dict: &'a ZhuyinDict,
}

impl<'a> AnnotationContext<'a> {
    /// Annotation only applies to Chinese; a context built for another
    /// language keeps the toggle off regardless of the stored preference.
    pub fn new(lang: Lang, zhuyin_enabled: bool, dict: &'a ZhuyinDict) -> Self {
        Self {
            lang,
            zhuyin_enabled: zhuyin_enabled && lang == Lang::Zh,
            dict,
        }
    }

    fn active(&self) -> bool {
        self.zhuyin_enabled && self.lang == Lang::Zh
    }
}

/// Render `text` with per-character ruby annotations.
///
/// With annotation inactive the input is HTML-escaped and returned as is; no
/// tokenization happens.
pub fn annotate(text: &str, ctx: &AnnotationContext) -> String {
    if !ctx.active() {
        return escape_html(text);
    }
    let span = debug_span!("annotate", len = text.len());
    let _guard = span.enter();
    let tokens = tokenize(text, ctx.dict, TokenizerOptions::default());
    debug!(tokens = tokens.len(), "tokenized");
    render_tokens(&tokens)
}

/// Resolve `key` through the caller's translation lookup, then annotate the
/// result. Unknown keys fall back to the key itself.
pub fn annotate_key(
    key: &str,
    translate: impl Fn(&str) -> Option<String>,
    ctx: &AnnotationContext,
) -> String {
    let text = translate(key).unwrap_or_else(|| key.to_string());
    annotate(&text, ctx)
}

/// Annotate text that already contains markup, reproducing every tag
/// untouched and in place.
///
/// Only the text between tags is tokenized, with a shorter lookup window and
/// uniform boxes for Han characters the dictionary cannot annotate. An
/// inactive context returns the input verbatim: it is author-supplied markup,
/// and escaping it would destroy the tags this function preserves.
pub fn annotate_preserving_markup(text: &str, ctx: &AnnotationContext) -> String {
    if !ctx.active() {
        return text.to_string();
    }
    let span = debug_span!("annotate_preserving_markup", len = text.len());
    let _guard = span.enter();
    let opts = TokenizerOptions {
        max_window: MARKUP_MAX_WINDOW,
        bare_unmatched_han: true,
    };
    let mut out = String::new();
    for part in markup::split_markup(text) {
        match part {
            Span::Tag(tag) => out.push_str(tag),
            Span::Text(chunk) => {
                let tokens = tokenize(chunk, ctx.dict, opts);
                out.push_str(&render_tokens(&tokens));
            }
        }
    }
    out
}
