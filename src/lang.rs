//! Interface language codes for the gallery site.

/// Site interface language. Zhuyin annotation only ever applies to [`Lang::Zh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    /// Traditional Chinese (the default interface language).
    #[default]
    Zh,
    En,
    Ja,
}

impl Lang {
    /// Parse a stored preference or query-parameter code. `"jp"` is the
    /// historical code for Japanese and is kept for old sessions.
    pub fn parse(code: &str) -> Option<Lang> {
        match code {
            "zh" => Some(Lang::Zh),
            "en" => Some(Lang::En),
            "jp" => Some(Lang::Ja),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Lang::Zh => "zh",
            Lang::En => "en",
            Lang::Ja => "jp",
        }
    }

    /// Value for the page's `<html lang="...">` attribute.
    pub fn html_attr(&self) -> &'static str {
        match self {
            Lang::Zh => "zh-TW",
            Lang::En => "en-US",
            Lang::Ja => "ja-JP",
        }
    }
}
