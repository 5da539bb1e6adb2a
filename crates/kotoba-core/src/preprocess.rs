use unicode_normalization::UnicodeNormalization;

/// Canonical form of a pivot query.
///
/// Text pasted from web pages or games often carries half-width katakana
/// (`ﾀﾍﾞﾙ`) or full-width latin (`ＮＨＫ`), which Jisho and Daum only match in
/// their NFKC forms. Line breaks inside a pasted selection are dropped.
pub fn normalize_query(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    raw.nfkc()
        .filter(|c| !matches!(c, '\n' | '\r'))
        .collect::<String>()
        .trim()
        .to_string()
}
