use indexmap::IndexSet;

/// CJK unified ideographs as matched by `[一-龯]`
pub fn is_kanji(c: char) -> bool {
    ('\u{4e00}'..='\u{9faf}').contains(&c)
}

/// Distinct kanji of `text` in first-occurrence order
pub fn distinct_kanji(text: &str) -> Vec<char> {
    text.chars()
        .filter(|c| is_kanji(*c))
        .collect::<IndexSet<char>>()
        .into_iter()
        .collect()
}
