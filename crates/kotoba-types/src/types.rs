use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One autocomplete candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub word: String,
    pub reading: String,
    pub meaning: String,
}

impl SuggestionItem {
    /// Query a click on this suggestion pivots to.
    ///
    /// Words like `食べる∙喰べる` or `日本|にほん` only keep the part before the
    /// first delimiter; an empty word falls back to the reading.
    pub fn pivot_query(&self) -> String {
        let end = self
            .word
            .find(['∙', '|'])
            .unwrap_or(self.word.len());
        let head = self.word[..end].trim();

        if head.is_empty() {
            self.reading.trim().to_string()
        } else {
            head.to_string()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordInfo {
    /// Reading of the entry
    pub word: String,
    pub word_with_kanji: String,
    pub meanings: Vec<String>,
}

impl WordInfo {
    pub fn is_blank(&self) -> bool {
        self.word.is_empty() && self.word_with_kanji.is_empty()
    }

    /// Clickable parts of a `·` separated kanji annotation
    pub fn kanji_parts(&self) -> Vec<&str> {
        self.word_with_kanji
            .split('·')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryResult {
    pub main_word: WordInfo,
    pub sub_words: Vec<WordInfo>,
    pub dictionary_link: String,
}

impl DictionaryResult {
    /// Result for a page without any recognizable entry
    pub fn empty(dictionary_link: String) -> Self {
        Self {
            main_word: WordInfo::default(),
            sub_words: vec![],
            dictionary_link,
        }
    }

    /// Main word followed by sub words, keeping the first `limit` that carry meanings.
    pub fn display_words(&self, limit: usize) -> Vec<&WordInfo> {
        std::iter::once(&self.main_word)
            .chain(self.sub_words.iter())
            .filter(|word| !word.meanings.is_empty())
            .take(limit)
            .collect()
    }
}

/// Kanji details as reported by the lookup service.
///
/// When `found` is false every optional field stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanjiDetails {
    pub found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_order_gif_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kunyomi: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onyomi: Option<Vec<String>>,
}

impl KanjiDetails {
    pub fn not_found() -> Self {
        Self::default()
    }
}

/// Kanji details decorated with an external dictionary link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanjiResult {
    #[serde(flatten)]
    pub details: KanjiDetails,
    pub dictionary_link: String,
}

/// Distinct kanji of a query in first-occurrence order
pub type KanjiMap = IndexMap<String, KanjiResult>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JapaneseWord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    #[serde(default)]
    pub english_definitions: Vec<String>,
    #[serde(default)]
    pub parts_of_speech: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JishoEntry {
    #[serde(default)]
    pub japanese: Vec<JapaneseWord>,
    #[serde(default)]
    pub senses: Vec<Sense>,
}

impl JishoEntry {
    /// Only the first two senses are shown
    pub fn displayed_senses(&self) -> &[Sense] {
        &self.senses[..self.senses.len().min(2)]
    }
}

/// Phrase search response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JishoResult {
    #[serde(default)]
    pub data: Vec<JishoEntry>,
}

impl JishoResult {
    pub fn primary(&self) -> Option<&JishoEntry> {
        self.data.first()
    }

    /// Related words other than the primary entry, as pivot targets
    pub fn related_words(&self) -> Vec<&str> {
        self.data
            .iter()
            .skip(1)
            .filter_map(|entry| entry.japanese.first())
            .filter_map(|jp| jp.word.as_deref().or(jp.reading.as_deref()))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamplePiece {
    /// Furigana over the piece, empty for kana
    pub lifted: String,
    pub unlifted: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleResult {
    pub kanji: String,
    pub kana: String,
    pub english: String,
    pub pieces: Vec<ExamplePiece>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSearchResult {
    pub uri: String,
    pub results: Vec<ExampleResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LookupSlot {
    Phrase,
    Dictionary,
    Examples,
    Kanji,
}

/// A lookup that failed during an orchestration pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotFailure {
    pub slot: LookupSlot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    pub message: String,
}

/// Merged view model of one orchestration pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub query: String,
    pub phrase_result: Option<JishoResult>,
    pub dictionary_result: Option<DictionaryResult>,
    pub example_result: Option<ExampleSearchResult>,
    pub kanji_results: KanjiMap,
    #[serde(default)]
    pub failures: Vec<SlotFailure>,
}

impl SearchResults {
    pub fn failed(&self, slot: LookupSlot) -> bool {
        self.failures.iter().any(|f| f.slot == slot)
    }
}

// Simple search (drag-to-search panel)

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleSearchApiResponse {
    #[serde(default)]
    pub items: Vec<SimpleSearchItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleSearchItem {
    pub entry: String,
    pub sub_entry: Option<String>,
    #[serde(default)]
    pub pos: Vec<PartOfSpeech>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartOfSpeech {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub meanings: Vec<SimpleMeaning>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleMeaning {
    pub ruby: Option<String>,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub examples: Vec<SimpleExample>,
    #[serde(default)]
    pub original_meaning: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleExample {
    pub text: String,
    pub translated_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(reading: &str, meanings: &[&str]) -> WordInfo {
        WordInfo {
            word: reading.to_string(),
            word_with_kanji: String::new(),
            meanings: meanings.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn pivot_query_cuts_at_first_delimiter() {
        let item = SuggestionItem {
            word: "食べる∙喰べる|たべる".to_string(),
            reading: "たべる".to_string(),
            meaning: "먹다".to_string(),
        };
        assert_eq!(item.pivot_query(), "食べる");
    }

    #[test]
    fn pivot_query_falls_back_to_reading() {
        let item = SuggestionItem {
            word: "|x".to_string(),
            reading: "たべる".to_string(),
            meaning: String::new(),
        };
        assert_eq!(item.pivot_query(), "たべる");
    }

    #[test]
    fn kanji_parts_split_on_middle_dot() {
        let info = WordInfo {
            word: "あう".to_string(),
            word_with_kanji: "会う·合う · 逢う".to_string(),
            meanings: vec![],
        };
        assert_eq!(info.kanji_parts(), vec!["会う", "合う", "逢う"]);
    }

    #[test]
    fn display_words_skip_empty_meanings_and_cap() {
        let result = DictionaryResult {
            main_word: word("a", &[]),
            sub_words: (0..8).map(|i| word(&i.to_string(), &["m"])).collect(),
            dictionary_link: String::new(),
        };
        let shown = result.display_words(5);
        assert_eq!(shown.len(), 5);
        assert_eq!(shown[0].word, "0");
        // data itself is untouched
        assert_eq!(result.sub_words.len(), 8);
    }

    #[test]
    fn kanji_result_serializes_flat_without_absent_fields() {
        let result = KanjiResult {
            details: KanjiDetails::not_found(),
            dictionary_link: "link".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({ "found": false, "dictionaryLink": "link" }));
    }

    #[test]
    fn jisho_result_tolerates_missing_fields() {
        let parsed: JishoResult = serde_json::from_str(
            r#"{"meta":{"status":200},"data":[{"slug":"x","japanese":[{"reading":"に"}]}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.data.len(), 1);
        assert!(parsed.data[0].senses.is_empty());
    }
}
