use kotoba_core::links::dictionary_link;
use kotoba_types::{DictionaryResult, WordInfo};
use scraper::{ElementRef, Html};

use crate::scrape::{Rule, next_element_sibling, rule};

static TITLE_BLOCK: Rule = rule!("title block", ".search_cleanword");
static TITLE_READING: Rule = rule!("title reading", ".txt_cleansch");
static TITLE_KANJI: Rule = rule!("title kanji annotation", ".sub_read");
static SUB_ENTRY: Rule = rule!("sub entry", ".search_word");
static SUB_READING: Rule = rule!("sub entry reading", ".txt_searchword");
static SUB_KANJI: Rule = rule!("sub entry kanji annotation", ".sub_read");
static MEANING_LIST: Rule = rule!("meaning list", "ul.list_search");
static MEANING: Rule = rule!("meaning", ".txt_search");

/// Turn a Daum search page into the main entry and its sub entries.
///
/// Total over any input: unrecognized markup gives an empty result that
/// still carries the canonical link for `original_query`.
pub fn normalize(raw_html: &str, original_query: &str) -> DictionaryResult {
    let document = Html::parse_document(raw_html);
    let root = document.root_element();

    let main_word = TITLE_BLOCK
        .first(root)
        .map(|title| WordInfo {
            word: TITLE_READING.text(title),
            word_with_kanji: TITLE_KANJI.text(title),
            meanings: meanings_after(title),
        })
        .unwrap_or_default();

    let sub_words = SUB_ENTRY
        .all(root)
        .into_iter()
        .map(|block| WordInfo {
            word: SUB_READING.text(block),
            word_with_kanji: SUB_KANJI.text(block),
            meanings: meanings_after(block),
        })
        .filter(|word| !word.is_blank())
        .collect();

    DictionaryResult {
        main_word,
        sub_words,
        dictionary_link: dictionary_link(original_query),
    }
}

/// Meanings of the list that directly follows `block` as its sibling
fn meanings_after(block: ElementRef<'_>) -> Vec<String> {
    next_element_sibling(block)
        .filter(|sibling| MEANING_LIST.matches(sibling))
        .map(|list| MEANING.texts(list))
        .unwrap_or_default()
}
