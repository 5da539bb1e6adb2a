use kotoba_types::{ExamplePiece, ExampleResult, ExampleSearchResult};
use scraper::{ElementRef, Html, Node};

use crate::scrape::{Rule, element_text, rule};

static SENTENCE: Rule = rule!("sentence", ".sentence_content");
static JAPANESE: Rule = rule!("japanese sentence", "ul.japanese_sentence");
static FURIGANA: Rule = rule!("furigana", ".furigana");
static SURFACE: Rule = rule!("surface", ".unlinked");
static ENGLISH: Rule = rule!("english", ".english");

/// Example sentences from a `#sentences` search page
pub fn parse_example_page(html: &str, uri: String) -> ExampleSearchResult {
    let document = Html::parse_document(html);
    let results = SENTENCE
        .all(document.root_element())
        .into_iter()
        .map(parse_sentence)
        .collect();

    ExampleSearchResult { uri, results }
}

fn parse_sentence(container: ElementRef<'_>) -> ExampleResult {
    let mut result = ExampleResult {
        english: ENGLISH.text(container),
        ..ExampleResult::default()
    };

    let Some(sentence) = JAPANESE.first(container) else {
        return result;
    };

    // Furigana pieces live in <li>; bare text nodes between them are kana
    for child in sentence.children() {
        match child.value() {
            Node::Text(text) => {
                let text = text.trim();
                result.kanji.push_str(text);
                result.kana.push_str(text);
            }
            Node::Element(_) => {
                let Some(piece) = ElementRef::wrap(child) else {
                    continue;
                };
                let lifted = FURIGANA.first(piece).map(element_text).unwrap_or_default();
                let unlifted = SURFACE.first(piece).map(element_text).unwrap_or_else(|| element_text(piece));

                result.kanji.push_str(&unlifted);
                result
                    .kana
                    .push_str(if lifted.is_empty() { &unlifted } else { &lifted });
                result.pieces.push(ExamplePiece { lifted, unlifted });
            }
            _ => {}
        }
    }

    result
}
