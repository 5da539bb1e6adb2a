use kotoba_types::KanjiDetails;
use scraper::Html;

use crate::scrape::{Rule, element_text, rule};

static CHARACTER: Rule = rule!("kanji glyph", "h1.character");
static MEANINGS: Rule = rule!("kanji meanings", ".kanji-details__main-meanings");
static KUNYOMI: Rule = rule!("kun readings", ".kanji-details__main-readings .kun_yomi a");
static ONYOMI: Rule = rule!("on readings", ".kanji-details__main-readings .on_yomi a");

const STROKE_ORDER_GIFS: &str = "https://raw.githubusercontent.com/mistval/kanji_images/master/gifs";

pub fn stroke_order_gif_uri(kanji: char) -> String {
    format!("{STROKE_ORDER_GIFS}/{:x}.gif", kanji as u32)
}

/// Kanji details from a `#kanji` search page.
///
/// The page only counts as a hit when its glyph heading is the kanji itself.
pub fn parse_kanji_page(html: &str, kanji: &str) -> KanjiDetails {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let found = CHARACTER
        .all(root)
        .into_iter()
        .any(|heading| element_text(heading) == kanji);
    let Some(glyph) = kanji.chars().next().filter(|_| found) else {
        return KanjiDetails::not_found();
    };

    KanjiDetails {
        found: true,
        stroke_order_gif_uri: Some(stroke_order_gif_uri(glyph)),
        meaning: Some(MEANINGS.text(root)),
        kunyomi: Some(KUNYOMI.texts(root)),
        onyomi: Some(ONYOMI.texts(root)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"
<div class="kanji details">
  <h1 class="character" data-area-name="print" lang="ja">日</h1>
  <div class="kanji-details__main-meanings">
      day, sun, Japan, counter for days
  </div>
  <div class="kanji-details__main-readings">
    <dl class="dictionary_entry kun_yomi">
      <dt>Kun:</dt>
      <dd class="kanji-details__main-readings-list" lang="ja">
        <a href="//jisho.org/search/日 ひ">ひ</a>、 <a href="#">-び</a>、 <a href="#">-か</a>
      </dd>
    </dl>
    <dl class="dictionary_entry on_yomi">
      <dt>On:</dt>
      <dd class="kanji-details__main-readings-list" lang="ja">
        <a href="#">ニチ</a>、 <a href="#">ジツ</a>
      </dd>
    </dl>
  </div>
</div>"##;

    #[test]
    fn reads_meaning_and_readings() {
        let details = parse_kanji_page(PAGE, "日");
        assert!(details.found);
        assert_eq!(
            details.meaning.as_deref(),
            Some("day, sun, Japan, counter for days")
        );
        assert_eq!(details.kunyomi.unwrap(), vec!["ひ", "-び", "-か"]);
        assert_eq!(details.onyomi.unwrap(), vec!["ニチ", "ジツ"]);
        assert_eq!(
            details.stroke_order_gif_uri.as_deref(),
            Some("https://raw.githubusercontent.com/mistval/kanji_images/master/gifs/65e5.gif")
        );
    }

    #[test]
    fn other_glyph_or_missing_page_is_not_found() {
        assert_eq!(parse_kanji_page(PAGE, "月"), KanjiDetails::not_found());
        assert_eq!(parse_kanji_page("", "日"), KanjiDetails::not_found());
    }
}
