use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const DAUM_DICTIONARY: &str = "https://dic.daum.net";
const JISHO: &str = "https://jisho.org";

pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Canonical Daum dictionary search page for `query`
pub fn dictionary_link(query: &str) -> String {
    format!(
        "{DAUM_DICTIONARY}/search.do?q={}&dic=jp",
        encode_component(query)
    )
}

pub fn jisho_search_link(query: &str) -> String {
    format!("{JISHO}/search/{}", encode_component(query))
}
