pub mod daum;
pub mod http;
pub mod jisho;
pub mod naver;
pub mod papago;
mod scrape;

pub use daum::DaumClient;
pub use http::build_client;
pub use jisho::JishoClient;
pub use naver::NaverSuggestClient;
pub use papago::PapagoClient;
