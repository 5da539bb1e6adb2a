use std::env;

use serde::{Deserialize, Serialize};

fn default_jisho_api_url() -> String {
    "https://jisho.org".to_string()
}

fn default_jisho_site_url() -> String {
    "https://jisho.org".to_string()
}

fn default_daum_url() -> String {
    "https://dic.daum.net".to_string()
}

fn default_naver_suggest_url() -> String {
    "https://ac-dict.naver.com".to_string()
}

fn default_papago_url() -> String {
    "https://papago.naver.com".to_string()
}

/// Base URLs of the third-party services, without trailing slash
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpstreamConfig {
    #[serde(default = "default_jisho_api_url")]
    pub jisho_api_url: String,
    #[serde(default = "default_jisho_site_url")]
    pub jisho_site_url: String,
    #[serde(default = "default_daum_url")]
    pub daum_url: String,
    #[serde(default = "default_naver_suggest_url")]
    pub naver_suggest_url: String,
    #[serde(default = "default_papago_url")]
    pub papago_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            jisho_api_url: default_jisho_api_url(),
            jisho_site_url: default_jisho_site_url(),
            daum_url: default_daum_url(),
            naver_suggest_url: default_naver_suggest_url(),
            papago_url: default_papago_url(),
        }
    }
}

impl UpstreamConfig {
    pub fn new() -> Self {
        let var = |key: &str, fallback: fn() -> String| {
            env::var(key)
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| fallback())
        };

        Self {
            jisho_api_url: var("JISHO_API_URL", default_jisho_api_url),
            jisho_site_url: var("JISHO_SITE_URL", default_jisho_site_url),
            daum_url: var("DAUM_URL", default_daum_url),
            naver_suggest_url: var("NAVER_SUGGEST_URL", default_naver_suggest_url),
            papago_url: var("PAPAGO_URL", default_papago_url),
        }
    }
}
