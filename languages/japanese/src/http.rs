use kotoba_config::network::NetworkConfig;
use kotoba_core::LookupError;
use serde::de::DeserializeOwned;

/// Shared outbound client for every provider
pub fn build_client(network: &NetworkConfig) -> Result<reqwest::Client, LookupError> {
    let client = reqwest::Client::builder()
        .user_agent(network.user_agent.clone())
        .timeout(network.request_timeout())
        .build()?;
    Ok(client)
}

/// Send a prepared request and return the body of a 2xx response
pub(crate) async fn fetch_text(
    provider: &'static str,
    request: reqwest::RequestBuilder,
) -> Result<String, LookupError> {
    let response = request.send().await?;

    if !response.status().is_success() {
        return Err(LookupError::Status {
            provider,
            status: response.status().as_u16(),
        });
    }

    Ok(response.text().await?)
}

pub(crate) async fn fetch_json<T: DeserializeOwned>(
    provider: &'static str,
    request: reqwest::RequestBuilder,
) -> Result<T, LookupError> {
    let body = fetch_text(provider, request).await?;
    serde_json::from_str(&body).map_err(|e| LookupError::parse(provider, e))
}
