use crate::CatalogError;
use reqwest::{header::HeaderMap, Client, Response};
use serde::{de::DeserializeOwned, Serialize};

/// Create a GET request, parse the JSON response.
/// Throws error on non success status code.
pub async fn get_json<R: DeserializeOwned>(
    client: &Client,
    url: &str,
    headers: HeaderMap,
) -> Result<R, CatalogError> {
    let response = client.get(url).headers(headers).send().await?;
    parse_json(response).await
}

/// Create a JSON request, parse the response.
/// Throws error on non success status code.
pub async fn send_json<T: Serialize, R: DeserializeOwned>(
    client: &Client,
    url: &str,
    data: &T,
    headers: HeaderMap,
) -> Result<R, CatalogError> {
    let response = client.post(url).headers(headers).json(data).send().await?;
    parse_json(response).await
}

async fn parse_json<R: DeserializeOwned>(response: Response) -> Result<R, CatalogError> {
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::StatusCode(
            status,
            response.text().await.unwrap_or_default(),
        ));
    }
    Ok(response.json::<R>().await?)
}
