//! PowerDNS HTTP request methods

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ErrorMapper, RawApiError};

use super::PdnsClient;

const API_KEY_HEADER: &str = "X-API-Key";

impl PdnsClient {
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, url)
            .header("Accept", "application/json");
        match &self.api_key {
            Some(key) => builder.header(API_KEY_HEADER, key),
            None => builder,
        }
    }

    /// Sends the request and returns the body of a 2xx response.
    async fn send(
        &self,
        builder: RequestBuilder,
        method: &Method,
        url: &str,
        context: ErrorContext,
    ) -> Result<String> {
        let (status, body) = HttpUtils::execute_request(builder, method.as_str(), url).await?;

        if (200..300).contains(&status) {
            return Ok(body);
        }

        let err = self.map_error(RawApiError::from_body(status, &body), context);
        if err.is_expected() {
            log::warn!("API error: {err}");
        } else {
            log::error!("API error: {err}");
        }
        Err(err)
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<String> {
        let url = self.url(path);
        let json = HttpUtils::to_json_body(body)?;
        let builder = self
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .body(json);
        self.send(builder, &method, &url, context).await
    }

    /// Execute a GET request
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let url = self.url(path);
        let builder = self.request(Method::GET, &url);
        let body = self.send(builder, &Method::GET, &url, context).await?;
        HttpUtils::parse_json(&body)
    }

    /// Execute a POST request and decode the created resource
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        let body = self.send_json(Method::POST, path, body, context).await?;
        HttpUtils::parse_json(&body)
    }

    /// Execute a POST request whose response body is ignored
    pub(crate) async fn post_void<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<()> {
        self.send_json(Method::POST, path, body, context).await?;
        Ok(())
    }

    /// Execute a PATCH request (204 No Content on success)
    pub(crate) async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<()> {
        self.send_json(Method::PATCH, path, body, context).await?;
        Ok(())
    }

    /// Execute a DELETE request
    pub(crate) async fn delete(&self, path: &str, context: ErrorContext) -> Result<()> {
        let url = self.url(path);
        let builder = self.request(Method::DELETE, &url);
        self.send(builder, &Method::DELETE, &url, context).await?;
        Ok(())
    }
}
