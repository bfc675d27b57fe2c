//! HTTP transport shared by all client query interfaces.
//!
//! One [`ApiConnection`] owns the reqwest blocking client, the base URL and
//! the optional bearer token; every request from every domain wrapper goes
//! through the typed `get`/`post`/`put`/`delete` choke points here, which
//! attach auth, deserialize JSON and map HTTP failures onto
//! [`FormulaCardzError`].

use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{FormulaCardzError, Result};
use crate::query_params::QueryParams;

pub struct ApiConnection {
    base_url: String,
    auth_token: Option<String>,
    client: Client,
}

impl ApiConnection {
    /// Build a connection with its HTTP client.
    ///
    /// `base_url` should not end with a slash; endpoint paths supply their
    /// own leading slash.
    pub fn new(base_url: String, timeout: Duration, auth_token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self {
            base_url,
            auth_token,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the bearer token used for authenticated endpoints.
    pub fn set_auth_token(&mut self, token: Option<String>) {
        self.auth_token = token;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FormulaCardzError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            warn!("request to {path} failed with status {status}");
            return Err(FormulaCardzError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json()?)
    }

    fn expect_success(path: &str, response: Response) -> Result<()> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FormulaCardzError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            warn!("request to {path} failed with status {status}");
            return Err(FormulaCardzError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    /// GET `path` with query parameters, deserializing the JSON body.
    pub fn get<T: DeserializeOwned>(&self, path: &str, params: &QueryParams) -> Result<T> {
        debug!("GET {path}");
        let mut builder = self.authed(self.client.get(self.url(path)));
        if !params.is_empty() {
            builder = builder.query(params.pairs());
        }
        Self::decode(path, builder.send()?)
    }

    /// POST a JSON body, deserializing the JSON response.
    pub fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        debug!("POST {path}");
        let builder = self.authed(self.client.post(self.url(path))).json(body);
        Self::decode(path, builder.send()?)
    }

    /// POST a JSON body where the response carries no payload of interest.
    pub fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        debug!("POST {path}");
        let builder = self.authed(self.client.post(self.url(path))).json(body);
        Self::expect_success(path, builder.send()?)
    }

    /// PUT a JSON body, deserializing the JSON response.
    pub fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        debug!("PUT {path}");
        let builder = self.authed(self.client.put(self.url(path))).json(body);
        Self::decode(path, builder.send()?)
    }

    /// PUT a JSON body where the response carries no payload of interest.
    pub fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        debug!("PUT {path}");
        let builder = self.authed(self.client.put(self.url(path))).json(body);
        Self::expect_success(path, builder.send()?)
    }

    /// DELETE with a JSON body (the API keys removals on the body, not the
    /// path), deserializing the JSON response.
    pub fn delete<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        debug!("DELETE {path}");
        let builder = self.authed(self.client.delete(self.url(path))).json(body);
        Self::decode(path, builder.send()?)
    }

    /// DELETE with a JSON body where the response carries no payload.
    pub fn delete_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        debug!("DELETE {path}");
        let builder = self.authed(self.client.delete(self.url(path))).json(body);
        Self::expect_success(path, builder.send()?)
    }
}
