//! Transport Adapter
//!
//! One request in, the response body out. Anything that is not a 2xx
//! response becomes a `FetchError`; retries are not attempted here.

use async_trait::async_trait;
use url::Url;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::error::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Patch => "PATCH",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::Get,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn patch_json(url: Url, body: String) -> Self {
        Self {
            method: Method::Patch,
            url,
            headers: vec![("Content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        }
    }
}

/// Performs a request and returns the raw response body
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<String, FetchError>;
}

/// `window.fetch` based transport
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<String, FetchError> {
        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let js_request = Request::new_with_str_and_init(request.url.as_str(), &init).map_err(network_error)?;
        for (name, value) in &request.headers {
            js_request.headers().set(name, value).map_err(network_error)?;
        }

        let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".to_string()))?;
        let response = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(network_error)?;
        let response: Response = response.dyn_into().map_err(network_error)?;

        let text = JsFuture::from(response.text().map_err(network_error)?)
            .await
            .map_err(network_error)?;
        let body = text.as_string().unwrap_or_default();

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                status_text: response.status_text(),
                body,
            });
        }
        Ok(body)
    }
}

fn network_error(value: JsValue) -> FetchError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    FetchError::Network(message)
}
