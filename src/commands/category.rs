//! Category Commands
//!
//! Frontend bindings for the category/subcategory REST endpoints.

use std::rc::Rc;

use crate::config::BackendConfig;
use crate::error::FetchError;
use crate::models::{Category, ReorderRequest};

use super::{HttpRequest, Transport};

const CATEGORIES_PATH: &str = "api/rest/categories";
const SUBCATEGORIES_PATH: &str = "api/rest/subcategories";

/// Category endpoints bound to one backend
#[derive(Clone)]
pub struct CategoryApi {
    transport: Rc<dyn Transport>,
    config: BackendConfig,
}

impl CategoryApi {
    pub fn new(transport: Rc<dyn Transport>, config: BackendConfig) -> Self {
        Self { transport, config }
    }

    /// All categories sorted by weight, each with its subcategories
    pub async fn list_categories(&self) -> Result<Vec<Category>, FetchError> {
        let mut url = self.config.endpoint(CATEGORIES_PATH)?;
        url.query_pairs_mut()
            .append_pair("_sort", "weight")
            .append_pair("_refs", "subcategory");

        let body = self.transport.send(HttpRequest::get(url)).await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Replace the order of one category's subcategories
    pub async fn update_subcategory_order(&self, request: &ReorderRequest) -> Result<(), FetchError> {
        let url = self.config.endpoint(SUBCATEGORIES_PATH)?;
        let body = serde_json::to_string(request).map_err(|e| FetchError::Encode(e.to_string()))?;
        let _ = self.transport.send(HttpRequest::patch_json(url, body)).await?;
        Ok(())
    }
}
