//! `/search-data` client

use async_trait::async_trait;

use crate::client::PdnsClient;
use crate::error::Result;
use crate::traits::{ErrorContext, SearchApi};
use crate::types::{ObjectType, SearchResults};

/// Search client
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: PdnsClient,
}

impl SearchClient {
    pub fn new(http: PdnsClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl SearchApi for SearchClient {
    async fn search(&self, query: &str, max: u32, object_type: ObjectType) -> Result<SearchResults> {
        let path = format!(
            "/search-data?q={}&max={max}&object_type={}",
            urlencoding::encode(query),
            object_type.as_str()
        );
        self.http.get(&path, ErrorContext::resource(query)).await
    }
}
