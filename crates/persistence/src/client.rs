//! HTTP client for the external document store.
//!
//! Speaks the REST dialect of an Appwrite-compatible backend-as-a-service:
//! project and key headers on every call, documents nested under
//! databases/collections, list filtering via query expressions.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use domain::services::StoreError;

/// Document store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub endpoint: String,
    pub project_id: String,
    pub api_key: String,
    pub database_id: String,
    pub timeout_secs: u64,
}

/// Request body for creating a document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateDocumentBody<'a, T> {
    document_id: &'a str,
    data: &'a T,
}

/// One page of documents returned by a list call.
#[derive(Debug, Deserialize)]
pub struct DocumentList<T> {
    pub total: u64,
    pub documents: Vec<T>,
}

/// Error payload the store returns on failures.
#[derive(Debug, Deserialize)]
struct StoreErrorBody {
    message: String,
}

/// Client for the document store REST API.
#[derive(Debug, Clone)]
pub struct DocumentClient {
    config: StoreConfig,
    client: Client,
}

impl DocumentClient {
    /// Create a new document store client.
    pub fn new(config: StoreConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Creates a document with the given id in a collection.
    pub async fn create_document<T: Serialize>(
        &self,
        collection_id: &str,
        document_id: &str,
        data: &T,
    ) -> Result<(), StoreError> {
        let url = format!(
            "{}/databases/{}/collections/{}/documents",
            self.config.endpoint, self.config.database_id, collection_id
        );

        let response = self
            .client
            .post(&url)
            .header("X-Appwrite-Project", &self.config.project_id)
            .header("X-Appwrite-Key", &self.config.api_key)
            .json(&CreateDocumentBody { document_id, data })
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response).await;
            warn!(
                collection = collection_id,
                status = status.as_u16(),
                message = %message,
                "Document create rejected"
            );
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        debug!(
            collection = collection_id,
            document_id = document_id,
            "Document created"
        );
        Ok(())
    }

    /// Lists documents in a collection, applying the given query expressions.
    pub async fn list_documents<T: DeserializeOwned>(
        &self,
        collection_id: &str,
        queries: &[String],
    ) -> Result<DocumentList<T>, StoreError> {
        let url = format!(
            "{}/databases/{}/collections/{}/documents",
            self.config.endpoint, self.config.database_id, collection_id
        );

        let params: Vec<(&str, &str)> = queries
            .iter()
            .map(|q| ("queries[]", q.as_str()))
            .collect();

        let response = self
            .client
            .get(&url)
            .header("X-Appwrite-Project", &self.config.project_id)
            .header("X-Appwrite-Key", &self.config.api_key)
            .query(&params)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response).await;
            warn!(
                collection = collection_id,
                status = status.as_u16(),
                message = %message,
                "Document list rejected"
            );
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<DocumentList<T>>()
            .await
            .map_err(|e| StoreError::Encoding(e.to_string()))
    }

    /// Pings the store's health endpoint.
    pub async fn health(&self) -> Result<(), StoreError> {
        let url = format!("{}/health", self.config.endpoint);

        let response = self
            .client
            .get(&url)
            .header("X-Appwrite-Project", &self.config.project_id)
            .header("X-Appwrite-Key", &self.config.api_key)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message: "health check failed".to_string(),
            });
        }
        Ok(())
    }

    /// Extracts the error message from a failure response body.
    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<StoreErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        }
    }
}

/// Builders for the store's query expressions.
pub mod query {
    /// Matches documents whose attribute equals the value.
    pub fn equal(attribute: &str, value: &str) -> String {
        format!(r#"equal("{}", ["{}"])"#, attribute, value)
    }

    /// Matches documents whose attribute is at or after the value.
    pub fn greater_than_equal(attribute: &str, value: &str) -> String {
        format!(r#"greaterThanEqual("{}", ["{}"])"#, attribute, value)
    }

    /// Orders results by the attribute, descending.
    pub fn order_desc(attribute: &str) -> String {
        format!(r#"orderDesc("{}")"#, attribute)
    }

    /// Caps the number of returned documents.
    pub fn limit(count: u32) -> String {
        format!("limit({})", count)
    }
}
