use lifecycle_core::{ObjectStorage, ObjectStorageError, StoredObject};
use reqwest::Client;
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use super::{endpoint, rejection, with_service_role};

/// One storage bucket, reached with the service role key.
#[derive(Clone)]
pub struct SupabaseObjectStorage {
    http_client: Client,
    base_url: String,
    service_role_key: Secret<String>,
    bucket: String,
}

impl SupabaseObjectStorage {
    pub fn new(
        base_url: String,
        service_role_key: Secret<String>,
        bucket: String,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url,
            service_role_key,
            bucket,
        }
    }
}

#[derive(Serialize, Debug)]
struct ListRequest<'a> {
    prefix: &'a str,
    limit: usize,
    offset: usize,
    #[serde(rename = "sortBy")]
    sort_by: SortBy,
}

#[derive(Serialize, Debug)]
struct SortBy {
    column: &'static str,
    order: &'static str,
}

#[derive(Deserialize, Debug)]
struct ListedObject {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Serialize, Debug)]
struct RemoveRequest<'a> {
    prefixes: &'a [String],
}

#[async_trait::async_trait]
impl ObjectStorage for SupabaseObjectStorage {
    #[tracing::instrument(name = "Listing stored objects", skip(self))]
    async fn list(
        &self,
        prefix: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<StoredObject>, ObjectStorageError> {
        let body = ListRequest {
            prefix,
            limit,
            offset,
            sort_by: SortBy {
                column: "name",
                order: "asc",
            },
        };

        let request = self
            .http_client
            .post(endpoint(
                &self.base_url,
                &format!("storage/v1/object/list/{}", self.bucket),
            ))
            .json(&body);

        let response = with_service_role(request, &self.service_role_key)
            .send()
            .await
            .map_err(|e| ObjectStorageError::UnexpectedError(e.to_string()))?;

        if !response.status().is_success() {
            let (status, message) = rejection(response).await;
            return Err(ObjectStorageError::Rejected { status, message });
        }

        let listed: Vec<ListedObject> = response
            .json()
            .await
            .map_err(|e| ObjectStorageError::UnexpectedError(e.to_string()))?;

        Ok(listed
            .into_iter()
            .map(|object| StoredObject::new(object.name.unwrap_or_default()))
            .collect())
    }

    #[tracing::instrument(name = "Removing stored objects", skip_all, fields(count = paths.len()))]
    async fn remove(&self, paths: &[String]) -> Result<(), ObjectStorageError> {
        let request = self
            .http_client
            .delete(endpoint(
                &self.base_url,
                &format!("storage/v1/object/{}", self.bucket),
            ))
            .json(&RemoveRequest { prefixes: paths });

        let response = with_service_role(request, &self.service_role_key)
            .send()
            .await
            .map_err(|e| ObjectStorageError::UnexpectedError(e.to_string()))?;

        if !response.status().is_success() {
            let (status, message) = rejection(response).await;
            return Err(ObjectStorageError::Rejected { status, message });
        }

        Ok(())
    }
}
