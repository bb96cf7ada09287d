//! Record resource implementation.
//!
//! Records are the rows of a Tape app. This module provides the [`Record`]
//! handle with the full lifecycle: find, filter, create, update, delete and
//! restore.

use std::fmt::Display;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::resources::{ensure_object, sanitize_id, ApiError, RequestOptions};
use crate::transport::{HttpTransport, RequestBody};

/// Handle for the record endpoints.
///
/// Stateless: holds only the transport shared with the
/// [`Client`](crate::Client) it was resolved from. Obtain one via
/// [`Client::record`](crate::Client::record) or
/// [`Client::resolve`](crate::Client::resolve).
///
/// # Example
///
/// ```rust,ignore
/// use serde_json::json;
/// use tape_api::RequestOptions;
///
/// let record = client.record();
///
/// let created = record
///     .create(1234, &json!({"fields": {"title": "Title"}}), RequestOptions::new())
///     .await?;
/// let record_id = created["record_id"].as_u64().unwrap();
///
/// record.delete(record_id, RequestOptions::new()).await?;
/// let restored = record.restore(record_id, RequestOptions::new()).await?;
/// ```
#[derive(Clone, Debug)]
pub struct Record {
    transport: Arc<HttpTransport>,
}

impl Record {
    pub(crate) const fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Returns the transport this handle shares with its client.
    #[must_use]
    pub const fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }

    /// Retrieves a single record.
    ///
    /// Docs: <https://developers.tapeapp.com/docs/api/resource/record#retrieve-a-record>
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Failed`] if the transport reports a failure.
    pub async fn find(&self, record_id: impl Display) -> Result<Value, ApiError> {
        let url = format!("/v1/record/{}", sanitize_id(record_id));
        Ok(self.transport.get(&url).await?)
    }

    /// Retrieves filtered records for an app.
    ///
    /// The filter specification is sent as the JSON request body; `options`
    /// (flags plus extras such as `limit`) are encoded into the query string.
    ///
    /// Docs: <https://developers.tapeapp.com/docs/api/resource/record#retrieve-filtered-records-for-an-app>
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without issuing a request if
    /// `attributes` does not serialize to a JSON object, and
    /// [`ApiError::Failed`] if the transport reports a failure.
    pub async fn filter<T: Serialize>(
        &self,
        app_id: impl Display,
        attributes: &T,
        options: RequestOptions,
    ) -> Result<Value, ApiError> {
        let body = ensure_object(attributes)?;
        let url = format!(
            "/v1/record/filter/app/{}{}",
            sanitize_id(app_id),
            options.to_query_string()
        );
        Ok(self
            .transport
            .post(&url, Some(RequestBody::Json(body)))
            .await?)
    }

    /// Retrieves the records of a view.
    ///
    /// Docs: <https://developers.tapeapp.com/docs/api/resource/record#retrieve-records-for-a-view>
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Failed`] if the transport reports a failure.
    pub async fn filter_by_view(
        &self,
        view_id: impl Display,
        options: RequestOptions,
    ) -> Result<Value, ApiError> {
        let url = format!(
            "/v1/record/view/{}{}",
            sanitize_id(view_id),
            options.to_query_string()
        );
        Ok(self.transport.get(&url).await?)
    }

    /// Creates a record in an app.
    ///
    /// Docs: <https://developers.tapeapp.com/docs/api/resource/record#create-a-record>
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without issuing a request if
    /// `attributes` does not serialize to a JSON object, and
    /// [`ApiError::Failed`] if the transport reports a failure.
    pub async fn create<T: Serialize>(
        &self,
        app_id: impl Display,
        attributes: &T,
        options: RequestOptions,
    ) -> Result<Value, ApiError> {
        let body = ensure_object(attributes)?;
        let url = format!(
            "/v1/record/app/{}{}",
            sanitize_id(app_id),
            options.to_query_string()
        );
        Ok(self
            .transport
            .post(&url, Some(RequestBody::Json(body)))
            .await?)
    }

    /// Updates a record.
    ///
    /// Docs: <https://developers.tapeapp.com/docs/api/resource/record#update-a-record>
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without issuing a request if
    /// `attributes` does not serialize to a JSON object, and
    /// [`ApiError::Failed`] if the transport reports a failure.
    pub async fn update<T: Serialize>(
        &self,
        record_id: impl Display,
        attributes: &T,
        options: RequestOptions,
    ) -> Result<Value, ApiError> {
        let body = ensure_object(attributes)?;
        let url = format!(
            "/v1/record/{}{}",
            sanitize_id(record_id),
            options.to_query_string()
        );
        Ok(self.transport.put(&url, RequestBody::Json(body)).await?)
    }

    /// Deletes a record.
    ///
    /// The service's response body is discarded; this method resolves to
    /// nothing on success. Pass `skip_trash` as an extra option to bypass the
    /// trash: `RequestOptions::new().param("skip_trash", true)`.
    ///
    /// Docs: <https://developers.tapeapp.com/docs/api/resource/record#delete-a-record>
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Failed`] if the transport reports a failure.
    pub async fn delete(
        &self,
        record_id: impl Display,
        options: RequestOptions,
    ) -> Result<(), ApiError> {
        let url = format!(
            "/v1/record/{}{}",
            sanitize_id(record_id),
            options.to_query_string()
        );
        Ok(self.transport.delete_with(&url, |_response| ()).await?)
    }

    /// Restores a deleted record.
    ///
    /// Sends a bodyless POST to the restore endpoint.
    ///
    /// Docs: <https://developers.tapeapp.com/docs/api/resource/record#restore-a-record>
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Failed`] if the transport reports a failure.
    pub async fn restore(
        &self,
        record_id: impl Display,
        options: RequestOptions,
    ) -> Result<Value, ApiError> {
        let url = format!(
            "/v1/record/{}/restore{}",
            sanitize_id(record_id),
            options.to_query_string()
        );
        Ok(self.transport.post(&url, None).await?)
    }
}
