//! App resource implementation.

use std::fmt::Display;
use std::sync::Arc;

use serde_json::Value;

use crate::resources::{sanitize_id, ApiError, RequestOptions};
use crate::transport::HttpTransport;

/// Handle for the app endpoints.
///
/// Stateless: holds only the transport shared with the
/// [`Client`](crate::Client) it was resolved from.
#[derive(Clone, Debug)]
pub struct App {
    transport: Arc<HttpTransport>,
}

impl App {
    pub(crate) const fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Returns the transport this handle shares with its client.
    #[must_use]
    pub const fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }

    /// Retrieves the records of an app.
    ///
    /// Extras such as `limit`, `sort_by` and `sort_desc` go through
    /// `options`.
    ///
    /// Docs: <https://developers.tapeapp.com/docs/api/resource/record#retrieve-records-for-an-app>
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Failed`] if the transport reports a failure.
    pub async fn get_records(
        &self,
        app_id: impl Display,
        options: RequestOptions,
    ) -> Result<Value, ApiError> {
        let url = format!(
            "/v1/record/app/{}{}",
            sanitize_id(app_id),
            options.to_query_string()
        );
        Ok(self.transport.get(&url).await?)
    }

    /// Retrieves a single app.
    ///
    /// Docs: <https://developers.tapeapp.com/docs/api/resource/app#retrieve-a-single-app>
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Failed`] if the transport reports a failure.
    pub async fn find(&self, app_id: impl Display) -> Result<Value, ApiError> {
        let url = format!("/v1/app/{}", sanitize_id(app_id));
        Ok(self.transport.get(&url).await?)
    }
}
