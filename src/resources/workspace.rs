//! Workspace resource implementation.

use std::sync::Arc;

use serde_json::Value;

use crate::resources::ApiError;
use crate::transport::HttpTransport;

/// Handle for the workspace endpoints.
#[derive(Clone, Debug)]
pub struct Workspace {
    transport: Arc<HttpTransport>,
}

impl Workspace {
    pub(crate) const fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Returns the transport this handle shares with its client.
    #[must_use]
    pub const fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }

    /// Retrieves all workspaces of the organization.
    ///
    /// Docs: <https://developers.tapeapp.com/docs/api/resource/workspace#retrieve-workspaces>
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Failed`] if the transport reports a failure.
    pub async fn get_all_for_org(&self) -> Result<Value, ApiError> {
        Ok(self.transport.get("/v1/workspace/org").await?)
    }
}
