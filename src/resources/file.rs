//! File resource implementation.

use std::sync::Arc;

use serde_json::Value;

use crate::resources::ApiError;
use crate::transport::{HttpTransport, RequestBody};

/// Handle for the file endpoints.
///
/// Stateless: holds only the transport shared with the
/// [`Client`](crate::Client) it was resolved from.
#[derive(Clone, Debug)]
pub struct File {
    transport: Arc<HttpTransport>,
}

impl File {
    pub(crate) const fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Returns the transport this handle shares with its client.
    #[must_use]
    pub const fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }

    /// Uploads a file.
    ///
    /// The upload is sent as a `multipart/form-data` request with a
    /// `filename` field and the raw contents as the `file` part. The response
    /// describes the stored file (including the token used to attach it to a
    /// record field).
    ///
    /// Docs: <https://developers.tapeapp.com/docs/api/resource/file#upload-a-file>
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Failed`] if the transport reports a failure.
    pub async fn upload(
        &self,
        filename: impl Into<String>,
        data: Vec<u8>,
    ) -> Result<Value, ApiError> {
        let body = RequestBody::Multipart {
            filename: filename.into(),
            data,
        };
        Ok(self.transport.post("/v1/file/upload", Some(body)).await?)
    }
}
