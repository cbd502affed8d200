//! Index existence, creation, deletion, and open/close state.

use super::IndexAdmin;
use crate::error::Result;
use crate::failure::ServerFailure;
use crate::models::{AckResponse, IndexDefinition};
use crate::transport::{Method, Transport};

impl<T: Transport> IndexAdmin<T> {
    /// Whether the index exists.
    ///
    /// `HEAD /{index}`: 2xx is `true`, 404 is `false`, and any other status
    /// is a [`crate::ClientError::RequestFailed`].
    pub async fn exists(&self) -> Result<bool> {
        let path = self.path("");
        let response = self.send(Method::Head, &path, None, &[]).await?;
        match response.status {
            404 => Ok(false),
            _ if response.is_success() => Ok(true),
            _ => Err(ServerFailure::from_response(&path, &response).into_error()),
        }
    }

    /// Create the index.
    ///
    /// `None` sends no body and the server applies its defaults.
    ///
    /// # Errors
    /// [`crate::ClientError::AlreadyExists`] if the index is present.
    pub async fn create(&self, definition: Option<&IndexDefinition>) -> Result<AckResponse> {
        let path = self.path("");
        let body = definition.map(IndexDefinition::to_body);
        let response = self.request(Method::Put, &path, body.as_ref()).await?;
        self.acknowledged("create", response)
    }

    /// # Errors
    /// [`crate::ClientError::NotFound`] if the index is absent.
    pub async fn delete(&self) -> Result<AckResponse> {
        let path = self.path("");
        let response = self.request(Method::Delete, &path, None).await?;
        self.acknowledged("delete", response)
    }

    /// Open a closed index. Opening an index in the wrong state surfaces as
    /// [`crate::ClientError::RequestFailed`].
    pub async fn open(&self) -> Result<AckResponse> {
        let path = self.path("/_open");
        let response = self.request(Method::Post, &path, None).await?;
        self.acknowledged("open", response)
    }

    pub async fn close(&self) -> Result<AckResponse> {
        let path = self.path("/_close");
        let response = self.request(Method::Post, &path, None).await?;
        self.acknowledged("close", response)
    }
}
