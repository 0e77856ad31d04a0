//! Captured request operations.

use blackhole_core::request::RequestRecord;

use super::BlackholeClient;
use crate::error::Result;

impl BlackholeClient {
    /// List every captured request, oldest first.
    pub async fn list_requests(&self) -> Result<Vec<RequestRecord>> {
        let response = self.client.get(self.url("/requests")).send().await?;
        self.handle_response(response).await
    }
}
