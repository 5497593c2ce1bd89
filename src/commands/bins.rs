//! Bin Commands
//!
//! `getBins` and `newBin` over any [`BinTransport`].

use super::{BinTransport, HttpRequest};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::form::{FormFields, CONTENT_TYPE_FORM};
use crate::models::Bin;

#[derive(Debug, Clone)]
pub struct BinApi<T> {
    transport: T,
    config: AppConfig,
}

impl<T: BinTransport> BinApi<T> {
    pub fn new(transport: T, config: AppConfig) -> Self {
        Self { transport, config }
    }

    /// Fetch all bins in server order. Fails on anything but a 2xx JSON list of bins.
    pub async fn get_bins(&self) -> Result<Vec<Bin>, ApiError> {
        let request = HttpRequest::get(self.config.get_bins_url(), self.config.request_timeout_ms);
        let resp = self.transport.send(request).await?;
        if !resp.is_ok() {
            return Err(ApiError::Status(resp.status));
        }
        Ok(serde_json::from_str(&resp.body)?)
    }

    /// Post every form field url-encoded. The response body is ignored.
    pub async fn new_bin(&self, fields: &FormFields) -> Result<(), ApiError> {
        let request = HttpRequest::post(
            self.config.new_bin_url(),
            CONTENT_TYPE_FORM,
            fields.to_urlencoded(),
            self.config.request_timeout_ms,
        );
        let resp = self.transport.send(request).await?;
        if !resp.is_ok() {
            return Err(ApiError::Status(resp.status));
        }
        Ok(())
    }
}
