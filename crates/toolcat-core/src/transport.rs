//! HTTP transport for the catalog and metrics documents.
//!
//! curl (libcurl) behind a small trait so the loader and the remote
//! metrics fetch can be tested with a fake. Requests carry bounded
//! connect/total timeouts; a hung fetch aborts instead of blocking the
//! caller indefinitely.

use std::time::Duration;
use thiserror::Error;

/// Error from fetching a remote document.
#[derive(Debug, Error)]
pub enum TransportError {
    /// curl-level failure (DNS, connect, TLS, timeout).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// Transfer completed with a non-2xx status.
    #[error("HTTP {0}")]
    Status(u32),
    /// Response body was not valid UTF-8.
    #[error("response body is not valid UTF-8")]
    Encoding,
}

/// Fetches small text documents (catalog / metrics JSON).
pub trait Transport {
    fn fetch_text(&self, url: &str) -> Result<String, TransportError>;
}

/// libcurl-backed transport.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Transport for CurlTransport {
    fn fetch_text(&self, url: &str) -> Result<String, TransportError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(TransportError::Status(code));
        }

        String::from_utf8(body).map_err(|_| TransportError::Encoding)
    }
}
