//! HTTP status to operation outcome

use crate::error::{ClientError, Result};
use crate::http_client::RawResponse;

/// Which statuses an operation treats as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Expect {
    /// Any status below 300.
    Success,
    /// Exactly this status.
    Exactly(u16),
}

impl Expect {
    fn accepts(self, status: u16) -> bool {
        match self {
            Self::Success => status < 300,
            Self::Exactly(code) => status == code,
        }
    }
}

/// Turns an unexpected status into [`ClientError::Remote`] carrying the raw body.
pub(crate) fn check(response: RawResponse, expect: Expect, operation: &str) -> Result<RawResponse> {
    if expect.accepts(response.status) {
        return Ok(response);
    }

    log::warn!(
        "[domeneshop] {operation} failed with HTTP {} ({expect:?} expected)",
        response.status
    );
    Err(ClientError::Remote {
        status: response.status,
        body: response.body,
    })
}
