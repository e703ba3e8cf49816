//! Domain operations

use crate::error::Result;
use crate::http_client::ApiRequest;
use crate::types::Domain;

use super::DomeneshopClient;
use super::status::{Expect, check};

impl DomeneshopClient {
    /// `GET /domains`, optionally narrowed server-side by `?domain=<filter>`.
    ///
    /// The matching rules for `filter` belong to the API (it matches on
    /// substrings such as `.no`).
    pub async fn list_domains(&self, filter: Option<&str>) -> Result<Vec<Domain>> {
        let mut path = "/domains".to_string();
        if let Some(filter) = filter.filter(|f| !f.is_empty()) {
            path.push_str(&format!("?domain={}", urlencoding::encode(filter)));
        }

        let response = self.send(ApiRequest::get(path)).await?;
        let response = check(response, Expect::Success, "list domains")?;
        response.json()
    }

    /// Domain with the given id, or `None` when the account has no such domain.
    pub async fn find_domain_by_id(&self, id: u64) -> Result<Option<Domain>> {
        let domains = self.list_domains(None).await?;
        Ok(domains.into_iter().find(|d| d.id == id))
    }

    /// Domain whose name is exactly `name` (case and trailing dot ignored).
    pub async fn find_domain(&self, name: &str) -> Result<Option<Domain>> {
        let wanted = normalize_domain_name(name);
        let domains = self.list_domains(Some(&wanted)).await?;
        Ok(domains
            .into_iter()
            .find(|d| normalize_domain_name(&d.domain) == wanted))
    }
}

fn normalize_domain_name(name: &str) -> String {
    name.trim().trim_end_matches('.').to_ascii_lowercase()
}
