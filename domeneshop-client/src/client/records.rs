//! DNS record operations

use crate::error::Result;
use crate::http_client::ApiRequest;
use crate::types::{DnsRecord, RecordQuery};
use crate::validation::validate_record;

use super::DomeneshopClient;
use super::status::{Expect, check};

fn records_path(domain_id: u64) -> String {
    format!("/domains/{domain_id}/dns")
}

fn record_path(domain_id: u64, record_id: u64) -> String {
    format!("/domains/{domain_id}/dns/{record_id}")
}

impl DomeneshopClient {
    /// `GET /domains/{id}/dns` with optional `host` / `type` filters.
    pub async fn list_dns_records(
        &self,
        domain_id: u64,
        query: &RecordQuery,
    ) -> Result<Vec<DnsRecord>> {
        let path = format!("{}{}", records_path(domain_id), query.to_query_string());
        let response = self.send(ApiRequest::get(path)).await?;
        let response = check(response, Expect::Success, "list DNS records")?;
        response.json()
    }

    /// Creates `record` under the domain.
    ///
    /// The record is validated first; an invalid record fails with
    /// [`ClientError::Validation`](crate::ClientError::Validation) and
    /// nothing is sent. Any status below 300 is success.
    pub async fn add_dns_record(&self, domain_id: u64, record: &DnsRecord) -> Result<()> {
        validate_record(record)?;

        let request = ApiRequest::post(records_path(domain_id), record)?;
        let response = self.send(request).await?;
        check(response, Expect::Success, "add DNS record")?;
        Ok(())
    }

    /// Replaces record `record_id` with `record`.
    ///
    /// Validated like [`add_dns_record`](Self::add_dns_record). Only
    /// `204 No Content` is success.
    pub async fn update_dns_record(
        &self,
        domain_id: u64,
        record_id: u64,
        record: &DnsRecord,
    ) -> Result<()> {
        validate_record(record)?;

        let request = ApiRequest::put(record_path(domain_id, record_id), record)?;
        let response = self.send(request).await?;
        check(response, Expect::Exactly(204), "update DNS record")?;
        Ok(())
    }

    /// Deletes record `record_id`. Any status below 300 is success.
    pub async fn delete_dns_record(&self, domain_id: u64, record_id: u64) -> Result<()> {
        let response = self
            .send(ApiRequest::delete(record_path(domain_id, record_id)))
            .await?;
        check(response, Expect::Success, "delete DNS record")?;
        Ok(())
    }
}
