//! Pre-flight checks for DNS records before they are submitted.

use crate::error::{ClientError, Result};
use crate::types::DnsRecord;

/// Checks that `record` carries every field its type requires.
///
/// - `host`, `type`, `data` are always required.
/// - `MX` requires `priority`.
/// - `SRV` requires `priority`, `weight` and `port`.
///
/// The first missing field is reported.
pub fn validate_record(record: &DnsRecord) -> Result<()> {
    require_text("host", &record.host)?;
    require_text("type", &record.record_type)?;
    require_text("data", &record.data)?;

    if record.is_type("MX") {
        require_set("priority", record.priority, "MX")?;
    } else if record.is_type("SRV") {
        require_set("priority", record.priority, "SRV")?;
        require_set("weight", record.weight, "SRV")?;
        require_set("port", record.port, "SRV")?;
    }

    Ok(())
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ClientError::validation(field, "must not be empty"));
    }
    Ok(())
}

fn require_set(field: &str, value: Option<u16>, record_type: &str) -> Result<()> {
    if value.is_none() {
        return Err(ClientError::validation(
            field,
            format!("required for {record_type} records"),
        ));
    }
    Ok(())
}
