//! Domeneshop API resource models

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

// ============ Domain ============

/// A domain registered on the account.
///
/// Only ever produced by decoding an API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: u64,
    /// Domain name, e.g. `example.no`.
    pub domain: String,
    /// Lifecycle status as reported by the API (`active`, `expired`, ...).
    pub status: String,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub registered_date: Option<NaiveDate>,
    /// Auto-renew enabled.
    #[serde(default)]
    pub renew: bool,
    #[serde(default)]
    pub registrant: Option<String>,
    /// Nameserver hostnames in the order the API lists them.
    #[serde(default)]
    pub nameservers: Vec<String>,
    #[serde(default)]
    pub services: Option<DomainServices>,
}

/// Services enabled for a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainServices {
    #[serde(default)]
    pub registrar: bool,
    #[serde(default)]
    pub dns: bool,
    #[serde(default)]
    pub email: bool,
    /// Web hosting plan identifier (`none`, `webhotel1`, ...).
    #[serde(default)]
    pub webhotel: Option<String>,
}

// ============ DNS Record ============

/// One DNS resource record under a domain.
///
/// Built by the caller for add/update, or decoded from list results.
/// `host`, `type` and `data` are always written on the wire; `id` never is
/// (it travels in the request path). The type-specific fields are omitted
/// when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Server-assigned identifier, `None` until created.
    #[serde(default, skip_serializing)]
    pub id: Option<u64>,
    /// Host label relative to the domain (`@` for the apex).
    pub host: String,
    /// Time to live in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Record type (`A`, `AAAA`, `CNAME`, `MX`, `TXT`, `SRV`, ...).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record value.
    pub data: String,
    /// MX and SRV only.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_u16"
    )]
    pub priority: Option<u16>,
    /// SRV only.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_u16"
    )]
    pub weight: Option<u16>,
    /// SRV only.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_u16"
    )]
    pub port: Option<u16>,
}

impl DnsRecord {
    pub fn new(
        host: impl Into<String>,
        record_type: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            record_type: record_type.into(),
            data: data.into(),
            ..Self::default()
        }
    }

    /// MX record pointing at `exchange`.
    pub fn mx(host: impl Into<String>, exchange: impl Into<String>, priority: u16) -> Self {
        Self {
            priority: Some(priority),
            ..Self::new(host, "MX", exchange)
        }
    }

    /// SRV record; `host` is the full service label, e.g. `_sip._tcp`.
    pub fn srv(
        host: impl Into<String>,
        target: impl Into<String>,
        priority: u16,
        weight: u16,
        port: u16,
    ) -> Self {
        Self {
            priority: Some(priority),
            weight: Some(weight),
            port: Some(port),
            ..Self::new(host, "SRV", target)
        }
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn is_type(&self, record_type: &str) -> bool {
        self.record_type.eq_ignore_ascii_case(record_type)
    }
}

/// Accepts `10`, `"10"` or `null`. The API has reported these fields both ways.
fn lenient_u16<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u16),
        String(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::String(s)) if s.is_empty() => Ok(None),
        Some(NumberOrString::String(s)) => s
            .parse::<u16>()
            .map(Some)
            .map_err(|e| Error::custom(format!("invalid numeric string '{s}': {e}"))),
        None => Ok(None),
    }
}

// ============ Query ============

/// Server-side filters for listing DNS records.
///
/// Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordQuery {
    pub host: Option<String>,
    pub record_type: Option<String>,
}

impl RecordQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    #[must_use]
    pub fn record_type(mut self, record_type: impl Into<String>) -> Self {
        self.record_type = Some(record_type.into());
        self
    }

    /// `?host=..&type=..` with only the set parameters, or an empty string.
    pub fn to_query_string(&self) -> String {
        let params = [("host", &self.host), ("type", &self.record_type)];
        let pairs: Vec<String> = params
            .iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| format!("{key}={}", urlencoding::encode(v)))
            })
            .collect();

        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}
