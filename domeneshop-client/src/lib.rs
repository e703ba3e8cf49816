//! # domeneshop-client
//!
//! Async client for the [Domeneshop](https://www.domeneshop.no/) REST API
//! (`https://api.domeneshop.no/v0`): list the domains on an account and
//! manage their DNS records.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use domeneshop_client::{Credentials, DnsRecord, DomeneshopClient, RecordQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DomeneshopClient::new(Credentials::from_env()?)?;
//!
//!     let domains = client.list_domains(Some(".no")).await?;
//!     let Some(domain) = domains.first() else {
//!         println!("no .no domains on this account");
//!         return Ok(());
//!     };
//!
//!     let query = RecordQuery::new().record_type("MX");
//!     for record in client.list_dns_records(domain.id, &query).await? {
//!         println!("{} {} {}", record.host, record.record_type, record.data);
//!     }
//!
//!     let record = DnsRecord::mx("@", "mx.example.no", 10).with_ttl(3600);
//!     client.add_dns_record(domain.id, &record).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ClientError>`](ClientError):
//!
//! - [`ClientError::Validation`]: the record is missing a required field; nothing was sent
//! - [`ClientError::Transport`]: the request could not be completed
//! - [`ClientError::Decode`]: the response was not the expected JSON
//! - [`ClientError::Remote`]: the API returned a non-success status; carries the raw body
//! - [`ClientError::Config`]: credentials or client settings are unusable
//!
//! Nothing is retried.

mod client;
mod credentials;
mod error;
mod http_client;
mod types;
mod utils;
mod validation;

pub use client::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, DomeneshopClient, DomeneshopClientBuilder};
pub use credentials::{Credentials, SECRET_ENV, TOKEN_ENV, basic_auth};
pub use error::{ClientError, Result};
pub use http_client::{ApiRequest, HttpTransport, RawResponse, Transport};
pub use types::{DnsRecord, Domain, DomainServices, RecordQuery};
pub use validation::validate_record;
