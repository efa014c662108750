//! Typed client for the PowerDNS Authoritative Server HTTP API.
//!
//! One [`Client`] per API server; every endpoint wrapper is a method on
//! it and goes through the same authenticated request pipeline. Record
//! mutations are normalized into DNS canonical form before they are
//! submitted, so `"foo.tld"` as CNAME content reaches the server as
//! `"foo.tld."`.
//!
//! ```no_run
//! use pdns_client::{Client, types::RrType};
//!
//! # async fn demo() -> pdns_client::Result<()> {
//! let client = Client::new("http://127.0.0.1:8081/api/v1", "secret", "localhost")?;
//! client
//!     .add_record("example.com.", "www.example.com", RrType::CNAME, 300, &["web.example.net"])
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod cryptokeys;
pub mod error;
pub mod naming;
pub mod records;
pub mod types;
pub mod zones;

pub use client::{Client, ClientBuilder};
pub use error::{Error, Result};
