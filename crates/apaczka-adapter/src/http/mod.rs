/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses as raw gateway text
[POS]:    HTTP layer - signed REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod customer;
pub mod error;
pub mod orders;
pub mod service;
pub mod signature;

pub use error::{ApaczkaError, Result};
pub use signature::RequestSigner;

pub use client::{ApaczkaClient, ClientConfig, Credentials, REQUEST_VALIDITY_SECS};
