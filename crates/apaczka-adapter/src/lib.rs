/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Apaczka adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ApaczkaClient,
    ApaczkaError,
    ClientConfig,
    Credentials,
    REQUEST_VALIDITY_SECS,
    RequestSigner,
    Result,
};

// Re-export all types
pub use types::*;
