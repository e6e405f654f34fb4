//! AWS Signature Version 4 request signing.
//!
//! This crate signs raw HTTP requests for endpoints that have no SDK client,
//! such as the Amazon Gift Cards On Demand API.
//!
//! ```no_run
//! use agcod_core::time::from_unix_timestamp;
//! use agcod_sigv4::{Credential, RequestSigner};
//!
//! # fn main() -> agcod_core::Result<()> {
//! let signer = RequestSigner::new("AGCODService", "us-west-2");
//! let cred = Credential::new("AKID", "SECRET");
//!
//! let body: &[u8] = br#"{"partnerId":"Amazon"}"#;
//! let (mut parts, _) = http::Request::post("https://agcod-v2-fe-gamma.amazon.com/GetAvailableFunds")
//!     .header("x-amz-target", "com.amazonaws.agcod.AGCODService.GetAvailableFunds")
//!     .body(())?
//!     .into_parts();
//!
//! signer.sign(&mut parts, Some(body), &cred, from_unix_timestamp(1467963107)?)?;
//! assert!(parts.headers.contains_key(http::header::AUTHORIZATION));
//! # Ok(())
//! # }
//! ```

mod constants;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

mod sign_request;
pub use sign_request::RequestSigner;
