//! Client for the Amazon Gift Cards On Demand (AGCOD) API.
//!
//! Every call is a JSON POST signed with AWS Signature Version 4. The signing
//! time is always supplied by the caller.
//!
//! ```no_run
//! use agcod::{default_context, Client, Config, CreateGiftCardRequest, MoneyAmount};
//!
//! # async fn example() -> agcod::Result<()> {
//! let ctx = default_context();
//! let config = Config {
//!     endpoint: Some("https://agcod-v2-fe-gamma.amazon.com".to_string()),
//!     region: Some("us-west-2".to_string()),
//!     ..Default::default()
//! }
//! .from_env(&ctx);
//!
//! let client = Client::new(ctx, config)?;
//! let resp = client
//!     .create_gift_card(
//!         &CreateGiftCardRequest {
//!             creation_request_id: "Partner0001".to_string(),
//!             partner_id: "Partner".to_string(),
//!             value: MoneyAmount::new(10.0, "USD"),
//!         },
//!         agcod::time::now(),
//!     )
//!     .await?;
//! println!("claim code: {}", resp.gc_claim_code);
//! # Ok(())
//! # }
//! ```

pub use agcod_core::*;

/// AWS SigV4 signing types.
pub mod sigv4 {
    pub use agcod_sigv4::*;
}

mod constants;

mod config;
pub use config::Config;

mod types;
pub use types::*;

mod client;
pub use client::Client;

/// Create a context that sends requests with reqwest and reads the OS environment.
#[cfg(feature = "default-context")]
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(agcod_http_send_reqwest::ReqwestHttpSend::default())
        .with_env(OsEnv)
}
