use crate::constants::*;
use agcod_core::utils::Redact;
use agcod_core::Context;
use log::warn;
use std::fmt::{self, Debug, Formatter};
use std::time::Duration;

/// Config carries all the configuration for the AGCOD client.
///
/// Explicitly set fields always win, [`Config::from_env`] only fills the
/// ones that are still `None`.
#[derive(Clone, Default)]
pub struct Config {
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AGCOD_ENDPOINT`]
    ///
    /// For example `https://agcod-v2-fe-gamma.amazon.com`. Required.
    pub endpoint: Option<String>,
    /// `region` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AGCOD_REGION`]
    /// - default to `us-east-1`
    pub region: Option<String>,
    /// `service` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AGCOD_SERVICE`]
    /// - default to `AGCODService`
    pub service: Option<String>,
    /// `partner_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AGCOD_PARTNER_ID`]
    pub partner_id: Option<String>,
    /// `timeout` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AGCOD_TIMEOUT`] in seconds
    /// - default to 30s
    pub timeout: Option<Duration>,
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AGCOD_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AGCOD_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `session_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AGCOD_SESSION_TOKEN`]
    pub session_token: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .field("service", &self.service)
            .field("partner_id", &self.partner_id)
            .field("timeout", &self.timeout)
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("session_token", &Redact::from(&self.session_token))
            .finish()
    }
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = non_empty_env(ctx, AGCOD_ENDPOINT) {
            self.endpoint.get_or_insert(v);
        }
        if let Some(v) = non_empty_env(ctx, AGCOD_REGION) {
            self.region.get_or_insert(v);
        }
        if let Some(v) = non_empty_env(ctx, AGCOD_SERVICE) {
            self.service.get_or_insert(v);
        }
        if let Some(v) = non_empty_env(ctx, AGCOD_PARTNER_ID) {
            self.partner_id.get_or_insert(v);
        }
        if let Some(v) = non_empty_env(ctx, AGCOD_TIMEOUT) {
            match v.trim().parse::<u64>() {
                Ok(0) => warn!("ignore invalid {AGCOD_TIMEOUT} value {v:?}: must be positive"),
                Ok(secs) => {
                    self.timeout.get_or_insert(Duration::from_secs(secs));
                }
                Err(err) => warn!("ignore invalid {AGCOD_TIMEOUT} value {v:?}: {err}"),
            }
        }
        if let Some(v) = non_empty_env(ctx, AGCOD_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = non_empty_env(ctx, AGCOD_SECRET_ACCESS_KEY) {
            self.secret_access_key.get_or_insert(v);
        }
        if let Some(v) = non_empty_env(ctx, AGCOD_SESSION_TOKEN) {
            self.session_token.get_or_insert(v);
        }

        self
    }

    /// Region used in the credential scope.
    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }

    /// Service name used in the credential scope.
    pub fn service(&self) -> &str {
        self.service.as_deref().unwrap_or(DEFAULT_SERVICE)
    }

    /// Timeout applied to every call.
    pub fn timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }
}

/// Exported but empty variables count as unset.
fn non_empty_env(ctx: &Context, key: &str) -> Option<String> {
    ctx.env_var(key).filter(|v| !v.is_empty())
}
