use crate::constants::*;
use crate::types::GetAvailableFundsRequest;
use crate::{
    CancelGiftCardRequest, CancelGiftCardResponse, Config, CreateGiftCardRequest,
    CreateGiftCardResponse, GetAvailableFundsResponse,
};
use agcod_core::time::DateTime;
use agcod_core::{Context, Error, Result, Signer};
use agcod_sigv4::{
    Credential, EnvCredentialProvider, ProvideCredentialChain, RequestSigner,
    StaticCredentialProvider,
};
use bytes::Bytes;
use http::header;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Client for the AGCOD API.
///
/// Cloning is cheap, clones share the cached credential.
#[derive(Clone, Debug)]
pub struct Client {
    config: Config,
    endpoint: String,
    timeout: Duration,
    signer: Signer<Credential>,
}

impl Client {
    /// Create a new client.
    ///
    /// Credentials set in `config` are used first, then the `AWS_*`
    /// environment values of `ctx`. An empty key pair in `config` counts as
    /// unset.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        let endpoint = config
            .endpoint
            .as_deref()
            .map(|v| v.trim_end_matches('/'))
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("endpoint is required"))?
            .to_string();
        let uri: http::Uri = endpoint.parse().map_err(|e| {
            Error::config_invalid(format!("endpoint {endpoint} is not a valid uri")).with_source(e)
        })?;
        if uri.authority().is_none() {
            return Err(Error::config_invalid(format!(
                "endpoint {endpoint} must be an absolute uri"
            )));
        }

        let mut provider = ProvideCredentialChain::new();
        fn non_empty(v: &Option<String>) -> Option<&str> {
            v.as_deref().filter(|v| !v.is_empty())
        }
        if let (Some(ak), Some(sk)) = (
            non_empty(&config.access_key_id),
            non_empty(&config.secret_access_key),
        ) {
            provider = provider.push(
                StaticCredentialProvider::new(ak, sk)
                    .with_session_token(config.session_token.as_deref().unwrap_or_default()),
            );
        }
        provider = provider.push(EnvCredentialProvider::new());

        let signer = Signer::new(
            ctx,
            provider,
            RequestSigner::new(config.service(), config.region()),
        );

        Ok(Self {
            endpoint,
            timeout: config.timeout(),
            config,
            signer,
        })
    }

    /// Config used by this client.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Create a gift card.
    pub async fn create_gift_card(
        &self,
        req: &CreateGiftCardRequest,
        signing_time: DateTime,
    ) -> Result<CreateGiftCardResponse> {
        self.call(CREATE_GIFT_CARD, req, signing_time).await
    }

    /// Cancel a gift card created earlier.
    pub async fn cancel_gift_card(
        &self,
        req: &CancelGiftCardRequest,
        signing_time: DateTime,
    ) -> Result<CancelGiftCardResponse> {
        self.call(CANCEL_GIFT_CARD, req, signing_time).await
    }

    /// Query the funds left on the partner account.
    ///
    /// An empty `partner_id` falls back to [`Config::partner_id`].
    pub async fn get_available_funds(
        &self,
        partner_id: &str,
        signing_time: DateTime,
    ) -> Result<GetAvailableFundsResponse> {
        let partner_id = match partner_id {
            "" => self.config.partner_id.as_deref().unwrap_or_default(),
            v => v,
        };
        if partner_id.is_empty() {
            return Err(Error::request_invalid(
                "partner id is required to get available funds",
            ));
        }

        self.call(
            GET_AVAILABLE_FUNDS,
            &GetAvailableFundsRequest { partner_id },
            signing_time,
        )
        .await
    }

    async fn call<I, O>(&self, operation: &str, input: &I, signing_time: DateTime) -> Result<O>
    where
        I: Serialize,
        O: DeserializeOwned,
    {
        let body = Bytes::from(serde_json::to_vec(input)?);
        let (mut parts, body) = http::Request::post(format!("{}/{operation}", self.endpoint))
            .header(X_AMZ_TARGET, format!("{TARGET_PREFIX}{operation}"))
            .header(header::ACCEPT, APPLICATION_JSON)
            .header(header::CONTENT_TYPE, APPLICATION_JSON)
            .body(body)?
            .into_parts();

        self.signer
            .sign(&mut parts, Some(&body[..]), signing_time)
            .await?;
        let req = http::Request::from_parts(parts, body);

        debug!("sending agcod {operation} request to {}", self.endpoint);
        let resp = tokio::time::timeout(self.timeout, self.signer.context().http_send(req))
            .await
            .map_err(|_| {
                Error::unexpected(format!("request timed out after {:?}", self.timeout))
            })??;

        let status = resp.status();
        debug!("agcod {operation} responded with status {status}");
        if !status.is_success() {
            return Err(Error::unexpected(format!(
                "status code: {}, body: {}",
                status.as_u16(),
                String::from_utf8_lossy(resp.body())
            )));
        }

        serde_json::from_slice(resp.body()).map_err(|e| {
            Error::unexpected(format!("failed to decode {operation} response")).with_source(e)
        })
    }
}
