use crate::constants::{
    ALGORITHM, AWS_QUERY_ENCODE_SET, AWS_URI_ENCODE_SET, SCOPE_TERMINATOR, UNSIGNED_HEADERS,
    X_AMZ_DATE, X_AMZ_SECURITY_TOKEN,
};
use crate::Credential;
use agcod_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256, EMPTY_STRING_SHA256};
use agcod_core::time::{format_date, format_iso8601, DateTime};
use agcod_core::{Context, Error, Result, SignRequest, SigningRequest};
use async_trait::async_trait;
use bytes::Bytes;
use http::request::Parts;
use http::uri::Scheme;
use http::{header, HeaderValue};
use http_body_util::BodyExt;
use log::debug;
use percent_encoding::utf8_percent_encode;
use std::fmt::Write;

/// RequestSigner that implement AWS SigV4.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// The signer only holds the service and region. Everything derived from them
/// (scope, signing key) is recomputed on every call, so one signer can be
/// shared freely between tasks.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    service: String,
    region: String,
}

impl RequestSigner {
    /// Create a new signer for the given service and region.
    pub fn new(service: &str, region: &str) -> Self {
        Self {
            service: service.into(),
            region: region.into(),
        }
    }

    /// Service name used in the credential scope.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Region used in the credential scope.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Sign request parts in place.
    ///
    /// `body` must be the exact bytes that will be sent, `None` for requests
    /// without body. On success `x-amz-date`, `authorization` and, when the
    /// credential carries a session token, `x-amz-security-token` are set.
    /// On error the request is left as it was.
    pub fn sign(
        &self,
        req: &mut Parts,
        body: Option<&[u8]>,
        cred: &Credential,
        signing_time: DateTime,
    ) -> Result<()> {
        let original_uri = req.uri.clone();
        let original_headers = req.headers.clone();

        let mut signed_req = SigningRequest::build(req)?;
        match self.sign_inner(&mut signed_req, body, cred, signing_time) {
            Ok(()) => signed_req.apply(req),
            Err(err) => {
                req.uri = original_uri;
                req.headers = original_headers;
                Err(err)
            }
        }
    }

    /// Sign a full request, reading its body to hash it.
    ///
    /// The body is drained once and handed back as [`Bytes`] so the returned
    /// request can still be sent. If the body cannot be read, nothing is
    /// signed and the error is returned.
    pub async fn sign_http_request<B>(
        &self,
        req: http::Request<B>,
        cred: &Credential,
        signing_time: DateTime,
    ) -> Result<http::Request<Bytes>>
    where
        B: http_body::Body,
        B::Error: std::error::Error + Send + Sync + 'static,
    {
        let (mut parts, body) = req.into_parts();
        let body = body
            .collect()
            .await
            .map_err(|e| Error::unexpected("failed to read request body").with_source(e))?
            .to_bytes();

        self.sign(&mut parts, Some(&body[..]), cred, signing_time)?;
        Ok(http::Request::from_parts(parts, body))
    }

    fn sign_inner(
        &self,
        signed_req: &mut SigningRequest,
        body: Option<&[u8]>,
        cred: &Credential,
        now: DateTime,
    ) -> Result<()> {
        // canonicalize context
        canonicalize_header(signed_req, cred, now)?;
        canonicalize_query(signed_req);

        // build canonical request and string to sign.
        let payload_hash = body.map_or_else(|| EMPTY_STRING_SHA256.to_string(), hex_sha256);
        let creq = canonical_request_string(signed_req, &payload_hash)?;
        debug!("calculated canonical request: {creq}");
        let encoded_req = hex_sha256(creq.as_bytes());

        // Scope: "20220313/<region>/<service>/aws4_request"
        let scope = format!(
            "{}/{}/{}/{SCOPE_TERMINATOR}",
            format_date(now),
            self.region,
            self.service
        );
        debug!("calculated scope: {scope}");

        // StringToSign:
        //
        // AWS4-HMAC-SHA256
        // 20220313T072004Z
        // 20220313/<region>/<service>/aws4_request
        // <hashed_canonical_request>
        let string_to_sign = {
            let mut f = String::new();
            writeln!(f, "{ALGORITHM}")?;
            writeln!(f, "{}", format_iso8601(now))?;
            writeln!(f, "{}", &scope)?;
            write!(f, "{}", &encoded_req)?;
            f
        };
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key =
            generate_signing_key(&cred.secret_access_key, now, &self.region, &self.service);
        let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

        let mut authorization = HeaderValue::from_str(&format!(
            "{ALGORITHM} Credential={}/{}, SignedHeaders={}, Signature={}",
            cred.access_key_id,
            scope,
            signed_req
                .header_name_to_vec_sorted(UNSIGNED_HEADERS)
                .join(";"),
            signature
        ))
        .map_err(|e| {
            Error::request_invalid("failed to create authorization header").with_source(e)
        })?;
        authorization.set_sensitive(true);

        signed_req
            .headers
            .insert(header::AUTHORIZATION, authorization);

        Ok(())
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        body: Option<&[u8]>,
        credential: Option<&Self::Credential>,
        signing_time: DateTime,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid(
                "credential is required to sign request with sigv4",
            ));
        };

        self.sign(req, body, cred, signing_time)
    }
}

fn canonical_request_string(ctx: &SigningRequest, payload_hash: &str) -> Result<String> {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    // Insert method
    writeln!(f, "{}", ctx.method)?;
    // Insert encoded path
    writeln!(f, "{}", utf8_percent_encode(&ctx.path, &AWS_URI_ENCODE_SET))?;
    // Insert query
    writeln!(
        f,
        "{}",
        ctx.query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    )?;
    // Insert signed headers
    let signed_headers = ctx.header_name_to_vec_sorted(UNSIGNED_HEADERS);
    for name in signed_headers.iter() {
        writeln!(f, "{}:{}", name, ctx.header_values_joined(name)?)?;
    }
    writeln!(f)?;
    writeln!(f, "{}", signed_headers.join(";"))?;
    write!(f, "{payload_hash}")?;

    Ok(f)
}

fn canonicalize_header(ctx: &mut SigningRequest, cred: &Credential, now: DateTime) -> Result<()> {
    // Header names and values need to be normalized according to Step 4 of https://docs.aws.amazon.com/general/latest/gr/sigv4-create-canonical-request.html
    for (_, value) in ctx.headers.iter_mut() {
        SigningRequest::header_value_normalize(value)?;
    }

    // Insert HOST header if not present.
    if ctx.headers.get(header::HOST).is_none() {
        let host = host_header_value(ctx);
        ctx.headers.insert(
            header::HOST,
            HeaderValue::from_str(&host).map_err(|e| {
                Error::request_invalid("failed to parse authority as header value").with_source(e)
            })?,
        );
    }

    // The date always follows the signing time so a re-signed request
    // carries a fresh timestamp.
    ctx.headers
        .insert(X_AMZ_DATE, HeaderValue::try_from(format_iso8601(now))?);

    // Insert X_AMZ_SECURITY_TOKEN header if security token exists.
    if let Some(token) = &cred.session_token {
        let mut value = HeaderValue::from_str(token).map_err(|e| {
            Error::credential_invalid("session token is not a valid header value").with_source(e)
        })?;
        // Keep the token out of debug output.
        value.set_sensitive(true);

        ctx.headers.insert(X_AMZ_SECURITY_TOKEN, value);
    }

    Ok(())
}

/// Host header as clients send it: default ports are dropped.
fn host_header_value(ctx: &SigningRequest) -> String {
    let default_port = if ctx.scheme == Scheme::HTTPS {
        443
    } else {
        80
    };

    match ctx.authority.port_u16() {
        Some(port) if port != default_port => format!("{}:{port}", ctx.authority.host()),
        _ => ctx.authority.host().to_string(),
    }
}

fn canonicalize_query(ctx: &mut SigningRequest) {
    // Return if query is empty.
    if ctx.query.is_empty() {
        return;
    }

    // Encode first, the canonical order is defined over encoded pairs.
    let mut query = ctx
        .query
        .iter()
        .map(|(k, v)| {
            (
                utf8_percent_encode(k, &AWS_QUERY_ENCODE_SET).to_string(),
                utf8_percent_encode(v, &AWS_QUERY_ENCODE_SET).to_string(),
            )
        })
        .collect::<Vec<_>>();
    // Sort by param name, then by value.
    query.sort();

    ctx.query = query;
}

fn generate_signing_key(secret: &str, time: DateTime, region: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("AWS4{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), format_date(time).as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), SCOPE_TERMINATOR.as_bytes())
}
