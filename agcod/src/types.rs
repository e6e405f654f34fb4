use serde::{Deserialize, Serialize};

/// An amount of money in a given currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoneyAmount {
    /// Amount, for example `10.0`.
    pub amount: f64,
    /// ISO 4217 currency code, for example `USD`.
    pub currency_code: String,
}

impl MoneyAmount {
    /// Create a new amount.
    pub fn new(amount: f64, currency_code: &str) -> Self {
        Self {
            amount,
            currency_code: currency_code.to_string(),
        }
    }
}

/// Input of `CreateGiftCard`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGiftCardRequest {
    /// Idempotency key, must start with the partner id.
    pub creation_request_id: String,
    /// Partner id issued by Amazon.
    pub partner_id: String,
    /// Value of the gift card.
    pub value: MoneyAmount,
}

/// Input of `CancelGiftCard`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelGiftCardRequest {
    /// Creation request id the card was created with.
    pub creation_request_id: String,
    /// Partner id issued by Amazon.
    pub partner_id: String,
    /// Gift card id returned by `CreateGiftCard`.
    pub gc_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetAvailableFundsRequest<'a> {
    pub partner_id: &'a str,
}

/// Card details returned by `CreateGiftCard`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardInfo {
    pub card_number: Option<String>,
    pub card_status: String,
    pub expiration_date: Option<String>,
    pub value: MoneyAmount,
}

/// Output of `CreateGiftCard`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateGiftCardResponse {
    /// Claim code handed to the customer.
    pub gc_claim_code: String,
    pub card_info: CardInfo,
    pub gc_id: String,
    pub creation_request_id: String,
    pub gc_expiration_date: Option<String>,
    /// `SUCCESS`, `FAILURE` or `RESEND`.
    pub status: String,
}

/// Output of `CancelGiftCard`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CancelGiftCardResponse {
    pub creation_request_id: String,
    pub gc_id: String,
    pub status: String,
}

/// Output of `GetAvailableFunds`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetAvailableFundsResponse {
    pub available_funds: MoneyAmount,
    pub status: String,
    pub timestamp: String,
}
