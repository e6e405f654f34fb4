use std::time::Duration;

// Env values used to configure the client.
pub const AGCOD_ENDPOINT: &str = "AGCOD_ENDPOINT";
pub const AGCOD_REGION: &str = "AGCOD_REGION";
pub const AGCOD_SERVICE: &str = "AGCOD_SERVICE";
pub const AGCOD_PARTNER_ID: &str = "AGCOD_PARTNER_ID";
pub const AGCOD_TIMEOUT: &str = "AGCOD_TIMEOUT";
pub const AGCOD_ACCESS_KEY_ID: &str = "AGCOD_ACCESS_KEY_ID";
pub const AGCOD_SECRET_ACCESS_KEY: &str = "AGCOD_SECRET_ACCESS_KEY";
pub const AGCOD_SESSION_TOKEN: &str = "AGCOD_SESSION_TOKEN";

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_SERVICE: &str = "AGCODService";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Operations
pub const CREATE_GIFT_CARD: &str = "CreateGiftCard";
pub const CANCEL_GIFT_CARD: &str = "CancelGiftCard";
pub const GET_AVAILABLE_FUNDS: &str = "GetAvailableFunds";

pub const X_AMZ_TARGET: &str = "x-amz-target";
pub const TARGET_PREFIX: &str = "com.amazonaws.agcod.AGCODService.";
pub const APPLICATION_JSON: &str = "application/json";
