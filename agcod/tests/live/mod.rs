//! Calls against the AGCOD sandbox, enabled by `AGCOD_TEST=on`.

use std::env;

use agcod::time::now;
use agcod::{default_context, CancelGiftCardRequest, Client, Config, CreateGiftCardRequest, MoneyAmount};
use anyhow::Result;
use log::{debug, warn};

fn init_client() -> Option<Client> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("AGCOD_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    let ctx = default_context();
    let config = Config::default().from_env(&ctx);
    Some(Client::new(ctx, config).expect("AGCOD_ENDPOINT must be set"))
}

fn partner_id(client: &Client) -> String {
    client
        .config()
        .partner_id
        .clone()
        .expect("AGCOD_PARTNER_ID must be set")
}

#[tokio::test]
async fn test_get_available_funds() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("AGCOD_TEST is not set, skipped");
        return Ok(());
    };

    let resp = client.get_available_funds("", now()).await?;
    debug!("got available funds: {resp:?}");
    assert_eq!(resp.status, "SUCCESS");
    Ok(())
}

#[tokio::test]
async fn test_create_and_cancel_gift_card() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("AGCOD_TEST is not set, skipped");
        return Ok(());
    };

    let partner_id = partner_id(&client);
    let creation_request_id = format!("{partner_id}{}", now().timestamp());

    let created = client
        .create_gift_card(
            &CreateGiftCardRequest {
                creation_request_id: creation_request_id.clone(),
                partner_id: partner_id.clone(),
                value: MoneyAmount::new(10.0, "USD"),
            },
            now(),
        )
        .await?;
    debug!("created gift card: {created:?}");
    assert_eq!(created.status, "SUCCESS");
    assert!(!created.gc_claim_code.is_empty());

    let cancelled = client
        .cancel_gift_card(
            &CancelGiftCardRequest {
                creation_request_id,
                partner_id,
                gc_id: created.gc_id,
            },
            now(),
        )
        .await?;
    debug!("cancelled gift card: {cancelled:?}");
    assert_eq!(cancelled.status, "SUCCESS");
    Ok(())
}
