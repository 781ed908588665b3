use anyhow::Result;
use serde_json::json;

use super::helpers::*;

async fn setup_sale() -> Result<Option<TestEnv>> {
    let Some(env) = setup().await? else {
        return Ok(None);
    };
    sponsor(&env).await?;
    for account in [&env.seller, &env.bidder, &env.rival] {
        deposit(&env, account, DEPOSIT).await?;
    }
    mint(&env, &env.rival, 0).await?;
    open_sale(&env, SELL_AMOUNT, COST).await?;
    Ok(Some(env))
}

#[tokio::test]
async fn test_equal_bid_is_rejected() -> Result<()> {
    let Some(env) = setup_sale().await? else {
        return Ok(());
    };

    bid(&env, &env.bidder, BID).await?.into_result()?;
    let outcome = bid(&env, &env.rival, BID).await?;
    assert!(outcome.is_failure());

    let sale = get_sale(&env).await?.expect("sale should exist");
    assert_eq!(sale.bid["bid"]["bidder_id"], json!(env.bidder.id()));

    Ok(())
}

#[tokio::test]
async fn test_outbid_bidder_reclaims_escrow() -> Result<()> {
    let Some(env) = setup_sale().await? else {
        return Ok(());
    };
    let before = deposited(&env, &env.bidder).await?;

    bid(&env, &env.bidder, BID).await?.into_result()?;
    bid(&env, &env.rival, OUTBID).await?.into_result()?;

    assert_eq!(
        totals(&env, &env.bidder).await?,
        TotalAndUnencumbered {
            total: BID.to_string(),
            unencumbered: BID.to_string(),
        }
    );

    call_marketplace(&env, &env.bidder, "claim_unencumbered_bids", json!({}))
        .await?
        .into_result()?;
    assert_eq!(deposited(&env, &env.bidder).await?, before);
    assert_eq!(
        totals(&env, &env.bidder).await?,
        TotalAndUnencumbered {
            total: "0".to_string(),
            unencumbered: "0".to_string(),
        }
    );

    let again = call_marketplace(&env, &env.bidder, "claim_unencumbered_bids", json!({})).await?;
    assert!(again.is_failure(), "emptied receipt book is gone");

    Ok(())
}

#[tokio::test]
async fn test_accept_bid_settles_sale() -> Result<()> {
    let Some(env) = setup_sale().await? else {
        return Ok(());
    };
    let seller_before = deposited(&env, &env.seller).await?;
    let rival_before = deposited(&env, &env.rival).await?;

    bid(&env, &env.bidder, BID).await?.into_result()?;
    bid(&env, &env.rival, OUTBID).await?.into_result()?;
    call_marketplace(&env, &env.seller, "accept_bid", json!({ "asset_id": env.asset.id() }))
        .await?
        .into_result()?;

    assert!(get_sale(&env).await?.is_none());
    assert_eq!(asset_balance(&env, env.rival.id()).await?, SELL_AMOUNT);
    assert_eq!(deposited(&env, &env.rival).await?, rival_before - OUTBID);
    // Record rent paid at opening comes back with the bid amount.
    assert_eq!(deposited(&env, &env.seller).await?, seller_before + OUTBID);

    let receipts: Vec<serde_json::Value> = env
        .marketplace
        .view("get_receipt_book")
        .args_json(json!({ "account_id": env.rival.id() }))
        .await?
        .json()?;
    assert!(receipts.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_accept_without_bid_fails() -> Result<()> {
    let Some(env) = setup_sale().await? else {
        return Ok(());
    };

    let outcome = call_marketplace(&env, &env.seller, "accept_bid", json!({ "asset_id": env.asset.id() })).await?;
    assert!(outcome.is_failure());
    assert!(get_sale(&env).await?.is_some());

    Ok(())
}
