use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

fn outbid_contract() -> Contract {
    let mut contract = funded_contract();
    open_sale(&mut contract, SELL_AMOUNT, COST);
    place_bid(&mut contract, &bidder(), BID);
    place_bid(&mut contract, &rival(), OUTBID);
    contract
}

#[test]
fn claim_without_book_fails() {
    let mut contract = funded_contract();
    testing_env!(context(bidder()).build());

    let err = contract.claim_unencumbered_bids().unwrap_err();
    assert_eq!(err, MarketplaceError::ReceiptBookNotFound);
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn outbid_bidder_claims_full_refund() {
    let mut contract = funded_contract();
    let before = balance(&contract, &bidder());
    open_sale(&mut contract, SELL_AMOUNT, COST);
    place_bid(&mut contract, &bidder(), BID);
    place_bid(&mut contract, &rival(), OUTBID);

    testing_env!(context(bidder()).build());
    let claimed = contract.claim_unencumbered_bids().unwrap();

    assert_eq!(claimed.0, BID);
    // Slot rent came back on the outbid, book rent on the claim.
    assert_eq!(balance(&contract, &bidder()), before);
    assert!(receipts_of(&contract, &bidder()).is_empty());
    assert!(!contract.receipt_book.contains_key(&bidder()));
    assert!(emitted("bids_claimed"));
}

#[test]
fn standing_bid_is_not_claimable() {
    let mut contract = outbid_contract();
    let before = balance(&contract, &rival());
    testing_env!(context(rival()).build());

    let claimed = contract.claim_unencumbered_bids().unwrap();

    assert_eq!(claimed.0, 0);
    assert_eq!(balance(&contract, &rival()), before);
    assert_eq!(receipts_of(&contract, &rival()).len(), 1);
}

#[test]
fn claim_is_idempotent() {
    let mut contract = outbid_contract();
    testing_env!(context(rival()).build());
    contract.claim_unencumbered_bids().unwrap();
    let once = balance(&contract, &rival());

    contract.claim_unencumbered_bids().unwrap();
    assert_eq!(balance(&contract, &rival()), once);
}

#[test]
fn second_claim_after_emptying_book_fails() {
    let mut contract = outbid_contract();
    testing_env!(context(bidder()).build());
    contract.claim_unencumbered_bids().unwrap();

    assert_eq!(
        contract.claim_unencumbered_bids().unwrap_err(),
        MarketplaceError::ReceiptBookNotFound
    );
}

#[test]
fn claim_keeps_encumbered_receipts_in_order() {
    let mut contract = funded_contract();
    let assets: Vec<AccountId> = ["a.near", "b.near", "c.near"]
        .iter()
        .map(|id| id.parse().unwrap())
        .collect();
    testing_env!(context(seller()).build());
    for asset_id in &assets {
        contract.sponsored_assets.insert(asset_id.clone());
        let mut deposit = asset_deposit(seller(), 1);
        deposit.asset_id = asset_id.clone();
        contract.internal_open_sale(&seller(), &deposit, COST).unwrap();
    }
    for asset_id in &assets {
        contract
            .internal_bid(&bidder(), &SaleKey::new(seller(), asset_id.clone()), BID)
            .unwrap();
    }
    // Outbid only on the middle sale.
    contract
        .internal_bid(&rival(), &SaleKey::new(seller(), assets[1].clone()), OUTBID)
        .unwrap();

    let claimed = contract.internal_claim_unencumbered_bids(&bidder()).unwrap();

    assert_eq!(claimed, BID);
    let kept: Vec<AccountId> = receipts_of(&contract, &bidder())
        .into_iter()
        .map(|receipt| receipt.sale_key.asset_id)
        .collect();
    assert_eq!(kept, vec![assets[0].clone(), assets[2].clone()]);
}

#[test]
fn closed_sale_releases_receipt() {
    let mut contract = funded_contract();
    open_sale(&mut contract, SELL_AMOUNT, COST);
    place_bid(&mut contract, &bidder(), BID);

    testing_env!(context(seller()).build());
    contract.close_sale(asset()).unwrap();

    let totals = contract.get_total_and_unencumbered_bids(bidder());
    assert_eq!((totals.total.0, totals.unencumbered.0), (BID, BID));

    testing_env!(context(bidder()).build());
    assert_eq!(contract.claim_unencumbered_bids().unwrap().0, BID);
}

// --- get_total_and_unencumbered_bids ---

#[test]
fn totals_without_book_are_zero() {
    let contract = funded_contract();
    assert_eq!(
        contract.get_total_and_unencumbered_bids(bidder()),
        TotalAndUnencumbered::default()
    );
}

#[test]
fn totals_split_by_encumbrance() {
    let contract = outbid_contract();

    let bidder_totals = contract.get_total_and_unencumbered_bids(bidder());
    assert_eq!(bidder_totals.total.0, BID);
    assert_eq!(bidder_totals.unencumbered.0, BID);

    let rival_totals = contract.get_total_and_unencumbered_bids(rival());
    assert_eq!(rival_totals.total.0, OUTBID);
    assert_eq!(rival_totals.unencumbered.0, 0);
}
