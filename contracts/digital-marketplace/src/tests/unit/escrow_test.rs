use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::testing_env;

// --- deposit ---

#[test]
fn first_deposit_pays_entry_rent() {
    let mut contract = new_contract();
    let balance = fund(&mut contract, &seller(), DEPOSIT);

    assert!(balance < DEPOSIT);
    assert!(balance > DEPOSIT - ONE_NEAR / 100);
    assert_eq!(contract.get_deposited(seller()).0, balance);
    assert!(emitted("deposited"));
}

#[test]
fn later_deposits_are_credited_in_full() {
    let mut contract = new_contract();
    let first = fund(&mut contract, &seller(), DEPOSIT);
    let second = fund(&mut contract, &seller(), ONE_NEAR);

    assert_eq!(second, first + ONE_NEAR);
}

#[test]
fn zero_first_deposit_cannot_cover_rent() {
    let mut contract = new_contract();
    testing_env!(context(seller()).build());

    let err = contract.deposit().unwrap_err();
    assert!(matches!(err, MarketplaceError::InsufficientBalance(_)));
    assert_eq!(err.kind(), ErrorKind::InsufficientFunds);
}

#[test]
fn zero_deposit_on_existing_entry_is_noop() {
    let mut contract = new_contract();
    let balance = fund(&mut contract, &seller(), DEPOSIT);

    testing_env!(context(seller()).build());
    assert_eq!(contract.deposit().unwrap().0, balance);
}

#[test]
fn deposit_is_per_account() {
    let mut contract = new_contract();
    fund(&mut contract, &seller(), DEPOSIT);

    assert_eq!(contract.get_deposited(bidder()).0, 0);
}

// --- withdraw ---

#[test]
fn withdraw_debits_balance() {
    let mut contract = new_contract();
    let balance = fund(&mut contract, &seller(), DEPOSIT);

    testing_env!(context(seller()).build());
    let remaining = contract.withdraw(U128(ONE_NEAR)).unwrap();

    assert_eq!(remaining.0, balance - ONE_NEAR);
    assert_eq!(contract.get_deposited(seller()).0, balance - ONE_NEAR);
    assert!(emitted("withdrawn"));
}

#[test]
fn withdraw_entire_balance_keeps_entry() {
    let mut contract = new_contract();
    let balance = fund(&mut contract, &seller(), DEPOSIT);

    testing_env!(context(seller()).build());
    contract.withdraw(U128(balance)).unwrap();

    assert_eq!(contract.get_deposited(seller()).0, 0);
    assert!(contract.deposited.contains_key(&seller()));
}

#[test]
fn withdraw_more_than_balance_fails_and_keeps_balance() {
    let mut contract = new_contract();
    let balance = fund(&mut contract, &seller(), DEPOSIT);

    testing_env!(context(seller()).build());
    let err = contract.withdraw(U128(balance + 1)).unwrap_err();

    assert!(matches!(err, MarketplaceError::InsufficientBalance(_)));
    assert_eq!(contract.get_deposited(seller()).0, balance);
}

#[test]
fn withdraw_zero_is_accepted() {
    let mut contract = new_contract();
    let balance = fund(&mut contract, &seller(), DEPOSIT);

    testing_env!(context(seller()).build());
    assert_eq!(contract.withdraw(U128(0)).unwrap().0, balance);
}

#[test]
fn withdraw_without_escrow_fails() {
    let mut contract = new_contract();
    testing_env!(context(bidder()).build());

    let err = contract.withdraw(U128(1)).unwrap_err();
    assert!(matches!(err, MarketplaceError::InsufficientBalance(_)));
}

// --- credit / debit ---

#[test]
fn credit_to_unknown_account_is_rejected() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());

    let err = contract.credit(&bidder(), 1).unwrap_err();
    assert_eq!(err, MarketplaceError::AccountNotFound);
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn credit_overflow_is_reported() {
    let mut contract = new_contract();
    fund(&mut contract, &seller(), DEPOSIT);

    let err = contract.credit(&seller(), u128::MAX).unwrap_err();
    assert_eq!(err, MarketplaceError::Overflow);
}

#[test]
fn zero_amounts_never_touch_missing_entries() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());

    assert_eq!(contract.credit(&bidder(), 0).unwrap(), 0);
    assert_eq!(contract.debit(&bidder(), 0).unwrap(), 0);
    assert!(!contract.deposited.contains_key(&bidder()));
}
