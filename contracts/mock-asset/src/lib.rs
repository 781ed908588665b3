//! NEP-141 asset used by the marketplace sandbox tests.
//!
//! Only registered accounts (NEP-145) can receive units, which is what makes
//! sponsoring an asset meaningful. Two switches let tests exercise the
//! marketplace's failure paths:
//! - `set_fail_registrations` makes `storage_deposit` panic
//! - `set_fail_next_transfer` makes the next `ft_transfer` panic

use near_sdk::json_types::U128;
use near_sdk::store::{LookupMap, LookupSet};
use near_sdk::{env, near, AccountId, Gas, NearToken, PanicOnDefault, Promise, PromiseOrValue};

const REGISTRATION_COST: u128 = 1_250_000_000_000_000_000_000;
const ON_TRANSFER_GAS: Gas = Gas::from_tgas(80);
const RESOLVE_GAS: Gas = Gas::from_tgas(10);

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct MockAsset {
    balances: LookupMap<AccountId, u128>,
    registered: LookupSet<AccountId>,
    total_supply: u128,
    fail_registrations: bool,
    fail_next_transfer: bool,
}

#[near(serializers = [json])]
pub struct StorageBalance {
    pub total: U128,
    pub available: U128,
}

#[near]
impl MockAsset {
    #[init]
    pub fn new(owner_id: AccountId, total_supply: U128) -> Self {
        let mut this = Self {
            balances: LookupMap::new(b"b"),
            registered: LookupSet::new(b"r"),
            total_supply: total_supply.0,
            fail_registrations: false,
            fail_next_transfer: false,
        };
        this.registered.insert(owner_id.clone());
        this.balances.insert(owner_id, total_supply.0);
        this
    }

    // --- NEP-141 ---

    #[payable]
    pub fn ft_transfer(&mut self, receiver_id: AccountId, amount: U128, memo: Option<String>) {
        assert_one_yocto();
        if self.fail_next_transfer {
            self.fail_next_transfer = false;
            env::panic_str("MockAsset: simulated transfer failure");
        }
        let sender_id = env::predecessor_account_id();
        self.internal_transfer(&sender_id, &receiver_id, amount.0);
        if let Some(memo) = memo {
            env::log_str(&format!("Memo: {memo}"));
        }
    }

    #[payable]
    pub fn ft_transfer_call(
        &mut self,
        receiver_id: AccountId,
        amount: U128,
        memo: Option<String>,
        msg: String,
    ) -> PromiseOrValue<U128> {
        assert_one_yocto();
        let sender_id = env::predecessor_account_id();
        self.internal_transfer(&sender_id, &receiver_id, amount.0);
        if let Some(memo) = memo {
            env::log_str(&format!("Memo: {memo}"));
        }

        let args = near_sdk::serde_json::json!({
            "sender_id": sender_id,
            "amount": amount,
            "msg": msg,
        });
        Promise::new(receiver_id.clone())
            .function_call(
                "ft_on_transfer".to_string(),
                args.to_string().into_bytes(),
                NearToken::from_yoctonear(0),
                ON_TRANSFER_GAS,
            )
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(RESOLVE_GAS)
                    .ft_resolve_transfer(sender_id, receiver_id, amount),
            )
            .into()
    }

    #[private]
    pub fn ft_resolve_transfer(
        &mut self,
        sender_id: AccountId,
        receiver_id: AccountId,
        amount: U128,
    ) -> U128 {
        let unused = match env::promise_result_checked(0, 64) {
            Ok(data) => near_sdk::serde_json::from_slice::<U128>(&data)
                .map(|unused| unused.0.min(amount.0))
                .unwrap_or(amount.0),
            Err(_) => amount.0,
        };
        if unused > 0 {
            let refund = unused.min(self.balance_of(&receiver_id));
            if refund > 0 {
                self.internal_transfer(&receiver_id, &sender_id, refund);
            }
        }
        U128(amount.0 - unused)
    }

    pub fn ft_balance_of(&self, account_id: AccountId) -> U128 {
        U128(self.balance_of(&account_id))
    }

    pub fn ft_total_supply(&self) -> U128 {
        U128(self.total_supply)
    }

    // --- NEP-145 ---

    #[payable]
    pub fn storage_deposit(
        &mut self,
        account_id: Option<AccountId>,
        registration_only: Option<bool>,
    ) -> StorageBalance {
        if self.fail_registrations {
            env::panic_str("MockAsset: simulated registration failure");
        }
        let attached = env::attached_deposit().as_yoctonear();
        let account_id = account_id.unwrap_or_else(env::predecessor_account_id);
        // Registering twice keeps nothing, as NEP-145 requires.
        let refund = if self.registered.contains(&account_id) {
            attached
        } else {
            assert!(
                attached >= REGISTRATION_COST,
                "Registration requires {REGISTRATION_COST} yoctoNEAR"
            );
            self.registered.insert(account_id);
            if registration_only.unwrap_or(false) {
                attached - REGISTRATION_COST
            } else {
                0
            }
        };
        if refund > 0 {
            let _ = Promise::new(env::predecessor_account_id())
                .transfer(NearToken::from_yoctonear(refund));
        }
        registered_balance()
    }

    pub fn storage_balance_of(&self, account_id: AccountId) -> Option<StorageBalance> {
        self.registered
            .contains(&account_id)
            .then(registered_balance)
    }

    // --- Test switches ---

    pub fn set_fail_registrations(&mut self, fail: bool) {
        self.fail_registrations = fail;
    }

    pub fn set_fail_next_transfer(&mut self, fail: bool) {
        self.fail_next_transfer = fail;
    }

    /// Registers `account_id` and credits it with freshly minted units.
    pub fn mint(&mut self, account_id: AccountId, amount: U128) {
        self.registered.insert(account_id.clone());
        let balance = self.balance_of(&account_id);
        self.balances.insert(account_id, balance + amount.0);
        self.total_supply += amount.0;
    }
}

impl MockAsset {
    fn balance_of(&self, account_id: &AccountId) -> u128 {
        self.balances.get(account_id).copied().unwrap_or(0)
    }

    fn internal_transfer(&mut self, sender_id: &AccountId, receiver_id: &AccountId, amount: u128) {
        assert!(
            self.registered.contains(receiver_id),
            "MockAsset: {receiver_id} is not registered"
        );
        let sender_balance = self.balance_of(sender_id);
        assert!(sender_balance >= amount, "MockAsset: insufficient balance");
        self.balances.insert(sender_id.clone(), sender_balance - amount);
        let receiver_balance = self.balance_of(receiver_id);
        self.balances.insert(receiver_id.clone(), receiver_balance + amount);
    }
}

fn assert_one_yocto() {
    assert_eq!(
        env::attached_deposit(),
        NearToken::from_yoctonear(1),
        "Requires 1 yoctoNEAR"
    );
}

fn registered_balance() -> StorageBalance {
    StorageBalance {
        total: U128(REGISTRATION_COST),
        available: U128(0),
    }
}
