use crate::external::ext_ft;
use crate::storage::storage_byte_cost;
use crate::*;

/// Rent held back per outgoing payout, enough for one new stranded record.
pub(crate) fn stranded_payout_reserve() -> u128 {
    u128::from(STRANDED_PAYOUT_RESERVE_BYTES) * storage_byte_cost()
}

impl Contract {
    /// Sends `amount` units of `asset_id` out of the marketplace's holding.
    /// `payer_id` is the account whose call triggered the payout; it reserves the rent a
    /// stranded record would need until the transfer resolves.
    pub(crate) fn pay_out_asset(
        &mut self,
        asset_id: &AccountId,
        receiver_id: &AccountId,
        amount: u128,
        payer_id: &AccountId,
    ) -> Result<(), MarketplaceError> {
        if amount == 0 {
            return Ok(());
        }
        let reserve = stranded_payout_reserve();
        self.debit(payer_id, reserve)?;
        self.reserved_payout_rent = self
            .reserved_payout_rent
            .checked_add(reserve)
            .ok_or(MarketplaceError::Overflow)?;

        let _ = ext_ft::ext(asset_id.clone())
            .with_attached_deposit(ONE_YOCTO)
            .with_static_gas(self.config.ft_call_gas())
            .ft_transfer(receiver_id.clone(), U128(amount), Some(PAYOUT_MEMO.to_string()))
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(self.config.callback_gas())
                    .on_asset_payout(
                        asset_id.clone(),
                        receiver_id.clone(),
                        U128(amount),
                        payer_id.clone(),
                        U128(reserve),
                    ),
            );
        Ok(())
    }

    fn release_payout_reserve(
        &mut self,
        payer_id: &AccountId,
        reserve: u128,
    ) -> Result<(), MarketplaceError> {
        let held = self.reserved_payout_rent;
        self.reserved_payout_rent = held.checked_sub(reserve).ok_or_else(|| {
            MarketplaceError::InternalError(format!(
                "payout reserve of {reserve} exceeds the {held} held"
            ))
        })?;
        self.credit(payer_id, reserve).map(|_| ())
    }

    /// Returns the reserve to the payer. A failed payout is recorded so the receiver can
    /// retry it, and the payer is charged the record's actual rent.
    pub(crate) fn internal_resolve_asset_payout(
        &mut self,
        asset_id: &AccountId,
        receiver_id: &AccountId,
        amount: u128,
        payer_id: &AccountId,
        reserve: u128,
        delivered: bool,
    ) -> Result<bool, MarketplaceError> {
        self.release_payout_reserve(payer_id, reserve)?;
        if delivered {
            return Ok(true);
        }

        let mut stranded = self
            .stranded_payouts
            .get(receiver_id)
            .cloned()
            .unwrap_or_default();
        match stranded.iter_mut().find(|payout| &payout.asset_id == asset_id) {
            Some(payout) => {
                payout.amount.0 = payout
                    .amount
                    .0
                    .checked_add(amount)
                    .ok_or(MarketplaceError::Overflow)?;
            }
            None => stranded.push(StrandedPayout {
                asset_id: asset_id.clone(),
                amount: U128(amount),
                rent_payer: payer_id.clone(),
            }),
        }
        self.with_rent(payer_id, |contract| {
            contract.stranded_payouts.insert(receiver_id.clone(), stranded);
        })?;

        env::log_str(&format!(
            "Payout of {amount} {asset_id} to {receiver_id} failed; held for retry"
        ));
        MarketplaceEvent::PayoutStranded {
            asset_id: asset_id.clone(),
            receiver_id: receiver_id.clone(),
            amount: U128(amount),
        }
        .emit();
        Ok(false)
    }

    pub(crate) fn internal_retry_stranded_payouts(
        &mut self,
        receiver_id: &AccountId,
        asset_id: &AccountId,
    ) -> Result<u128, MarketplaceError> {
        let mut stranded = self
            .stranded_payouts
            .get(receiver_id)
            .cloned()
            .ok_or(MarketplaceError::StrandedPayoutNotFound)?;
        let index = stranded
            .iter()
            .position(|payout| &payout.asset_id == asset_id)
            .ok_or(MarketplaceError::StrandedPayoutNotFound)?;
        let payout = stranded.swap_remove(index);
        // Released bytes go back to whoever paid for the record.
        self.with_rent(&payout.rent_payer, |contract| {
            if stranded.is_empty() {
                contract.stranded_payouts.remove(receiver_id);
            } else {
                contract.stranded_payouts.insert(receiver_id.clone(), stranded);
            }
        })?;

        self.pay_out_asset(asset_id, receiver_id, payout.amount.0, receiver_id)?;
        MarketplaceEvent::PayoutRetried {
            asset_id: asset_id.clone(),
            receiver_id: receiver_id.clone(),
            amount: payout.amount,
        }
        .emit();
        Ok(payout.amount.0)
    }
}

#[near]
impl Contract {
    #[private]
    #[handle_result]
    pub fn on_asset_payout(
        &mut self,
        asset_id: AccountId,
        receiver_id: AccountId,
        amount: U128,
        payer_id: AccountId,
        reserve: U128,
    ) -> Result<bool, MarketplaceError> {
        let delivered = env::promise_results_count() == 1
            && env::promise_result_checked(0, MAX_CALLBACK_RESULT_LEN).is_ok();
        self.internal_resolve_asset_payout(
            &asset_id,
            &receiver_id,
            amount.0,
            &payer_id,
            reserve.0,
            delivered,
        )
    }

    /// Re-sends the caller's stranded units of `asset_id`. The caller reserves the
    /// payout rent again.
    #[handle_result]
    pub fn retry_stranded_payouts(&mut self, asset_id: AccountId) -> Result<U128, MarketplaceError> {
        let receiver_id = env::predecessor_account_id();
        self.internal_retry_stranded_payouts(&receiver_id, &asset_id)
            .map(U128)
    }

    pub fn get_stranded_payouts(&self, account_id: AccountId) -> Vec<StrandedPayout> {
        self.stranded_payouts
            .get(&account_id)
            .cloned()
            .unwrap_or_default()
    }
}
