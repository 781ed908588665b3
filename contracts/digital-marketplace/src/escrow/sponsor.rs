use crate::external::{StorageBalance, ext_ft};
use crate::*;

impl Contract {
    /// Registers the marketplace with `asset_id` at the sponsor's expense.
    pub(crate) fn internal_sponsor_asset(
        &mut self,
        sponsor_id: &AccountId,
        asset_id: &AccountId,
    ) -> Result<u128, MarketplaceError> {
        if self.sponsored_assets.contains(asset_id) {
            return Err(MarketplaceError::AlreadyOptedIn);
        }
        if self.clawback_assets.contains(asset_id) {
            return Err(MarketplaceError::ClawbackAsset);
        }
        let cost = self.config.asset_registration_cost.0;
        self.check_escrow_covers(sponsor_id, cost)?;

        self.with_rent(sponsor_id, |contract| {
            contract.sponsored_assets.insert(asset_id.clone());
        })?;
        self.debit(sponsor_id, cost)?;
        Ok(cost)
    }

    fn schedule_registration_check(&self, sponsor_id: &AccountId, asset_id: &AccountId, cost: u128) {
        let _ = ext_ft::ext(asset_id.clone())
            .with_static_gas(self.config.ft_call_gas())
            .storage_balance_of(env::current_account_id())
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(self.config.chained_callback_gas())
                    .on_asset_registration_checked(asset_id.clone(), sponsor_id.clone(), U128(cost)),
            );
    }

    fn schedule_asset_registration(&self, sponsor_id: &AccountId, asset_id: &AccountId, cost: u128) {
        let _ = ext_ft::ext(asset_id.clone())
            .with_attached_deposit(NearToken::from_yoctonear(cost))
            .with_static_gas(self.config.ft_call_gas())
            .storage_deposit(Some(env::current_account_id()), Some(true))
            .then(
                Self::ext(env::current_account_id())
                    .with_static_gas(self.config.callback_gas())
                    .on_asset_sponsored(asset_id.clone(), sponsor_id.clone(), U128(cost)),
            );
    }

    /// `already_registered` is `None` when the lookup itself failed.
    /// An existing registration costs nothing, so the whole cost goes back to the sponsor.
    pub(crate) fn internal_resolve_registration_check(
        &mut self,
        asset_id: &AccountId,
        sponsor_id: &AccountId,
        cost: u128,
        already_registered: Option<bool>,
    ) -> Result<(), MarketplaceError> {
        match already_registered {
            Some(false) => {
                self.schedule_asset_registration(sponsor_id, asset_id, cost);
                Ok(())
            }
            Some(true) => self
                .internal_resolve_asset_sponsor(asset_id, sponsor_id, cost, Some(0))
                .map(|_| ()),
            None => self
                .internal_resolve_asset_sponsor(asset_id, sponsor_id, cost, None)
                .map(|_| ()),
        }
    }

    /// Confirms a registration, or unwinds it and refunds the sponsor.
    /// `charged` is what the asset kept of `cost`; `None` means registration failed.
    pub(crate) fn internal_resolve_asset_sponsor(
        &mut self,
        asset_id: &AccountId,
        sponsor_id: &AccountId,
        cost: u128,
        charged: Option<u128>,
    ) -> Result<bool, MarketplaceError> {
        if let Some(charged) = charged {
            let charged = charged.min(cost);
            self.credit(sponsor_id, cost - charged)?;
            MarketplaceEvent::AssetSponsored {
                asset_id: asset_id.clone(),
                sponsor_id: sponsor_id.clone(),
                cost: U128(charged),
            }
            .emit();
            return Ok(true);
        }

        let (_, delta) = self.measure_rent(|contract| {
            contract.sponsored_assets.remove(asset_id);
        });
        let refund = cost
            .checked_add(delta.refund())
            .ok_or(MarketplaceError::Overflow)?;
        self.credit(sponsor_id, refund)?;

        MarketplaceEvent::AssetSponsorFailed {
            asset_id: asset_id.clone(),
            sponsor_id: sponsor_id.clone(),
            refund: U128(refund),
        }
        .emit();
        Ok(false)
    }
}

#[near]
impl Contract {
    #[handle_result]
    pub fn sponsor_asset(&mut self, asset_id: AccountId) -> Result<(), MarketplaceError> {
        let sponsor_id = env::predecessor_account_id();
        let cost = self.internal_sponsor_asset(&sponsor_id, &asset_id)?;
        self.schedule_registration_check(&sponsor_id, &asset_id, cost);
        Ok(())
    }

    #[private]
    #[handle_result]
    pub fn on_asset_registration_checked(
        &mut self,
        asset_id: AccountId,
        sponsor_id: AccountId,
        cost: U128,
    ) -> Result<(), MarketplaceError> {
        let already_registered = if env::promise_results_count() == 1 {
            match env::promise_result_checked(0, MAX_CALLBACK_RESULT_LEN) {
                Ok(value) => near_sdk::serde_json::from_slice::<Option<StorageBalance>>(&value)
                    .ok()
                    .map(|balance| balance.is_some()),
                Err(_) => None,
            }
        } else {
            None
        };
        self.internal_resolve_registration_check(&asset_id, &sponsor_id, cost.0, already_registered)
    }

    #[private]
    #[handle_result]
    pub fn on_asset_sponsored(
        &mut self,
        asset_id: AccountId,
        sponsor_id: AccountId,
        cost: U128,
    ) -> Result<bool, MarketplaceError> {
        // NEP-145 refunds whatever exceeds the storage it kept; the returned total is that amount.
        let charged = if env::promise_results_count() == 1 {
            match env::promise_result_checked(0, MAX_CALLBACK_RESULT_LEN) {
                Ok(value) => Some(
                    near_sdk::serde_json::from_slice::<StorageBalance>(&value)
                        .map_or(cost.0, |balance| balance.total.0),
                ),
                Err(_) => None,
            }
        } else {
            None
        };
        self.internal_resolve_asset_sponsor(&asset_id, &sponsor_id, cost.0, charged)
    }
}
