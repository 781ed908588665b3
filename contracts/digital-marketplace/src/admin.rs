use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId, config: Option<MarketplaceConfig>) -> Self {
        let config = config.unwrap_or_default();
        if let Err(e) = config.validate_patch(&MarketplaceConfigUpdate::default()) {
            env::panic_str(&e.to_string());
        }
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            config,
            deposited: LookupMap::new(StorageKey::Deposited),
            sales: LookupMap::new(StorageKey::Sales),
            receipt_book: LookupMap::new(StorageKey::ReceiptBook),
            sponsored_assets: IterableSet::new(StorageKey::SponsoredAssets),
            clawback_assets: IterableSet::new(StorageKey::ClawbackAssets),
            stranded_payouts: LookupMap::new(StorageKey::StrandedPayouts),
            reserved_payout_rent: 0,
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), MarketplaceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(MarketplaceError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = std::mem::replace(&mut self.owner_id, new_owner);
        MarketplaceEvent::OwnerTransferred {
            old_owner,
            new_owner: self.owner_id.clone(),
        }
        .emit();
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn update_config(&mut self, update: MarketplaceConfigUpdate) -> Result<(), MarketplaceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.config.validate_patch(&update)?;
        self.config.apply_patch(&update);
        MarketplaceEvent::ConfigUpdated {
            owner_id: self.owner_id.clone(),
        }
        .emit();
        Ok(())
    }

    /// Flags (or unflags) an asset contract that can seize or freeze balances.
    /// Flagged assets cannot be sponsored; existing sales are unaffected.
    #[payable]
    #[handle_result]
    pub fn set_clawback_asset(&mut self, asset_id: AccountId, flagged: bool) -> Result<(), MarketplaceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if flagged {
            self.clawback_assets.insert(asset_id.clone());
        } else {
            self.clawback_assets.remove(&asset_id);
        }
        MarketplaceEvent::ClawbackFlagSet { asset_id, flagged }.emit();
        Ok(())
    }

    pub fn is_clawback_asset(&self, asset_id: AccountId) -> bool {
        self.clawback_assets.contains(&asset_id)
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_config(&self) -> &MarketplaceConfig {
        &self.config
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }

    pub fn get_reserved_payout_rent(&self) -> U128 {
        U128(self.reserved_payout_rent)
    }
}
