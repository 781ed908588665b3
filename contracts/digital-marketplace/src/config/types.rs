use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketplaceConfig {
    /// Attached to `storage_deposit` when sponsoring an asset; debited from the sponsor.
    pub asset_registration_cost: U128,
    pub ft_call_gas_tgas: u64,
    pub callback_gas_tgas: u64,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            asset_registration_cost: U128(DEFAULT_ASSET_REGISTRATION_COST),
            ft_call_gas_tgas: DEFAULT_FT_CALL_GAS_TGAS,
            callback_gas_tgas: DEFAULT_CALLBACK_GAS_TGAS,
        }
    }
}

impl MarketplaceConfig {
    pub fn validate_patch(&self, patch: &MarketplaceConfigUpdate) -> Result<(), MarketplaceError> {
        let cost = patch
            .asset_registration_cost
            .unwrap_or(self.asset_registration_cost);
        let ft_gas = patch.ft_call_gas_tgas.unwrap_or(self.ft_call_gas_tgas);
        let callback_gas = patch.callback_gas_tgas.unwrap_or(self.callback_gas_tgas);

        if cost.0 == 0 {
            return Err(MarketplaceError::InvalidInput(
                "asset_registration_cost must be positive".into(),
            ));
        }
        for (name, tgas) in [("ft_call_gas_tgas", ft_gas), ("callback_gas_tgas", callback_gas)] {
            if !(MIN_GAS_TGAS..=MAX_GAS_TGAS).contains(&tgas) {
                return Err(MarketplaceError::InvalidInput(format!(
                    "{name} must be {MIN_GAS_TGAS}..={MAX_GAS_TGAS}"
                )));
            }
        }
        Ok(())
    }

    pub fn apply_patch(&mut self, patch: &MarketplaceConfigUpdate) {
        if let Some(v) = patch.asset_registration_cost {
            self.asset_registration_cost = v;
        }
        if let Some(v) = patch.ft_call_gas_tgas {
            self.ft_call_gas_tgas = v;
        }
        if let Some(v) = patch.callback_gas_tgas {
            self.callback_gas_tgas = v;
        }
    }

    pub(crate) fn ft_call_gas(&self) -> Gas {
        Gas::from_tgas(self.ft_call_gas_tgas)
    }

    pub(crate) fn callback_gas(&self) -> Gas {
        Gas::from_tgas(self.callback_gas_tgas)
    }

    /// Covers a callback that schedules an ft call followed by its own callback.
    pub(crate) fn chained_callback_gas(&self) -> Gas {
        Gas::from_tgas(self.ft_call_gas_tgas + 2 * self.callback_gas_tgas)
    }
}

#[near(serializers = [json])]
#[derive(Clone, Default)]
pub struct MarketplaceConfigUpdate {
    pub asset_registration_cost: Option<U128>,
    pub ft_call_gas_tgas: Option<u64>,
    pub callback_gas_tgas: Option<u64>,
}
