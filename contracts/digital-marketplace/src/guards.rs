use crate::*;

pub(crate) fn check_one_yocto() -> Result<(), MarketplaceError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(MarketplaceError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_contract_owner(
        &self,
        actor_id: &AccountId,
    ) -> Result<(), MarketplaceError> {
        if actor_id != &self.owner_id {
            return Err(MarketplaceError::Unauthorized(
                "Only the contract owner can perform this action".into(),
            ));
        }
        Ok(())
    }
}
