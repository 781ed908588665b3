use crate::*;

#[near]
impl Contract {
    /// NEP-141 receiver. The only accepted `msg` opens a sale:
    /// `{"open_sale":{"price":"<yoctoNEAR>"}}`. Returning an error makes the token
    /// contract refund the full amount to the sender.
    ///
    /// The seller is the `sender_id` the asset contract reports, so contract accounts
    /// can sell too. Only sponsored assets reach a sale, which makes each sponsored
    /// asset contract trusted to report its senders truthfully.
    #[handle_result]
    pub fn ft_on_transfer(
        &mut self,
        sender_id: AccountId,
        amount: U128,
        msg: String,
    ) -> Result<U128, MarketplaceError> {
        let message: AssetMessage = near_sdk::serde_json::from_str(&msg)
            .map_err(|e| MarketplaceError::InvalidInput(format!("Unrecognized msg: {e}")))?;
        let deposit = AssetDeposit {
            asset_id: env::predecessor_account_id(),
            sender_id: sender_id.clone(),
            receiver_id: env::current_account_id(),
            amount: amount.0,
        };
        match message {
            AssetMessage::OpenSale { price } => {
                self.internal_open_sale(&sender_id, &deposit, price.0)?;
            }
        }
        Ok(U128(0))
    }
}
