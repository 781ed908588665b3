use crate::*;

#[near]
impl Contract {
    pub fn get_sale(&self, seller_id: AccountId, asset_id: AccountId) -> Option<SaleView> {
        let sale_key = SaleKey::new(seller_id, asset_id);
        self.sales
            .get(&sale_key)
            .map(|sale| SaleView::new(&sale_key, sale))
    }
}
