use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionDataResponse {
    pub current_bid: i128,
    pub duration: u64,
    pub first_bid_ts: u64,
    pub reserve_price: i128,
    pub bidder: Option<Address>,
}
