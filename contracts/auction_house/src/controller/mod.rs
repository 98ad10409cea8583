pub mod bidding;
pub mod settlement;
