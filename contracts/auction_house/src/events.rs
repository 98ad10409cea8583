use soroban_sdk::{Address, Env, Symbol};

pub struct AuctionEvents {}

impl AuctionEvents {
    /// Emitted when the auction house is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - ()
    pub fn initialize(env: &Env, admin: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, ());
    }

    /// Emitted when a liquidation auction is opened on a collateral asset
    ///
    /// - topics - `["auction_created", collateral_id: u128]`
    /// - data - `[duration: u64, reserve_price: i128]`
    pub fn auction_created(env: &Env, collateral_id: u128, duration: u64, reserve_price: i128) {
        let topics = (Symbol::new(env, "auction_created"), collateral_id);
        env.events().publish(topics, (duration, reserve_price));
    }

    /// Emitted on every accepted bid
    ///
    /// - topics - `["auction_bid", collateral_id: u128, bidder: Address]`
    /// - data - `[amount: i128, first_bid: bool, extended: bool]`
    pub fn auction_bid(
        env: &Env,
        collateral_id: u128,
        bidder: Address,
        amount: i128,
        first_bid: bool,
        extended: bool,
    ) {
        let topics = (Symbol::new(env, "auction_bid"), collateral_id, bidder);
        env.events().publish(topics, (amount, first_bid, extended));
    }

    /// Emitted when a soft-close bid pushed the deadline out
    ///
    /// - topics - `["auction_duration_extended", collateral_id: u128]`
    /// - data - `[new_duration: u64]`
    pub fn auction_duration_extended(env: &Env, collateral_id: u128, new_duration: u64) {
        let topics = (Symbol::new(env, "auction_duration_extended"), collateral_id);
        env.events().publish(topics, new_duration);
    }

    /// Emitted when an auction settles to a winner (the initiator on the
    /// no-bid path)
    ///
    /// - topics - `["auction_ended", collateral_id: u128]`
    /// - data - `[winner: Address, winning_bid: i128]`
    pub fn auction_ended(env: &Env, collateral_id: u128, winner: Address, winning_bid: i128) {
        let topics = (Symbol::new(env, "auction_ended"), collateral_id);
        env.events().publish(topics, (winner, winning_bid));
    }

    /// Emitted when an under-reserve auction is canceled
    ///
    /// - topics - `["auction_canceled", collateral_id: u128]`
    /// - data - ()
    pub fn auction_canceled(env: &Env, collateral_id: u128) {
        let topics = (Symbol::new(env, "auction_canceled"), collateral_id);
        env.events().publish(topics, ());
    }
}
