use soroban_sdk::{Address, Env, Vec};

use crate::msg::AuctionDataResponse;
use crate::storage::{Claim, Config};

pub trait AuctionHouseTrait {
    /// Set up the auction house. Can only be called once.
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        admin: Address,
        bid_token: Address,
        claim_ledger: Address,
        liquidator_accounts: Vec<Address>,
        time_buffer: u64,
        min_increment_numerator: u32,
        min_increment_denominator: u32,
        grace_period: u64,
        end_requires_reserve: bool,
    );

    /// Open an ascending-price auction on a seized collateral asset.
    /// Privileged; no payment moves here.
    #[allow(clippy::too_many_arguments)]
    fn create_auction(
        env: Env,
        sender: Address,
        collateral_id: u128,
        duration: u64,
        initiator: Address,
        initiator_fee_numerator: u32,
        initiator_fee_denominator: u32,
        reserve_price: i128,
        claims: Vec<Claim>,
    );

    /// Place a bid. The bidder funds the outbid refund and the waterfall
    /// payment in one transfer; a bid inside the soft-close window extends
    /// the auction up to its maximum duration.
    fn create_bid(env: Env, bidder: Address, collateral_id: u128, amount: i128);

    /// Settle an expired auction to its winner (the initiator when no bid
    /// was ever placed) and erase the record. Privileged.
    fn end_auction(env: Env, sender: Address, collateral_id: u128) -> Address;

    /// Cancel an auction whose reserve was never met: the current bidder
    /// is made whole and `canceled_by` pays the reserve price through the
    /// waterfall. Privileged.
    fn cancel_auction(env: Env, sender: Address, collateral_id: u128, canceled_by: Address);

    #[allow(clippy::too_many_arguments)]
    fn update_config(
        env: Env,
        sender: Address,
        new_admin: Option<Address>,
        claim_ledger: Option<Address>,
        time_buffer: Option<u64>,
        min_increment_numerator: Option<u32>,
        min_increment_denominator: Option<u32>,
        grace_period: Option<u64>,
        end_requires_reserve: Option<bool>,
    );

    fn update_liquidator_accounts(
        env: Env,
        sender: Address,
        to_add: Vec<Address>,
        to_remove: Vec<Address>,
    );

    fn auction_exists(env: Env, collateral_id: u128) -> bool;

    fn get_auction_data(env: Env, collateral_id: u128) -> AuctionDataResponse;

    fn query_config(env: Env) -> Config;

    fn query_admin(env: Env) -> Address;
}
