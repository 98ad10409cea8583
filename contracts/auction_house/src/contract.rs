use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, Address, Env, Vec,
};

use crate::auction_house::AuctionHouseTrait;
use crate::controller::{bidding, settlement};
use crate::errors::ErrorCode;
use crate::events::AuctionEvents;
use crate::interfaces::ClaimLedgerClient;
use crate::msg::AuctionDataResponse;
use crate::storage::{
    get_auction, get_config, has_auction, remove_auction, save_auction, save_config, utils,
    Auction, Claim, Config,
};

contractmeta!(
    key = "Description",
    val = "Ascending price liquidation auctions settling a prioritized claim waterfall"
);

#[contract]
pub struct AuctionHouse;

#[contractimpl]
impl AuctionHouseTrait for AuctionHouse {
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
    ) {
        if utils::is_initialized(&env) {
            log!(
                &env,
                "Auction house: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }
        if liquidator_accounts.is_empty() {
            log!(
                &env,
                "Auction house: Initialize: at least one liquidator account must be able to open auctions"
            );
            panic_with_error!(&env, ErrorCode::LiquidatorAccountsEmpty);
        }
        if min_increment_numerator == 0 || min_increment_denominator == 0 {
            log!(
                &env,
                "Auction house: Initialize: minimum bid increment must be a positive fraction"
            );
            panic_with_error!(&env, ErrorCode::InvalidIncrement);
        }

        utils::set_initialized(&env);

        save_config(
            &env,
            Config {
                admin: admin.clone(),
                bid_token,
                claim_ledger,
                liquidator_accounts,
                time_buffer,
                min_increment_numerator,
                min_increment_denominator,
                grace_period,
                end_requires_reserve,
            },
        );

        AuctionEvents::initialize(&env, admin);
    }

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
    ) {
        sender.require_auth();

        let config = get_config(&env);
        utils::is_liquidator(&env, &config, &sender);

        if has_auction(&env, collateral_id) {
            log!(
                &env,
                "Auction house: Create auction: collateral {} already has a live auction",
                collateral_id
            );
            panic_with_error!(&env, ErrorCode::AuctionAlreadyExists);
        }
        if duration == 0 {
            log!(
                &env,
                "Auction house: Create auction: duration must be positive"
            );
            panic_with_error!(&env, ErrorCode::InvalidDuration);
        }
        if initiator_fee_denominator == 0 || initiator_fee_numerator > initiator_fee_denominator {
            log!(
                &env,
                "Auction house: Create auction: initiator fee must be a fraction of at most one"
            );
            panic_with_error!(&env, ErrorCode::InvalidFee);
        }

        let max_duration = expect_ok(&env, bidding::max_duration(&env, &config, duration));

        let auction = Auction {
            created_ts: env.ledger().timestamp(),
            first_bid_ts: 0,
            duration,
            max_duration,
            reserve_price,
            current_bid: 0,
            bidder: None,
            initiator,
            initiator_fee_numerator,
            initiator_fee_denominator,
            claims,
        };
        save_auction(&env, collateral_id, &auction);

        AuctionEvents::auction_created(&env, collateral_id, duration, reserve_price);
    }

    fn create_bid(env: Env, bidder: Address, collateral_id: u128, amount: i128) {
        bidder.require_auth();

        let config = get_config(&env);
        let mut auction = get_auction(&env, collateral_id);
        let now = env.ledger().timestamp();

        if auction.first_bid_ts != 0 {
            let deadline = expect_ok(&env, bidding::deadline(&env, &auction));
            if now >= deadline {
                log!(
                    &env,
                    "Auction house: Create bid: bidding closed at {}",
                    deadline
                );
                panic_with_error!(&env, ErrorCode::AuctionExpired);
            }
        }

        let min_bid = expect_ok(&env, bidding::min_next_bid(&env, &config, auction.current_bid));
        if amount < min_bid || amount <= auction.current_bid {
            log!(
                &env,
                "Auction house: Create bid: bid of {} is below the minimum of {}",
                amount,
                min_bid
            );
            panic_with_error!(&env, ErrorCode::BidTooLow);
        }

        let delta = amount - auction.current_bid;
        let first_bid = auction.first_bid_ts == 0;
        if first_bid {
            auction.first_bid_ts = now;
        } else if let Some(prev_bidder) = auction.bidder.clone() {
            // The outbid bidder gets exactly their old bid back, funded by
            // the incoming transfer; the contract never holds float.
            utils::transfer_token(
                &env,
                &config.bid_token,
                &bidder,
                &prev_bidder,
                auction.current_bid,
            );
        }

        expect_ok(
            &env,
            settlement::handle_incoming_payment(
                &env,
                &config,
                collateral_id,
                &mut auction,
                &bidder,
                delta,
            ),
        );

        auction.current_bid = amount;
        auction.bidder = Some(bidder.clone());

        let extended = match expect_ok(
            &env,
            bidding::extend_duration(&env, &config, &auction, now),
        ) {
            Some(new_duration) => {
                auction.duration = new_duration;
                true
            }
            None => false,
        };

        save_auction(&env, collateral_id, &auction);

        AuctionEvents::auction_bid(&env, collateral_id, bidder, amount, first_bid, extended);
        if extended {
            AuctionEvents::auction_duration_extended(&env, collateral_id, auction.duration);
        }
    }

    fn end_auction(env: Env, sender: Address, collateral_id: u128) -> Address {
        sender.require_auth();

        let config = get_config(&env);
        utils::is_liquidator(&env, &config, &sender);

        let auction = get_auction(&env, collateral_id);
        let now = env.ledger().timestamp();

        let deadline = expect_ok(&env, bidding::deadline(&env, &auction));
        if now < deadline {
            log!(
                &env,
                "Auction house: End auction: bidding runs until {}",
                deadline
            );
            panic_with_error!(&env, ErrorCode::AuctionNotComplete);
        }
        if config.end_requires_reserve
            && auction.current_bid != 0
            && auction.current_bid < auction.reserve_price
        {
            log!(
                &env,
                "Auction house: End auction: winning bid of {} is below the reserve of {}",
                auction.current_bid,
                auction.reserve_price
            );
            panic_with_error!(&env, ErrorCode::ReserveNotMet);
        }

        let winner = match auction.bidder.clone() {
            Some(bidder) => bidder,
            None => auction.initiator.clone(),
        };

        remove_auction(&env, collateral_id);

        // claims the winning bid did not cover are written off by the ledger
        let ledger = ClaimLedgerClient::new(&env, &config.claim_ledger);
        ledger.flush_claims(&collateral_id);

        AuctionEvents::auction_ended(&env, collateral_id, winner.clone(), auction.current_bid);

        winner
    }

    fn cancel_auction(env: Env, sender: Address, collateral_id: u128, canceled_by: Address) {
        sender.require_auth();
        canceled_by.require_auth();

        let config = get_config(&env);
        utils::is_liquidator(&env, &config, &sender);

        let mut auction = get_auction(&env, collateral_id);

        if auction.current_bid >= auction.reserve_price {
            log!(
                &env,
                "Auction house: Cancel auction: reserve of {} already met",
                auction.reserve_price
            );
            panic_with_error!(&env, ErrorCode::ReserveAlreadyMet);
        }

        if let Some(prev_bidder) = auction.bidder.clone() {
            utils::transfer_token(
                &env,
                &config.bid_token,
                &canceled_by,
                &prev_bidder,
                auction.current_bid,
            );
        }

        // settle the claims as though the reserve price had been bid
        let reserve_price = auction.reserve_price;
        expect_ok(
            &env,
            settlement::handle_incoming_payment(
                &env,
                &config,
                collateral_id,
                &mut auction,
                &canceled_by,
                reserve_price,
            ),
        );

        remove_auction(&env, collateral_id);

        AuctionEvents::auction_canceled(&env, collateral_id);
    }

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
    ) {
        sender.require_auth();

        let mut config = get_config(&env);
        utils::is_admin(&env, &config, &sender);

        if let Some(new_admin) = new_admin {
            config.admin = new_admin;
        }
        if let Some(claim_ledger) = claim_ledger {
            config.claim_ledger = claim_ledger;
        }
        if let Some(time_buffer) = time_buffer {
            config.time_buffer = time_buffer;
        }
        if let Some(numerator) = min_increment_numerator {
            if numerator == 0 {
                log!(
                    &env,
                    "Auction house: Update config: minimum bid increment must be a positive fraction"
                );
                panic_with_error!(&env, ErrorCode::InvalidIncrement);
            }
            config.min_increment_numerator = numerator;
        }
        if let Some(denominator) = min_increment_denominator {
            if denominator == 0 {
                log!(
                    &env,
                    "Auction house: Update config: minimum bid increment must be a positive fraction"
                );
                panic_with_error!(&env, ErrorCode::InvalidIncrement);
            }
            config.min_increment_denominator = denominator;
        }
        if let Some(grace_period) = grace_period {
            config.grace_period = grace_period;
        }
        if let Some(end_requires_reserve) = end_requires_reserve {
            config.end_requires_reserve = end_requires_reserve;
        }

        save_config(&env, config);
    }

    fn update_liquidator_accounts(
        env: Env,
        sender: Address,
        to_add: Vec<Address>,
        to_remove: Vec<Address>,
    ) {
        sender.require_auth();

        let config = get_config(&env);
        utils::is_admin(&env, &config, &sender);

        let mut liquidator_accounts = config.liquidator_accounts.clone();

        to_add.into_iter().for_each(|addr| {
            if !liquidator_accounts.contains(&addr) {
                liquidator_accounts.push_back(addr);
            }
        });

        to_remove.into_iter().for_each(|addr| {
            if let Some(id) = liquidator_accounts.iter().position(|x| x == addr) {
                liquidator_accounts.remove(id as u32);
            }
        });

        save_config(
            &env,
            Config {
                liquidator_accounts,
                ..config
            },
        )
    }

    fn auction_exists(env: Env, collateral_id: u128) -> bool {
        has_auction(&env, collateral_id)
    }

    fn get_auction_data(env: Env, collateral_id: u128) -> AuctionDataResponse {
        let auction = get_auction(&env, collateral_id);
        AuctionDataResponse {
            current_bid: auction.current_bid,
            duration: auction.duration,
            first_bid_ts: auction.first_bid_ts,
            reserve_price: auction.reserve_price,
            bidder: auction.bidder,
        }
    }

    fn query_config(env: Env) -> Config {
        get_config(&env)
    }

    fn query_admin(env: Env) -> Address {
        get_config(&env).admin
    }
}

fn expect_ok<T>(env: &Env, result: Result<T, ErrorCode>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic_with_error!(env, err),
    }
}
