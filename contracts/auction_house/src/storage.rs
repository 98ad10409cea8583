use cascade::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, ONE_DAY, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use soroban_sdk::{contracttype, log, panic_with_error, Address, Env, Vec};

use crate::errors::ErrorCode;

pub const DEFAULT_TIME_BUFFER: u64 = 900;
pub const DEFAULT_MIN_INCREMENT_NUMERATOR: u32 = 5;
pub const DEFAULT_MIN_INCREMENT_DENOMINATOR: u32 = 100;
pub const DEFAULT_GRACE_PERIOD: u64 = ONE_DAY;

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Config,
    Initialized,
    Auction(u128),
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    /// SEP-41 asset every bid and payout is denominated in
    pub bid_token: Address,
    /// External contract tracking the claims against each collateral
    pub claim_ledger: Address,
    /// Accounts allowed to open, end and cancel auctions
    pub liquidator_accounts: Vec<Address>,
    /// Soft-close window in seconds
    pub time_buffer: u64,
    pub min_increment_numerator: u32,
    pub min_increment_denominator: u32,
    /// Added to the requested duration to form the extension cap
    pub grace_period: u64,
    /// When set, an expired auction whose highest bid is below the
    /// reserve cannot be ended and must be canceled instead.
    pub end_requires_reserve: bool,
}

impl Config {
    pub fn is_liquidator(&self, sender: &Address) -> bool {
        self.admin == *sender || self.liquidator_accounts.contains(sender)
    }
}

pub fn save_config(env: &Env, config: Config) {
    env.storage().persistent().set(&DataKey::Config, &config);
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .expect("Config not set");

    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    config
}

// ################################################################
//                             Auction
// ################################################################

/// A single outstanding claim against a collateral asset. The stack on the
/// auction record is ordered most-senior-first and consumed front to back.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Claim {
    pub claim_id: u64,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub created_ts: u64,
    /// 0 until the first valid bid lands
    pub first_bid_ts: u64,
    pub duration: u64,
    /// Hard cap the soft-close extension can never push `duration` past
    pub max_duration: u64,
    pub reserve_price: i128,
    pub current_bid: i128,
    pub bidder: Option<Address>,
    pub initiator: Address,
    pub initiator_fee_numerator: u32,
    pub initiator_fee_denominator: u32,
    pub claims: Vec<Claim>,
}

impl Auction {
    /// Start of the bidding clock: the first bid when one exists,
    /// creation otherwise.
    pub fn start_ts(&self) -> u64 {
        if self.first_bid_ts != 0 {
            self.first_bid_ts
        } else {
            self.created_ts
        }
    }
}

/// Whether a live auction exists for the collateral. Existence is the
/// presence of the storage entry itself, never inferred from a data field.
pub fn has_auction(env: &Env, collateral_id: u128) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Auction(collateral_id))
}

pub fn save_auction(env: &Env, collateral_id: u128, auction: &Auction) {
    let key = DataKey::Auction(collateral_id);
    env.storage().persistent().set(&key, auction);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_auction(env: &Env, collateral_id: u128) -> Auction {
    let key = DataKey::Auction(collateral_id);
    match env.storage().persistent().get(&key) {
        Some(auction) => {
            env.storage().persistent().extend_ttl(
                &key,
                PERSISTENT_LIFETIME_THRESHOLD,
                PERSISTENT_BUMP_AMOUNT,
            );
            auction
        }
        None => {
            log!(
                env,
                "Auction house: no live auction for collateral {}",
                collateral_id
            );
            panic_with_error!(env, ErrorCode::AuctionNotFound);
        }
    }
}

pub fn remove_auction(env: &Env, collateral_id: u128) {
    env.storage()
        .persistent()
        .remove(&DataKey::Auction(collateral_id));
}

// ################################################################
//                             Utils
// ################################################################

pub mod utils {
    use soroban_sdk::token;

    use super::*;

    /// Move `amount` of the settlement asset between two parties. A zero
    /// amount is a no-op; a failed transfer aborts the whole invocation.
    pub fn transfer_token(env: &Env, asset: &Address, from: &Address, to: &Address, amount: i128) {
        if amount == 0 {
            return;
        }
        let token_client = token::Client::new(env, asset);
        if token_client.try_transfer(from, to, &amount).is_err() {
            log!(env, "Auction house: transfer of {} failed", amount);
            panic_with_error!(env, ErrorCode::TransferFailed);
        }
    }

    pub fn is_admin(env: &Env, config: &Config, sender: &Address) {
        if config.admin != *sender {
            log!(env, "Auction house: You are not authorized!");
            panic_with_error!(env, ErrorCode::NotAuthorized);
        }
    }

    pub fn is_liquidator(env: &Env, config: &Config, sender: &Address) {
        if !config.is_liquidator(sender) {
            log!(env, "Auction house: You are not authorized!");
            panic_with_error!(env, ErrorCode::NotAuthorized);
        }
    }

    pub fn is_initialized(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Initialized)
            .unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }
}
