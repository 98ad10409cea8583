use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    NotAuthorized = 2,
    AuctionAlreadyExists = 3,
    AuctionNotFound = 4,
    AuctionExpired = 5,
    BidTooLow = 6,
    AuctionNotComplete = 7,
    ReserveAlreadyMet = 8,
    ReserveNotMet = 9,
    ZeroPayment = 10,
    TransferFailed = 11,
    InvalidFee = 12,
    InvalidDuration = 13,
    InvalidIncrement = 14,
    LiquidatorAccountsEmpty = 15,
    MathError = 16,
}

impl From<cascade::error::ErrorCode> for ErrorCode {
    fn from(_: cascade::error::ErrorCode) -> Self {
        ErrorCode::MathError
    }
}
