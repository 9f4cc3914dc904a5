use soroban_sdk::{contracterror, contracttype, Address, String};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,            // Address allowed to withdraw
    UnlockTime,       // Ledger timestamp after which withdrawal opens
    FundingPurpose,   // Description set at deployment
    NativeToken,      // Asset contract of the native currency
    FundMessageCount, // Number of recorded contributions
    FundMessage(u32), // Index -> FundMessage, append-only
}

/// One contribution as it was recorded by `fund`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundMessage {
    pub from: Address,
    pub timestamp: u64,
    pub name: String,
    pub message: String,
}

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidSchedule = 1,          // Unlock time is not in the future
    InsufficientContribution = 2, // Nothing attached to a fund call
    TooEarly = 3,                 // Unlock time not reached yet
    NotOwner = 4,                 // Caller is not the pool owner
}
