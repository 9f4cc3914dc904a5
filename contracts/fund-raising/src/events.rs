use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

// Symbol representing withdrawal events.
pub const WITHDRAWN: Symbol = symbol_short!("withdrawn");

/// Topic of the per-contribution notification.
pub fn new_fund_message_topic(env: &Env) -> Symbol {
    Symbol::new(env, "NewFundMessage")
}

/// Topic of the deployment notification.
pub fn pool_created_topic(env: &Env) -> Symbol {
    Symbol::new(env, "PoolCreated")
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolCreated {
    pub owner: Address,
    pub unlock_time: u64,
    pub funding_purpose: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewFundMessage {
    pub from: Address,
    pub timestamp: u64,
    pub name: String,
    pub message: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub owner: Address,
    pub amount: i128,
    pub timestamp: u64,
}

pub fn pool_created(env: &Env, event: PoolCreated) {
    env.events().publish((pool_created_topic(env),), event);
}

pub fn new_fund_message(env: &Env, event: NewFundMessage) {
    env.events().publish((new_fund_message_topic(env),), event);
}

pub fn funds_withdrawn(env: &Env, event: FundsWithdrawn) {
    env.events().publish((WITHDRAWN,), event);
}
