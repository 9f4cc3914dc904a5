#![no_std]
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String, Vec};

mod events;
mod funding;
mod storage;
mod transfer;
mod types;
mod withdrawal;

pub use events::{FundsWithdrawn, NewFundMessage, PoolCreated};
pub use types::*;

#[contract]
pub struct FundRaising;

#[contractimpl]
impl FundRaising {
    /// Deploy the pool. `owner` is the only account that can ever withdraw,
    /// and only once the ledger reaches `unlock_time`.
    pub fn __constructor(
        env: Env,
        owner: Address,
        unlock_time: u64,
        funding_purpose: String,
        native_token: Address,
    ) {
        owner.require_auth();
        if unlock_time <= env.ledger().timestamp() {
            panic_with_error!(&env, Error::InvalidSchedule);
        }

        storage::set_pool(&env, &owner, unlock_time, &funding_purpose, &native_token);
        storage::set_fund_message_count(&env, 0);

        events::pool_created(
            &env,
            PoolCreated {
                owner,
                unlock_time,
                funding_purpose,
            },
        );
    }

    /// Contribute `amount` of the native token and leave a message.
    pub fn fund(
        env: Env,
        funder: Address,
        name: String,
        message: String,
        amount: i128,
    ) -> Result<(), Error> {
        funder.require_auth();
        funding::fund(&env, funder, name, message, amount)
    }

    /// Send the entire balance to the owner once unlocked.
    pub fn withdraw_funds(env: Env, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        withdrawal::withdraw_funds(&env, caller)
    }

    /// All contribution records in the order they were made
    pub fn get_fund_messages(env: Env) -> Vec<FundMessage> {
        funding::get_fund_messages(&env)
    }

    /// Number of contributions recorded so far
    pub fn fund_message_count(env: Env) -> u32 {
        funding::fund_message_count(&env)
    }

    /// Account that deployed the pool and receives the withdrawal
    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    /// Ledger timestamp from which `withdraw_funds` is allowed
    pub fn unlock_time(env: Env) -> u64 {
        storage::get_unlock_time(&env)
    }

    /// What the pool is raising money for
    pub fn funding_purpose(env: Env) -> String {
        storage::get_funding_purpose(&env)
    }

    /// Asset contract the pool accepts and pays out
    pub fn native_token(env: Env) -> Address {
        storage::get_native_token(&env)
    }

    /// Current pool holdings in the native token
    pub fn balance(env: Env) -> i128 {
        let token = storage::get_native_token(&env);
        transfer::pool_balance(&env, &token)
    }
}
