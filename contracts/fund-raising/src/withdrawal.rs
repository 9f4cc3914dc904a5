use crate::events::{self, FundsWithdrawn};
use crate::storage;
use crate::transfer;
use crate::types::Error;
use soroban_sdk::{log, Address, Env};

/// Check both withdrawal guards. The time lock is evaluated before identity.
pub fn verify_withdrawal(env: &Env, caller: &Address) -> Result<Address, Error> {
    let current_time = env.ledger().timestamp();
    if current_time < storage::get_unlock_time(env) {
        return Err(Error::TooEarly);
    }

    let owner = storage::get_owner(env);
    if caller != &owner {
        return Err(Error::NotOwner);
    }

    Ok(owner)
}

/// Release the pool's whole balance to the owner and return the amount moved.
pub fn withdraw_funds(env: &Env, caller: Address) -> Result<i128, Error> {
    let owner = verify_withdrawal(env, &caller)?;

    let token = storage::get_native_token(env);
    let amount = transfer::pool_balance(env, &token);
    if amount > 0 {
        transfer::transfer_from_pool(env, &token, &owner, &amount);
    }
    log!(env, "withdraw: {} released to owner", amount);

    events::funds_withdrawn(
        env,
        FundsWithdrawn {
            owner,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );

    Ok(amount)
}
