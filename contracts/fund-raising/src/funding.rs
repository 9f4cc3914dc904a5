use crate::events::{self, NewFundMessage};
use crate::storage;
use crate::transfer;
use crate::types::{Error, FundMessage};
use soroban_sdk::{log, Address, Env, String, Vec};

pub fn fund(
    env: &Env,
    funder: Address,
    name: String,
    message: String,
    amount: i128,
) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InsufficientContribution);
    }

    // Move the value before recording it
    let token = storage::get_native_token(env);
    transfer::transfer_to_pool(env, &token, &funder, &amount);

    let timestamp = env.ledger().timestamp();
    let record = FundMessage {
        from: funder,
        timestamp,
        name,
        message,
    };
    let count = storage::append_fund_message(env, &record);
    log!(env, "fund: {} added {}, {} messages", record.from, amount, count);

    events::new_fund_message(
        env,
        NewFundMessage {
            from: record.from,
            timestamp: record.timestamp,
            name: record.name,
            message: record.message,
        },
    );

    Ok(())
}

pub fn get_fund_messages(env: &Env) -> Vec<FundMessage> {
    storage::get_fund_messages(env)
}

pub fn fund_message_count(env: &Env) -> u32 {
    storage::get_fund_message_count(env)
}
