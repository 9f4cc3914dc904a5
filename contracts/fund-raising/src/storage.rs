use soroban_sdk::{Address, Env, String, Vec};

use crate::types::{DataKey, FundMessage};

/// Bump amount for storage entries (roughly 30 days in ledgers).
const LEDGER_BUMP: u32 = 518_400;
/// Threshold for bumping (roughly 15 days).
const LEDGER_THRESHOLD: u32 = 259_200;

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD, LEDGER_BUMP);
}

// =============================================================================
// Pool settings (instance storage, written once by the constructor)
// =============================================================================

pub fn set_pool(
    env: &Env,
    owner: &Address,
    unlock_time: u64,
    funding_purpose: &String,
    native_token: &Address,
) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Owner, owner);
    instance.set(&DataKey::UnlockTime, &unlock_time);
    instance.set(&DataKey::FundingPurpose, funding_purpose);
    instance.set(&DataKey::NativeToken, native_token);
    bump_instance(env);
}

pub fn get_owner(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .expect("owner not set")
}

pub fn get_unlock_time(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::UnlockTime)
        .expect("unlock time not set")
}

pub fn get_funding_purpose(env: &Env) -> String {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::FundingPurpose)
        .expect("funding purpose not set")
}

pub fn get_native_token(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::NativeToken)
        .expect("native token not set")
}

// =============================================================================
// Fund messages (one persistent entry per record, count in instance storage)
// =============================================================================

pub fn set_fund_message_count(env: &Env, count: u32) {
    env.storage()
        .instance()
        .set(&DataKey::FundMessageCount, &count);
    bump_instance(env);
}

pub fn get_fund_message_count(env: &Env) -> u32 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::FundMessageCount)
        .unwrap_or(0)
}

pub fn get_fund_message(env: &Env, index: u32) -> Option<FundMessage> {
    let key = DataKey::FundMessage(index);
    let persistent = env.storage().persistent();
    let record = persistent.get(&key)?;
    persistent.extend_ttl(&key, LEDGER_THRESHOLD, LEDGER_BUMP);
    Some(record)
}

pub fn get_fund_messages(env: &Env) -> Vec<FundMessage> {
    let mut messages = Vec::new(env);
    for index in 0..get_fund_message_count(env) {
        if let Some(record) = get_fund_message(env, index) {
            messages.push_back(record);
        }
    }
    messages
}

/// Store `record` under the next free index and return the new count.
pub fn append_fund_message(env: &Env, record: &FundMessage) -> u32 {
    let index = get_fund_message_count(env);
    let key = DataKey::FundMessage(index);
    let persistent = env.storage().persistent();
    persistent.set(&key, record);
    persistent.extend_ttl(&key, LEDGER_THRESHOLD, LEDGER_BUMP);

    let count = index + 1;
    set_fund_message_count(env, count);
    count
}
