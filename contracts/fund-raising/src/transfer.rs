use soroban_sdk::{token, Address, Env};

// Pull tokens from a funder into the pool
pub fn transfer_to_pool(env: &Env, token: &Address, from: &Address, amount: &i128) {
    token::Client::new(env, token).transfer(from, &env.current_contract_address(), amount);
}

// Pay tokens out of the pool
pub fn transfer_from_pool(env: &Env, token: &Address, to: &Address, amount: &i128) {
    token::Client::new(env, token).transfer(&env.current_contract_address(), to, amount);
}

// Current holdings of the pool
pub fn pool_balance(env: &Env, token: &Address) -> i128 {
    token::Client::new(env, token).balance(&env.current_contract_address())
}
