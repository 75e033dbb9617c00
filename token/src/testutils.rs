#![cfg(test)]

use crate::{Token, TokenArgs, TokenClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};
use stellar_tokens::fungible::FungibleTokenError;

pub(crate) const INITIAL_SUPPLY: u128 = 1_000_000_000_000_000_000_000;

// The constructor requires the owner's auth, so callers mock it before deploying.
pub fn create_token<'a>(e: &Env, owner: &Address, initial_supply: u128) -> TokenClient<'a> {
    TokenClient::new(
        e,
        &e.register(Token {}, TokenArgs::__constructor(owner, &initial_supply)),
    )
}

pub fn token_error(error: FungibleTokenError) -> soroban_sdk::Error {
    soroban_sdk::Error::from_contract_error(error as u32)
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) owner: Address,
    pub(crate) token: TokenClient<'a>,
}

impl Default for Setup<'_> {
    // Deploy the token with the default supply credited to a fresh owner
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths_allowing_non_root_auth();
        env.cost_estimate().budget().reset_unlimited();

        let owner = Address::generate(&env);
        let token = create_token(&env, &owner, INITIAL_SUPPLY);
        Setup { env, owner, token }
    }
}
