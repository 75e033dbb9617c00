//! Fixed-supply token: the whole supply is minted to the owner at deployment.
//! Ledger logic comes from the OpenZeppelin fungible base; no mint or burn
//! entry point is exposed, so total supply never changes afterwards.
use crate::constants::{DECIMALS, NAME, SYMBOL};
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, String};
use stellar_macros::default_impl;
use stellar_tokens::fungible::{Base, FungibleToken};
use utils::math_errors::MathError;

#[contract]
pub struct Token;

#[contractimpl]
impl Token {
    pub fn __constructor(e: &Env, owner: Address, initial_supply: u128) {
        // the credited account has to sign the deployment
        owner.require_auth();

        let amount = match i128::try_from(initial_supply) {
            Ok(value) => value,
            Err(_) => panic_with_error!(e, MathError::NumberOverflow),
        };

        Base::set_metadata(
            e,
            DECIMALS,
            String::from_str(e, NAME),
            String::from_str(e, SYMBOL),
        );
        Base::mint(e, &owner, amount);

        log!(e, "initial supply minted", owner, amount);
    }
}

#[default_impl]
#[contractimpl]
impl FungibleToken for Token {
    type ContractType = Base;
}
