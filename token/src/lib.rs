#![no_std]

mod constants;
mod contract;
mod testutils;

pub use crate::contract::{Token, TokenArgs, TokenClient};
