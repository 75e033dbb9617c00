#![no_std]

pub mod math_errors;
pub mod test_utils;
