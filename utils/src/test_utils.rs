#![cfg(any(test, feature = "testutils"))]

use soroban_sdk::testutils::Ledger;
use soroban_sdk::Env;

pub fn jump_sequence(e: &Env, sequence: u32) {
    e.ledger().with_mut(|li| {
        li.sequence_number = li.sequence_number.saturating_add(sequence);
    });
}
