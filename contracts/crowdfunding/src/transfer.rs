//! Token movement in and out of the contract.
//!
//! Callers commit their ledger writes before calling into here. A failed
//! transfer surfaces as [`Error::TransferFailure`]; returning that error
//! from the entry point makes the host discard every write of the call.

use soroban_sdk::{token, Address, Env};

use crate::errors::Error;

/// Pull `amount` of `token` from `from` into the contract.
pub fn collect(e: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), Error> {
    let client = token::Client::new(e, token);
    match client.try_transfer(from, &e.current_contract_address(), &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailure),
    }
}

/// Pay `amount` of `token` from the contract to `to`.
pub fn pay_out(e: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let client = token::Client::new(e, token);
    match client.try_transfer(&e.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailure),
    }
}
