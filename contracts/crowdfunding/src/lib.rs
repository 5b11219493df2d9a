#![no_std]

//! # Crowdfunding Contract
//!
//! Soroban contract hosting a registry of independent fundraising campaigns.
//!
//! A creator calls [`Crowdfunding::start`] with a goal and a deadline and gets
//! back a sequential campaign ID. Until the deadline anyone may
//! [`pledge`](Crowdfunding::pledge) tokens to the campaign and take any part
//! of their own pledge back with [`refund_pledge`](Crowdfunding::refund_pledge).
//! Once the deadline passes the outcome is fixed:
//!
//! - **goal met** — the owner calls [`claim`](Crowdfunding::claim) once and
//!   receives the whole pot; pledges can no longer be withdrawn.
//! - **goal missed** — each pledger calls
//!   [`full_refund`](Crowdfunding::full_refund) to get their pledge back; the
//!   owner can never claim.
//!
//! All campaigns share the single token configured at initialization.
//!
//! ## Modules
//!
//! - [`registry`] — configuration, campaign creation and lookup.
//! - [`campaign`] — pledge, refund and claim state machine.
//! - [`errors`]   — [`Error`] codes returned by every fallible entry point.
//! - [`types`]    — [`Campaign`], [`CampaignStatus`], [`Config`] and storage keys.

mod campaign;
mod errors;
mod events;
mod registry;
mod storage;
mod transfer;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, Address, Env};

pub use crate::errors::Error;
pub use crate::types::{Campaign, CampaignStatus, Config, DEFAULT_MAX_DURATION};

#[contract]
pub struct Crowdfunding;

#[contractimpl]
impl Crowdfunding {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the registry.
    ///
    /// # Arguments
    /// * `admin` - Address allowed to change the maximum campaign duration
    /// * `token` - Token every campaign collects and pays out
    /// * `max_duration` - Longest campaign in seconds, `None` for 30 days
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    /// * `Error::InvalidParameters` - If `max_duration` is zero
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        max_duration: Option<u64>,
    ) -> Result<(), Error> {
        registry::initialize(&env, admin, token, max_duration)
    }

    /// Get registry configuration
    pub fn get_config(env: Env) -> Result<Config, Error> {
        registry::config(&env)
    }

    /// Update the maximum campaign duration (admin only). Existing campaigns
    /// keep their deadline.
    pub fn set_max_duration(env: Env, admin: Address, max_duration: u64) -> Result<(), Error> {
        registry::set_max_duration(&env, admin, max_duration)
    }

    // ========================================================================
    // REGISTRY
    // ========================================================================

    /// Start a new campaign owned by `creator`.
    ///
    /// # Errors
    /// * `Error::InvalidParameters` - If `goal` is not positive, `ends_at` is
    ///   not in the future, or `ends_at` is further away than the maximum duration
    pub fn start(env: Env, creator: Address, goal: i128, ends_at: u64) -> Result<u64, Error> {
        registry::start(&env, creator, goal, ends_at)
    }

    /// Look up a campaign by ID.
    pub fn campaigns(env: Env, id: u64) -> Result<Campaign, Error> {
        registry::campaign(&env, id)
    }

    /// Number of campaigns created so far. Also the ID of the latest one.
    pub fn campaign_count(env: Env) -> u64 {
        registry::campaign_count(&env)
    }

    // ========================================================================
    // CAMPAIGN
    // ========================================================================

    /// Pledge `amount` tokens to an open campaign. Repeated pledges add up.
    ///
    /// # Errors
    /// * `Error::InvalidParameters` - If `amount` is not positive
    /// * `Error::WrongPhase` - If the deadline has passed
    /// * `Error::TransferFailure` - If the token transfer fails
    pub fn pledge(env: Env, id: u64, pledger: Address, amount: i128) -> Result<(), Error> {
        campaign::pledge(&env, id, pledger, amount)
    }

    /// Withdraw `amount` of the caller's pledge before the deadline.
    ///
    /// # Errors
    /// * `Error::WrongPhase` - If the deadline has passed
    /// * `Error::InsufficientBalance` - If `amount` exceeds the caller's pledge
    pub fn refund_pledge(env: Env, id: u64, pledger: Address, amount: i128) -> Result<(), Error> {
        campaign::refund_pledge(&env, id, pledger, amount)
    }

    /// Reclaim the caller's whole pledge after a campaign missed its goal.
    /// Returns the refunded amount.
    ///
    /// # Errors
    /// * `Error::WrongPhase` - Before the deadline, or if the goal was met
    /// * `Error::InsufficientBalance` - If the caller has nothing pledged
    pub fn full_refund(env: Env, id: u64, pledger: Address) -> Result<i128, Error> {
        campaign::full_refund(&env, id, pledger)
    }

    /// Transfer the pot to the campaign owner. Returns the claimed amount.
    ///
    /// # Errors
    /// * `Error::Unauthorized` - If `caller` is not the owner
    /// * `Error::WrongPhase` - Before the deadline, if the goal was missed,
    ///   or if the campaign was already claimed
    pub fn claim(env: Env, id: u64, caller: Address) -> Result<i128, Error> {
        campaign::claim(&env, id, caller)
    }

    /// Outstanding pledge of `pledger`
    pub fn get_pledge(env: Env, id: u64, pledger: Address) -> Result<i128, Error> {
        campaign::pledge_of(&env, id, &pledger)
    }

    /// Current lifecycle phase of a campaign
    pub fn campaign_status(env: Env, id: u64) -> Result<CampaignStatus, Error> {
        campaign::status(&env, id)
    }

    /// Tokens the contract holds for a campaign
    pub fn campaign_balance(env: Env, id: u64) -> Result<i128, Error> {
        campaign::balance(&env, id)
    }
}
