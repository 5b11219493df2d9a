//! Per-campaign accounting.
//!
//! Each operation checks every precondition first, writes the updated
//! campaign and pledge entries, and only then moves tokens. The token call
//! is the last step, so a failed transfer returns an error with nothing
//! else left to undo, and any call made during the transfer already sees
//! the updated balances.

use soroban_sdk::{log, Address, Env};

use crate::errors::Error;
use crate::events::{ClaimedEventData, PledgedEventData, RefundedEventData, UnpledgedEventData};
use crate::registry;
use crate::storage;
use crate::transfer;
use crate::types::{Campaign, CampaignStatus};

fn load(e: &Env, id: u64) -> Result<Campaign, Error> {
    registry::campaign(e, id)
}

pub fn pledge(e: &Env, id: u64, pledger: Address, amount: i128) -> Result<(), Error> {
    pledger.require_auth();

    let config = registry::config(e)?;
    let mut campaign = load(e, id)?;

    if amount <= 0 {
        return Err(Error::InvalidParameters);
    }
    if campaign.claimed || campaign.has_ended(e.ledger().timestamp()) {
        return Err(Error::WrongPhase);
    }

    let pledged = storage::get_pledge(e, id, &pledger)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    campaign.pledged = campaign
        .pledged
        .checked_add(amount)
        .ok_or(Error::Overflow)?;

    storage::set_pledge(e, id, &pledger, pledged);
    storage::set_campaign(e, &campaign);
    storage::extend_instance_ttl(e);

    transfer::collect(e, &config.token, &pledger, amount)?;

    PledgedEventData {
        campaign_id: id,
        pledger,
        amount,
    }
    .publish(e);

    Ok(())
}

/// Return part or all of a pledge while the campaign is still open.
pub fn refund_pledge(e: &Env, id: u64, pledger: Address, amount: i128) -> Result<(), Error> {
    pledger.require_auth();

    let config = registry::config(e)?;
    let mut campaign = load(e, id)?;

    if amount <= 0 {
        return Err(Error::InvalidParameters);
    }
    if campaign.claimed || campaign.has_ended(e.ledger().timestamp()) {
        return Err(Error::WrongPhase);
    }

    let pledged = storage::get_pledge(e, id, &pledger);
    if amount > pledged {
        return Err(Error::InsufficientBalance);
    }

    // amount <= pledged <= campaign.pledged, neither can go negative
    storage::set_pledge(e, id, &pledger, pledged - amount);
    campaign.pledged -= amount;
    storage::set_campaign(e, &campaign);
    storage::extend_instance_ttl(e);

    transfer::pay_out(e, &config.token, &pledger, amount)?;

    UnpledgedEventData {
        campaign_id: id,
        pledger,
        amount,
    }
    .publish(e);

    Ok(())
}

/// Hand a pledger back everything they put into a campaign that ended
/// short of its goal.
pub fn full_refund(e: &Env, id: u64, pledger: Address) -> Result<i128, Error> {
    pledger.require_auth();

    let config = registry::config(e)?;
    let mut campaign = load(e, id)?;

    if campaign.status(e.ledger().timestamp()) != CampaignStatus::Failed {
        return Err(Error::WrongPhase);
    }

    let amount = storage::get_pledge(e, id, &pledger);
    if amount == 0 {
        return Err(Error::InsufficientBalance);
    }

    storage::set_pledge(e, id, &pledger, 0);
    campaign.pledged -= amount;
    storage::set_campaign(e, &campaign);
    storage::extend_instance_ttl(e);

    transfer::pay_out(e, &config.token, &pledger, amount)?;

    log!(e, "full refund", id, amount);

    RefundedEventData {
        campaign_id: id,
        pledger,
        amount,
    }
    .publish(e);

    Ok(amount)
}

/// Pay the whole pot to the owner of a campaign that met its goal.
pub fn claim(e: &Env, id: u64, caller: Address) -> Result<i128, Error> {
    caller.require_auth();

    let config = registry::config(e)?;
    let mut campaign = load(e, id)?;

    if caller != campaign.owner {
        return Err(Error::Unauthorized);
    }
    if campaign.status(e.ledger().timestamp()) != CampaignStatus::Succeeded {
        return Err(Error::WrongPhase);
    }

    let amount = campaign.pledged;
    campaign.claimed = true;
    storage::set_campaign(e, &campaign);
    storage::extend_instance_ttl(e);

    transfer::pay_out(e, &config.token, &campaign.owner, amount)?;

    log!(e, "campaign claimed", id, amount);

    ClaimedEventData {
        campaign_id: id,
        owner: campaign.owner,
        amount,
    }
    .publish(e);

    Ok(amount)
}

pub fn pledge_of(e: &Env, id: u64, pledger: &Address) -> Result<i128, Error> {
    load(e, id)?;
    Ok(storage::get_pledge(e, id, pledger))
}

pub fn status(e: &Env, id: u64) -> Result<CampaignStatus, Error> {
    Ok(load(e, id)?.status(e.ledger().timestamp()))
}

pub fn balance(e: &Env, id: u64) -> Result<i128, Error> {
    Ok(load(e, id)?.held_balance())
}
