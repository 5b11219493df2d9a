//! Campaign creation, identifier allocation and lookup.

use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::events::{CampaignStartedEventData, InitializedEventData, MaxDurationUpdatedEventData};
use crate::storage;
use crate::types::{Campaign, Config, DEFAULT_MAX_DURATION};

pub fn initialize(
    e: &Env,
    admin: Address,
    token: Address,
    max_duration: Option<u64>,
) -> Result<(), Error> {
    admin.require_auth();

    if storage::is_initialized(e) {
        return Err(Error::AlreadyInitialized);
    }

    let max_duration = max_duration.unwrap_or(DEFAULT_MAX_DURATION);
    if max_duration == 0 {
        return Err(Error::InvalidParameters);
    }

    let config = Config {
        admin: admin.clone(),
        token: token.clone(),
        max_duration,
    };
    storage::set_config(e, &config);
    storage::extend_instance_ttl(e);

    InitializedEventData {
        admin,
        token,
        max_duration,
    }
    .publish(e);

    Ok(())
}

pub fn config(e: &Env) -> Result<Config, Error> {
    storage::get_config(e).ok_or(Error::NotInitialized)
}

/// Change the duration bound for campaigns started from now on.
pub fn set_max_duration(e: &Env, admin: Address, max_duration: u64) -> Result<(), Error> {
    admin.require_auth();

    let mut config = config(e)?;
    if admin != config.admin {
        return Err(Error::Unauthorized);
    }
    if max_duration == 0 {
        return Err(Error::InvalidParameters);
    }

    config.max_duration = max_duration;
    storage::set_config(e, &config);
    storage::extend_instance_ttl(e);

    MaxDurationUpdatedEventData {
        admin,
        max_duration,
    }
    .publish(e);

    Ok(())
}

/// Validate the parameters and record a new campaign owned by `creator`.
pub fn start(e: &Env, creator: Address, goal: i128, ends_at: u64) -> Result<u64, Error> {
    creator.require_auth();

    let config = config(e)?;
    let now = e.ledger().timestamp();

    if goal <= 0 || ends_at <= now || ends_at - now > config.max_duration {
        return Err(Error::InvalidParameters);
    }

    let id = storage::increment_campaign_counter(e);
    let campaign = Campaign {
        id,
        owner: creator.clone(),
        goal,
        starts_at: now,
        ends_at,
        pledged: 0,
        claimed: false,
    };
    storage::set_campaign(e, &campaign);
    storage::extend_instance_ttl(e);

    CampaignStartedEventData {
        campaign_id: id,
        owner: creator,
        goal,
        ends_at,
    }
    .publish(e);

    Ok(id)
}

pub fn campaign(e: &Env, id: u64) -> Result<Campaign, Error> {
    storage::get_campaign(e, id).ok_or(Error::CampaignNotFound)
}

pub fn campaign_count(e: &Env) -> u64 {
    storage::get_campaign_counter(e)
}
