use soroban_sdk::{Address, Env};

use crate::types::{
    Campaign, Config, StorageKey, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// CONFIG STORAGE
// ============================================================================

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&StorageKey::Config)
}

pub fn get_config(e: &Env) -> Option<Config> {
    e.storage().instance().get(&StorageKey::Config)
}

pub fn set_config(e: &Env, config: &Config) {
    e.storage().instance().set(&StorageKey::Config, config);
}

pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ============================================================================
// CAMPAIGN COUNTER
// ============================================================================

pub fn get_campaign_counter(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&StorageKey::CampaignCounter)
        .unwrap_or(0)
}

/// Bump the counter and return the new campaign ID. IDs start at 1.
pub fn increment_campaign_counter(e: &Env) -> u64 {
    let counter = get_campaign_counter(e) + 1;
    e.storage()
        .instance()
        .set(&StorageKey::CampaignCounter, &counter);
    counter
}

// ============================================================================
// CAMPAIGN STORAGE
// ============================================================================

pub fn get_campaign(e: &Env, id: u64) -> Option<Campaign> {
    let key = StorageKey::Campaign(id);
    let campaign = e.storage().persistent().get::<_, Campaign>(&key);
    if campaign.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    campaign
}

pub fn set_campaign(e: &Env, campaign: &Campaign) {
    let key = StorageKey::Campaign(campaign.id);
    e.storage().persistent().set(&key, campaign);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// PLEDGE STORAGE
// ============================================================================

/// Outstanding pledge of `pledger` to campaign `id`, zero when absent.
pub fn get_pledge(e: &Env, id: u64, pledger: &Address) -> i128 {
    let key = StorageKey::Pledge(id, pledger.clone());
    match e.storage().persistent().get::<_, i128>(&key) {
        Some(amount) => {
            e.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
            amount
        }
        None => 0,
    }
}

/// Store a pledge. A zero amount removes the entry.
pub fn set_pledge(e: &Env, id: u64, pledger: &Address, amount: i128) {
    let key = StorageKey::Pledge(id, pledger.clone());
    if amount == 0 {
        e.storage().persistent().remove(&key);
        return;
    }
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
