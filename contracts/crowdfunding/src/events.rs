use soroban_sdk::{contractevent, Address};

/// Event emitted when the registry is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub token: Address,
    pub max_duration: u64,
}

/// Event emitted when the admin changes the maximum campaign duration
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MaxDurationUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub max_duration: u64,
}

/// Event emitted when a campaign is created
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignStartedEventData {
    #[topic]
    pub campaign_id: u64,
    #[topic]
    pub owner: Address,
    pub goal: i128,
    pub ends_at: u64,
}

/// Event emitted when a pledger adds funds
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PledgedEventData {
    #[topic]
    pub campaign_id: u64,
    #[topic]
    pub pledger: Address,
    pub amount: i128,
}

/// Event emitted when a pledger withdraws part of a pledge before the deadline
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnpledgedEventData {
    #[topic]
    pub campaign_id: u64,
    #[topic]
    pub pledger: Address,
    pub amount: i128,
}

/// Event emitted when a pledger reclaims everything from a failed campaign
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundedEventData {
    #[topic]
    pub campaign_id: u64,
    #[topic]
    pub pledger: Address,
    pub amount: i128,
}

/// Event emitted when the owner claims the pot
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimedEventData {
    #[topic]
    pub campaign_id: u64,
    #[topic]
    pub owner: Address,
    pub amount: i128,
}
