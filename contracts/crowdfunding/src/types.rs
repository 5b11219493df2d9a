use soroban_sdk::{contracttype, Address};

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent entries (30 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending persistent entries (29 days)
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

pub const DAY_IN_SECONDS: u64 = 24 * 60 * 60;

/// Longest allowed campaign when `initialize` is not given one.
pub const DEFAULT_MAX_DURATION: u64 = 30 * DAY_IN_SECONDS;

/// Storage keys for the crowdfunding contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Registry configuration
    Config,
    /// Last assigned campaign ID
    CampaignCounter,
    /// Campaign record by ID
    Campaign(u64),
    /// Outstanding pledge by campaign ID and pledger
    Pledge(u64, Address),
}

/// Registry configuration, set once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    /// Asset every campaign is denominated in
    pub token: Address,
    /// Longest allowed distance between creation and deadline, in seconds
    pub max_duration: u64,
}

/// A single fundraising campaign.
///
/// `goal`, `ends_at` and `owner` never change after creation. `pledged`
/// always equals the sum of the campaign's pledge entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub id: u64,
    pub owner: Address,
    pub goal: i128,
    pub starts_at: u64,
    pub ends_at: u64,
    pub pledged: i128,
    pub claimed: bool,
}

impl Campaign {
    pub fn has_ended(&self, now: u64) -> bool {
        now >= self.ends_at
    }

    pub fn goal_met(&self) -> bool {
        self.pledged >= self.goal
    }

    pub fn status(&self, now: u64) -> CampaignStatus {
        if self.claimed {
            CampaignStatus::Claimed
        } else if !self.has_ended(now) {
            CampaignStatus::Open
        } else if self.goal_met() {
            CampaignStatus::Succeeded
        } else {
            CampaignStatus::Failed
        }
    }

    /// Amount the contract holds on behalf of this campaign.
    pub fn held_balance(&self) -> i128 {
        if self.claimed {
            0
        } else {
            self.pledged
        }
    }
}

/// Lifecycle phase, derived from the deadline, the pledged total and the
/// claimed flag. Never stored.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CampaignStatus {
    /// Accepting pledges and partial refunds
    Open = 0,
    /// Deadline passed with the goal met; owner may claim
    Succeeded = 1,
    /// Deadline passed without the goal; pledgers may take a full refund
    Failed = 2,
    /// Owner has withdrawn the pot
    Claimed = 3,
}
