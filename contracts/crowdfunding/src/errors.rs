use soroban_sdk::contracterror;

/// Error codes for the crowdfunding contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Zero or negative amount, or a deadline outside the allowed window
    InvalidParameters = 3,
    /// Caller is not the campaign owner or the admin
    Unauthorized = 4,
    /// Operation is not allowed in the campaign's current phase
    WrongPhase = 5,
    /// Requested amount exceeds the caller's recorded pledge
    InsufficientBalance = 6,
    /// Token transfer failed
    TransferFailure = 7,
    /// No campaign exists for the identifier
    CampaignNotFound = 8,
    /// Pledged total overflowed
    Overflow = 9,
}
