
use crate::types::DAY_IN_SECONDS;
use crate::{Crowdfunding, CrowdfundingClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env,
};

pub const START: u64 = 1_700_000_000;
pub const THREE_DAYS: u64 = 3 * DAY_IN_SECONDS;
pub const GOAL: i128 = 1000;
pub const MINTED: i128 = 10_000;

pub struct Setup {
    pub env: Env,
    pub client: CrowdfundingClient<'static>,
    pub contract: Address,
    pub admin: Address,
    pub owner: Address,
    pub pledger: Address,
    pub other: Address,
    pub token: token::TokenClient<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
}

/// Deploy the contract and a real Stellar asset, mint `MINTED` to both
/// pledgers. The registry is left uninitialized.
pub fn setup_uninitialized() -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let contract = env.register(Crowdfunding, ());
    let client = CrowdfundingClient::new(&env, &contract);

    let admin = Address::generate(&env);
    let owner = Address::generate(&env);
    let pledger = Address::generate(&env);
    let other = Address::generate(&env);

    let issuer = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(issuer);
    let token = token::TokenClient::new(&env, &token_contract.address());
    let token_admin = token::StellarAssetClient::new(&env, &token_contract.address());

    token_admin.mint(&pledger, &MINTED);
    token_admin.mint(&other, &MINTED);

    Setup {
        env,
        client,
        contract,
        admin,
        owner,
        pledger,
        other,
        token,
        token_admin,
    }
}

/// Initialized registry with the default 30 day maximum duration.
pub fn setup_test() -> Setup {
    let s = setup_uninitialized();
    s.client.initialize(&s.admin, &s.token.address, &None);
    s
}

/// Initialized registry with one campaign (ID 1, goal `GOAL`) ending in three days.
pub fn setup_with_campaign() -> (Setup, u64) {
    let s = setup_test();
    let id = s.client.start(&s.owner, &GOAL, &(START + THREE_DAYS));
    (s, id)
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().set_timestamp(env.ledger().timestamp() + seconds);
}
