extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String, Vec,
};

use crate::invariants;
use crate::{CrowdFunding, CrowdFundingClient, Error, CREATION_DEPOSIT, MIN_DONATION, UNIT};

const NOW: u64 = 1_700_000_000;
const MONTH: u64 = 30 * 24 * 6_400;

fn setup() -> (Env, CrowdFundingClient<'static>, token::Client<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(NOW);

    let admin = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token = create_token(&env, &token_admin);

    let contract_id = env.register(CrowdFunding, ());
    let client = CrowdFundingClient::new(&env, &contract_id);
    client.init(&admin, &token.address);
    (env, client, token)
}

fn create_token<'a>(env: &Env, admin: &Address) -> token::Client<'a> {
    let addr = env.register_stellar_asset_contract_v2(admin.clone());
    token::Client::new(env, &addr.address())
}

fn funded_donor(env: &Env, token: &token::Client, amount: i128) -> Address {
    let donor = Address::generate(env);
    token::StellarAssetClient::new(env, &token.address).mint(&donor, &amount);
    donor
}

fn open_campaign(
    env: &Env,
    client: &CrowdFundingClient,
    token: &token::Client,
    start: u64,
    end: u64,
) -> (u64, Address) {
    let creator = funded_donor(env, token, CREATION_DEPOSIT);
    let id = client.create_campaign(
        &creator,
        &String::from_str(env, "My Current Campaign"),
        &start,
        &end,
        &(10 * UNIT),
        &Vec::new(env),
        &CREATION_DEPOSIT,
    );
    (id, creator)
}

#[test]
fn test_donation_scenario() {
    let (env, client, token) = setup();
    let (id, creator) = open_campaign(&env, &client, &token, NOW, NOW + MONTH);
    assert_eq!(id, 1);

    let donor = funded_donor(&env, &token, 5 * UNIT);
    client.donate_to_campaign(&donor, &id, &UNIT);
    assert_eq!(client.get_target_and_raised_values(&id), (10 * UNIT, UNIT));

    let result = client.try_donate_to_campaign(&donor, &id, &(UNIT / 10));
    assert_eq!(result, Err(Ok(Error::BelowMinimumDonation.into())));
    assert_eq!(client.get_target_and_raised_values(&id), (10 * UNIT, UNIT));

    client.set_campaign_target_value(&creator, &id, &(20 * UNIT));
    assert_eq!(client.get_target_and_raised_values(&id), (20 * UNIT, UNIT));

    let result = client.try_set_campaign_target_value(&donor, &id, &(30 * UNIT));
    assert_eq!(result, Err(Ok(Error::NotOwner.into())));
}

#[test]
fn test_donation_moves_funds_into_ledger() {
    let (env, client, token) = setup();
    let (id, _) = open_campaign(&env, &client, &token, NOW, NOW + MONTH);
    let donor = funded_donor(&env, &token, 3 * UNIT);

    client.donate_to_campaign(&donor, &id, &(2 * UNIT));

    assert_eq!(token.balance(&donor), UNIT);
    assert_eq!(token.balance(&client.address), CREATION_DEPOSIT + 2 * UNIT);
    assert_eq!(client.get_donation(&id, &donor), 2 * UNIT);
    // Donations never count towards the reserve.
    assert_eq!(client.get_reserve(), CREATION_DEPOSIT);
}

#[test]
fn test_raised_value_is_sum_of_donations() {
    let (env, client, token) = setup();
    let (id, _) = open_campaign(&env, &client, &token, NOW, NOW + MONTH);

    let alice = funded_donor(&env, &token, 10 * UNIT);
    let bob = funded_donor(&env, &token, 10 * UNIT);
    let amounts = [
        (&alice, UNIT),
        (&bob, 23 * UNIT / 10),
        (&alice, MIN_DONATION),
        (&bob, 4 * UNIT),
    ];

    for (donor, amount) in amounts.iter() {
        let (_, before) = client.get_target_and_raised_values(&id);
        client.donate_to_campaign(donor, &id, amount);
        let (_, after) = client.get_target_and_raised_values(&id);
        invariants::assert_donation_invariant(before, after, *amount);
    }

    let alice_total = client.get_donation(&id, &alice);
    let bob_total = client.get_donation(&id, &bob);
    assert_eq!(alice_total, UNIT + MIN_DONATION);
    assert_eq!(bob_total, 23 * UNIT / 10 + 4 * UNIT);

    let campaign = client.get_campaign(&id);
    invariants::assert_raised_matches_balances(&campaign, &[alice_total, bob_total]);
    invariants::assert_all_campaign_invariants(&campaign);
}

#[test]
fn test_donation_may_exceed_target() {
    let (env, client, token) = setup();
    let (id, _) = open_campaign(&env, &client, &token, NOW, NOW + MONTH);
    let whale = funded_donor(&env, &token, 50 * UNIT);

    client.donate_to_campaign(&whale, &id, &(50 * UNIT));
    assert_eq!(client.get_target_and_raised_values(&id), (10 * UNIT, 50 * UNIT));
}

#[test]
fn test_minimum_donation_is_inclusive() {
    let (env, client, token) = setup();
    let (id, _) = open_campaign(&env, &client, &token, NOW, NOW + MONTH);
    let donor = funded_donor(&env, &token, UNIT);

    let result = client.try_donate_to_campaign(&donor, &id, &(MIN_DONATION - 1));
    assert_eq!(result, Err(Ok(Error::BelowMinimumDonation.into())));
    assert_eq!(token.balance(&donor), UNIT);

    client.donate_to_campaign(&donor, &id, &MIN_DONATION);
    assert_eq!(client.get_donation(&id, &donor), MIN_DONATION);
}

#[test]
fn test_donation_before_start_fails() {
    let (env, client, token) = setup();
    let (id, _) = open_campaign(&env, &client, &token, NOW + MONTH, NOW + 2 * MONTH);
    let donor = funded_donor(&env, &token, UNIT);

    let result = client.try_donate_to_campaign(&donor, &id, &UNIT);
    assert_eq!(result, Err(Ok(Error::NotStartedYet.into())));
    assert_eq!(client.get_target_and_raised_values(&id), (10 * UNIT, 0));
    assert_eq!(token.balance(&donor), UNIT);
}

#[test]
fn test_donation_to_past_campaign_fails() {
    let (env, client, token) = setup();
    let start = NOW - 2 * MONTH;
    let (id, _) = open_campaign(&env, &client, &token, start, start + MONTH);
    let donor = funded_donor(&env, &token, UNIT);

    let result = client.try_donate_to_campaign(&donor, &id, &UNIT);
    assert_eq!(result, Err(Ok(Error::CampaignEnded.into())));
    assert_eq!(client.get_target_and_raised_values(&id), (10 * UNIT, 0));
}

#[test]
fn test_donation_window_boundaries() {
    let (env, client, token) = setup();
    let start = NOW + 100;
    let end = NOW + 200;
    let (id, _) = open_campaign(&env, &client, &token, start, end);
    let donor = funded_donor(&env, &token, 10 * UNIT);

    env.ledger().set_timestamp(start - 1);
    assert_eq!(
        client.try_donate_to_campaign(&donor, &id, &UNIT),
        Err(Ok(Error::NotStartedYet.into()))
    );

    env.ledger().set_timestamp(start);
    client.donate_to_campaign(&donor, &id, &UNIT);

    env.ledger().set_timestamp(end - 1);
    client.donate_to_campaign(&donor, &id, &UNIT);

    env.ledger().set_timestamp(end);
    assert_eq!(
        client.try_donate_to_campaign(&donor, &id, &UNIT),
        Err(Ok(Error::CampaignEnded.into()))
    );

    assert_eq!(client.get_target_and_raised_values(&id), (10 * UNIT, 2 * UNIT));
}

#[test]
fn test_moving_start_opens_campaign_early() {
    let (env, client, token) = setup();
    let (id, creator) = open_campaign(&env, &client, &token, NOW + MONTH, NOW + 2 * MONTH);
    let donor = funded_donor(&env, &token, UNIT);

    client.set_campaign_start_timestamp(&creator, &id, &NOW);
    client.donate_to_campaign(&donor, &id, &UNIT);
    assert_eq!(client.get_donation(&id, &donor), UNIT);
}

#[test]
fn test_donation_to_unknown_campaign_fails() {
    let (env, client, token) = setup();
    let donor = funded_donor(&env, &token, UNIT);

    let result = client.try_donate_to_campaign(&donor, &42, &UNIT);
    assert_eq!(result, Err(Ok(Error::CampaignNotFound.into())));
    assert_eq!(client.try_get_donation(&42, &donor), Err(Ok(Error::CampaignNotFound.into())));
}

#[test]
fn test_donation_without_funds_rolls_back() {
    let (env, client, token) = setup();
    let (id, _) = open_campaign(&env, &client, &token, NOW, NOW + MONTH);
    let donor = funded_donor(&env, &token, UNIT / 2);

    let result = client.try_donate_to_campaign(&donor, &id, &UNIT);
    assert!(result.is_err());
    assert_eq!(client.get_target_and_raised_values(&id), (10 * UNIT, 0));
    assert_eq!(client.get_donation(&id, &donor), 0);
}

#[test]
fn test_donations_are_tracked_per_campaign() {
    let (env, client, token) = setup();
    let (first, _) = open_campaign(&env, &client, &token, NOW, NOW + MONTH);
    let (second, _) = open_campaign(&env, &client, &token, NOW, NOW + MONTH);
    let donor = funded_donor(&env, &token, 5 * UNIT);

    client.donate_to_campaign(&donor, &first, &UNIT);
    client.donate_to_campaign(&donor, &second, &(2 * UNIT));

    assert_eq!(client.get_donation(&first, &donor), UNIT);
    assert_eq!(client.get_donation(&second, &donor), 2 * UNIT);
    assert_eq!(client.get_target_and_raised_values(&first).1, UNIT);
    assert_eq!(client.get_target_and_raised_values(&second).1, 2 * UNIT);
}
