#![cfg(test)]
use soroban_sdk::{testutils::Address as _, testutils::Events as _, Address, Env, String};

use crate::{RewardToken, RewardTokenClient, RewardTokenError};

// ── helper ────────────────────────────────────────────────────

/// Returns (client, admin, bound nft contract address).
fn setup(env: &Env) -> (RewardTokenClient<'_>, Address, Address) {
    env.mock_all_auths();
    let id = env.register_contract(None, RewardToken);
    let client = RewardTokenClient::new(env, &id);
    let admin = Address::generate(env);
    client.initialize(
        &admin,
        &18,
        &String::from_str(env, "Infinity Hash"),
        &String::from_str(env, "IFH"),
    );
    let nft = Address::generate(env);
    client.set_nft_contract(&admin, &nft);
    (client, admin, nft)
}

// ── metadata / init ───────────────────────────────────────────

#[test]
fn initialize_stores_metadata() {
    let env = Env::default();
    let (client, admin, _nft) = setup(&env);

    assert_eq!(client.name(), String::from_str(&env, "Infinity Hash"));
    assert_eq!(client.symbol(), String::from_str(&env, "IFH"));
    assert_eq!(client.decimals(), 18);
    assert_eq!(client.total_supply(), 0);
    assert_eq!(client.get_admin(), Some(admin));
}

#[test]
fn initialize_twice_fails() {
    let env = Env::default();
    let (client, admin, _nft) = setup(&env);

    let result = client.try_initialize(
        &admin,
        &7,
        &String::from_str(&env, "Other"),
        &String::from_str(&env, "OTH"),
    );
    assert_eq!(result, Err(Ok(RewardTokenError::AlreadyInitialized)));
    assert_eq!(client.decimals(), 18);
}

// ── nft binding ───────────────────────────────────────────────

#[test]
fn set_nft_contract_binds_once() {
    let env = Env::default();
    let (client, admin, nft) = setup(&env);
    assert_eq!(client.nft_contract(), Some(nft.clone()));

    let other = Address::generate(&env);
    assert_eq!(
        client.try_set_nft_contract(&admin, &other),
        Err(Ok(RewardTokenError::NftContractAlreadySet))
    );
    // Same address again is still a rebinding attempt.
    assert_eq!(
        client.try_set_nft_contract(&admin, &nft),
        Err(Ok(RewardTokenError::NftContractAlreadySet))
    );
    assert_eq!(client.nft_contract(), Some(nft));
}

#[test]
fn set_nft_contract_not_admin() {
    let env = Env::default();
    env.mock_all_auths();
    let id = env.register_contract(None, RewardToken);
    let client = RewardTokenClient::new(&env, &id);
    let admin = Address::generate(&env);
    client.initialize(
        &admin,
        &18,
        &String::from_str(&env, "Infinity Hash"),
        &String::from_str(&env, "IFH"),
    );

    let attacker = Address::generate(&env);
    assert_eq!(
        client.try_set_nft_contract(&attacker, &attacker),
        Err(Ok(RewardTokenError::NotOwner))
    );
    assert!(client.nft_contract().is_none());
}

#[test]
fn set_nft_contract_rejects_self() {
    let env = Env::default();
    env.mock_all_auths();
    let id = env.register_contract(None, RewardToken);
    let client = RewardTokenClient::new(&env, &id);
    let admin = Address::generate(&env);
    client.initialize(
        &admin,
        &18,
        &String::from_str(&env, "Infinity Hash"),
        &String::from_str(&env, "IFH"),
    );

    assert_eq!(
        client.try_set_nft_contract(&admin, &id),
        Err(Ok(RewardTokenError::InvalidAddress))
    );
}

#[test]
fn set_nft_contract_before_initialize_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let id = env.register_contract(None, RewardToken);
    let client = RewardTokenClient::new(&env, &id);
    let admin = Address::generate(&env);
    let nft = Address::generate(&env);

    assert_eq!(
        client.try_set_nft_contract(&admin, &nft),
        Err(Ok(RewardTokenError::NotInitialized))
    );
}

// ── mint gate ─────────────────────────────────────────────────

#[test]
fn mint_by_nft_contract() {
    let env = Env::default();
    let (client, _admin, nft) = setup(&env);
    let holder = Address::generate(&env);

    client.mint(&nft, &holder, &1_000);
    assert_eq!(client.balance(&holder), 1_000);
    assert_eq!(client.total_supply(), 1_000);

    client.mint(&nft, &holder, &2_000);
    assert_eq!(client.balance(&holder), 3_000);
    assert_eq!(client.total_supply(), 3_000);
}

#[test]
fn mint_emits_event() {
    let env = Env::default();
    let (client, _admin, nft) = setup(&env);
    let holder = Address::generate(&env);

    client.mint(&nft, &holder, &1_000);
    assert!(!env.events().all().is_empty());
}

#[test]
fn mint_by_admin_is_not_minter() {
    let env = Env::default();
    let (client, admin, _nft) = setup(&env);
    let holder = Address::generate(&env);

    assert_eq!(
        client.try_mint(&admin, &holder, &1),
        Err(Ok(RewardTokenError::NotMinter))
    );
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn mint_by_stranger_is_not_minter() {
    let env = Env::default();
    let (client, _admin, _nft) = setup(&env);
    let stranger = Address::generate(&env);

    assert_eq!(
        client.try_mint(&stranger, &stranger, &1),
        Err(Ok(RewardTokenError::NotMinter))
    );
    assert_eq!(client.balance(&stranger), 0);
}

#[test]
fn mint_without_binding_is_not_minter() {
    let env = Env::default();
    env.mock_all_auths();
    let id = env.register_contract(None, RewardToken);
    let client = RewardTokenClient::new(&env, &id);
    let admin = Address::generate(&env);
    client.initialize(
        &admin,
        &18,
        &String::from_str(&env, "Infinity Hash"),
        &String::from_str(&env, "IFH"),
    );

    assert_eq!(
        client.try_mint(&admin, &admin, &1),
        Err(Ok(RewardTokenError::NotMinter))
    );
}

#[test]
fn mint_rejects_non_positive_amount() {
    let env = Env::default();
    let (client, _admin, nft) = setup(&env);
    let holder = Address::generate(&env);

    assert_eq!(
        client.try_mint(&nft, &holder, &0),
        Err(Ok(RewardTokenError::InvalidAmount))
    );
    assert_eq!(
        client.try_mint(&nft, &holder, &-5),
        Err(Ok(RewardTokenError::InvalidAmount))
    );
}

#[test]
#[should_panic]
fn mint_requires_auth() {
    let env = Env::default();
    // No mock_all_auths: the minter never signs.
    let id = env.register_contract(None, RewardToken);
    let client = RewardTokenClient::new(&env, &id);
    let admin = Address::generate(&env);
    client.initialize(
        &admin,
        &18,
        &String::from_str(&env, "Infinity Hash"),
        &String::from_str(&env, "IFH"),
    );
    let minter = Address::generate(&env);
    client.mint(&minter, &admin, &1_000);
}

// ── transfers ─────────────────────────────────────────────────

#[test]
fn transfer_moves_balance_and_keeps_supply() {
    let env = Env::default();
    let (client, _admin, nft) = setup(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&nft, &alice, &5_000);
    client.transfer(&alice, &bob, &1_500);

    assert_eq!(client.balance(&alice), 3_500);
    assert_eq!(client.balance(&bob), 1_500);
    assert_eq!(client.total_supply(), 5_000);
    assert_eq!(
        client.total_supply(),
        client.balance(&alice) + client.balance(&bob)
    );
}

#[test]
fn transfer_insufficient_balance_no_mutation() {
    let env = Env::default();
    let (client, _admin, nft) = setup(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&nft, &alice, &100);
    assert_eq!(
        client.try_transfer(&alice, &bob, &101),
        Err(Ok(RewardTokenError::InsufficientBalance))
    );
    assert_eq!(client.balance(&alice), 100);
    assert_eq!(client.balance(&bob), 0);
}

#[test]
fn transfer_to_self_keeps_balance() {
    let env = Env::default();
    let (client, _admin, nft) = setup(&env);
    let alice = Address::generate(&env);

    client.mint(&nft, &alice, &100);
    client.transfer(&alice, &alice, &40);
    assert_eq!(client.balance(&alice), 100);
}

#[test]
fn approve_and_transfer_from() {
    let env = Env::default();
    let (client, _admin, nft) = setup(&env);
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);
    let recipient = Address::generate(&env);

    client.mint(&nft, &owner, &1_000);
    client.approve(&owner, &spender, &600);
    assert_eq!(client.allowance(&owner, &spender), 600);

    client.transfer_from(&spender, &owner, &recipient, &400);
    assert_eq!(client.allowance(&owner, &spender), 200);
    assert_eq!(client.balance(&owner), 600);
    assert_eq!(client.balance(&recipient), 400);

    assert_eq!(
        client.try_transfer_from(&spender, &owner, &recipient, &201),
        Err(Ok(RewardTokenError::InsufficientAllowance))
    );
    assert_eq!(client.allowance(&owner, &spender), 200);
}

#[test]
fn transfer_from_to_self_keeps_allowance() {
    let env = Env::default();
    let (client, _admin, nft) = setup(&env);
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);

    client.mint(&nft, &owner, &100);
    client.approve(&owner, &spender, &50);
    client.transfer_from(&spender, &owner, &owner, &40);

    assert_eq!(client.balance(&owner), 100);
    assert_eq!(client.allowance(&owner, &spender), 50);
    assert_eq!(
        client.try_transfer_from(&spender, &owner, &owner, &51),
        Err(Ok(RewardTokenError::InsufficientAllowance))
    );
}

#[test]
fn approve_rejects_negative() {
    let env = Env::default();
    let (client, _admin, _nft) = setup(&env);
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);

    assert_eq!(
        client.try_approve(&owner, &spender, &-1),
        Err(Ok(RewardTokenError::InvalidAmount))
    );
    assert_eq!(client.allowance(&owner, &spender), 0);
}

#[test]
fn version_is_exposed() {
    let env = Env::default();
    let (client, _admin, _nft) = setup(&env);
    assert_eq!(client.get_version(), crate::CONTRACT_VERSION);
}
