#![cfg(test)]
use reward_token::{RewardToken, RewardTokenClient, RewardTokenError};
use soroban_sdk::{testutils::Address as _, Address, Env, String as SdkString};

use crate::{BatchNft, BatchNftClient, BatchNftError, DEFAULT_LOCK_SECS, DEFAULT_REWARD_RATE};

const PRICE: i128 = 1_000;

fn make_client(env: &Env) -> BatchNftClient<'_> {
    let id = env.register_contract(None, BatchNft);
    BatchNftClient::new(env, &id)
}

fn init_owner(env: &Env, client: &BatchNftClient) -> Address {
    let owner = Address::generate(env);
    let stablecoin = Address::generate(env);
    client.initialize(&owner, &stablecoin, &DEFAULT_REWARD_RATE, &DEFAULT_LOCK_SECS);
    owner
}

// ── owner guard ───────────────────────────────────────────────

#[test]
fn create_batch_not_owner() {
    let env = Env::default();
    let client = make_client(&env);
    let _owner = init_owner(&env, &client);
    env.mock_all_auths();
    let attacker = Address::generate(&env);

    assert_eq!(
        client.try_create_batch(&attacker, &0, &10_000, &PRICE, &None),
        Err(Ok(BatchNftError::NotOwner))
    );
    assert!(!client.exists(&0));
}

#[test]
fn create_batch_missing_auth_no_mutation() {
    let env = Env::default();
    let client = make_client(&env);
    let owner = init_owner(&env, &client);

    assert!(client
        .try_create_batch(&owner, &0, &10_000, &PRICE, &None)
        .is_err());
    assert!(!client.exists(&0));
}

#[test]
fn remove_batch_not_owner() {
    let env = Env::default();
    let client = make_client(&env);
    let owner = init_owner(&env, &client);
    env.mock_all_auths();
    client.create_batch(&owner, &0, &10_000, &PRICE, &None);
    let attacker = Address::generate(&env);

    assert_eq!(
        client.try_remove_batch(&attacker, &0),
        Err(Ok(BatchNftError::NotOwner))
    );
    assert_eq!(
        client.try_remove_last_batch(&attacker),
        Err(Ok(BatchNftError::NotOwner))
    );
    assert!(client.exists(&0));
}

#[test]
fn set_uri_not_owner() {
    let env = Env::default();
    let client = make_client(&env);
    let _owner = init_owner(&env, &client);
    env.mock_all_auths();
    let attacker = Address::generate(&env);
    let uri = SdkString::from_str(&env, "https://scam.example/ipfs/");

    assert_eq!(
        client.try_set_uri(&attacker, &uri),
        Err(Ok(BatchNftError::NotOwner))
    );
    assert_eq!(client.uri(), SdkString::from_str(&env, ""));
}

#[test]
fn set_uri_missing_auth() {
    let env = Env::default();
    let client = make_client(&env);
    let owner = init_owner(&env, &client);
    let uri = SdkString::from_str(&env, "https://ipfs.io/ipfs/");

    assert!(client.try_set_uri(&owner, &uri).is_err());
}

#[test]
fn set_token_contract_not_owner() {
    let env = Env::default();
    let client = make_client(&env);
    let _owner = init_owner(&env, &client);
    env.mock_all_auths();
    let attacker = Address::generate(&env);
    let token = Address::generate(&env);

    assert_eq!(
        client.try_set_token_contract(&attacker, &token),
        Err(Ok(BatchNftError::NotOwner))
    );
    assert!(client.token_contract().is_none());
}

#[test]
fn transfer_asset_not_owner() {
    let env = Env::default();
    let client = make_client(&env);
    let owner = init_owner(&env, &client);
    env.mock_all_auths();
    let attacker = Address::generate(&env);
    let asset = Address::generate(&env);

    assert_eq!(
        client.try_transfer_asset(&attacker, &asset, &owner, &1),
        Err(Ok(BatchNftError::NotOwner))
    );
}

#[test]
fn transfer_ownership_moves_owner_role() {
    let env = Env::default();
    let client = make_client(&env);
    let owner = init_owner(&env, &client);
    env.mock_all_auths();
    let new_owner = Address::generate(&env);

    client.transfer_ownership(&owner, &new_owner);
    assert_eq!(client.owner(), Some(new_owner.clone()));

    assert_eq!(
        client.try_create_batch(&owner, &0, &10_000, &PRICE, &None),
        Err(Ok(BatchNftError::NotOwner))
    );
    client.create_batch(&new_owner, &0, &10_000, &PRICE, &None);
    assert!(client.exists(&0));
}

#[test]
fn transfer_ownership_not_owner() {
    let env = Env::default();
    let client = make_client(&env);
    let owner = init_owner(&env, &client);
    env.mock_all_auths();
    let attacker = Address::generate(&env);

    assert_eq!(
        client.try_transfer_ownership(&attacker, &attacker),
        Err(Ok(BatchNftError::NotOwner))
    );
    assert_eq!(client.owner(), Some(owner));
}

// ── holder auth ───────────────────────────────────────────────

#[test]
fn purchase_missing_auth() {
    let env = Env::default();
    let client = make_client(&env);
    let _owner = init_owner(&env, &client);
    let buyer = Address::generate(&env);

    assert!(client.try_purchase(&buyer, &0, &1).is_err());
}

#[test]
fn redeem_missing_auth() {
    let env = Env::default();
    let client = make_client(&env);
    let _owner = init_owner(&env, &client);
    let holder = Address::generate(&env);

    assert!(client.try_redeem(&holder, &0, &1).is_err());
}

#[test]
fn transfer_missing_auth() {
    let env = Env::default();
    let client = make_client(&env);
    let _owner = init_owner(&env, &client);
    let from = Address::generate(&env);
    let to = Address::generate(&env);

    assert!(client.try_transfer(&from, &to, &0, &1).is_err());
}

// ── mint gate seen from a wired deployment ───────────────────

#[test]
fn owner_cannot_mint_rewards_directly() {
    let env = Env::default();
    env.mock_all_auths();
    let client = make_client(&env);
    let owner = init_owner(&env, &client);

    let reward_id = env.register_contract(None, RewardToken);
    let reward = RewardTokenClient::new(&env, &reward_id);
    reward.initialize(
        &owner,
        &18,
        &SdkString::from_str(&env, "Infinity Hash"),
        &SdkString::from_str(&env, "IFH"),
    );
    reward.set_nft_contract(&owner, &client.address);
    client.set_token_contract(&owner, &reward_id);

    let deployer = Address::generate(&env);
    assert_eq!(
        reward.try_mint(&deployer, &deployer, &1),
        Err(Ok(RewardTokenError::NotMinter))
    );
    assert_eq!(
        reward.try_mint(&owner, &owner, &1),
        Err(Ok(RewardTokenError::NotMinter))
    );
    assert_eq!(reward.total_supply(), 0);

    assert_eq!(
        reward.try_set_nft_contract(&owner, &deployer),
        Err(Ok(RewardTokenError::NftContractAlreadySet))
    );
}
