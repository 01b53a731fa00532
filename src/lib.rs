#![no_std]
#![deny(unsafe_code)]
#![deny(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, token, Address, BytesN,
    Env, String, Symbol, Vec,
};

/// Centralized contract error codes. Auth failures are signaled by host panic (require_auth).
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum BatchNftError {
    /// Caller is not the contract owner.
    NotOwner = 1,
    /// Contract is not initialized (owner not set).
    NotInitialized = 2,
    /// `initialize` was already called.
    AlreadyInitialized = 3,
    /// Batch price must be strictly positive.
    ZeroPrice = 4,
    /// Batch supply must be nonzero.
    ZeroSupply = 5,
    /// Unit or asset amount must be nonzero.
    ZeroAmount = 6,
    /// Address cannot be used here (binding to self, approving self).
    InvalidAddress = 7,
    /// Reward rate must be strictly positive.
    InvalidRewardRate = 8,
    /// Explicit timelock is not in the future.
    TimelockInPast = 9,
    /// A batch with this id already has supply.
    BatchExists = 10,
    /// No batch with this id.
    BatchNotExists = 11,
    /// Batch already sold at least one unit; removal is no longer allowed.
    BatchSold = 12,
    /// Registry is empty.
    NoBatches = 13,
    /// Batch timelock has not elapsed.
    TooSoon = 14,
    /// Reward token binding is immutable once set.
    TokenAlreadySet = 15,
    /// Reward token is not bound yet; redemption is unavailable.
    TokenNotSet = 16,
    /// Holder (or the unsold stock, for purchases) cannot cover the amount.
    InsufficientBalance = 17,
    /// `ids` and `amounts` differ in length.
    LengthMismatch = 18,
    /// Operator is neither the holder nor approved for all.
    NotApproved = 19,
    /// Price, reward or counter arithmetic overflowed.
    Overflow = 20,
    /// Default lock duration must be nonzero.
    InvalidLockDuration = 21,
}

// ── Event symbols ────────────────────────────────────────────
const EVENT_INIT: Symbol = symbol_short!("init");
const EVENT_BATCH_CREATED: Symbol = symbol_short!("batch_new");
const EVENT_BATCH_REMOVED: Symbol = symbol_short!("batch_rm");
const EVENT_PURCHASED: Symbol = symbol_short!("purchase");
const EVENT_REDEEMED: Symbol = symbol_short!("redeem");
const EVENT_TRANSFER: Symbol = symbol_short!("transfer");
const EVENT_TRANSFER_BATCH: Symbol = symbol_short!("xfer_bat");
const EVENT_APPROVAL: Symbol = symbol_short!("approval");
const EVENT_WITHDRAW: Symbol = symbol_short!("withdraw");
const EVENT_URI_SET: Symbol = symbol_short!("uri_set");
const EVENT_TOKEN_SET: Symbol = symbol_short!("token_set");
const EVENT_OWNER_SET: Symbol = symbol_short!("owner_set");

/// Reward tokens minted per redeemed unit unless configured otherwise.
pub const DEFAULT_REWARD_RATE: i128 = 1_000;

/// Default timelock offset (90 days) for batches created without an explicit timelock.
pub const DEFAULT_LOCK_SECS: u64 = 90 * 24 * 60 * 60;

/// Contract version identifier. Bumped when storage or semantics change.
pub const CONTRACT_VERSION: u32 = 1;

const INTERFACE_ERC165: [u8; 4] = [0x01, 0xff, 0xc9, 0xa7];
const INTERFACE_ERC1155: [u8; 4] = [0xd9, 0xb6, 0x7a, 0x26];
const INTERFACE_ERC1155_METADATA_URI: [u8; 4] = [0x0e, 0x89, 0x34, 0x1c];

// ── Data structures ──────────────────────────────────────────

/// Sale batch. All fields are zero for an id that was never created or was removed.
/// Invariant: `redeemed <= sold <= supply`.
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Batch {
    pub supply: u64,
    /// Stablecoin base units per sale unit.
    pub price: i128,
    /// Ledger timestamp from which units can be redeemed.
    pub timelock: u64,
    pub sold: u64,
    pub redeemed: u64,
}

/// Engine configuration written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub stablecoin: Address,
    /// Reward tokens minted per redeemed unit.
    pub reward_rate: i128,
    /// Timelock offset applied when a batch is created without one.
    pub lock_secs: u64,
}

/// Storage keys. Batches live under `Batch(id)`; `BatchOrder` keeps existing ids
/// in creation order for enumeration and `remove_last_batch`.
#[contracttype]
pub enum DataKey {
    Owner,
    Config,
    /// Bound reward token (minter target).
    Token,
    Uri,
    Batch(u32),
    BatchOrder,
    /// Per (batch id, holder): unit balance.
    Balance(u32, Address),
    /// Per (owner, operator): approved for all batches.
    Approval(Address, Address),
}

/// Client for the reward token's gated mint.
mod reward {
    use soroban_sdk::{contractclient, Address, Env};

    #[allow(dead_code)]
    #[contractclient(name = "RewardTokenClient")]
    pub trait RewardTokenInterface {
        fn mint(env: Env, minter: Address, to: Address, amount: i128);
    }
}

// ── Contract ─────────────────────────────────────────────────
#[contract]
pub struct BatchNft;

#[contractimpl]
impl BatchNft {
    /// Require `caller` to be the stored owner. Call after `caller.require_auth()`.
    fn require_owner(env: &Env, caller: &Address) -> Result<(), BatchNftError> {
        let owner: Address = env
            .storage()
            .persistent()
            .get(&DataKey::Owner)
            .ok_or(BatchNftError::NotInitialized)?;
        if *caller != owner {
            return Err(BatchNftError::NotOwner);
        }
        Ok(())
    }

    fn read_config(env: &Env) -> Result<Config, BatchNftError> {
        env.storage()
            .persistent()
            .get(&DataKey::Config)
            .ok_or(BatchNftError::NotInitialized)
    }

    fn read_batch(env: &Env, batch_id: u32) -> Batch {
        env.storage()
            .persistent()
            .get(&DataKey::Batch(batch_id))
            .unwrap_or_default()
    }

    /// Load an existing batch or fail with `BatchNotExists`.
    fn require_batch(env: &Env, batch_id: u32) -> Result<Batch, BatchNftError> {
        let batch = Self::read_batch(env, batch_id);
        if batch.supply == 0 {
            return Err(BatchNftError::BatchNotExists);
        }
        Ok(batch)
    }

    fn read_order(env: &Env) -> Vec<u32> {
        env.storage()
            .persistent()
            .get(&DataKey::BatchOrder)
            .unwrap_or_else(|| Vec::new(env))
    }

    fn read_balance(env: &Env, batch_id: u32, holder: &Address) -> u64 {
        let key = DataKey::Balance(batch_id, holder.clone());
        env.storage().persistent().get(&key).unwrap_or(0)
    }

    fn write_balance(env: &Env, batch_id: u32, holder: &Address, amount: u64) {
        let key = DataKey::Balance(batch_id, holder.clone());
        if amount == 0 {
            env.storage().persistent().remove(&key);
        } else {
            env.storage().persistent().set(&key, &amount);
        }
    }

    /// Move `amount` units of `batch_id` between holders. Validates before writing.
    fn move_units(
        env: &Env,
        from: &Address,
        to: &Address,
        batch_id: u32,
        amount: u64,
    ) -> Result<(), BatchNftError> {
        if amount == 0 {
            return Err(BatchNftError::ZeroAmount);
        }
        let from_balance = Self::read_balance(env, batch_id, from);
        if from_balance < amount {
            return Err(BatchNftError::InsufficientBalance);
        }
        if from == to {
            return Ok(());
        }
        let to_balance = Self::read_balance(env, batch_id, to)
            .checked_add(amount)
            .ok_or(BatchNftError::Overflow)?;
        Self::write_balance(env, batch_id, from, from_balance - amount);
        Self::write_balance(env, batch_id, to, to_balance);
        Ok(())
    }

    fn require_operator(env: &Env, operator: &Address, from: &Address) -> Result<(), BatchNftError> {
        if operator != from && !Self::is_approved_for_all(env.clone(), from.clone(), operator.clone())
        {
            return Err(BatchNftError::NotApproved);
        }
        Ok(())
    }

    /// Atomic multi-id transfer: all legs are validated against a running view of
    /// balances before any of them is written.
    fn move_units_batch(
        env: &Env,
        from: &Address,
        to: &Address,
        ids: &Vec<u32>,
        amounts: &Vec<u64>,
    ) -> Result<(), BatchNftError> {
        if ids.len() != amounts.len() {
            return Err(BatchNftError::LengthMismatch);
        }
        // Repeated ids draw from the same balance, so check cumulative demand per id.
        for i in 0..ids.len() {
            let id = ids.get_unchecked(i);
            let mut demand: u64 = 0;
            for j in 0..ids.len() {
                if ids.get_unchecked(j) == id {
                    demand = demand
                        .checked_add(amounts.get_unchecked(j))
                        .ok_or(BatchNftError::Overflow)?;
                }
            }
            if amounts.get_unchecked(i) == 0 {
                return Err(BatchNftError::ZeroAmount);
            }
            if Self::read_balance(env, id, from) < demand {
                return Err(BatchNftError::InsufficientBalance);
            }
        }
        for i in 0..ids.len() {
            Self::move_units(env, from, to, ids.get_unchecked(i), amounts.get_unchecked(i))?;
        }
        Ok(())
    }

    // ── Setup and ownership ───────────────────────────────────

    /// Initialize owner, stablecoin, reward rate and default lock duration.
    /// Can only be called once.
    pub fn initialize(
        env: Env,
        owner: Address,
        stablecoin: Address,
        reward_rate: i128,
        lock_secs: u64,
    ) -> Result<(), BatchNftError> {
        if env.storage().persistent().has(&DataKey::Owner) {
            return Err(BatchNftError::AlreadyInitialized);
        }
        if reward_rate <= 0 {
            return Err(BatchNftError::InvalidRewardRate);
        }
        if lock_secs == 0 {
            return Err(BatchNftError::InvalidLockDuration);
        }
        let config = Config {
            stablecoin,
            reward_rate,
            lock_secs,
        };
        env.storage().persistent().set(&DataKey::Owner, &owner);
        env.storage().persistent().set(&DataKey::Config, &config);
        env.events().publish(
            (EVENT_INIT, owner),
            (config.stablecoin, config.reward_rate, config.lock_secs),
        );
        Ok(())
    }

    /// Get the owner address, if set.
    pub fn owner(env: Env) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Owner)
    }

    pub fn config(env: Env) -> Option<Config> {
        env.storage().persistent().get(&DataKey::Config)
    }

    /// Hand the owner role to `new_owner`. Owner only.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), BatchNftError> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;
        env.storage().persistent().set(&DataKey::Owner, &new_owner);
        env.events().publish((EVENT_OWNER_SET, caller), new_owner);
        Ok(())
    }

    /// Set the metadata URI. Owner only; no effect on batch state.
    pub fn set_uri(env: Env, caller: Address, uri: String) -> Result<(), BatchNftError> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;
        env.storage().persistent().set(&DataKey::Uri, &uri);
        env.events().publish((EVENT_URI_SET, caller), uri);
        Ok(())
    }

    /// Metadata URI shared by every batch. Empty until set.
    pub fn uri(env: Env) -> String {
        env.storage()
            .persistent()
            .get(&DataKey::Uri)
            .unwrap_or_else(|| String::from_str(&env, ""))
    }

    /// Bind the reward token this contract mints through on redemption.
    /// Owner only, one-time: fails with `TokenAlreadySet` once bound.
    pub fn set_token_contract(
        env: Env,
        caller: Address,
        token: Address,
    ) -> Result<(), BatchNftError> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if token == env.current_contract_address() {
            return Err(BatchNftError::InvalidAddress);
        }
        if env.storage().persistent().has(&DataKey::Token) {
            return Err(BatchNftError::TokenAlreadySet);
        }

        env.storage().persistent().set(&DataKey::Token, &token);
        env.events().publish((EVENT_TOKEN_SET, caller), token);
        Ok(())
    }

    /// The bound reward token, if any.
    pub fn token_contract(env: Env) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Token)
    }

    // ── Batch registry ────────────────────────────────────────

    /// Create batch `batch_id` with `supply` units at `price` each.
    ///
    /// `timelock` is an absolute ledger timestamp and must lie in the future;
    /// when omitted it defaults to now + the configured lock duration.
    /// Returns the stored timelock.
    ///
    /// # Errors
    /// - `ZeroPrice`, `ZeroSupply`: degenerate batch
    /// - `BatchExists`: id already has supply
    /// - `TimelockInPast`: explicit timelock is not after the current ledger time
    pub fn create_batch(
        env: Env,
        caller: Address,
        batch_id: u32,
        supply: u64,
        price: i128,
        timelock: Option<u64>,
    ) -> Result<u64, BatchNftError> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;
        let config = Self::read_config(&env)?;

        if price <= 0 {
            return Err(BatchNftError::ZeroPrice);
        }
        if supply == 0 {
            return Err(BatchNftError::ZeroSupply);
        }
        if Self::read_batch(&env, batch_id).supply > 0 {
            return Err(BatchNftError::BatchExists);
        }

        let now = env.ledger().timestamp();
        let timelock = match timelock {
            Some(t) if t <= now => return Err(BatchNftError::TimelockInPast),
            Some(t) => t,
            None => now
                .checked_add(config.lock_secs)
                .ok_or(BatchNftError::Overflow)?,
        };

        let batch = Batch {
            supply,
            price,
            timelock,
            sold: 0,
            redeemed: 0,
        };
        env.storage()
            .persistent()
            .set(&DataKey::Batch(batch_id), &batch);

        let mut order = Self::read_order(&env);
        order.push_back(batch_id);
        env.storage().persistent().set(&DataKey::BatchOrder, &order);

        env.events().publish(
            (EVENT_BATCH_CREATED, batch_id),
            (supply, price, timelock),
        );
        Ok(timelock)
    }

    /// Remove an unsold batch. Owner only.
    pub fn remove_batch(env: Env, caller: Address, batch_id: u32) -> Result<(), BatchNftError> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let batch = Self::require_batch(&env, batch_id)?;
        Self::delete_unsold(&env, batch_id, &batch)
    }

    /// Remove the most recently created batch still in the registry. Owner only.
    /// Returns the removed id.
    pub fn remove_last_batch(env: Env, caller: Address) -> Result<u32, BatchNftError> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let batch_id = Self::read_order(&env)
            .last()
            .ok_or(BatchNftError::NoBatches)?;
        let batch = Self::require_batch(&env, batch_id)?;
        Self::delete_unsold(&env, batch_id, &batch)?;
        Ok(batch_id)
    }

    fn delete_unsold(env: &Env, batch_id: u32, batch: &Batch) -> Result<(), BatchNftError> {
        if batch.sold > 0 {
            return Err(BatchNftError::BatchSold);
        }
        env.storage().persistent().remove(&DataKey::Batch(batch_id));

        let old_order = Self::read_order(env);
        let mut new_order = Vec::new(env);
        for id in old_order.iter() {
            if id != batch_id {
                new_order.push_back(id);
            }
        }
        env.storage().persistent().set(&DataKey::BatchOrder, &new_order);

        env.events().publish((EVENT_BATCH_REMOVED, batch_id), batch.supply);
        Ok(())
    }

    /// Batch record; all zero if `batch_id` does not exist.
    pub fn get_batch(env: Env, batch_id: u32) -> Batch {
        Self::read_batch(&env, batch_id)
    }

    pub fn exists(env: Env, batch_id: u32) -> bool {
        Self::read_batch(&env, batch_id).supply > 0
    }

    /// True once at least one unit of the batch was purchased.
    pub fn is_sold(env: Env, batch_id: u32) -> bool {
        Self::read_batch(&env, batch_id).sold > 0
    }

    /// Units not yet burned by redemption: unsold stock plus outstanding holdings.
    pub fn total_supply(env: Env, batch_id: u32) -> u64 {
        let batch = Self::read_batch(&env, batch_id);
        batch.supply - batch.redeemed
    }

    /// Units still available for purchase.
    pub fn unsold(env: Env, batch_id: u32) -> u64 {
        let batch = Self::read_batch(&env, batch_id);
        batch.supply - batch.sold
    }

    /// Ids of existing batches, in creation order.
    pub fn batch_ids(env: Env) -> Vec<u32> {
        Self::read_order(&env)
    }

    // ── Sale and redemption ───────────────────────────────────

    /// Buy `amount` units of `batch_id` for `amount * price` stablecoin.
    ///
    /// Payment is pulled with `transfer_from`, so the buyer must have approved
    /// this contract on the stablecoin beforehand; allowance and balance
    /// failures come from the stablecoin contract and abort the whole call.
    /// Returns the stablecoin cost.
    pub fn purchase(
        env: Env,
        buyer: Address,
        batch_id: u32,
        amount: u64,
    ) -> Result<i128, BatchNftError> {
        buyer.require_auth();
        let config = Self::read_config(&env)?;

        let mut batch = Self::require_batch(&env, batch_id)?;
        if amount == 0 {
            return Err(BatchNftError::ZeroAmount);
        }
        if amount > batch.supply - batch.sold {
            return Err(BatchNftError::InsufficientBalance);
        }
        let cost = batch
            .price
            .checked_mul(amount as i128)
            .ok_or(BatchNftError::Overflow)?;
        let balance = Self::read_balance(&env, batch_id, &buyer)
            .checked_add(amount)
            .ok_or(BatchNftError::Overflow)?;

        let contract_addr = env.current_contract_address();
        token::Client::new(&env, &config.stablecoin).transfer_from(
            &contract_addr,
            &buyer,
            &contract_addr,
            &cost,
        );

        batch.sold += amount;
        env.storage()
            .persistent()
            .set(&DataKey::Batch(batch_id), &batch);
        Self::write_balance(&env, batch_id, &buyer, balance);

        env.events()
            .publish((EVENT_PURCHASED, buyer, batch_id), (amount, cost));
        Ok(cost)
    }

    /// Redeem `amount` units of `batch_id` once its timelock has elapsed.
    ///
    /// Burns the units and mints `amount * reward_rate` reward tokens to
    /// `holder` through the bound reward token. Returns the minted amount.
    pub fn redeem(
        env: Env,
        holder: Address,
        batch_id: u32,
        amount: u64,
    ) -> Result<i128, BatchNftError> {
        holder.require_auth();
        let config = Self::read_config(&env)?;

        let mut batch = Self::require_batch(&env, batch_id)?;
        if amount == 0 {
            return Err(BatchNftError::ZeroAmount);
        }
        if env.ledger().timestamp() < batch.timelock {
            return Err(BatchNftError::TooSoon);
        }
        let token: Address = env
            .storage()
            .persistent()
            .get(&DataKey::Token)
            .ok_or(BatchNftError::TokenNotSet)?;
        let balance = Self::read_balance(&env, batch_id, &holder);
        if balance < amount {
            return Err(BatchNftError::InsufficientBalance);
        }
        let reward = config
            .reward_rate
            .checked_mul(amount as i128)
            .ok_or(BatchNftError::Overflow)?;

        Self::write_balance(&env, batch_id, &holder, balance - amount);
        batch.redeemed += amount;
        env.storage()
            .persistent()
            .set(&DataKey::Batch(batch_id), &batch);

        reward::RewardTokenClient::new(&env, &token).mint(
            &env.current_contract_address(),
            &holder,
            &reward,
        );

        env.events()
            .publish((EVENT_REDEEMED, holder, batch_id), (amount, reward));
        Ok(reward)
    }

    /// Send `amount` of any token held by this contract to `to`. Owner only.
    /// Used to withdraw sale proceeds or recover assets sent by mistake.
    pub fn transfer_asset(
        env: Env,
        caller: Address,
        asset: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), BatchNftError> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;
        if amount <= 0 {
            return Err(BatchNftError::ZeroAmount);
        }

        token::Client::new(&env, &asset).transfer(&env.current_contract_address(), &to, &amount);

        env.events().publish((EVENT_WITHDRAW, asset, to), amount);
        Ok(())
    }

    // ── Holdings ──────────────────────────────────────────────

    pub fn balance(env: Env, holder: Address, batch_id: u32) -> u64 {
        Self::read_balance(&env, batch_id, &holder)
    }

    /// Balances for each (holders[i], ids[i]) pair.
    pub fn balance_of_batch(
        env: Env,
        holders: Vec<Address>,
        ids: Vec<u32>,
    ) -> Result<Vec<u64>, BatchNftError> {
        if holders.len() != ids.len() {
            return Err(BatchNftError::LengthMismatch);
        }
        let mut balances = Vec::new(&env);
        for i in 0..holders.len() {
            balances.push_back(Self::read_balance(
                &env,
                ids.get_unchecked(i),
                &holders.get_unchecked(i),
            ));
        }
        Ok(balances)
    }

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        batch_id: u32,
        amount: u64,
    ) -> Result<(), BatchNftError> {
        from.require_auth();
        Self::move_units(&env, &from, &to, batch_id, amount)?;
        env.events()
            .publish((EVENT_TRANSFER, from, to), (batch_id, amount));
        Ok(())
    }

    /// Transfer several batch ids at once; either every leg moves or none does.
    pub fn batch_transfer(
        env: Env,
        from: Address,
        to: Address,
        ids: Vec<u32>,
        amounts: Vec<u64>,
    ) -> Result<(), BatchNftError> {
        from.require_auth();
        Self::move_units_batch(&env, &from, &to, &ids, &amounts)?;
        env.events()
            .publish((EVENT_TRANSFER_BATCH, from, to), (ids, amounts));
        Ok(())
    }

    /// Allow or revoke `operator` moving every batch held by `owner`.
    pub fn set_approval_for_all(
        env: Env,
        owner: Address,
        operator: Address,
        approved: bool,
    ) -> Result<(), BatchNftError> {
        owner.require_auth();
        if owner == operator {
            return Err(BatchNftError::InvalidAddress);
        }
        let key = DataKey::Approval(owner.clone(), operator.clone());
        if approved {
            env.storage().persistent().set(&key, &true);
        } else {
            env.storage().persistent().remove(&key);
        }
        env.events()
            .publish((EVENT_APPROVAL, owner, operator), approved);
        Ok(())
    }

    pub fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        let key = DataKey::Approval(owner, operator);
        env.storage()
            .persistent()
            .get::<DataKey, bool>(&key)
            .unwrap_or(false)
    }

    /// Move units held by `from` on behalf of an approved `operator`.
    pub fn transfer_from(
        env: Env,
        operator: Address,
        from: Address,
        to: Address,
        batch_id: u32,
        amount: u64,
    ) -> Result<(), BatchNftError> {
        operator.require_auth();
        Self::require_operator(&env, &operator, &from)?;
        Self::move_units(&env, &from, &to, batch_id, amount)?;
        env.events()
            .publish((EVENT_TRANSFER, from, to), (batch_id, amount));
        Ok(())
    }

    pub fn batch_transfer_from(
        env: Env,
        operator: Address,
        from: Address,
        to: Address,
        ids: Vec<u32>,
        amounts: Vec<u64>,
    ) -> Result<(), BatchNftError> {
        operator.require_auth();
        Self::require_operator(&env, &operator, &from)?;
        Self::move_units_batch(&env, &from, &to, &ids, &amounts)?;
        env.events()
            .publish((EVENT_TRANSFER_BATCH, from, to), (ids, amounts));
        Ok(())
    }

    /// ERC-165 style capability probe: ERC-165 itself, ERC-1155 and its metadata URI extension.
    pub fn supports_interface(env: Env, interface_id: BytesN<4>) -> bool {
        let _ = env;
        let id = interface_id.to_array();
        id == INTERFACE_ERC165 || id == INTERFACE_ERC1155 || id == INTERFACE_ERC1155_METADATA_URI
    }

    /// Return the current contract version.
    pub fn get_version(env: Env) -> u32 {
        let _ = env;
        CONTRACT_VERSION
    }
}

mod test_auth;
