#![no_std]
#![deny(unsafe_code)]
#![deny(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env, String,
    Symbol,
};

/// Reward token error codes. Auth failures are signaled by host panic (require_auth).
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum RewardTokenError {
    /// Caller is not the token admin.
    NotOwner = 1,
    /// Contract is not initialized (admin not set).
    NotInitialized = 2,
    /// `initialize` was already called.
    AlreadyInitialized = 3,
    /// Caller is not the bound NFT contract.
    NotMinter = 4,
    /// The NFT contract binding is immutable once set.
    NftContractAlreadySet = 5,
    /// Address cannot be used here (e.g. binding the token to itself).
    InvalidAddress = 6,
    /// Amount must be strictly positive.
    InvalidAmount = 7,
    /// Sender balance is lower than the requested amount.
    InsufficientBalance = 8,
    /// Spender allowance is lower than the requested amount.
    InsufficientAllowance = 9,
    /// Balance or supply arithmetic overflowed.
    Overflow = 10,
}

// ── Event symbols ────────────────────────────────────────────
const EVENT_INIT: Symbol = symbol_short!("init");
const EVENT_NFT_SET: Symbol = symbol_short!("nft_set");
const EVENT_MINT: Symbol = symbol_short!("mint");
const EVENT_TRANSFER: Symbol = symbol_short!("transfer");
const EVENT_APPROVE: Symbol = symbol_short!("approve");

/// Contract version identifier. Bumped when storage or semantics change.
pub const CONTRACT_VERSION: u32 = 1;

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct TokenMetadata {
    pub decimals: u32,
    pub name: String,
    pub symbol: String,
}

#[contracttype]
pub enum DataKey {
    /// Admin allowed to bind the NFT contract.
    Admin,
    /// Name, symbol and decimals.
    Metadata,
    /// The only address allowed to mint (the batch NFT sale contract).
    NftContract,
    /// Sum of all balances.
    TotalSupply,
    Balance(Address),
    /// Per (owner, spender): remaining allowance.
    Allowance(Address, Address),
}

// ── Contract ─────────────────────────────────────────────────
#[contract]
pub struct RewardToken;

#[contractimpl]
impl RewardToken {
    fn require_admin(env: &Env, caller: &Address) -> Result<(), RewardTokenError> {
        let admin: Address = env
            .storage()
            .persistent()
            .get(&DataKey::Admin)
            .ok_or(RewardTokenError::NotInitialized)?;
        if *caller != admin {
            return Err(RewardTokenError::NotOwner);
        }
        Ok(())
    }

    fn require_positive_amount(amount: i128) -> Result<(), RewardTokenError> {
        if amount <= 0 {
            return Err(RewardTokenError::InvalidAmount);
        }
        Ok(())
    }

    fn read_balance(env: &Env, id: &Address) -> i128 {
        let key = DataKey::Balance(id.clone());
        env.storage().persistent().get(&key).unwrap_or(0)
    }

    fn write_balance(env: &Env, id: &Address, amount: i128) {
        let key = DataKey::Balance(id.clone());
        env.storage().persistent().set(&key, &amount);
    }

    fn move_balance(
        env: &Env,
        from: &Address,
        to: &Address,
        amount: i128,
    ) -> Result<(), RewardTokenError> {
        let from_balance = Self::read_balance(env, from);
        if from_balance < amount {
            return Err(RewardTokenError::InsufficientBalance);
        }
        if from == to {
            return Ok(());
        }
        let to_balance = Self::read_balance(env, to)
            .checked_add(amount)
            .ok_or(RewardTokenError::Overflow)?;
        Self::write_balance(env, from, from_balance - amount);
        Self::write_balance(env, to, to_balance);
        Ok(())
    }

    /// Initialize admin and token metadata. Can only be called once.
    pub fn initialize(
        env: Env,
        admin: Address,
        decimals: u32,
        name: String,
        symbol: String,
    ) -> Result<(), RewardTokenError> {
        if env.storage().persistent().has(&DataKey::Admin) {
            return Err(RewardTokenError::AlreadyInitialized);
        }
        env.storage().persistent().set(&DataKey::Admin, &admin);
        env.storage().persistent().set(
            &DataKey::Metadata,
            &TokenMetadata {
                decimals,
                name,
                symbol,
            },
        );
        env.storage().persistent().set(&DataKey::TotalSupply, &0i128);
        env.events().publish((EVENT_INIT, admin), decimals);
        Ok(())
    }

    /// Get the admin address, if set.
    pub fn get_admin(env: Env) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Admin)
    }

    // ── Minter binding ────────────────────────────────────────

    /// Bind the batch NFT contract as the sole minter. Admin only, one-time:
    /// fails with `NftContractAlreadySet` on any later call, whatever the address.
    pub fn set_nft_contract(
        env: Env,
        admin: Address,
        nft: Address,
    ) -> Result<(), RewardTokenError> {
        admin.require_auth();
        Self::require_admin(&env, &admin)?;

        if env.storage().persistent().has(&DataKey::NftContract) {
            return Err(RewardTokenError::NftContractAlreadySet);
        }
        if nft == env.current_contract_address() {
            return Err(RewardTokenError::InvalidAddress);
        }

        env.storage().persistent().set(&DataKey::NftContract, &nft);
        env.events().publish((EVENT_NFT_SET, admin), nft);
        Ok(())
    }

    /// The bound NFT contract (minter), if any.
    pub fn nft_contract(env: Env) -> Option<Address> {
        env.storage().persistent().get(&DataKey::NftContract)
    }

    /// Mint `amount` to `to`. Only the bound NFT contract may mint; every other
    /// caller, the admin included, gets `NotMinter`.
    pub fn mint(
        env: Env,
        minter: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), RewardTokenError> {
        minter.require_auth();

        let bound: Option<Address> = env.storage().persistent().get(&DataKey::NftContract);
        if bound.as_ref() != Some(&minter) {
            return Err(RewardTokenError::NotMinter);
        }
        Self::require_positive_amount(amount)?;

        let supply = Self::total_supply(env.clone())
            .checked_add(amount)
            .ok_or(RewardTokenError::Overflow)?;
        let balance = Self::read_balance(&env, &to)
            .checked_add(amount)
            .ok_or(RewardTokenError::Overflow)?;

        Self::write_balance(&env, &to, balance);
        env.storage().persistent().set(&DataKey::TotalSupply, &supply);

        env.events().publish((EVENT_MINT, to), amount);
        Ok(())
    }

    // ── Fungible token surface ────────────────────────────────

    pub fn total_supply(env: Env) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        Self::read_balance(&env, &id)
    }

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), RewardTokenError> {
        from.require_auth();
        Self::require_positive_amount(amount)?;
        Self::move_balance(&env, &from, &to, amount)?;
        env.events().publish((EVENT_TRANSFER, from, to), amount);
        Ok(())
    }

    /// Set the allowance of `spender` over `from`'s balance. Overwrites any
    /// previous allowance; 0 revokes.
    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), RewardTokenError> {
        from.require_auth();
        if amount < 0 {
            return Err(RewardTokenError::InvalidAmount);
        }
        let key = DataKey::Allowance(from.clone(), spender.clone());
        env.storage().persistent().set(&key, &amount);
        env.events().publish((EVENT_APPROVE, from, spender), amount);
        Ok(())
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        let key = DataKey::Allowance(from, spender);
        env.storage().persistent().get(&key).unwrap_or(0)
    }

    /// Move `amount` from `from` to `to` using `spender`'s allowance.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), RewardTokenError> {
        spender.require_auth();
        Self::require_positive_amount(amount)?;

        let key = DataKey::Allowance(from.clone(), spender);
        let allowance: i128 = env.storage().persistent().get(&key).unwrap_or(0);
        if allowance < amount {
            return Err(RewardTokenError::InsufficientAllowance);
        }
        Self::move_balance(&env, &from, &to, amount)?;
        if from != to {
            env.storage()
                .persistent()
                .set(&key, &(allowance - amount));
        }

        env.events().publish((EVENT_TRANSFER, from, to), amount);
        Ok(())
    }

    pub fn decimals(env: Env) -> u32 {
        Self::metadata(&env).map(|m| m.decimals).unwrap_or(0)
    }

    pub fn name(env: Env) -> String {
        Self::metadata(&env)
            .map(|m| m.name)
            .unwrap_or_else(|| String::from_str(&env, ""))
    }

    pub fn symbol(env: Env) -> String {
        Self::metadata(&env)
            .map(|m| m.symbol)
            .unwrap_or_else(|| String::from_str(&env, ""))
    }

    fn metadata(env: &Env) -> Option<TokenMetadata> {
        env.storage().persistent().get(&DataKey::Metadata)
    }

    /// Return the current contract version.
    pub fn get_version(env: Env) -> u32 {
        let _ = env;
        CONTRACT_VERSION
    }
}

mod test;
