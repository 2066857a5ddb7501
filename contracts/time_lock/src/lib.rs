#![no_std]

//! Time-Locked Escrow Contract
//!
//! Holds a single deposit until an unlock timestamp. The owner and the
//! unlock time are fixed when the lock is created; after the unlock time
//! the owner (and only the owner) can withdraw the whole balance once.
//!
//! Funds are held as a token balance of the contract address, so the
//! balance is always read back from the token contract rather than from a
//! stored counter.

use shared_utils::{AccessControl, ErrorHelper, Events, Storage, TimeUtils, Validation};
use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env};

mod error;

pub use error::LockError;


/// Storage key constants
mod keys {
    use soroban_sdk::{symbol_short, Symbol};

    pub const LOCK: Symbol = symbol_short!("LOCK");
}

/// Escrow record, written once by `initialize`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockInfo {
    /// Only principal allowed to withdraw
    pub owner: Address,
    /// Asset contract holding the deposit
    pub token: Address,
    /// Earliest ledger timestamp at which withdrawal is allowed
    pub unlock_time: u64,
    /// Amount deposited at creation
    pub amount: i128,
    pub created_at: u64,
    pub withdrawn: bool,
}

fn fail(e: &Env, context: &str, err: LockError) -> LockError {
    ErrorHelper::reject(e, context, err.code(), err)
}

fn ensure(e: &Env, condition: bool, context: &str, err: LockError) -> Result<(), LockError> {
    ErrorHelper::ensure(e, condition, context, err.code(), err)
}

fn load_lock(e: &Env, context: &str) -> Result<LockInfo, LockError> {
    Storage::get::<LockInfo>(e, &keys::LOCK).ok_or_else(|| fail(e, context, LockError::NotInitialized))
}

#[contract]
pub struct LockContract;

#[contractimpl]
impl LockContract {
    /// Create the lock and take custody of the deposit
    ///
    /// # Arguments
    /// * `owner` - Creator of the lock; funds the deposit and is the only
    ///   address allowed to withdraw
    /// * `token` - Asset contract of the deposit
    /// * `unlock_time` - Ledger timestamp after which withdrawal is allowed;
    ///   must be strictly in the future
    /// * `amount` - Amount moved from `owner` into the lock
    ///
    /// # Errors
    /// * `AlreadyInitialized` - a lock already exists
    /// * `InvalidSchedule` - `unlock_time` is not after the current ledger time
    ///   (checked before the amount)
    /// * `InvalidAmount` - `amount <= 0`
    pub fn initialize(
        e: Env,
        owner: Address,
        token: Address,
        unlock_time: u64,
        amount: i128,
    ) -> Result<(), LockError> {
        const CONTEXT: &str = "time_lock::initialize";

        if Storage::is_initialized(&e) {
            return Err(fail(&e, CONTEXT, LockError::AlreadyInitialized));
        }
        owner.require_auth();

        ensure(
            &e,
            Validation::is_valid_unlock_time(&e, unlock_time),
            CONTEXT,
            LockError::InvalidSchedule,
        )?;
        ensure(&e, Validation::is_positive(amount), CONTEXT, LockError::InvalidAmount)?;

        token::Client::new(&e, &token).transfer(&owner, &e.current_contract_address(), &amount);

        let lock = LockInfo {
            owner: owner.clone(),
            token,
            unlock_time,
            amount,
            created_at: TimeUtils::now(&e),
            withdrawn: false,
        };
        Storage::set(&e, &keys::LOCK, &lock);
        Storage::set_initialized(&e);
        Storage::extend_instance_ttl(&e);

        Events::emit_locked(&e, &owner, amount, unlock_time);
        Ok(())
    }

    /// Pay the whole held balance out to the owner
    ///
    /// Timing is checked before ownership, so anyone calling before the
    /// unlock time gets `Premature`.
    ///
    /// # Errors
    /// * `NotInitialized` - no lock exists
    /// * `Premature` - the ledger time is before `unlock_time`
    /// * `Unauthorized` - `caller` is not the owner
    /// * `AlreadyWithdrawn` - the funds were already paid out
    pub fn withdraw(e: Env, caller: Address) -> Result<(), LockError> {
        const CONTEXT: &str = "time_lock::withdraw";

        let mut lock = load_lock(&e, CONTEXT)?;

        ensure(
            &e,
            TimeUtils::has_reached(&e, lock.unlock_time),
            CONTEXT,
            LockError::Premature,
        )?;
        AccessControl::require_owner(
            &e,
            &caller,
            &lock.owner,
            CONTEXT,
            LockError::Unauthorized.code(),
            LockError::Unauthorized,
        )?;
        ensure(&e, !lock.withdrawn, CONTEXT, LockError::AlreadyWithdrawn)?;

        let contract = e.current_contract_address();
        let token_client = token::Client::new(&e, &lock.token);
        let amount = token_client.balance(&contract);

        lock.withdrawn = true;
        Storage::set(&e, &keys::LOCK, &lock);
        Storage::extend_instance_ttl(&e);

        if amount > 0 {
            token_client.transfer(&contract, &lock.owner, &amount);
        }

        Events::emit_withdrawal(&e, amount);
        Ok(())
    }

    /// Owner of the lock
    pub fn owner(e: Env) -> Result<Address, LockError> {
        Ok(load_lock(&e, "time_lock::owner")?.owner)
    }

    /// Unlock timestamp of the lock
    pub fn unlock_time(e: Env) -> Result<u64, LockError> {
        Ok(load_lock(&e, "time_lock::unlock_time")?.unlock_time)
    }

    /// Asset contract holding the deposit
    pub fn token(e: Env) -> Result<Address, LockError> {
        Ok(load_lock(&e, "time_lock::token")?.token)
    }

    /// Balance currently held by the lock, as reported by the token contract
    pub fn balance(e: Env) -> Result<i128, LockError> {
        let lock = load_lock(&e, "time_lock::balance")?;
        Ok(token::Client::new(&e, &lock.token).balance(&e.current_contract_address()))
    }

    /// Full escrow record
    pub fn get_lock(e: Env) -> Result<LockInfo, LockError> {
        load_lock(&e, "time_lock::get_lock")
    }

    /// Whether the ledger clock has reached the unlock time
    pub fn is_unlocked(e: Env) -> Result<bool, LockError> {
        let lock = load_lock(&e, "time_lock::is_unlocked")?;
        Ok(TimeUtils::has_reached(&e, lock.unlock_time))
    }

    /// Seconds left until the unlock time (0 once unlocked)
    pub fn time_remaining(e: Env) -> Result<u64, LockError> {
        let lock = load_lock(&e, "time_lock::time_remaining")?;
        Ok(TimeUtils::time_remaining(&e, lock.unlock_time))
    }

    pub fn is_withdrawn(e: Env) -> Result<bool, LockError> {
        Ok(load_lock(&e, "time_lock::is_withdrawn")?.withdrawn)
    }
}
