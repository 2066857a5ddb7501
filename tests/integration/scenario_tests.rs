// End-to-end lifecycle of a one-year lock

#![cfg(test)]

use crate::harness::*;
use crate::{assert_not_reverted, assert_reverted_with};

#[test]
fn test_one_year_lock_lifecycle() {
    let mut harness = LockHarness::undeployed();
    let owner = harness.accounts.owner.clone();
    let other = harness.accounts.other_account.clone();

    // Deposit 1_000_000_000 units, unlocking one year from now
    let unlock_time = harness.current_timestamp() + ONE_YEAR_IN_SECS;
    harness.deploy_lock(unlock_time, ONE_GWEI);
    assert_eq!(harness.lock_balance(), ONE_GWEI);
    assert_eq!(harness.lock_client().time_remaining(), ONE_YEAR_IN_SECS);

    // Withdrawing right away is premature
    assert_reverted_with!(harness.try_withdraw(&owner), "You can't withdraw yet");
    assert_eq!(harness.lock_balance(), ONE_GWEI);

    // Half way through it is still locked
    harness.advance_time(ONE_YEAR_IN_SECS / 2);
    assert!(!harness.lock_client().is_unlocked());
    assert_reverted_with!(harness.try_withdraw(&owner), "You can't withdraw yet");

    // At the unlock time only the owner may withdraw
    harness.time_travel_to_unlock();
    assert!(harness.lock_client().is_unlocked());
    assert_reverted_with!(harness.try_withdraw(&other), "You aren't the owner");
    assert_eq!(harness.lock_balance(), ONE_GWEI);

    let owner_before = harness.balance(&owner);
    assert_not_reverted!(harness.try_withdraw(&owner));
    assert_eq!(
        harness.withdrawal_events(),
        std::vec![WithdrawalEvent {
            amount: ONE_GWEI,
            timestamp: unlock_time,
        }]
    );
    assert_eq!(harness.balance(&owner), owner_before + ONE_GWEI);
    assert_eq!(harness.lock_balance(), 0);

    // Nothing is left to take
    assert_reverted_with!(harness.try_withdraw(&owner), "Funds already withdrawn");
    assert_eq!(harness.balance(&owner), DEFAULT_OWNER_BALANCE);
}

#[test]
fn test_locks_with_different_schedules_are_independent() {
    let short = {
        let mut harness = LockHarness::undeployed();
        let unlock_time = harness.current_timestamp() + 60;
        harness.deploy_lock(unlock_time, ONE_GWEI);
        harness
    };
    let long = LockHarness::deploy_one_year_lock();

    short.advance_time(60);
    long.advance_time(60);

    assert_not_reverted!(short.try_withdraw(&short.accounts.owner));
    assert_reverted_with!(
        long.try_withdraw(&long.accounts.owner),
        "You can't withdraw yet"
    );
}
