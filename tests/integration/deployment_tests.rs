// Deployment tests: what a freshly created lock records and holds

#![cfg(test)]

use crate::assert_reverted_with;
use crate::harness::*;

#[test]
fn test_should_set_the_right_unlock_time() {
    let harness = LockHarness::deploy_one_year_lock();

    assert_eq!(harness.lock_client().unlock_time(), harness.unlock_time);
    assert_eq!(harness.unlock_time, GENESIS_TIMESTAMP + ONE_YEAR_IN_SECS);
}

#[test]
fn test_should_set_the_right_owner() {
    let harness = LockHarness::deploy_one_year_lock();

    assert_eq!(harness.lock_client().owner(), harness.accounts.owner);
}

#[test]
fn test_should_receive_and_store_the_funds_to_lock() {
    let harness = LockHarness::deploy_one_year_lock();

    assert_eq!(harness.lock_balance(), ONE_GWEI);
    assert_eq!(harness.lock_client().balance(), ONE_GWEI);
    assert_eq!(
        harness.balance(&harness.accounts.owner),
        DEFAULT_OWNER_BALANCE - ONE_GWEI
    );
}

#[test]
fn test_should_record_the_full_escrow() {
    let harness = LockHarness::deploy_one_year_lock();
    let lock = harness.lock_client().get_lock();

    assert_eq!(lock.owner, harness.accounts.owner);
    assert_eq!(lock.token, harness.token);
    assert_eq!(lock.unlock_time, harness.unlock_time);
    assert_eq!(lock.amount, ONE_GWEI);
    assert_eq!(lock.created_at, GENESIS_TIMESTAMP);
    assert!(!lock.withdrawn);
}

#[test]
fn test_should_fail_if_the_unlock_time_is_not_in_the_future() {
    let harness = LockHarness::undeployed();
    let latest_time = harness.current_timestamp();

    assert_reverted_with!(
        harness.try_deploy_lock(latest_time, ONE_GWEI),
        "Unlock time should be in the future"
    );
    assert_reverted_with!(
        harness.try_deploy_lock(latest_time - 1, ONE_GWEI),
        "Unlock time should be in the future"
    );
}

#[test]
fn test_failed_deployment_keeps_funds_with_owner() {
    let harness = LockHarness::undeployed();

    assert_reverted_with!(
        harness.try_deploy_lock(harness.current_timestamp(), ONE_GWEI),
        "Unlock time should be in the future"
    );
    assert_eq!(harness.balance(&harness.accounts.owner), DEFAULT_OWNER_BALANCE);
    assert_eq!(harness.lock_balance(), 0);
}

#[test]
fn test_should_fail_with_a_non_positive_deposit() {
    let harness = LockHarness::undeployed();
    let unlock_time = harness.current_timestamp() + ONE_YEAR_IN_SECS;

    assert_reverted_with!(
        harness.try_deploy_lock(unlock_time, 0),
        "Invalid amount: must be greater than zero"
    );
}

#[test]
fn test_should_not_deploy_twice() {
    let harness = LockHarness::deploy_one_year_lock();

    assert_reverted_with!(
        harness.try_deploy_lock(harness.unlock_time + 1, ONE_GWEI),
        "Contract already initialized"
    );
    assert_eq!(harness.lock_balance(), ONE_GWEI);
}
