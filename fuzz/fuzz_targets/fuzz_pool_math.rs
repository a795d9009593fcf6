#![no_main]

use libfuzzer_sys::fuzz_target;

use granary_pool::{emission, PoolState};
use granary_types::{AccountId, Timestamp};

fn word(data: &[u8], i: usize) -> u64 {
    let o = i * 8;
    u64::from_le_bytes([
        data[o],
        data[o + 1],
        data[o + 2],
        data[o + 3],
        data[o + 4],
        data[o + 5],
        data[o + 6],
        data[o + 7],
    ])
}

// Fuzz the accumulator arithmetic with arbitrary pool shapes and clocks.
// Every path must return an error instead of panicking.
fuzz_target!(|data: &[u8]| {
    if data.len() < 64 {
        return;
    }

    let mut state = PoolState::uninitialized(AccountId::from("creator"), AccountId::from("pool"));
    state.total_staked = word(data, 0) as u128;
    state.reward_pool_balance = word(data, 1) as u128;
    state.acc_reward_per_share = word(data, 2) as u128;
    state.weekly_reward_budget = word(data, 3) as u128;
    state.reward_period_secs = word(data, 4);
    state.last_reward_update = Timestamp::new(word(data, 5));

    let now = Timestamp::new(word(data, 6));
    let staked = word(data, 7) as u128;

    if let Ok(advance) = emission::advance_accumulator(&state, now) {
        // The funded-periods clamp keeps emission within the pool.
        assert!(advance.emitted <= state.reward_pool_balance);
        let _ = emission::pending_reward(staked, advance.new_acc_reward_per_share, 0);
    }

    // These must never panic
    let _ = emission::pending_reward(staked, state.acc_reward_per_share, word(data, 0) as u128);
    let _ = emission::current_apy_bps(state.weekly_reward_budget, state.total_staked);
});
