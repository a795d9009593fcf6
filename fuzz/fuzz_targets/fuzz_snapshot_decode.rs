#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Attempt to deserialize arbitrary bytes as the snapshot types.
    // Malformed input must produce an error, never a panic.

    let _ = bincode::deserialize::<granary_pool::PoolState>(data);

    let _ = bincode::deserialize::<granary_store::StakeRecord>(data);

    let _ = bincode::deserialize::<granary_types::Timestamp>(data);

    let _ = bincode::deserialize::<granary_types::PoolParams>(data);
});
