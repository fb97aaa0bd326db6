// Denoms used by the test suite. A deployed lottery takes both from its `InstantiateMsg`.
pub const NATIVE_DENOM: &str = "ustars";
pub const NOIS_DENOM: &str = "unois";

// settings for pagination
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// A beacon cannot be requested further than this many seconds in the future (~3 months)
pub const RANDOM_BEACON_MAX_REQUEST_TIME_IN_THE_FUTURE: u64 = 7890000;

pub fn is_valid_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.len() < 3 || bytes.len() > 50 {
        return false;
    }
    true
}
