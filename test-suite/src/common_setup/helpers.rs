use anyhow::Error;
use cosmwasm_std::{HexBinary, Timestamp};
use super::app::LotteryApp;
use std::fmt::Debug;

pub fn setup_block_time(router: &mut LotteryApp, nanos: u64, height: Option<u64>) {
    let mut block = router.block_info();
    block.time = Timestamp::from_nanos(nanos);
    if let Some(h) = height {
        block.height = h;
    }
    router.set_block(block);
}

pub fn plus_block_seconds(router: &mut LotteryApp, seconds: u64) {
    router.update_block(|block| {
        block.time = block.time.plus_seconds(seconds);
        block.height += seconds / 5 + 1;
    });
}

pub fn assert_error<T: Debug>(res: Result<T, Error>, expected: String) {
    assert_eq!(res.unwrap_err().root_cause().to_string(), expected);
}

/// A beacon whose big-endian value is `value`
pub fn randomness_for(value: u64) -> HexBinary {
    let mut bytes = [0u8; 32];
    bytes[24..].copy_from_slice(&value.to_be_bytes());
    HexBinary::from(bytes.to_vec())
}
