use cosmwasm_std::{Coin, StdError};
use cw_utils::PaymentError;
use thiserror::Error;

use crate::state::LotteryStatus;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized.")]
    Unauthorized,

    #[error("Proxy address is not valid")]
    InvalidProxyAddress,

    #[error("Name is not in the expected format (3-50 UTF-8 bytes)")]
    InvalidName {},

    #[error("The entry fee must be a positive amount")]
    InvalidEntryFee {},

    #[error("The nois proxy fee can't be paid in the pool denom ({denom})")]
    ProviderFeeDenomConflict { denom: String },

    #[error("The randomness delay is too long, max allowed is {max} seconds")]
    RandomnessDelayTooLong { max: u64 },

    #[error("Entry fee not met, required {required}, paid {paid}")]
    InsufficientFee { required: Coin, paid: Coin },

    #[error("The lottery is not open for entries")]
    LotteryNotOpen {},

    #[error("Upkeep not needed. Balance : {balance}, participants : {participants}, state : {state}")]
    UpkeepNotNeeded {
        balance: Coin,
        participants: u32,
        state: LotteryStatus,
    },

    // callback should only be allowed to be called by the proxy contract
    // otherwise anyone can cut the randomness workflow and cheat the randomness
    #[error("Unauthorized Receive execution")]
    UnauthorizedReceive,

    #[error("Randomness job {job_id} does not match the pending request")]
    InvalidRequest { job_id: String },

    #[error("Received invalid randomness")]
    InvalidRandomness,

    #[error("Paying the pool to {winner} failed: {reason}")]
    PayoutFailed { winner: String, reason: String },

    #[error("The lottery is not waiting for randomness")]
    NotDrawing {},

    #[error("Unknown reply id {id}")]
    UnknownReplyId { id: u64 },

    #[error("Cannot migrate from different contract type: {previous_contract}")]
    CannotMigrate { previous_contract: String },

    #[error("An unplanned bug just happened :/")]
    ContractBug {},
}
