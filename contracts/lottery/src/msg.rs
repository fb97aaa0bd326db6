use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Coin, Timestamp, Uint128};
use nois::NoisCallback;
use utils::state::{is_valid_name, RANDOM_BEACON_MAX_REQUEST_TIME_IN_THE_FUTURE};

use crate::{
    error::ContractError,
    state::{Config, LotteryStatus, RoundResult},
};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub owner: Option<String>,
    pub entry_fee: Coin,
    /// Seconds between two draws
    pub interval: u64,
    pub nois_proxy_addr: String,
    pub nois_proxy_coin: Coin,
    pub randomness_delay: Option<u64>,
}

impl InstantiateMsg {
    pub fn validate(&self) -> Result<(), ContractError> {
        if !is_valid_name(&self.name) {
            return Err(ContractError::InvalidName {});
        }
        if self.entry_fee.amount.is_zero() || self.entry_fee.denom.is_empty() {
            return Err(ContractError::InvalidEntryFee {});
        }
        // the pool is the contract balance in the entry denom, paying the proxy from it would drain the prize
        if !self.nois_proxy_coin.amount.is_zero()
            && self.nois_proxy_coin.denom == self.entry_fee.denom
        {
            return Err(ContractError::ProviderFeeDenomConflict {
                denom: self.entry_fee.denom.clone(),
            });
        }
        if self.randomness_delay.unwrap_or_default() > RANDOM_BEACON_MAX_REQUEST_TIME_IN_THE_FUTURE {
            return Err(ContractError::RandomnessDelayTooLong {
                max: RANDOM_BEACON_MAX_REQUEST_TIME_IN_THE_FUTURE,
            });
        }
        Ok(())
    }
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Enter the current round. The entry fee is sent along with the message.
    Enter {},
    /// Closes entries and requests randomness. Anyone can call it once `IsReady` holds.
    TriggerDraw { context: Option<Binary> },
    /// Randomness delivered by the nois proxy
    NoisReceive { callback: NoisCallback },
    // Admin messages
    /// Replaces a randomness request that was never answered
    ResubmitRandomness {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    #[returns(LotteryResponse)]
    Lottery {},
    #[returns(ParticipantsResponse)]
    Participants {
        /// Defaults to the current round
        round: Option<u64>,
        start_after: Option<u32>,
        limit: Option<u32>,
    },
    #[returns(Addr)]
    Participant { index: u32 },
    #[returns(ReadinessResponse)]
    IsReady { check_data: Option<Binary> },
    #[returns(RoundResult)]
    Round { round: u64 },
    #[returns(RoundsResponse)]
    Rounds {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct LotteryResponse {
    pub state: LotteryStatus,
    pub round: u64,
    pub participant_count: u32,
    pub last_timestamp: Timestamp,
    pub pending_request_id: Option<u64>,
    pub recent_winner: Option<Addr>,
    /// Current pool, in the entry fee denom
    pub pool: Uint128,
    /// Earliest time (in seconds) a draw can be triggered
    pub next_draw_time: u64,
}

#[cw_serde]
pub struct ParticipantsResponse {
    pub round: u64,
    pub participants: Vec<Addr>,
}

#[cw_serde]
pub struct ReadinessResponse {
    pub ready: bool,
    /// The check data, to be forwarded to `TriggerDraw`
    pub context: Binary,
}

#[cw_serde]
pub struct RoundsResponse {
    pub rounds: Vec<RoundResult>,
}

#[cw_serde]
pub struct MigrateMsg {}
