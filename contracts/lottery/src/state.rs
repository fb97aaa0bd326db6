use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, HexBinary, StdError, StdResult, Storage, Timestamp};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<Config> = Item::new("config");
pub const LOTTERY: Item<Lottery> = Item::new("lottery");
/// Entrants of every round, keyed by (round, entry index).
/// Only the current round's prefix is live, earlier prefixes are kept as history.
pub const PARTICIPANTS: Map<(u64, u32), Addr> = Map::new("participants");
pub const ROUNDS: Map<u64, RoundResult> = Map::new("rounds");

#[cw_serde]
pub struct Config {
    /// The name of the lottery
    pub name: String,
    /// The admin of the lottery, only allowed to resubmit a randomness request
    pub owner: Addr,
    /// Minimum amount an entrant has to pay. Its denom is the pool denom.
    pub entry_fee: Coin,
    /// Seconds that must pass after the last reset before a draw can be triggered
    pub interval: u64,
    pub nois_proxy_addr: Addr,
    /// Paid from the contract balance to the proxy on every randomness request
    pub nois_proxy_coin: Coin,
    /// Seconds between a draw trigger and the earliest beacon accepted for it (0: next beacon)
    pub randomness_delay: u64,
}

#[cw_serde]
#[derive(Copy)]
pub enum LotteryStatus {
    Open,
    Drawing,
}

impl fmt::Display for LotteryStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LotteryStatus::Open => write!(f, "open"),
            LotteryStatus::Drawing => write!(f, "drawing"),
        }
    }
}

#[cw_serde]
pub struct Lottery {
    pub state: LotteryStatus,
    /// Number of completed draws
    pub round: u64,
    pub participant_count: u32,
    /// Instantiation time, then the time of the last reset
    pub last_timestamp: Timestamp,
    /// Set exactly while the lottery is drawing
    pub pending_request_id: Option<u64>,
    pub recent_winner: Option<Addr>,
    pub next_request_id: u64,
}

impl Lottery {
    pub fn new(now: Timestamp) -> Self {
        Self {
            state: LotteryStatus::Open,
            round: 0,
            participant_count: 0,
            last_timestamp: now,
            pending_request_id: None,
            recent_winner: None,
            // 0 is never handed out
            next_request_id: 1,
        }
    }

    fn allocate_request_id(&mut self) -> u64 {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        request_id
    }

    /// Closes entries and returns the id of the randomness request to send.
    pub fn begin_draw(&mut self) -> u64 {
        let request_id = self.allocate_request_id();
        self.state = LotteryStatus::Drawing;
        self.pending_request_id = Some(request_id);
        request_id
    }

    /// Replaces the pending request, the previous id becomes stale.
    pub fn reissue_request(&mut self) -> u64 {
        let request_id = self.allocate_request_id();
        self.pending_request_id = Some(request_id);
        request_id
    }

    /// Resets the lottery for the next round. Participants and the pending request are cleared together.
    pub fn complete_round(&mut self, winner: Addr, now: Timestamp) {
        self.recent_winner = Some(winner);
        self.round += 1;
        self.participant_count = 0;
        self.last_timestamp = now;
        self.state = LotteryStatus::Open;
        self.pending_request_id = None;
    }

    pub fn next_draw_time(&self, interval: u64) -> u64 {
        self.last_timestamp.seconds().saturating_add(interval)
    }
}

#[cw_serde]
pub struct RoundResult {
    pub round: u64,
    pub request_id: u64,
    pub winner: Addr,
    pub winner_index: u32,
    pub prize: Coin,
    pub randomness: HexBinary,
    pub participant_count: u32,
    pub completed_at: Timestamp,
}

/// Appends `entrant` to the current round and returns its entry index
pub fn add_participant(
    storage: &mut dyn Storage,
    lottery: &mut Lottery,
    entrant: &Addr,
) -> StdResult<u32> {
    let index = lottery.participant_count;
    PARTICIPANTS.save(storage, (lottery.round, index), entrant)?;
    lottery.participant_count = index
        .checked_add(1)
        .ok_or_else(|| StdError::generic_err("participant limit reached"))?;
    Ok(index)
}
