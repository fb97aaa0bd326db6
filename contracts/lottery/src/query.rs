use cosmwasm_std::{Addr, Binary, Deps, Env, Order, StdResult};
use cw_storage_plus::Bound;
use utils::state::{DEFAULT_LIMIT, MAX_LIMIT};

use crate::{
    msg::{LotteryResponse, ParticipantsResponse, ReadinessResponse, RoundsResponse},
    state::{Config, RoundResult, CONFIG, LOTTERY, PARTICIPANTS, ROUNDS},
    utils::{check_readiness, pool_balance},
};

pub fn query_config(deps: Deps) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn query_lottery(deps: Deps, env: Env) -> StdResult<LotteryResponse> {
    let config = CONFIG.load(deps.storage)?;
    let lottery = LOTTERY.load(deps.storage)?;
    let pool = pool_balance(deps, &env, &config)?;

    Ok(LotteryResponse {
        state: lottery.state,
        round: lottery.round,
        participant_count: lottery.participant_count,
        last_timestamp: lottery.last_timestamp,
        pending_request_id: lottery.pending_request_id,
        next_draw_time: lottery.next_draw_time(config.interval),
        recent_winner: lottery.recent_winner,
        pool: pool.amount,
    })
}

/// Read-only readiness predicate polled by the automation trigger.
/// `check_data` is handed back untouched as the context for `TriggerDraw`.
pub fn query_is_ready(
    deps: Deps,
    env: Env,
    check_data: Option<Binary>,
) -> StdResult<ReadinessResponse> {
    let config = CONFIG.load(deps.storage)?;
    let lottery = LOTTERY.load(deps.storage)?;
    let readiness = check_readiness(deps, &env, &config, &lottery)?;

    Ok(ReadinessResponse {
        ready: readiness.ready,
        context: check_data.unwrap_or_default(),
    })
}

/// Query the entrants of a round in entry order, the current round by default
pub fn query_participants(
    deps: Deps,
    round: Option<u64>,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<ParticipantsResponse> {
    let round = match round {
        Some(round) => round,
        None => LOTTERY.load(deps.storage)?.round,
    };
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let participants = PARTICIPANTS
        .prefix(round)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|kv_item| Ok(kv_item?.1))
        .collect::<StdResult<Vec<Addr>>>()?;

    Ok(ParticipantsResponse {
        round,
        participants,
    })
}

pub fn query_participant(deps: Deps, index: u32) -> StdResult<Addr> {
    let round = LOTTERY.load(deps.storage)?.round;
    PARTICIPANTS.load(deps.storage, (round, index))
}

pub fn query_round(deps: Deps, round: u64) -> StdResult<RoundResult> {
    ROUNDS.load(deps.storage, round)
}

/// Completed rounds, most recent first
pub fn query_rounds(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<RoundsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let end = start_after.map(Bound::exclusive);

    let rounds = ROUNDS
        .range(deps.storage, None, end, Order::Descending)
        .take(limit)
        .map(|kv_item| Ok(kv_item?.1))
        .collect::<StdResult<Vec<RoundResult>>>()?;

    Ok(RoundsResponse { rounds })
}
