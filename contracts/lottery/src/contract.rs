#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Deps, DepsMut, Env, MessageInfo, QueryResponse, Reply, StdResult,
    SubMsgResult,
};
use cw2::{get_contract_version, set_contract_version};
use utils::types::Response;

use crate::{
    error::ContractError,
    execute::{
        execute_enter, execute_receive_nois, execute_resubmit_randomness, execute_trigger_draw,
    },
    msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
    query::{
        query_config, query_is_ready, query_lottery, query_participant, query_participants,
        query_round, query_rounds,
    },
    state::{Config, Lottery, CONFIG, LOTTERY},
};

// version info for migration info
pub const CONTRACT_NAME: &str = concat!("crates.io:", env!("CARGO_CRATE_NAME"));
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const PAYOUT_REPLY_ID: u64 = 1;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    msg.validate()?;

    let nois_proxy_addr = deps
        .api
        .addr_validate(&msg.nois_proxy_addr)
        .map_err(|_| ContractError::InvalidProxyAddress)?;

    let config = Config {
        name: msg.name,
        owner: deps
            .api
            .addr_validate(&msg.owner.unwrap_or_else(|| info.sender.to_string()))?,
        entry_fee: msg.entry_fee,
        interval: msg.interval,
        nois_proxy_addr,
        nois_proxy_coin: msg.nois_proxy_coin,
        randomness_delay: msg.randomness_delay.unwrap_or_default(),
    };

    CONFIG.save(deps.storage, &config)?;
    LOTTERY.save(deps.storage, &Lottery::new(env.block.time))?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "lottery")
        .add_attribute("owner", config.owner)
        .add_attribute("entry_fee", config.entry_fee.to_string())
        .add_attribute("interval", config.interval.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let previous = get_contract_version(deps.storage)?;
    if previous.contract != CONTRACT_NAME {
        return Err(ContractError::CannotMigrate {
            previous_contract: previous.contract,
        });
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("previous_version", previous.version))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Enter {} => execute_enter(deps, env, info),
        // The context is an opaque pass-through from `IsReady`
        ExecuteMsg::TriggerDraw { context: _ } => execute_trigger_draw(deps, env, info),
        ExecuteMsg::NoisReceive { callback } => execute_receive_nois(deps, env, info, callback),
        ExecuteMsg::ResubmitRandomness {} => execute_resubmit_randomness(deps, env, info),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::Lottery {} => to_json_binary(&query_lottery(deps, env)?)?,
        QueryMsg::Participants {
            round,
            start_after,
            limit,
        } => to_json_binary(&query_participants(deps, round, start_after, limit)?)?,
        QueryMsg::Participant { index } => to_json_binary(&query_participant(deps, index)?)?,
        QueryMsg::IsReady { check_data } => {
            to_json_binary(&query_is_ready(deps, env, check_data)?)?
        }
        QueryMsg::Round { round } => to_json_binary(&query_round(deps, round)?)?,
        QueryMsg::Rounds { start_after, limit } => {
            to_json_binary(&query_rounds(deps, start_after, limit)?)?
        }
    };
    Ok(response)
}

/// Only payout failures come back here. Failing the reply fails the randomness callback as a whole,
/// so the lottery stays in the drawing state with its participants.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        PAYOUT_REPLY_ID => match msg.result {
            SubMsgResult::Err(reason) => {
                let winner = LOTTERY
                    .load(deps.storage)?
                    .recent_winner
                    .map(|winner| winner.to_string())
                    .unwrap_or_default();
                Err(ContractError::PayoutFailed { winner, reason })
            }
            SubMsgResult::Ok(_) => Ok(Response::default()),
        },
        id => Err(ContractError::UnknownReplyId { id }),
    }
}
