//! Stand-in for the nois proxy: records randomness jobs and publishes beacons on demand.
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Coin, Deps, DepsMut, Env, HexBinary, MessageInfo, Order,
    StdError, StdResult, Timestamp, WasmMsg,
};
use cw_storage_plus::{Item, Map};
use lottery::msg::ExecuteMsg as LotteryExecuteMsg;
use nois::NoisCallback;
use utils::{payment::fee_funds, types::Response};

#[cw_serde]
pub struct Job {
    pub requester: Addr,
    pub job_id: String,
    pub after: Option<Timestamp>,
}

const FEE: Item<Coin> = Item::new("fee");
const JOBS: Map<(Addr, String), Job> = Map::new("jobs");

#[cw_serde]
pub struct InstantiateMsg {
    /// What a requester has to pay per job
    pub fee: Coin,
}

/// The first two variants have the same shape as `nois::ProxyExecuteMsg`
#[cw_serde]
pub enum ExecuteMsg {
    GetNextRandomness {
        job_id: String,
    },
    GetRandomnessAfter {
        after: Timestamp,
        job_id: String,
    },
    /// Test hook, delivers `randomness` to the requester of a registered job
    Publish {
        requester: String,
        job_id: String,
        randomness: HexBinary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Vec<Job>)]
    Jobs {},
}

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    FEE.save(deps.storage, &msg.fee)?;
    Ok(Response::new())
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Jobs {} => {
            let jobs = JOBS
                .range(deps.storage, None, None, Order::Ascending)
                .map(|item| Ok(item?.1))
                .collect::<StdResult<Vec<Job>>>()?;
            to_json_binary(&jobs)
        }
    }
}

pub fn execute(deps: DepsMut, env: Env, info: MessageInfo, msg: ExecuteMsg) -> StdResult<Response> {
    match msg {
        ExecuteMsg::GetNextRandomness { job_id } => register_job(deps, info, job_id, None),
        ExecuteMsg::GetRandomnessAfter { after, job_id } => {
            register_job(deps, info, job_id, Some(after))
        }
        ExecuteMsg::Publish {
            requester,
            job_id,
            randomness,
        } => publish(deps, env, requester, job_id, randomness),
    }
}

fn register_job(
    deps: DepsMut,
    info: MessageInfo,
    job_id: String,
    after: Option<Timestamp>,
) -> StdResult<Response> {
    let fee = FEE.load(deps.storage)?;
    if info.funds != fee_funds(&fee) {
        return Err(StdError::generic_err("Nois not enough funds sent to proxy"));
    }
    JOBS.save(
        deps.storage,
        (info.sender.clone(), job_id.clone()),
        &Job {
            requester: info.sender,
            job_id,
            after,
        },
    )?;
    Ok(Response::new())
}

fn publish(
    deps: DepsMut,
    env: Env,
    requester: String,
    job_id: String,
    randomness: HexBinary,
) -> StdResult<Response> {
    let requester = deps.api.addr_validate(&requester)?;
    let key = (requester.clone(), job_id.clone());
    let job = JOBS.load(deps.storage, key.clone())?;

    if let Some(after) = job.after {
        if env.block.time < after {
            return Err(StdError::generic_err(
                "Too soon to test-trigger randomness providing",
            ));
        }
    }
    JOBS.remove(deps.storage, key);

    Ok(Response::new().add_message(WasmMsg::Execute {
        contract_addr: requester.to_string(),
        msg: to_json_binary(&LotteryExecuteMsg::NoisReceive {
            callback: NoisCallback {
                job_id,
                published: env.block.time,
                randomness,
            },
        })?,
        funds: vec![],
    }))
}
