use anyhow::Error as anyhow_error;
use cosmwasm_std::{coins, Addr, Binary, HexBinary};
use cw_multi_test::{AppResponse, Executor};
use lottery::msg::{ExecuteMsg as LotteryExecuteMsg, InstantiateMsg};
use nois::NoisCallback;
use randomness::job_id;
use utils::state::NATIVE_DENOM;

use crate::common_setup::{
    app::LotteryApp, msg::LotteryContracts, nois_proxy, setup_lottery::ENTRY_FEE,
};

use super::test_msgs::InstantiateLotteryParams;

pub fn instantiate_lottery_contract(
    params: InstantiateLotteryParams,
) -> Result<Addr, anyhow_error> {
    params.app.instantiate_contract(
        params.code_id,
        params.sender,
        &InstantiateMsg {
            name: params.name,
            owner: params.owner,
            entry_fee: params.entry_fee,
            interval: params.interval,
            nois_proxy_addr: params.nois_proxy_addr,
            nois_proxy_coin: params.nois_proxy_coin,
            randomness_delay: params.randomness_delay,
        },
        &[],
        "lottery",
        None,
    )
}

/// Enters with exactly the entry fee
pub fn enter(
    app: &mut LotteryApp,
    contracts: &LotteryContracts,
    entrant: &Addr,
) -> Result<AppResponse, anyhow_error> {
    enter_with_funds(app, contracts, entrant, ENTRY_FEE)
}

pub fn enter_with_funds(
    app: &mut LotteryApp,
    contracts: &LotteryContracts,
    entrant: &Addr,
    amount: u128,
) -> Result<AppResponse, anyhow_error> {
    app.execute_contract(
        entrant.clone(),
        contracts.lottery.clone(),
        &LotteryExecuteMsg::Enter {},
        &coins(amount, NATIVE_DENOM),
    )
}

pub fn trigger_draw(
    app: &mut LotteryApp,
    contracts: &LotteryContracts,
    sender: &Addr,
    context: Option<Binary>,
) -> Result<AppResponse, anyhow_error> {
    app.execute_contract(
        sender.clone(),
        contracts.lottery.clone(),
        &LotteryExecuteMsg::TriggerDraw { context },
        &[],
    )
}

pub fn resubmit_randomness(
    app: &mut LotteryApp,
    contracts: &LotteryContracts,
    sender: &Addr,
) -> Result<AppResponse, anyhow_error> {
    app.execute_contract(
        sender.clone(),
        contracts.lottery.clone(),
        &LotteryExecuteMsg::ResubmitRandomness {},
        &[],
    )
}

/// Has the mock proxy publish `randomness` for the given request
pub fn publish_randomness(
    app: &mut LotteryApp,
    contracts: &LotteryContracts,
    request_id: u64,
    randomness: HexBinary,
) -> Result<AppResponse, anyhow_error> {
    app.execute_contract(
        Addr::unchecked("nois-operator"),
        contracts.nois.clone(),
        &nois_proxy::ExecuteMsg::Publish {
            requester: contracts.lottery.to_string(),
            job_id: job_id(request_id),
            randomness,
        },
        &[],
    )
}

/// Calls the lottery callback directly, impersonating the proxy when `sender` is the proxy address
pub fn deliver_callback(
    app: &mut LotteryApp,
    contracts: &LotteryContracts,
    sender: &Addr,
    job_id: &str,
    randomness: HexBinary,
) -> Result<AppResponse, anyhow_error> {
    let published = app.block_info().time;
    app.execute_contract(
        sender.clone(),
        contracts.lottery.clone(),
        &LotteryExecuteMsg::NoisReceive {
            callback: NoisCallback {
                job_id: job_id.to_string(),
                published,
                randomness,
            },
        },
        &[],
    )
}
