use cosmwasm_std::{Addr, Binary, Uint128};
use lottery::{
    msg::{LotteryResponse, ParticipantsResponse, QueryMsg, ReadinessResponse, RoundsResponse},
    state::{Config, RoundResult},
};

use crate::common_setup::{app::LotteryApp, msg::LotteryContracts, nois_proxy};

pub fn lottery_info(app: &LotteryApp, contracts: &LotteryContracts) -> LotteryResponse {
    app.wrap()
        .query_wasm_smart(contracts.lottery.clone(), &QueryMsg::Lottery {})
        .unwrap()
}

pub fn lottery_config(app: &LotteryApp, contracts: &LotteryContracts) -> Config {
    app.wrap()
        .query_wasm_smart(contracts.lottery.clone(), &QueryMsg::Config {})
        .unwrap()
}

pub fn participants(app: &LotteryApp, contracts: &LotteryContracts, round: Option<u64>) -> ParticipantsResponse {
    app.wrap()
        .query_wasm_smart(
            contracts.lottery.clone(),
            &QueryMsg::Participants {
                round,
                start_after: None,
                limit: None,
            },
        )
        .unwrap()
}

pub fn is_ready(app: &LotteryApp, contracts: &LotteryContracts, check_data: Option<Binary>) -> ReadinessResponse {
    app.wrap()
        .query_wasm_smart(contracts.lottery.clone(), &QueryMsg::IsReady { check_data })
        .unwrap()
}

pub fn round_result(app: &LotteryApp, contracts: &LotteryContracts, round: u64) -> RoundResult {
    app.wrap()
        .query_wasm_smart(contracts.lottery.clone(), &QueryMsg::Round { round })
        .unwrap()
}

pub fn rounds(app: &LotteryApp, contracts: &LotteryContracts) -> RoundsResponse {
    app.wrap()
        .query_wasm_smart(
            contracts.lottery.clone(),
            &QueryMsg::Rounds {
                start_after: None,
                limit: None,
            },
        )
        .unwrap()
}

pub fn balance(app: &LotteryApp, addr: &Addr, denom: &str) -> Uint128 {
    app.wrap().query_balance(addr, denom).unwrap().amount
}

pub fn pending_jobs(app: &LotteryApp, contracts: &LotteryContracts) -> Vec<nois_proxy::Job> {
    app.wrap()
        .query_wasm_smart(contracts.nois.clone(), &nois_proxy::QueryMsg::Jobs {})
        .unwrap()
}

/// Removes every coin the lottery holds in `denom`
pub fn drain_balance(app: &mut LotteryApp, addr: &Addr, denom: &str) {
    let keep: Vec<_> = app
        .wrap()
        .query_all_balances(addr)
        .unwrap()
        .into_iter()
        .filter(|c| c.denom != denom)
        .collect();
    let addr = addr.clone();
    app.init_modules(|router, _, storage| router.bank.init_balance(storage, &addr, keep))
        .unwrap();
}

/// Makes every bank send to `recipient` fail until unblocked
pub fn block_transfers_to(app: &mut LotteryApp, recipient: &Addr) {
    app.init_modules(|router, _, storage| router.bank.block_recipient(storage, recipient))
        .unwrap();
}

pub fn unblock_transfers_to(app: &mut LotteryApp, recipient: &Addr) {
    app.init_modules(|router, _, storage| router.bank.unblock_recipient(storage, recipient));
}
