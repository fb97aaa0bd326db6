use cosmwasm_std::{coin, Addr};
use cw_multi_test::{BankSudo, Executor, SudoMsg};
use lottery::msg::InstantiateMsg;
use utils::state::{NATIVE_DENOM, NOIS_DENOM};

use super::{
    app::LotteryApp,
    contract_boxes::{contract_fake_nois, contract_lottery, custom_mock_app},
    helpers::setup_block_time,
    msg::{LotteryCodeIds, LotteryContracts},
    nois_proxy,
    setup_accounts_and_block::setup_accounts,
};

pub const OWNER_ADDR: &str = "owner";
pub const LOTTERY_NAME: &str = "lottery contract name";
pub const ENTRY_FEE: u128 = 10_000;
/// Seconds between two draws
pub const INTERVAL: u64 = 30;
/// Fee charged by the proxy per randomness request
pub const NOIS_AMOUNT: u128 = 50;
/// unois sent to the lottery at setup, enough for a few requests
pub const NOIS_FUNDING: u128 = 1_000;
pub const GENESIS_TIME_NANOS: u64 = 1_647_032_400_000_000_000;

pub fn lottery_code_ids(router: &mut LotteryApp) -> LotteryCodeIds {
    let lottery_code_id = router.store_code(contract_lottery());
    let nois_code_id = router.store_code(contract_fake_nois());
    LotteryCodeIds {
        lottery_code_id,
        nois_code_id,
    }
}

pub fn lottery_instantiate_msg(nois_proxy: &Addr, randomness_delay: Option<u64>) -> InstantiateMsg {
    InstantiateMsg {
        name: LOTTERY_NAME.to_string(),
        owner: Some(OWNER_ADDR.to_string()),
        entry_fee: coin(ENTRY_FEE, NATIVE_DENOM),
        interval: INTERVAL,
        nois_proxy_addr: nois_proxy.to_string(),
        nois_proxy_coin: coin(NOIS_AMOUNT, NOIS_DENOM),
        randomness_delay,
    }
}

/// A fresh app with a mock nois proxy and no lottery yet
pub fn app_with_nois() -> (LotteryApp, LotteryCodeIds, Addr) {
    let mut app = custom_mock_app();
    setup_block_time(&mut app, GENESIS_TIME_NANOS, Some(10000));
    setup_accounts(&mut app);

    let code_ids = lottery_code_ids(&mut app);
    let nois = app
        .instantiate_contract(
            code_ids.nois_code_id,
            Addr::unchecked(OWNER_ADDR),
            &nois_proxy::InstantiateMsg {
                fee: coin(NOIS_AMOUNT, NOIS_DENOM),
            },
            &[],
            "nois-proxy",
            None,
        )
        .unwrap();
    (app, code_ids, nois)
}

pub fn proper_lottery_instantiate() -> (LotteryApp, LotteryContracts) {
    lottery_instantiate_with_delay(None)
}

pub fn lottery_instantiate_with_delay(randomness_delay: Option<u64>) -> (LotteryApp, LotteryContracts) {
    let (mut app, code_ids, nois) = app_with_nois();

    let lottery = app
        .instantiate_contract(
            code_ids.lottery_code_id,
            Addr::unchecked(OWNER_ADDR),
            &lottery_instantiate_msg(&nois, randomness_delay),
            &[],
            "lottery",
            Some(OWNER_ADDR.to_string()),
        )
        .unwrap();

    // the lottery pays the proxy fee from its own balance
    app.sudo(SudoMsg::Bank(BankSudo::Mint {
        to_address: lottery.to_string(),
        amount: vec![coin(NOIS_FUNDING, NOIS_DENOM)],
    }))
    .unwrap();

    (app, LotteryContracts { lottery, nois })
}
