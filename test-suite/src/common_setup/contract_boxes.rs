use cosmwasm_std::Empty;
use cw_multi_test::{no_init, AppBuilder, Contract, ContractWrapper};

use super::app::{BlockingBank, LotteryApp};

pub fn custom_mock_app() -> LotteryApp {
    AppBuilder::new()
        .with_bank(BlockingBank::default())
        .build(no_init)
}

pub fn contract_lottery() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        lottery::contract::execute,
        lottery::contract::instantiate,
        lottery::contract::query,
    )
    .with_reply(lottery::contract::reply)
    .with_migrate(lottery::contract::migrate);
    Box::new(contract)
}

pub fn contract_fake_nois() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        super::nois_proxy::execute,
        super::nois_proxy::instantiate,
        super::nois_proxy::query,
    );
    Box::new(contract)
}
