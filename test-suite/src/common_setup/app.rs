use anyhow::{bail, Result as AnyResult};
use cosmwasm_std::{
    Addr, Api, BankMsg, BankQuery, Binary, BlockInfo, Coin, CustomQuery, Empty, Querier, Storage,
};
use cw_multi_test::{App, AppResponse, Bank, BankKeeper, BankSudo, CosmosRouter, Module};
use cw_storage_plus::Map;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

pub type LotteryApp = App<BlockingBank>;

const BLOCKED_RECIPIENTS: Map<&Addr, Empty> = Map::new("blocked_recipients");

/// `BankKeeper` that refuses sends to blocked recipients.
/// Lets tests fail a transfer of a non-empty balance.
#[derive(Default)]
pub struct BlockingBank {
    keeper: BankKeeper,
}

impl BlockingBank {
    pub fn init_balance(
        &self,
        storage: &mut dyn Storage,
        account: &Addr,
        amount: Vec<Coin>,
    ) -> AnyResult<()> {
        self.keeper.init_balance(storage, account, amount)
    }

    pub fn block_recipient(&self, storage: &mut dyn Storage, recipient: &Addr) -> AnyResult<()> {
        BLOCKED_RECIPIENTS.save(storage, recipient, &Empty {})?;
        Ok(())
    }

    pub fn unblock_recipient(&self, storage: &mut dyn Storage, recipient: &Addr) {
        BLOCKED_RECIPIENTS.remove(storage, recipient);
    }
}

impl Bank for BlockingBank {}

impl Module for BlockingBank {
    type ExecT = BankMsg;
    type QueryT = BankQuery;
    type SudoT = BankSudo;

    fn execute<ExecC, QueryC>(
        &self,
        api: &dyn Api,
        storage: &mut dyn Storage,
        router: &dyn CosmosRouter<ExecC = ExecC, QueryC = QueryC>,
        block: &BlockInfo,
        sender: Addr,
        msg: BankMsg,
    ) -> AnyResult<AppResponse>
    where
        ExecC: Debug + Clone + PartialEq + JsonSchema + DeserializeOwned + 'static,
        QueryC: CustomQuery + DeserializeOwned + 'static,
    {
        if let BankMsg::Send { to_address, .. } = &msg {
            if BLOCKED_RECIPIENTS.has(storage, &Addr::unchecked(to_address)) {
                bail!("recipient {to_address} does not accept transfers");
            }
        }
        self.keeper.execute(api, storage, router, block, sender, msg)
    }

    fn query(
        &self,
        api: &dyn Api,
        storage: &dyn Storage,
        querier: &dyn Querier,
        block: &BlockInfo,
        request: BankQuery,
    ) -> AnyResult<Binary> {
        self.keeper.query(api, storage, querier, block, request)
    }

    fn sudo<ExecC, QueryC>(
        &self,
        api: &dyn Api,
        storage: &mut dyn Storage,
        router: &dyn CosmosRouter<ExecC = ExecC, QueryC = QueryC>,
        block: &BlockInfo,
        msg: BankSudo,
    ) -> AnyResult<AppResponse>
    where
        ExecC: Debug + Clone + PartialEq + JsonSchema + DeserializeOwned + 'static,
        QueryC: CustomQuery + DeserializeOwned + 'static,
    {
        self.keeper.sudo(api, storage, router, block, msg)
    }
}
