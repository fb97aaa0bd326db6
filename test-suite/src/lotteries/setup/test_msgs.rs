use cosmwasm_std::{Addr, Coin};
use crate::common_setup::app::LotteryApp;

pub struct InstantiateLotteryParams<'a> {
    pub app: &'a mut LotteryApp,
    pub code_id: u64,
    pub sender: Addr,
    pub name: String,
    pub owner: Option<String>,
    pub entry_fee: Coin,
    pub interval: u64,
    pub nois_proxy_addr: String,
    pub nois_proxy_coin: Coin,
    pub randomness_delay: Option<u64>,
}
