use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

#[cw_serde]
pub struct LotteryCodeIds {
    pub lottery_code_id: u64,
    pub nois_code_id: u64,
}

#[cw_serde]
pub struct LotteryContracts {
    pub lottery: Addr,
    pub nois: Addr,
}
