use cosmwasm_std::{coin, coins, Addr};
use cw_multi_test::{BankSudo, SudoMsg};

use super::app::LotteryApp;
use utils::state::{NATIVE_DENOM, NOIS_DENOM};

pub const INITIAL_BALANCE: u128 = 100_000_000_000_000;

pub fn setup_accounts(router: &mut LotteryApp) -> (Addr, Addr) {
    // define accounts
    let owner = Addr::unchecked("owner");
    let keeper = Addr::unchecked("keeper");
    // fund accounts
    router
        .sudo(SudoMsg::Bank({
            BankSudo::Mint {
                to_address: owner.to_string(),
                amount: vec![
                    coin(INITIAL_BALANCE, NATIVE_DENOM),
                    coin(INITIAL_BALANCE, NOIS_DENOM),
                ],
            }
        }))
        .ok();
    router
        .sudo(SudoMsg::Bank({
            BankSudo::Mint {
                to_address: keeper.to_string(),
                amount: vec![coin(INITIAL_BALANCE, NATIVE_DENOM)],
            }
        }))
        .ok();

    (owner, keeper)
}

pub fn setup_lottery_participants(router: &mut LotteryApp) -> (Addr, Addr, Addr, Addr, Addr, Addr) {
    let accounts = ["addr-one", "addr-two", "addr-three", "addr-four", "addr-five", "addr-six"]
        .map(Addr::unchecked);

    for account in accounts.iter() {
        router
            .sudo(SudoMsg::Bank({
                BankSudo::Mint {
                    to_address: account.to_string(),
                    amount: coins(INITIAL_BALANCE, NATIVE_DENOM),
                }
            }))
            .ok();
        // check native balances
        let balances = router.wrap().query_all_balances(account).unwrap();
        assert_eq!(balances, coins(INITIAL_BALANCE, NATIVE_DENOM));
    }

    let [one, two, three, four, five, six] = accounts;
    (one, two, three, four, five, six)
}
