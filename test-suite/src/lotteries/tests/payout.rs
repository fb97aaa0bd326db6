#[cfg(test)]
mod tests {
    use cosmwasm_std::coin;
    use cw_multi_test::{BankSudo, SudoMsg};
    use lottery::state::LotteryStatus;
    use utils::state::NATIVE_DENOM;

    use crate::{
        common_setup::{
            helpers::{assert_error, plus_block_seconds, randomness_for},
            setup_accounts_and_block::{setup_lottery_participants, INITIAL_BALANCE},
            setup_lottery::{proper_lottery_instantiate, ENTRY_FEE, INTERVAL},
        },
        lotteries::setup::{
            execute_msg::{enter, publish_randomness, trigger_draw},
            helpers::{
                balance, block_transfers_to, drain_balance, lottery_info, participants,
                pending_jobs, rounds, unblock_transfers_to,
            },
        },
    };

    #[test]
    fn failed_payout_keeps_the_round() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let (one, two, three, _, _, _) = setup_lottery_participants(&mut app);
        for entrant in [&one, &two, &three] {
            enter(&mut app, &contracts, entrant).unwrap();
        }
        plus_block_seconds(&mut app, INTERVAL);
        trigger_draw(&mut app, &contracts, &one, None).unwrap();

        drain_balance(&mut app, &contracts.lottery, NATIVE_DENOM);
        assert_error(
            publish_randomness(&mut app, &contracts, 1, randomness_for(7)),
            "Paying the pool to addr-two failed: the pool is empty".to_string(),
        );

        // nothing of the callback was kept
        let info = lottery_info(&app, &contracts);
        assert_eq!(info.state, LotteryStatus::Drawing);
        assert_eq!(info.round, 0);
        assert_eq!(info.participant_count, 3);
        assert_eq!(info.pending_request_id, Some(1));
        assert_eq!(info.recent_winner, None);
        assert_eq!(
            participants(&app, &contracts, None).participants,
            vec![one, two.clone(), three]
        );
        assert!(rounds(&app, &contracts).rounds.is_empty());
        assert_eq!(pending_jobs(&app, &contracts).len(), 1);

        // the same beacon can be delivered again once the pool is back
        app.sudo(SudoMsg::Bank(BankSudo::Mint {
            to_address: contracts.lottery.to_string(),
            amount: vec![coin(ENTRY_FEE * 3, NATIVE_DENOM)],
        }))
        .unwrap();
        publish_randomness(&mut app, &contracts, 1, randomness_for(7)).unwrap();

        let info = lottery_info(&app, &contracts);
        assert_eq!(info.state, LotteryStatus::Open);
        assert_eq!(info.round, 1);
        assert_eq!(info.recent_winner, Some(two.clone()));
        assert_eq!(
            balance(&app, &two, NATIVE_DENOM).u128(),
            INITIAL_BALANCE - ENTRY_FEE + ENTRY_FEE * 3
        );
    }

    #[test]
    fn rejected_transfer_reverts_the_draw() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let (one, two, three, _, _, _) = setup_lottery_participants(&mut app);
        for entrant in [&one, &two, &three] {
            enter(&mut app, &contracts, entrant).unwrap();
        }
        plus_block_seconds(&mut app, INTERVAL);
        trigger_draw(&mut app, &contracts, &one, None).unwrap();

        // the pool is intact, only the transfer to the winner fails
        block_transfers_to(&mut app, &two);
        let err = publish_randomness(&mut app, &contracts, 1, randomness_for(7)).unwrap_err();
        let message = err.root_cause().to_string();
        assert!(message.starts_with("Paying the pool to addr-two failed: "));
        assert!(message.contains("recipient addr-two does not accept transfers"));

        let info = lottery_info(&app, &contracts);
        assert_eq!(info.state, LotteryStatus::Drawing);
        assert_eq!(info.round, 0);
        assert_eq!(info.participant_count, 3);
        assert_eq!(info.pending_request_id, Some(1));
        assert_eq!(info.recent_winner, None);
        assert_eq!(info.pool.u128(), ENTRY_FEE * 3);
        assert_eq!(
            participants(&app, &contracts, None).participants,
            vec![one, two.clone(), three]
        );
        assert!(rounds(&app, &contracts).rounds.is_empty());
        assert_eq!(balance(&app, &two, NATIVE_DENOM).u128(), INITIAL_BALANCE - ENTRY_FEE);

        unblock_transfers_to(&mut app, &two);
        publish_randomness(&mut app, &contracts, 1, randomness_for(7)).unwrap();
        let info = lottery_info(&app, &contracts);
        assert_eq!(info.state, LotteryStatus::Open);
        assert_eq!(info.recent_winner, Some(two.clone()));
        assert_eq!(
            balance(&app, &two, NATIVE_DENOM).u128(),
            INITIAL_BALANCE - ENTRY_FEE + ENTRY_FEE * 3
        );
    }
}
