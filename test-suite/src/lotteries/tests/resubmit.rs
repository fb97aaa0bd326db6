#[cfg(test)]
mod tests {
    use cosmwasm_std::Addr;
    use lottery::state::LotteryStatus;
    use utils::state::NOIS_DENOM;

    use crate::{
        common_setup::{
            helpers::{assert_error, plus_block_seconds, randomness_for},
            setup_accounts_and_block::setup_lottery_participants,
            setup_lottery::{proper_lottery_instantiate, INTERVAL, NOIS_AMOUNT, NOIS_FUNDING, OWNER_ADDR},
        },
        lotteries::setup::{
            execute_msg::{enter, publish_randomness, resubmit_randomness, trigger_draw},
            helpers::{balance, lottery_info, pending_jobs, round_result},
        },
    };

    #[test]
    fn resubmission_rules() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let (one, two, _, _, _, _) = setup_lottery_participants(&mut app);
        let owner = Addr::unchecked(OWNER_ADDR);

        assert_error(
            resubmit_randomness(&mut app, &contracts, &owner),
            "The lottery is not waiting for randomness".to_string(),
        );

        enter(&mut app, &contracts, &one).unwrap();
        plus_block_seconds(&mut app, INTERVAL);
        trigger_draw(&mut app, &contracts, &two, None).unwrap();

        assert_error(
            resubmit_randomness(&mut app, &contracts, &two),
            "Unauthorized.".to_string(),
        );
        assert_eq!(lottery_info(&app, &contracts).pending_request_id, Some(1));
    }

    #[test]
    fn stale_request_is_replaced() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let (one, two, _, _, _, _) = setup_lottery_participants(&mut app);
        let owner = Addr::unchecked(OWNER_ADDR);

        enter(&mut app, &contracts, &one).unwrap();
        enter(&mut app, &contracts, &two).unwrap();
        plus_block_seconds(&mut app, INTERVAL);
        trigger_draw(&mut app, &contracts, &two, None).unwrap();

        resubmit_randomness(&mut app, &contracts, &owner).unwrap();
        let info = lottery_info(&app, &contracts);
        assert_eq!(info.state, LotteryStatus::Drawing);
        assert_eq!(info.pending_request_id, Some(2));
        assert_eq!(info.participant_count, 2);

        let jobs: Vec<String> = pending_jobs(&app, &contracts)
            .into_iter()
            .map(|job| job.job_id)
            .collect();
        assert_eq!(jobs, vec!["lottery-1".to_string(), "lottery-2".to_string()]);
        assert_eq!(
            balance(&app, &contracts.lottery, NOIS_DENOM).u128(),
            NOIS_FUNDING - 2 * NOIS_AMOUNT
        );

        // the late answer to the first request no longer counts
        assert_error(
            publish_randomness(&mut app, &contracts, 1, randomness_for(1)),
            "Randomness job lottery-1 does not match the pending request".to_string(),
        );

        publish_randomness(&mut app, &contracts, 2, randomness_for(1)).unwrap();
        let info = lottery_info(&app, &contracts);
        assert_eq!(info.state, LotteryStatus::Open);
        assert_eq!(info.recent_winner, Some(two.clone()));
        assert_eq!(round_result(&app, &contracts, 0).request_id, 2);
    }
}
