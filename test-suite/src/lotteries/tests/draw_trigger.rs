#[cfg(test)]
mod tests {
    use cosmwasm_std::{Binary, Uint128};
    use lottery::state::LotteryStatus;
    use utils::state::{NATIVE_DENOM, NOIS_DENOM};

    use crate::{
        common_setup::{
            helpers::{assert_error, plus_block_seconds, randomness_for},
            setup_accounts_and_block::setup_lottery_participants,
            setup_lottery::{
                lottery_instantiate_with_delay, proper_lottery_instantiate, ENTRY_FEE, INTERVAL,
                NOIS_AMOUNT, NOIS_FUNDING,
            },
        },
        lotteries::setup::{
            execute_msg::{enter, publish_randomness, trigger_draw},
            helpers::{balance, drain_balance, lottery_info, pending_jobs},
        },
    };

    #[test]
    fn upkeep_not_needed_reports_the_state() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let (one, two, _, _, _, _) = setup_lottery_participants(&mut app);

        assert_error(
            trigger_draw(&mut app, &contracts, &one, None),
            "Upkeep not needed. Balance : 0ustars, participants : 0, state : open".to_string(),
        );

        enter(&mut app, &contracts, &one).unwrap();
        assert_error(
            trigger_draw(&mut app, &contracts, &two, None),
            "Upkeep not needed. Balance : 10000ustars, participants : 1, state : open".to_string(),
        );
        assert!(pending_jobs(&app, &contracts).is_empty());
    }

    #[test]
    fn trigger_requests_randomness() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let (one, two, _, _, _, _) = setup_lottery_participants(&mut app);
        enter(&mut app, &contracts, &one).unwrap();
        plus_block_seconds(&mut app, INTERVAL);

        // anyone can trigger, the context is not interpreted
        let res = trigger_draw(
            &mut app,
            &contracts,
            &two,
            Some(Binary::from(b"whatever".to_vec())),
        )
        .unwrap();
        let triggered = res
            .events
            .iter()
            .find(|e| e.ty == "wasm-draw_triggered")
            .unwrap();
        assert!(triggered
            .attributes
            .iter()
            .any(|a| a.key == "job_id" && a.value == "lottery-1"));

        let info = lottery_info(&app, &contracts);
        assert_eq!(info.state, LotteryStatus::Drawing);
        assert_eq!(info.pending_request_id, Some(1));
        assert_eq!(info.participant_count, 1);
        assert_eq!(info.pool.u128(), ENTRY_FEE);

        let jobs = pending_jobs(&app, &contracts);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job_id, "lottery-1");
        assert_eq!(jobs[0].requester, contracts.lottery);
        assert_eq!(jobs[0].after, None);

        // the proxy fee comes from the contract, not from the pool
        assert_eq!(
            balance(&app, &contracts.lottery, NOIS_DENOM),
            Uint128::new(NOIS_FUNDING - NOIS_AMOUNT)
        );
        assert_eq!(
            balance(&app, &contracts.nois, NOIS_DENOM),
            Uint128::new(NOIS_AMOUNT)
        );
        assert_eq!(
            balance(&app, &contracts.lottery, NATIVE_DENOM),
            Uint128::new(ENTRY_FEE)
        );
    }

    #[test]
    fn second_trigger_is_rejected() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let (one, two, _, _, _, _) = setup_lottery_participants(&mut app);
        enter(&mut app, &contracts, &one).unwrap();
        plus_block_seconds(&mut app, INTERVAL);
        trigger_draw(&mut app, &contracts, &two, None).unwrap();

        assert_error(
            trigger_draw(&mut app, &contracts, &two, None),
            "Upkeep not needed. Balance : 10000ustars, participants : 1, state : drawing"
                .to_string(),
        );
        assert_eq!(pending_jobs(&app, &contracts).len(), 1);
        assert_eq!(lottery_info(&app, &contracts).pending_request_id, Some(1));
    }

    #[test]
    fn unfunded_request_reverts_the_trigger() {
        let (mut app, contracts) = proper_lottery_instantiate();
        let (one, two, _, _, _, _) = setup_lottery_participants(&mut app);
        enter(&mut app, &contracts, &one).unwrap();
        plus_block_seconds(&mut app, INTERVAL);

        drain_balance(&mut app, &contracts.lottery, NOIS_DENOM);
        trigger_draw(&mut app, &contracts, &two, None).unwrap_err();

        let info = lottery_info(&app, &contracts);
        assert_eq!(info.state, LotteryStatus::Open);
        assert_eq!(info.pending_request_id, None);
        assert!(pending_jobs(&app, &contracts).is_empty());
    }

    #[test]
    fn delayed_randomness_waits_for_the_beacon() {
        let delay = 60;
        let (mut app, contracts) = lottery_instantiate_with_delay(Some(delay));
        let (one, two, _, _, _, _) = setup_lottery_participants(&mut app);
        enter(&mut app, &contracts, &one).unwrap();
        plus_block_seconds(&mut app, INTERVAL);
        let triggered_at = app.block_info().time;
        trigger_draw(&mut app, &contracts, &two, None).unwrap();

        let jobs = pending_jobs(&app, &contracts);
        assert_eq!(jobs[0].after, Some(triggered_at.plus_seconds(delay)));

        publish_randomness(&mut app, &contracts, 1, randomness_for(0)).unwrap_err();
        assert_eq!(lottery_info(&app, &contracts).state, LotteryStatus::Drawing);

        plus_block_seconds(&mut app, delay);
        publish_randomness(&mut app, &contracts, 1, randomness_for(0)).unwrap();
        let info = lottery_info(&app, &contracts);
        assert_eq!(info.state, LotteryStatus::Open);
        assert_eq!(info.recent_winner, Some(one));
    }
}
