use cosmwasm_std::{coin, ensure, ensure_eq, BankMsg, DepsMut, Env, Event, MessageInfo, SubMsg};
use cw_utils::may_pay;
use nois::NoisCallback;
use randomness::{first_word, request_id_from_job};
use utils::{payment::fee_funds, types::Response};

use crate::{
    contract::PAYOUT_REPLY_ID,
    error::ContractError,
    state::{
        add_participant, LotteryStatus, RoundResult, CONFIG, LOTTERY, PARTICIPANTS, ROUNDS,
    },
    utils::{check_readiness, pool_balance, randomness_request, select_winner_index},
};

/// Enter the current round.
///
/// The sender pays at least the entry fee in the entry fee denom. Anything above the fee stays in the
/// pool, there is no change given back.
pub fn execute_enter(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut lottery = LOTTERY.load(deps.storage)?;

    let paid = may_pay(&info, &config.entry_fee.denom)?;
    if paid < config.entry_fee.amount {
        return Err(ContractError::InsufficientFee {
            paid: coin(paid.u128(), &config.entry_fee.denom),
            required: config.entry_fee,
        });
    }
    ensure!(
        lottery.state == LotteryStatus::Open,
        ContractError::LotteryNotOpen {}
    );

    let index = add_participant(deps.storage, &mut lottery, &info.sender)?;
    LOTTERY.save(deps.storage, &lottery)?;

    Ok(Response::new()
        .add_attribute("action", "enter")
        .add_event(
            Event::new("entered")
                .add_attribute("entrant", info.sender)
                .add_attribute("round", lottery.round.to_string())
                .add_attribute("index", index.to_string())
                .add_attribute("amount", coin(paid.u128(), config.entry_fee.denom).to_string()),
        ))
}

/// Closes entries and requests randomness from the nois proxy.
///
/// Readiness is always evaluated again here, whatever the caller observed when polling `IsReady`.
/// The proxy fee is paid from the contract balance.
pub fn execute_trigger_draw(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut lottery = LOTTERY.load(deps.storage)?;

    let readiness = check_readiness(deps.as_ref(), &env, &config, &lottery)?;
    if !readiness.ready {
        return Err(ContractError::UpkeepNotNeeded {
            balance: readiness.balance,
            participants: lottery.participant_count,
            state: lottery.state,
        });
    }

    let request_id = lottery.begin_draw();
    LOTTERY.save(deps.storage, &lottery)?;

    let request = randomness_request(&env, &config, request_id);
    let job_id = request.job_id();
    let request_msg = request.into_msg(&config.nois_proxy_addr, fee_funds(&config.nois_proxy_coin))?;

    Ok(Response::new()
        .add_message(request_msg)
        .add_attribute("action", "trigger_draw")
        .add_event(
            Event::new("draw_triggered")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("job_id", job_id)
                .add_attribute("round", lottery.round.to_string()),
        ))
}

/// Randomness callback from the nois proxy.
///
/// The winner is picked and the lottery reset before the pool is sent out. The payout is the last
/// message of the transaction, if it fails the whole callback fails and every change above is reverted.
pub fn execute_receive_nois(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    callback: NoisCallback,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // callback should only be allowed to be called by the proxy contract
    // otherwise anyone can cut the randomness workflow and cheat the randomness by sending the randomness directly to this contract
    ensure_eq!(
        info.sender,
        config.nois_proxy_addr,
        ContractError::UnauthorizedReceive
    );

    let mut lottery = LOTTERY.load(deps.storage)?;
    let request_id = match (request_id_from_job(&callback.job_id), lottery.pending_request_id) {
        (Some(received), Some(pending))
            if received == pending && lottery.state == LotteryStatus::Drawing =>
        {
            pending
        }
        _ => {
            return Err(ContractError::InvalidRequest {
                job_id: callback.job_id,
            })
        }
    };

    let word = first_word(&callback.randomness).map_err(|_| ContractError::InvalidRandomness)?;
    let round = lottery.round;
    let participant_count = lottery.participant_count;
    let winner_index = select_winner_index(word, participant_count)?;
    let winner = PARTICIPANTS.load(deps.storage, (round, winner_index))?;
    let prize = pool_balance(deps.as_ref(), &env, &config)?;

    deps.api.debug(&format!(
        "lottery round {round}: request {request_id} picked entry {winner_index} of {participant_count}"
    ));

    // Finalize first
    ROUNDS.save(
        deps.storage,
        round,
        &RoundResult {
            round,
            request_id,
            winner: winner.clone(),
            winner_index,
            prize: prize.clone(),
            randomness: callback.randomness,
            participant_count,
            completed_at: env.block.time,
        },
    )?;
    lottery.complete_round(winner.clone(), env.block.time);
    LOTTERY.save(deps.storage, &lottery)?;

    // Then pay
    if prize.amount.is_zero() {
        return Err(ContractError::PayoutFailed {
            winner: winner.to_string(),
            reason: "the pool is empty".to_string(),
        });
    }
    let payout = SubMsg::reply_on_error(
        BankMsg::Send {
            to_address: winner.to_string(),
            amount: vec![prize.clone()],
        },
        PAYOUT_REPLY_ID,
    );

    Ok(Response::new()
        .add_attribute("action", "receive_randomness")
        .add_event(
            Event::new("winner_picked")
                .add_attribute("winner", winner)
                .add_attribute("round", round.to_string())
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("prize", prize.to_string()),
        )
        .add_submessage(payout))
}

/// Sends a new randomness request while the lottery is drawing.
/// The pending request is replaced, a late answer to it is rejected.
/// Only the owner can do this, participants and the pool are left untouched.
pub fn execute_resubmit_randomness(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.owner, ContractError::Unauthorized);

    let mut lottery = LOTTERY.load(deps.storage)?;
    ensure!(
        lottery.state == LotteryStatus::Drawing,
        ContractError::NotDrawing {}
    );
    let previous_request_id = lottery.pending_request_id;
    let request_id = lottery.reissue_request();
    LOTTERY.save(deps.storage, &lottery)?;

    let request = randomness_request(&env, &config, request_id);
    let job_id = request.job_id();
    let request_msg = request.into_msg(&config.nois_proxy_addr, fee_funds(&config.nois_proxy_coin))?;

    Ok(Response::new()
        .add_message(request_msg)
        .add_attribute("action", "resubmit_randomness")
        .add_event(
            Event::new("randomness_resubmitted")
                .add_attribute(
                    "previous_request_id",
                    previous_request_id.map(|id| id.to_string()).unwrap_or_default(),
                )
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("job_id", job_id),
        ))
}
