use cosmwasm_std::{Coin, Deps, Env, StdResult, Uint128, Uint256};
use randomness::RandomnessRequest;

use crate::{
    error::ContractError,
    state::{Config, Lottery, LotteryStatus},
};

/// The pool is whatever the contract holds in the entry fee denom
pub fn pool_balance(deps: Deps, env: &Env, config: &Config) -> StdResult<Coin> {
    deps.querier
        .query_balance(&env.contract.address, &config.entry_fee.denom)
}

pub struct Readiness {
    pub ready: bool,
    pub balance: Coin,
}

/// A draw can be triggered when the lottery is open, the interval has passed since the last reset,
/// and there is at least one participant and a positive pool.
pub fn check_readiness(
    deps: Deps,
    env: &Env,
    config: &Config,
    lottery: &Lottery,
) -> StdResult<Readiness> {
    let balance = pool_balance(deps, env, config)?;

    let is_open = lottery.state == LotteryStatus::Open;
    let time_passed = env
        .block
        .time
        .seconds()
        .saturating_sub(lottery.last_timestamp.seconds())
        >= config.interval;
    let has_participants = lottery.participant_count > 0;
    let has_balance = !balance.amount.is_zero();

    Ok(Readiness {
        ready: is_open && time_passed && has_participants && has_balance,
        balance,
    })
}

/// Maps a random word onto an entry index: `word mod participant_count`.
///
/// Counts that don't divide 2^256 give a marginal bias towards low indexes.
/// The same word always selects the same entry for a given count.
pub fn select_winner_index(word: Uint256, participant_count: u32) -> Result<u32, ContractError> {
    if participant_count == 0 {
        return Err(ContractError::ContractBug {});
    }
    let index = word % Uint256::from(participant_count);
    let index = Uint128::try_from(index).map_err(|_| ContractError::ContractBug {})?;
    u32::try_from(index.u128()).map_err(|_| ContractError::ContractBug {})
}

pub fn randomness_request(env: &Env, config: &Config, request_id: u64) -> RandomnessRequest {
    let after = match config.randomness_delay {
        0 => None,
        delay => Some(env.block.time.plus_seconds(delay)),
    };
    RandomnessRequest { request_id, after }
}

#[cfg(test)]
pub mod test {
    use cosmwasm_std::{HexBinary, Uint256};

    use crate::error::ContractError;

    use super::select_winner_index;

    #[test]
    fn winner_index_is_word_modulo_count() -> Result<(), ContractError> {
        assert_eq!(select_winner_index(Uint256::from(7u32), 3)?, 1);
        assert_eq!(select_winner_index(Uint256::from(9u32), 3)?, 0);
        assert_eq!(select_winner_index(Uint256::from(2u32), 3)?, 2);
        assert_eq!(select_winner_index(Uint256::MAX, 1)?, 0);
        // 2^256 - 1 is a multiple of 15
        assert_eq!(select_winner_index(Uint256::MAX, 5)?, 0);
        assert_eq!(select_winner_index(Uint256::MAX, 2)?, 1);
        Ok(())
    }

    #[test]
    fn large_random() -> Result<(), ContractError> {
        let n = 50;
        let randomness: [u8; 32] = HexBinary::from_hex(
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa115",
        )?
        .to_array()?;
        let word = Uint256::from_be_bytes(randomness);

        let index = select_winner_index(word, n)?;
        assert!(index < n);
        // Selection is deterministic
        assert_eq!(index, select_winner_index(word, n)?);
        Ok(())
    }

    #[test]
    fn no_participants_is_a_bug() {
        assert_eq!(
            select_winner_index(Uint256::from(1u32), 0).unwrap_err(),
            ContractError::ContractBug {}
        );
    }
}
