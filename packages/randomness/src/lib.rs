//! Boundary between the lottery and the nois randomness proxy.
//!
//! The lottery allocates its own request identifiers and carries them in the nois job id,
//! so a callback can be matched against the single outstanding request.
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, Coin, HexBinary, StdError, StdResult, Timestamp, Uint256, WasmMsg};
use nois::ProxyExecuteMsg;

pub const JOB_ID_PREFIX: &str = "lottery-";

pub fn job_id(request_id: u64) -> String {
    format!("{JOB_ID_PREFIX}{request_id}")
}

/// Recovers the request id from a job id built by [`job_id`].
/// Only the canonical decimal form is accepted, "lottery-01" or "lottery-+1" do not map to 1.
pub fn request_id_from_job(job_id: &str) -> Option<u64> {
    let digits = job_id.strip_prefix(JOB_ID_PREFIX)?;
    let request_id: u64 = digits.parse().ok()?;
    (request_id.to_string() == digits).then_some(request_id)
}

#[cw_serde]
pub struct RandomnessRequest {
    pub request_id: u64,
    /// When set, the beacon must be published after this time.
    pub after: Option<Timestamp>,
}

impl RandomnessRequest {
    pub fn job_id(&self) -> String {
        job_id(self.request_id)
    }

    /// Builds the message asking the proxy for randomness. `funds` pays the proxy.
    pub fn into_msg(self, proxy: &Addr, funds: Vec<Coin>) -> StdResult<WasmMsg> {
        let job_id = self.job_id();
        let msg = match self.after {
            Some(after) => ProxyExecuteMsg::GetRandomnessAfter { after, job_id },
            None => ProxyExecuteMsg::GetNextRandomness { job_id },
        };
        Ok(WasmMsg::Execute {
            contract_addr: proxy.to_string(),
            msg: to_json_binary(&msg)?,
            funds,
        })
    }
}

/// Reads a beacon as a single big-endian 256 bit word. Every draw consumes exactly one word.
pub fn first_word(randomness: &HexBinary) -> StdResult<Uint256> {
    let bytes: [u8; 32] = randomness.to_array().map_err(|_| {
        StdError::generic_err(format!(
            "randomness must be 32 bytes, got {}",
            randomness.len()
        ))
    })?;
    Ok(Uint256::from_be_bytes(bytes))
}
