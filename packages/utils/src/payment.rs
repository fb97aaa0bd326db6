use cosmwasm_std::Coin;

/// Funds to attach to a message paying `fee`.
/// The bank module rejects zero-amount coins, so a free request carries no funds at all.
pub fn fee_funds(fee: &Coin) -> Vec<Coin> {
    if fee.amount.is_zero() {
        vec![]
    } else {
        vec![fee.clone()]
    }
}
