pub mod common_setup;
pub mod lotteries;
