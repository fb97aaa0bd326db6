pub mod draw_trigger;
pub mod payout;
pub mod resubmit;
