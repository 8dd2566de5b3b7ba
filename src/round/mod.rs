//! Round orchestration.
//!
//! A round deals `cards_per_player` cards to each seat in seat order, turns
//! up one more card to fix trump, collects bids, and then plays one trick
//! per card held. By default seat 0 leads every trick; `LeadRule::TrickWinner`
//! hands the lead to the previous trick's winner instead.

mod game;
mod play_order;

pub use game::{trump_from_reveal, Round, SeatRecord};
pub use play_order::PlayOrder;
