//! Seat rotation for each possible leader.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerId, PlayerMap};

/// For every seat `S`, the order `S, S+1, ..., N-1, 0, ..., S-1`.
///
/// ```
/// use wizard_sim::core::PlayerId;
/// use wizard_sim::round::PlayOrder;
///
/// let order = PlayOrder::new(4);
/// let from_two: Vec<u8> = order.for_leader(PlayerId::new(2)).iter().map(|p| p.0).collect();
/// assert_eq!(from_two, vec![2, 3, 0, 1]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOrder {
    rows: PlayerMap<SmallVec<[PlayerId; 8]>>,
}

impl PlayOrder {
    pub fn new(player_count: usize) -> Self {
        let rows = PlayerMap::new(player_count, |leader| {
            let mut row = SmallVec::with_capacity(player_count);
            let mut seat = leader;
            for _ in 0..player_count {
                row.push(seat);
                seat = seat.next(player_count);
            }
            row
        });
        Self { rows }
    }

    /// Seats in the order they play when `leader` leads.
    #[must_use]
    pub fn for_leader(&self, leader: PlayerId) -> &[PlayerId] {
        &self.rows[leader]
    }

    /// Offset of `seat` from `leader` in play order (0 = the leader).
    #[must_use]
    pub fn position_of(&self, leader: PlayerId, seat: PlayerId) -> usize {
        let n = self.player_count();
        (seat.index() + n - leader.index()) % n
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.rows.player_count()
    }
}
