//! One player's board: the ship-occupancy index and the shot-history
//! index, both backed by [`BalancedTree`] (§3 Data model).

use crate::bst::BalancedTree;
use crate::coord::Code;
use crate::ship::ShotResult;

/// `occupied` maps a coordinate code to the index of the ship (within
/// that player's [`crate::fleet::FleetTree`]) that sits on it.
/// `shots_fired` maps a coordinate code this player has fired at to the
/// result of that shot. Both invariants from §3 apply: `occupied.size()
/// == sum(ship sizes)`, and `shots_fired` holds exactly the codes this
/// player has shot at, no more, no less.
pub struct Board {
    pub size: u8,
    occupied: BalancedTree<usize>,
    shots_fired: BalancedTree<ShotResult>,
}

impl Board {
    pub fn new(size: u8) -> Self {
        Self { size, occupied: BalancedTree::new(), shots_fired: BalancedTree::new() }
    }

    /// Bulk-inserts a newly placed ship's segments, balanced-built
    /// against the segments already on the board (§4.2: bulk loading
    /// uses the recursive-middle construction).
    pub fn occupy(&mut self, segment_codes: &[Code], ship_index: usize) {
        let mut entries: Vec<(Code, usize)> = self.occupied.in_order()
            .into_iter()
            .map(|c| (c, *self.occupied.get(c).expect("code came from in_order")))
            .collect();
        entries.extend(segment_codes.iter().map(|&c| (c, ship_index)));
        entries.sort_by_key(|&(c, _)| c);
        self.occupied = BalancedTree::build_sorted(entries);
    }

    pub fn is_occupied(&self, code: Code) -> bool {
        self.occupied.contains(code)
    }

    /// The ship index occupying `code`, if any.
    pub fn ship_at(&self, code: Code) -> Option<usize> {
        self.occupied.get(code).copied()
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.size()
    }

    pub fn has_shot(&self, code: Code) -> bool {
        self.shots_fired.contains(code)
    }

    pub fn record_shot(&mut self, code: Code, result: ShotResult) {
        self.shots_fired.insert(code, result);
    }

    pub fn shots(&self) -> Vec<(Code, ShotResult)> {
        self.shots_fired
            .in_order()
            .into_iter()
            .map(|c| (c, *self.shots_fired.get(c).expect("code came from in_order")))
            .collect()
    }

    pub fn shots_fired_count(&self) -> usize {
        self.shots_fired.size()
    }
}
