//! First-child / next-sibling n-ary tree: Player -> Ships -> Segments.
//!
//! Every ship is a sibling of every other ship of the same player (all
//! hanging off the player's `first_child` chain); every segment is a
//! sibling of every other segment of its ship. Segment `hit` flags are
//! authoritative; "sunk" is always recomputed from its segments, never
//! stored (§4.3).
//!
//! The tree is backed by a flat arena (`Vec<Node>`) rather than owned
//! `Box` pointers: `markHit` is reached from the *outside* via a ship
//! index recovered from a [`crate::bst::BalancedTree`] lookup (see
//! `battleship_engine::game::board`), and an arena with plain `usize`
//! indices sidesteps the ownership cycle that a pointer from the BST
//! into a ship node would otherwise create (§9 design notes).

use crate::coord::Code;

enum Payload {
    Player,
    Ship { template_id: String, name: String, size: u8, placement_index: u32 },
    Segment { code: Code, hit: bool },
}

struct Node {
    payload: Payload,
    first_child: Option<usize>,
    next_sibling: Option<usize>,
}

/// A player's fleet: one root node plus one subtree per ship.
pub struct FleetTree {
    nodes: Vec<Node>,
    root: usize,
    /// Arena index of each ship's node, in the order ships were added.
    /// This is the "ship index" the occupied BST stores per coordinate.
    ship_nodes: Vec<usize>,
    last_ship: Option<usize>,
}

/// A read-only view of one ship, derived from the tree, for callers
/// that need to report fleet state (e.g. `getView`).
pub struct ShipView<'a> {
    pub template_id: &'a str,
    pub name: &'a str,
    pub size: u8,
    pub placement_index: u32,
    pub segments: Vec<(Code, bool)>,
    pub sunk: bool,
}

impl Default for FleetTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FleetTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node { payload: Payload::Player, first_child: None, next_sibling: None }],
            root: 0,
            ship_nodes: Vec::new(),
            last_ship: None,
        }
    }

    /// Appends a new ship as the last sibling in the ship chain, with
    /// its segments as children in coordinate order. Returns the ship
    /// index (0-based, insertion order) that the occupied BST should
    /// store alongside each of `segment_codes`.
    pub fn add_ship(
        &mut self,
        template_id: impl Into<String>,
        name: impl Into<String>,
        size: u8,
        placement_index: u32,
        segment_codes: &[Code],
    ) -> usize {
        let ship_idx = self.nodes.len();
        self.nodes.push(Node {
            payload: Payload::Ship {
                template_id: template_id.into(),
                name: name.into(),
                size,
                placement_index,
            },
            first_child: None,
            next_sibling: None,
        });

        let mut prev_segment: Option<usize> = None;
        for &code in segment_codes {
            let seg_idx = self.nodes.len();
            self.nodes.push(Node {
                payload: Payload::Segment { code, hit: false },
                first_child: None,
                next_sibling: None,
            });
            match prev_segment {
                None => self.nodes[ship_idx].first_child = Some(seg_idx),
                Some(prev) => self.nodes[prev].next_sibling = Some(seg_idx),
            }
            prev_segment = Some(seg_idx);
        }

        match self.last_ship {
            None => self.nodes[self.root].first_child = Some(ship_idx),
            Some(prev) => self.nodes[prev].next_sibling = Some(ship_idx),
        }
        self.last_ship = Some(ship_idx);

        let logical_index = self.ship_nodes.len();
        self.ship_nodes.push(ship_idx);
        logical_index
    }

    /// Walks every ship, then every segment of each ship, looking for
    /// `code`. Idempotent: calling it twice with the same code leaves
    /// the tree unchanged the second time and returns the same result.
    pub fn mark_hit(&mut self, code: Code) -> (bool, bool) {
        let mut ship = self.nodes[self.root].first_child;
        while let Some(ship_idx) = ship {
            if self.ship_has_segment(ship_idx, code) {
                let sunk = self.mark_segment_hit(ship_idx, code);
                return (true, sunk);
            }
            ship = self.nodes[ship_idx].next_sibling;
        }
        (false, false)
    }

    /// Same as [`mark_hit`](Self::mark_hit), but jumps straight to the
    /// ship at `ship_index` (as recovered from the occupied BST)
    /// instead of walking the whole ship chain. Returns `None` if
    /// `ship_index` is out of range or does not contain `code`.
    pub fn mark_hit_ship(&mut self, ship_index: usize, code: Code) -> Option<bool> {
        let ship_idx = *self.ship_nodes.get(ship_index)?;
        if !self.ship_has_segment(ship_idx, code) {
            return None;
        }
        Some(self.mark_segment_hit(ship_idx, code))
    }

    fn ship_has_segment(&self, ship_idx: usize, code: Code) -> bool {
        let mut seg = self.nodes[ship_idx].first_child;
        while let Some(seg_idx) = seg {
            if let Payload::Segment { code: c, .. } = self.nodes[seg_idx].payload {
                if c == code {
                    return true;
                }
            }
            seg = self.nodes[seg_idx].next_sibling;
        }
        false
    }

    /// Sets the hit flag on `code`'s segment within `ship_idx` (no-op
    /// if already set) and returns whether the ship is now fully sunk.
    fn mark_segment_hit(&mut self, ship_idx: usize, code: Code) -> bool {
        let mut seg = self.nodes[ship_idx].first_child;
        while let Some(seg_idx) = seg {
            if let Payload::Segment { code: c, hit } = &mut self.nodes[seg_idx].payload {
                if *c == code {
                    *hit = true;
                }
            }
            seg = self.nodes[seg_idx].next_sibling;
        }
        self.is_ship_sunk(ship_idx)
    }

    fn is_ship_sunk(&self, ship_idx: usize) -> bool {
        let mut seg = self.nodes[ship_idx].first_child;
        let mut saw_any = false;
        while let Some(seg_idx) = seg {
            saw_any = true;
            if let Payload::Segment { hit, .. } = self.nodes[seg_idx].payload {
                if !hit {
                    return false;
                }
            }
            seg = self.nodes[seg_idx].next_sibling;
        }
        saw_any
    }

    pub fn alive_ship_count(&self) -> usize {
        self.ship_nodes.iter().filter(|&&idx| !self.is_ship_sunk(idx)).count()
    }

    pub fn sunk_ship_count(&self) -> usize {
        self.ship_nodes.iter().filter(|&&idx| self.is_ship_sunk(idx)).count()
    }

    pub fn ship_count(&self) -> usize {
        self.ship_nodes.len()
    }

    pub fn all_sunk(&self) -> bool {
        !self.ship_nodes.is_empty() && self.ship_nodes.iter().all(|&idx| self.is_ship_sunk(idx))
    }

    pub fn ship_is_sunk(&self, ship_index: usize) -> Option<bool> {
        self.ship_nodes.get(ship_index).map(|&idx| self.is_ship_sunk(idx))
    }

    /// Read-only snapshot of every ship, in insertion order.
    pub fn ships(&self) -> Vec<ShipView<'_>> {
        self.ship_nodes.iter().map(|&idx| self.ship_view(idx)).collect()
    }

    fn ship_view(&self, ship_idx: usize) -> ShipView<'_> {
        let (template_id, name, size, placement_index) = match &self.nodes[ship_idx].payload {
            Payload::Ship { template_id, name, size, placement_index } => {
                (template_id.as_str(), name.as_str(), *size, *placement_index)
            }
            _ => unreachable!("ship_nodes only ever points at Ship nodes"),
        };

        let mut segments = Vec::new();
        let mut seg = self.nodes[ship_idx].first_child;
        while let Some(seg_idx) = seg {
            if let Payload::Segment { code, hit } = self.nodes[seg_idx].payload {
                segments.push((code, hit));
            }
            seg = self.nodes[seg_idx].next_sibling;
        }

        ShipView {
            template_id,
            name,
            size,
            placement_index,
            sunk: self.is_ship_sunk(ship_idx),
            segments,
        }
    }
}
