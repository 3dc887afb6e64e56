//! Enemy units and the algorithms each kind carries.

use std::collections::VecDeque;

use sortie_core::{Point, UnitId};
use sortie_paths::SearchKind;
use sortie_sorts::SortKind;

/// The kinds of unit a spawner can produce.
///
/// Each kind pairs the search it routes with and the sort it uses to break
/// through blockades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitKind {
    Banshee,
    Demon,
    DeathKnight,
}

impl UnitKind {
    pub const ALL: [UnitKind; 3] = [UnitKind::Banshee, UnitKind::Demon, UnitKind::DeathKnight];

    pub fn name(self) -> &'static str {
        match self {
            UnitKind::Banshee => "Banshee",
            UnitKind::Demon => "Demon",
            UnitKind::DeathKnight => "Death knight",
        }
    }

    pub fn search(self) -> SearchKind {
        match self {
            UnitKind::Banshee => SearchKind::DepthFirst,
            UnitKind::Demon => SearchKind::BreadthFirst,
            UnitKind::DeathKnight => SearchKind::AStar,
        }
    }

    pub fn sort(self) -> SortKind {
        match self {
            UnitKind::Banshee => SortKind::Bubble,
            UnitKind::Demon => SortKind::Selection,
            UnitKind::DeathKnight => SortKind::Insertion,
        }
    }

    /// Name, search and sort on separate lines, for info panels.
    pub fn description(self) -> String {
        format!(
            "Name: {}\nSearch: {}\nSort: {}",
            self.name(),
            self.search().label(),
            self.sort().label()
        )
    }
}

/// A unit, either pooled or walking the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub id: UnitId,
    pub kind: UnitKind,
    pub pos: Point,
    /// Nodes still to walk, next step first.
    pub route: VecDeque<Point>,
}

impl Unit {
    pub fn new(id: UnitId, kind: UnitKind) -> Self {
        Self {
            id,
            kind,
            pos: Point::ZERO,
            route: VecDeque::new(),
        }
    }

    /// The node the unit will try to enter next.
    pub fn next_step(&self) -> Option<Point> {
        self.route.front().copied()
    }
}
