//! A running game: the grid, the units on it and the spawner feeding it.
//!
//! [`Session`] is passed explicitly to whatever drives the game; there is
//! no global engine. Each [`tick`](Session::tick) spawns at most one unit
//! and moves every unit one node along its route, reporting what happened
//! as [`Event`]s for a presentation layer to play back.

use rand::{Rng, RngExt};
use sortie_core::{Base, Blockade, BlockadeId, Grid, GridError, Point, UnitId};
use sortie_paths::{PathRange, SearchError, SearchKind, SearchMode};
use sortie_sorts::SortPlan;

use crate::config::SessionConfig;
use crate::spawner::Spawner;
use crate::unit::{Unit, UnitKind};

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A unit entered the grid at the spawn point with a planned route.
    Spawned { unit: UnitId, kind: UnitKind, route: Vec<Point> },
    /// No route to the base exists, so the unit went back to the pool.
    NoRoute { kind: UnitKind },
    /// A unit stepped from one node to the next.
    Moved { unit: UnitId, from: Point, to: Point },
    /// A unit sorted its way through a breakable blockade, which is gone.
    Encounter {
        unit: UnitId,
        at: Point,
        blockade: BlockadeId,
        plan: SortPlan<i32>,
    },
    /// A solid blockade appeared on the route and a new one was planned.
    Rerouted { unit: UnitId, route: Vec<Point> },
    /// The route is blocked and no alternative exists yet.
    Stuck { unit: UnitId, at: Point },
    /// A unit arrived at the base and left the grid.
    ReachedBase { unit: UnitId },
}

/// The state of one game.
pub struct Session<R: Rng> {
    config: SessionConfig,
    grid: Grid,
    paths: PathRange,
    spawner: Spawner,
    units: Vec<Unit>,
    rng: R,
    spawn: Point,
    goal: Point,
    next_blockade: u32,
}

impl<R: Rng> Session<R> {
    /// Build the grid, place the base on the last node and fill the pool.
    ///
    /// Fails when the configured grid has no nodes.
    pub fn new(config: SessionConfig, mut rng: R) -> Result<Self, GridError> {
        let mut grid = Grid::new(config.width, config.height);
        let spawn = Point::ZERO;
        let goal = grid.range().last().ok_or(GridError::OutOfBounds(spawn))?;
        grid.place_base(goal, Base::new("base"))?;

        let spawner = Spawner::new(config.pool_size, config.spawn_limit, &mut rng);
        log::info!(
            "new session {}x{}, spawn {spawn}, base {goal}",
            config.width,
            config.height
        );
        Ok(Self {
            paths: PathRange::new(grid.range()),
            grid,
            spawner,
            units: Vec::new(),
            rng,
            spawn,
            goal,
            next_blockade: 1,
            config,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Units currently on the grid, in spawn order.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    pub fn spawn_point(&self) -> Point {
        self.spawn
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    // -----------------------------------------------------------------------
    // Blockades
    // -----------------------------------------------------------------------

    /// A breakable blockade guarding a shuffled `0..sort_len` sequence.
    pub fn breakable_template(&mut self, name: &str) -> Blockade {
        let mut values: Vec<i32> = (0..self.config.sort_len as i32).collect();
        for i in (1..values.len()).rev() {
            let j = self.rng.random_range(0..=i);
            values.swap(i, j);
        }
        Blockade::breakable(BlockadeId(0), name, values)
    }

    /// Place a copy of `template` at `p` under a fresh id.
    ///
    /// The spawn point and the base are reserved; everything else follows
    /// [`Grid::place_blockade`].
    pub fn place_blockade(&mut self, p: Point, template: &Blockade) -> Result<BlockadeId, GridError> {
        if p == self.spawn || p == self.goal {
            return Err(GridError::Reserved(p));
        }
        let id = BlockadeId(self.next_blockade);
        self.grid.place_blockade(p, template.with_id(id))?;
        self.next_blockade += 1;
        Ok(id)
    }

    /// Place a copy of `template` on a random empty node.
    ///
    /// Returns `None` when every node other than the spawn point and the
    /// base is taken.
    pub fn random_blockade(&mut self, template: &Blockade) -> Option<(Point, BlockadeId)> {
        let free: Vec<Point> = self
            .grid
            .nodes()
            .iter()
            .filter(|n| n.is_empty() && n.pos() != self.spawn && n.pos() != self.goal)
            .map(|n| n.pos())
            .collect();
        if free.is_empty() {
            log::debug!("no free node left for a random blockade");
            return None;
        }
        let p = free[self.rng.random_range(0..free.len())];
        let id = self.place_blockade(p, template).ok()?;
        Some((p, id))
    }

    /// Remove the blockade at `p`, if any.
    pub fn clear_blockade(&mut self, p: Point) -> Option<Blockade> {
        self.grid.remove_blockade(p)
    }

    // -----------------------------------------------------------------------
    // Routing
    // -----------------------------------------------------------------------

    /// Route from `from` to the base using `kind`, excluding `from`.
    pub fn route(&mut self, kind: SearchKind, from: Point) -> Result<Vec<Point>, SearchError> {
        self.paths
            .find_path(&self.grid, from, self.goal, kind, SearchMode::Path)
    }

    /// Nodes `kind` expands on its way from `from` to the base.
    pub fn visited(&mut self, kind: SearchKind, from: Point) -> Result<Vec<Point>, SearchError> {
        self.paths
            .find_path(&self.grid, from, self.goal, kind, SearchMode::Visited)
    }

    // -----------------------------------------------------------------------
    // Spawning and movement
    // -----------------------------------------------------------------------

    /// Spawn the next pooled unit, if the limit allows.
    pub fn spawn(&mut self) -> Option<Event> {
        let unit = self.spawner.next(&mut self.rng)?;
        Some(self.enter(unit))
    }

    /// Spawn a unit of a specific kind, if the limit allows.
    pub fn spawn_kind(&mut self, kind: UnitKind) -> Option<Event> {
        let unit = self.spawner.next_of(kind)?;
        Some(self.enter(unit))
    }

    fn enter(&mut self, mut unit: Unit) -> Event {
        let kind = unit.kind;
        let route = match self.route(kind.search(), self.spawn) {
            Ok(route) => route,
            Err(err) => {
                log::info!("{} cannot spawn: {err}", kind.name());
                self.spawner.refund(unit);
                return Event::NoRoute { kind };
            }
        };
        if let Err(err) = self.grid.add_unit(self.spawn, unit.id) {
            log::warn!("{} cannot enter the grid: {err}", unit.id);
            self.spawner.refund(unit);
            return Event::NoRoute { kind };
        }
        log::info!("spawned {} ({}) with a {}-step route", unit.id, kind.name(), route.len());
        unit.pos = self.spawn;
        unit.route = route.iter().copied().collect();
        let id = unit.id;
        self.units.push(unit);
        Event::Spawned { unit: id, kind, route }
    }

    /// Spawn at most one unit, then advance every unit.
    pub fn tick(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        events.extend(self.spawn());
        events.extend(self.step());
        events
    }

    /// Advance every unit one node without spawning.
    pub fn step(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        let mut i = 0;
        while i < self.units.len() {
            events.extend(self.advance(i));

            let unit = &self.units[i];
            if unit.pos == self.goal && unit.route.is_empty() {
                let unit = self.units.remove(i);
                if let Err(err) = self.grid.remove_unit(unit.pos, unit.id) {
                    log::warn!("{err}");
                }
                log::info!("{} reached the base", unit.id);
                events.push(Event::ReachedBase { unit: unit.id });
                self.spawner.despawn(unit);
            } else {
                i += 1;
            }
        }
        events
    }

    /// Move unit `i` one node, or break the blockade in front of it.
    fn advance(&mut self, i: usize) -> Option<Event> {
        let unit = &mut self.units[i];
        let id = unit.id;
        let next = unit.next_step()?;

        if let Some(blockade) = self.grid.blockade_at(next) {
            if !blockade.is_breakable() {
                return Some(self.reroute(i));
            }
            let plan = SortPlan::new(unit.kind.sort(), blockade.values());
            let blockade_id = blockade.id();
            log::info!(
                "{id} breaks {blockade_id} at {next} with {} swaps",
                plan.swaps.len()
            );
            self.grid.remove_blockade(next);
            return Some(Event::Encounter {
                unit: id,
                at: next,
                blockade: blockade_id,
                plan,
            });
        }

        let from = unit.pos;
        if let Err(err) = self.grid.move_unit(from, next, id) {
            log::warn!("{id} cannot move: {err}");
            return None;
        }
        unit.pos = next;
        unit.route.pop_front();
        Some(Event::Moved { unit: id, from, to: next })
    }

    fn reroute(&mut self, i: usize) -> Event {
        let unit = &mut self.units[i];
        let search = unit.kind.search();
        match self
            .paths
            .find_path(&self.grid, unit.pos, self.goal, search, SearchMode::Path)
        {
            Ok(route) => {
                log::debug!("{} rerouted around a new blockade", unit.id);
                unit.route = route.iter().copied().collect();
                Event::Rerouted { unit: unit.id, route }
            }
            Err(err) => {
                log::debug!("{} is stuck: {err}", unit.id);
                Event::Stuck {
                    unit: unit.id,
                    at: unit.pos,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::ThreadRng;
    use sortie_sorts::{OFFSET, replay};

    use super::*;

    fn session(width: i32, height: i32) -> Session<ThreadRng> {
        let config = SessionConfig {
            width,
            height,
            pool_size: 0,
            spawn_limit: 10,
            sort_len: 6,
        };
        Session::new(config, rand::rng()).unwrap()
    }

    fn wall() -> Blockade {
        Blockade::solid(BlockadeId(0), "wall")
    }

    fn run_until_done(s: &mut Session<ThreadRng>, max_steps: usize) -> Vec<Event> {
        let mut all = Vec::new();
        for _ in 0..max_steps {
            if s.units().is_empty() {
                break;
            }
            all.extend(s.step());
        }
        all
    }

    #[test]
    fn base_sits_on_last_node() {
        let s = session(4, 3);
        assert_eq!(s.goal(), Point::new(3, 2));
        assert!(s.grid().has_base(Point::new(3, 2)));
        assert_eq!(s.spawn_point(), Point::ZERO);
    }

    #[test]
    fn empty_grid_is_rejected() {
        let config = SessionConfig {
            width: 0,
            ..SessionConfig::default()
        };
        assert!(Session::new(config, rand::rng()).is_err());
    }

    #[test]
    fn spawn_and_base_are_reserved() {
        let mut s = session(3, 3);
        assert_eq!(
            s.place_blockade(Point::ZERO, &wall()),
            Err(GridError::Reserved(Point::ZERO))
        );
        assert_eq!(
            s.place_blockade(Point::new(2, 2), &wall()),
            Err(GridError::Reserved(Point::new(2, 2)))
        );
    }

    #[test]
    fn placed_blockades_get_fresh_ids() {
        let mut s = session(3, 3);
        let a = s.place_blockade(Point::new(1, 0), &wall()).unwrap();
        let b = s.place_blockade(Point::new(1, 1), &wall()).unwrap();
        assert_ne!(a, b);
        assert!(s.place_blockade(Point::new(1, 1), &wall()).is_err());
        assert_eq!(s.grid().find_blockade(b), Some(Point::new(1, 1)));
    }

    #[test]
    fn breakable_template_is_a_permutation() {
        let mut s = session(3, 3);
        let t = s.breakable_template("crate");
        assert!(t.is_breakable());
        let mut values = t.values().to_vec();
        values.sort();
        assert_eq!(values, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn random_blockade_avoids_reserved_nodes() {
        let mut s = session(3, 3);
        for _ in 0..7 {
            let (p, _) = s.random_blockade(&wall()).unwrap();
            assert_ne!(p, s.spawn_point());
            assert_ne!(p, s.goal());
        }
        assert_eq!(s.grid().blockades().count(), 7);
        assert_eq!(s.random_blockade(&wall()), None);
    }

    #[test]
    fn unit_walks_to_base_and_is_pooled() {
        let mut s = session(3, 3);
        let Some(Event::Spawned { unit, route, .. }) = s.spawn_kind(UnitKind::Demon) else {
            panic!("expected a spawn");
        };
        assert_eq!(route.len(), 4);
        assert!(s.grid().has_units(Point::ZERO));

        let events = run_until_done(&mut s, 10);
        let moves = events
            .iter()
            .filter(|e| matches!(e, Event::Moved { .. }))
            .count();
        assert_eq!(moves, 4);
        assert_eq!(events.last(), Some(&Event::ReachedBase { unit }));
        assert!(s.units().is_empty());
        assert!(!s.grid().has_units(s.goal()));
        assert_eq!(s.spawner().pool_len(), 1);
    }

    #[test]
    fn sealed_base_means_no_route() {
        let mut s = session(3, 3);
        s.place_blockade(Point::new(2, 1), &wall()).unwrap();
        s.place_blockade(Point::new(1, 2), &wall()).unwrap();
        assert_eq!(
            s.spawn_kind(UnitKind::Banshee),
            Some(Event::NoRoute { kind: UnitKind::Banshee })
        );
        assert!(s.units().is_empty());
        assert_eq!(s.spawner().spawned(), 0);
    }

    #[test]
    fn breakable_blockade_triggers_encounter() {
        // Single corridor: the unit has to go through the crate.
        let mut s = session(4, 1);
        let crate_ = Blockade::breakable(BlockadeId(0), "crate", vec![3, 0, 2, 1]);
        let id = s.place_blockade(Point::new(2, 0), &crate_).unwrap();
        s.spawn_kind(UnitKind::DeathKnight);

        let events = run_until_done(&mut s, 10);
        let plan = events
            .iter()
            .find_map(|e| match e {
                Event::Encounter { blockade, plan, at, .. } if *blockade == id => {
                    assert_eq!(*at, Point::new(2, 0));
                    Some(plan.clone())
                }
                _ => None,
            })
            .expect("encounter");
        assert_eq!(plan.kind, UnitKind::DeathKnight.sort());
        assert_eq!(plan.sorted, vec![0, 1, 2, 3]);
        assert_eq!(replay(&plan.initial, &plan.swaps, OFFSET), plan.sorted);
        assert!(!s.grid().has_blockade(Point::new(2, 0)));
        assert!(matches!(events.last(), Some(Event::ReachedBase { .. })));
    }

    #[test]
    fn solid_blockade_on_route_forces_reroute() {
        let mut s = session(3, 3);
        s.spawn_kind(UnitKind::Demon);
        // Demon's route is (1,0) (2,0) (2,1) (2,2).
        s.place_blockade(Point::new(2, 0), &wall()).unwrap();
        s.step();
        let events = s.step();
        match &events[..] {
            [Event::Rerouted { route, .. }] => {
                assert_eq!(route, &vec![Point::new(1, 1), Point::new(2, 1), Point::new(2, 2)]);
            }
            other => panic!("unexpected {other:?}"),
        }
        let rest = run_until_done(&mut s, 10);
        assert!(matches!(rest.last(), Some(Event::ReachedBase { .. })));
    }

    #[test]
    fn stuck_unit_waits_for_a_route() {
        let mut s = session(3, 1);
        s.spawn_kind(UnitKind::Banshee);
        s.place_blockade(Point::new(1, 0), &wall()).unwrap();
        assert_eq!(
            s.step(),
            vec![Event::Stuck { unit: UnitId(0), at: Point::ZERO }]
        );
        s.clear_blockade(Point::new(1, 0));
        let rest = run_until_done(&mut s, 5);
        assert!(matches!(rest.last(), Some(Event::ReachedBase { .. })));
    }

    #[test]
    fn tick_respects_spawn_limit() {
        let config = SessionConfig {
            width: 6,
            height: 6,
            pool_size: 2,
            spawn_limit: 3,
            sort_len: 4,
        };
        let mut s = Session::new(config, rand::rng()).unwrap();
        let mut spawned = 0;
        for _ in 0..20 {
            spawned += s
                .tick()
                .iter()
                .filter(|e| matches!(e, Event::Spawned { .. }))
                .count();
        }
        assert_eq!(spawned, 3);
        assert!(s.spawner().is_exhausted());
    }

    #[test]
    fn visited_trace_ends_at_base() {
        let mut s = session(4, 4);
        for kind in SearchKind::ALL {
            let trace = s.visited(kind, Point::ZERO).unwrap();
            assert_eq!(trace.first(), Some(&Point::ZERO));
            assert_eq!(trace.last(), Some(&s.goal()));
            assert_eq!(s.route(kind, Point::ZERO).unwrap().last(), Some(&s.goal()));
        }
    }
}
