//! Unit pooling and spawn limits.

use std::collections::VecDeque;

use rand::{Rng, RngExt};
use sortie_core::UnitId;

use crate::unit::{Unit, UnitKind};

/// Hands out units up to a fixed limit, recycling despawned ones.
///
/// A pool of units is created up front. Spawning takes from the pool first
/// and only creates a fresh unit when the pool is empty.
#[derive(Debug, Clone)]
pub struct Spawner {
    pool: VecDeque<Unit>,
    next_id: u32,
    spawned: usize,
    spawn_limit: usize,
}

impl Spawner {
    /// Create a spawner with `pool_size` pre-built units of random kinds.
    pub fn new(pool_size: usize, spawn_limit: usize, rng: &mut impl Rng) -> Self {
        let mut spawner = Self {
            pool: VecDeque::with_capacity(pool_size),
            next_id: 0,
            spawned: 0,
            spawn_limit,
        };
        for _ in 0..pool_size {
            let kind = random_kind(rng);
            let unit = spawner.create(kind);
            spawner.pool.push_back(unit);
        }
        spawner
    }

    fn create(&mut self, kind: UnitKind) -> Unit {
        let id = UnitId(self.next_id);
        self.next_id += 1;
        Unit::new(id, kind)
    }

    /// Next unit to spawn, or `None` once the limit is reached.
    pub fn next(&mut self, rng: &mut impl Rng) -> Option<Unit> {
        if self.is_exhausted() {
            return None;
        }
        self.spawned += 1;
        let unit = match self.pool.pop_front() {
            Some(unit) => unit,
            None => {
                let kind = random_kind(rng);
                self.create(kind)
            }
        };
        Some(unit)
    }

    /// Next unit of a specific kind, preferring a pooled one.
    pub fn next_of(&mut self, kind: UnitKind) -> Option<Unit> {
        if self.is_exhausted() {
            return None;
        }
        self.spawned += 1;
        let unit = match self.pool.iter().position(|u| u.kind == kind) {
            Some(i) => self.pool.remove(i),
            None => None,
        };
        Some(unit.unwrap_or_else(|| self.create(kind)))
    }

    /// Return a unit to the pool. Its route is discarded.
    pub fn despawn(&mut self, mut unit: Unit) {
        unit.route.clear();
        self.pool.push_back(unit);
    }

    /// Give back a spawn that never made it onto the grid.
    pub fn refund(&mut self, unit: Unit) {
        self.spawned = self.spawned.saturating_sub(1);
        self.despawn(unit);
    }

    pub fn is_exhausted(&self) -> bool {
        self.spawned >= self.spawn_limit
    }

    pub fn spawned(&self) -> usize {
        self.spawned
    }

    pub fn remaining(&self) -> usize {
        self.spawn_limit.saturating_sub(self.spawned)
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }
}

fn random_kind(rng: &mut impl Rng) -> UnitKind {
    UnitKind::ALL[rng.random_range(0..UnitKind::ALL.len())]
}
