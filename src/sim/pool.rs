//! Fixed-capacity obstacle arena
//!
//! Slots are addressed by index and reused first-fit: `acquire` always hands
//! out the lowest-numbered inactive slot, never the least recently freed one.
//! The pool owns every obstacle; callers only ever hold an `ObstacleHandle`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, past_left_edge};
use crate::SimError;

/// Index of a slot in an `ObstaclePool`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObstacleHandle(pub usize);

/// One pipe segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    /// Horizontal velocity (negative moves left)
    pub vel_x: f32,
    pub active: bool,
}

impl Obstacle {
    fn inactive() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel_x: 0.0,
            active: false,
        }
    }

    pub fn bounds(&self, size: Vec2) -> Aabb {
        Aabb::new(self.pos, size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePool {
    slots: Vec<Obstacle>,
    /// Shared size of every obstacle
    size: Vec2,
}

impl ObstaclePool {
    /// Create a pool with `capacity` inactive slots
    pub fn new(capacity: usize, size: Vec2) -> Self {
        Self {
            slots: vec![Obstacle::inactive(); capacity],
            size,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|o| o.active).count()
    }

    pub fn get(&self, handle: ObstacleHandle) -> Option<&Obstacle> {
        self.slots.get(handle.0)
    }

    /// Activate the first inactive slot at `pos`, moving with `vel_x`
    pub fn acquire(&mut self, pos: Vec2, vel_x: f32) -> Result<ObstacleHandle, SimError> {
        let capacity = self.capacity();
        let (index, slot) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, o)| !o.active)
            .ok_or(SimError::PoolExhausted { capacity })?;

        slot.pos = pos;
        slot.vel_x = vel_x;
        slot.active = true;
        Ok(ObstacleHandle(index))
    }

    /// Return a slot to the pool. Idempotent; unknown handles are ignored.
    pub fn release(&mut self, handle: ObstacleHandle) {
        if let Some(slot) = self.slots.get_mut(handle.0) {
            slot.active = false;
            slot.vel_x = 0.0;
        }
    }

    /// Visit active obstacles in slot order
    pub fn for_each_active<F: FnMut(ObstacleHandle, &Obstacle)>(&self, mut f: F) {
        for (i, o) in self.slots.iter().enumerate() {
            if o.active {
                f(ObstacleHandle(i), o);
            }
        }
    }

    /// Visit active obstacles mutably in slot order
    pub fn for_each_active_mut<F: FnMut(&mut Obstacle)>(&mut self, mut f: F) {
        for o in self.slots.iter_mut().filter(|o| o.active) {
            f(o);
        }
    }

    /// Iterator over active obstacles
    pub fn active(&self) -> impl Iterator<Item = &Obstacle> {
        self.slots.iter().filter(|o| o.active)
    }

    /// Integrate horizontal motion of every active obstacle
    pub fn advance(&mut self, dt: f32) {
        self.for_each_active_mut(|o| o.pos.x += o.vel_x * dt);
    }

    /// Release every active obstacle that has fully left through the left edge.
    /// Returns how many slots were freed.
    pub fn release_offscreen(&mut self, min_x: f32) -> usize {
        let size = self.size;
        let exited: Vec<ObstacleHandle> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, o)| o.active && past_left_edge(&o.bounds(size), min_x))
            .map(|(i, _)| ObstacleHandle(i))
            .collect();

        for handle in &exited {
            self.release(*handle);
        }
        exited.len()
    }

    /// True if `body` overlaps any active obstacle
    pub fn any_overlap(&self, body: &Aabb) -> bool {
        self.active().any(|o| o.bounds(self.size).overlaps(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(capacity: usize) -> ObstaclePool {
        ObstaclePool::new(capacity, Vec2::splat(50.0))
    }

    #[test]
    fn test_acquire_positions_slot() {
        let mut p = pool(4);
        let h = p.acquire(Vec2::new(400.0, 70.0), -200.0).unwrap();
        let o = p.get(h).unwrap();
        assert!(o.active);
        assert_eq!(o.pos, Vec2::new(400.0, 70.0));
        assert_eq!(o.vel_x, -200.0);
        assert_eq!(p.active_count(), 1);
    }

    #[test]
    fn test_first_fit_reuse() {
        let mut p = pool(3);
        let a = p.acquire(Vec2::ZERO, -1.0).unwrap();
        let b = p.acquire(Vec2::ZERO, -1.0).unwrap();
        let c = p.acquire(Vec2::ZERO, -1.0).unwrap();
        assert_eq!((a.0, b.0, c.0), (0, 1, 2));

        // Free the last slot first, then the first: next acquire takes slot 0
        p.release(c);
        p.release(a);
        assert_eq!(p.acquire(Vec2::ZERO, -1.0).unwrap(), ObstacleHandle(0));
        assert_eq!(p.acquire(Vec2::ZERO, -1.0).unwrap(), ObstacleHandle(2));
    }

    #[test]
    fn test_exhaustion_is_an_error() {
        let mut p = pool(2);
        p.acquire(Vec2::ZERO, -1.0).unwrap();
        p.acquire(Vec2::ZERO, -1.0).unwrap();
        let err = p.acquire(Vec2::ZERO, -1.0).unwrap_err();
        assert!(matches!(err, SimError::PoolExhausted { capacity: 2 }));
        assert_eq!(p.active_count(), 2);
    }

    #[test]
    fn test_double_release_is_noop() {
        let mut p = pool(2);
        let h = p.acquire(Vec2::ZERO, -1.0).unwrap();
        p.release(h);
        p.release(h);
        p.release(ObstacleHandle(99));
        assert_eq!(p.active_count(), 0);
    }

    #[test]
    fn test_release_offscreen() {
        let mut p = pool(3);
        p.acquire(Vec2::new(-49.0, 0.0), -200.0).unwrap();
        p.acquire(Vec2::new(-51.0, 60.0), -200.0).unwrap();
        p.acquire(Vec2::new(200.0, 120.0), -200.0).unwrap();
        assert_eq!(p.release_offscreen(0.0), 1);
        assert_eq!(p.active_count(), 2);
        assert!(!p.get(ObstacleHandle(1)).unwrap().active);
    }

    #[test]
    fn test_for_each_active_mut_freezes() {
        let mut p = pool(3);
        p.acquire(Vec2::ZERO, -200.0).unwrap();
        p.acquire(Vec2::ZERO, -200.0).unwrap();
        p.for_each_active_mut(|o| o.vel_x = 0.0);
        let mut seen = 0;
        p.for_each_active(|_, o| {
            assert_eq!(o.vel_x, 0.0);
            seen += 1;
        });
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_advance_moves_only_active() {
        let mut p = pool(2);
        let h = p.acquire(Vec2::new(400.0, 0.0), -200.0).unwrap();
        p.advance(0.5);
        assert_eq!(p.get(h).unwrap().pos.x, 300.0);
        assert_eq!(p.get(ObstacleHandle(1)).unwrap().pos.x, 0.0);
    }
}
