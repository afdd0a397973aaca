//! Collision detection and static resolution
//!
//! Everything that moves resolves against platforms with the same four-way
//! branch: the contact side is disambiguated using the pre-resolution
//! vertical velocity only, and the branch runs once per obstacle per tick.
//! Later obstacles in list order can override earlier corrections.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Right edge x coordinate
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge y coordinate
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict AABB overlap test (shared edges do not overlap)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

/// Which face of the obstacle a mover contacted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Landed on the obstacle's top face
    Top,
    /// Hit the obstacle's bottom face from below
    Bottom,
    /// Hit the obstacle's left face while moving right
    Left,
    /// Hit the obstacle's right face while moving left
    Right,
}

/// Width used to push a mover out of a [`Contact::Right`] overlap.
///
/// The player snaps flush to the obstacle's right edge; enemies snap by
/// their own width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideSnap {
    ObstacleWidth,
    MoverWidth,
}

/// Resolve a mover against a static obstacle.
///
/// Snaps the mover's position out of the overlap and zeroes the vertical
/// velocity for top/bottom contacts. The vertical branches test the
/// pre-resolution `vel.y`, so an entity resting exactly on a surface that
/// integrated one tick of gravity snaps back to where it started.
pub fn resolve_platform(
    pos: &mut Vec2,
    vel: &mut Vec2,
    size: Vec2,
    obstacle: &Aabb,
    side_snap: SideSnap,
) -> Option<Contact> {
    if !Aabb::new(*pos, size).overlaps(obstacle) {
        return None;
    }

    if vel.y > 0.0 && pos.y + size.y - vel.y <= obstacle.pos.y {
        // Landing on top
        pos.y = obstacle.pos.y - size.y;
        vel.y = 0.0;
        Some(Contact::Top)
    } else if vel.y < 0.0 && pos.y >= obstacle.bottom() {
        // Hitting the underside
        vel.y = 0.0;
        pos.y = obstacle.bottom();
        Some(Contact::Bottom)
    } else if vel.x > 0.0 {
        pos.x = obstacle.pos.x - size.x;
        Some(Contact::Left)
    } else if vel.x < 0.0 {
        let width = match side_snap {
            SideSnap::ObstacleWidth => obstacle.size.x,
            SideSnap::MoverWidth => size.x,
        };
        pos.x = obstacle.pos.x + width;
        Some(Contact::Right)
    } else {
        None
    }
}

/// Resolve against the world floor. Returns true if the mover is grounded.
///
/// Checked before obstacle collisions each tick.
pub fn resolve_floor(pos: &mut Vec2, vel: &mut Vec2, size: Vec2, floor_y: f32) -> bool {
    if pos.y + size.y >= floor_y {
        pos.y = floor_y - size.y;
        vel.y = 0.0;
        true
    } else {
        false
    }
}

/// Contact test between two circles approximating entity footprints.
///
/// Touching or overlapping within one pixel of slack counts as contact.
#[inline]
pub fn radial_contact(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) - radius_a - radius_b < 1.0
}
