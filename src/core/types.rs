//! Flappy Bird data structures.

/// Whether a round is still in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundStatus {
    #[default]
    Running,
    Over,
}

/// Which half of a pipe pair this is. Only affects the sprite drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeKind {
    Top,
    Bottom,
}

/// Axis-aligned rectangle in world units (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Strict overlap on both axes; rectangles that only share an edge do not
    /// overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// The player's bird.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bird {
    /// Fixed column.
    pub x: i32,
    /// Top edge. Never negative after a tick.
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Vertical velocity in units/tick (positive = downward).
    pub velocity_y: i32,
}

impl Bird {
    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// One half of a pipe obstacle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipe {
    pub x: i32,
    /// Set at spawn, never changes.
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub kind: PipeKind,
    /// Whether the bird has flown past this pipe (for scoring).
    pub passed: bool,
}

impl Pipe {
    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    /// True once the right edge has left the playfield.
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0
    }
}

/// AABB test between the bird and a pipe.
pub fn collision(bird: &Bird, pipe: &Pipe) -> bool {
    bird.bounds().overlaps(&pipe.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bird_at(x: i32, y: i32) -> Bird {
        Bird {
            x,
            y,
            width: 34,
            height: 24,
            velocity_y: 0,
        }
    }

    fn pipe_at(x: i32, y: i32) -> Pipe {
        Pipe {
            x,
            y,
            width: 64,
            height: 512,
            kind: PipeKind::Top,
            passed: false,
        }
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        // Bird's right edge on the pipe's left edge
        assert!(!collision(&bird_at(0, 100), &pipe_at(34, 0)));
        // Bird's left edge on the pipe's right edge
        assert!(!collision(&bird_at(64, 100), &pipe_at(0, 0)));
        // Bird's top edge on the pipe's bottom edge
        assert!(!collision(&bird_at(10, 512), &pipe_at(0, 0)));
        // Bird's bottom edge on the pipe's top edge
        assert!(!collision(&bird_at(10, 0), &pipe_at(0, 24)));
    }

    #[test]
    fn test_one_unit_overlap_collides() {
        assert!(collision(&bird_at(1, 100), &pipe_at(34, 0)));
        assert!(collision(&bird_at(63, 100), &pipe_at(0, 0)));
        assert!(collision(&bird_at(10, 511), &pipe_at(0, 0)));
        assert!(collision(&bird_at(10, 1), &pipe_at(0, 24)));
    }

    #[test]
    fn test_overlap_on_one_axis_only() {
        // Same rows, different columns
        assert!(!collision(&bird_at(200, 100), &pipe_at(0, 0)));
        // Same columns, different rows
        assert!(!collision(&bird_at(10, 600), &pipe_at(0, 0)));
    }

    #[test]
    fn test_bounds_overlap_is_symmetric() {
        let a = bird_at(20, 500).bounds();
        let b = pipe_at(0, 0).bounds();
        assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn test_pipe_off_screen_edge() {
        assert!(!pipe_at(-64, 0).is_off_screen());
        assert!(pipe_at(-65, 0).is_off_screen());
    }
}
