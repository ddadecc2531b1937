//! Langton's-ant style agents walking the same torus as the Life cells
//!
//! Each ant turns by an amount chosen from the state of the cell it stands on,
//! flips that cell and steps forward one cell, wrapping at the edges.
use crate::color::Rgb;
use rand::Rng;

/// Direction an ant faces. Listed clockwise, with rows growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    pub fn turned(self, turn: Turn) -> Heading {
        Self::ALL[(self as usize + turn.quarter_turns()) % 4]
    }

    /// `(dcol, drow)` of one step forward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }
}

/// A turn in quarter steps, clockwise as seen on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Straight,
    Right,
    Back,
    Left,
}

impl Turn {
    /// Clockwise degrees, any multiple of 90 (negative turns left).
    pub fn from_degrees(degrees: i32) -> Option<Turn> {
        if degrees % 90 != 0 {
            return None;
        }
        Some(match (degrees / 90).rem_euclid(4) {
            0 => Turn::Straight,
            1 => Turn::Right,
            2 => Turn::Back,
            _ => Turn::Left,
        })
    }

    fn quarter_turns(self) -> usize {
        match self {
            Turn::Straight => 0,
            Turn::Right => 1,
            Turn::Back => 2,
            Turn::Left => 3,
        }
    }
}

/// How an ant turns on a dead and on a live cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AntRules {
    pub on_dead: Turn,
    pub on_alive: Turn,
}

impl AntRules {
    /// Classic Langton's ant: right on dead, left on alive.
    pub const LANGTON: Self = Self {
        on_dead: Turn::Right,
        on_alive: Turn::Left,
    };

    pub fn from_degrees(on_dead: i32, on_alive: i32) -> Option<Self> {
        Some(Self {
            on_dead: Turn::from_degrees(on_dead)?,
            on_alive: Turn::from_degrees(on_alive)?,
        })
    }

    pub fn turn_for(&self, alive: bool) -> Turn {
        if alive {
            self.on_alive
        } else {
            self.on_dead
        }
    }
}

/// Marker colors an ant may be drawn with.
pub const ANT_COLORS: [Rgb; 6] = [
    Rgb::new(164, 255, 164),
    Rgb::new(255, 255, 164),
    Rgb::new(255, 164, 164),
    Rgb::new(255, 164, 255),
    Rgb::new(164, 164, 255),
    Rgb::new(164, 255, 255),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ant {
    col: u32,
    row: u32,
    facing: Heading,
    rules: AntRules,
    color: Rgb,
}

impl Ant {
    pub fn new(col: u32, row: u32, facing: Heading, rules: AntRules, color: Rgb) -> Self {
        Self {
            col,
            row,
            facing,
            rules,
            color,
        }
    }

    /// An ant at a uniformly random cell of a `width` x `height` board.
    /// Both dimensions must be non-zero.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: u32, height: u32, rules: AntRules) -> Self {
        let facing = Heading::ALL[rng.gen_range(0..Heading::ALL.len())];
        let col = rng.gen_range(0..width);
        let row = rng.gen_range(0..height);
        let color = ANT_COLORS[rng.gen_range(0..ANT_COLORS.len())];
        Self::new(col, row, facing, rules, color)
    }

    /// `(col, row)`
    pub fn position(&self) -> (u32, u32) {
        (self.col, self.row)
    }

    pub fn facing(&self) -> Heading {
        self.facing
    }

    pub fn rules(&self) -> AntRules {
        self.rules
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Turn according to the state of the cell underneath.
    pub fn turn(&mut self, cell_alive: bool) {
        self.facing = self.facing.turned(self.rules.turn_for(cell_alive));
    }

    /// Step forward one cell on a `width` x `height` torus.
    pub fn advance(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let (dc, dr) = self.facing.delta();
        self.col = (i64::from(self.col) + i64::from(dc)).rem_euclid(i64::from(width)) as u32;
        self.row = (i64::from(self.row) + i64::from(dr)).rem_euclid(i64::from(height)) as u32;
    }
}
