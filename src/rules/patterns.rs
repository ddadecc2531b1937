/// Predefined patterns for seeding a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// A small stationary pattern
    Block,
    /// A small oscillator
    Blinker,
    /// A small oscillator
    Toad,
    /// A diagonal spaceship
    Glider,
    /// A horizontal spaceship
    LightweightSpaceship,
    /// A pattern that grows indefinitely
    GosperGliderGun,
}

impl Pattern {
    /// Offsets `(dcol, drow)` of the live cells, relative to the anchor cell.
    /// Offsets may be negative; callers wrap them onto the torus.
    pub fn offsets(&self) -> &'static [(i32, i32)] {
        match self {
            Pattern::Block => &[
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
            Pattern::Blinker => &[
                (0, -1), (0, 0), (0, 1),
            ],
            Pattern::Toad => &[
                (-1, 0), (0, 0), (1, 0),
                (-2, 1), (-1, 1), (0, 1),
            ],
            Pattern::Glider => &[
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
            Pattern::LightweightSpaceship => &[
                (0, 1), (0, 3),
                (1, 0),
                (2, 0),
                (3, 0), (3, 3),
                (4, 0), (4, 1), (4, 2),
            ],
            Pattern::GosperGliderGun => &[
                // Left block
                (1, 5), (1, 6),
                (2, 5), (2, 6),

                // Left ship
                (11, 5), (11, 6), (11, 7),
                (12, 4), (12, 8),
                (13, 3), (13, 9),
                (14, 3), (14, 9),
                (15, 6),
                (16, 4), (16, 8),
                (17, 5), (17, 6), (17, 7),
                (18, 6),

                // Right ship
                (21, 3), (21, 4), (21, 5),
                (22, 3), (22, 4), (22, 5),
                (23, 2), (23, 6),
                (25, 1), (25, 2), (25, 6), (25, 7),

                // Right block
                (35, 3), (35, 4),
                (36, 3), (36, 4),
            ],
        }
    }

    /// Cells of the pattern anchored at `(col, row)` on a `width` x `height` torus.
    pub fn cells(&self, col: u32, row: u32, width: u32, height: u32) -> Vec<(u32, u32)> {
        if width == 0 || height == 0 {
            return Vec::new();
        }
        self.offsets()
            .iter()
            .map(|&(dc, dr)| {
                let c = (i64::from(col) + i64::from(dc)).rem_euclid(i64::from(width));
                let r = (i64::from(row) + i64::from(dr)).rem_euclid(i64::from(height));
                (c as u32, r as u32)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_wrap_negative_offsets() {
        let cells = Pattern::Blinker.cells(0, 0, 5, 5);
        assert_eq!(cells, vec![(0, 4), (0, 0), (0, 1)]);
    }

    #[test]
    fn glider_gun_has_36_cells() {
        assert_eq!(Pattern::GosperGliderGun.offsets().len(), 36);
    }

    #[test]
    fn empty_board_has_no_cells() {
        assert!(Pattern::Block.cells(0, 0, 0, 3).is_empty());
    }
}
