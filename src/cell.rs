use crate::color::Rgb;
use crate::rules::GameRules;

/// Number of neighbor links every cell carries on a torus.
pub const NEIGHBOR_COUNT: usize = 8;

/// Outcome of evaluating one cell for the next generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Born,
    Died,
    Unchanged,
}

impl Transition {
    pub(crate) fn between(alive: bool, next: bool) -> Self {
        match (alive, next) {
            (false, true) => Transition::Born,
            (true, false) => Transition::Died,
            _ => Transition::Unchanged,
        }
    }
}

/// One cell of a [`Grid`](crate::grid::Grid).
///
/// Neighbors are stored as indices into the grid's row-major cell arena, so
/// the grid stays the sole owner of every cell.
#[derive(Debug, Clone)]
pub struct Cell {
    col: u32,
    row: u32,
    state: bool,
    pending: bool,
    color: Rgb,
    neighbors: [usize; NEIGHBOR_COUNT],
}

impl Cell {
    /// A cell with no neighbor links yet; call [`Cell::update_neighbors`] once
    /// the whole arena exists.
    pub fn new(col: u32, row: u32, alive: bool, color: Rgb) -> Self {
        Self {
            col,
            row,
            state: alive,
            pending: alive,
            color,
            neighbors: [0; NEIGHBOR_COUNT],
        }
    }

    /// `(col, row)`
    pub fn position(&self) -> (u32, u32) {
        (self.col, self.row)
    }

    pub fn is_alive(&self) -> bool {
        self.state
    }

    /// Liveness decided by the last evaluation. Equal to the current state
    /// whenever no evaluation is outstanding.
    pub fn pending_state(&self) -> bool {
        self.pending
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Color to draw while dead: the inverse of the live color.
    pub fn dead_color(&self) -> Rgb {
        self.color.inverted()
    }

    /// Color for the current state.
    pub fn display_color(&self) -> Rgb {
        if self.state {
            self.color
        } else {
            self.dead_color()
        }
    }

    /// Arena indices of the 8 neighbors: left, right, up, down, up-left,
    /// down-right, down-left, up-right.
    pub fn neighbors(&self) -> &[usize; NEIGHBOR_COUNT] {
        &self.neighbors
    }

    /// Link the 8 wrapped neighbors on a `width` x `height` torus.
    pub fn update_neighbors(&mut self, width: u32, height: u32) {
        debug_assert!(self.col < width && self.row < height);
        let (x, y) = (self.col, self.row);
        let left = if x == 0 { width - 1 } else { x - 1 };
        let right = if x + 1 == width { 0 } else { x + 1 };
        let up = if y == 0 { height - 1 } else { y - 1 };
        let down = if y + 1 == height { 0 } else { y + 1 };

        let index = |c: u32, r: u32| r as usize * width as usize + c as usize;
        self.neighbors = [
            index(left, y),
            index(right, y),
            index(x, up),
            index(x, down),
            index(left, up),
            index(right, down),
            index(left, down),
            index(right, up),
        ];
    }

    /// Live neighbors among `cells`, read from their current state.
    pub fn live_neighbors(&self, cells: &[Cell]) -> u8 {
        self.neighbors
            .iter()
            .filter(|&&i| cells[i].state)
            .count() as u8
    }

    /// Decide the next state from the current states in `cells`. Does not
    /// touch this cell; the grid stores the result with [`Cell::set_pending`].
    pub fn evaluate_next(&self, cells: &[Cell], rules: &GameRules) -> (bool, Transition) {
        let next = rules.next_state(self.state, self.live_neighbors(cells));
        (next, Transition::between(self.state, next))
    }

    pub(crate) fn set_pending(&mut self, next: bool) {
        self.pending = next;
    }

    pub fn commit(&mut self) {
        self.state = self.pending;
    }

    /// Force liveness outside the evaluate/commit cycle. The pending state
    /// follows, so the edit survives the next commit. Returns the transition.
    pub(crate) fn set_alive(&mut self, alive: bool) -> Transition {
        let transition = Transition::between(self.state, alive);
        self.state = alive;
        self.pending = alive;
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena(width: u32, height: u32, alive: &[(u32, u32)]) -> Vec<Cell> {
        let mut cells: Vec<Cell> = (0..height)
            .flat_map(|r| (0..width).map(move |c| (c, r)))
            .map(|(c, r)| Cell::new(c, r, alive.contains(&(c, r)), Rgb::default()))
            .collect();
        for cell in &mut cells {
            cell.update_neighbors(width, height);
        }
        cells
    }

    #[test]
    fn corner_wraps_to_all_edges() {
        let cells = arena(5, 4, &[]);
        let mut linked: Vec<(u32, u32)> = cells[0]
            .neighbors()
            .iter()
            .map(|&i| cells[i].position())
            .collect();
        linked.sort_unstable();
        assert_eq!(
            linked,
            vec![(0, 1), (0, 3), (1, 0), (1, 1), (1, 3), (4, 0), (4, 1), (4, 3)]
        );
    }

    #[test]
    fn single_column_links_to_itself() {
        let cells = arena(1, 3, &[]);
        let n = cells[1].neighbors();
        assert_eq!(n[0], 1);
        assert_eq!(n[1], 1);
        assert_eq!(n[2], 0);
        assert_eq!(n[3], 2);
    }

    #[test]
    fn evaluate_does_not_mutate() {
        let cells = arena(4, 4, &[(1, 0), (1, 1), (1, 2)]);
        let middle = &cells[4 + 1];
        assert_eq!(middle.live_neighbors(&cells), 2);
        assert_eq!(middle.evaluate_next(&cells, &GameRules::conway()), (true, Transition::Unchanged));

        let side = &cells[4];
        assert_eq!(side.evaluate_next(&cells, &GameRules::conway()), (true, Transition::Born));
        assert!(!side.is_alive());

        let top = &cells[1];
        assert_eq!(top.evaluate_next(&cells, &GameRules::conway()), (false, Transition::Died));
    }

    #[test]
    fn edit_and_commit() {
        let mut cell = Cell::new(0, 0, false, Rgb::default());
        assert_eq!(cell.set_alive(true), Transition::Born);
        assert!(cell.pending_state());
        cell.set_pending(false);
        cell.commit();
        assert!(!cell.is_alive());
        assert_eq!(cell.set_alive(true), Transition::Born);
        assert_eq!(cell.set_alive(true), Transition::Unchanged);
    }
}
