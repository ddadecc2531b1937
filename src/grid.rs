use crate::ant::{Ant, AntRules};
use crate::cell::{Cell, Transition};
use crate::color::ChannelPermutation;
use crate::error::{ConfigError, PopulateError};
use crate::rules::{GameRules, Pattern};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

/// Grid size in cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// How [`Grid::populate`] decides the initial liveness of each cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopType {
    /// Each cell is alive with the given probability
    Percentage,
    /// Alive where `col + row` is odd
    Checkerboard,
    /// Alive on odd columns
    Lines,
    /// Alive on the outer border
    Edges,
    /// Every cell dead
    Blank,
}

impl PopType {
    fn is_alive<R: Rng + ?Sized>(&self, col: u32, row: u32, dims: Dimensions, chance: f32, rng: &mut R) -> bool {
        match self {
            PopType::Percentage => rng.gen::<f32>() < chance,
            PopType::Checkerboard => (col + row) % 2 == 1,
            PopType::Lines => col % 2 == 1,
            PopType::Edges => col == 0 || row == 0 || col == dims.width - 1 || row == dims.height - 1,
            PopType::Blank => false,
        }
    }
}

impl FromStr for PopType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "percentage" | "random" => Ok(PopType::Percentage),
            "checkerboard" => Ok(PopType::Checkerboard),
            "lines" => Ok(PopType::Lines),
            "edges" => Ok(PopType::Edges),
            "blank" | "empty" => Ok(PopType::Blank),
            _ => Err(ConfigError::UnknownStrategy(s.trim().to_string())),
        }
    }
}

/// Where the grid is within one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepPhase {
    Settled,
    /// Pending states are computed and the living count already reflects them.
    Evaluated { committed_living: usize },
}

/// A toroidal Life board.
///
/// Cells live in a row-major arena (`index = row * width + col`). A step is
/// [`Grid::evaluate_all`] followed by [`Grid::commit_all`]; the first only reads
/// current states, the second is the only pass that writes them.
#[derive(Debug, Clone)]
pub struct Grid {
    cell_size: [u32; 2],
    dims: Dimensions,
    pending_dims: Dimensions,
    cells: Vec<Cell>,
    living_cells: usize,
    generation: u64,
    rules: GameRules,
    palette: ChannelPermutation,
    phase: StepPhase,
    ants: Vec<Ant>,
    rng: StdRng,
}

impl Grid {
    /// An unpopulated grid whose pending size is `board_size / cell_size`.
    pub fn new(cell_size: [u32; 2], board_size: [u32; 2]) -> Result<Self, ConfigError> {
        if cell_size[0] == 0 || cell_size[1] == 0 {
            return Err(ConfigError::ZeroCellSize(cell_size[0], cell_size[1]));
        }
        let mut grid = Self {
            cell_size,
            dims: Dimensions::default(),
            pending_dims: Dimensions::default(),
            cells: Vec::new(),
            living_cells: 0,
            generation: 0,
            rules: GameRules::default(),
            palette: ChannelPermutation::IDENTITY,
            phase: StepPhase::Settled,
            ants: Vec::new(),
            rng: StdRng::from_entropy(),
        };
        grid.set_pending_size(board_size);
        Ok(grid)
    }

    /// Replace the grid's random source with a seeded one.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.reseed(seed);
        self
    }

    pub fn with_rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }

    /// Stage new dimensions for the next populate. Does not touch live cells.
    pub fn set_pending_size(&mut self, board_size: [u32; 2]) {
        self.pending_dims = Dimensions::new(
            board_size[0] / self.cell_size[0],
            board_size[1] / self.cell_size[1],
        );
        if self.pending_dims.is_empty() {
            log::warn!(
                "Board size {}x{} holds no {}x{} cells, next populate yields an empty grid",
                board_size[0], board_size[1], self.cell_size[0], self.cell_size[1]
            );
        } else {
            log::info!("Pending grid size set to {}", self.pending_dims);
        }
    }

    /// Board size in pixels, of the populated grid when `use_current`, else of the staged one.
    pub fn pixel_size(&self, use_current: bool) -> [u32; 2] {
        let dims = if use_current { self.dims } else { self.pending_dims };
        [dims.width * self.cell_size[0], dims.height * self.cell_size[1]]
    }

    /// Rebuild every cell using the grid's own random source.
    pub fn populate(&mut self, strategy: PopType, percentage: Option<f32>) -> Result<(), PopulateError> {
        let (cells, living, palette) =
            build_population(self.pending_dims, strategy, percentage, &mut self.rng)?;
        self.install(cells, living, palette, strategy);
        Ok(())
    }

    /// Rebuild every cell drawing randomness from `rng`.
    pub fn populate_with_rng<R: Rng + ?Sized>(
        &mut self,
        strategy: PopType,
        percentage: Option<f32>,
        rng: &mut R,
    ) -> Result<(), PopulateError> {
        let (cells, living, palette) = build_population(self.pending_dims, strategy, percentage, rng)?;
        self.install(cells, living, palette, strategy);
        Ok(())
    }

    fn install(&mut self, cells: Vec<Cell>, living: usize, palette: ChannelPermutation, strategy: PopType) {
        self.dims = self.pending_dims;
        self.cells = cells;
        self.living_cells = living;
        self.generation = 0;
        self.palette = palette;
        self.phase = StepPhase::Settled;
        self.ants.clear();

        let Dimensions { width, height } = self.dims;
        for cell in &mut self.cells {
            cell.update_neighbors(width, height);
        }

        log::info!(
            "Populated {} grid ({:?}) with {} living cells, rules {}",
            self.dims, strategy, self.living_cells, self.rules
        );
    }

    /// Toggle the cell under a pixel position of the populated board.
    /// Positions outside the board are ignored. Returns whether a cell flipped.
    pub fn flip_tile(&mut self, pixel: [f32; 2]) -> bool {
        let [board_w, board_h] = self.pixel_size(true);
        let inside = |p: f32, max: u32| p.is_finite() && p >= 0.0 && p < max as f32;
        if !inside(pixel[0], board_w) || !inside(pixel[1], board_h) {
            return false;
        }
        let col = (pixel[0] / self.cell_size[0] as f32).floor() as u32;
        let row = (pixel[1] / self.cell_size[1] as f32).floor() as u32;
        self.flip_cell(col, row)
    }

    /// Toggle the cell at `(col, row)`. Returns `false` when out of bounds.
    ///
    /// Edits between [`Grid::evaluate_all`] and [`Grid::commit_all`] keep the
    /// evaluated step: only the edited cell's pending state changes with it.
    pub fn flip_cell(&mut self, col: u32, row: u32) -> bool {
        let Some(index) = self.index(col, row) else {
            return false;
        };
        let alive = !self.cells[index].is_alive();
        self.edit_cell(index, alive);
        log::debug!("Flipped cell ({col}, {row}), {} living", self.living_cells);
        true
    }

    /// Force the cell at `(col, row)` alive or dead. Returns `false` when out of bounds.
    pub fn set_alive(&mut self, col: u32, row: u32, alive: bool) -> bool {
        let Some(index) = self.index(col, row) else {
            return false;
        };
        self.edit_cell(index, alive);
        true
    }

    /// Set the pattern's cells alive, anchored at `(col, row)` and wrapped onto the torus.
    pub fn stamp(&mut self, pattern: Pattern, col: u32, row: u32) {
        let Dimensions { width, height } = self.dims;
        for (c, r) in pattern.cells(col, row, width, height) {
            let index = r as usize * width as usize + c as usize;
            self.edit_cell(index, true);
        }
        log::debug!("Stamped {pattern:?} at ({col}, {row}), {} living", self.living_cells);
    }

    /// Kill every cell. Neighbor links are kept.
    pub fn clear(&mut self) {
        for index in 0..self.cells.len() {
            self.edit_cell(index, false);
        }
    }

    /// Place one ant per entry of `rules` at a random cell with a random heading,
    /// drawn from the grid's random source. Returns how many were placed.
    pub fn spawn_ants(&mut self, rules: &[AntRules]) -> usize {
        if self.dims.is_empty() {
            log::warn!("Ignoring {} ants on an empty {} grid", rules.len(), self.dims);
            return 0;
        }
        let Dimensions { width, height } = self.dims;
        for &ant_rules in rules {
            let ant = Ant::random(&mut self.rng, width, height, ant_rules);
            self.ants.push(ant);
        }
        log::info!("Spawned {} ants, {} on the board", rules.len(), self.ants.len());
        rules.len()
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    pub fn clear_ants(&mut self) {
        self.ants.clear();
    }

    /// Move every ant once: turn by the state of its cell, flip that cell, step forward.
    pub fn update_ants(&mut self) {
        let Dimensions { width, height } = self.dims;
        for i in 0..self.ants.len() {
            let mut ant = self.ants[i];
            let (col, row) = ant.position();
            let alive = self.cell(col, row).map_or(false, Cell::is_alive);
            ant.turn(alive);
            self.flip_cell(col, row);
            ant.advance(width, height);
            self.ants[i] = ant;
        }
    }

    /// Decide every cell's pending state from the current states.
    ///
    /// The living count is updated here, so after this call it already
    /// describes the generation that [`Grid::commit_all`] will produce.
    /// Evaluating again before committing recomputes from the committed count.
    pub fn evaluate_all(&mut self) {
        let committed_living = match self.phase {
            StepPhase::Evaluated { committed_living } => committed_living,
            StepPhase::Settled => self.living_cells,
        };

        let decisions: Vec<(bool, Transition)> = self
            .cells
            .iter()
            .map(|cell| cell.evaluate_next(&self.cells, &self.rules))
            .collect();

        let mut living = committed_living;
        for (cell, (next, transition)) in self.cells.iter_mut().zip(decisions) {
            cell.set_pending(next);
            match transition {
                Transition::Born => living += 1,
                Transition::Died => living -= 1,
                Transition::Unchanged => {}
            }
        }

        self.living_cells = living;
        self.phase = StepPhase::Evaluated { committed_living };
    }

    /// Move every cell to its pending state and advance the generation.
    pub fn commit_all(&mut self) {
        for cell in &mut self.cells {
            cell.commit();
        }
        self.generation += 1;
        self.phase = StepPhase::Settled;
        log::debug!("Generation {}: {} living cells", self.generation, self.living_cells);
    }

    /// One full generation.
    pub fn step(&mut self) {
        self.evaluate_all();
        self.commit_all();
    }

    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// Swap the rules without repopulating. An outstanding evaluation is
    /// redone under the new rules.
    pub fn set_rules(&mut self, rules: GameRules) {
        self.rules = rules;
        log::info!("Game rules changed to {}", self.rules);
        if let StepPhase::Evaluated { .. } = self.phase {
            self.evaluate_all();
        }
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn pending_dimensions(&self) -> Dimensions {
        self.pending_dims
    }

    pub fn cell_size(&self) -> [u32; 2] {
        self.cell_size
    }

    pub fn living_cells(&self) -> usize {
        self.living_cells
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Channel permutation drawn by the last populate.
    pub fn palette(&self) -> ChannelPermutation {
        self.palette
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One slice per row. A `0 x H` grid yields `H` empty rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        let width = self.dims.width as usize;
        (0..self.dims.height as usize).map(move |r| &self.cells[r * width..(r + 1) * width])
    }

    pub fn cell(&self, col: u32, row: u32) -> Option<&Cell> {
        self.index(col, row).map(|i| &self.cells[i])
    }

    fn index(&self, col: u32, row: u32) -> Option<usize> {
        (col < self.dims.width && row < self.dims.height)
            .then(|| row as usize * self.dims.width as usize + col as usize)
    }

    /// Apply a manual edit. The committed count follows the state change, the
    /// living count follows the pending change.
    fn edit_cell(&mut self, index: usize, alive: bool) {
        let was_pending = self.cells[index].pending_state();
        let transition = self.cells[index].set_alive(alive);
        if let StepPhase::Evaluated { committed_living } = &mut self.phase {
            shift_count(committed_living, transition);
        }
        shift_count(&mut self.living_cells, Transition::between(was_pending, alive));
    }
}

fn shift_count(count: &mut usize, transition: Transition) {
    match transition {
        Transition::Born => *count += 1,
        Transition::Died => *count -= 1,
        Transition::Unchanged => {}
    }
}

/// Validate the request, then build the cells of one population in row-major order.
fn build_population<R: Rng + ?Sized>(
    dims: Dimensions,
    strategy: PopType,
    percentage: Option<f32>,
    rng: &mut R,
) -> Result<(Vec<Cell>, usize, ChannelPermutation), PopulateError> {
    let chance = match (strategy, percentage) {
        (PopType::Percentage, None) => return Err(PopulateError::MissingPercentage),
        (PopType::Percentage, Some(p)) if !(0.0..=1.0).contains(&p) => {
            return Err(PopulateError::PercentageOutOfRange(p))
        }
        (_, p) => p.unwrap_or(0.0),
    };

    let palette = ChannelPermutation::random(rng);
    let mut cells = Vec::with_capacity(dims.cell_count());
    let mut living = 0;
    for row in 0..dims.height {
        for col in 0..dims.width {
            let alive = strategy.is_alive(col, row, dims, chance, rng);
            living += usize::from(alive);
            let color = palette.color_at(col, row, dims.width, dims.height);
            cells.push(Cell::new(col, row, alive, color));
        }
    }
    Ok((cells, living, palette))
}
