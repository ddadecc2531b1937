use crate::color::Rgb;
use crate::grid::{Dimensions, Grid};

/// Render-ready copy of a grid: row-major liveness and colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub dimensions: Dimensions,
    pub generation: u64,
    /// 1.0 for alive, 0.0 for dead
    pub states: Vec<f32>,
    pub colors: Vec<Rgb>,
}

impl Frame {
    pub fn capture(grid: &Grid) -> Self {
        let cells = grid.cells();
        Self {
            dimensions: grid.dimensions(),
            generation: grid.generation(),
            states: cells.iter().map(|c| if c.is_alive() { 1.0 } else { 0.0 }).collect(),
            colors: cells.iter().map(|c| c.color()).collect(),
        }
    }

    pub fn state_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.states)
    }

    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Color to draw for each cell: its own color while alive, the inverse while dead.
    pub fn display_colors(&self) -> Vec<Rgb> {
        self.states
            .iter()
            .zip(&self.colors)
            .map(|(&s, &c)| if s > 0.5 { c } else { c.inverted() })
            .collect()
    }
}

impl Grid {
    pub fn frame(&self) -> Frame {
        Frame::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::PopType;

    #[test]
    fn frame_mirrors_cells() {
        let mut grid = Grid::new([2, 2], [6, 4]).unwrap().with_seed(3);
        grid.populate(PopType::Checkerboard, None).unwrap();
        let frame = grid.frame();

        assert_eq!(frame.dimensions, Dimensions::new(3, 2));
        assert_eq!(frame.states, vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
        assert_eq!(frame.state_bytes().len(), 6 * 4);
        assert_eq!(frame.color_bytes().len(), 6 * 3);
        assert_eq!(frame.colors[4], grid.cell(1, 1).unwrap().color());
        let shown = frame.display_colors();
        assert_eq!(shown[0], grid.cell(0, 0).unwrap().color().inverted());
        assert_eq!(shown[0], grid.cell(0, 0).unwrap().display_color());
        assert_eq!(shown[1], grid.cell(1, 0).unwrap().color());
        assert_eq!(shown[1], grid.cell(1, 0).unwrap().display_color());
    }
}
