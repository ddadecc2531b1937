use bytemuck::{Pod, Zeroable};
use rand::seq::SliceRandom;
use rand::Rng;

/// Display color of a cell, laid out for direct upload to a host renderer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `255 - channel` on every channel.
    pub const fn inverted(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }
}

/// Which gradient channels feed R, G and B for one population.
///
/// Drawn once per populate and shared by every cell of that population. Each
/// entry indexes the five per-cell candidates computed by [`ChannelPermutation::color_at`]:
/// `0` column ramp, `1` row ramp, `2` inverted column ramp, `3` inverted row ramp, `4` full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelPermutation([usize; 4]);

impl ChannelPermutation {
    pub const IDENTITY: Self = Self([1, 2, 3, 4]);

    /// Shuffle `[1, 2, 3, 4]` with `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut order = Self::IDENTITY.0;
        order.shuffle(rng);
        Self(order)
    }

    /// Build from explicit candidate indices. Returns `None` unless `order` is a
    /// permutation of `[1, 2, 3, 4]`.
    pub fn from_order(order: [usize; 4]) -> Option<Self> {
        let mut sorted = order;
        sorted.sort_unstable();
        (sorted == Self::IDENTITY.0).then_some(Self(order))
    }

    pub fn order(&self) -> [usize; 4] {
        self.0
    }

    /// Color of the cell at `(col, row)` on a `width` x `height` board.
    pub fn color_at(&self, col: u32, row: u32, width: u32, height: u32) -> Rgb {
        let x = ramp(col, width);
        let y = ramp(row, height);
        let candidates = [x, y, 255 - x, 255 - y, 255];
        Rgb::new(
            candidates[self.0[0]],
            candidates[self.0[1]],
            candidates[self.0[2]],
        )
    }
}

/// `round(pos * 255 / len)`, rounding half to even.
fn ramp(pos: u32, len: u32) -> u8 {
    if len == 0 {
        return 0;
    }
    let value = (f64::from(pos) * 255.0 / f64::from(len)).round_ties_even();
    value.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn identity_uses_row_ramp_and_inverses() {
        let perm = ChannelPermutation::IDENTITY;
        assert_eq!(perm.color_at(0, 0, 10, 10), Rgb::new(0, 255, 255));
        // 3 * 255 / 10 = 76.5 -> 76, 5 * 255 / 10 = 127.5 -> 128
        assert_eq!(perm.color_at(3, 5, 10, 10), Rgb::new(128, 179, 127));
    }

    #[test]
    fn random_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let perm = ChannelPermutation::random(&mut rng);
            assert!(ChannelPermutation::from_order(perm.order()).is_some());
        }
    }

    #[test]
    fn from_order_rejects_column_ramp() {
        assert!(ChannelPermutation::from_order([0, 1, 2, 3]).is_none());
        assert!(ChannelPermutation::from_order([1, 1, 2, 3]).is_none());
        assert_eq!(
            ChannelPermutation::from_order([4, 3, 2, 1]).unwrap().color_at(2, 2, 4, 4),
            Rgb::new(255, 127, 127)
        );
    }

    #[test]
    fn inverted_flips_every_channel() {
        assert_eq!(Rgb::new(0, 128, 255).inverted(), Rgb::new(255, 127, 0));
        assert_eq!(Rgb::new(12, 34, 56).inverted().inverted(), Rgb::new(12, 34, 56));
    }

    #[test]
    fn rgb_is_three_bytes() {
        let colors = [Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)];
        assert_eq!(bytemuck::cast_slice::<Rgb, u8>(&colors), &[1, 2, 3, 4, 5, 6]);
    }
}
