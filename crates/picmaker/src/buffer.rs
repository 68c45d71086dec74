use std::ops::{Index, IndexMut};

use crate::pixel::Pixel;

/// A rectangle of cells. `right` and `bottom` are exclusive.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Region {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl Region {
    pub fn new(left: usize, top: usize, right: usize, bottom: usize) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Square of side `size` whose top-left cell is (`top`, `left`).
    pub fn square(top: usize, left: usize, size: usize) -> Self {
        Self::new(left, top, left.saturating_add(size), top.saturating_add(size))
    }

    /// Intersect with a `width` x `height` buffer.
    pub fn bounded(self, width: usize, height: usize) -> Self {
        let right = self.right.min(width);
        let bottom = self.bottom.min(height);
        Self {
            left: self.left.min(right),
            top: self.top.min(bottom),
            right,
            bottom,
        }
    }

    pub fn width(&self) -> usize {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> usize {
        self.bottom.saturating_sub(self.top)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Fixed size grid of pixels stored row-major. Rows are `y`, columns are `x`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ImageBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl ImageBuffer {
    /// A `width` x `height` buffer with every cell black.
    ///
    /// Panics if `width * height` overflows. `Config::validate` rejects such sizes.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Pixel::BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn full_region(&self) -> Region {
        Region::new(0, 0, self.width, self.height)
    }

    pub fn clear(&mut self) {
        self.fill(Pixel::BLACK);
    }

    pub fn fill(&mut self, pixel: Pixel) {
        self.pixels.fill(pixel);
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Pixel> {
        if row < self.height && col < self.width {
            self.pixels.get(row * self.width + col)
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[Pixel] {
        let start = row * self.width;
        &self.pixels[start..start + self.width]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [Pixel] {
        let start = row * self.width;
        &mut self.pixels[start..start + self.width]
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Pixel]> {
        // `chunks_exact(0)` panics, a zero-width buffer still has `height` empty rows.
        (0..self.height).map(move |row| self.row(row))
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
}

impl Index<(usize, usize)> for ImageBuffer {
    type Output = Pixel;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(col < self.width, "column {col} out of bounds");
        &self.pixels[row * self.width + col]
    }
}

impl IndexMut<(usize, usize)> for ImageBuffer {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(col < self.width, "column {col} out of bounds");
        &mut self.pixels[row * self.width + col]
    }
}
