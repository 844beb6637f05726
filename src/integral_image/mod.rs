extern crate nalgebra as na;

use na::DMatrix;

use crate::{CorrelatorError, Float};

/// Summed-area table over a luminosity grid. Cell (r,c) holds the sum of all
/// source values with row <= r and col <= c, giving O(1) rectangle sums.
///
/// Immutable after construction, safe to share read-only between layer
/// computations.
#[derive(Debug, Clone)]
pub struct IntegralImage {
    matrix: DMatrix<Float>,
    pub height: usize,
    pub width: usize,
}

impl IntegralImage {
    pub fn new(luminosity: &DMatrix<Float>) -> Result<IntegralImage, CorrelatorError> {
        let height = luminosity.nrows();
        let width = luminosity.ncols();

        if height == 0 || width == 0 {
            return Err(CorrelatorError::InvalidInput);
        }

        let mut matrix = DMatrix::<Float>::zeros(height, width);

        for r in 0..height {
            for c in 0..width {
                let val = luminosity[(r, c)];

                let diag = if r >= 1 && c >= 1 { matrix[(r - 1, c - 1)] } else { 0.0 };
                let left = if c >= 1 { matrix[(r, c - 1)] } else { 0.0 };
                let top = if r >= 1 { matrix[(r - 1, c)] } else { 0.0 };

                matrix[(r, c)] = val - diag + left + top;
            }
        }

        Ok(IntegralImage { matrix, height, width })
    }

    /// Prefix sum at (row,col), 0 outside the table bounds. Signed coordinates
    /// because rectangle queries may start above or left of the image.
    pub fn value(&self, row: isize, col: isize) -> Float {
        if row >= 0 && (row as usize) < self.height && col >= 0 && (col as usize) < self.width {
            self.matrix[(row as usize, col as usize)]
        } else {
            0.0
        }
    }

    /// Inclusion-exclusion sum over the rectangle with top-left corner
    /// (row,col) and the given extent. The bottom-right corner is clamped to
    /// the table bounds and negative results are floored to 0, so rectangles
    /// partially outside the image are tolerated and never yield negative
    /// energy. A zero-area rectangle sums to 0.
    pub fn rectangle_sum(&self, row: isize, col: isize, width: isize, height: isize) -> Float {
        if width <= 0 || height <= 0 {
            return 0.0;
        }

        let table_height = self.height as isize;
        let table_width = self.width as isize;

        let lt_row = if row <= table_height { row - 1 } else { -1 };
        let lt_col = if col <= table_width { col - 1 } else { -1 };
        let rb_row = if row + height - 1 < table_height { row + height - 1 } else { table_height - 1 };
        let rb_col = if col + width - 1 < table_width { col + width - 1 } else { table_width - 1 };

        let a = self.value(lt_row, lt_col);
        let b = self.value(lt_row, rb_col);
        let c = self.value(rb_row, rb_col);
        let d = self.value(rb_row, lt_col);

        let sum = a + c - b - d;

        if sum > 0.0 {
            sum
        } else {
            0.0
        }
    }

    /// Horizontal Haar wavelet response of the size x size square at (row,col):
    /// right half minus left half. A gradient proxy at the given scale.
    pub fn haar_x(&self, row: isize, col: isize, size: isize) -> Float {
        self.rectangle_sum(row, col + size / 2, size / 2, size)
            - self.rectangle_sum(row, col, size / 2, size)
    }

    /// Vertical Haar wavelet response: bottom half minus top half.
    pub fn haar_y(&self, row: isize, col: isize, size: isize) -> Float {
        self.rectangle_sum(row + size / 2, col, size, size / 2)
            - self.rectangle_sum(row, col, size, size / 2)
    }
}
