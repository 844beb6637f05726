extern crate image as image_rs;
extern crate nalgebra as na;

use image_rs::{GrayImage, RgbImage};
use na::DMatrix;

use crate::Float;

/// RGB to luminosity weights.
pub const LUMINOSITY_WEIGHT_RED: Float = 0.21;
pub const LUMINOSITY_WEIGHT_GREEN: Float = 0.72;
pub const LUMINOSITY_WEIGHT_BLUE: Float = 0.07;

/// Single-channel raster held as a dense row-major grid, values in [0,1] when
/// built through the constructors below.
#[derive(Debug, Clone)]
pub struct Image {
    pub buffer: DMatrix<Float>,
}

impl Image {
    pub fn from_matrix(matrix: &DMatrix<Float>) -> Image {
        Image { buffer: matrix.clone() }
    }

    pub fn from_gray_image(image: &GrayImage, normalize: bool) -> Image {
        let height = image.height() as usize;
        let width = image.width() as usize;

        let mut buffer = DMatrix::<Float>::zeros(height, width);
        for (x, y, pixel) in image.enumerate_pixels() {
            buffer[(y as usize, x as usize)] = pixel[0] as Float;
        }

        if normalize {
            buffer /= 255.0;
        }

        Image { buffer }
    }

    /// Collapses the three color bands into one luminosity channel with the
    /// fixed weighted sum, scaled into [0,1].
    pub fn from_rgb_image(image: &RgbImage) -> Image {
        let height = image.height() as usize;
        let width = image.width() as usize;

        let mut buffer = DMatrix::<Float>::zeros(height, width);
        for (x, y, pixel) in image.enumerate_pixels() {
            let luminosity = pixel[0] as Float * LUMINOSITY_WEIGHT_RED
                + pixel[1] as Float * LUMINOSITY_WEIGHT_GREEN
                + pixel[2] as Float * LUMINOSITY_WEIGHT_BLUE;
            buffer[(y as usize, x as usize)] = luminosity / 255.0;
        }

        Image { buffer }
    }

    pub fn height(&self) -> usize {
        self.buffer.nrows()
    }

    pub fn width(&self) -> usize {
        self.buffer.ncols()
    }
}
