extern crate nalgebra as na;

use na::DMatrix;

use crate::integral_image::IntegralImage;
use crate::{Float, FILTER_BALANCE};

/// One (octave, interval) sampling of the approximate Hessian determinant.
///
/// Filter geometry is derived from the octave and interval; the determinant
/// and trace-sign grids are populated once by `compute` and only defined for
/// interior pixels at least `radius` away from every border. Border cells stay
/// at their zeroed defaults and are excluded from the extremum scan.
#[derive(Debug, Clone)]
pub struct OctaveLayer {
    pub octave: usize,
    pub filter_size: usize,
    pub radius: usize,
    pub scale: usize,
    pub height: usize,
    pub width: usize,
    pub det_hessians: DMatrix<Float>,
    pub signs: DMatrix<i32>,
}

impl OctaveLayer {
    pub fn new(octave: usize, interval: usize, height: usize, width: usize) -> OctaveLayer {
        let filter_size = 3 * ((1usize << octave) * interval + 1);

        OctaveLayer {
            octave,
            filter_size,
            radius: (filter_size - 1) / 2,
            scale: 1usize << octave,
            height,
            width,
            det_hessians: DMatrix::<Float>::zeros(height, width),
            signs: DMatrix::<i32>::zeros(height, width),
        }
    }

    /// Single filter pass over all interior pixels. dxx, dyy and dxy are box
    /// filter approximations of the second derivatives, built from rectangle
    /// sums with the standard three-lobe geometry and normalized by the filter
    /// area.
    pub fn compute(&mut self, integral: &IntegralImage) {
        let filter_size = self.filter_size as isize;
        let radius = self.radius as isize;
        let lobe = filter_size / 3;
        let long_part = 2 * lobe - 1;
        let normalization = (filter_size * filter_size) as Float;

        let height = self.height as isize;
        let width = self.width as isize;

        // The filter must remain inside the image borders.
        for r in radius..=(height - radius) {
            for c in radius..=(width - radius) {
                let dxx = integral.rectangle_sum(r - lobe + 1, c - radius, filter_size, long_part)
                    - 3.0 * integral.rectangle_sum(r - lobe + 1, c - (lobe - 1) / 2, lobe, long_part);
                let dyy = integral.rectangle_sum(r - radius, c - lobe - 1, long_part, filter_size)
                    - 3.0 * integral.rectangle_sum(r - lobe + 1, c - lobe + 1, long_part, lobe);
                let dxy = integral.rectangle_sum(r - lobe, c - lobe, lobe, lobe)
                    + integral.rectangle_sum(r + 1, c + 1, lobe, lobe)
                    - integral.rectangle_sum(r - lobe, c + 1, lobe, lobe)
                    - integral.rectangle_sum(r + 1, c - lobe, lobe, lobe);

                let dxx = dxx / normalization;
                let dyy = dyy / normalization;
                let dxy = dxy / normalization;

                let index = (r as usize, c as usize);
                self.det_hessians[index] = dxx * dyy - FILTER_BALANCE * dxy * dxy;
                self.signs[index] = if dxx + dyy >= 0.0 { 1 } else { -1 };
            }
        }
    }
}
