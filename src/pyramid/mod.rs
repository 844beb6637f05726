use crate::integral_image::IntegralImage;
use crate::{CorrelatorError, Float};

use self::octave_layer::OctaveLayer;

pub mod octave_layer;

/// Number of intervals sampled per octave. Three consecutive intervals form one
/// bottom/middle/top triple for the extremum scan.
pub const INTERVALS: usize = 4;

/// Grid of octave layers indexed by octave x interval.
///
/// Layers are allocated up front and populated by `compute_map`. Each layer is
/// computed independently against the shared integral image, so the produced
/// values do not depend on computation order.
#[derive(Debug, Clone)]
pub struct OctaveMap {
    pub octave_start: usize,
    pub octave_end: usize,
    layers: Vec<Vec<OctaveLayer>>,
}

impl OctaveMap {
    pub fn new(
        octave_start: usize,
        octave_end: usize,
        height: usize,
        width: usize,
    ) -> Result<OctaveMap, CorrelatorError> {
        if octave_start < 1 || octave_end < octave_start {
            return Err(CorrelatorError::InvalidRange { start: octave_start, end: octave_end });
        }

        let layers = (octave_start..=octave_end)
            .map(|octave| {
                (1..=INTERVALS)
                    .map(|interval| OctaveLayer::new(octave, interval, height, width))
                    .collect()
            })
            .collect();

        Ok(OctaveMap { octave_start, octave_end, layers })
    }

    /// Layer for the given octave in [octave_start, octave_end] and interval in
    /// [1, INTERVALS].
    pub fn layer(&self, octave: usize, interval: usize) -> &OctaveLayer {
        &self.layers[octave - self.octave_start][interval - 1]
    }

    pub fn compute_map(&mut self, integral: &IntegralImage) {
        for octave_layers in self.layers.iter_mut() {
            for layer in octave_layers.iter_mut() {
                layer.compute(integral);
            }
        }
    }

    /// Strict 26-neighbor maximum test across a bottom/middle/top layer triple.
    ///
    /// The candidate is rejected when it lies within `top.radius` of any border
    /// (so that every neighbor is a computed interior cell), when its response
    /// is below the threshold, and when any neighbor in the 3x3x3 window ties
    /// or exceeds it.
    pub fn point_is_extremum(
        row: usize,
        col: usize,
        bottom: &OctaveLayer,
        middle: &OctaveLayer,
        top: &OctaveLayer,
        threshold: Float,
    ) -> bool {
        let radius = top.radius;

        if row <= radius || col <= radius || row + radius >= top.height || col + radius >= top.width
        {
            return false;
        }

        let current = middle.det_hessians[(row, col)];

        if current < threshold {
            return false;
        }

        for r in row - 1..=row + 1 {
            for c in col - 1..=col + 1 {
                if top.det_hessians[(r, c)] >= current || bottom.det_hessians[(r, c)] >= current {
                    return false;
                }

                if (r != row || c != col) && middle.det_hessians[(r, c)] >= current {
                    return false;
                }
            }
        }

        true
    }
}
