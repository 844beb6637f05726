extern crate nalgebra as na;

use na::DMatrix;
use thiserror::Error;

use self::features::{collection::FeaturePointCollection, feature_point::FeaturePoint};
use self::integral_image::IntegralImage;
use self::pyramid::{OctaveMap, INTERVALS};

pub mod descriptor;
pub mod features;
pub mod image;
pub mod integral_image;
pub mod matching;
pub mod pyramid;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

/// Best-to-second-best distance ratio above which a match is considered ambiguous.
pub const RATIO_TEST_THRESHOLD: Float = 0.8;

/// Balancing factor (0.9^2) compensating the box-filter approximation of the Hessian.
pub const FILTER_BALANCE: Float = 0.81;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CorrelatorError {
    #[error("input image or collection is empty")]
    InvalidInput,
    #[error("invalid octave range: start {start}, end {end}")]
    InvalidRange { start: usize, end: usize },
    #[error("invalid threshold: {0}")]
    InvalidThreshold(Float),
    #[error("descriptor window degenerates to zero size at scale {0}")]
    DegenerateGeometry(usize),
}

#[derive(Debug, Clone)]
pub struct RuntimeParams {
    pub octave_start: usize,
    pub octave_end: usize,
    pub hessian_threshold: Float,
    pub match_threshold: Float,
}

impl Default for RuntimeParams {
    fn default() -> RuntimeParams {
        RuntimeParams {
            octave_start: 1,
            octave_end: 2,
            hessian_threshold: 0.001,
            match_threshold: 0.015,
        }
    }
}

pub use crate::matching::match_feature_points;

/// Runs the full detection pipeline on a luminosity grid: integral image,
/// octave map, scale-space extrema scan and descriptor synthesis.
///
/// Detection is stateless; running it twice on the same grid with the same
/// parameters yields the same set of feature points.
pub fn detect_feature_points(
    luminosity: &DMatrix<Float>,
    runtime_params: &RuntimeParams,
) -> Result<FeaturePointCollection, CorrelatorError> {
    let octave_start = runtime_params.octave_start;
    let octave_end = runtime_params.octave_end;
    let threshold = runtime_params.hessian_threshold;

    if threshold < 0.0 {
        return Err(CorrelatorError::InvalidThreshold(threshold));
    }

    if luminosity.nrows() == 0 || luminosity.ncols() == 0 {
        return Err(CorrelatorError::InvalidInput);
    }

    let mut octave_map =
        OctaveMap::new(octave_start, octave_end, luminosity.nrows(), luminosity.ncols())?;
    let integral = IntegralImage::new(luminosity)?;
    octave_map.compute_map(&integral);

    let mut collection = FeaturePointCollection::new();

    for octave in octave_start..=octave_end {
        for k in 1..=INTERVALS - 2 {
            let bottom = octave_map.layer(octave, k);
            let middle = octave_map.layer(octave, k + 1);
            let top = octave_map.layer(octave, k + 2);

            for row in 0..middle.height {
                for col in 0..middle.width {
                    if OctaveMap::point_is_extremum(row, col, bottom, middle, top, threshold) {
                        let mut point = FeaturePoint::new(
                            col,
                            row,
                            middle.scale,
                            middle.radius,
                            middle.signs[(row, col)],
                        );
                        descriptor::compute_descriptor(&mut point, &integral)?;
                        collection.add_point(point);
                    }
                }
            }
        }
    }

    Ok(collection)
}
