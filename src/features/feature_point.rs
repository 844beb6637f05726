use std::fmt;

use serde::{Deserialize, Serialize};

use crate::features::DESCRIPTOR_SIZE;
use crate::Float;

/// A scale-space extremum in source-image pixel coordinates (x = column,
/// y = row), with the scale, filter radius and Hessian trace sign of the layer
/// it was detected in.
///
/// The descriptor is filled by the descriptor builder before the point leaves
/// the detector. Two points can only match when their signs are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturePoint {
    pub x: usize,
    pub y: usize,
    pub scale: usize,
    pub radius: usize,
    pub sign: i32,
    pub descriptor: Vec<Float>,
}

impl FeaturePoint {
    pub fn new(x: usize, y: usize, scale: usize, radius: usize, sign: i32) -> FeaturePoint {
        FeaturePoint { x, y, scale, radius, sign, descriptor: vec![0.0; DESCRIPTOR_SIZE] }
    }
}

impl fmt::Display for FeaturePoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "x: {}, y: {}, scale: {}, sign: {}", self.x, self.y, self.scale, self.sign)
    }
}
