use serde::{Deserialize, Serialize};

use crate::features::feature_point::FeaturePoint;

/// Insertion-ordered sequence of owned feature points.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeaturePointCollection {
    points: Vec<FeaturePoint>,
}

impl FeaturePointCollection {
    pub fn new() -> FeaturePointCollection {
        FeaturePointCollection { points: Vec::new() }
    }

    pub fn add_point(&mut self, point: FeaturePoint) {
        self.points.push(point);
    }

    pub fn get_point(&self, index: usize) -> Option<&FeaturePoint> {
        self.points.get(index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<FeaturePoint> {
        self.points.iter()
    }
}

/// Two parallel collections of equal length; element i of each is a matched
/// pair. Points are only ever appended pairwise, so the alignment holds for
/// every index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchedPointsCollection {
    first: FeaturePointCollection,
    second: FeaturePointCollection,
}

impl MatchedPointsCollection {
    pub fn new() -> MatchedPointsCollection {
        MatchedPointsCollection {
            first: FeaturePointCollection::new(),
            second: FeaturePointCollection::new(),
        }
    }

    pub fn add_points(&mut self, first: FeaturePoint, second: FeaturePoint) {
        self.first.add_point(first);
        self.second.add_point(second);
    }

    pub fn get_points(&self, index: usize) -> Option<(&FeaturePoint, &FeaturePoint)> {
        match (self.first.get_point(index), self.second.get_point(index)) {
            (Some(first), Some(second)) => Some((first, second)),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }
}
