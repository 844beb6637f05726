use crate::features::collection::{FeaturePointCollection, MatchedPointsCollection};
use crate::features::feature_point::FeaturePoint;
use crate::{CorrelatorError, Float, RATIO_TEST_THRESHOLD};

/// Indexes into the (possibly swapped) working collections plus the raw
/// descriptor distance of the pair.
#[derive(Debug, Clone)]
struct MatchedPairInfo {
    index_1: usize,
    index_2: usize,
    distance: Float,
}

pub fn euclidean_distance(point_1: &FeaturePoint, point_2: &FeaturePoint) -> Float {
    let mut sum = 0.0;

    for i in 0..point_1.descriptor.len() {
        let diff = point_1.descriptor[i] - point_2.descriptor[i];
        sum += diff * diff;
    }

    sum.sqrt()
}

/// Normalizes distances to one. Skipped when the list is empty or all
/// distances are zero, to avoid dividing by zero.
fn normalize_distances(pairs: &mut [MatchedPairInfo]) {
    let max = pairs.iter().fold(0.0, |acc: Float, pair| acc.max(pair.distance));

    if max != 0.0 {
        for pair in pairs.iter_mut() {
            pair.distance /= max;
        }
    }
}

/// Finds point correspondences between two collections via a two-sided
/// nearest/second-nearest descriptor search.
///
/// The smaller collection drives the outer loop; a swap is recorded so output
/// pairs are always emitted in (first argument, second argument) order. Inner
/// points are claimed greedily: once matched, a point is locked away from later
/// outer points even if it would suit them better. A candidate is accepted when
/// a second-nearest candidate exists and the best-to-second-best distance ratio
/// is below `RATIO_TEST_THRESHOLD`. Accepted distances are normalized by their
/// maximum and pruned by the caller threshold in [0,1].
pub fn match_feature_points(
    collection_1: &FeaturePointCollection,
    collection_2: &FeaturePointCollection,
    threshold: Float,
) -> Result<MatchedPointsCollection, CorrelatorError> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(CorrelatorError::InvalidThreshold(threshold));
    }

    if collection_1.is_empty() || collection_2.is_empty() {
        return Err(CorrelatorError::InvalidInput);
    }

    // p_1 is the collection with the smaller number of points.
    let is_swap = collection_2.len() < collection_1.len();
    let (p_1, p_2) = if is_swap { (collection_2, collection_1) } else { (collection_1, collection_2) };

    let mut already_matched = vec![false; p_2.len()];
    let mut pair_infos = Vec::<MatchedPairInfo>::new();

    for (i, point_1) in p_1.iter().enumerate() {
        let mut best: Option<(usize, Float)> = None;
        let mut second_best: Option<Float> = None;

        for (j, point_2) in p_2.iter().enumerate() {
            if already_matched[j] || point_1.sign != point_2.sign {
                continue;
            }

            let distance = euclidean_distance(point_1, point_2);

            match best {
                Some((_, best_distance)) if distance >= best_distance => {
                    if second_best.map_or(true, |second| distance < second) {
                        second_best = Some(distance);
                    }
                }
                _ => {
                    second_best = best.map(|(_, best_distance)| best_distance).or(second_best);
                    best = Some((j, distance));
                }
            }
        }

        if let (Some((best_index, best_distance)), Some(second_distance)) = (best, second_best) {
            if second_distance > 0.0 && best_distance / second_distance < RATIO_TEST_THRESHOLD {
                pair_infos.push(MatchedPairInfo {
                    index_1: i,
                    index_2: best_index,
                    distance: best_distance,
                });
                already_matched[best_index] = true;
            }
        }
    }

    normalize_distances(&mut pair_infos);

    let mut matched = MatchedPointsCollection::new();

    // Pruning based on the caller threshold; pairs are restored to the
    // original argument order when the collections were swapped.
    for pair in pair_infos.iter().filter(|pair| pair.distance <= threshold) {
        let point_1 = p_1.get_point(pair.index_1).ok_or(CorrelatorError::InvalidInput)?.clone();
        let point_2 = p_2.get_point(pair.index_2).ok_or(CorrelatorError::InvalidInput)?.clone();

        if is_swap {
            matched.add_points(point_2, point_1);
        } else {
            matched.add_points(point_1, point_2);
        }
    }

    Ok(matched)
}
