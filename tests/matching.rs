use correlator::features::collection::FeaturePointCollection;
use correlator::features::feature_point::FeaturePoint;
use correlator::features::DESCRIPTOR_SIZE;
use correlator::matching::euclidean_distance;
use correlator::{match_feature_points, CorrelatorError, Float};

fn make_point(x: usize, sign: i32, descriptor_value: Float) -> FeaturePoint {
    let mut point = FeaturePoint::new(x, x, 2, 7, sign);
    point.descriptor = vec![descriptor_value; DESCRIPTOR_SIZE];
    point
}

fn collection_of(points: Vec<FeaturePoint>) -> FeaturePointCollection {
    let mut collection = FeaturePointCollection::new();
    for point in points {
        collection.add_point(point);
    }
    collection
}

#[test]
fn test_euclidean_distance() {
    let a = make_point(0, 1, 1.0);
    let b = make_point(0, 1, 3.0);

    // 64 components each differing by 2.
    assert!((euclidean_distance(&a, &b) - 16.0).abs() < 1e-9);
    assert_eq!(euclidean_distance(&a, &a), 0.0);
}

#[test]
fn test_shared_descriptors_are_matched() {
    let first = collection_of(vec![
        make_point(10, 1, 1.0),
        make_point(20, 1, 5.0),
        make_point(30, 1, 9.0),
        make_point(40, -1, 50.0),
        make_point(50, -1, 60.0),
    ]);
    let second = collection_of(vec![
        make_point(10, 1, 1.0),
        make_point(20, 1, 5.0),
        make_point(30, 1, 9.0),
        make_point(41, 1, 100.0),
        make_point(51, 1, 101.0),
    ]);

    let matched = match_feature_points(&first, &second, 1.0).unwrap();

    assert_eq!(matched.len(), 3);
    for i in 0..matched.len() {
        let (point_1, point_2) = matched.get_points(i).unwrap();
        assert_eq!(point_1.x, point_2.x);
        assert_eq!(point_1.descriptor, point_2.descriptor);
    }
}

#[test]
fn test_pair_order_is_preserved_when_collections_are_swapped() {
    // First collection is larger, so the matcher iterates the second one
    // internally; output pairs must still come back in argument order.
    let first = collection_of(vec![
        make_point(1, 1, 40.0),
        make_point(2, 1, 80.0),
        make_point(3, 1, 0.0),
        make_point(4, 1, 120.0),
    ]);
    let second = collection_of(vec![make_point(100, 1, 0.0), make_point(200, 1, 500.0)]);

    let matched = match_feature_points(&first, &second, 1.0).unwrap();

    assert_eq!(matched.len(), 1);
    let (point_1, point_2) = matched.get_points(0).unwrap();
    assert_eq!(point_1.x, 3);
    assert_eq!(point_2.x, 100);
}

#[test]
fn test_matched_points_are_locked_greedily() {
    let first = collection_of(vec![make_point(1, 1, 0.0), make_point(2, 1, 0.0)]);
    let second = collection_of(vec![
        make_point(10, 1, 0.0),
        make_point(20, 1, 10.0),
        make_point(30, 1, 20.0),
    ]);

    let matched = match_feature_points(&first, &second, 1.0).unwrap();

    // The first outer point claims the identical descriptor; the second one
    // cannot reuse it and falls back to the next nearest.
    assert_eq!(matched.len(), 2);
    let (point_1, point_2) = matched.get_points(0).unwrap();
    assert_eq!((point_1.x, point_2.x), (1, 10));
    let (point_1, point_2) = matched.get_points(1).unwrap();
    assert_eq!((point_1.x, point_2.x), (2, 20));
}

#[test]
fn test_ambiguous_match_is_pruned_by_ratio_test() {
    let first = collection_of(vec![make_point(1, 1, 0.0)]);
    let second = collection_of(vec![make_point(10, 1, 1.0), make_point(20, 1, -1.0)]);

    let matched = match_feature_points(&first, &second, 1.0).unwrap();

    assert!(matched.is_empty());
}

#[test]
fn test_sign_incompatible_points_never_match() {
    let first = collection_of(vec![make_point(1, 1, 0.0)]);
    let second = collection_of(vec![make_point(10, -1, 0.0), make_point(20, -1, 10.0)]);

    let matched = match_feature_points(&first, &second, 1.0).unwrap();

    assert!(matched.is_empty());
}

#[test]
fn test_single_candidate_without_second_best_is_rejected() {
    let first = collection_of(vec![make_point(1, 1, 0.0)]);
    let second = collection_of(vec![make_point(10, 1, 0.0)]);

    let matched = match_feature_points(&first, &second, 1.0).unwrap();

    assert!(matched.is_empty());
}

#[test]
fn test_normalized_distances_are_pruned_by_threshold() {
    // Two acceptable pairs with different raw distances; after normalization
    // the larger one sits at exactly 1.0 and a tight threshold removes it.
    let first = collection_of(vec![make_point(1, 1, 0.0), make_point(2, 1, 100.0)]);
    let second = collection_of(vec![
        make_point(10, 1, 0.1),
        make_point(20, 1, 101.0),
        make_point(30, 1, 500.0),
    ]);

    let all = match_feature_points(&first, &second, 1.0).unwrap();
    assert_eq!(all.len(), 2);

    let tight = match_feature_points(&first, &second, 0.5).unwrap();
    assert_eq!(tight.len(), 1);
    let (point_1, point_2) = tight.get_points(0).unwrap();
    assert_eq!((point_1.x, point_2.x), (1, 10));
}

#[test]
fn test_empty_collection_is_rejected() {
    let empty = FeaturePointCollection::new();
    let filled = collection_of(vec![make_point(1, 1, 0.0)]);

    assert_eq!(
        match_feature_points(&empty, &filled, 0.5).unwrap_err(),
        CorrelatorError::InvalidInput
    );
    assert_eq!(
        match_feature_points(&filled, &empty, 0.5).unwrap_err(),
        CorrelatorError::InvalidInput
    );
}

#[test]
fn test_out_of_range_threshold_is_rejected() {
    let first = collection_of(vec![make_point(1, 1, 0.0)]);
    let second = collection_of(vec![make_point(10, 1, 0.0)]);

    assert_eq!(
        match_feature_points(&first, &second, -0.1).unwrap_err(),
        CorrelatorError::InvalidThreshold(-0.1)
    );
    assert_eq!(
        match_feature_points(&first, &second, 1.5).unwrap_err(),
        CorrelatorError::InvalidThreshold(1.5)
    );
}
