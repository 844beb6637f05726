pub mod collection;
pub mod feature_point;

/// Length of the descriptor vector: a 4x4 quadrant grid with four Haar
/// statistics per quadrant.
pub const DESCRIPTOR_SIZE: usize = 64;
