use crate::features::feature_point::FeaturePoint;
use crate::integral_image::IntegralImage;
use crate::CorrelatorError;

/// Side of the sampling window in units of the point's scale.
pub const DESCRIPTOR_WINDOW_SCALE: usize = 20;

/// Side of the Haar wavelet in units of the point's scale.
pub const HAAR_FILTER_SCALE: usize = 2;

/// Fills the point's descriptor from a 4x4 quadrant grid of Haar wavelet
/// statistics.
///
/// The window of side `20 * scale` is centered on the point and split into 4x4
/// quadrants of 5x5 sub-quadrants each. Per sub-quadrant, `haar_x`/`haar_y`
/// are evaluated at its center; per quadrant the sums dx, dy, |dx|, |dy| fill
/// four descriptor slots, quadrant by quadrant in row-major scan order.
///
/// Window corners may fall outside the image; the integral image clamps those
/// rectangle queries. A zero-size window or sub-quadrant step cannot occur for
/// octaves >= 1 but is rejected rather than left to underflow.
pub fn compute_descriptor(
    point: &mut FeaturePoint,
    integral: &IntegralImage,
) -> Result<(), CorrelatorError> {
    let haar_filter_size = (HAAR_FILTER_SCALE * point.scale) as isize;
    let desc_side = (DESCRIPTOR_WINDOW_SCALE * point.scale) as isize;
    let quad_step = desc_side / 4;
    let sub_quad_step = quad_step / 5;

    if desc_side <= 0 || sub_quad_step <= 0 {
        return Err(CorrelatorError::DegenerateGeometry(point.scale));
    }

    let left_top_row = point.y as isize - desc_side / 2;
    let left_top_col = point.x as isize - desc_side / 2;

    let mut count = 0;

    let mut r = left_top_row;
    while r < left_top_row + desc_side {
        let mut c = left_top_col;
        while c < left_top_col + desc_side {
            let mut dx = 0.0;
            let mut dy = 0.0;
            let mut abs_dx = 0.0;
            let mut abs_dy = 0.0;

            let mut sub_r = r;
            while sub_r < r + quad_step {
                let mut sub_c = c;
                while sub_c < c + quad_step {
                    let center_row = sub_r + sub_quad_step / 2;
                    let center_col = sub_c + sub_quad_step / 2;

                    // Left top point of the Haar wavelet window.
                    let cur_row = center_row - haar_filter_size / 2;
                    let cur_col = center_col - haar_filter_size / 2;

                    let cur_dx = integral.haar_x(cur_row, cur_col, haar_filter_size);
                    let cur_dy = integral.haar_y(cur_row, cur_col, haar_filter_size);

                    dx += cur_dx;
                    dy += cur_dy;
                    abs_dx += cur_dx.abs();
                    abs_dy += cur_dy.abs();

                    sub_c += sub_quad_step;
                }
                sub_r += sub_quad_step;
            }

            point.descriptor[count] = dx;
            point.descriptor[count + 1] = dy;
            point.descriptor[count + 2] = abs_dx;
            point.descriptor[count + 3] = abs_dy;
            count += 4;

            c += quad_step;
        }
        r += quad_step;
    }

    debug_assert_eq!(count, point.descriptor.len());

    Ok(())
}
