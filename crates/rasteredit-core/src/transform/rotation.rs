//! Quarter-turn clockwise rotation.
//!
//! For a source grid of `h` rows and `w` columns the output has `w` rows
//! and `h` columns, and
//!
//! ```text
//! out[r][c] = in[h - 1 - c][r]
//! ```

use crate::grid::Image;

/// Rotate a grid 90 degrees clockwise in a single pass.
pub fn rotate_clockwise(image: &Image) -> Image {
    let (height, width) = image.dimensions();
    if image.is_empty() {
        // A grid of h rows with no columns rotates to no rows at all.
        return Image::empty();
    }

    let mut output = Vec::with_capacity(width * height);
    for row in 0..width {
        for col in 0..height {
            output.push(image.get(height - 1 - col, row));
        }
    }

    Image::from_parts(width, height, output)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::color::Pixel;
    use proptest::prelude::*;

    fn image_strategy() -> impl Strategy<Value = Image> {
        (1usize..=12, 1usize..=12).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(any::<u32>(), rows * cols).prop_map(move |values| {
                let pixels = values.into_iter().map(Pixel::from_packed).collect();
                Image::from_pixels(rows, cols, pixels).unwrap()
            })
        })
    }

    proptest! {
        /// Property: four rotations restore the original grid.
        #[test]
        fn prop_four_rotations_identity(img in image_strategy()) {
            let mut out = img.clone();
            for _ in 0..4 {
                out = rotate_clockwise(&out);
            }
            prop_assert_eq!(out, img);
        }

        /// Property: two rotations restore the dimensions.
        #[test]
        fn prop_two_rotations_restore_dimensions(img in image_strategy()) {
            let out = rotate_clockwise(&rotate_clockwise(&img));
            prop_assert_eq!(out.dimensions(), img.dimensions());
        }

        /// Property: two rotations reverse the row-major cell order.
        #[test]
        fn prop_two_rotations_are_half_turn(img in image_strategy()) {
            let out = rotate_clockwise(&rotate_clockwise(&img));
            let mut reversed = img.pixels().to_vec();
            reversed.reverse();
            prop_assert_eq!(out.pixels(), reversed.as_slice());
        }
    }
}
