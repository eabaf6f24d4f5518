//! Tests for depth maps and luminance conversion

#[cfg(test)]
mod tests {
    use autostereogram::spatial::buffer::PixelBuffer;
    use autostereogram::spatial::depth::{DepthMap, luma};

    // Tests luma of primaries follows ITU-R 601-2 weights
    // Verified by substituting Rec. 709 weights
    #[test]
    fn test_luma_weights() {
        assert_eq!(luma([0, 0, 0]), 0);
        assert_eq!(luma([255, 255, 255]), 255);
        assert_eq!(luma([255, 0, 0]), 76);
        assert_eq!(luma([0, 255, 0]), 150);
        assert_eq!(luma([0, 0, 255]), 29);
    }

    // Tests luma rounds in 16.16 fixed point like Pillow's L conversion
    // Verified by using (299r + 587g + 114b + 500) / 1000
    #[test]
    fn test_luma_fixed_point_rounding() {
        assert_eq!(luma([0, 0, 250]), 28);
        assert_eq!(luma([10, 20, 30]), 18);
        assert_eq!(luma([255, 255, 0]), 226);
    }

    // Tests gray pixels keep their value through conversion
    // Verified by truncating instead of rounding
    #[test]
    fn test_luma_preserves_gray() {
        for value in 0..=u8::MAX {
            assert_eq!(luma([value, value, value]), value);
        }
    }

    // Tests color buffers convert pixel by pixel at the same coordinates
    // Verified by transposing the converted map
    #[test]
    fn test_from_rgb() {
        let buffer = PixelBuffer::from_fn(3, 2, |x, y| {
            if x == 2 && y == 1 {
                [255, 0, 0]
            } else {
                [x as u8 * 10, x as u8 * 10, x as u8 * 10]
            }
        })
        .unwrap();
        let depth = DepthMap::from_rgb(&buffer);

        assert_eq!(depth.width(), 3);
        assert_eq!(depth.height(), 2);
        assert_eq!(depth.get(1, 0).unwrap(), 10);
        assert_eq!(depth.get(2, 1).unwrap(), 76);
    }

    // Tests uniform maps and their maximum
    // Verified by initialising with zeros
    #[test]
    fn test_uniform_and_max() {
        let depth = DepthMap::uniform(5, 4, 200).unwrap();
        assert_eq!(depth.max_intensity(), 200);
        assert_eq!(depth.get(4, 3).unwrap(), 200);

        let gradient = DepthMap::from_fn(16, 1, |x, _| x as u8 * 3).unwrap();
        assert_eq!(gradient.max_intensity(), 45);
    }

    // Tests empty maps cannot be constructed
    // Verified by removing dimension validation
    #[test]
    fn test_zero_sized_rejected() {
        assert!(DepthMap::uniform(0, 10, 0).is_err());
        assert!(DepthMap::uniform(10, 0, 0).is_err());
    }

    // Tests row-major sample data and length validation
    // Verified by accepting short sample vectors
    #[test]
    fn test_from_vec() {
        let depth = DepthMap::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(depth.get(0, 1).unwrap(), 3);
        assert_eq!(depth.row(1).unwrap().to_vec(), vec![3, 4]);

        assert!(DepthMap::from_vec(2, 2, vec![1, 2, 3]).is_err());
    }

    // Tests out-of-range reads are errors
    // Verified by clamping coordinates
    #[test]
    fn test_out_of_bounds() {
        let depth = DepthMap::uniform(2, 2, 0).unwrap();
        assert!(depth.get(2, 0).is_err());
        assert!(depth.row(2).is_err());
    }
}
