//! Tests for the bounds-checked RGB pixel buffer

#[cfg(test)]
mod tests {
    use autostereogram::StereogramError;
    use autostereogram::io::configuration::MAX_BUFFER_DIMENSION;
    use autostereogram::spatial::buffer::{BLACK, PixelBuffer};

    // Tests new buffers are fully initialised to black
    // Verified by allocating with a different fill
    #[test]
    fn test_new_buffer_is_black() {
        let buffer = PixelBuffer::new(4, 3).unwrap();

        assert_eq!(buffer.width(), 4);
        assert_eq!(buffer.height(), 3);
        assert_eq!(buffer.pixels().count(), 12);
        assert!(buffer.pixels().all(|&pixel| pixel == BLACK));
    }

    // Tests empty dimensions are rejected with the offending parameter
    // Verified by removing the zero check
    #[test]
    fn test_zero_dimensions_rejected() {
        match PixelBuffer::new(0, 5) {
            Err(StereogramError::InvalidInput { parameter, .. }) => {
                assert_eq!(parameter, "width");
            }
            other => unreachable!("Expected InvalidInput, got {other:?}"),
        }

        match PixelBuffer::new(5, 0) {
            Err(StereogramError::InvalidInput { parameter, .. }) => {
                assert_eq!(parameter, "height");
            }
            other => unreachable!("Expected InvalidInput, got {other:?}"),
        }
    }

    // Tests oversized dimensions are rejected before allocation
    // Verified by removing the maximum check
    #[test]
    fn test_oversized_dimensions_rejected() {
        assert!(PixelBuffer::new(MAX_BUFFER_DIMENSION + 1, 1).is_err());
        assert!(PixelBuffer::new(1, MAX_BUFFER_DIMENSION + 1).is_err());
    }

    // Tests set followed by get returns the written color
    // Verified by swapping x and y in storage indexing
    #[test]
    fn test_get_set() {
        let mut buffer = PixelBuffer::new(5, 2).unwrap();
        buffer.set(4, 1, [1, 2, 3]).unwrap();

        assert_eq!(buffer.get(4, 1).unwrap(), [1, 2, 3]);
        assert_eq!(buffer.get(1, 0).unwrap(), BLACK);
    }

    // Tests out-of-range access fails instead of wrapping into another row
    // Verified by computing a flat index without bounds checks
    #[test]
    fn test_out_of_bounds_access() {
        let mut buffer = PixelBuffer::new(3, 3).unwrap();

        match buffer.get(3, 0) {
            Err(StereogramError::OutOfBounds {
                x,
                y,
                width,
                height,
            }) => {
                assert_eq!((x, y, width, height), (3, 0, 3, 3));
            }
            other => unreachable!("Expected OutOfBounds, got {other:?}"),
        }

        assert!(buffer.set(0, 3, [9, 9, 9]).is_err());
        assert!(buffer.pixels().all(|&pixel| pixel == BLACK));
    }

    // Tests from_fn passes image coordinates in (x, y) order
    // Verified by swapping closure arguments
    #[test]
    fn test_from_fn_coordinates() {
        let buffer = PixelBuffer::from_fn(4, 2, |x, y| [x as u8, y as u8, 7]).unwrap();

        assert_eq!(buffer.get(3, 1).unwrap(), [3, 1, 7]);
        assert_eq!(buffer.get(2, 0).unwrap(), [2, 0, 7]);
    }

    // Tests row-major construction and extraction
    // Verified by transposing in from_vec
    #[test]
    fn test_from_vec_row_major() {
        let data = vec![[0, 0, 0], [1, 1, 1], [2, 2, 2], [3, 3, 3], [4, 4, 4], [5, 5, 5]];
        let buffer = PixelBuffer::from_vec(3, 2, data.clone()).unwrap();

        assert_eq!(buffer.get(0, 1).unwrap(), [3, 3, 3]);
        assert_eq!(buffer.get(2, 0).unwrap(), [2, 2, 2]);
        assert_eq!(buffer.into_vec(), data);
    }

    // Tests mismatched data length is rejected
    // Verified by truncating data silently
    #[test]
    fn test_from_vec_length_mismatch() {
        let result = PixelBuffer::from_vec(3, 2, vec![[0, 0, 0]; 5]);
        assert!(result.is_err());
    }

    // Tests row views expose one row left to right
    // Verified by returning a column view
    #[test]
    fn test_row_view() {
        let buffer = PixelBuffer::from_fn(3, 2, |x, y| [x as u8, y as u8, 0]).unwrap();
        let row = buffer.row(1).unwrap();

        assert_eq!(row.len(), 3);
        assert_eq!(row.to_vec(), vec![[0, 1, 0], [1, 1, 0], [2, 1, 0]]);
        assert!(buffer.row(2).is_err());
    }

    // Tests filled buffers use the requested color
    // Verified by ignoring the color argument
    #[test]
    fn test_filled() {
        let buffer = PixelBuffer::filled(2, 2, [10, 20, 30]).unwrap();
        assert!(buffer.pixels().all(|&pixel| pixel == [10, 20, 30]));
    }
}
