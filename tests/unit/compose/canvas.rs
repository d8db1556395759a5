//! Tests for raster canvas acquisition, drawing and PNG encoding

#[cfg(test)]
mod tests {
    use crate::solid_image;
    use gridcollage::CollageError;
    use gridcollage::compose::canvas::RasterCanvas;
    use gridcollage::compose::surface::Surface;
    use gridcollage::io::configuration::MAX_CANVAS_DIMENSION;
    use gridcollage::spatial::layout::{CanvasSize, Rect};
    use image::imageops::FilterType;

    const RED: [u8; 4] = [255, 0, 0, 255];

    // Tests a zero-sized canvas is reported instead of silently ignored
    // Verified by removing the zero dimension check
    #[test]
    fn test_zero_size_is_unavailable() {
        let result = RasterCanvas::new(CanvasSize::new(0, 100));

        match result {
            Err(CollageError::SurfaceUnavailable { width, height, .. }) => {
                assert_eq!((width, height), (0, 100));
            }
            _ => unreachable!("Expected SurfaceUnavailable error type"),
        }
    }

    // Tests oversized canvases are refused
    // Verified by raising the limit check to use greater-or-equal on the wrong side
    #[test]
    fn test_oversized_canvas_is_unavailable() {
        let result = RasterCanvas::new(CanvasSize::new(MAX_CANVAS_DIMENSION + 1, 10));

        assert!(matches!(
            result,
            Err(CollageError::SurfaceUnavailable { .. })
        ));
    }

    // Tests a fresh canvas is fully transparent and reports its size
    // Verified by initializing pixels to opaque black
    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = RasterCanvas::new(CanvasSize::new(8, 4)).unwrap();

        assert_eq!(canvas.size(), CanvasSize::new(8, 4));
        assert!(canvas.pixels().pixels().all(|p| p.0[3] == 0));
    }

    // Tests an image is scaled into the destination and nothing else is touched
    // Verified by drawing at the unscaled source size
    #[test]
    fn test_draw_image_fills_destination_only() {
        let mut canvas =
            RasterCanvas::with_filter(CanvasSize::square(40), FilterType::Nearest).unwrap();
        let image = solid_image(0, 4, 2, RED);
        let dest = Rect {
            x: 0.0,
            y: 5.0,
            width: 10.0,
            height: 5.0,
        };

        canvas.draw_image(&image, dest).unwrap();

        let pixels = canvas.pixels();
        assert_eq!(pixels.get_pixel(0, 5).0, RED);
        assert_eq!(pixels.get_pixel(9, 9).0, RED);
        assert_eq!(pixels.get_pixel(10, 5).0[3], 0);
        assert_eq!(pixels.get_pixel(0, 4).0[3], 0);
        assert_eq!(pixels.get_pixel(0, 10).0[3], 0);
    }

    // Tests placements entirely off the canvas are skipped without error
    // Verified by returning an error for off-canvas rectangles
    #[test]
    fn test_off_canvas_draw_is_skipped() {
        let mut canvas = RasterCanvas::new(CanvasSize::square(20)).unwrap();
        let image = solid_image(16, 5, 5, RED);
        let dest = Rect {
            x: 0.0,
            y: 20.0,
            width: 5.0,
            height: 5.0,
        };

        assert!(canvas.draw_image(&image, dest).is_ok());
        assert!(canvas.pixels().pixels().all(|p| p.0[3] == 0));
    }

    // Tests non-finite destinations are rejected
    // Verified by unwrapping the snapped rectangle
    #[test]
    fn test_non_finite_destination_is_rejected() {
        let mut canvas = RasterCanvas::new(CanvasSize::square(20)).unwrap();
        let image = solid_image(0, 5, 5, RED);
        let dest = Rect {
            x: f64::NAN,
            y: 0.0,
            width: 5.0,
            height: 5.0,
        };

        assert!(matches!(
            canvas.draw_image(&image, dest),
            Err(CollageError::InvalidParameter { .. })
        ));
    }

    // Tests the encoded PNG decodes back to the canvas contents
    // Verified by encoding an empty buffer
    #[test]
    fn test_encode_png_round_trips_pixels() {
        let mut canvas =
            RasterCanvas::with_filter(CanvasSize::new(12, 6), FilterType::Nearest).unwrap();
        let image = solid_image(0, 3, 3, RED);
        let dest = Rect {
            x: 0.0,
            y: 0.0,
            width: 3.0,
            height: 3.0,
        };
        canvas.draw_image(&image, dest).unwrap();

        let bytes = canvas.encode_png().unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));

        let decoded = image::load_from_memory(&bytes).unwrap().into_rgba8();
        assert_eq!(decoded.dimensions(), (12, 6));
        assert_eq!(decoded.get_pixel(1, 1).0, RED);
        assert_eq!(decoded.get_pixel(5, 1).0[3], 0);
        assert_eq!(decoded, canvas.into_pixels());
    }
}
