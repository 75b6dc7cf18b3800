//! Grid column derivation from viewport geometry.

/// Target tile width in pixels when columns are derived automatically.
pub const DEFAULT_TILE_SIZE: f32 = 400.0;

/// Number of grid columns for a container width, never less than one.
pub fn columns_for_width(width: f32, tile_size: f32) -> usize {
    if !width.is_finite() || !tile_size.is_finite() || tile_size <= 0.0 {
        return 1;
    }
    ((width / tile_size).round() as usize).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_round_to_nearest_tile() {
        assert_eq!(columns_for_width(1200.0, DEFAULT_TILE_SIZE), 3);
        assert_eq!(columns_for_width(1500.0, DEFAULT_TILE_SIZE), 4);
        assert_eq!(columns_for_width(399.0, DEFAULT_TILE_SIZE), 1);
    }

    #[test]
    fn narrow_viewport_keeps_one_column() {
        assert_eq!(columns_for_width(10.0, DEFAULT_TILE_SIZE), 1);
        assert_eq!(columns_for_width(0.0, DEFAULT_TILE_SIZE), 1);
    }

    #[test]
    fn degenerate_measurements_keep_one_column() {
        assert_eq!(columns_for_width(f32::NAN, DEFAULT_TILE_SIZE), 1);
        assert_eq!(columns_for_width(1200.0, 0.0), 1);
    }
}
