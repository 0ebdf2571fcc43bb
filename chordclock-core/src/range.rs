//! Linear range mapping

/// Rescale `value` from `[old_min, old_max]` onto `[new_min, new_max]`
///
/// Plain affine map with no clamping: values outside the old range land
/// outside the new one. Reversed ranges work as expected.
///
/// # Panics
///
/// Panics if `old_min == old_max`. Every call site passes constant ranges,
/// so a degenerate range is a programming error.
pub fn map_range(value: f32, old_min: f32, old_max: f32, new_min: f32, new_max: f32) -> f32 {
    let old_range = old_max - old_min;
    assert!(old_range != 0.0, "map_range: empty source range");
    let new_range = new_max - new_min;

    ((value - old_min) * new_range / old_range) + new_min
}
