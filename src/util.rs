/// Numeric conversion helpers.
///
/// Converting between `i64` and `f64` goes through these helpers so that an
/// integer which a float cannot hold exactly is reported instead of silently
/// rounded.
pub mod num;
