/// Numeric helpers.
///
/// Floored integer division and remainder, checked exponentiation, and the
/// index and repetition-count conversions used by list operations. Every
/// fallible helper reports failures as a `RuntimeError` carrying the source
/// line.
pub mod num;
