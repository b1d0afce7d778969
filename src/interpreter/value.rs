/// The `Value` enum and its conversions, truthiness and display form.
pub mod core;
