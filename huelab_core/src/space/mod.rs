//! Color-space value types and their conversions.
//!
//! Every space converts to and from [`Rgb`](crate::Rgb), directly or via
//! XYZ/LAB for the perceptual pipelines. Conversions are pure functions;
//! out-of-gamut results clamp rather than fail.

pub mod hsl;
pub mod hsv;
pub mod lab;
pub mod lch;
pub mod oklab;
pub mod xyz;

pub use hsl::Hsl;
pub use hsv::Hsv;
pub use lab::Lab;
pub use lch::Lch;
pub use oklab::Oklab;
pub use xyz::Xyz;
