pub mod sht3x;

pub use sht3x::Sht3x;
