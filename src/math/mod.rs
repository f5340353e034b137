pub mod change;
pub mod difference;
pub mod rolling;
pub mod stats;
