pub mod cli;
pub mod compare;
pub mod config;
pub mod ctx;
pub mod error;
pub mod io;
pub mod math;
pub mod pipeline;
pub mod render;
pub mod schema;
pub mod series;
