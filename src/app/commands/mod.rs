pub mod dev;
pub mod generate;
