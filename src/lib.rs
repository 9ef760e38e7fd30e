pub mod config;
pub mod emit;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod pipeline;
pub mod record;
