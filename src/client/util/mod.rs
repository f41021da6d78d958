pub mod api;
pub mod refresh;
