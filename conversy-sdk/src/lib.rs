pub mod api;
pub mod error;
pub mod model;
pub mod relationship;
pub mod state;
