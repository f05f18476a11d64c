pub mod cli;
pub mod gateway;
pub mod model;
pub mod store;
