pub mod controller;
pub mod row;
pub mod views;

pub use controller::TaskStore;
pub use row::RowState;
pub use views::Counts;
