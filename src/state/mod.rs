//! Screen state: the fixed menu, row-scoped order state and the list window.

mod dish;
mod lazy;
mod row;

pub use dish::{menu, Dish};
pub use lazy::LazyListState;
pub use row::{RowState, RowStore};
