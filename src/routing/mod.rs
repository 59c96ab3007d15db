//! Route table and request path matching.

mod table;

pub use table::{Route, RouteTable, RouteTableError};
