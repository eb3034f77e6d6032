//! Domain modules (vertical slices): types, wire types, logic, sub-clients.

pub mod coin;
pub mod hover;
pub mod price;
pub mod value;
