//! Domain Layer - cyclic value types
//!
//! This layer contains:
//! - `Interval`: validated `[left, right)` bounds and normalization
//! - `IntegerLike`: operand conversion contract
//! - `CyclicInt`: wrap-around integer
//! - `CyclicList`: sequence with wrap-around positions
//!
//! RULES:
//! - No I/O operations
//! - Every stored value goes through `Interval::normalize`

pub mod cyclic_int;
pub mod cyclic_list;
pub mod interval;
pub mod operand;

pub use cyclic_int::CyclicInt;
pub use cyclic_list::CyclicList;
pub use interval::Interval;
pub use operand::IntegerLike;
