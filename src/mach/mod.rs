/*!
## Rust Machine Module

This Rust module indexes rows and executes them.

*/

mod command;
mod context;
mod listing;
mod resolve;
mod runtime;
mod val;
mod var;

pub use command::Command;
pub use context::{Context, Halt, Step};
pub use listing::Listing;
pub use runtime::Event;
pub use runtime::Runtime;
pub use val::{Kind, Val};
pub use var::Var;

#[cfg(test)]
mod tests;
