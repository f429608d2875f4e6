//! Domain models for the API.
//!
//! Each entity has an input type (what a client may send) and a stored type
//! (what the stores keep and the API returns). Output types never carry
//! secrets: the user password lives only in the account store's private
//! record.

pub mod order;
pub mod product;
pub mod user;

pub use order::{Order, OrderInput, OrderItem, OrderItemInput};
pub use product::{Product, ProductFilter, ProductInput};
pub use user::{User, UserInput};
