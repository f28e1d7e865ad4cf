//! Core types for HVRDCR Market.

pub mod cart;
pub mod email;
pub mod id;
pub mod identity;
pub mod price;
pub mod product;

pub use cart::{Cart, CartEntry};
pub use email::{Email, EmailError};
pub use id::ProductId;
pub use identity::Identity;
pub use price::Price;
pub use product::{Category, Cpu, Manufacturer, Motherboard, Product, Ram};
