//! The product catalog's tagged union.
//!
//! Three categories share one cart and one checkout pipeline, so products
//! are a closed enum discriminated by an explicit `category` tag. Fields
//! specific to a category only exist under its variant, and every consumer
//! matches exhaustively.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::Price;

/// Product category discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "CPU")]
    Cpu,
    Motherboard,
    #[serde(rename = "RAM")]
    Ram,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cpu => "CPU",
            Self::Motherboard => "Motherboard",
            Self::Ram => "RAM",
        };
        write!(f, "{name}")
    }
}

/// CPU manufacturer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Manufacturer {
    #[serde(rename = "AMD")]
    Amd,
    Intel,
    Unknown,
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Amd => "AMD",
            Self::Intel => "Intel",
            Self::Unknown => "Unknown",
        };
        write!(f, "{name}")
    }
}

/// A processor row from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cpu {
    pub id: ProductId,
    pub name: String,
    pub socket: String,
    pub price: Price,
    pub manufacturer: Manufacturer,
    /// True for rows from the server range of the sheet.
    pub is_server: bool,
}

/// A motherboard row from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Motherboard {
    pub id: ProductId,
    pub name: String,
    pub socket: String,
    pub form_factor: String,
    pub price: Price,
}

/// A memory-module row from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ram {
    pub id: ProductId,
    pub name: String,
    pub vendor: String,
    /// Memory technology, e.g. DDR4.
    pub kind: String,
    pub capacity: String,
    pub price: Price,
}

/// Any catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum Product {
    #[serde(rename = "CPU")]
    Cpu(Cpu),
    Motherboard(Motherboard),
    #[serde(rename = "RAM")]
    Ram(Ram),
}

impl Product {
    /// The product's session-stable identifier.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        match self {
            Self::Cpu(cpu) => &cpu.id,
            Self::Motherboard(mobo) => &mobo.id,
            Self::Ram(ram) => &ram.id,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Cpu(cpu) => &cpu.name,
            Self::Motherboard(mobo) => &mobo.name,
            Self::Ram(ram) => &ram.name,
        }
    }

    /// Unit price.
    #[must_use]
    pub const fn price(&self) -> Price {
        match self {
            Self::Cpu(cpu) => cpu.price,
            Self::Motherboard(mobo) => mobo.price,
            Self::Ram(ram) => ram.price,
        }
    }

    /// Category tag.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Cpu(_) => Category::Cpu,
            Self::Motherboard(_) => Category::Motherboard,
            Self::Ram(_) => Category::Ram,
        }
    }
}

impl From<Cpu> for Product {
    fn from(cpu: Cpu) -> Self {
        Self::Cpu(cpu)
    }
}

impl From<Motherboard> for Product {
    fn from(mobo: Motherboard) -> Self {
        Self::Motherboard(mobo)
    }
}

impl From<Ram> for Product {
    fn from(ram: Ram) -> Self {
        Self::Ram(ram)
    }
}
