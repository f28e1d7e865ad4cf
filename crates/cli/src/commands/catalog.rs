//! Catalog views: fetch a category, apply the view's filter, render.

use clap::{Subcommand, ValueEnum};

use hvrdcr_market_core::Manufacturer;
use hvrdcr_market_storefront::catalog::filter::{
    CpuFilter, CpuKind, MotherboardFilter, RamFilter, capacity_options, form_factor_options,
    kind_options, socket_options, vendor_options,
};
use hvrdcr_market_storefront::error::Result;
use hvrdcr_market_storefront::state::AppState;

use super::print_table;

/// One catalog view per category, each with its own filter fields.
#[derive(Subcommand)]
pub enum CatalogView {
    /// Processors
    Cpu {
        /// Only show this manufacturer
        #[arg(long, value_enum)]
        manufacturer: Option<ManufacturerArg>,
        /// Only show desktop or server parts
        #[arg(long, value_enum)]
        kind: Option<CpuKindArg>,
    },
    /// Motherboards
    Motherboard {
        /// Only show this socket
        #[arg(long)]
        socket: Option<String>,
        /// Only show this form factor
        #[arg(long)]
        form_factor: Option<String>,
    },
    /// Memory modules
    Ram {
        /// Only show this vendor
        #[arg(long)]
        vendor: Option<String>,
        /// Only show this memory type (e.g. DDR4)
        #[arg(long)]
        kind: Option<String>,
        /// Only show this capacity (e.g. 16GB)
        #[arg(long)]
        capacity: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ManufacturerArg {
    Amd,
    Intel,
    Unknown,
}

impl From<ManufacturerArg> for Manufacturer {
    fn from(arg: ManufacturerArg) -> Self {
        match arg {
            ManufacturerArg::Amd => Self::Amd,
            ManufacturerArg::Intel => Self::Intel,
            ManufacturerArg::Unknown => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CpuKindArg {
    Desktop,
    Server,
}

impl From<CpuKindArg> for CpuKind {
    fn from(arg: CpuKindArg) -> Self {
        match arg {
            CpuKindArg::Desktop => Self::Desktop,
            CpuKindArg::Server => Self::Server,
        }
    }
}

/// Fetch, filter, and render the requested view.
pub async fn show(state: &AppState, view: CatalogView) -> Result<()> {
    match view {
        CatalogView::Cpu { manufacturer, kind } => {
            let filter = CpuFilter {
                manufacturer: manufacturer.map(Into::into),
                kind: kind.map(Into::into),
            };
            let cpus = state.catalog().fetch_cpus().await?;
            let visible = filter.apply(&cpus);

            let rows: Vec<Vec<String>> = visible
                .iter()
                .map(|cpu| {
                    vec![
                        cpu.id.to_string(),
                        cpu.name.clone(),
                        cpu.socket.clone(),
                        (if cpu.is_server { "server" } else { "desktop" }).to_owned(),
                        cpu.price.display_rub(),
                    ]
                })
                .collect();
            render(
                &["ID", "NAME", "SOCKET", "TYPE", "PRICE"],
                &rows,
                cpus.len(),
            );
        }
        CatalogView::Motherboard {
            socket,
            form_factor,
        } => {
            let filter = MotherboardFilter {
                socket,
                form_factor,
            };
            let (mobos, _) = state.catalog().fetch_motherboards_and_ram().await?;
            let visible = filter.apply(&mobos);

            let rows: Vec<Vec<String>> = visible
                .iter()
                .map(|mobo| {
                    vec![
                        mobo.id.to_string(),
                        mobo.name.clone(),
                        mobo.socket.clone(),
                        mobo.form_factor.clone(),
                        mobo.price.display_rub(),
                    ]
                })
                .collect();
            render(
                &["ID", "NAME", "SOCKET", "FORM FACTOR", "PRICE"],
                &rows,
                mobos.len(),
            );
            println!();
            println!("Sockets: {}", socket_options(&mobos).join(", "));
            println!("Form factors: {}", form_factor_options(&mobos).join(", "));
        }
        CatalogView::Ram {
            vendor,
            kind,
            capacity,
        } => {
            let filter = RamFilter {
                vendor,
                kind,
                capacity,
            };
            let (_, modules) = state.catalog().fetch_motherboards_and_ram().await?;
            let visible = filter.apply(&modules);

            let rows: Vec<Vec<String>> = visible
                .iter()
                .map(|ram| {
                    vec![
                        ram.id.to_string(),
                        ram.name.clone(),
                        ram.vendor.clone(),
                        ram.kind.clone(),
                        ram.capacity.clone(),
                        ram.price.display_rub(),
                    ]
                })
                .collect();
            render(
                &["ID", "NAME", "VENDOR", "TYPE", "CAPACITY", "PRICE"],
                &rows,
                modules.len(),
            );
            println!();
            println!("Vendors: {}", vendor_options(&modules).join(", "));
            println!("Types: {}", kind_options(&modules).join(", "));
            println!("Capacities: {}", capacity_options(&modules).join(", "));
        }
    }
    Ok(())
}

fn render(headers: &[&str], rows: &[Vec<String>], loaded: usize) {
    if rows.is_empty() {
        if loaded == 0 {
            println!("The catalog is empty.");
        } else {
            println!("Nothing matched the current filters.");
        }
        return;
    }
    print_table(headers, rows);
}
