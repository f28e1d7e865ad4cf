//! Command handlers for the `hvrdcr` binary.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;

pub use cart::CartAction;
pub use catalog::CatalogView;

/// Render an aligned plain-text table.
pub(crate) fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<String>| {
        let padded: Vec<String> = widths
            .iter()
            .zip(cells)
            .map(|(&width, cell)| format!("{cell:<width$}"))
            .collect();
        println!("{}", padded.join("  ").trim_end());
    };

    line(headers.iter().map(|h| (*h).to_owned()).collect());
    println!("{}", "-".repeat(widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2));
    for row in rows {
        line(row.clone());
    }
}
