//! Row-to-product adapter.
//!
//! Turns raw spreadsheet row batches into validated product records, one
//! parser per category schema. Parsing is pure and total: a row missing its
//! name or carrying an unparseable price is dropped without affecting its
//! siblings, and an adapter call never fails outright.
//!
//! The row index within its batch is folded into the id together with the
//! name, the distinguishing attributes, and the category tag, so duplicate
//! names (and the same model appearing in both the desktop and server
//! ranges) still produce distinct ids.

use hvrdcr_market_core::{Cpu, Manufacturer, Motherboard, Price, ProductId, Ram};

use crate::sheets::RowBatch;

/// Sentinel for blank secondary fields.
const UNKNOWN: &str = "N/A";

/// Parse one CPU batch. `is_server` tags which range the batch came from.
///
/// Row schema: `[name, socket, price]`.
#[must_use]
pub fn parse_cpu_rows(rows: &RowBatch, is_server: bool) -> Vec<Cpu> {
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let name = required_cell(row, 0)?;
            let price = Price::parse_cell(required_cell(row, 2)?)?;
            let socket = cell_or_unknown(row, 1);

            Some(Cpu {
                id: ProductId::from(format!("{name}-{socket}-{index}-{is_server}").as_str()),
                name: name.to_owned(),
                socket,
                price,
                // The source sheet carries AMD parts only.
                manufacturer: Manufacturer::Amd,
                is_server,
            })
        })
        .collect()
}

/// Parse the motherboard batch.
///
/// Row schema: `[name, socket, form_factor, _, price]` - the price sits in
/// the fifth column.
#[must_use]
pub fn parse_motherboard_rows(rows: &RowBatch) -> Vec<Motherboard> {
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let name = required_cell(row, 0)?;
            let price = Price::parse_cell(required_cell(row, 4)?)?;
            let socket = cell_or_unknown(row, 1);

            Some(Motherboard {
                id: ProductId::from(format!("mobo-{name}-{socket}-{index}").as_str()),
                name: name.to_owned(),
                socket,
                form_factor: cell_or_unknown(row, 2),
                price,
            })
        })
        .collect()
}

/// Parse the RAM batch.
///
/// Row schema: `[name, vendor, type, capacity, _, price]` - the price sits
/// in the sixth column.
#[must_use]
pub fn parse_ram_rows(rows: &RowBatch) -> Vec<Ram> {
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let name = required_cell(row, 0)?;
            let price = Price::parse_cell(required_cell(row, 5)?)?;
            let vendor = cell_or_unknown(row, 1);
            let kind = cell_or_unknown(row, 2);
            let capacity = cell_or_unknown(row, 3);

            Some(Ram {
                id: ProductId::from(
                    format!("ram-{name}-{vendor}-{kind}-{capacity}-{index}").as_str(),
                ),
                name: name.to_owned(),
                vendor,
                kind,
                capacity,
                price,
            })
        })
        .collect()
}

/// A cell whose absence or emptiness rejects the row.
fn required_cell(row: &[String], index: usize) -> Option<&str> {
    row.get(index).map(String::as_str).filter(|s| !s.is_empty())
}

/// A cell that defaults to the unknown sentinel when blank.
fn cell_or_unknown(row: &[String], index: usize) -> String {
    row.get(index)
        .filter(|s| !s.is_empty())
        .cloned()
        .unwrap_or_else(|| UNKNOWN.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|&c| c.to_owned()).collect()
    }

    #[test]
    fn test_cpu_row_parses_price_and_socket() {
        let rows = vec![row(&["Ryzen 5 5600X", "AM4", "15 990 ₽"])];
        let cpus = parse_cpu_rows(&rows, false);

        assert_eq!(cpus.len(), 1);
        assert_eq!(cpus[0].name, "Ryzen 5 5600X");
        assert_eq!(cpus[0].socket, "AM4");
        assert_eq!(cpus[0].price, Price::parse_cell("15990").unwrap());
        assert_eq!(cpus[0].manufacturer, Manufacturer::Amd);
        assert!(!cpus[0].is_server);
        assert_eq!(cpus[0].id.as_str(), "Ryzen 5 5600X-AM4-0-false");
    }

    #[test]
    fn test_cpu_row_empty_name_rejected() {
        let rows = vec![
            row(&["", "AM4", "15 990 ₽"]),
            row(&["Ryzen 7 5800X", "AM4", "25 990 ₽"]),
        ];
        let cpus = parse_cpu_rows(&rows, false);
        assert_eq!(cpus.len(), 1);
        assert_eq!(cpus[0].name, "Ryzen 7 5800X");
        // The surviving row keeps its batch index.
        assert_eq!(cpus[0].id.as_str(), "Ryzen 7 5800X-AM4-1-false");
    }

    #[test]
    fn test_cpu_row_dash_price_rejected() {
        let rows = vec![row(&["Ryzen 5 5600X", "AM4", "—"])];
        assert!(parse_cpu_rows(&rows, false).is_empty());
    }

    #[test]
    fn test_cpu_row_short_row_rejected() {
        let rows = vec![row(&["Ryzen 5 5600X"])];
        assert!(parse_cpu_rows(&rows, false).is_empty());
    }

    #[test]
    fn test_cpu_blank_socket_defaults() {
        let rows = vec![row(&["Ryzen 5 5600X", "", "15990"])];
        let cpus = parse_cpu_rows(&rows, false);
        assert_eq!(cpus[0].socket, "N/A");
    }

    #[test]
    fn test_cpu_server_tag_distinguishes_ids() {
        let rows = vec![row(&["EPYC 7302", "SP3", "45000"])];
        let desktop = parse_cpu_rows(&rows, false);
        let server = parse_cpu_rows(&rows, true);
        assert!(server[0].is_server);
        assert_ne!(desktop[0].id, server[0].id);
    }

    #[test]
    fn test_duplicate_names_get_distinct_ids() {
        let rows = vec![
            row(&["Ryzen 5 5600X", "AM4", "15990"]),
            row(&["Ryzen 5 5600X", "AM4", "14990"]),
        ];
        let cpus = parse_cpu_rows(&rows, false);
        assert_eq!(cpus.len(), 2);
        assert_ne!(cpus[0].id, cpus[1].id);
    }

    #[test]
    fn test_motherboard_row_price_in_fifth_column() {
        let rows = vec![row(&["B550 Tomahawk", "AM4", "ATX", "notes", "12 490 ₽"])];
        let mobos = parse_motherboard_rows(&rows);

        assert_eq!(mobos.len(), 1);
        assert_eq!(mobos[0].form_factor, "ATX");
        assert_eq!(mobos[0].price, Price::parse_cell("12490").unwrap());
        assert_eq!(mobos[0].id.as_str(), "mobo-B550 Tomahawk-AM4-0");
    }

    #[test]
    fn test_motherboard_blank_fields_default() {
        let rows = vec![row(&["B550 Tomahawk", "", "", "", "12490"])];
        let mobos = parse_motherboard_rows(&rows);
        assert_eq!(mobos[0].socket, "N/A");
        assert_eq!(mobos[0].form_factor, "N/A");
    }

    #[test]
    fn test_ram_row_price_in_sixth_column() {
        let rows = vec![row(&[
            "Fury Beast",
            "Kingston",
            "DDR4",
            "16GB",
            "notes",
            "4 500 ₽",
        ])];
        let ram = parse_ram_rows(&rows);

        assert_eq!(ram.len(), 1);
        assert_eq!(ram[0].vendor, "Kingston");
        assert_eq!(ram[0].kind, "DDR4");
        assert_eq!(ram[0].capacity, "16GB");
        assert_eq!(ram[0].price, Price::parse_cell("4500").unwrap());
        assert_eq!(ram[0].id.as_str(), "ram-Fury Beast-Kingston-DDR4-16GB-0");
    }

    #[test]
    fn test_ram_missing_price_column_rejected() {
        let rows = vec![row(&["Fury Beast", "Kingston", "DDR4", "16GB"])];
        assert!(parse_ram_rows(&rows).is_empty());
    }
}
