//! Per-category catalog filters.
//!
//! Every filter field is independently optional; `None` matches everything.
//! A product passes a filter iff every set field matches - a pure
//! conjunction over (catalog snapshot, filter state), recomputed on each
//! render and never cached across snapshot changes. Setting one field
//! leaves the others untouched.
//!
//! Option lists for select-style fields are derived from the currently
//! loaded product set, de-duplicated and sorted ascending.

use std::collections::BTreeSet;

use hvrdcr_market_core::{Cpu, Manufacturer, Motherboard, Ram};

/// Desktop/server discriminator for CPU filtering, mapped onto
/// [`Cpu::is_server`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuKind {
    Desktop,
    Server,
}

/// Filter state of the CPU view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuFilter {
    pub manufacturer: Option<Manufacturer>,
    pub kind: Option<CpuKind>,
}

impl CpuFilter {
    /// Conjunction over both fields.
    #[must_use]
    pub fn matches(&self, cpu: &Cpu) -> bool {
        let manufacturer_match = self
            .manufacturer
            .is_none_or(|wanted| cpu.manufacturer == wanted);
        let kind_match = self.kind.is_none_or(|wanted| match wanted {
            CpuKind::Desktop => !cpu.is_server,
            CpuKind::Server => cpu.is_server,
        });
        manufacturer_match && kind_match
    }

    /// Apply to a loaded snapshot.
    #[must_use]
    pub fn apply<'a>(&self, cpus: &'a [Cpu]) -> Vec<&'a Cpu> {
        cpus.iter().filter(|cpu| self.matches(cpu)).collect()
    }
}

/// Filter state of the motherboard view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MotherboardFilter {
    pub socket: Option<String>,
    pub form_factor: Option<String>,
}

impl MotherboardFilter {
    /// Conjunction over both fields.
    #[must_use]
    pub fn matches(&self, mobo: &Motherboard) -> bool {
        let socket_match = self
            .socket
            .as_deref()
            .is_none_or(|wanted| mobo.socket == wanted);
        let form_factor_match = self
            .form_factor
            .as_deref()
            .is_none_or(|wanted| mobo.form_factor == wanted);
        socket_match && form_factor_match
    }

    /// Apply to a loaded snapshot.
    #[must_use]
    pub fn apply<'a>(&self, mobos: &'a [Motherboard]) -> Vec<&'a Motherboard> {
        mobos.iter().filter(|mobo| self.matches(mobo)).collect()
    }
}

/// Filter state of the RAM view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RamFilter {
    pub vendor: Option<String>,
    pub kind: Option<String>,
    pub capacity: Option<String>,
}

impl RamFilter {
    /// Conjunction over all three fields.
    #[must_use]
    pub fn matches(&self, ram: &Ram) -> bool {
        let vendor_match = self
            .vendor
            .as_deref()
            .is_none_or(|wanted| ram.vendor == wanted);
        let kind_match = self.kind.as_deref().is_none_or(|wanted| ram.kind == wanted);
        let capacity_match = self
            .capacity
            .as_deref()
            .is_none_or(|wanted| ram.capacity == wanted);
        vendor_match && kind_match && capacity_match
    }

    /// Apply to a loaded snapshot.
    #[must_use]
    pub fn apply<'a>(&self, modules: &'a [Ram]) -> Vec<&'a Ram> {
        modules.iter().filter(|ram| self.matches(ram)).collect()
    }
}

/// Distinct values of one attribute across the loaded set, sorted ascending.
fn distinct_sorted<'a, T>(items: &'a [T], attr: impl Fn(&'a T) -> &'a str) -> Vec<String> {
    items
        .iter()
        .map(attr)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(ToOwned::to_owned)
        .collect()
}

/// Socket options offered by the motherboard view.
#[must_use]
pub fn socket_options(mobos: &[Motherboard]) -> Vec<String> {
    distinct_sorted(mobos, |mobo| mobo.socket.as_str())
}

/// Form-factor options offered by the motherboard view.
#[must_use]
pub fn form_factor_options(mobos: &[Motherboard]) -> Vec<String> {
    distinct_sorted(mobos, |mobo| mobo.form_factor.as_str())
}

/// Vendor options offered by the RAM view.
#[must_use]
pub fn vendor_options(modules: &[Ram]) -> Vec<String> {
    distinct_sorted(modules, |ram| ram.vendor.as_str())
}

/// Memory-type options offered by the RAM view.
#[must_use]
pub fn kind_options(modules: &[Ram]) -> Vec<String> {
    distinct_sorted(modules, |ram| ram.kind.as_str())
}

/// Capacity options offered by the RAM view.
#[must_use]
pub fn capacity_options(modules: &[Ram]) -> Vec<String> {
    distinct_sorted(modules, |ram| ram.capacity.as_str())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use hvrdcr_market_core::{Price, ProductId};

    fn cpu(name: &str, socket: &str, is_server: bool) -> Cpu {
        Cpu {
            id: ProductId::from(format!("{name}-{socket}-0-{is_server}").as_str()),
            name: name.to_owned(),
            socket: socket.to_owned(),
            price: Price::parse_cell("10000").unwrap(),
            manufacturer: Manufacturer::Amd,
            is_server,
        }
    }

    fn mobo(name: &str, socket: &str, form_factor: &str) -> Motherboard {
        Motherboard {
            id: ProductId::from(format!("mobo-{name}-{socket}-0").as_str()),
            name: name.to_owned(),
            socket: socket.to_owned(),
            form_factor: form_factor.to_owned(),
            price: Price::parse_cell("9000").unwrap(),
        }
    }

    fn ram(vendor: &str, kind: &str, capacity: &str) -> Ram {
        Ram {
            id: ProductId::from(format!("ram-x-{vendor}-{kind}-{capacity}-0").as_str()),
            name: "x".to_owned(),
            vendor: vendor.to_owned(),
            kind: kind.to_owned(),
            capacity: capacity.to_owned(),
            price: Price::parse_cell("4000").unwrap(),
        }
    }

    #[test]
    fn test_cpu_filter_conjunction() {
        // A: AM4 desktop, B: AM4 server, C: AM5 desktop.
        let a = cpu("A", "AM4", false);
        let b = cpu("B", "AM4", true);
        let c = cpu("C", "AM5", false);
        let all = vec![a.clone(), b, c];

        let filter = CpuFilter {
            manufacturer: Some(Manufacturer::Amd),
            kind: Some(CpuKind::Desktop),
        };
        // Socket is not a CPU filter field; desktop + AMD keeps A and C.
        let hits = filter.apply(&all);
        assert_eq!(
            hits.iter().map(|cpu| cpu.name.as_str()).collect::<Vec<_>>(),
            ["A", "C"]
        );

        let server_only = CpuFilter {
            manufacturer: None,
            kind: Some(CpuKind::Server),
        };
        let hits = server_only.apply(&all);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "B");

        let intel = CpuFilter {
            manufacturer: Some(Manufacturer::Intel),
            kind: None,
        };
        assert!(intel.apply(&all).is_empty());
    }

    #[test]
    fn test_default_filter_matches_all() {
        let all = vec![cpu("A", "AM4", false), cpu("B", "SP3", true)];
        assert_eq!(CpuFilter::default().apply(&all).len(), 2);
    }

    #[test]
    fn test_motherboard_filter_conjunction() {
        let a = mobo("A", "AM4", "ATX");
        let b = mobo("B", "AM4", "mATX");
        let c = mobo("C", "AM5", "ATX");
        let all = vec![a, b, c];

        let filter = MotherboardFilter {
            socket: Some("AM4".to_owned()),
            form_factor: Some("ATX".to_owned()),
        };
        let hits = filter.apply(&all);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "A");
    }

    #[test]
    fn test_single_field_update_merges() {
        let mut filter = MotherboardFilter {
            socket: Some("AM4".to_owned()),
            form_factor: None,
        };
        filter.form_factor = Some("ATX".to_owned());
        // Changing one field leaves the other untouched.
        assert_eq!(filter.socket.as_deref(), Some("AM4"));
    }

    #[test]
    fn test_ram_filter_all_fields() {
        let all = vec![
            ram("Kingston", "DDR4", "16GB"),
            ram("Kingston", "DDR4", "32GB"),
            ram("Crucial", "DDR5", "16GB"),
        ];
        let filter = RamFilter {
            vendor: Some("Kingston".to_owned()),
            kind: Some("DDR4".to_owned()),
            capacity: Some("16GB".to_owned()),
        };
        let hits = filter.apply(&all);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].capacity, "16GB");
    }

    #[test]
    fn test_option_lists_deduped_and_sorted() {
        let mobos = vec![
            mobo("A", "AM4", "ATX"),
            mobo("B", "AM5", "mATX"),
            mobo("C", "AM4", "ATX"),
        ];
        assert_eq!(socket_options(&mobos), ["AM4", "AM5"]);
        assert_eq!(form_factor_options(&mobos), ["ATX", "mATX"]);

        let modules = vec![
            ram("Kingston", "DDR4", "32GB"),
            ram("Crucial", "DDR5", "16GB"),
            ram("Kingston", "DDR5", "16GB"),
        ];
        assert_eq!(vendor_options(&modules), ["Crucial", "Kingston"]);
        assert_eq!(kind_options(&modules), ["DDR4", "DDR5"]);
        assert_eq!(capacity_options(&modules), ["16GB", "32GB"]);
    }
}
