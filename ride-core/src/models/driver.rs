use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DriverId(pub u32);

impl fmt::Display for DriverId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverOption {
    pub id: DriverId,
    pub name: String,
    pub rating: f32,
}

impl DriverOption {
    /// Label shown in the driver picker, e.g. `Jane Smith (4.9)`.
    pub fn label(&self) -> String {
        format!("{} ({:.1})", self.name, self.rating)
    }
}

const CATALOG: [(u32, &str, f32); 3] = [
    (1, "John Doe", 4.8),
    (2, "Jane Smith", 4.9),
    (3, "Mike Johnson", 4.7),
];

/// Drivers offered in the picker, in display order.
pub fn driver_catalog() -> Vec<DriverOption> {
    CATALOG
        .iter()
        .map(|&(id, name, rating)| DriverOption {
            id: DriverId(id),
            name: name.to_string(),
            rating,
        })
        .collect()
}

pub fn find_driver(id: DriverId) -> Option<DriverOption> {
    driver_catalog().into_iter().find(|d| d.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_has_three_uniform_entries() {
        let catalog = driver_catalog();

        let names: Vec<&str> = catalog.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["John Doe", "Jane Smith", "Mike Johnson"]);
        assert!(catalog.iter().all(|d| d.rating > 0.0 && d.rating <= 5.0));
    }

    #[test]
    fn label_includes_rating() {
        let jane = find_driver(DriverId(2)).unwrap();

        assert_eq!(jane.label(), "Jane Smith (4.9)");
    }

    #[test]
    fn unknown_driver_is_none() {
        assert!(find_driver(DriverId(42)).is_none());
    }
}
