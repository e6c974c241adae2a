//! Hardcoded catalog of provinces, their cities and the city pairs drawn
//! as connections on the map.

pub mod java;
pub use java::JAVA_PROVINCES;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    pub name: &'static str,
    pub coordinate: Coordinate,
}

/// Undirected pair of city names; both are expected to be cities of the
/// owning province.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Connection(pub &'static str, pub &'static str);

#[derive(Debug, PartialEq, Serialize)]
pub struct Province {
    pub name: &'static str,
    pub cities: &'static [City],
    pub connections: &'static [Connection],
}

impl Province {
    pub fn coordinate_of(&self, city: &str) -> Option<Coordinate> {
        self.cities
            .iter()
            .find(|c| c.name == city)
            .map(|c| c.coordinate)
    }

    /// First city in declaration order; used to center the map.
    pub fn first_city(&self) -> Option<&City> {
        self.cities.first()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown province: {0}")]
pub struct ProvinceNotFound(pub String);

#[derive(Debug)]
pub struct Dataset {
    provinces: &'static [Province],
}

impl Dataset {
    pub const fn new(provinces: &'static [Province]) -> Self {
        Self { provinces }
    }

    pub fn list_provinces(&self) -> Vec<&'static str> {
        self.provinces.iter().map(|p| p.name).collect()
    }

    pub fn get_province(&self, name: &str) -> Result<&'static Province, ProvinceNotFound> {
        let provinces: &'static [Province] = self.provinces;
        provinces
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ProvinceNotFound(name.to_owned()))
    }

    pub fn provinces(&self) -> &'static [Province] {
        self.provinces
    }

    pub fn num_cities(&self) -> usize {
        self.provinces.iter().map(|p| p.cities.len()).sum()
    }

    pub fn num_connections(&self) -> usize {
        self.provinces.iter().map(|p| p.connections.len()).sum()
    }
}

pub static DATASET: Dataset = Dataset::new(JAVA_PROVINCES);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lists_provinces_in_declaration_order() {
        assert_eq!(
            DATASET.list_provinces(),
            vec!["West Java", "Central Java", "East Java"]
        );
    }

    #[test]
    fn get_province_is_stable() {
        let first = DATASET.get_province("East Java").unwrap();
        let second = DATASET.get_province("East Java").unwrap();

        assert_eq!(first.cities, second.cities);
        assert_eq!(first.connections, second.connections);
        assert_eq!(first.first_city().unwrap().name, "Surabaya");
    }

    #[test]
    fn unknown_province() {
        assert_eq!(
            DATASET.get_province("Bali").unwrap_err(),
            ProvinceNotFound(String::from("Bali"))
        );
    }

    #[test]
    fn connections_reference_known_cities() {
        for province in DATASET.provinces() {
            for Connection(a, b) in province.connections {
                assert_ne!(a, b, "self connection in {}", province.name);
                assert!(province.coordinate_of(a).is_some(), "{a} missing in {}", province.name);
                assert!(province.coordinate_of(b).is_some(), "{b} missing in {}", province.name);
            }
        }
    }

    #[test]
    fn city_names_unique_within_province() {
        for province in DATASET.provinces() {
            let mut names: Vec<_> = province.cities.iter().map(|c| c.name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), province.cities.len());
        }
    }

    #[test]
    fn totals() {
        assert_eq!(DATASET.num_cities(), 18);
        assert_eq!(DATASET.num_connections(), 15);
    }
}
