use serde::Serialize;
use tracing::debug;

use super::ViewSettings;
use crate::dataset::{Connection, Coordinate, Province};

pub const MARKER_COLOR: &str = "blue";
pub const LINE_COLOR: &str = "green";
pub const LINE_WEIGHT: u32 = 5;
pub const LINE_OPACITY: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub coordinate: Coordinate,
    pub label: &'static str,
    pub tooltip: &'static str,
    pub icon_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub from: Coordinate,
    pub to: Coordinate,
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapRender {
    pub province: &'static str,
    pub center: Option<Coordinate>,
    pub zoom: u8,
    pub width: u32,
    pub height: u32,
    pub markers: Vec<Marker>,
    pub lines: Vec<Line>,
}

#[derive(Debug)]
pub struct MapPage {
    pub provinces: Vec<&'static str>,
    pub render: Option<MapRender>,
}

pub fn render(province: &Province, settings: &ViewSettings) -> MapRender {
    let markers = province
        .cities
        .iter()
        .map(|city| Marker {
            coordinate: city.coordinate,
            label: city.name,
            tooltip: city.name,
            icon_color: MARKER_COLOR,
        })
        .collect();

    // connections with an endpoint outside the province are not drawn
    let lines: Vec<_> = province
        .connections
        .iter()
        .filter_map(|&Connection(a, b)| {
            Some(Line {
                from: province.coordinate_of(a)?,
                to: province.coordinate_of(b)?,
                color: LINE_COLOR,
                weight: LINE_WEIGHT,
                opacity: LINE_OPACITY,
            })
        })
        .collect();

    if lines.len() < province.connections.len() {
        debug!(
            "Dropped {} connections with unknown endpoints in {}",
            province.connections.len() - lines.len(),
            province.name
        );
    }

    MapRender {
        province: province.name,
        center: province.first_city().map(|c| c.coordinate),
        zoom: settings.map_zoom,
        width: settings.map_width,
        height: settings.map_height,
        markers,
        lines,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dataset::{City, DATASET};

    #[test]
    fn west_java() {
        let province = DATASET.get_province("West Java").unwrap();
        let map = render(province, &ViewSettings::default());

        let labels: Vec<_> = map.markers.iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            vec!["Bandung", "Cirebon", "Bekasi", "Depok", "Bogor", "Cianjur"]
        );
        assert!(map.markers.iter().all(|m| m.icon_color == "blue"));

        assert_eq!(map.lines.len(), 5);
        assert_eq!(map.lines[0].from, province.coordinate_of("Bandung").unwrap());
        assert_eq!(map.lines[0].to, province.coordinate_of("Cirebon").unwrap());
        assert_eq!(map.lines[4].to, province.coordinate_of("Cianjur").unwrap());

        assert_eq!(map.center, Some(Coordinate::new(-6.914744, 107.609810)));
        assert_eq!(map.zoom, 8);
        assert_eq!((map.width, map.height), (700, 500));
    }

    #[test]
    fn drops_connections_with_missing_endpoint() {
        static PROVINCE: Province = Province {
            name: "Test",
            cities: &[
                City {
                    name: "A",
                    coordinate: Coordinate::new(1.0, 2.0),
                },
                City {
                    name: "B",
                    coordinate: Coordinate::new(3.0, 4.0),
                },
            ],
            connections: &[
                Connection("A", "B"),
                Connection("A", "Nowhere"),
                Connection("Nowhere", "B"),
            ],
        };

        let map = render(&PROVINCE, &ViewSettings::default());
        assert_eq!(map.markers.len(), 2);
        assert_eq!(
            map.lines,
            vec![Line {
                from: Coordinate::new(1.0, 2.0),
                to: Coordinate::new(3.0, 4.0),
                color: "green",
                weight: 5,
                opacity: 0.8,
            }]
        );
    }

    #[test]
    fn empty_province_has_no_center() {
        static EMPTY: Province = Province {
            name: "Empty",
            cities: &[],
            connections: &[],
        };

        let map = render(&EMPTY, &ViewSettings::default());
        assert!(map.center.is_none());
        assert!(map.markers.is_empty());
    }
}
