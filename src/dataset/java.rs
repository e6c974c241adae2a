use super::{City, Connection, Coordinate, Province};

macro_rules! city {
    ($name:literal, $lat:literal, $lon:literal) => {
        City {
            name: $name,
            coordinate: Coordinate::new($lat, $lon),
        }
    };
}

#[rustfmt::skip]
pub const JAVA_PROVINCES: &[Province] = &[
    Province {
        name: "West Java",
        cities: &[
            city!("Bandung", -6.914744, 107.609810),
            city!("Cirebon", -6.737246, 108.552315),
            city!("Bekasi", -6.238270, 106.975573),
            city!("Depok", -6.402484, 106.794241),
            city!("Bogor", -6.595038, 106.816635),
            city!("Cianjur", -6.822940, 107.139098),
        ],
        connections: &[
            Connection("Bandung", "Cirebon"),
            Connection("Bandung", "Bekasi"),
            Connection("Bekasi", "Depok"),
            Connection("Depok", "Bogor"),
            Connection("Bogor", "Cianjur"),
        ],
    },
    Province {
        name: "Central Java",
        cities: &[
            city!("Semarang", -6.966667, 110.416664),
            city!("Surakarta", -7.574222, 110.828808),
            city!("Tegal", -6.868710, 109.141247),
            city!("Magelang", -7.470474, 110.217529),
            city!("Purwokerto", -7.424460, 109.239639),
            city!("Cilacap", -7.720533, 109.015301),
        ],
        connections: &[
            Connection("Semarang", "Surakarta"),
            Connection("Semarang", "Tegal"),
            Connection("Surakarta", "Magelang"),
            Connection("Magelang", "Purwokerto"),
            Connection("Purwokerto", "Cilacap"),
        ],
    },
    Province {
        name: "East Java",
        cities: &[
            city!("Surabaya", -7.257472, 112.752090),
            city!("Malang", -7.966620, 112.632629),
            city!("Madiun", -7.629838, 111.523850),
            city!("Kediri", -7.817550, 112.011780),
            city!("Blitar", -8.095905, 112.162762),
            city!("Banyuwangi", -8.219233, 114.369141),
        ],
        connections: &[
            Connection("Surabaya", "Malang"),
            Connection("Surabaya", "Madiun"),
            Connection("Malang", "Kediri"),
            Connection("Kediri", "Blitar"),
            Connection("Blitar", "Banyuwangi"),
        ],
    },
];
