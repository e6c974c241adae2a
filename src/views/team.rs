use serde::Serialize;

pub const TEAM_MEMBERS: &[&str] = &[
    "Andi Pratama",
    "Bella Kusuma",
    "Dimas Saputra",
    "Fitri Handayani",
    "Rizky Maulana",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRender {
    pub members: &'static [&'static str],
}

pub fn render() -> TeamRender {
    TeamRender {
        members: TEAM_MEMBERS,
    }
}
