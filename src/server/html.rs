//! HTML documents for the page views. Maps are drawn client side with
//! Leaflet from the embedded render instructions; graph figures arrive as
//! inline SVG.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use strum::IntoEnumIterator;

use crate::views::{
    graph::{GraphPage, GraphViewError},
    map::{MapPage, MapRender},
    team::TeamRender,
    Page, PageView,
};

pub const MAP_TITLE: &str = "City Connections in Java Provinces on Map";
pub const MAP_PROMPT: &str = "Select a province to view the city connections on an interactive map.";

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

pub fn render_page(view: &PageView) -> Result<String, serde_json::Error> {
    let body = match view {
        PageView::Map(page) => map_body(page)?,
        PageView::Graph(page) => graph_body(page),
        PageView::Team(team) => team_body(team),
    };

    Ok(document(view.page(), &body))
}

fn document(active: Page, body: &str) -> String {
    let mut nav = String::new();
    for page in Page::iter() {
        let class = if page == active { " class=\"active\"" } else { "" };
        // writing into a String cannot fail
        let _ = write!(
            nav,
            "<a href=\"/?page={}\"{class}>{}</a>",
            page.key(),
            text(page.title())
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<link rel="stylesheet" href="{LEAFLET_CSS}">
<link rel="stylesheet" href="/style.css">
</head>
<body>
<nav>{nav}</nav>
<main>
{body}
</main>
</body>
</html>
"#,
        title = text(active.title()),
    )
}

/// JSON for embedding inside a `<script>` element.
fn script_json<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn map_body(page: &MapPage) -> Result<String, serde_json::Error> {
    let selected = page.render.as_ref().map(|r| r.province);

    let mut options = String::new();
    for name in &page.provinces {
        let marker = if Some(*name) == selected { " selected" } else { "" };
        let _ = write!(
            options,
            "<option value=\"{}\"{marker}>{}</option>",
            attr(name),
            text(name)
        );
    }

    let map = match &page.render {
        Some(render) => map_embed(render)?,
        None => String::from("<p class=\"error\">No provinces available.</p>"),
    };

    Ok(format!(
        r#"<h1>{MAP_TITLE}</h1>
<p>{MAP_PROMPT}</p>
<form method="get" action="/">
<input type="hidden" name="page" value="map">
<label>Choose a Province: <select name="province" onchange="this.form.submit()">{options}</select></label>
<noscript><button type="submit">Show</button></noscript>
</form>
{map}"#
    ))
}

fn map_embed(render: &MapRender) -> Result<String, serde_json::Error> {
    Ok(format!(
        r#"<div id="map" style="width: {width}px; height: {height}px"></div>
<script src="{LEAFLET_JS}"></script>
<script>
const render = {json};
const map = L.map("map");
if (render.center) {{
  map.setView([render.center.lat, render.center.lon], render.zoom);
}} else {{
  map.fitWorld();
}}
L.tileLayer("https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png", {{
  attribution: "&copy; OpenStreetMap contributors"
}}).addTo(map);
for (const m of render.markers) {{
  L.marker([m.coordinate.lat, m.coordinate.lon]).bindPopup(m.label).bindTooltip(m.tooltip).addTo(map);
}}
for (const l of render.lines) {{
  L.polyline([[l.from.lat, l.from.lon], [l.to.lat, l.to.lon]],
    {{color: l.color, weight: l.weight, opacity: l.opacity}}).addTo(map);
}}
</script>"#,
        width = render.width,
        height = render.height,
        json = script_json(render)?,
    ))
}

fn graph_body(page: &GraphPage) -> String {
    let outcome = match &page.outcome {
        None => String::new(),
        Some(Ok(render)) => format!(
            "<p>Generated graph with {} nodes and {} edges.</p>\n<figure>{}</figure>",
            render.graph.num_nodes,
            render.graph.num_edges(),
            render.figure_svg
        ),
        Some(Err(GraphViewError::InvalidInput(err))) => {
            format!("<p class=\"error\">Invalid input: {}</p>", text(&err.to_string()))
        }
        Some(Err(err)) => format!("<p class=\"error\">{}</p>", text(&err.to_string())),
    };

    format!(
        r#"<h1>Random Graph Generator</h1>
<form method="get" action="/">
<input type="hidden" name="page" value="graph">
<label>Number of nodes <input type="number" id="nodes" name="nodes" min="2" max="{max_nodes}" step="1" value="{nodes}"></label>
<label>Number of edges <input type="number" id="edges" name="edges" min="1" max="{max_edges}" step="1" value="{edges}"></label>
<button type="submit" name="generate" value="1">Generate graph</button>
</form>
<script>
document.getElementById("nodes").addEventListener("input", (e) => {{
  const n = Number(e.target.value);
  document.getElementById("edges").max = Math.max(1, n * (n - 1) / 2);
}});
</script>
{outcome}"#,
        max_nodes = page.max_nodes,
        max_edges = page.max_edges().max(1),
        nodes = page.request.nodes,
        edges = page.request.edges,
    )
}

fn team_body(team: &TeamRender) -> String {
    let mut items = String::new();
    for name in team.members {
        let _ = write!(items, "<li>{}</li>", text(name));
    }

    format!("<h1>Team</h1>\n<ol>{items}</ol>")
}
