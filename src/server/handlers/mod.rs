pub mod status;
pub use status::status_handler;

pub mod page;
pub use page::page_handler;

pub mod province_list;
pub use province_list::province_list_handler;

pub mod province_get;
pub use province_get::province_get_handler;

pub mod map_render;
pub use map_render::map_render_handler;

pub mod graph_generate;
pub use graph_generate::graph_generate_handler;

pub mod graph_figure;
pub use graph_figure::graph_figure_handler;

pub mod team_list;
pub use team_list::team_list_handler;

// imports used by pretty much every handler
mod common;
