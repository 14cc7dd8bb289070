//! Askama renderers for the map client's panels.
//!
//! Each renderer is a pure function from domain data to an HTML fragment.

mod detail;
mod format;
mod list;
mod page;
mod popup;
mod statistics;

pub use detail::{ConnectorView, DetailPanelTemplate, MetaRow, render_detail};
pub use format::{format_distance, format_kw};
pub use list::{StationItemView, StationListTemplate, render_station_list};
pub use page::{PageTemplate, SelectOption, connector_options, power_options, summary_line};
pub use popup::{StationPopupTemplate, station_popup};
pub use statistics::{StatisticsTemplate, render_statistics};
