//! Full page rendering.
//!
//! The page is assembled from already-rendered fragments so every panel is
//! produced by exactly one renderer.

use askama::Template;

use crate::domain::{ConnectorType, PowerThreshold};

/// Thresholds offered by the power filter control, in kW.
const POWER_CHOICES: [u32; 4] = [7, 22, 50, 150];

/// The map client page.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    /// Last submitted search text.
    pub query: String,
    pub connector_options: Vec<SelectOption>,
    pub power_options: Vec<SelectOption>,
    pub available_only: bool,
    pub statistics_html: Option<String>,
    pub list_html: String,
    /// Present while the detail overlay is open.
    pub detail_html: Option<String>,
    /// Map scene for the Leaflet glue, see [`crate::map::Scene`].
    pub scene_json: String,
    /// Alerts raised since the last render.
    pub alerts: Vec<String>,
    /// e.g. "Showing 3 of 10 stations".
    pub summary: String,
    pub updated_at: Option<String>,
}

/// An `<option>` of a filter control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>, selected: bool) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected,
        }
    }
}

/// Options of the connector-type control.
pub fn connector_options(types: &[ConnectorType], selected: Option<&str>) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", "All connector types", selected.is_none())];
    options.extend(types.iter().map(|t| {
        let label = match &t.description {
            Some(description) => format!("{} ({})", t.name, description),
            None => t.name.clone(),
        };
        SelectOption::new(t.name.clone(), label, selected == Some(t.name.as_str()))
    }));

    // Keep a selection that the types endpoint no longer lists.
    if let Some(current) = selected
        && !types.iter().any(|t| t.name == current)
    {
        options.push(SelectOption::new(current, current, true));
    }
    options
}

/// Options of the minimum-power control.
pub fn power_options(selected: Option<PowerThreshold>) -> Vec<SelectOption> {
    let mut choices: Vec<u32> = POWER_CHOICES.to_vec();
    if let Some(threshold) = selected
        && !choices.contains(&threshold.kw())
    {
        choices.push(threshold.kw());
        choices.sort_unstable();
    }

    let mut options = vec![SelectOption::new("", "Any power", selected.is_none())];
    options.extend(choices.into_iter().map(|kw| {
        SelectOption::new(
            kw.to_string(),
            format!("{kw} kW+"),
            selected.map(|t| t.kw()) == Some(kw),
        )
    }));
    options
}

/// Summary line above the station list.
pub fn summary_line(visible: usize, total: usize) -> String {
    if visible == total {
        format!("{total} stations")
    } else {
        format!("Showing {visible} of {total} stations")
    }
}
