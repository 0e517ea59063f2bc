//! Click-script simulation against the in-memory base template

use anyhow::{bail, Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use serde::Serialize;
use sidenav_core::{
    ElementHandle, InitReport, MemoryElement, MemoryPage, Page, Role, SidebarConfig,
    SidebarController, SidebarError, NAV_LIST_CLASS,
};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// One scripted interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Click the toggle control
    Toggle,
    /// Click link `i` (0-based, document order)
    Link(usize),
    /// Append a nav link without registering it
    AddLink,
    /// Register link `i` with the controller
    Register(usize),
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_index = |value: &str| {
            value
                .parse::<usize>()
                .map_err(|_| format!("invalid link index '{}' in step '{}'", value, s))
        };

        match s.split_once(':') {
            None if s == "toggle" => Ok(Step::Toggle),
            None if s == "add-link" => Ok(Step::AddLink),
            Some(("link", index)) => parse_index(index).map(Step::Link),
            Some(("register", index)) => parse_index(index).map(Step::Register),
            _ => Err(format!(
                "unknown step '{}' (expected toggle, link:<i>, add-link, register:<i>)",
                s
            )),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Toggle => write!(f, "toggle"),
            Step::Link(i) => write!(f, "link:{}", i),
            Step::AddLink => write!(f, "add-link"),
            Step::Register(i) => write!(f, "register:{}", i),
        }
    }
}

/// Marker state after one step. `None` means the element is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub step: String,
    pub nav_shown: Option<bool>,
    pub toggle_icon: Option<bool>,
    pub body_padded: Option<bool>,
    pub header_padded: Option<bool>,
    pub logo_hidden: Option<bool>,
    pub active_links: Vec<usize>,
}

/// A page, its controller, and the init report
pub struct Simulation {
    config: SidebarConfig,
    page: MemoryPage,
    controller: SidebarController<MemoryElement>,
    report: InitReport,
}

impl Simulation {
    pub fn new(config: SidebarConfig, links: usize, without: &[Role]) -> Self {
        let page = MemoryPage::template(&config, links, without);
        let (controller, report) = SidebarController::initialize(&page, config.clone());
        Self {
            config,
            page,
            controller,
            report,
        }
    }

    pub fn report(&self) -> &InitReport {
        &self.report
    }

    pub fn apply(&self, step: Step) -> Result<(), SidebarError> {
        debug!(%step, "Applying step");
        match step {
            Step::Toggle => {
                if let Some(toggle) = self.page.element_by_id(&self.config.toggle_id) {
                    toggle.click();
                }
            }
            Step::Link(index) => self.link(index)?.click(),
            Step::AddLink => {
                let list = self.page.elements_by_class(NAV_LIST_CLASS).into_iter().next();
                self.page
                    .add_tagged("a", None, &[self.config.link_class.as_str()], list.as_ref());
            }
            Step::Register(index) => {
                let link = self.link(index)?;
                self.controller.register_link(link);
            }
        }
        Ok(())
    }

    pub fn snapshot(&self, step: &str) -> Snapshot {
        let classes = &self.config.classes;
        let marker = |role: Role, class: &str| self.element(role).map(|e| e.has_class(class));

        Snapshot {
            step: step.to_string(),
            nav_shown: marker(Role::NavPanel, &classes.show),
            toggle_icon: marker(Role::ToggleControl, &classes.toggle_icon),
            body_padded: marker(Role::BodyRegion, &classes.body_padding),
            header_padded: marker(Role::HeaderRegion, &classes.header_padding),
            logo_hidden: marker(Role::NavLogoLabel, &classes.logo_hidden),
            active_links: self
                .page
                .elements_by_class(&self.config.link_class)
                .iter()
                .enumerate()
                .filter(|(_, link)| link.has_class(&classes.active))
                .map(|(i, _)| i)
                .collect(),
        }
    }

    /// Apply every step, returning the initial snapshot followed by one per step
    pub fn run(&self, steps: &[Step]) -> Result<Vec<Snapshot>, SidebarError> {
        let mut snapshots = vec![self.snapshot("init")];
        for step in steps {
            self.apply(*step)?;
            snapshots.push(self.snapshot(&step.to_string()));
        }
        Ok(snapshots)
    }

    fn link(&self, index: usize) -> Result<MemoryElement, SidebarError> {
        self.page
            .elements_by_class(&self.config.link_class)
            .get(index)
            .cloned()
            .ok_or(SidebarError::UnknownLink { index })
    }

    fn element(&self, role: Role) -> Option<MemoryElement> {
        match role {
            Role::ToggleControl => self.page.element_by_id(&self.config.toggle_id),
            Role::NavPanel => self.page.element_by_id(&self.config.nav_id),
            Role::BodyRegion => self.page.element_by_id(&self.config.body_id),
            Role::HeaderRegion => self.page.element_by_id(&self.config.header_id),
            Role::NavLogoLabel => self
                .page
                .elements_by_class(&self.config.logo_class)
                .into_iter()
                .next(),
        }
    }
}

/// Load a JSON config file, or the defaults when no path is given
pub fn load_config(path: Option<&Path>) -> Result<SidebarConfig> {
    let Some(path) = path else {
        return Ok(SidebarConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    SidebarConfig::from_json(&content)
        .with_context(|| format!("Invalid config {}", path.display()))
}

pub fn parse_steps(raw: &[String]) -> Result<Vec<Step>> {
    let mut steps = Vec::with_capacity(raw.len());
    for s in raw {
        match s.parse::<Step>() {
            Ok(step) => steps.push(step),
            Err(message) => bail!(message),
        }
    }
    Ok(steps)
}

fn marker_cell(value: Option<bool>, no_color: bool) -> Cell {
    let (text, color) = match value {
        Some(true) => ("on", Color::Green),
        Some(false) => ("off", Color::DarkGrey),
        None => ("-", Color::Red),
    };
    if no_color {
        Cell::new(text)
    } else {
        Cell::new(text).fg(color)
    }
}

pub fn render_table(snapshots: &[Snapshot], no_color: bool) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let headers = [
        "Step",
        "Nav shown",
        "Toggle icon",
        "Body pad",
        "Header pad",
        "Logo hidden",
        "Active",
    ];
    if no_color {
        table.set_header(headers.to_vec());
    } else {
        table.set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
    }

    for snap in snapshots {
        let active = if snap.active_links.is_empty() {
            "-".to_string()
        } else {
            snap.active_links
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(",")
        };
        table.add_row(vec![
            Cell::new(&snap.step),
            marker_cell(snap.nav_shown, no_color),
            marker_cell(snap.toggle_icon, no_color),
            marker_cell(snap.body_padded, no_color),
            marker_cell(snap.header_padded, no_color),
            marker_cell(snap.logo_hidden, no_color),
            Cell::new(active),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_step_parse() {
        assert_eq!("toggle".parse::<Step>().unwrap(), Step::Toggle);
        assert_eq!("link:2".parse::<Step>().unwrap(), Step::Link(2));
        assert_eq!("add-link".parse::<Step>().unwrap(), Step::AddLink);
        assert_eq!("register:3".parse::<Step>().unwrap(), Step::Register(3));
        assert!("link:x".parse::<Step>().is_err());
        assert!("click".parse::<Step>().is_err());
        assert_eq!(Step::Register(3).to_string(), "register:3");
    }

    #[test]
    fn test_run_toggle_twice() {
        let sim = Simulation::new(SidebarConfig::default(), 3, &[]);
        let snaps = sim.run(&[Step::Toggle, Step::Toggle]).unwrap();

        assert_eq!(snaps.len(), 3);
        assert_eq!(snaps[1].nav_shown, Some(true));
        assert_eq!(snaps[1].logo_hidden, Some(false));
        assert_eq!(snaps[2], Snapshot { step: "toggle".to_string(), ..snaps[0].clone() });
    }

    #[test]
    fn test_missing_role_leaves_markers_untouched() {
        let sim = Simulation::new(SidebarConfig::default(), 1, &[Role::HeaderRegion]);
        assert!(!sim.report().toggle_bound);

        let snaps = sim.run(&[Step::Toggle]).unwrap();
        assert_eq!(snaps[1].header_padded, None);
        assert_eq!(snaps[1].nav_shown, Some(false));
        assert_eq!(snaps[1].toggle_icon, Some(false));
    }

    #[test]
    fn test_late_link_needs_registration() {
        let sim = Simulation::new(SidebarConfig::default(), 2, &[]);
        let snaps = sim
            .run(&[Step::AddLink, Step::Link(2), Step::Register(2), Step::Link(2)])
            .unwrap();

        assert_eq!(snaps[2].active_links, vec![0]);
        assert_eq!(snaps[4].active_links, vec![2]);
    }

    #[test]
    fn test_added_link_lands_in_nav_list() {
        let sim = Simulation::new(SidebarConfig::default(), 0, &[]);
        sim.run(&[Step::AddLink]).unwrap();

        let list = sim.page.elements_by_class(NAV_LIST_CLASS)[0].clone();
        let added = sim.page.query_descendant(&list, "nav_link").unwrap();
        assert_eq!(added.tag(), "a");
        assert!(!sim.controller.links().contains(&added));
    }

    #[test]
    fn test_unknown_link_index() {
        let sim = Simulation::new(SidebarConfig::default(), 2, &[]);
        let err = sim.run(&[Step::Link(5)]).unwrap_err();
        assert!(matches!(err, SidebarError::UnknownLink { index: 5 }));
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"classes": {{"active": "current"}}}}"#).unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.classes.active, "current");
        assert_eq!(config.nav_id, "nav-bar");

        assert_eq!(load_config(None).unwrap(), SidebarConfig::default());
    }

    #[test]
    fn test_load_config_rejects_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"link_class": "nav link"}}"#).unwrap();
        assert!(load_config(Some(file.path())).is_err());
    }

    #[test]
    fn test_render_table_rows() {
        let sim = Simulation::new(SidebarConfig::default(), 1, &[Role::NavLogoLabel]);
        let snaps = sim.run(&[Step::Toggle]).unwrap();
        let rendered = render_table(&snaps, true).to_string();

        assert!(rendered.contains("init"));
        assert!(rendered.contains("toggle"));
        assert!(rendered.contains("Logo hidden"));
    }
}
