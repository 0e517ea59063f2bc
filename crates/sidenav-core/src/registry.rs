//! Explicit mapping from logical sidebar roles to element handles

use crate::config::SidebarConfig;
use crate::element::{ElementHandle, Page};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Single-element roles the sidebar toggle needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    ToggleControl,
    NavPanel,
    BodyRegion,
    HeaderRegion,
    NavLogoLabel,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::ToggleControl,
        Role::NavPanel,
        Role::BodyRegion,
        Role::HeaderRegion,
        Role::NavLogoLabel,
    ];

    /// Human-readable description of how `config` locates this role
    pub fn lookup(&self, config: &SidebarConfig) -> String {
        match self {
            Role::ToggleControl => format!("id=\"{}\"", config.toggle_id),
            Role::NavPanel => format!("id=\"{}\"", config.nav_id),
            Role::BodyRegion => format!("id=\"{}\"", config.body_id),
            Role::HeaderRegion => format!("id=\"{}\"", config.header_id),
            Role::NavLogoLabel => format!("class=\"{}\"", config.logo_class),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::ToggleControl => "toggle-control",
            Role::NavPanel => "nav-panel",
            Role::BodyRegion => "body-region",
            Role::HeaderRegion => "header-region",
            Role::NavLogoLabel => "nav-logo-label",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::ToggleControl => "Toggle control",
            Role::NavPanel => "Nav panel",
            Role::BodyRegion => "Body region",
            Role::HeaderRegion => "Header region",
            Role::NavLogoLabel => "Nav logo label",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Role::ALL.iter().map(|r| r.as_str()).collect();
                format!("unknown role '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// Elements the controller works on, resolved once at initialization
pub struct ElementRegistry<E> {
    toggle: Option<E>,
    nav: Option<E>,
    body: Option<E>,
    header: Option<E>,
    logo: Option<E>,
    links: Vec<E>,
}

impl<E> Default for ElementRegistry<E> {
    fn default() -> Self {
        Self {
            toggle: None,
            nav: None,
            body: None,
            header: None,
            logo: None,
            links: Vec::new(),
        }
    }
}

impl<E: ElementHandle> ElementRegistry<E> {
    /// Empty registry, to be filled with [`with_role`](Self::with_role)
    pub fn new() -> Self {
        Self::default()
    }

    /// Look every role up on `page`. The links are a snapshot taken now.
    pub fn resolve<P>(page: &P, config: &SidebarConfig) -> Self
    where
        P: Page<Element = E>,
    {
        let nav = page.element_by_id(&config.nav_id);
        let logo = nav
            .as_ref()
            .and_then(|nav| page.query_descendant(nav, &config.logo_class));

        Self {
            toggle: page.element_by_id(&config.toggle_id),
            nav,
            body: page.element_by_id(&config.body_id),
            header: page.element_by_id(&config.header_id),
            logo,
            links: page.elements_by_class(&config.link_class),
        }
    }

    pub fn with_role(mut self, role: Role, element: E) -> Self {
        *self.slot(role) = Some(element);
        self
    }

    pub fn without_role(mut self, role: Role) -> Self {
        *self.slot(role) = None;
        self
    }

    pub fn with_link(mut self, link: E) -> Self {
        self.links.push(link);
        self
    }

    pub fn get(&self, role: Role) -> Option<&E> {
        match role {
            Role::ToggleControl => self.toggle.as_ref(),
            Role::NavPanel => self.nav.as_ref(),
            Role::BodyRegion => self.body.as_ref(),
            Role::HeaderRegion => self.header.as_ref(),
            Role::NavLogoLabel => self.logo.as_ref(),
        }
    }

    pub fn links(&self) -> &[E] {
        &self.links
    }

    /// Roles with no element, in [`Role::ALL`] order
    pub fn missing_roles(&self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| self.get(*role).is_none())
            .collect()
    }

    pub(crate) fn into_parts(self) -> (Option<ToggleRoles<E>>, Vec<E>) {
        let roles = match (self.toggle, self.nav, self.body, self.header, self.logo) {
            (Some(toggle), Some(nav), Some(body), Some(header), Some(logo)) => Some(ToggleRoles {
                toggle,
                nav,
                body,
                header,
                logo,
            }),
            _ => None,
        };
        (roles, self.links)
    }

    fn slot(&mut self, role: Role) -> &mut Option<E> {
        match role {
            Role::ToggleControl => &mut self.toggle,
            Role::NavPanel => &mut self.nav,
            Role::BodyRegion => &mut self.body,
            Role::HeaderRegion => &mut self.header,
            Role::NavLogoLabel => &mut self.logo,
        }
    }
}

/// All five toggle roles, present together
#[derive(Clone)]
pub(crate) struct ToggleRoles<E> {
    pub toggle: E,
    pub nav: E,
    pub body: E,
    pub header: E,
    pub logo: E,
}

impl<E: ElementHandle> ToggleRoles<E> {
    /// First pair of roles bound to the same element, in role order
    pub fn shared_element(&self) -> Option<(Role, Role)> {
        let slots = [
            (Role::ToggleControl, &self.toggle),
            (Role::NavPanel, &self.nav),
            (Role::BodyRegion, &self.body),
            (Role::HeaderRegion, &self.header),
            (Role::NavLogoLabel, &self.logo),
        ];
        slots.iter().enumerate().find_map(|(i, (role, element))| {
            slots[..i]
                .iter()
                .find(|(_, earlier)| earlier.same_element(element))
                .map(|(earlier, _)| (*earlier, *role))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryPage;

    #[test]
    fn test_role_parse_roundtrip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("sidebar".parse::<Role>().is_err());
    }

    #[test]
    fn test_resolve_base_template() {
        let page = MemoryPage::base_template(3);
        let registry = ElementRegistry::resolve(&page, &SidebarConfig::default());

        assert!(registry.missing_roles().is_empty());
        assert_eq!(registry.links().len(), 3);
    }

    #[test]
    fn test_logo_must_be_inside_nav() {
        let page = MemoryPage::new();
        page.add_element(Some("nav-bar"), &[], None);
        // Logo label outside the nav panel does not count
        page.add_element(None, &["nav_logo"], None);

        let registry = ElementRegistry::resolve(&page, &SidebarConfig::default());
        assert!(registry.get(Role::NavPanel).is_some());
        assert!(registry.get(Role::NavLogoLabel).is_none());
    }

    #[test]
    fn test_manual_injection() {
        let page = MemoryPage::new();
        let toggle = page.add_element(Some("t"), &[], None);

        let registry = ElementRegistry::new().with_role(Role::ToggleControl, toggle);
        assert_eq!(
            registry.missing_roles(),
            vec![
                Role::NavPanel,
                Role::BodyRegion,
                Role::HeaderRegion,
                Role::NavLogoLabel
            ]
        );

        let registry = registry.without_role(Role::ToggleControl);
        assert_eq!(registry.missing_roles().len(), 5);
    }

    #[test]
    fn test_lookup_description() {
        let config = SidebarConfig::default();
        assert_eq!(Role::NavPanel.lookup(&config), "id=\"nav-bar\"");
        assert_eq!(Role::NavLogoLabel.lookup(&config), "class=\"nav_logo\"");
    }
}
