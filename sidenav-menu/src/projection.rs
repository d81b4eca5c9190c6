use crate::model::{MenuGroup, MenuModel};
use crate::policy::ExpansionPolicy;
use crate::state::{SidebarState, Transition};

/// Route the panel title links to.
pub const HOME_ROUTE: &str = "/";

/// Kind of a projected row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Header of a group that owns sub-groups.
    GroupHeader,
    /// Sub-group row nested under a group header.
    SubGroupLeaf,
    /// Group without sub-groups.
    Leaf,
    /// Divider emitted before every leaf group except the first entry.
    Separator,
    /// Footer link.
    Footer,
}

/// Expand/collapse marker drawn on group headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Down-angle.
    Expanded,
    /// Right-angle.
    Collapsed,
}

/// What happens when a row is activated, resolved once at projection time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Change location, then apply the follow-up transition if any.
    Navigate {
        route: String,
        then: Option<Transition>,
    },
    /// Apply a transition without navigating.
    Transition(Transition),
    /// Static label; not interactive.
    Inert,
}

/// One renderable row of the navigation panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderItem {
    pub kind: ItemKind,
    /// Stable render identity derived from group/sub-group names.
    pub key: String,
    pub caption: String,
    pub icon: String,
    pub route: Option<String>,
    /// Row represents the matched route.
    pub current: bool,
    /// Group header is open, or sub-group leaf belongs to an open group.
    pub expanded: bool,
    pub indicator: Option<Indicator>,
    pub activation: Activation,
}

impl RenderItem {
    /// Return whether the row reacts to activation.
    pub fn is_interactive(&self) -> bool {
        !matches!(self.activation, Activation::Inert)
    }
}

/// Control drawn next to the panel title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAffordance {
    /// Hamburger that opens the inactive panel.
    ShowPanel,
    /// Thumbtack shown while active; drawn upright when pinned.
    Pin { pinned: bool },
}

impl HeaderAffordance {
    /// Return the transition requested when the control is pressed.
    pub fn transition(self) -> Transition {
        match self {
            HeaderAffordance::ShowPanel => Transition::Show,
            HeaderAffordance::Pin { .. } => Transition::TogglePinned,
        }
    }
}

/// Panel title row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderItem {
    pub title: String,
    pub route: String,
    pub affordance: HeaderAffordance,
}

/// Project the title row for the given state.
pub fn project_header(model: &MenuModel, state: &SidebarState) -> HeaderItem {
    let affordance = if state.is_active() {
        HeaderAffordance::Pin {
            pinned: state.is_pinned(),
        }
    } else {
        HeaderAffordance::ShowPanel
    };

    HeaderItem {
        title: model.app_title.clone(),
        route: String::from(HOME_ROUTE),
        affordance,
    }
}

/// Project the menu into the ordered list of rows to render.
///
/// Groups keep model order and are never deduplicated. Footer rows follow
/// the groups. `matched_route` highlights by exact string comparison, so a
/// route absent from the model highlights nothing.
pub fn project(
    model: &MenuModel,
    matched_route: Option<&str>,
    policy: ExpansionPolicy,
    state: &SidebarState,
) -> Vec<RenderItem> {
    let mut items = Vec::new();

    for (index, group) in model.groups.iter().enumerate() {
        if group.is_expandable() {
            push_expandable_group(
                &mut items,
                group,
                matched_route,
                policy,
                state,
            );
        } else {
            if index > 0 {
                items.push(separator(group));
            }
            items.push(leaf(group, matched_route));
        }
    }

    for (index, footer) in model.footer_items.iter().enumerate() {
        items.push(RenderItem {
            kind: ItemKind::Footer,
            key: format!("footer:{index}"),
            caption: footer.caption.clone(),
            icon: String::new(),
            route: Some(footer.route.clone()),
            current: false,
            expanded: false,
            indicator: None,
            activation: Activation::Navigate {
                route: footer.route.clone(),
                then: None,
            },
        });
    }

    items
}

fn push_expandable_group(
    items: &mut Vec<RenderItem>,
    group: &MenuGroup,
    matched_route: Option<&str>,
    policy: ExpansionPolicy,
    state: &SidebarState,
) {
    let always = policy == ExpansionPolicy::ExpandAlways;
    let is_expanded =
        always || state.active_group() == Some(group.name.as_str());

    let (indicator, activation) = if always {
        (None, Activation::Inert)
    } else {
        let indicator = if is_expanded {
            Indicator::Expanded
        } else {
            Indicator::Collapsed
        };
        let toggle = Transition::ToggleGroup(group.name.clone());
        (Some(indicator), Activation::Transition(toggle))
    };

    items.push(RenderItem {
        kind: ItemKind::GroupHeader,
        key: format!("group:{}", group.name),
        caption: group.caption.clone(),
        icon: group.icon.clone(),
        route: None,
        current: false,
        expanded: is_expanded,
        indicator,
        activation,
    });

    for sub in &group.sub_groups {
        let activation = match &sub.route {
            Some(route) => Activation::Navigate {
                route: route.clone(),
                then: Some(Transition::Hide),
            },
            None => Activation::Inert,
        };

        items.push(RenderItem {
            kind: ItemKind::SubGroupLeaf,
            key: format!("subgroup:{}/{}", group.name, sub.name),
            caption: sub.caption.clone(),
            icon: String::new(),
            route: sub.route.clone(),
            current: is_current(sub.route.as_deref(), matched_route),
            expanded: is_expanded,
            indicator: None,
            activation,
        });
    }
}

fn separator(group: &MenuGroup) -> RenderItem {
    RenderItem {
        kind: ItemKind::Separator,
        key: format!("separator:{}", group.name),
        caption: String::new(),
        icon: String::new(),
        route: None,
        current: false,
        expanded: false,
        indicator: None,
        activation: Activation::Inert,
    }
}

fn leaf(group: &MenuGroup, matched_route: Option<&str>) -> RenderItem {
    let toggle = Transition::ToggleGroup(group.name.clone());
    let activation = match &group.route {
        Some(route) => Activation::Navigate {
            route: route.clone(),
            then: Some(toggle),
        },
        None => Activation::Transition(toggle),
    };

    RenderItem {
        kind: ItemKind::Leaf,
        key: format!("group:{}", group.name),
        caption: group.caption.clone(),
        icon: group.icon.clone(),
        route: group.route.clone(),
        current: is_current(group.route.as_deref(), matched_route),
        expanded: false,
        indicator: None,
        activation,
    }
}

// A route-less row is never current, even when nothing matched.
fn is_current(route: Option<&str>, matched_route: Option<&str>) -> bool {
    match (route, matched_route) {
        (Some(route), Some(matched)) => route == matched,
        _ => false,
    }
}
