//! Navigation panel core for the sidenav console.
//!
//! The crate is UI-agnostic and split into small layers:
//! - [`MenuModel`] describes the navigation tree and is supplied once;
//! - [`SidebarState`] is the pointer/pin/expansion state machine driven by
//!   [`Transition`]s;
//! - [`RouteMatcher`] picks the route representing the current location;
//! - [`project`] turns model, matched route, [`ExpansionPolicy`] and state
//!   into the ordered [`RenderItem`] rows a renderer paints.
//!
//! Projection is pure and cheap, so hosts call it on every render instead of
//! caching derived rows.
//!
//! # Quick Example
//!
//! ```
//! use sidenav_menu::{
//!     Activation, BestPrefixMatcher, ExpansionPolicy, MenuGroup, MenuModel,
//!     MenuSubGroup, RouteMatcher, SidebarState, project,
//! };
//!
//! let model = MenuModel {
//!     app_title: String::from("Console"),
//!     groups: vec![MenuGroup::container(
//!         "builds",
//!         "Builds",
//!         vec![MenuSubGroup::link("builders", "Builders", "/builders")],
//!     )],
//!     footer_items: Vec::new(),
//! };
//! let mut state = SidebarState::new();
//!
//! let matched = BestPrefixMatcher.best_match("/builders/5", &model.groups);
//! let rows = project(
//!     &model,
//!     matched.as_deref(),
//!     ExpansionPolicy::ExpandOnClick,
//!     &state,
//! );
//! assert!(!rows[1].expanded);
//! assert!(rows[1].current);
//!
//! if let Activation::Transition(transition) = &rows[0].activation {
//!     state.apply(transition);
//! }
//! let rows = project(
//!     &model,
//!     matched.as_deref(),
//!     ExpansionPolicy::ExpandOnClick,
//!     &state,
//! );
//! assert!(rows[1].expanded);
//! ```

mod model;
mod policy;
mod projection;
mod route;
mod state;

pub use model::{FooterItem, MenuGroup, MenuModel, MenuSubGroup};
pub use policy::{
    ExpansionPolicy, POLICY_SETTING_CAPTION, POLICY_SETTING_GROUP,
    POLICY_SETTING_KEY, POLICY_SETTING_NAME, PolicyParseError,
};
pub use projection::{
    Activation, HOME_ROUTE, HeaderAffordance, HeaderItem, Indicator,
    ItemKind, RenderItem, project, project_header,
};
pub use route::{BestPrefixMatcher, RouteMatcher};
pub use state::{SidebarState, Transition};
