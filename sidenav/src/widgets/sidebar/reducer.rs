use iced::Task;
use sidenav_menu::{
    Activation, ExpansionPolicy, HOME_ROUTE, MenuModel, RouteMatcher,
    Transition,
};

use super::event::{SidebarEffect, SidebarEvent, SidebarIntent};
use super::state::SidebarWidgetState;

/// Read-only context used to project the sidebar.
pub(crate) struct SidebarCtx<'a> {
    pub(crate) menu: &'a MenuModel,
    pub(crate) location: &'a str,
    pub(crate) policy: ExpansionPolicy,
    pub(crate) matcher: &'a dyn RouteMatcher,
}

/// Reduce a sidebar intent into state transitions and effect events.
pub(crate) fn reduce(
    state: &mut SidebarWidgetState,
    event: SidebarIntent,
) -> Task<SidebarEvent> {
    match event {
        SidebarIntent::PointerEntered => {
            state.set_pointer_inside(true);
            state.apply(&Transition::Enter);
            Task::none()
        },
        SidebarIntent::PointerExited => {
            state.set_pointer_inside(false);
            state.apply(&Transition::Leave);
            Task::none()
        },
        SidebarIntent::ZonePressed => {
            state.apply(&Transition::Show);
            Task::none()
        },
        SidebarIntent::EnterKeyPressed => {
            if state.is_pointer_inside() {
                state.apply(&Transition::Show);
            }
            Task::none()
        },
        SidebarIntent::Apply(transition) => {
            state.apply(&transition);
            Task::none()
        },
        SidebarIntent::Activate(activation) => activate(state, activation),
        SidebarIntent::TitlePressed => navigate(String::from(HOME_ROUTE)),
    }
}

fn activate(
    state: &mut SidebarWidgetState,
    activation: Activation,
) -> Task<SidebarEvent> {
    match activation {
        Activation::Navigate { route, then } => {
            if let Some(transition) = then {
                state.apply(&transition);
            }
            navigate(route)
        },
        Activation::Transition(transition) => {
            state.apply(&transition);
            Task::none()
        },
        Activation::Inert => Task::none(),
    }
}

fn navigate(route: String) -> Task<SidebarEvent> {
    Task::done(SidebarEvent::Effect(SidebarEffect::Navigate { route }))
}

#[cfg(test)]
mod tests {
    use sidenav_menu::{
        Activation, BestPrefixMatcher, ExpansionPolicy, HeaderAffordance,
        ItemKind, MenuGroup, MenuModel, MenuSubGroup, Transition,
    };

    use super::SidebarCtx;
    use crate::widgets::sidebar::{SidebarIntent, SidebarWidget};

    fn menu() -> MenuModel {
        MenuModel {
            app_title: String::from("Buildbot"),
            groups: vec![
                MenuGroup::link("home", "Home", "/"),
                MenuGroup::container(
                    "builds",
                    "Builds",
                    vec![
                        MenuSubGroup::link("builders", "Builders", "/builders"),
                        MenuSubGroup::link("workers", "Workers", "/workers"),
                    ],
                ),
            ],
            footer_items: Vec::new(),
        }
    }

    fn ctx<'a>(menu: &'a MenuModel, location: &'a str) -> SidebarCtx<'a> {
        SidebarCtx {
            menu,
            location,
            policy: ExpansionPolicy::ExpandOnClick,
            matcher: &BestPrefixMatcher,
        }
    }

    #[test]
    fn given_pointer_enter_and_exit_when_reduced_then_panel_opens_and_closes()
    {
        let menu = menu();
        let mut widget = SidebarWidget::new();

        let _task = widget.reduce(SidebarIntent::PointerEntered);
        assert!(widget.vm(&ctx(&menu, "/")).is_visible);

        let _task = widget.reduce(SidebarIntent::PointerExited);
        assert!(!widget.vm(&ctx(&menu, "/")).is_visible);
    }

    #[test]
    fn given_pinned_panel_when_pointer_exits_then_panel_stays_open() {
        let menu = menu();
        let mut widget = SidebarWidget::new();

        let _task = widget.reduce(SidebarIntent::PointerEntered);
        let _task =
            widget.reduce(SidebarIntent::Apply(Transition::TogglePinned));
        let _task = widget.reduce(SidebarIntent::PointerExited);

        let vm = widget.vm(&ctx(&menu, "/"));
        assert!(vm.is_visible);
        assert!(vm.is_pinned);
        assert_eq!(
            vm.header.affordance,
            HeaderAffordance::Pin { pinned: true }
        );
    }

    #[test]
    fn given_pointer_outside_when_enter_key_pressed_then_panel_stays_closed() {
        let menu = menu();
        let mut widget = SidebarWidget::new();

        let _task = widget.reduce(SidebarIntent::EnterKeyPressed);

        assert!(!widget.vm(&ctx(&menu, "/")).is_visible);
    }

    #[test]
    fn given_pointer_inside_hidden_panel_when_enter_key_pressed_then_panel_shows()
     {
        let menu = menu();
        let mut widget = SidebarWidget::new();
        let _task = widget.reduce(SidebarIntent::PointerEntered);
        let _task = widget.reduce(SidebarIntent::Apply(Transition::Hide));
        assert!(!widget.vm(&ctx(&menu, "/")).is_visible);

        let _task = widget.reduce(SidebarIntent::EnterKeyPressed);

        assert!(widget.vm(&ctx(&menu, "/")).is_visible);
    }

    #[test]
    fn given_zone_collapsed_away_from_pointer_when_enter_key_pressed_then_panel_stays_closed()
     {
        let menu = menu();
        let mut widget = SidebarWidget::new();
        let _task = widget.reduce(SidebarIntent::PointerEntered);
        let _task = widget.reduce(SidebarIntent::Activate(Activation::Navigate {
            route: String::from("/builders"),
            then: Some(Transition::Hide),
        }));
        let _task = widget.reduce(SidebarIntent::PointerExited);

        let _task = widget.reduce(SidebarIntent::EnterKeyPressed);

        assert!(!widget.vm(&ctx(&menu, "/builders")).is_visible);
    }

    #[test]
    fn given_group_header_activation_when_reduced_then_sub_groups_expand() {
        let menu = menu();
        let mut widget = SidebarWidget::new();
        let _task = widget.reduce(SidebarIntent::PointerEntered);
        let header = widget
            .vm(&ctx(&menu, "/builders"))
            .items
            .into_iter()
            .find(|item| item.kind == ItemKind::GroupHeader)
            .expect("builds header should be projected");

        let _task = widget.reduce(SidebarIntent::Activate(header.activation));

        let vm = widget.vm(&ctx(&menu, "/builders"));
        let builders = vm
            .items
            .iter()
            .find(|item| item.key == "subgroup:builds/builders")
            .expect("builders row should be projected");
        assert!(builders.expanded);
        assert!(builders.current);
        assert_eq!(vm.current_caption(), Some("Builders"));
    }

    #[test]
    fn given_sub_group_link_activation_when_reduced_then_panel_hides() {
        let mut widget = SidebarWidget::new();
        let _task = widget.reduce(SidebarIntent::PointerEntered);

        let _task = widget.reduce(SidebarIntent::Activate(Activation::Navigate {
            route: String::from("/workers"),
            then: Some(Transition::Hide),
        }));

        let menu = menu();
        assert!(!widget.vm(&ctx(&menu, "/workers")).is_visible);
    }

    #[test]
    fn given_inert_activation_when_reduced_then_state_is_unchanged() {
        let menu = menu();
        let mut widget = SidebarWidget::new();
        let _task = widget.reduce(SidebarIntent::PointerEntered);
        let before = widget.vm(&ctx(&menu, "/")).items;

        let _task = widget.reduce(SidebarIntent::Activate(Activation::Inert));

        assert_eq!(widget.vm(&ctx(&menu, "/")).items, before);
    }
}
