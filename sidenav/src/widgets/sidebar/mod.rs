mod event;
mod model;
mod reducer;
mod state;
pub(crate) mod view;

pub(crate) use event::{SidebarEffect, SidebarEvent, SidebarIntent};
use iced::Task;
pub(crate) use model::{SIDEBAR_PANEL_WIDTH, SIDEBAR_RAIL_WIDTH};
use model::SidebarViewModel;
pub(crate) use reducer::SidebarCtx;
use sidenav_menu::{project, project_header};
use state::SidebarWidgetState;

/// Navigation sidebar owning the single panel state machine.
pub(crate) struct SidebarWidget {
    state: SidebarWidgetState,
}

impl SidebarWidget {
    /// Construct a closed, unpinned sidebar.
    pub(crate) fn new() -> Self {
        Self {
            state: SidebarWidgetState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: SidebarIntent,
    ) -> Task<SidebarEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Project the current state into a view model.
    ///
    /// Called on every render, so the rows always reflect the latest
    /// location, policy and panel state.
    pub(crate) fn vm(&self, ctx: &SidebarCtx<'_>) -> SidebarViewModel {
        let machine = self.state.machine();
        let matched = ctx.matcher.best_match(ctx.location, &ctx.menu.groups);

        SidebarViewModel {
            header: project_header(ctx.menu, machine),
            items: project(ctx.menu, matched.as_deref(), ctx.policy, machine),
            is_visible: machine.is_visible(),
            is_pinned: machine.is_pinned(),
        }
    }
}
