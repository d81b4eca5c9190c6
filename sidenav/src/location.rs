use sidenav_menu::HOME_ROUTE;

/// Current page location of the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Location {
    path: String,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            path: String::from(HOME_ROUTE),
        }
    }
}

impl Location {
    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    /// Move to `route`. Returns whether the location changed.
    pub(crate) fn navigate(&mut self, route: &str) -> bool {
        if self.path == route {
            return false;
        }

        log::debug!("navigate {} -> {route}", self.path);
        self.path = route.to_owned();
        true
    }
}
