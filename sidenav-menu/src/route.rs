use crate::model::MenuGroup;

/// Selects the menu route that best represents the current location.
///
/// Implementations must be deterministic: the same `(path, groups)` pair
/// always yields the same answer, so highlighting stays stable across
/// re-renders that do not change location.
pub trait RouteMatcher {
    fn best_match(&self, path: &str, groups: &[MenuGroup]) -> Option<String>;
}

impl<F> RouteMatcher for F
where
    F: Fn(&str, &[MenuGroup]) -> Option<String>,
{
    fn best_match(&self, path: &str, groups: &[MenuGroup]) -> Option<String> {
        self(path, groups)
    }
}

/// Longest-prefix matcher over every group and sub-group route.
///
/// Candidates are visited in model order (a group before its sub-groups);
/// on equal length the first candidate wins. Footer links never match.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestPrefixMatcher;

impl RouteMatcher for BestPrefixMatcher {
    fn best_match(&self, path: &str, groups: &[MenuGroup]) -> Option<String> {
        let mut best: Option<&str> = None;

        for route in candidate_routes(groups) {
            if !path.starts_with(route) {
                continue;
            }
            if best.is_none_or(|current| route.len() > current.len()) {
                best = Some(route);
            }
        }

        best.map(str::to_owned)
    }
}

fn candidate_routes(groups: &[MenuGroup]) -> impl Iterator<Item = &str> {
    groups.iter().flat_map(|group| {
        group.route.as_deref().into_iter().chain(
            group
                .sub_groups
                .iter()
                .filter_map(|sub| sub.route.as_deref()),
        )
    })
}
