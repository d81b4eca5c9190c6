pub(crate) const MENU_BARS: &[u8] = include_bytes!("../../assets/svg/bars.svg");
pub(crate) const PIN_UPRIGHT: &[u8] =
    include_bytes!("../../assets/svg/thumbtack.svg");
pub(crate) const PIN_SLANTED: &[u8] =
    include_bytes!("../../assets/svg/thumbtack-slanted.svg");
pub(crate) const ANGLE_DOWN: &[u8] =
    include_bytes!("../../assets/svg/angle-down.svg");
pub(crate) const ANGLE_RIGHT: &[u8] =
    include_bytes!("../../assets/svg/angle-right.svg");
const GROUP_HOME: &[u8] = include_bytes!("../../assets/svg/home.svg");
const GROUP_COGS: &[u8] = include_bytes!("../../assets/svg/cogs.svg");
const GROUP_EXCHANGE: &[u8] = include_bytes!("../../assets/svg/exchange.svg");
const GROUP_INFO: &[u8] = include_bytes!("../../assets/svg/info.svg");

/// Resolve a menu group icon reference to a bundled glyph.
pub(crate) fn group_icon(name: &str) -> Option<&'static [u8]> {
    match name {
        "home" => Some(GROUP_HOME),
        "cogs" => Some(GROUP_COGS),
        "exchange" => Some(GROUP_EXCHANGE),
        "info" => Some(GROUP_INFO),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::group_icon;

    #[test]
    fn given_known_and_unknown_icon_names_when_resolved_then_only_known_match()
    {
        assert!(group_icon("home").is_some());
        assert!(group_icon("cogs").is_some());
        assert!(group_icon("rocket").is_none());
        assert!(group_icon("").is_none());
    }
}
