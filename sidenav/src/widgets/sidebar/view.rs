use iced::widget::button::Status as ButtonStatus;
use iced::widget::{
    Column, Row, Space, button, column, container, mouse_area, row,
    scrollable, svg, text,
};
use iced::{Border, Color, Element, Length, Theme, alignment};
use sidenav_menu::{
    HeaderAffordance, HeaderItem, Indicator, ItemKind, RenderItem,
};

use super::event::SidebarIntent;
use super::model::{SIDEBAR_PANEL_WIDTH, SIDEBAR_RAIL_WIDTH, SidebarViewModel};
use crate::icons;
use crate::theme::{AppTheme, IcedColorPalette};

const HEADER_HEIGHT: f32 = 48.0;
const HEADER_PADDING_X: f32 = 12.0;
const TITLE_FONT_SIZE: f32 = 16.0;
const CAPTION_FONT_SIZE: f32 = 11.0;
const CAPTION_PADDING: [f32; 2] = [8.0, 12.0];

const ROW_HEIGHT: f32 = 32.0;
const ROW_FONT_SIZE: f32 = 13.0;
const ROW_PADDING_X: f32 = 12.0;
const ROW_SPACING: f32 = 8.0;
const SUB_ROW_HEIGHT: f32 = 28.0;
const SUB_ROW_INDENT: f32 = 36.0;
const FOOTER_FONT_SIZE: f32 = 12.0;

const ICON_SIZE: f32 = 16.0;
const INDICATOR_SIZE: f32 = 12.0;
const CONTROL_SIZE: f32 = 32.0;
const CURRENT_BORDER_WIDTH: f32 = 3.0;
const SEPARATOR_HEIGHT: f32 = 1.0;

/// Props for the sidebar view.
pub(crate) struct SidebarProps<'a> {
    pub(crate) vm: SidebarViewModel,
    pub(crate) theme: &'a AppTheme,
}

/// Render the collapsed rail or the open navigation panel.
///
/// The whole zone reports pointer enter/exit and uncaptured presses.
pub(crate) fn view(
    props: SidebarProps<'_>,
) -> Element<'_, SidebarIntent, Theme, iced::Renderer> {
    let palette = *props.theme.iced_palette();

    let content = if props.vm.is_visible {
        panel(props.vm, palette)
    } else {
        rail(palette)
    };

    mouse_area(content)
        .on_enter(SidebarIntent::PointerEntered)
        .on_exit(SidebarIntent::PointerExited)
        .on_press(SidebarIntent::ZonePressed)
        .into()
}

fn rail<'a>(
    palette: IcedColorPalette,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let hamburger = icon_button(
        icons::MENU_BARS,
        palette.dim_foreground,
        palette.accent,
        SidebarIntent::Apply(HeaderAffordance::ShowPanel.transition()),
    );

    container(
        column![hamburger]
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .padding([8.0, 0.0])
    .width(Length::Fixed(SIDEBAR_RAIL_WIDTH))
    .height(Length::Fill)
    .style(move |_| container::Style {
        background: Some(palette.rail.into()),
        ..Default::default()
    })
    .into()
}

fn panel<'a>(
    vm: SidebarViewModel,
    palette: IcedColorPalette,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let header = header_row(vm.header, palette);
    let caption = container(
        text("NAVIGATION")
            .size(CAPTION_FONT_SIZE)
            .color(palette.dim_foreground),
    )
    .padding(CAPTION_PADDING);

    let mut rows = Column::new().width(Length::Fill);
    let mut footer = Column::new().width(Length::Fill);
    for item in vm.items {
        match item.kind {
            ItemKind::Footer => footer = footer.push(footer_row(item, palette)),
            ItemKind::SubGroupLeaf if !item.expanded => {},
            _ => rows = rows.push(menu_row(item, palette)),
        }
    }

    let menu = scrollable(rows).width(Length::Fill).height(Length::Fill);

    container(
        column![header, caption, menu, footer]
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fixed(SIDEBAR_PANEL_WIDTH))
    .height(Length::Fill)
    .style(move |_| container::Style {
        background: Some(palette.panel.into()),
        ..Default::default()
    })
    .into()
}

fn header_row<'a>(
    header: HeaderItem,
    palette: IcedColorPalette,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let title = button(
        text(header.title)
            .size(TITLE_FONT_SIZE)
            .color(palette.foreground),
    )
    .on_press(SidebarIntent::TitlePressed)
    .padding(0)
    .style(|_, _| transparent_button());

    let control_icon = match header.affordance {
        HeaderAffordance::ShowPanel => icons::MENU_BARS,
        HeaderAffordance::Pin { pinned: true } => icons::PIN_UPRIGHT,
        HeaderAffordance::Pin { pinned: false } => icons::PIN_SLANTED,
    };
    let control_color = match header.affordance {
        HeaderAffordance::Pin { pinned: true } => palette.accent,
        _ => palette.dim_foreground,
    };
    let control = icon_button(
        control_icon,
        control_color,
        palette.accent,
        SidebarIntent::Apply(header.affordance.transition()),
    );

    container(
        row![title, Space::new().width(Length::Fill), control]
            .align_y(alignment::Vertical::Center),
    )
    .padding([0.0, HEADER_PADDING_X])
    .width(Length::Fill)
    .height(Length::Fixed(HEADER_HEIGHT))
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(palette.rail.into()),
        ..Default::default()
    })
    .into()
}

fn menu_row<'a>(
    item: RenderItem,
    palette: IcedColorPalette,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    if item.kind == ItemKind::Separator {
        return container(Space::new())
            .width(Length::Fill)
            .height(Length::Fixed(SEPARATOR_HEIGHT))
            .style(move |_| container::Style {
                background: Some(palette.separator.into()),
                ..Default::default()
            })
            .into();
    }

    let interactive = item.is_interactive();
    let is_sub_row = item.kind == ItemKind::SubGroupLeaf;
    let text_color = if item.current {
        palette.accent
    } else if is_sub_row && item.route.is_none() {
        palette.dim_foreground
    } else {
        palette.foreground
    };

    let mut content = Row::new().spacing(ROW_SPACING).width(Length::Fill);
    if is_sub_row {
        content = content.push(Space::new().width(Length::Fixed(
            SUB_ROW_INDENT - ROW_PADDING_X,
        )));
    } else if let Some(glyph) = icons::group_icon(&item.icon) {
        content = content.push(glyph_svg(glyph, ICON_SIZE, text_color));
    }
    content = content
        .push(text(item.caption).size(ROW_FONT_SIZE).color(text_color))
        .push(Space::new().width(Length::Fill));
    if let Some(indicator) = item.indicator {
        let glyph = match indicator {
            Indicator::Expanded => icons::ANGLE_DOWN,
            Indicator::Collapsed => icons::ANGLE_RIGHT,
        };
        content = content.push(glyph_svg(
            glyph,
            INDICATOR_SIZE,
            palette.dim_foreground,
        ));
    }

    let border_color = if item.current {
        palette.accent
    } else {
        Color::TRANSPARENT
    };
    let border_strip = container(Space::new())
        .width(Length::Fixed(CURRENT_BORDER_WIDTH))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(border_color.into()),
            ..Default::default()
        });

    let on_press = interactive.then(|| SidebarIntent::Activate(item.activation));
    let height = if is_sub_row { SUB_ROW_HEIGHT } else { ROW_HEIGHT };
    let body = container(content.align_y(alignment::Vertical::Center))
        .padding([0.0, ROW_PADDING_X])
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    button(row![border_strip, body].height(Length::Fill))
        .on_press_maybe(on_press)
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .style(move |_, status| row_style(palette, status, interactive))
        .into()
}

fn footer_row<'a>(
    item: RenderItem,
    palette: IcedColorPalette,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    button(
        text(item.caption)
            .size(FOOTER_FONT_SIZE)
            .color(palette.dim_foreground),
    )
    .on_press(SidebarIntent::Activate(item.activation))
    .padding([6.0, ROW_PADDING_X])
    .width(Length::Fill)
    .style(move |_, status| row_style(palette, status, true))
    .into()
}

fn icon_button<'a>(
    icon: &'static [u8],
    base_color: Color,
    hover_color: Color,
    on_press: SidebarIntent,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    let icon_svg = svg::Svg::new(svg::Handle::from_memory(icon))
        .width(Length::Fixed(ICON_SIZE))
        .height(Length::Fixed(ICON_SIZE))
        .style(move |_, status| {
            let color = if status == svg::Status::Hovered {
                hover_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    button(
        container(icon_svg)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(on_press)
    .padding(0)
    .width(Length::Fixed(CONTROL_SIZE))
    .height(Length::Fixed(CONTROL_SIZE))
    .style(|_, _| transparent_button())
    .into()
}

fn glyph_svg<'a>(
    glyph: &'static [u8],
    size: f32,
    color: Color,
) -> Element<'a, SidebarIntent, Theme, iced::Renderer> {
    svg::Svg::new(svg::Handle::from_memory(glyph))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_, _| svg::Style { color: Some(color) })
        .into()
}

fn row_style(
    palette: IcedColorPalette,
    status: ButtonStatus,
    interactive: bool,
) -> button::Style {
    let background = match status {
        ButtonStatus::Hovered | ButtonStatus::Pressed if interactive => {
            Some(palette.hover.into())
        },
        _ => None,
    };

    button::Style {
        background,
        border: Border::default(),
        ..Default::default()
    }
}

fn transparent_button() -> button::Style {
    button::Style {
        background: None,
        border: Border::default(),
        ..Default::default()
    }
}
