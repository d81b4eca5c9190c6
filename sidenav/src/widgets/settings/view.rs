use iced::widget::{Column, column, container, pick_list, row, text};
use iced::{Element, Length, Theme, alignment};

use super::event::SettingsIntent;
use super::model::SettingsViewModel;
use crate::theme::AppTheme;

const PAGE_PADDING: f32 = 24.0;
const SECTION_SPACING: f32 = 16.0;
const ROW_SPACING: f32 = 12.0;
const TITLE_FONT_SIZE: f32 = 20.0;
const LABEL_FONT_SIZE: f32 = 13.0;
const LABEL_WIDTH: f32 = 320.0;
const STATUS_FONT_SIZE: f32 = 12.0;

/// Props for the settings page view.
pub(crate) struct SettingsProps<'a> {
    pub(crate) vm: SettingsViewModel<'a>,
    pub(crate) theme: &'a AppTheme,
}

/// Render one pick list per registered choice setting.
pub(crate) fn view(
    props: SettingsProps<'_>,
) -> Element<'_, SettingsIntent, Theme, iced::Renderer> {
    let palette = *props.theme.iced_palette();

    let mut rows = Column::new().spacing(ROW_SPACING);
    let mut current_group: Option<&str> = None;
    for entry in props.vm.entries {
        if current_group != Some(entry.group) {
            current_group = Some(entry.group);
            rows = rows.push(
                text(entry.group)
                    .size(LABEL_FONT_SIZE)
                    .color(palette.dim_foreground),
            );
        }

        let key = entry.key;
        let picker = pick_list(
            entry.choices.to_vec(),
            Some(entry.value.to_owned()),
            move |value| SettingsIntent::ChoiceSelected {
                key: key.clone(),
                value,
            },
        );

        rows = rows.push(
            row![
                text(entry.caption)
                    .size(LABEL_FONT_SIZE)
                    .width(Length::Fixed(LABEL_WIDTH)),
                picker,
            ]
            .spacing(ROW_SPACING)
            .align_y(alignment::Vertical::Center),
        );
    }

    let status = if let Some(message) = props.vm.last_error {
        text(message).size(STATUS_FONT_SIZE).color(palette.red)
    } else if props.vm.is_saving {
        text("Saving...")
            .size(STATUS_FONT_SIZE)
            .color(palette.dim_foreground)
    } else {
        text("").size(STATUS_FONT_SIZE)
    };

    container(
        column![
            text("Settings").size(TITLE_FONT_SIZE),
            rows,
            status
        ]
        .spacing(SECTION_SPACING),
    )
    .padding(PAGE_PADDING)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
