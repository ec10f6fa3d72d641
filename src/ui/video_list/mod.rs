// SPDX-License-Identifier: MPL-2.0
//! Scrollable, selectable list of videos.
//!
//! The list keeps no selection state of its own: the host passes the
//! selected id in and gets a message back when a row is pressed.

use crate::i18n::fluent::I18n;
use crate::media::VideoItem;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons::{self, AssetRef, IconSlot};
use crate::ui::styles::{self, compose, Style, StyleOverrides, StyleSlot};
use iced::font::Weight;
use iced::widget::{
    button, column, container, keyed_column, row, scrollable, text, Column, Row, Space,
};
use iced::{Element, Font, Length, Theme};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const CONTAINER: Style = Style::EMPTY;

const ITEM: Style = Style {
    padding: Some(spacing::MD),
    spacing: Some(spacing::MD),
    border_color: Some(palette::GRAY_800),
    border_width: Some(1.0),
    ..Style::EMPTY
};

const SELECTED_ITEM: Style = Style {
    background: Some(palette::GRAY_900),
    ..Style::EMPTY
};

const VIDEO_PREVIEW: Style = Style {
    background: Some(palette::BLACK),
    height: Some(sizing::PREVIEW_HEIGHT),
    border_radius: Some(radius::MD),
    ..Style::EMPTY
};

const TITLE: Style = Style {
    text_color: Some(palette::GRAY_200),
    font_size: Some(typography::BODY_LG),
    ..Style::EMPTY
};

const SELECTED_TEXT: Style = Style {
    text_color: Some(palette::ACCENT_500),
    ..Style::EMPTY
};

const DESCRIPTION: Style = Style {
    text_color: Some(palette::GRAY_400),
    font_size: Some(typography::BODY_SM),
    ..Style::EMPTY
};

const TAG_CONTAINER: Style = Style {
    spacing: Some(spacing::XS),
    ..Style::EMPTY
};

const TAG: Style = Style {
    text_color: Some(palette::ACCENT_300),
    font_size: Some(typography::CAPTION),
    ..Style::EMPTY
};

const TITLE_FONT: Font = Font {
    weight: Weight::Semibold,
    ..Font::DEFAULT
};

/// Base fragment for a slot; slots the list doesn't draw are empty.
#[must_use]
pub fn base_style(slot: StyleSlot) -> Style {
    match slot {
        StyleSlot::Container => CONTAINER,
        StyleSlot::Item => ITEM,
        StyleSlot::SelectedItem => SELECTED_ITEM,
        StyleSlot::VideoPreview => VIDEO_PREVIEW,
        StyleSlot::Title => TITLE,
        StyleSlot::SelectedText => SELECTED_TEXT,
        StyleSlot::Description => DESCRIPTION,
        StyleSlot::TagContainer => TAG_CONTAINER,
        StyleSlot::Tag => TAG,
        StyleSlot::Video
        | StyleSlot::Controls
        | StyleSlot::Button
        | StyleSlot::Slider
        | StyleSlot::TimeText
        | StyleSlot::TimeTextFullscreen => Style::EMPTY,
    }
}

/// What one row shows, independent of rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RowModel<'a> {
    pub item: &'a VideoItem,
    /// Widget key derived from the item id.
    pub key: u64,
    pub is_selected: bool,
    pub description: Option<&'a str>,
    /// Tags prefixed with `#`, in input order.
    pub tags: Vec<String>,
}

/// Stable widget key for an item id.
#[must_use]
pub fn row_key(id: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    hasher.finish()
}

/// Row for `item`. Without a selection no row is selected.
#[must_use]
pub fn row_model<'a>(item: &'a VideoItem, selected_id: Option<&str>) -> RowModel<'a> {
    RowModel {
        item,
        key: row_key(&item.id),
        is_selected: selected_id == Some(item.id.as_str()),
        description: item.description(),
        tags: item.tags.iter().map(|tag| format!("#{tag}")).collect(),
    }
}

/// Row models in input order.
#[must_use]
pub fn rows<'a>(videos: &'a [VideoItem], selected_id: Option<&str>) -> Vec<RowModel<'a>> {
    videos
        .iter()
        .map(|item| row_model(item, selected_id))
        .collect()
}

/// Row models paired with the message each row produces when pressed.
///
/// `on_select` is called once per row, with that row's item.
pub fn entries<'a, M, F>(
    videos: &'a [VideoItem],
    selected_id: Option<&str>,
    on_select: F,
) -> Vec<(RowModel<'a>, M)>
where
    F: Fn(VideoItem) -> M,
{
    rows(videos, selected_id)
        .into_iter()
        .map(|model| {
            let message = on_select(model.item.clone());
            (model, message)
        })
        .collect()
}

/// Row container style: item, then selected variant when selected.
#[must_use]
pub fn item_style(overrides: &StyleOverrides, is_selected: bool) -> Style {
    let base_item = base_style(StyleSlot::Item);
    let base_selected = base_style(StyleSlot::SelectedItem);
    let selected = is_selected.then_some(());

    compose([
        Some(&base_item),
        overrides.get(StyleSlot::Item),
        selected.map(|()| &base_selected),
        selected.and_then(|()| overrides.get(StyleSlot::SelectedItem)),
    ])
}

/// Title text style: title, then selected text when selected.
#[must_use]
pub fn title_style(overrides: &StyleOverrides, is_selected: bool) -> Style {
    let base_title = base_style(StyleSlot::Title);
    let base_selected = base_style(StyleSlot::SelectedText);
    let selected = is_selected.then_some(());

    compose([
        Some(&base_title),
        overrides.get(StyleSlot::Title),
        selected.map(|()| &base_selected),
        selected.and_then(|()| overrides.get(StyleSlot::SelectedText)),
    ])
}

/// View context for rendering the list.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub styles: &'a StyleOverrides,
}

/// Renders the list. Pressing a row produces `on_select(item)`.
pub fn view<'a, M, F>(
    ctx: ViewContext<'a>,
    videos: &'a [VideoItem],
    selected_id: Option<&str>,
    on_select: F,
) -> Element<'a, M>
where
    M: Clone + 'a,
    F: Fn(VideoItem) -> M,
{
    let resolve = |slot: StyleSlot| ctx.styles.resolve(slot, &base_style(slot));
    let container_style = resolve(StyleSlot::Container);
    let now_playing = ctx.i18n.tr("video-list-now-playing");

    let list = keyed_column(
        entries(videos, selected_id, on_select)
            .into_iter()
            .map(|(model, message)| (model.key, row_view(&ctx, model, &now_playing, message))),
    )
    .spacing(container_style.spacing.unwrap_or(0.0))
    .width(Length::Fill);

    container(scrollable(list).width(Length::Fill).height(Length::Fill))
        .padding(container_style.padding())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::from_style(container_style))
        .into()
}

fn row_view<'a, M: Clone + 'a>(
    ctx: &ViewContext<'a>,
    model: RowModel<'a>,
    now_playing: &str,
    message: M,
) -> Element<'a, M> {
    let resolve = |slot: StyleSlot| ctx.styles.resolve(slot, &base_style(slot));
    let item = item_style(ctx.styles, model.is_selected);
    let title = title_style(ctx.styles, model.is_selected);
    let selected_text = compose([
        Some(&title),
        Some(&base_style(StyleSlot::SelectedText)),
        ctx.styles.get(StyleSlot::SelectedText),
    ]);
    let description = resolve(StyleSlot::Description);
    let tag_container = resolve(StyleSlot::TagContainer);
    let tag = resolve(StyleSlot::Tag);

    let mut info: Column<'a, M> = column![].spacing(spacing::XXS).width(Length::FillPortion(65));

    if model.is_selected {
        info = info.push(
            text(now_playing.to_string())
                .size(typography::CAPTION)
                .style(move |_theme: &Theme| selected_text.text()),
        );
    }

    info = info.push(
        text(model.item.title.clone())
            .size(title.font_size.unwrap_or(typography::BODY_LG))
            .font(TITLE_FONT)
            .style(move |_theme: &Theme| title.text()),
    );

    if let Some(desc) = model.description {
        info = info.push(
            text(desc.to_string())
                .size(description.font_size.unwrap_or(typography::BODY_SM))
                .style(move |_theme: &Theme| description.text()),
        );
    }

    if !model.tags.is_empty() {
        let tags: Row<'a, M> = Row::with_children(model.tags.into_iter().map(|label| {
            text(label)
                .size(tag.font_size.unwrap_or(typography::CAPTION))
                .style(move |_theme: &Theme| tag.text())
                .into()
        }))
        .spacing(tag_container.spacing.unwrap_or(spacing::XS));

        info = info.push(
            container(tags)
                .padding(tag_container.padding())
                .style(styles::container::from_style(tag_container)),
        );
    }

    let content = row![preview(ctx), info]
        .spacing(item.spacing.unwrap_or(spacing::MD))
        .width(Length::Fill);

    button(content)
        .on_press(message)
        .padding(item.padding())
        .width(Length::Fill)
        .style(styles::button::from_style(item))
        .into()
}

/// Muted, paused, control-less stand-in for the item's video.
fn preview<'a, M: 'a>(ctx: &ViewContext<'a>) -> Element<'a, M> {
    let style = ctx
        .styles
        .resolve(StyleSlot::VideoPreview, &base_style(StyleSlot::VideoPreview));
    let width = style.width.map_or(
        Length::FillPortion((sizing::PREVIEW_WIDTH_RATIO * 100.0) as u16),
        Length::Fixed,
    );
    let height = style.height.unwrap_or(sizing::PREVIEW_HEIGHT);

    container(column![
        Space::new().height(Length::Fill),
        icons::view(&AssetRef::Builtin(IconSlot::Play), spacing::LG * 2.0),
        Space::new().height(Length::Fill),
    ]
    .align_x(iced::Alignment::Center)
    .width(Length::Fill))
    .width(width)
    .height(Length::Fixed(height))
    .style(styles::container::from_style(style))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Color;

    fn item(id: &str, tags: &[&str]) -> VideoItem {
        VideoItem {
            id: id.into(),
            title: format!("Video {id}"),
            uri: format!("file:///videos/{id}.mp4"),
            description: None,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    #[test]
    fn exactly_the_matching_row_is_selected() {
        let videos = vec![item("1", &[]), item("2", &[]), item("3", &[])];
        let models = rows(&videos, Some("2"));

        let selected: Vec<&str> = models
            .iter()
            .filter(|m| m.is_selected)
            .map(|m| m.item.id.as_str())
            .collect();
        assert_eq!(selected, vec!["2"]);
    }

    #[test]
    fn no_row_is_selected_without_a_match() {
        let videos = vec![item("1", &[]), item("2", &[])];
        assert!(rows(&videos, Some("missing")).iter().all(|m| !m.is_selected));
        assert!(rows(&videos, None).iter().all(|m| !m.is_selected));
    }

    #[test]
    fn rows_keep_input_order() {
        let videos = vec![item("b", &[]), item("a", &[]), item("c", &[])];
        let ids: Vec<&str> = rows(&videos, None)
            .iter()
            .map(|m| m.item.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn tags_are_hash_prefixed_in_order() {
        let video = item("1", &["nature", "4k"]);
        assert_eq!(row_model(&video, None).tags, vec!["#nature", "#4k"]);
    }

    #[test]
    fn empty_description_is_hidden() {
        let mut video = item("1", &[]);
        video.description = Some(String::new());
        assert_eq!(row_model(&video, None).description, None);

        video.description = Some("About".into());
        assert_eq!(row_model(&video, None).description, Some("About"));
    }

    #[test]
    fn empty_id_is_not_selected_without_a_selection() {
        let videos = vec![item("", &[]), item("2", &[])];
        assert!(rows(&videos, None).iter().all(|m| !m.is_selected));
        assert!(rows(&videos, Some("")).first().is_some_and(|m| m.is_selected));
    }

    #[test]
    fn each_row_carries_its_own_item_as_message() {
        let videos = vec![item("1", &[]), item("2", &[]), item("3", &[])];
        let calls = std::cell::Cell::new(0);
        let paired = entries(&videos, Some("2"), |video| {
            calls.set(calls.get() + 1);
            video
        });

        assert_eq!(calls.get(), videos.len());
        for (index, (model, message)) in paired.iter().enumerate() {
            assert_eq!(model.item, &videos[index]);
            assert_eq!(message, &videos[index]);
        }
    }

    #[test]
    fn row_keys_follow_ids() {
        let videos = vec![item("a", &[]), item("b", &[])];
        let keys: Vec<u64> = rows(&videos, None).iter().map(|m| m.key).collect();
        assert_ne!(keys[0], keys[1]);
        assert_eq!(keys[0], row_key("a"));
        assert_eq!(row_model(&videos[1], Some("a")).key, keys[1]);
    }

    #[test]
    fn empty_list_has_no_rows() {
        assert!(rows(&[], Some("1")).is_empty());
    }

    #[test]
    fn selected_item_style_layers_base_then_override() {
        let caller_item = Style {
            padding: Some(2.0),
            background: Some(Color::from_rgb8(0x10, 0x10, 0x10)),
            ..Style::EMPTY
        };
        let caller_selected = Style {
            border_color: Some(Color::WHITE),
            ..Style::EMPTY
        };
        let overrides = StyleOverrides::new()
            .with(StyleSlot::Item, caller_item)
            .with(StyleSlot::SelectedItem, caller_selected);

        let selected = item_style(&overrides, true);
        assert_eq!(selected.padding, Some(2.0));
        // Base selected background beats the caller's plain item background.
        assert_eq!(selected.background, Some(palette::GRAY_900));
        assert_eq!(selected.border_color, Some(Color::WHITE));

        let plain = item_style(&overrides, false);
        assert_eq!(plain.background, Some(Color::from_rgb8(0x10, 0x10, 0x10)));
        assert_eq!(plain.border_color, Some(palette::GRAY_800));
    }

    #[test]
    fn selected_title_uses_selected_text_color() {
        let overrides = StyleOverrides::default();
        assert_eq!(
            title_style(&overrides, true).text_color,
            Some(palette::ACCENT_500)
        );
        assert_eq!(
            title_style(&overrides, false).text_color,
            Some(palette::GRAY_200)
        );
        assert_eq!(
            title_style(&overrides, true).font_size,
            Some(typography::BODY_LG)
        );
    }
}
