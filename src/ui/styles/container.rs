// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Plain page section on the primary surface.
pub fn section(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Page section on the brand-tinted surface.
pub fn section_accent(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_accent)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Raised white card (stakeholders, gallery widget).
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        border: Border {
            color: colors.border,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Flat tinted card (features).
pub fn card_accent(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_accent)),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Frame around a grid thumbnail.
pub fn thumbnail(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        border: Border {
            color: colors.border,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Dimmed full-window layer behind the viewer.
pub fn backdrop(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.overlay_background)),
        ..Default::default()
    }
}

/// Header and body of the viewer dialog.
pub fn modal(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Bottom strip of the viewer dialog.
pub fn modal_footer(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        border: Border {
            color: colors.border,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Dark footer band; stays dark in both themes.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_is_dark_in_light_theme() {
        let style = footer(&Theme::Light);
        assert_eq!(style.background, Some(Background::Color(palette::GRAY_900)));
    }

    #[test]
    fn backdrop_is_translucent() {
        match backdrop(&Theme::Light).background {
            Some(Background::Color(color)) => assert!(color.a < 1.0 && color.a > 0.0),
            other => panic!("expected color background, got {:?}", other),
        }
    }
}
