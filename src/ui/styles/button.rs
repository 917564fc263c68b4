// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled pill button for the main call to action.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_700,
        _ => palette::PRIMARY_600,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: background,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Outlined pill button for the secondary call to action.
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(colors.surface_accent)),
        _ => None,
    };

    button::Style {
        background,
        text_color: colors.brand_primary,
        border: Border {
            color: colors.brand_primary,
            width: 2.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Red button for destructive actions.
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ERROR_600,
        _ => palette::ERROR_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: background,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Small round remove badge drawn over a thumbnail.
pub fn remove_badge(theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..danger(theme, status)
    }
}

/// Borderless icon button, used for the viewer's close action.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.text_primary,
        _ => colors.text_tertiary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Dashed-look upload area. The toolkit has no dashed borders, so the zone is
/// a tinted surface with a brand outline that darkens on hover.
pub fn drop_zone(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (background, border_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (palette::PRIMARY_100, palette::PRIMARY_500)
        }
        _ => (colors.surface_accent, palette::PRIMARY_300),
    };
    let background = if theme.extended_palette().is_dark {
        Color {
            a: 0.4,
            ..background
        }
    } else {
        background
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.text_secondary,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_darkens_on_hover() {
        let active = primary(&Theme::Light, button::Status::Active);
        let hovered = primary(&Theme::Light, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }

    #[test]
    fn remove_badge_is_round_danger() {
        let style = remove_badge(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::ERROR_500))
        );
        assert_eq!(style.border.radius, iced::border::Radius::from(radius::FULL));
    }
}
