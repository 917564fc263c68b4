// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens for the landing page and the gallery widget.

## Organization

- **Palette**: Base colors (green brand scale)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use ayush_hub::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);
    pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_50: Color = Color::from_rgb(0.976, 0.980, 0.984);

    // Brand colors (green scale)
    pub const PRIMARY_50: Color = Color::from_rgb(0.941, 0.992, 0.957);
    pub const PRIMARY_100: Color = Color::from_rgb(0.863, 0.988, 0.906);
    pub const PRIMARY_300: Color = Color::from_rgb(0.525, 0.937, 0.675);
    pub const PRIMARY_500: Color = Color::from_rgb(0.133, 0.773, 0.369);
    pub const PRIMARY_600: Color = Color::from_rgb(0.086, 0.639, 0.290);
    pub const PRIMARY_700: Color = Color::from_rgb(0.082, 0.502, 0.239);
    pub const PRIMARY_900: Color = Color::from_rgb(0.078, 0.325, 0.176);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const ERROR_600: Color = Color::from_rgb(0.863, 0.149, 0.149);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.75;
    pub const OVERLAY_HOVER: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const SECTION: f32 = 80.0; // 10 units, vertical padding of page sections
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon glyph sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    /// Height of the upload drop zone.
    pub const DROP_ZONE_HEIGHT: f32 = 128.0;

    /// Widest the page content column grows.
    pub const CONTENT_MAX_WIDTH: f32 = 1120.0;

    /// Widest the gallery card grows.
    pub const GALLERY_MAX_WIDTH: f32 = 880.0;

    /// Widest the viewer modal grows.
    pub const MODAL_MAX_WIDTH: f32 = 896.0;

    /// Tallest the enlarged image in the modal grows.
    pub const MODAL_IMAGE_MAX_HEIGHT: f32 = 520.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.

    /// Hero heading.
    pub const DISPLAY: f32 = 48.0;

    /// Section headings.
    pub const TITLE_LG: f32 = 30.0;

    /// Card and widget headings.
    pub const TITLE_MD: f32 = 24.0;

    /// Card titles, modal title.
    pub const TITLE_SM: f32 = 18.0;

    /// Lead paragraphs.
    pub const BODY_LG: f32 = 18.0;

    /// Standard body.
    pub const BODY: f32 = 14.0;

    /// Hints and captions.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    const SHADOW_COLOR: Color = Color {
        a: opacity::OVERLAY_MEDIUM * 0.3,
        ..palette::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_STRONG > 0.0 && opacity::OVERLAY_STRONG < 1.0);

    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);
};
