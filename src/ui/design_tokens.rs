// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing and sizes used by the greeting card.

## Organization

- **Palette**: Base and festive colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use birthday_wish::ui::design_tokens::{palette, spacing};

assert_eq!(palette::CONFETTI.len(), 7);
let padding = spacing::MD; // 16px
assert!(padding > 0.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_300: Color = Color::from_rgb8(0xD1, 0xD5, 0xDB);

    // Card text
    pub const TITLE_PURPLE: Color = Color::from_rgb8(0xA8, 0x55, 0xF7);
    pub const NAME_AMBER: Color = Color::from_rgb8(0xA1, 0x62, 0x07);
    pub const DATE_BLUE: Color = Color::from_rgb8(0x3B, 0x82, 0xF6);

    // Celebrate button
    pub const BUTTON_LILAC: Color = Color::from_rgb8(0xD8, 0xB4, 0xFE);
    pub const BUTTON_LILAC_HOVER: Color = Color::from_rgb8(0xC0, 0x84, 0xFC);
    pub const BUTTON_PINK_TEXT: Color = Color::from_rgb8(0xDB, 0x27, 0x77);

    // Flame
    pub const FLAME: Color = Color::from_rgb8(0xFF, 0xB3, 0x47);

    /// Lit candle colors, left to right.
    pub const CANDLES: [Color; 6] = [
        Color::from_rgb8(0xFF, 0x6B, 0x6B),
        Color::from_rgb8(0xBB, 0x8F, 0xCE),
        Color::from_rgb8(0xFF, 0xA0, 0x7A),
        Color::from_rgb8(0x4E, 0xCD, 0xC4),
        Color::from_rgb8(0x98, 0xD8, 0xC8),
        Color::from_rgb8(0x45, 0xB7, 0xD1),
    ];

    /// Balloon colors, left to right.
    pub const BALLOONS: [Color; 6] = CANDLES;

    /// Confetti palette.
    pub const CONFETTI: [Color; 7] = [
        Color::from_rgb8(0xFF, 0x6B, 0x6B),
        Color::from_rgb8(0x4E, 0xCD, 0xC4),
        Color::from_rgb8(0x45, 0xB7, 0xD1),
        Color::from_rgb8(0xFF, 0xA0, 0x7A),
        Color::from_rgb8(0x98, 0xD8, 0xC8),
        Color::from_rgb8(0xF7, 0xDC, 0x6F),
        Color::from_rgb8(0xBB, 0x8F, 0xCE),
    ];
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Candle icon box (width).
    pub const CANDLE_WIDTH: f32 = 32.0;
    /// Candle icon box (height), flame included.
    pub const CANDLE_HEIGHT: f32 = 44.0;
    /// Balloon icon box (square).
    pub const BALLOON: f32 = 36.0;
    /// Maximum card width.
    pub const CARD_MAX_WIDTH: f32 = 448.0;
    pub const BUTTON_HEIGHT: f32 = 36.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Card title ("Happy 21st Birthday!").
    pub const TITLE_XL: f32 = 36.0;
    /// Recipient name.
    pub const TITLE_LG: f32 = 24.0;
    /// Date line.
    pub const TITLE_MD: f32 = 20.0;
    /// Section headers ("Light the candles:").
    pub const BODY_LG: f32 = 16.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}
