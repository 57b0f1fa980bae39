//! Dark slate theme with indigo accents for the portfolio page.

use iced::{
    Background, Border, Color, Shadow, Theme, Vector, theme,
    widget::{button, container, text_input},
};

/// Deep navy theme with high contrast indigo accents
#[derive(Debug, Clone, Copy)]
pub struct PortfolioTheme;

impl PortfolioTheme {
    // Core colors
    pub const BACKGROUND: Color = Color::from_rgb(0.043, 0.059, 0.102); // #0B0F1A
    pub const BACKGROUND_RAISED: Color = Color::from_rgb(0.067, 0.094, 0.153); // #111827
    pub const ACCENT: Color = Color::from_rgb(0.388, 0.4, 0.945); // #6366F1
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.506, 0.549, 0.973); // #818CF8
    pub const ACCENT_GLOW: Color = Color::from_rgba(0.388, 0.4, 0.945, 0.3);
    pub const SECONDARY: Color = Color::from_rgb(0.925, 0.282, 0.6); // #EC4899

    // Surfaces
    pub const CARD_BG: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.04);
    pub const CARD_HOVER: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.08);
    pub const MEDIA_BG: Color = Color::from_rgb(0.02, 0.03, 0.06);
    pub const HEADER_BG: Color = Color::from_rgba(0.043, 0.059, 0.102, 0.92);
    pub const BORDER_COLOR: Color = Color::from_rgb(0.118, 0.161, 0.231); // #1E293B

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.973, 0.98, 0.988); // #F8FAFC
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.58, 0.639, 0.722); // #94A3B8
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.392, 0.455, 0.545); // #64748B

    // Status colors
    pub const SUCCESS: Color = Color::from_rgb(0.0, 0.8, 0.4); // #00CC66
    pub const ERROR: Color = Color::from_rgb(1.0, 0.2, 0.2); // #FF3333

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT;
        palette.success = Self::SUCCESS;
        palette.danger = Self::ERROR;

        Theme::custom("Folio Dark".to_string(), palette)
    }
}

/// Replace a color's alpha channel.
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Fade a color toward transparent by a reveal progress value.
pub fn fade(color: Color, progress: f32) -> Color {
    with_alpha(color, color.a * progress.clamp(0.0, 1.0))
}

#[derive(Debug, Clone, Copy)]
pub enum Button {
    /// Filled accent call-to-action.
    Primary,
    /// Bordered, transparent body.
    Outline,
    /// Bare text, used by the header navigation.
    Ghost,
    /// Circular carousel chevron.
    Chevron,
    /// Media selector thumb.
    Thumb,
    /// Media selector thumb for the active slot.
    ThumbActive,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Primary => |_, status| {
                let (background, shadow) = match status {
                    button::Status::Hovered => (
                        PortfolioTheme::ACCENT_HOVER,
                        Shadow {
                            color: PortfolioTheme::ACCENT_GLOW,
                            offset: Vector::new(0.0, 2.0),
                            blur_radius: 16.0,
                        },
                    ),
                    button::Status::Pressed => (
                        PortfolioTheme::ACCENT,
                        Shadow::default(),
                    ),
                    _ => (
                        PortfolioTheme::ACCENT,
                        Shadow {
                            color: PortfolioTheme::ACCENT_GLOW,
                            offset: Vector::new(0.0, 2.0),
                            blur_radius: 8.0,
                        },
                    ),
                };

                button::Style {
                    text_color: PortfolioTheme::TEXT_PRIMARY,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: background,
                        width: 1.0,
                        radius: 22.0.into(),
                    },
                    shadow,
                }
            },
            Button::Outline => |_, status| {
                let border_color = match status {
                    button::Status::Hovered => PortfolioTheme::TEXT_PRIMARY,
                    _ => PortfolioTheme::BORDER_COLOR,
                };

                button::Style {
                    text_color: PortfolioTheme::TEXT_PRIMARY,
                    background: Some(Background::Color(Color::TRANSPARENT)),
                    border: Border {
                        color: border_color,
                        width: 1.0,
                        radius: 22.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            },
            Button::Ghost => |_, status| {
                let text_color = match status {
                    button::Status::Hovered => PortfolioTheme::ACCENT_HOVER,
                    _ => PortfolioTheme::TEXT_SECONDARY,
                };

                button::Style {
                    text_color,
                    background: None,
                    border: Border::default(),
                    shadow: Shadow::default(),
                }
            },
            Button::Chevron => |_, status| {
                let background = match status {
                    button::Status::Hovered => PortfolioTheme::CARD_HOVER,
                    _ => PortfolioTheme::CARD_BG,
                };

                button::Style {
                    text_color: PortfolioTheme::TEXT_PRIMARY,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: PortfolioTheme::BORDER_COLOR,
                        width: 1.0,
                        radius: 18.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            },
            Button::Thumb => |_, status| {
                let border_color = match status {
                    button::Status::Hovered => PortfolioTheme::TEXT_DIMMED,
                    _ => PortfolioTheme::BORDER_COLOR,
                };

                button::Style {
                    text_color: PortfolioTheme::TEXT_SECONDARY,
                    background: Some(Background::Color(PortfolioTheme::MEDIA_BG)),
                    border: Border {
                        color: border_color,
                        width: 1.0,
                        radius: 6.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            },
            Button::ThumbActive => |_, _| button::Style {
                text_color: PortfolioTheme::TEXT_PRIMARY,
                background: Some(Background::Color(PortfolioTheme::MEDIA_BG)),
                border: Border {
                    color: PortfolioTheme::ACCENT,
                    width: 2.0,
                    radius: 6.0.into(),
                },
                shadow: Shadow {
                    color: PortfolioTheme::ACCENT_GLOW,
                    offset: Vector::new(0.0, 0.0),
                    blur_radius: 6.0,
                },
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Surface {
    /// Translucent card on the page background.
    Glass,
    /// Raised section band (about, projects, contact).
    Band,
    /// Frame around carousel media.
    MediaFrame,
    /// Placeholder shown while media is loading or unavailable.
    Placeholder,
    /// Fixed navigation header.
    Header,
    /// Transient status note.
    Note,
}

impl Surface {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Surface::Glass => |_| container::Style {
                text_color: None,
                background: Some(Background::Color(PortfolioTheme::CARD_BG)),
                border: Border {
                    color: PortfolioTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 16.0.into(),
                },
                shadow: Shadow::default(),
            },
            Surface::Band => |_| container::Style {
                text_color: None,
                background: Some(Background::Color(
                    PortfolioTheme::BACKGROUND_RAISED,
                )),
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Surface::MediaFrame => |_| container::Style {
                text_color: None,
                background: Some(Background::Color(PortfolioTheme::MEDIA_BG)),
                border: Border {
                    color: PortfolioTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow::default(),
            },
            Surface::Placeholder => |_| container::Style {
                text_color: Some(PortfolioTheme::TEXT_DIMMED),
                background: Some(Background::Color(PortfolioTheme::MEDIA_BG)),
                border: Border {
                    color: PortfolioTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow::default(),
            },
            Surface::Header => |_| container::Style {
                text_color: None,
                background: Some(Background::Color(PortfolioTheme::HEADER_BG)),
                border: Border::default(),
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
                    offset: Vector::new(0.0, 1.0),
                    blur_radius: 8.0,
                },
            },
            Surface::Note => |_| container::Style {
                text_color: Some(PortfolioTheme::TEXT_PRIMARY),
                background: Some(Background::Color(
                    PortfolioTheme::BACKGROUND_RAISED,
                )),
                border: Border {
                    color: PortfolioTheme::ACCENT,
                    width: 1.0,
                    radius: 10.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 12.0,
                },
            },
        }
    }
}

/// Style for a contact form input, flipping the border to the error color
/// when the field failed validation.
pub fn input_style(
    invalid: bool,
) -> fn(&Theme, text_input::Status) -> text_input::Style {
    if invalid {
        |_, _| text_input::Style {
            background: Background::Color(PortfolioTheme::MEDIA_BG),
            border: Border {
                color: PortfolioTheme::ERROR,
                width: 1.0,
                radius: 8.0.into(),
            },
            icon: PortfolioTheme::TEXT_DIMMED,
            placeholder: PortfolioTheme::TEXT_DIMMED,
            value: PortfolioTheme::TEXT_PRIMARY,
            selection: PortfolioTheme::ACCENT_GLOW,
        }
    } else {
        |_, status| {
            let border_color = match status {
                text_input::Status::Focused => PortfolioTheme::ACCENT,
                text_input::Status::Hovered => PortfolioTheme::TEXT_DIMMED,
                _ => PortfolioTheme::BORDER_COLOR,
            };

            text_input::Style {
                background: Background::Color(PortfolioTheme::MEDIA_BG),
                border: Border {
                    color: border_color,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                icon: PortfolioTheme::TEXT_DIMMED,
                placeholder: PortfolioTheme::TEXT_DIMMED,
                value: PortfolioTheme::TEXT_PRIMARY,
                selection: PortfolioTheme::ACCENT_GLOW,
            }
        }
    }
}
