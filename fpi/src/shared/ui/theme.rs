use iced::{Color, Theme};

const DIVIDER_ALPHA: f32 = 0.3;

/// Colors the shell views draw with, resolved from the active iced theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ShellPalette {
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) app_bar: Color,
    pub(crate) foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) accent: Color,
    pub(crate) selection: Color,
    pub(crate) divider: Color,
    pub(crate) success: Color,
    pub(crate) danger: Color,
}

impl ShellPalette {
    /// Resolve shell colors from an iced theme.
    pub(crate) fn from_theme(theme: &Theme) -> Self {
        let palette = theme.extended_palette();
        let mut divider = palette.background.strong.color;
        divider.a = DIVIDER_ALPHA;

        Self {
            background: palette.background.base.color,
            surface: palette.background.weak.color,
            app_bar: palette.secondary.base.color,
            foreground: palette.background.base.text,
            dim_foreground: palette.background.strong.text,
            accent: palette.primary.base.color,
            selection: palette.primary.weak.color,
            divider,
            success: palette.success.base.color,
            danger: palette.danger.base.color,
        }
    }
}

/// Theme data passed down to view functions.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps {
    pub(crate) palette: ShellPalette,
}

impl ThemeProps {
    pub(crate) fn new(theme: &Theme) -> Self {
        Self {
            palette: ShellPalette::from_theme(theme),
        }
    }
}
