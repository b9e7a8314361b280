//! Layout tokens shared by the shells.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Viewport breakpoints, matching the Tailwind scale used by the stylesheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// Minimum viewport width, in CSS pixels, at which the breakpoint applies.
    pub fn min_width(self) -> u32 {
        match self {
            Self::Sm => 640,
            Self::Md => 768,
            Self::Lg => 1024,
            Self::Xl => 1280,
        }
    }

    /// Utility-class prefix, e.g. `md`.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

/// Spacing and breakpoint configuration.
///
/// Widths are CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutTokens {
    /// Breakpoint at which the account sidebar appears.
    pub breakpoint: Breakpoint,
    pub sidebar_width: u32,
    pub max_content_width: u32,
    pub outer_padding: u32,
}

impl Default for LayoutTokens {
    fn default() -> Self {
        Self {
            breakpoint: Breakpoint::Md,
            sidebar_width: 250,
            max_content_width: 1024,
            outer_padding: 24,
        }
    }
}

impl LayoutTokens {
    /// Rejects token sets that cannot produce a usable two-column layout.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.sidebar_width == 0 {
            return Err(AppError::InvalidLayout(
                "sidebar_width must be greater than zero".to_string(),
            ));
        }
        if self.max_content_width <= self.sidebar_width {
            return Err(AppError::InvalidLayout(format!(
                "max_content_width ({}) must exceed sidebar_width ({})",
                self.max_content_width, self.sidebar_width
            )));
        }
        Ok(())
    }
}
