//! Toast type definitions

use std::fmt;
use std::time::Duration;

use ratatui::style::Color;
use ratatui::text::Text;
use serde::Deserialize;

/// Default countdown before a toast closes itself
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

/// Delay between a close request and the record being purged
pub const EXIT_GRACE: Duration = Duration::from_millis(300);

/// Identity of an active toast
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToastId(String);

impl ToastId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ToastId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ToastId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ToastId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    Success,
    Error,
    Warning,
    Info,
    #[default]
    Default,
}

/// How insistently a toast asks for attention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// Announced when the user is idle
    Polite,
    /// Announced immediately
    Assertive,
}

impl ToastVariant {
    pub fn urgency(self) -> Urgency {
        match self {
            ToastVariant::Error | ToastVariant::Warning => Urgency::Assertive,
            _ => Urgency::Polite,
        }
    }

    pub fn icon(self) -> char {
        match self {
            ToastVariant::Success => '✓',
            ToastVariant::Error => '✗',
            ToastVariant::Warning => '⚠',
            ToastVariant::Info => 'ℹ',
            ToastVariant::Default => '●',
        }
    }

    pub fn color(self) -> Color {
        match self {
            ToastVariant::Success => Color::Green,
            ToastVariant::Error => Color::Red,
            ToastVariant::Warning => Color::Yellow,
            ToastVariant::Info => Color::Blue,
            ToastVariant::Default => Color::Gray,
        }
    }
}

/// Corner or edge of the overlay a toast stacks in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    pub const ALL: [ToastPosition; 6] = [
        ToastPosition::TopLeft,
        ToastPosition::TopCenter,
        ToastPosition::TopRight,
        ToastPosition::BottomLeft,
        ToastPosition::BottomCenter,
        ToastPosition::BottomRight,
    ];

    pub fn is_top(self) -> bool {
        matches!(
            self,
            ToastPosition::TopLeft | ToastPosition::TopCenter | ToastPosition::TopRight
        )
    }
}

/// Per-call settings for [`ToastManager::show`](crate::ToastManager::show)
///
/// Unset fields fall back to the manager's defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastOptions {
    pub id: Option<ToastId>,
    pub title: Option<String>,
    pub variant: Option<ToastVariant>,
    pub duration: Option<Duration>,
    pub position: Option<ToastPosition>,
    pub pause_on_hover: Option<bool>,
    pub show_icon: Option<bool>,
    pub show_close_button: Option<bool>,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<ToastId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn duration_ms(self, ms: u64) -> Self {
        self.duration(Duration::from_millis(ms))
    }

    /// Never close automatically
    pub fn persistent(self) -> Self {
        self.duration(Duration::ZERO)
    }

    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn pause_on_hover(mut self, enabled: bool) -> Self {
        self.pause_on_hover = Some(enabled);
        self
    }

    pub fn show_icon(mut self, enabled: bool) -> Self {
        self.show_icon = Some(enabled);
        self
    }

    pub fn show_close_button(mut self, enabled: bool) -> Self {
        self.show_close_button = Some(enabled);
        self
    }
}

/// Options with every default applied
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedOptions {
    pub title: Option<String>,
    pub variant: ToastVariant,
    pub duration: Duration,
    pub position: ToastPosition,
    pub pause_on_hover: bool,
    pub show_icon: bool,
    pub show_close_button: bool,
}

/// Manager-wide defaults applied to unset [`ToastOptions`] fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastDefaults {
    pub duration: Duration,
    pub exit_grace: Duration,
    pub position: ToastPosition,
    pub pause_on_hover: bool,
    pub show_icon: bool,
    pub show_close_button: bool,
}

impl Default for ToastDefaults {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            exit_grace: EXIT_GRACE,
            position: ToastPosition::default(),
            pause_on_hover: true,
            show_icon: true,
            show_close_button: true,
        }
    }
}

impl ToastDefaults {
    pub(crate) fn resolve(&self, options: ToastOptions) -> ResolvedOptions {
        ResolvedOptions {
            title: options.title,
            variant: options.variant.unwrap_or_default(),
            duration: options.duration.unwrap_or(self.duration),
            position: options.position.unwrap_or(self.position),
            pause_on_hover: options.pause_on_hover.unwrap_or(self.pause_on_hover),
            show_icon: options.show_icon.unwrap_or(self.show_icon),
            show_close_button: options.show_close_button.unwrap_or(self.show_close_button),
        }
    }
}

impl ResolvedOptions {
    /// Overlay the fields a caller set on top of the current ones
    ///
    /// Duration is the exception: an unset duration falls back to the
    /// default rather than keeping the old countdown length.
    pub(crate) fn merge(&mut self, options: ToastOptions, defaults: &ToastDefaults) {
        if let Some(title) = options.title {
            self.title = Some(title);
        }
        if let Some(variant) = options.variant {
            self.variant = variant;
        }
        if let Some(position) = options.position {
            self.position = position;
        }
        if let Some(enabled) = options.pause_on_hover {
            self.pause_on_hover = enabled;
        }
        if let Some(enabled) = options.show_icon {
            self.show_icon = enabled;
        }
        if let Some(enabled) = options.show_close_button {
            self.show_close_button = enabled;
        }
        self.duration = options.duration.unwrap_or(defaults.duration);
    }
}

/// Content of a toast; plain or styled text
pub type ToastMessage = Text<'static>;

/// Lifecycle transitions reported by [`Toast::tick`](super::Toast::tick)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEvent {
    /// The countdown ran out and the exit grace period started
    Closing(ToastId),
    /// The grace period elapsed; the record can be purged
    Completed(ToastId),
}

impl ToastEvent {
    pub fn id(&self) -> &ToastId {
        match self {
            ToastEvent::Closing(id) | ToastEvent::Completed(id) => id,
        }
    }
}
