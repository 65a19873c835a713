//! Session-wide language state with persistence and change notification.
//!
//! The state is an explicit context object handed to consumers, not a global
//! static. `initialize` and `change_language` are the only side-effecting
//! operations; every other accessor is a pure read.

use crate::locales::{self, Direction, LanguageDescriptor};
use crate::prefs::PreferenceStore;

/// Horizontal text alignment derived from the active direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Right,
}

impl TextAlign {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Closed set of flex layout directions the view layer can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::RowReverse => "row-reverse",
            Self::Column => "column",
            Self::ColumnReverse => "column-reverse",
        }
    }
}

/// Document-level attributes derived from the active language, refreshed on
/// every successful change. The view layer mirrors these onto its root
/// element (`lang`/`dir` attributes, body font family, base alignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentAttributes {
    pub lang: &'static str,
    pub dir: Direction,
    pub font_family: &'static str,
    pub text_align: TextAlign,
}

/// Payload delivered to subscribers after a successful language change.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LanguageChange {
    pub language: String,
    pub rtl: bool,
}

/// Handle returned by [`LanguageState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&LanguageChange)>;

pub struct LanguageState {
    current: &'static LanguageDescriptor,
    attributes: DocumentAttributes,
    store: Box<dyn PreferenceStore>,
    subscribers: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl LanguageState {
    /// Build the session state: persisted preference first, then the
    /// runtime-reported language, then English. Never fails; a broken
    /// preference store is logged and the session continues without it.
    #[must_use]
    pub fn initialize(store: Box<dyn PreferenceStore>) -> Self {
        let saved = match store.load() {
            Ok(value) => value,
            Err(e) => {
                log::warn!("failed to read language preference: {e}");
                None
            }
        };
        let current = saved
            .as_deref()
            .and_then(locales::find_language)
            .unwrap_or_else(locales::detect_language);
        Self {
            current,
            attributes: derive_attributes(current),
            store,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Switch the active language. Unknown codes are a logged no-op
    /// returning `false`. On success the descriptor and document attributes
    /// are updated and the preference persisted before subscribers are
    /// notified synchronously in registration order. Calling again with the
    /// same valid code persists and notifies again, once per call.
    pub fn change_language(&mut self, code: &str) -> bool {
        let Some(descriptor) = locales::find_language(code) else {
            log::warn!("ignoring unsupported language code: {code:?}");
            return false;
        };
        self.current = descriptor;
        self.attributes = derive_attributes(descriptor);
        if let Err(e) = self.store.save(code) {
            log::warn!("failed to persist language preference: {e}");
        }
        let change = LanguageChange {
            language: descriptor.code.to_string(),
            rtl: descriptor.direction.is_rtl(),
        };
        for (_, listener) in &self.subscribers {
            listener(&change);
        }
        true
    }

    /// Register a listener for successful language changes.
    pub fn subscribe(&mut self, listener: impl Fn(&LanguageChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    #[must_use]
    pub fn current(&self) -> &'static LanguageDescriptor {
        self.current
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        self.current.code
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.current.direction
    }

    #[must_use]
    pub fn is_rtl(&self) -> bool {
        self.current.direction.is_rtl()
    }

    #[must_use]
    pub fn attributes(&self) -> &DocumentAttributes {
        &self.attributes
    }

    #[must_use]
    pub fn text_alignment(&self) -> TextAlign {
        if self.is_rtl() {
            TextAlign::Right
        } else {
            TextAlign::Left
        }
    }

    /// Swap `Row`/`RowReverse` under RTL; column directions pass through.
    #[must_use]
    pub fn flex_direction(&self, base: FlexDirection) -> FlexDirection {
        if !self.is_rtl() {
            return base;
        }
        match base {
            FlexDirection::Row => FlexDirection::RowReverse,
            FlexDirection::RowReverse => FlexDirection::Row,
            other => other,
        }
    }
}

fn derive_attributes(descriptor: &LanguageDescriptor) -> DocumentAttributes {
    DocumentAttributes {
        lang: descriptor.locale_tag,
        dir: descriptor.direction,
        font_family: descriptor.font_family,
        text_align: if descriptor.direction.is_rtl() {
            TextAlign::Right
        } else {
            TextAlign::Left
        },
    }
}
