//! The facade the view layer talks to: one translation table plus one
//! language state, wired to segmentation and formatting.

use crate::classify;
use crate::format::{self, DateOptions, NumberOptions, WeekdayStyle};
use crate::locales::{Direction, LanguageDescriptor, languages};
use crate::prefs::{MemoryStore, PreferenceStore};
use crate::segment::{self, DirectedRun};
use crate::state::{
    DocumentAttributes, FlexDirection, LanguageChange, LanguageState, SubscriptionId, TextAlign,
};
use crate::table::TranslationTable;
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub struct Localizer {
    table: TranslationTable,
    state: LanguageState,
}

impl Localizer {
    /// The embedded dictionary plus a language state initialized from
    /// `store` (persisted preference, then runtime language, then English).
    #[must_use]
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self::with_table(TranslationTable::builtin(), store)
    }

    #[must_use]
    pub fn with_table(table: TranslationTable, store: Box<dyn PreferenceStore>) -> Self {
        Self {
            table,
            state: LanguageState::initialize(store),
        }
    }

    /// Session without persistence, useful for tools and tests.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// Translate a dotted key to the active language, falling back to
    /// English and then to the key itself.
    #[must_use]
    pub fn t(&self, path: &str) -> String {
        self.table.resolve(path, self.state.code())
    }

    /// Translate with `{key}` placeholder substitution.
    #[must_use]
    pub fn tr(&self, path: &str, params: &BTreeMap<&str, &str>) -> String {
        self.table.resolve_with(path, self.state.code(), Some(params))
    }

    /// Pick between a pre-localized string pair: the Arabic text under
    /// Arabic (when non-empty), otherwise English, otherwise whatever is
    /// available.
    #[must_use]
    pub fn localized_text(&self, en_text: &str, ar_text: &str) -> String {
        if self.state.code() == "ar" && !ar_text.is_empty() {
            ar_text.to_string()
        } else if !en_text.is_empty() {
            en_text.to_string()
        } else {
            ar_text.to_string()
        }
    }

    pub fn change_language(&mut self, code: &str) -> bool {
        self.state.change_language(code)
    }

    pub fn subscribe(&mut self, listener: impl Fn(&LanguageChange) + 'static) -> SubscriptionId {
        self.state.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    #[must_use]
    pub fn current_language(&self) -> &'static LanguageDescriptor {
        self.state.current()
    }

    /// The fixed locale registry.
    #[must_use]
    pub fn languages(&self) -> &'static [LanguageDescriptor] {
        languages()
    }

    #[must_use]
    pub fn is_rtl(&self) -> bool {
        self.state.is_rtl()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.state.direction()
    }

    #[must_use]
    pub fn attributes(&self) -> &DocumentAttributes {
        self.state.attributes()
    }

    #[must_use]
    pub fn text_alignment(&self) -> TextAlign {
        self.state.text_alignment()
    }

    #[must_use]
    pub fn flex_direction(&self, base: FlexDirection) -> FlexDirection {
        self.state.flex_direction(base)
    }

    /// Directed runs of `text` under the ambient direction. With
    /// `preserve_formatting` off the text stays a single ambient run, as for
    /// content that is known to be single-script.
    #[must_use]
    pub fn display_runs<'a>(
        &self,
        text: &'a str,
        preserve_formatting: bool,
    ) -> Vec<DirectedRun<'a>> {
        if preserve_formatting {
            segment::segment(text, self.direction())
        } else if text.is_empty() {
            Vec::new()
        } else {
            vec![DirectedRun {
                text,
                direction: self.direction(),
            }]
        }
    }

    /// Element-level direction for `text`: its own script if decisive,
    /// otherwise the ambient direction.
    #[must_use]
    pub fn detect_direction(&self, text: &str) -> Direction {
        classify::detect_direction(text, self.direction())
    }

    /// Plain-text rendering with LTR runs wrapped in explicit direction
    /// controls.
    #[must_use]
    pub fn isolate(&self, text: &str) -> String {
        segment::isolate(text, self.direction())
    }

    #[must_use]
    pub fn format_number(&self, value: f64, opts: &NumberOptions) -> String {
        format::format_number(self.state.current(), value, opts)
    }

    #[must_use]
    pub fn format_date(&self, date: NaiveDate, opts: &DateOptions) -> String {
        format::format_date(&self.table, self.state.current(), date, opts)
    }

    #[must_use]
    pub fn day_names(&self, style: WeekdayStyle) -> Vec<String> {
        format::day_names(&self.table, self.state.current(), style)
    }

    #[must_use]
    pub fn month_names(&self) -> Vec<String> {
        format::month_names(&self.table, self.state.current())
    }

    #[must_use]
    pub fn table(&self) -> &TranslationTable {
        &self.table
    }
}
