//! Kateb localization core
//!
//! Localization and bidirectional text rendering for the Kateb executive
//! assistant dashboard: a fixed English/Arabic locale registry, an embedded
//! translation dictionary with dotted-path resolution and interpolation,
//! per-run RTL/LTR segmentation for mixed-script strings, and locale-aware
//! number and date formatting. The view layer is deliberately out of scope;
//! everything here is plain data in and strings out.

pub mod classify;
pub mod format;
pub mod locales;
pub mod localizer;
pub mod prefs;
pub mod segment;
pub mod state;
pub mod table;

// Re-export commonly used types
pub use classify::{
    TextMetrics, TokenClass, classify, contains_arabic, detect_direction, text_metrics,
};
pub use format::{
    DateOptions, MonthStyle, NumberOptions, NumberStyle, WeekdayStyle, day_names, format_date,
    format_number, month_names, to_arabic_indic,
};
pub use locales::{
    DateOrder, Direction, LanguageDescriptor, NumberSymbols, default_language, detect_language,
    find_language, is_rtl_lang, languages,
};
pub use localizer::Localizer;
pub use prefs::{FileStore, MemoryStore, PreferenceError, PreferenceStore};
pub use segment::{DirectedRun, isolate, segment};
pub use state::{
    DocumentAttributes, FlexDirection, LanguageChange, LanguageState, SubscriptionId, TextAlign,
};
pub use table::{CoverageGap, TranslationError, TranslationTable};
