//! Locale registry with direction, locale-tag, and formatting metadata.

/// Paragraph-level text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }

    /// The value used for `dir` document attributes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// Field ordering for numeric date formats (`1/15/2024` vs `15/1/2024`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    MonthFirst,
    DayFirst,
}

/// Numeric formatting symbols for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSymbols {
    pub decimal: char,
    pub group: char,
    pub percent: &'static str,
    pub currency_prefix: &'static str,
    pub currency_suffix: &'static str,
}

/// One supported locale. The registry is fixed data; adding a language means
/// adding an entry here plus a translation for every existing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDescriptor {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub flag: &'static str,
    pub direction: Direction,
    pub locale_tag: &'static str,
    pub font_family: &'static str,
    pub date_order: DateOrder,
    pub comma: &'static str,
    pub numbers: NumberSymbols,
}

pub const LANGUAGES: &[LanguageDescriptor] = &[
    LanguageDescriptor {
        code: "en",
        name: "English",
        native_name: "English",
        flag: "🇺🇸",
        direction: Direction::Ltr,
        locale_tag: "en-US",
        font_family: "Satoshi, Space Grotesk, Inter, system-ui, sans-serif",
        date_order: DateOrder::MonthFirst,
        comma: ",",
        numbers: NumberSymbols {
            decimal: '.',
            group: ',',
            percent: "%",
            currency_prefix: "$",
            currency_suffix: "",
        },
    },
    LanguageDescriptor {
        code: "ar",
        name: "Arabic",
        native_name: "العربية",
        flag: "🇸🇦",
        direction: Direction::Rtl,
        locale_tag: "ar-SA",
        font_family: "Cairo, Amiri, Noto Sans Arabic, system-ui, sans-serif",
        date_order: DateOrder::DayFirst,
        comma: "،",
        numbers: NumberSymbols {
            decimal: '٫',
            group: '٬',
            percent: "٪",
            currency_prefix: "",
            currency_suffix: " US$",
        },
    },
];

/// Supported locales with their native names and direction metadata.
#[must_use]
pub const fn languages() -> &'static [LanguageDescriptor] {
    LANGUAGES
}

#[must_use]
pub fn find_language(code: &str) -> Option<&'static LanguageDescriptor> {
    LANGUAGES.iter().find(|l| l.code == code)
}

#[must_use]
pub fn is_rtl_lang(code: &str) -> bool {
    find_language(code).is_some_and(|l| l.direction.is_rtl())
}

/// The locale the registry falls back to when nothing else matches.
#[must_use]
pub const fn default_language() -> &'static LanguageDescriptor {
    &LANGUAGES[0]
}

/// Detect the runtime-reported language, reduced to its primary subtag
/// (`ar-SA` reports as `ar`). Falls back to English when the platform
/// reports nothing or an unsupported language.
#[must_use]
pub fn detect_language() -> &'static LanguageDescriptor {
    sys_locale::get_locale()
        .as_deref()
        .map(primary_subtag)
        .and_then(find_language)
        .unwrap_or(default_language())
}

fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}
