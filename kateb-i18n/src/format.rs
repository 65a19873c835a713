//! Locale-aware number and date formatting.
//!
//! Numbers use the grouping and decimal symbols of the active descriptor;
//! no numeral transliteration happens unless the caller opts in through
//! [`to_arabic_indic`]. Month and weekday names come from the translation
//! dictionary, so dates localize through the same table as every other
//! display string.

use crate::locales::{DateOrder, LanguageDescriptor};
use crate::table::TranslationTable;
use chrono::{Datelike, NaiveDate};

/// Numeric rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStyle {
    #[default]
    Decimal,
    /// Multiplies by 100 and appends the locale percent sign.
    Percent,
    /// US dollars with the locale currency affix.
    Currency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NumberOptions {
    pub style: NumberStyle,
    pub minimum_fraction_digits: usize,
    pub maximum_fraction_digits: usize,
    pub use_grouping: bool,
}

impl Default for NumberOptions {
    /// Matches the host-platform default: up to three fraction digits,
    /// grouping on.
    fn default() -> Self {
        Self {
            style: NumberStyle::Decimal,
            minimum_fraction_digits: 0,
            maximum_fraction_digits: 3,
            use_grouping: true,
        }
    }
}

impl NumberOptions {
    #[must_use]
    pub fn percent() -> Self {
        Self {
            style: NumberStyle::Percent,
            maximum_fraction_digits: 0,
            ..Self::default()
        }
    }

    /// Two fixed fraction digits, as currency displays expect.
    #[must_use]
    pub fn currency() -> Self {
        Self {
            style: NumberStyle::Currency,
            minimum_fraction_digits: 2,
            maximum_fraction_digits: 2,
            ..Self::default()
        }
    }
}

/// Format `value` with the descriptor's numeric symbols.
#[must_use]
pub fn format_number(descriptor: &LanguageDescriptor, value: f64, opts: &NumberOptions) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let scaled = match opts.style {
        NumberStyle::Percent => value * 100.0,
        NumberStyle::Decimal | NumberStyle::Currency => value,
    };

    let max = opts.maximum_fraction_digits.max(opts.minimum_fraction_digits);
    let rendered = format!("{:.max$}", scaled.abs());
    let (int_part, frac_part) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), ""));

    let mut frac = frac_part.trim_end_matches('0').to_string();
    while frac.len() < opts.minimum_fraction_digits {
        frac.push('0');
    }

    let mut out = String::new();
    if scaled < 0.0 && (int_part.bytes().any(|b| b != b'0') || frac.bytes().any(|b| b != b'0')) {
        out.push('-');
    }
    if opts.use_grouping {
        push_grouped(&mut out, int_part, descriptor.numbers.group);
    } else {
        out.push_str(int_part);
    }
    if !frac.is_empty() {
        out.push(descriptor.numbers.decimal);
        out.push_str(&frac);
    }

    match opts.style {
        NumberStyle::Decimal => out,
        NumberStyle::Percent => format!("{out}{}", descriptor.numbers.percent),
        NumberStyle::Currency => format!(
            "{}{out}{}",
            descriptor.numbers.currency_prefix, descriptor.numbers.currency_suffix
        ),
    }
}

fn push_grouped(out: &mut String, digits: &str, sep: char) {
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
}

/// Explicit opt-in transform of Western digits to Arabic-Indic numerals.
/// Formatting never applies this automatically.
#[must_use]
pub fn to_arabic_indic(text: &str) -> String {
    const DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];
    text.chars()
        .map(|ch| match ch.to_digit(10) {
            Some(d) if ch.is_ascii_digit() => DIGITS[d as usize],
            _ => ch,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthStyle {
    /// Full month name from the dictionary.
    #[default]
    Long,
    /// `M/D/YYYY` or `D/M/YYYY` depending on the locale's field order.
    Numeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayStyle {
    Long,
    Short,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct DateOptions {
    pub month: MonthStyle,
    pub weekday: Option<WeekdayStyle>,
}

const MONTH_KEYS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

// Sunday-first, matching the dashboard's calendar grid.
const WEEKDAY_KEYS: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// Format a calendar date. Long style renders `January 15, 2024` for
/// month-first locales and `15 يناير 2024` for day-first ones; the optional
/// weekday is prefixed with the locale comma.
#[must_use]
pub fn format_date(
    table: &TranslationTable,
    descriptor: &LanguageDescriptor,
    date: NaiveDate,
    opts: &DateOptions,
) -> String {
    let day = date.day();
    let year = date.year();
    let body = match opts.month {
        MonthStyle::Numeric => match descriptor.date_order {
            DateOrder::MonthFirst => format!("{}/{day}/{year}", date.month()),
            DateOrder::DayFirst => format!("{day}/{}/{year}", date.month()),
        },
        MonthStyle::Long => {
            let month = month_name(table, descriptor, date.month0() as usize);
            match descriptor.date_order {
                DateOrder::MonthFirst => format!("{month} {day}, {year}"),
                DateOrder::DayFirst => format!("{day} {month} {year}"),
            }
        }
    };
    match opts.weekday {
        None => body,
        Some(style) => {
            let index = date.weekday().num_days_from_sunday() as usize;
            let name = weekday_name(table, descriptor, index, style);
            format!("{name}{} {body}", descriptor.comma)
        }
    }
}

/// The seven localized day names, Sunday first.
#[must_use]
pub fn day_names(
    table: &TranslationTable,
    descriptor: &LanguageDescriptor,
    style: WeekdayStyle,
) -> Vec<String> {
    (0..7)
        .map(|i| weekday_name(table, descriptor, i, style))
        .collect()
}

/// The twelve localized month names, January first.
#[must_use]
pub fn month_names(table: &TranslationTable, descriptor: &LanguageDescriptor) -> Vec<String> {
    (0..12).map(|i| month_name(table, descriptor, i)).collect()
}

fn month_name(table: &TranslationTable, descriptor: &LanguageDescriptor, index: usize) -> String {
    table.resolve(&format!("months.{}", MONTH_KEYS[index]), descriptor.code)
}

fn weekday_name(
    table: &TranslationTable,
    descriptor: &LanguageDescriptor,
    index: usize,
    style: WeekdayStyle,
) -> String {
    let section = match style {
        WeekdayStyle::Long => "weekDaysFull",
        WeekdayStyle::Short => "weekDays",
    };
    table.resolve(&format!("{section}.{}", WEEKDAY_KEYS[index]), descriptor.code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locales::find_language;

    fn en() -> &'static LanguageDescriptor {
        find_language("en").unwrap()
    }

    fn ar() -> &'static LanguageDescriptor {
        find_language("ar").unwrap()
    }

    #[test]
    fn grouping_and_fraction_trimming() {
        let opts = NumberOptions::default();
        assert_eq!(format_number(en(), 1_234_567.5, &opts), "1,234,567.5");
        assert_eq!(format_number(en(), 12.5, &opts), "12.5");
        assert_eq!(format_number(en(), 45.0, &opts), "45");
        assert_eq!(format_number(en(), 0.12345, &opts), "0.123");
    }

    #[test]
    fn arabic_symbols_without_digit_transliteration() {
        let opts = NumberOptions::default();
        assert_eq!(format_number(ar(), 1234.5, &opts), "1٬234٫5");
    }

    #[test]
    fn percent_and_currency_styles() {
        assert_eq!(format_number(en(), 0.45, &NumberOptions::percent()), "45%");
        assert_eq!(format_number(ar(), 0.45, &NumberOptions::percent()), "45٪");
        assert_eq!(
            format_number(en(), 1234.5, &NumberOptions::currency()),
            "$1,234.50"
        );
        assert_eq!(
            format_number(ar(), 9.99, &NumberOptions::currency()),
            "9٫99 US$"
        );
    }

    #[test]
    fn negative_and_degenerate_values() {
        let opts = NumberOptions::default();
        assert_eq!(format_number(en(), -1234.5, &opts), "-1,234.5");
        // Rounds to zero: no stray sign.
        let tight = NumberOptions {
            maximum_fraction_digits: 1,
            ..NumberOptions::default()
        };
        assert_eq!(format_number(en(), -0.01, &tight), "0");
        assert_eq!(format_number(en(), f64::NAN, &opts), "NaN");
    }

    #[test]
    fn arabic_indic_is_opt_in() {
        assert_eq!(to_arabic_indic("42"), "٤٢");
        assert_eq!(to_arabic_indic("غرفة 101"), "غرفة ١٠١");
        assert_eq!(to_arabic_indic("abc"), "abc");
    }

    #[test]
    fn long_dates_follow_locale_field_order() {
        let table = TranslationTable::builtin();
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let opts = DateOptions::default();
        assert_eq!(format_date(&table, en(), date, &opts), "January 15, 2024");
        assert_eq!(format_date(&table, ar(), date, &opts), "15 يناير 2024");
    }

    #[test]
    fn numeric_dates_and_weekday_prefix() {
        let table = TranslationTable::builtin();
        // 2024-01-15 is a Monday.
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let numeric = DateOptions {
            month: MonthStyle::Numeric,
            weekday: None,
        };
        assert_eq!(format_date(&table, en(), date, &numeric), "1/15/2024");
        assert_eq!(format_date(&table, ar(), date, &numeric), "15/1/2024");

        let with_weekday = DateOptions {
            month: MonthStyle::Long,
            weekday: Some(WeekdayStyle::Long),
        };
        assert_eq!(
            format_date(&table, en(), date, &with_weekday),
            "Monday, January 15, 2024"
        );
        assert_eq!(
            format_date(&table, ar(), date, &with_weekday),
            "الاثنين، 15 يناير 2024"
        );
    }

    #[test]
    fn name_lists_are_localized() {
        let table = TranslationTable::builtin();
        let days = day_names(&table, ar(), WeekdayStyle::Short);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], "أحد");
        let months = month_names(&table, en());
        assert_eq!(months[11], "December");
    }
}
