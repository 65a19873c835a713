//! Dictionary coverage audit: every entry must translate into every
//! registered locale, so a newly added language fails here instead of
//! falling back silently at runtime.

use kateb_i18n::{TranslationTable, languages};
use serde_json::Value;

fn dictionary() -> Value {
    let content =
        std::fs::read_to_string("i18n/translations.json").expect("failed to read dictionary");
    serde_json::from_str(&content).expect("failed to parse dictionary JSON")
}

#[test]
fn every_entry_covers_every_locale() {
    let table = TranslationTable::builtin();
    let gaps = table.coverage_gaps();
    assert!(
        gaps.is_empty(),
        "entries missing locales: {}",
        gaps.iter()
            .map(|g| format!("{} ({})", g.path, g.missing.join(", ")))
            .collect::<Vec<_>>()
            .join("; ")
    );
}

#[test]
fn required_ui_keys_are_present() {
    let table = TranslationTable::builtin();
    let required_keys = [
        "common.loading",
        "common.save",
        "common.cancel",
        "common.language",
        "navigation.dashboard",
        "navigation.calendar",
        "navigation.tasks",
        "navigation.communications",
        "navigation.meetings",
        "navigation.reports",
        "navigation.settings",
        "pages.dashboard.title",
        "pages.login.title",
        "pages.login.signIn",
        "errors.required",
        "errors.invalidCredentials",
        "success.saved",
    ];
    for key in required_keys {
        assert!(table.contains(key), "missing key '{key}'");
    }
    for section in ["weekDays", "weekDaysFull"] {
        for day in [
            "sunday",
            "monday",
            "tuesday",
            "wednesday",
            "thursday",
            "friday",
            "saturday",
        ] {
            assert!(
                table.contains(&format!("{section}.{day}")),
                "missing key '{section}.{day}'"
            );
        }
    }
}

#[test]
fn interpolation_structure_is_present() {
    let json = dictionary();

    let required = json
        .get("errors")
        .and_then(|e| e.get("required"))
        .and_then(|r| r.get("en"))
        .and_then(Value::as_str)
        .expect("missing errors.required");
    assert!(
        required.contains("{field}"),
        "errors.required should have a field placeholder"
    );

    let length = json
        .get("errors")
        .and_then(|e| e.get("passwordLength"))
        .and_then(|r| r.get("ar"))
        .and_then(Value::as_str)
        .expect("missing errors.passwordLength");
    assert!(
        length.contains("{length}"),
        "errors.passwordLength should have a length placeholder"
    );
}

#[test]
fn leaf_entries_use_only_registered_locale_codes() {
    let json = dictionary();
    let codes: Vec<&str> = languages().iter().map(|l| l.code).collect();
    let mut stack = vec![(String::new(), &json)];
    while let Some((path, node)) = stack.pop() {
        let Some(map) = node.as_object() else { continue };
        let is_leaf = map.values().all(Value::is_string);
        if is_leaf {
            for key in map.keys() {
                assert!(
                    codes.contains(&key.as_str()),
                    "entry '{path}' uses unregistered locale '{key}'"
                );
            }
        } else {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                stack.push((child_path, child));
            }
        }
    }
}
