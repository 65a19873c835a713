//! Nested translation table with dotted-path resolution and interpolation.
//!
//! The table is built once from the embedded JSON dictionary and is read-only
//! afterwards. Leaf entries map locale codes to template strings; everything
//! above a leaf is namespace structure. Resolution never fails from the
//! caller's point of view: a missing or malformed entry logs a warning and
//! yields the dotted path itself so views always have something to render.

use crate::locales;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

const TRANSLATIONS_JSON: &str = include_str!("../i18n/translations.json");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    #[error("translation missing: {path}")]
    MissingKey { path: String },
    #[error("translation path addresses a namespace, not an entry: {path}")]
    NotALeaf { path: String },
}

/// A translation entry missing one or more registered locales, reported by
/// [`TranslationTable::coverage_gaps`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageGap {
    pub path: String,
    pub missing: Vec<&'static str>,
}

pub struct TranslationTable {
    root: Value,
}

impl TranslationTable {
    /// The dictionary compiled into the crate.
    #[must_use]
    pub fn builtin() -> Self {
        let root = serde_json::from_str(TRANSLATIONS_JSON).unwrap_or_else(|e| {
            log::error!("embedded translation dictionary failed to parse: {e}");
            Value::Object(serde_json::Map::new())
        });
        Self { root }
    }

    /// Build a table from caller-supplied JSON, for tools and tests.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not valid JSON or its top level is not
    /// an object.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        use serde::de::Error as _;
        let root: Value = serde_json::from_str(json)?;
        if !root.is_object() {
            return Err(serde_json::Error::custom(
                "translation dictionary root must be a JSON object",
            ));
        }
        Ok(Self { root })
    }

    /// Resolve `path` for `lang` without interpolation.
    #[must_use]
    pub fn resolve(&self, path: &str, lang: &str) -> String {
        self.resolve_with(path, lang, None)
    }

    /// Resolve `path` for `lang`, replacing `{key}` (and `{{key}}`)
    /// placeholders with values from `params`. Unmatched placeholders stay
    /// verbatim; unused params are ignored. A miss logs a warning and
    /// returns `path` unchanged.
    #[must_use]
    pub fn resolve_with(
        &self,
        path: &str,
        lang: &str,
        params: Option<&BTreeMap<&str, &str>>,
    ) -> String {
        match self.try_resolve(path, lang) {
            Ok(text) => interpolate(text.to_string(), params),
            Err(e) => {
                log::warn!("{e}");
                path.to_string()
            }
        }
    }

    /// Strict resolution used by the forgiving wrappers and by audit tools.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::MissingKey`] when a path segment is absent
    /// or the entry defines no usable string, and
    /// [`TranslationError::NotALeaf`] when the path stops at a namespace.
    pub fn try_resolve(&self, path: &str, lang: &str) -> Result<&str, TranslationError> {
        let node = self.lookup(path).ok_or_else(|| TranslationError::MissingKey {
            path: path.to_string(),
        })?;
        let entry = leaf_entry(node).ok_or_else(|| TranslationError::NotALeaf {
            path: path.to_string(),
        })?;
        entry
            .get(lang)
            .or_else(|| entry.get(locales::default_language().code))
            .and_then(Value::as_str)
            .ok_or_else(|| TranslationError::MissingKey {
                path: path.to_string(),
            })
    }

    /// Whether `path` addresses a leaf entry.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.lookup(path).and_then(leaf_entry).is_some()
    }

    /// Dotted paths of every leaf entry, in tree order.
    #[must_use]
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaves(&self.root, String::new(), &mut paths);
        paths
    }

    /// Entries that do not define a string for every registered locale.
    /// An empty result means the dictionary fully covers the registry.
    #[must_use]
    pub fn coverage_gaps(&self) -> Vec<CoverageGap> {
        let mut gaps = Vec::new();
        for path in self.leaf_paths() {
            let Some(entry) = self.lookup(&path).and_then(leaf_entry) else {
                continue;
            };
            let missing: Vec<&'static str> = locales::languages()
                .iter()
                .map(|l| l.code)
                .filter(|code| !entry.get(*code).is_some_and(Value::is_string))
                .collect();
            if !missing.is_empty() {
                gaps.push(CoverageGap { path, missing });
            }
        }
        gaps
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        let mut current = &self.root;
        for segment in path.split('.') {
            current = current.get(segment)?;
        }
        Some(current)
    }
}

/// A leaf entry is an object whose keys are all registered locale codes with
/// string values. Anything else is namespace structure.
fn leaf_entry(node: &Value) -> Option<&serde_json::Map<String, Value>> {
    let map = node.as_object()?;
    if map.is_empty() {
        return None;
    }
    let is_leaf = map
        .iter()
        .all(|(k, v)| locales::find_language(k).is_some() && v.is_string());
    is_leaf.then_some(map)
}

fn collect_leaves(node: &Value, prefix: String, out: &mut Vec<String>) {
    let Some(map) = node.as_object() else { return };
    if leaf_entry(node).is_some() {
        out.push(prefix);
        return;
    }
    for (key, child) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        collect_leaves(child, path, out);
    }
}

fn interpolate(mut text: String, params: Option<&BTreeMap<&str, &str>>) -> String {
    if let Some(args) = params {
        for (k, v) in args {
            let braced = format!("{{{{{k}}}}}");
            let single = format!("{{{k}}}");
            text = text.replace(&braced, v);
            text = text.replace(&single, v);
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TranslationTable {
        TranslationTable::builtin()
    }

    #[test]
    fn resolves_fixed_dictionary_entries() {
        let t = table();
        assert_eq!(t.resolve("navigation.dashboard", "en"), "Dashboard");
        assert_eq!(t.resolve("navigation.dashboard", "ar"), "لوحة التحكم");
    }

    #[test]
    fn missing_path_returns_path_verbatim() {
        let t = table();
        assert_eq!(t.resolve("does.not.exist", "en"), "does.not.exist");
        assert_eq!(
            t.try_resolve("does.not.exist", "en"),
            Err(TranslationError::MissingKey {
                path: "does.not.exist".to_string()
            })
        );
    }

    #[test]
    fn namespace_path_is_not_a_leaf() {
        let t = table();
        assert_eq!(t.resolve("navigation", "en"), "navigation");
        assert_eq!(
            t.try_resolve("navigation", "en"),
            Err(TranslationError::NotALeaf {
                path: "navigation".to_string()
            })
        );
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        let t = table();
        assert_eq!(t.resolve("common.save", "fr"), "Save");
    }

    #[test]
    fn entry_present_only_in_english_resolves_for_arabic() {
        let t = TranslationTable::from_json_str(r#"{"only": {"en": "English only"}}"#)
            .expect("valid JSON");
        assert_eq!(t.resolve("only", "ar"), "English only");
    }

    #[test]
    fn interpolation_replaces_each_occurrence() {
        let t = table();
        let mut params = BTreeMap::new();
        params.insert("field", "Email");
        assert_eq!(
            t.resolve_with("errors.required", "en", Some(&params)),
            "Email is required"
        );
        assert_eq!(
            t.resolve_with("errors.required", "ar", Some(&params)),
            "Email مطلوب"
        );
    }

    #[test]
    fn unmatched_placeholders_stay_verbatim() {
        let t = table();
        let mut params = BTreeMap::new();
        params.insert("unused", "value");
        assert_eq!(
            t.resolve_with("errors.required", "en", Some(&params)),
            "{field} is required"
        );
    }

    #[test]
    fn from_json_str_rejects_non_object_root() {
        assert!(TranslationTable::from_json_str("[1, 2]").is_err());
        assert!(TranslationTable::from_json_str("not json").is_err());
    }

    #[test]
    fn leaf_paths_are_dotted_and_nested() {
        let t = TranslationTable::from_json_str(
            r#"{"a": {"b": {"en": "x", "ar": "y"}, "c": {"en": "z", "ar": "w"}}}"#,
        )
        .expect("valid JSON");
        assert_eq!(t.leaf_paths(), vec!["a.b".to_string(), "a.c".to_string()]);
        assert!(t.contains("a.b"));
        assert!(!t.contains("a"));
    }

    #[test]
    fn coverage_gaps_report_missing_locales() {
        let t = TranslationTable::from_json_str(r#"{"partial": {"en": "only English"}}"#)
            .expect("valid JSON");
        let gaps = t.coverage_gaps();
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].path, "partial");
        assert_eq!(gaps[0].missing, vec!["ar"]);
    }
}
