use super::locale::Locale;
use crate::conservation::model::{Dataset, DatasetCode, DatasetError, DatasetTable};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

const EN: &str = include_str!("../../messages/en.json");
const PT: &str = include_str!("../../messages/pt.json");

fn catalog_source(locale: Locale) -> &'static str {
    match locale {
        Locale::En => EN,
        Locale::Pt => PT,
    }
}

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("catalog for {locale} is not valid JSON: {source}")]
    Parse {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
    #[error("no message for key {0}")]
    MissingKey(String),
    #[error("message {key} has an unexpected shape: {source}")]
    Shape {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Messages for one locale, with the default locale behind it for keys the
/// translation has not caught up with.
#[derive(Debug, Clone, PartialEq)]
pub struct Messages {
    locale: Locale,
    tree: Value,
    fallback: Option<Value>,
}

impl Messages {
    pub fn parse(locale: Locale, source: &str) -> Result<Self, I18nError> {
        let tree = serde_json::from_str(source).map_err(|source| I18nError::Parse { locale, source })?;
        Ok(Self { locale, tree, fallback: None })
    }

    pub fn load(locale: Locale) -> Result<Self, I18nError> {
        let mut messages = Self::parse(locale, catalog_source(locale))?;
        let default = Locale::default();
        if locale != default {
            let fallback = Self::parse(default, catalog_source(default))?;
            let own = messages.leaf_keys();
            let missing = fallback.leaf_keys().into_iter().filter(|key| !own.contains(key)).count();
            if missing > 0 {
                log::warn!("{} catalog is missing {} keys, using {} for them", locale, missing, default);
            }
            messages.fallback = Some(fallback.tree);
        }
        Ok(messages)
    }

    /// Like [`Messages::load`], but an unreadable catalog degrades to one that
    /// echoes keys back.
    pub fn load_or_empty(locale: Locale) -> Self {
        Self::load(locale).unwrap_or_else(|e| {
            log::error!("{}", e);
            Self { locale, tree: Value::Null, fallback: None }
        })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        fn find<'a>(tree: &'a Value, key: &str) -> Option<&'a Value> {
            key.split('.').try_fold(tree, |node, segment| node.get(segment))
        }
        find(&self.tree, key).or_else(|| self.fallback.as_ref().and_then(|tree| find(tree, key)))
    }

    /// The message for a dotted key. A missing key is returned verbatim so the
    /// gap shows up on the page.
    pub fn translate(&self, key: &str) -> String {
        match self.lookup(key).and_then(Value::as_str) {
            Some(message) => message.to_string(),
            None => {
                log::warn!("missing {} translation for {}", self.locale, key);
                key.to_string()
            }
        }
    }

    pub fn raw<T: DeserializeOwned>(&self, key: &str) -> Result<T, I18nError> {
        let value = self
            .lookup(key)
            .ok_or_else(|| I18nError::MissingKey(key.to_string()))?;
        T::deserialize(value).map_err(|source| I18nError::Shape {
            key: key.to_string(),
            source,
        })
    }

    /// A dataset table from `barChart.datasets.<code>`, validated.
    pub fn dataset(&self, code: DatasetCode) -> Result<Dataset, I18nError> {
        let table: DatasetTable = self.raw(&format!("barChart.datasets.{}", code))?;
        Ok(Dataset::from_table(code, table)?)
    }

    /// Dotted paths of every string leaf in this locale's own catalog.
    pub fn leaf_keys(&self) -> Vec<String> {
        fn walk(prefix: &str, node: &Value, out: &mut Vec<String>) {
            match node {
                Value::Object(map) => {
                    for (name, child) in map {
                        let path = if prefix.is_empty() {
                            name.clone()
                        } else {
                            format!("{}.{}", prefix, name)
                        };
                        walk(&path, child, out);
                    }
                }
                Value::String(_) => out.push(prefix.to_string()),
                _ => {}
            }
        }
        let mut keys = Vec::new();
        walk("", &self.tree, &mut keys);
        keys.sort();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conservation::chart::{bar_height, visible_records, zero_records};
    use crate::conservation::model::Acronym;
    use crate::i18n::locale::SUPPORTED_LOCALES;

    #[test]
    fn every_catalog_parses() {
        for locale in SUPPORTED_LOCALES {
            let messages = Messages::load(*locale).unwrap();
            assert_eq!(messages.locale(), *locale);
            assert!(!messages.leaf_keys().is_empty());
        }
    }

    #[test]
    fn every_locale_covers_the_default_catalog() {
        let default_keys = Messages::load(Locale::En).unwrap().leaf_keys();
        for locale in SUPPORTED_LOCALES {
            let keys = Messages::load(*locale).unwrap().leaf_keys();
            let missing: Vec<&String> = default_keys.iter().filter(|k| !keys.contains(k)).collect();
            assert!(missing.is_empty(), "{} is missing {:?}", locale, missing);
        }
    }

    #[test]
    fn every_dataset_validates_in_every_locale() {
        for locale in SUPPORTED_LOCALES {
            let messages = Messages::load(*locale).unwrap();
            for code in DatasetCode::ALL {
                let dataset = messages.dataset(code).unwrap();
                assert_eq!(visible_records(&dataset).len(), 5, "{} {}", locale, code);
            }
        }
    }

    #[test]
    fn l1_counts_match_the_published_table() {
        let dataset = Messages::load(Locale::En).unwrap().dataset(DatasetCode::L1).unwrap();
        let counts: Vec<(Acronym, u32)> = visible_records(&dataset)
            .iter()
            .map(|v| (v.record.acronym, v.record.count))
            .collect();
        assert_eq!(
            counts,
            vec![
                (Acronym::Lc, 634),
                (Acronym::Nt, 35),
                (Acronym::Vu, 18),
                (Acronym::En, 7),
                (Acronym::Cr, 2)
            ]
        );
        let visible = visible_records(&dataset);
        assert_eq!(bar_height(visible[4].record, &visible), 0.32);
        assert_eq!(zero_records(&dataset).len(), 4);
    }

    #[test]
    fn translates_nested_keys() {
        let messages = Messages::load(Locale::En).unwrap();
        assert_eq!(messages.translate("nav.brand"), "Amazon Birds");
        assert_eq!(
            messages.translate("barChart.datasets.L3.description"),
            "Species must be captured by two or more of the models"
        );
    }

    #[test]
    fn missing_key_echoes_the_key() {
        let messages = Messages::load(Locale::Pt).unwrap();
        assert_eq!(messages.translate("hero.nope"), "hero.nope");
        assert!(matches!(messages.raw::<String>("hero.nope"), Err(I18nError::MissingKey(_))));
    }

    #[test]
    fn falls_back_to_the_default_locale() {
        let mut messages = Messages::parse(Locale::Pt, r#"{"hero":{"title":"Floresta"}}"#).unwrap();
        messages.fallback = Some(serde_json::json!({"hero": {"title": "Forest", "subtitle": "Birds"}}));
        assert_eq!(messages.translate("hero.title"), "Floresta");
        assert_eq!(messages.translate("hero.subtitle"), "Birds");
    }

    #[test]
    fn wrong_shape_is_reported() {
        let messages = Messages::load(Locale::En).unwrap();
        assert!(matches!(messages.raw::<u32>("nav.brand"), Err(I18nError::Shape { .. })));
    }

    #[test]
    fn malformed_dataset_table_is_rejected() {
        let messages = Messages::parse(
            Locale::En,
            r#"{"barChart":{"datasets":{"L1":{"description":"x","data":[
                {"acronym":"LC","status":"Least Concern","count":1,"percentage":"100%"}
            ]}}}}"#,
        )
        .unwrap();
        assert!(matches!(messages.dataset(DatasetCode::L1), Err(I18nError::Dataset(_))));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(matches!(
            Messages::parse(Locale::En, "{ not json"),
            Err(I18nError::Parse { locale: Locale::En, .. })
        ));
    }
}
