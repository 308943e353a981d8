// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::{langid, LanguageIdentifier};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: LanguageIdentifier = langid!("en-US");

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current_locale", &self.current_locale)
            .field("available_locales", &self.available_locales)
            .finish_non_exhaustive()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((_, errors)) => {
                    tracing::warn!(%locale, ?errors, "skipping unparsable translation file");
                    continue;
                }
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Iced renders the FSI/PDI isolation marks as visible glyphs.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(%locale, ?errors, "translation file has conflicting entries");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(DEFAULT_LOCALE);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, FluentValue<'_>)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.clone());
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
                tracing::debug!(key, ?errors, "translation formatting failed");
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let pick = |raw: &str| match_available(raw, available);

    // 1. CLI args
    if let Some(lang) = cli_lang.as_deref().and_then(pick) {
        return Some(lang);
    }

    // 2. Config file
    if let Some(lang) = config.general.language.as_deref().and_then(pick) {
        return Some(lang);
    }

    // 3. OS locale
    sys_locale::get_locale().as_deref().and_then(pick)
}

/// Matches `raw` against the shipped locales: the exact tag first, then any
/// locale with the same language subtag (`fr-FR` finds `fr`).
fn match_available(raw: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let requested = raw.parse::<LanguageIdentifier>().ok()?;
    if available.contains(&requested) {
        return Some(requested);
    }
    available
        .iter()
        .find(|lang| lang.language == requested.language)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec![langid!("en-US"), langid!("fr")]
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn resolve_locale_uses_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn resolve_locale_skips_unavailable_cli_value() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("xx-YY".to_string()), &config, &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert!(i18n.available_locales.contains(&langid!("en-US")));
        assert!(i18n.available_locales.contains(&langid!("fr")));
        assert_eq!(i18n.current_locale(), &langid!("en-US"));
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn regional_tags_fall_back_to_language() {
        assert_eq!(match_available("fr-FR", &available()), Some(langid!("fr")));
        assert_eq!(match_available("fr_CA", &available()), Some(langid!("fr")));
        assert_eq!(match_available("en-GB", &available()), Some(langid!("en-US")));
        assert_eq!(match_available("en-US", &available()), Some(langid!("en-US")));
        assert_eq!(match_available("de-DE", &available()), None);
        assert_eq!(match_available("not a locale", &available()), None);
    }

    #[test]
    fn regional_config_language_selects_shipped_bundle() {
        let mut config = Config::default();
        config.general.language = Some("fr-BE".to_string());
        let i18n = I18n::new(None, &config);
        assert_eq!(i18n.current_locale(), &langid!("fr"));
        assert_eq!(i18n.tr("window-title"), "Joyeux anniversaire !");
    }
}
