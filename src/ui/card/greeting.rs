// SPDX-License-Identifier: MPL-2.0
//! Header text of the card: title, recipient and date.

use crate::config::GreetingConfig;
use crate::i18n::fluent::I18n;
use fluent_bundle::FluentValue;

/// Who and what the card celebrates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub recipient: String,
    pub age: u32,
    pub day: u32,
    pub month: u32,
}

impl Greeting {
    /// Builds the greeting from config, letting a CLI name take precedence.
    #[must_use]
    pub fn from_config(config: &GreetingConfig, name_override: Option<&str>) -> Self {
        let (day, month) = config.date_or_default();
        let recipient = name_override
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| config.recipient_or_default())
            .to_string();

        Self {
            recipient,
            age: config.age_or_default(),
            day,
            month,
        }
    }

    /// "Happy 21st Birthday!"
    #[must_use]
    pub fn title(&self, i18n: &I18n) -> String {
        let mut args = ordinal_args(self.age);
        args.push(("age", FluentValue::from(self.age)));
        i18n.tr_with_args("card-title", &args)
    }

    /// Recipient name, upper-cased like the printed card.
    #[must_use]
    pub fn recipient_line(&self) -> String {
        self.recipient.to_uppercase()
    }

    /// "24th of May"
    #[must_use]
    pub fn date_line(&self, i18n: &I18n) -> String {
        let mut args = ordinal_args(self.day);
        args.push(("day", FluentValue::from(self.day)));
        args.push(("month", FluentValue::from(self.month)));
        i18n.tr_with_args("card-date", &args)
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::from_config(&GreetingConfig::default(), None)
    }
}

/// Selector inputs for English-style ordinal suffixes.
///
/// Fluent has no arithmetic, so the last digit and the 11-13 exception are
/// computed here and the `.ftl` files pick the suffix.
fn ordinal_args(value: u32) -> Vec<(&'static str, FluentValue<'static>)> {
    let teen = (11..=13).contains(&(value % 100));
    vec![
        ("units", FluentValue::from(value % 10)),
        ("teen", FluentValue::from(if teen { "yes" } else { "no" })),
    ]
}
