// Locale context: the current language, the currency derived from it, and the
// translation and currency formatting every page goes through.
//
// There is no global. A LocaleProvider owns the context and hands out cloned
// LocaleHandles; toggle_language is the only write path.
pub mod format;

use std::sync::{Arc, PoisonError, RwLock};

use shared::models::{Currency, Language};

use crate::config::EngineSettings;
use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocaleContext {
    language: Language,
    czk_per_usd: f64,
}

impl LocaleContext {
    pub fn new(language: Language, czk_per_usd: f64) -> Self {
        Self { language, czk_per_usd }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Always derived from the language; there is no setter.
    pub fn currency(&self) -> Currency {
        self.language.currency()
    }

    pub fn translate<'a>(&self, en: &'a str, cz: &'a str) -> &'a str {
        match self.language {
            Language::En => en,
            Language::Cz => cz,
        }
    }

    /// Converts a USD amount into the current currency without rounding.
    pub fn convert(&self, amount_usd: f64) -> f64 {
        match self.currency() {
            Currency::Usd => amount_usd,
            Currency::Czk => amount_usd * self.czk_per_usd,
        }
    }

    pub fn format_currency(&self, amount_usd: f64) -> String {
        format::format_money(self.convert(amount_usd), self.currency())
    }

    pub fn format_count(&self, value: f64) -> String {
        format::format_count(value, self.language)
    }

    pub fn format_percent(&self, value: f64, decimals: usize) -> String {
        format::format_percent(value, decimals, self.language)
    }

    fn toggle(&mut self) {
        self.language = self.language.toggled();
    }
}

/// Shared, cloneable access to one locale context.
#[derive(Debug, Clone)]
pub struct LocaleHandle {
    inner: Arc<RwLock<LocaleContext>>,
}

impl LocaleHandle {
    pub fn new(context: LocaleContext) -> Self {
        Self { inner: Arc::new(RwLock::new(context)) }
    }

    /// Copies the current state. A render pass should take one snapshot and
    /// format everything from it so the pass sees a single language.
    pub fn snapshot(&self) -> LocaleContext {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Flips EN <-> CZ. Every read that starts after this returns observes the
    /// new language and currency together.
    pub fn toggle_language(&self) {
        let mut context = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        context.toggle();
        tracing::info!(
            language = context.language().code(),
            currency = context.currency().code(),
            "Toggled display language"
        );
    }

    pub fn language(&self) -> Language {
        self.snapshot().language()
    }

    pub fn currency(&self) -> Currency {
        self.snapshot().currency()
    }

    pub fn translate<'a>(&self, en: &'a str, cz: &'a str) -> &'a str {
        self.snapshot().translate(en, cz)
    }

    pub fn format_currency(&self, amount_usd: f64) -> String {
        self.snapshot().format_currency(amount_usd)
    }
}

/// Owner of the locale context. Consumers acquire a handle with
/// [`LocaleProvider::use_locale`], which fails immediately when no context was
/// installed.
#[derive(Debug, Clone, Default)]
pub struct LocaleProvider {
    handle: Option<LocaleHandle>,
}

impl LocaleProvider {
    pub fn new(language: Language, czk_per_usd: f64) -> Self {
        Self {
            handle: Some(LocaleHandle::new(LocaleContext::new(language, czk_per_usd))),
        }
    }

    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self::new(settings.default_language, settings.czk_per_usd)
    }

    /// A provider with nothing installed. Only useful to exercise the failure path.
    pub fn uninitialized() -> Self {
        Self::default()
    }

    pub fn use_locale(&self) -> Result<LocaleHandle, EngineError> {
        self.handle.clone().ok_or(EngineError::LocaleUnavailable)
    }

    /// Translation for callers that cannot propagate an error. Without a
    /// context the primary string is returned and the wiring bug is logged.
    pub fn translate<'a>(&self, en: &'a str, cz: &'a str) -> &'a str {
        match &self.handle {
            Some(handle) => handle.translate(en, cz),
            None => {
                tracing::error!(error = %EngineError::LocaleUnavailable, "Falling back to primary string");
                en
            }
        }
    }
}
