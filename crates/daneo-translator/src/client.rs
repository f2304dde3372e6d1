use std::sync::Arc;

use daneo_config::translator::TranslatorConfig;

use crate::{GoogleTranslator, TranslationFailure, Translator};

/// Translation entry point used by the loader.
///
/// Never fails: any problem is turned into a Korean message that takes the
/// place of the translation.
#[derive(Clone)]
pub struct TranslationClient {
    translator: Option<Arc<dyn Translator>>,
    from_lang: String,
    to_lang: String,
}

impl TranslationClient {
    pub fn new(translator: Option<Arc<dyn Translator>>, from_lang: &str, to_lang: &str) -> Self {
        Self {
            translator,
            from_lang: from_lang.to_string(),
            to_lang: to_lang.to_string(),
        }
    }

    /// Google provider when a key is configured, otherwise a client that
    /// always answers with the missing-key message.
    pub fn from_config(config: &TranslatorConfig) -> Self {
        let translator: Option<Arc<dyn Translator>> = if config.api_key.is_empty() {
            tracing::warn!("Translation API key missing, translations will be unavailable");
            None
        } else {
            Some(Arc::new(GoogleTranslator::new(
                config.api_key.clone(),
                config.api_url.clone(),
            )))
        };

        if let Some(translator) = &translator {
            let metadata = translator.metadata();
            tracing::info!(
                "Translator: {} ({} -> {}, api key required: {})",
                metadata.name,
                config.from_lang,
                config.to_lang,
                metadata.requires_api_key
            );
        }

        Self::new(translator, &config.from_lang, &config.to_lang)
    }

    pub fn is_configured(&self) -> bool {
        self.translator.is_some()
    }

    pub async fn try_translate(&self, word: &str) -> Result<String, TranslationFailure> {
        let Some(translator) = &self.translator else {
            return Err(TranslationFailure::MissingKey);
        };

        match translator.translate(word, &self.from_lang, &self.to_lang).await {
            Ok(translation) => {
                tracing::debug!(
                    "{} translated '{}' ({} -> {})",
                    translation.provider,
                    word,
                    translation.from,
                    translation.to
                );
                Ok(translation.text)
            }
            Err(e) => {
                tracing::warn!("Translation of '{}' failed: {}", word, e);
                Err(TranslationFailure::classify(&e))
            }
        }
    }

    pub async fn translate(&self, word: &str) -> String {
        match self.try_translate(word).await {
            Ok(text) => text,
            Err(failure) => failure.user_message(),
        }
    }
}
