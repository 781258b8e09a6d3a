//! Suggestion assembly over a remote translation provider.

use super::cache::TranslationCache;
use super::{synonyms, Language, Suggestion, MAX_SUGGESTIONS};
use crate::error::LookupError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Minimum input length (after trimming) worth looking up.
const MIN_LOOKUP_LEN: usize = 2;

/// A remote translation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub text: String,
    pub source_language_code: String,
    pub target_language_code: String,
}

impl TranslationRequest {
    pub fn new(text: &str, from: Language, to: Language) -> Self {
        Self {
            text: text.to_string(),
            source_language_code: from.code().to_string(),
            target_language_code: to.code().to_string(),
        }
    }
}

/// One translation returned by the remote endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslatedText {
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct TranslationResponse {
    translations: Vec<TranslatedText>,
}

/// The remote lookup contract. Implementations own the transport.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<Vec<TranslatedText>, LookupError>;
}

/// Provider posting JSON to a translate endpoint and reading
/// `{ "translations": [{ "text": ... }] }` back.
pub struct HttpTranslationProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpTranslationProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

#[async_trait]
impl TranslationProvider for HttpTranslationProvider {
    async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<Vec<TranslatedText>, LookupError> {
        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.header("Authorization", format!("Api-Key {key}"));
        }
        let response = builder.send().await?;
        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }
        let body: TranslationResponse = response.json().await?;
        Ok(body.translations)
    }
}

/// Assembles suggestion lists from the provider, the cache, and the static
/// synonym table.
pub struct SuggestionService<P> {
    provider: P,
    cache: TranslationCache,
}

impl<P: TranslationProvider> SuggestionService<P> {
    pub fn new(provider: P, cache: TranslationCache) -> Self {
        Self { provider, cache }
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// Drop all cached lookups.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Get up to [`MAX_SUGGESTIONS`] candidate translations for `text`.
    ///
    /// The primary lookup result (cached or remote) comes first with
    /// confidence 1.0. When it is non-empty, up to four lower-confidence
    /// synonym variants are appended. When it is empty — including every
    /// transport failure — the result is empty and the synonym table is not
    /// consulted.
    pub async fn suggestions(
        &mut self,
        text: &str,
        from: Language,
        to: Language,
    ) -> Vec<Suggestion> {
        let text = text.trim();
        if text.chars().count() < MIN_LOOKUP_LEN {
            return Vec::new();
        }

        let mut suggestions = self.primary(text, from, to).await;
        if suggestions.is_empty() {
            return suggestions;
        }

        for variant in synonyms::variants(&text.to_lowercase(), from, to) {
            suggestions.push(Suggestion::variant(variant.to_string()));
        }
        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }

    /// The direct lookup result: cache hit, or a remote call whose result
    /// (even an empty one) is cached.
    async fn primary(&mut self, text: &str, from: Language, to: Language) -> Vec<Suggestion> {
        if let Some(hit) = self.cache.get(text, from, to) {
            return hit.to_vec();
        }

        let request = TranslationRequest::new(text, from, to);
        match self.provider.translate(request).await {
            Ok(translations) => {
                let suggestions: Vec<Suggestion> = translations
                    .into_iter()
                    .map(|t| Suggestion::primary(t.text))
                    .collect();
                self.cache.put(text, from, to, suggestions.clone());
                suggestions
            }
            Err(err) => {
                warn!(error = %err, text, "translation lookup failed, returning no suggestions");
                Vec::new()
            }
        }
    }
}
