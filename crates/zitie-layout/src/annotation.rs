//! Per-character annotation data (pinyin, stroke order)
//!
//! Pagination never depends on annotations. The caller owns an
//! [`AnnotationCache`] wrapping whatever [`AnnotationProvider`] it has, and
//! passes it to decoration; a missing entry only leaves the label empty.

use std::collections::HashMap;

use crate::types::*;

/// Annotation data for a single character
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Annotation {
    #[cfg_attr(feature = "serde", serde(alias = "pinyinWithTone"))]
    pub pinyin_with_tone: String,
    #[cfg_attr(feature = "serde", serde(alias = "pinyinWithoutTone"))]
    pub pinyin_without_tone: String,
    #[cfg_attr(feature = "serde", serde(alias = "isPolyphone"))]
    pub is_polyphone: bool,
    /// Stroke names in writing order (e.g. 点, 横, 竖)
    #[cfg_attr(feature = "serde", serde(alias = "strokeOrderNames"))]
    pub stroke_order_names: Vec<String>,
}

/// A source of annotation data, looked up one character at a time
pub trait AnnotationProvider {
    fn annotation(&self, character: &str) -> Option<Annotation>;
}

/// Provider that knows nothing; every lookup is absent
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAnnotations;

impl AnnotationProvider for NoAnnotations {
    fn annotation(&self, _character: &str) -> Option<Annotation> {
        None
    }
}

impl<P: AnnotationProvider + ?Sized> AnnotationProvider for &P {
    fn annotation(&self, character: &str) -> Option<Annotation> {
        (**self).annotation(character)
    }
}

/// In-memory annotation table, keyed by character
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AnnotationTable {
    entries: HashMap<String, Annotation>,
}

impl AnnotationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, character: impl Into<String>, annotation: Annotation) {
        self.entries.insert(character.into(), annotation);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a table from JSON of the form `{ "永": { "pinyin_with_tone": "yǒng", ... } }`
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| SheetError::Config(format!("Failed to parse annotations: {}", e)))
    }

    /// Load a table from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = tokio::fs::read_to_string(path).await?;
        let table = tokio::task::spawn_blocking(move || Self::from_json(&text)).await??;
        log::debug!("Loaded {} annotation entries", table.len());
        Ok(table)
    }
}

impl FromIterator<(String, Annotation)> for AnnotationTable {
    fn from_iter<I: IntoIterator<Item = (String, Annotation)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl AnnotationProvider for AnnotationTable {
    fn annotation(&self, character: &str) -> Option<Annotation> {
        self.entries.get(character).cloned()
    }
}

/// Caller-owned memo of annotation lookups.
///
/// Absent results are cached as well, so a provider is asked at most once
/// per character until the entry is invalidated.
#[derive(Debug)]
pub struct AnnotationCache<P> {
    provider: P,
    entries: HashMap<String, Option<Annotation>>,
}

impl<P: AnnotationProvider> AnnotationCache<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            entries: HashMap::new(),
        }
    }

    /// Look up `character`, asking the provider on a miss.
    pub fn get(&mut self, character: &str) -> Option<&Annotation> {
        if self.entries.contains_key(character) {
            log::trace!("Annotation cache hit for {:?}", character);
        } else {
            log::trace!("Annotation cache miss for {:?}", character);
            let looked_up = self.provider.annotation(character);
            self.entries.insert(character.to_string(), looked_up);
        }

        self.entries.get(character).and_then(Option::as_ref)
    }

    /// Drop cached entries for the given characters
    pub fn invalidate<S: AsRef<str>>(&mut self, characters: &[S]) {
        for character in characters {
            self.entries.remove(character.as_ref());
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached lookups, absent ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl Default for AnnotationCache<NoAnnotations> {
    fn default() -> Self {
        Self::new(NoAnnotations)
    }
}

/// Pinyin text shown above a character, or "" when there is none
pub fn pinyin_label(annotation: Option<&Annotation>, with_tone: bool) -> &str {
    match annotation {
        Some(a) if with_tone => &a.pinyin_with_tone,
        Some(a) => &a.pinyin_without_tone,
        None => "",
    }
}

/// Pinyin label for a character, looked up through the cache
pub fn pinyin_for<P: AnnotationProvider>(
    cache: &mut AnnotationCache<P>,
    character: &str,
    with_tone: bool,
) -> String {
    if is_space_sentinel(character) {
        return String::new();
    }
    pinyin_label(cache.get(character), with_tone).to_string()
}
