//! Form state behind the code generator.
//!
//! Text edits are debounced before a preview is produced. Type switches,
//! customization changes and scanned imports preview right away.

use std::time::{Duration, Instant};

use crate::classify::classify;
use crate::types::{
    AppConfig, Content, ContentType, Customization, FieldError, RecordDraft, RecordName,
};

/// Trailing-edge debounce driven by caller-supplied instants.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending_since: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending_since: None,
        }
    }

    /// Records an event, restarting the quiet period.
    pub fn touch(&mut self, now: Instant) {
        self.pending_since = Some(now);
    }

    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// True once the quiet period after the last event has elapsed.
    pub fn is_ready(&self, now: Instant) -> bool {
        self.pending_since
            .is_some_and(|since| now.saturating_duration_since(since) >= self.delay)
    }

    pub fn clear(&mut self) {
        self.pending_since = None;
    }
}

/// What the preview pane should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRequest {
    pub payload: String,
    pub customization: Customization,
}

#[derive(Debug, Clone)]
pub struct Generator {
    content: Content,
    customization: Customization,
    debounce: Debouncer,
    immediate: bool,
}

impl Generator {
    pub fn new(customization: Customization, debounce: Duration) -> Self {
        Self {
            content: Content::default(),
            customization,
            debounce: Debouncer::new(debounce),
            immediate: false,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.defaults.customization(), config.generator.debounce())
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn content_type(&self) -> ContentType {
        self.content.content_type()
    }

    pub fn customization(&self) -> &Customization {
        &self.customization
    }

    /// Switches to a blank form of `content_type`.
    pub fn select_type(&mut self, content_type: ContentType) {
        self.content = Content::empty(content_type);
        self.debounce.clear();
        self.immediate = true;
    }

    pub fn set_field(&mut self, field: &str, value: &str, now: Instant) -> Result<(), FieldError> {
        self.content.set_field(field, value)?;
        self.debounce.touch(now);
        Ok(())
    }

    pub fn set_customization(&mut self, customization: Customization) {
        self.customization = customization;
        self.immediate = true;
    }

    /// Replaces type and form with the best guess for scanned text.
    pub fn load_scanned(&mut self, text: &str) {
        self.content = classify(text);
        self.debounce.clear();
        self.immediate = true;
    }

    /// Current payload, recomputed from the form.
    pub fn payload(&self) -> String {
        self.content.payload()
    }

    /// Returns a preview when a change has settled. An empty payload clears
    /// the pending change without producing a preview.
    pub fn take_preview(&mut self, now: Instant) -> Option<PreviewRequest> {
        if !self.immediate && !self.debounce.is_ready(now) {
            return None;
        }
        self.immediate = false;
        self.debounce.clear();

        let payload = self.payload();
        if payload.is_empty() {
            return None;
        }

        Some(PreviewRequest {
            payload,
            customization: self.customization.clone(),
        })
    }

    /// A save request for the current form, or `None` while the payload is
    /// empty.
    pub fn draft(&self, name: Option<RecordName>) -> Option<RecordDraft> {
        let payload = self.payload();
        if payload.is_empty() {
            return None;
        }

        Some(RecordDraft {
            content_type: self.content_type(),
            customization: self.customization.clone(),
            payload,
            name,
        })
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests;
