//! Widget configuration with sensible defaults.
//!
//! [`WidgetConfig`] controls the element identifiers the widget expects and
//! creates, the static-asset root used for image path correction, and the
//! debounce/polling budgets. The defaults mirror the page contract the
//! widget was designed against.

use crate::error::WidgetError;

/// User-visible literals rendered by the widget.
///
/// Kept as configuration so embedding pages can reword them; the widget
/// does no translation beyond these literal strings.
#[derive(Debug, Clone)]
pub struct WidgetMessages {
    /// Placeholder text inside the search input.
    pub placeholder: String,
    /// Label on the search button.
    pub button_label: String,
    /// Shown when the query is blank.
    pub prompt: String,
    /// Shown when the dataset never became available.
    pub unavailable: String,
    /// Shown when a search matched nothing.
    pub no_matches: String,
}

impl Default for WidgetMessages {
    fn default() -> Self {
        Self {
            placeholder: "Type your question...".into(),
            button_label: "Search".into(),
            prompt: "Enter a search term to get started.".into(),
            unavailable: "Failed to load the question data. Refresh the page and try again.".into(),
            no_matches: "No matching questions found.".into(),
        }
    }
}

/// Configuration for a [`crate::SearchWidget`].
///
/// Use [`Default::default()`] for the standard page contract, or construct
/// with field overrides for custom embedding.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Identifier of the mount container the embedding page provides.
    pub container_id: String,
    /// Identifier given to the created search input.
    pub input_id: String,
    /// Identifier given to the created search button.
    pub button_id: String,
    /// Identifier given to the created results container.
    pub results_id: String,
    /// CSS class applied to each rendered result block.
    pub result_class: String,
    /// Path prefix under which static assets are served. Must end with `/`.
    /// Relative image references in answer markup are rewritten against it.
    pub static_root: String,
    /// Quiet period in milliseconds before an input change triggers a search.
    pub debounce_ms: u64,
    /// Maximum number of dataset polls before giving up.
    pub poll_attempts: u32,
    /// Delay in milliseconds between dataset polls.
    pub poll_interval_ms: u64,
    /// User-visible literals.
    pub messages: WidgetMessages,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            container_id: "search-box-container".into(),
            input_id: "full-screen-search-input".into(),
            button_id: "full-screen-search-button".into(),
            results_id: "qa-search-results".into(),
            result_class: "qa-result-item".into(),
            static_root: "_static/".into(),
            debounce_ms: 300,
            poll_attempts: 100,
            poll_interval_ms: 100,
            messages: WidgetMessages::default(),
        }
    }
}

impl WidgetConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - all element identifiers must be non-empty and pairwise distinct
    /// - `static_root` must be non-empty and end with `/`
    /// - `poll_attempts` and `poll_interval_ms` must be greater than 0
    pub fn validate(&self) -> Result<(), WidgetError> {
        let ids = [
            ("container_id", &self.container_id),
            ("input_id", &self.input_id),
            ("button_id", &self.button_id),
            ("results_id", &self.results_id),
        ];
        for (name, value) in &ids {
            if value.is_empty() {
                return Err(WidgetError::Config(format!("{name} must not be empty")));
            }
        }
        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                if ids[i].1 == ids[j].1 {
                    return Err(WidgetError::Config(format!(
                        "{} and {} must be distinct",
                        ids[i].0, ids[j].0
                    )));
                }
            }
        }
        if self.static_root.is_empty() || !self.static_root.ends_with('/') {
            return Err(WidgetError::Config(
                "static_root must be non-empty and end with '/'".into(),
            ));
        }
        if self.poll_attempts == 0 {
            return Err(WidgetError::Config(
                "poll_attempts must be greater than 0".into(),
            ));
        }
        if self.poll_interval_ms == 0 {
            return Err(WidgetError::Config(
                "poll_interval_ms must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = WidgetConfig::default();
        assert_eq!(config.container_id, "search-box-container");
        assert_eq!(config.input_id, "full-screen-search-input");
        assert_eq!(config.button_id, "full-screen-search-button");
        assert_eq!(config.results_id, "qa-search-results");
        assert_eq!(config.result_class, "qa-result-item");
        assert_eq!(config.static_root, "_static/");
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.poll_attempts, 100);
        assert_eq!(config.poll_interval_ms, 100);
    }

    #[test]
    fn default_poll_budget_is_about_ten_seconds() {
        let config = WidgetConfig::default();
        let budget_ms = u64::from(config.poll_attempts) * config.poll_interval_ms;
        assert_eq!(budget_ms, 10_000);
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(WidgetConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_identifier_rejected() {
        let config = WidgetConfig {
            input_id: String::new(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("input_id"));
    }

    #[test]
    fn duplicate_identifiers_rejected() {
        let config = WidgetConfig {
            button_id: "qa-search-results".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("distinct"));
    }

    #[test]
    fn static_root_without_trailing_slash_rejected() {
        let config = WidgetConfig {
            static_root: "_static".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("static_root"));
    }

    #[test]
    fn empty_static_root_rejected() {
        let config = WidgetConfig {
            static_root: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_poll_attempts_rejected() {
        let config = WidgetConfig {
            poll_attempts: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("poll_attempts"));
    }

    #[test]
    fn zero_poll_interval_rejected() {
        let config = WidgetConfig {
            poll_interval_ms: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("poll_interval_ms"));
    }

    #[test]
    fn zero_debounce_valid() {
        // Debounce of 0 means every input event searches immediately.
        let config = WidgetConfig {
            debounce_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn custom_messages_carried() {
        let config = WidgetConfig {
            messages: WidgetMessages {
                prompt: "Ask away.".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.messages.prompt, "Ask away.");
        assert!(config.validate().is_ok());
    }
}
