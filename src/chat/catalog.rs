//! Selectable model catalog

use crate::error::{GenieError, Result};

/// Ordered list of model identifiers and the active selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelCatalog {
    models: Vec<String>,
    selected: Option<String>,
}

impl ModelCatalog {
    /// Replace the whole catalog and reset the selection
    ///
    /// `preferred` is selected when it is part of `models`; otherwise the
    /// first entry is, and an empty catalog leaves nothing selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use genie::chat::ModelCatalog;
    ///
    /// let mut catalog = ModelCatalog::default();
    /// catalog.replace(vec!["llama3.2".to_string(), "mistral".to_string()], None);
    /// assert_eq!(catalog.selected(), Some("llama3.2"));
    ///
    /// catalog.replace(vec!["llama3.2".to_string(), "mistral".to_string()], Some("mistral"));
    /// assert_eq!(catalog.selected(), Some("mistral"));
    /// ```
    pub fn replace(&mut self, models: Vec<String>, preferred: Option<&str>) {
        self.selected = match preferred {
            Some(p) if models.iter().any(|m| m == p) => Some(p.to_string()),
            _ => models.first().cloned(),
        };
        self.models = models;
    }

    /// Select a model that is part of the catalog
    ///
    /// # Errors
    ///
    /// Returns `GenieError::UnknownModel` if `name` is not in the catalog
    pub fn select(&mut self, name: &str) -> Result<()> {
        if !self.models.iter().any(|m| m == name) {
            return Err(GenieError::UnknownModel(name.to_string()).into());
        }
        self.selected = Some(name.to_string());
        Ok(())
    }

    /// Model identifiers in catalog order
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Active model, if any
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// True when the catalog has no models
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn models(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_replace_selects_first() {
        let mut catalog = ModelCatalog::default();
        catalog.replace(models(&["a", "b"]), None);
        assert_eq!(catalog.selected(), Some("a"));
        assert_eq!(catalog.models(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_replace_empty_clears_selection() {
        let mut catalog = ModelCatalog::default();
        catalog.replace(models(&["a"]), None);
        catalog.replace(Vec::new(), None);
        assert!(catalog.is_empty());
        assert_eq!(catalog.selected(), None);
    }

    #[test]
    fn test_replace_ignores_missing_preference() {
        let mut catalog = ModelCatalog::default();
        catalog.replace(models(&["a", "b"]), Some("z"));
        assert_eq!(catalog.selected(), Some("a"));
    }

    #[test]
    fn test_replace_keeps_duplicates_verbatim() {
        let mut catalog = ModelCatalog::default();
        catalog.replace(models(&["a", "a", ""]), None);
        assert_eq!(catalog.models().len(), 3);
    }

    #[test]
    fn test_select_known_model() {
        let mut catalog = ModelCatalog::default();
        catalog.replace(models(&["a", "b"]), None);
        catalog.select("b").unwrap();
        assert_eq!(catalog.selected(), Some("b"));
    }

    #[test]
    fn test_select_unknown_model_keeps_selection() {
        let mut catalog = ModelCatalog::default();
        catalog.replace(models(&["a", "b"]), None);
        let err = catalog.select("c").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GenieError>(),
            Some(GenieError::UnknownModel(name)) if name == "c"
        ));
        assert_eq!(catalog.selected(), Some("a"));
    }
}
