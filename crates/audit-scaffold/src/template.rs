//! Document templates
//!
//! Generated documents go through MiniJinja so dates and settings can be
//! interpolated. Templates carry one source per language and fall back to
//! Japanese, the language the originals were written in.

use crate::error::{Result, ScaffoldError};
use crate::language::Language;
use minijinja::Environment;
use std::collections::HashMap;

/// Trait for renderable document templates
pub trait DocTemplate: Send + Sync {
    /// Get the template name/identifier
    fn name(&self) -> &str;

    /// Get available languages
    fn languages(&self) -> Vec<Language>;

    /// Check if a language is supported
    fn supports_language(&self, lang: &Language) -> bool {
        self.languages().contains(lang)
    }

    /// Render the template with variables for a specific language
    fn render(&self, lang: &Language, vars: &serde_json::Value) -> Result<String>;

    /// Render with fallback to the default document language
    ///
    /// If the requested language is not available:
    /// 1. Try Japanese (the original document language)
    /// 2. Otherwise use the first available language
    fn render_with_fallback(&self, lang: &Language, vars: &serde_json::Value) -> Result<String> {
        if self.supports_language(lang) {
            return self.render(lang, vars);
        }

        if self.supports_language(&Language::Japanese) {
            return self.render(&Language::Japanese, vars);
        }

        let fallback = self
            .languages()
            .into_iter()
            .next()
            .ok_or_else(|| ScaffoldError::NoLanguageAvailable(self.name().to_string()))?;

        self.render(&fallback, vars)
    }

    /// Get raw template string for a language (for debugging/inspection)
    fn raw_template(&self, lang: &Language) -> Option<&str>;
}

/// A document template backed by MiniJinja
///
/// Standard Jinja2 syntax: `{{ variable }}`, filters, conditionals, loops.
pub struct JinjaTemplate {
    name: String,
    templates: HashMap<Language, String>,
}

impl JinjaTemplate {
    /// Create a new template builder
    pub fn builder(name: impl Into<String>) -> JinjaTemplateBuilder {
        JinjaTemplateBuilder::new(name)
    }

    /// Create from a single Japanese template
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Result<Self> {
        Self::builder(name).japanese(template).build()
    }

    /// Create with Japanese and English sources
    pub fn bilingual(
        name: impl Into<String>,
        japanese: impl Into<String>,
        english: impl Into<String>,
    ) -> Result<Self> {
        Self::builder(name)
            .japanese(japanese)
            .english(english)
            .build()
    }
}

impl DocTemplate for JinjaTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn languages(&self) -> Vec<Language> {
        self.templates.keys().cloned().collect()
    }

    fn render(&self, lang: &Language, vars: &serde_json::Value) -> Result<String> {
        let template_str =
            self.templates
                .get(lang)
                .ok_or_else(|| ScaffoldError::TemplateNotFound {
                    name: self.name.clone(),
                    language: lang.code().to_string(),
                })?;

        // Fresh environment per render to avoid lifetime issues
        let env = Environment::new();
        let value = minijinja::value::Value::from_serialize(vars);

        env.render_str(template_str, value)
            .map_err(|e| ScaffoldError::RenderError {
                name: self.name.clone(),
                detail: e.to_string(),
            })
    }

    fn raw_template(&self, lang: &Language) -> Option<&str> {
        self.templates.get(lang).map(String::as_str)
    }
}

impl std::fmt::Debug for JinjaTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JinjaTemplate")
            .field("name", &self.name)
            .field("languages", &self.templates.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`JinjaTemplate`]
pub struct JinjaTemplateBuilder {
    name: String,
    templates: HashMap<Language, String>,
}

impl JinjaTemplateBuilder {
    /// Create a new builder with the given template name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            templates: HashMap::new(),
        }
    }

    /// Add a template for a specific language
    pub fn template(mut self, lang: Language, content: impl Into<String>) -> Self {
        self.templates.insert(lang, content.into());
        self
    }

    /// Add a Japanese template
    pub fn japanese(self, content: impl Into<String>) -> Self {
        self.template(Language::Japanese, content)
    }

    /// Add an English template
    pub fn english(self, content: impl Into<String>) -> Self {
        self.template(Language::English, content)
    }

    /// Build the template
    ///
    /// Every source is parsed once so malformed templates fail here rather
    /// than at render time.
    pub fn build(self) -> Result<JinjaTemplate> {
        if self.templates.is_empty() {
            return Err(ScaffoldError::NoTemplatesProvided(self.name));
        }

        let env = Environment::new();
        for (lang, content) in &self.templates {
            env.render_str(content, ())
                .map_err(|e| ScaffoldError::TemplateParseFailed {
                    name: self.name.clone(),
                    language: lang.code().to_string(),
                    detail: e.to_string(),
                })?;
        }

        Ok(JinjaTemplate {
            name: self.name,
            templates: self.templates,
        })
    }
}
