//! Loader steps.

use serde::Serialize;

/// Loader that downlevels modern JavaScript.
pub const SCRIPT_LOADER: &str = "babel-loader";
/// Loader that hands CSS to the extraction plugin instead of injecting it.
pub const EXTRACT_LOADER: &str = "mini-css-extract-plugin/loader";
/// Loader that parses CSS and resolves `@import`/`url()`.
pub const CSS_LOADER: &str = "css-loader";
/// Loader that compiles Sass/SCSS to CSS.
pub const SASS_LOADER: &str = "sass-loader";
/// Sass implementation handed to [`SASS_LOADER`].
pub const SASS_IMPLEMENTATION: &str = "sass";

/// One step of a transform chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoaderStep {
    pub loader: String,
    #[serde(skip_serializing_if = "LoaderOptions::is_empty")]
    pub options: LoaderOptions,
}

/// Options passed to a loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderOptions {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub source_map: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation: Option<String>,
}

impl LoaderOptions {
    pub fn is_empty(&self) -> bool {
        !self.source_map && self.implementation.is_none()
    }
}

impl LoaderStep {
    /// A loader with no options.
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: LoaderOptions::default(),
        }
    }

    /// Enable source maps for this step.
    pub fn with_source_map(mut self) -> Self {
        self.options.source_map = true;
        self
    }

    pub fn with_implementation(mut self, implementation: impl Into<String>) -> Self {
        self.options.implementation = Some(implementation.into());
        self
    }

    /// Script chain: downlevel only.
    pub fn script_chain() -> Vec<LoaderStep> {
        vec![LoaderStep::new(SCRIPT_LOADER)]
    }

    /// Style chain, listed in declaration order (the bundler applies them
    /// last to first): extract, parse CSS, compile Sass.
    pub fn style_chain() -> Vec<LoaderStep> {
        vec![
            LoaderStep::new(EXTRACT_LOADER),
            LoaderStep::new(CSS_LOADER).with_source_map(),
            LoaderStep::new(SASS_LOADER)
                .with_source_map()
                .with_implementation(SASS_IMPLEMENTATION),
        ]
    }
}
