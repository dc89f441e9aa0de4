//! File matchers.

use std::sync::LazyLock;

use regex::Regex;

/// Scripts: `.js` files.
static SCRIPT_TEST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.js$").expect("SCRIPT_TEST must compile"));

/// Installed dependencies are never transpiled.
static VENDOR_EXCLUDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"node_modules").expect("VENDOR_EXCLUDE must compile"));

/// Stylesheets: `.sass`, `.scss` and `.css`.
static STYLE_TEST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(sa|sc|c)ss$").expect("STYLE_TEST must compile"));

/// Fonts, optionally with a `?v=1.2.3` version suffix.
static FONT_TEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(eot|otf|ttf|woff|woff2)(\?v=[0-9.]+)?$").expect("FONT_TEST must compile")
});

/// Images, optionally with a `?v=1.2.3` version suffix.
static IMAGE_TEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(png|svg|jpg)(\?v=[0-9.]+)?$").expect("IMAGE_TEST must compile")
});

/// Accepts a file when `test` matches and `exclude` (if any) does not.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    pub test: Regex,
    pub exclude: Option<Regex>,
}

impl FileMatcher {
    /// Build a matcher from a pattern.
    ///
    /// # Errors
    ///
    /// Returns the regex error if the pattern does not compile.
    pub fn new(test: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            test: Regex::new(test)?,
            exclude: None,
        })
    }

    /// Add an exclusion pattern.
    pub fn excluding(mut self, exclude: &str) -> Result<Self, regex::Error> {
        self.exclude = Some(Regex::new(exclude)?);
        Ok(self)
    }

    pub fn scripts() -> Self {
        Self {
            test: SCRIPT_TEST.clone(),
            exclude: Some(VENDOR_EXCLUDE.clone()),
        }
    }

    pub fn styles() -> Self {
        Self {
            test: STYLE_TEST.clone(),
            exclude: None,
        }
    }

    pub fn fonts() -> Self {
        Self {
            test: FONT_TEST.clone(),
            exclude: None,
        }
    }

    pub fn images() -> Self {
        Self {
            test: IMAGE_TEST.clone(),
            exclude: None,
        }
    }

    /// Test a file path. Backslashes are treated as separators.
    pub fn matches(&self, path: &str) -> bool {
        let normalized = path.replace('\\', "/");
        self.test.is_match(&normalized)
            && !self
                .exclude
                .as_ref()
                .is_some_and(|exclude| exclude.is_match(&normalized))
    }
}

impl PartialEq for FileMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.test.as_str() == other.test.as_str()
            && self.exclude.as_ref().map(Regex::as_str) == other.exclude.as_ref().map(Regex::as_str)
    }
}
