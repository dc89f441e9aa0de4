//! The built-in asset rules and first-match evaluation.

use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::loader::LoaderStep;
use super::matcher::FileMatcher;
use crate::template::FilenameTemplate;

/// Module type for files copied to the output as-is.
pub const RESOURCE_TYPE: &str = "asset/resource";
/// Output subfolder for fonts.
pub const FONTS_DIR: &str = "fonts";
/// Output subfolder for images.
pub const IMAGES_DIR: &str = "images";

/// Which built-in rule this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Script,
    Style,
    Font,
    Image,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Style => "style",
            Self::Font => "font",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// An opaque resource copied into a subfolder of the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceOutput {
    pub subdirectory: String,
    /// Mode-selected generic asset template, without the subfolder.
    pub template: FilenameTemplate,
}

impl ResourceOutput {
    /// The full output filename template, subfolder included.
    pub fn filename(&self) -> FilenameTemplate {
        self.template.in_directory(&self.subdirectory)
    }
}

/// What happens to a matched file.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleAction {
    /// Run the file through a chain of loaders.
    Transform(Vec<LoaderStep>),
    /// Copy the file to the output.
    Resource(ResourceOutput),
}

/// A (file matcher, action) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRule {
    pub kind: RuleKind,
    pub matcher: FileMatcher,
    pub action: RuleAction,
}

impl AssetRule {
    /// The loader chain, if this rule transforms files.
    pub fn loaders(&self) -> Option<&[LoaderStep]> {
        match &self.action {
            RuleAction::Transform(chain) => Some(chain),
            RuleAction::Resource(_) => None,
        }
    }

    /// The resource output, if this rule copies files.
    pub fn resource(&self) -> Option<&ResourceOutput> {
        match &self.action {
            RuleAction::Resource(output) => Some(output),
            RuleAction::Transform(_) => None,
        }
    }
}

impl Serialize for AssetRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Generator {
            filename: FilenameTemplate,
        }

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("test", self.matcher.test.as_str())?;
        if let Some(exclude) = &self.matcher.exclude {
            map.serialize_entry("exclude", exclude.as_str())?;
        }
        match &self.action {
            RuleAction::Transform(chain) => map.serialize_entry("use", chain)?,
            RuleAction::Resource(output) => {
                map.serialize_entry("type", RESOURCE_TYPE)?;
                map.serialize_entry(
                    "generator",
                    &Generator {
                        filename: output.filename(),
                    },
                )?;
            }
        }
        map.end()
    }
}

/// Build the four asset rules, in first-match order: scripts, styles,
/// fonts, images. Fonts and images share `asset_template`.
pub fn asset_rules(asset_template: &FilenameTemplate) -> RuleSet {
    let resource = |subdirectory: &str| {
        RuleAction::Resource(ResourceOutput {
            subdirectory: subdirectory.to_string(),
            template: asset_template.clone(),
        })
    };

    RuleSet::new(vec![
        AssetRule {
            kind: RuleKind::Script,
            matcher: FileMatcher::scripts(),
            action: RuleAction::Transform(LoaderStep::script_chain()),
        },
        AssetRule {
            kind: RuleKind::Style,
            matcher: FileMatcher::styles(),
            action: RuleAction::Transform(LoaderStep::style_chain()),
        },
        AssetRule {
            kind: RuleKind::Font,
            matcher: FileMatcher::fonts(),
            action: resource(FONTS_DIR),
        },
        AssetRule {
            kind: RuleKind::Image,
            matcher: FileMatcher::images(),
            action: resource(IMAGES_DIR),
        },
    ])
}

/// An ordered list of rules with first-match semantics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<AssetRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<AssetRule>) -> Self {
        Self { rules }
    }

    /// The first rule that accepts `path`.
    pub fn first_match(&self, path: &str) -> Option<&AssetRule> {
        self.rules.iter().find(|rule| rule.matcher.matches(path))
    }

    /// Look up a rule by kind.
    pub fn get(&self, kind: RuleKind) -> Option<&AssetRule> {
        self.rules.iter().find(|rule| rule.kind == kind)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AssetRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a AssetRule;
    type IntoIter = std::slice::Iter<'a, AssetRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dev_rules() -> RuleSet {
        asset_rules(&FilenameTemplate::new("[path][name].[ext]"))
    }

    #[test]
    fn four_rules_in_fixed_order() {
        let kinds: Vec<_> = dev_rules().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RuleKind::Script,
                RuleKind::Style,
                RuleKind::Font,
                RuleKind::Image
            ]
        );
    }

    #[test]
    fn first_match_selects_rule_by_extension() {
        let rules = dev_rules();
        assert_eq!(
            rules.first_match("src/app.js").map(|r| r.kind),
            Some(RuleKind::Script)
        );
        assert_eq!(
            rules.first_match("src/app.scss").map(|r| r.kind),
            Some(RuleKind::Style)
        );
        assert_eq!(
            rules.first_match("fonts/a.woff?v=1.0").map(|r| r.kind),
            Some(RuleKind::Font)
        );
        assert_eq!(
            rules.first_match("img/a.svg").map(|r| r.kind),
            Some(RuleKind::Image)
        );
    }

    #[test]
    fn unmatched_files_have_no_rule() {
        let rules = dev_rules();
        assert!(rules.first_match("node_modules/pkg/index.js").is_none());
        assert!(rules.first_match("README.md").is_none());
    }

    #[test]
    fn first_match_wins_over_later_rules() {
        let rules = RuleSet::new(vec![
            AssetRule {
                kind: RuleKind::Image,
                matcher: FileMatcher::new(r"\.svg$").unwrap(),
                action: RuleAction::Transform(vec![LoaderStep::new("svg-loader")]),
            },
            AssetRule {
                kind: RuleKind::Image,
                matcher: FileMatcher::images(),
                action: RuleAction::Transform(vec![]),
            },
        ]);
        let rule = rules.first_match("icon.svg").unwrap();
        assert_eq!(rule.loaders().unwrap()[0].loader, "svg-loader");
    }

    #[test]
    fn font_and_image_share_template() {
        let template = FilenameTemplate::new("[path][name].[contenthash].[ext]");
        let rules = asset_rules(&template);
        let font = rules.get(RuleKind::Font).and_then(AssetRule::resource).unwrap();
        let image = rules.get(RuleKind::Image).and_then(AssetRule::resource).unwrap();
        assert_eq!(font.template, template);
        assert_eq!(image.template, template);
        assert_eq!(
            font.filename().as_str(),
            "fonts/[path][name].[contenthash].[ext]"
        );
        assert_eq!(
            image.filename().as_str(),
            "images/[path][name].[contenthash].[ext]"
        );
    }

    #[test]
    fn transform_rules_have_no_resource() {
        let rules = dev_rules();
        let script = rules.get(RuleKind::Script).unwrap();
        assert!(script.resource().is_none());
        assert!(script.loaders().is_some());
    }

    #[test]
    fn script_rule_serializes_with_exclude() {
        let rules = dev_rules();
        let json = serde_json::to_value(rules.get(RuleKind::Script).unwrap()).unwrap();
        assert_eq!(json["test"], r"\.js$");
        assert_eq!(json["exclude"], "node_modules");
        assert_eq!(json["use"][0]["loader"], "babel-loader");
    }

    #[test]
    fn resource_rule_serializes_generator() {
        let rules = dev_rules();
        let json = serde_json::to_value(rules.get(RuleKind::Image).unwrap()).unwrap();
        assert_eq!(json["type"], RESOURCE_TYPE);
        assert_eq!(json["generator"]["filename"], "images/[path][name].[ext]");
        assert!(json.get("exclude").is_none());
    }

    #[test]
    fn rule_set_serializes_as_array() {
        let json = serde_json::to_value(dev_rules()).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(4));
    }
}
