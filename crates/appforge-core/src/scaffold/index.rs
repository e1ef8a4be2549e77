//! Boilerplate index: which starter archive serves which project flavor
//!
//! The built-in index covers the four supported flavors. It can be replaced
//! wholesale by pointing `APPFORGE_INDEX_URL` at a remote YAML document, or
//! by passing a local YAML file on the command line (development mode).

use crate::flavor::{Flavor, Framework, SourceLang};
use serde::{Deserialize, Serialize};

/// Environment variable overriding where the index YAML is fetched from.
pub const INDEX_URL_ENV: &str = "APPFORGE_INDEX_URL";

/// One scaffoldable boilerplate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoilerplateSpec {
    /// Short identifier, e.g. "react-ts"
    pub name: String,

    /// One-line description shown in prompts
    pub description: String,

    /// Framework this boilerplate targets ("react" or "react-native")
    pub framework: String,

    /// Source language ("typescript" or "javascript")
    pub language: String,

    /// Zip archive URL, or a local path in development mode
    pub archive: String,

    /// Minimum CLI version this boilerplate expects
    pub version: String,
}

impl BoilerplateSpec {
    /// Whether this boilerplate serves the given flavor.
    pub fn matches(&self, flavor: &Flavor) -> bool {
        parse_framework(&self.framework) == Some(flavor.framework)
            && parse_language(&self.language) == Some(flavor.lang)
    }
}

/// Parse a framework name as it appears in index YAML.
pub fn parse_framework(s: &str) -> Option<Framework> {
    match s.to_ascii_lowercase().as_str() {
        "react" => Some(Framework::React),
        "react-native" | "reactnative" => Some(Framework::ReactNative),
        _ => None,
    }
}

/// Parse a language name as it appears in index YAML.
pub fn parse_language(s: &str) -> Option<SourceLang> {
    match s.to_ascii_lowercase().as_str() {
        "typescript" | "ts" => Some(SourceLang::TypeScript),
        "javascript" | "js" => Some(SourceLang::PlainSource),
        _ => None,
    }
}

/// The full boilerplate index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoilerplateIndex {
    pub boilerplates: Vec<BoilerplateSpec>,
}

impl BoilerplateIndex {
    /// The built-in index shipped with the CLI.
    pub fn builtin() -> Self {
        let entry = |name: &str, description: &str, framework: &str, language: &str, repo: &str| {
            BoilerplateSpec {
                name: name.to_string(),
                description: description.to_string(),
                framework: framework.to_string(),
                language: language.to_string(),
                archive: format!(
                    "https://codeload.github.com/appforge-dev/{}/zip/refs/heads/main",
                    repo
                ),
                version: "0.1.0".to_string(),
            }
        };

        Self {
            boilerplates: vec![
                entry(
                    "react-ts",
                    "React App (TypeScript)",
                    "react",
                    "typescript",
                    "react-ts-starter",
                ),
                entry(
                    "react-js",
                    "React App (JavaScript)",
                    "react",
                    "javascript",
                    "react-js-starter",
                ),
                entry(
                    "react-native-ts",
                    "React Native App (TypeScript)",
                    "react-native",
                    "typescript",
                    "react-native-ts-starter",
                ),
                entry(
                    "react-native-js",
                    "React Native App (JavaScript)",
                    "react-native",
                    "javascript",
                    "react-native-js-starter",
                ),
            ],
        }
    }

    /// Find the boilerplate serving a flavor.
    pub fn find(&self, flavor: &Flavor) -> Option<&BoilerplateSpec> {
        self.boilerplates.iter().find(|b| b.matches(flavor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_flavor() {
        let index = BoilerplateIndex::builtin();
        for framework in [Framework::React, Framework::ReactNative] {
            for lang in [SourceLang::TypeScript, SourceLang::PlainSource] {
                let flavor = Flavor::new(framework, lang);
                assert!(
                    index.find(&flavor).is_some(),
                    "no boilerplate for {}",
                    flavor.display_name()
                );
            }
        }
    }

    #[test]
    fn parses_index_yaml() {
        let yaml = r#"
boilerplates:
  - name: react-ts
    description: React App (TypeScript)
    framework: react
    language: typescript
    archive: https://example.com/react-ts.zip
    version: 0.1.0
"#;
        let index: BoilerplateIndex = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(index.boilerplates.len(), 1);

        let flavor = Flavor::new(Framework::React, SourceLang::TypeScript);
        let spec = index.find(&flavor).unwrap();
        assert_eq!(spec.name, "react-ts");
        assert!(spec
            .matches(&Flavor::new(Framework::React, SourceLang::TypeScript)));
        assert!(!spec.matches(&Flavor::new(Framework::React, SourceLang::PlainSource)));
    }

    #[test]
    fn framework_and_language_parsing_is_case_insensitive() {
        assert_eq!(parse_framework("React"), Some(Framework::React));
        assert_eq!(parse_framework("REACT-NATIVE"), Some(Framework::ReactNative));
        assert_eq!(parse_framework("vue"), None);
        assert_eq!(parse_language("TS"), Some(SourceLang::TypeScript));
        assert_eq!(parse_language("js"), Some(SourceLang::PlainSource));
        assert_eq!(parse_language("python"), None);
    }
}
