//! Embedded source blueprints
//!
//! Blueprints ship inside the binary via `include_str!`, so generation works
//! offline. Screen and shared blueprints differ per framework; model, store,
//! and API blueprints are framework-neutral. Each blueprint names its
//! component after a stand-in identifier that rendering replaces with the
//! UpperCamelCase form of the user's name.

use super::ComponentKind;
use crate::flavor::{Flavor, Framework, SourceLang};

/// A source blueprint plus its optional companion test blueprint.
#[derive(Debug, Clone, Copy)]
pub struct Blueprint {
    pub source: &'static str,
    pub test: Option<&'static str>,
    /// Identifier the blueprint uses for itself, replaced on render.
    pub stand_in: Option<&'static str>,
}

const REACT_SCREEN_TS: &str = include_str!("../../blueprints/react/Screen.tsx");
const REACT_SCREEN_TS_TEST: &str = include_str!("../../blueprints/react/Screen.test.tsx");
const REACT_SCREEN_JS: &str = include_str!("../../blueprints/react/Screen.js");
const REACT_SCREEN_JS_TEST: &str = include_str!("../../blueprints/react/Screen.test.js");
const REACT_SHARED_TS: &str = include_str!("../../blueprints/react/Shared.tsx");
const REACT_SHARED_TS_TEST: &str = include_str!("../../blueprints/react/Shared.test.tsx");
const REACT_SHARED_JS: &str = include_str!("../../blueprints/react/Shared.js");
const REACT_SHARED_JS_TEST: &str = include_str!("../../blueprints/react/Shared.test.js");

const NATIVE_SCREEN_TS: &str = include_str!("../../blueprints/react-native/Screen.tsx");
const NATIVE_SCREEN_TS_TEST: &str = include_str!("../../blueprints/react-native/Screen.test.tsx");
const NATIVE_SCREEN_JS: &str = include_str!("../../blueprints/react-native/Screen.js");
const NATIVE_SCREEN_JS_TEST: &str = include_str!("../../blueprints/react-native/Screen.test.js");
const NATIVE_SHARED_TS: &str = include_str!("../../blueprints/react-native/Shared.tsx");
const NATIVE_SHARED_TS_TEST: &str = include_str!("../../blueprints/react-native/Shared.test.tsx");
const NATIVE_SHARED_JS: &str = include_str!("../../blueprints/react-native/Shared.js");
const NATIVE_SHARED_JS_TEST: &str = include_str!("../../blueprints/react-native/Shared.test.js");

const COMMON_MODEL_TS: &str = include_str!("../../blueprints/common/Model.tsx");
const COMMON_MODEL_JS: &str = include_str!("../../blueprints/common/Model.js");
const COMMON_STORE_TS: &str = include_str!("../../blueprints/common/Store.tsx");
const COMMON_STORE_JS: &str = include_str!("../../blueprints/common/Store.js");
const COMMON_API_TS: &str = include_str!("../../blueprints/common/Api.tsx");
const COMMON_API_JS: &str = include_str!("../../blueprints/common/Api.js");

/// Select the blueprint for a component kind in a given flavor.
pub fn for_kind(kind: ComponentKind, flavor: &Flavor) -> Blueprint {
    let ts = flavor.lang == SourceLang::TypeScript;
    let native = flavor.framework == Framework::ReactNative;

    match kind {
        ComponentKind::Screen => {
            let (source, test) = match (native, ts) {
                (false, true) => (REACT_SCREEN_TS, REACT_SCREEN_TS_TEST),
                (false, false) => (REACT_SCREEN_JS, REACT_SCREEN_JS_TEST),
                (true, true) => (NATIVE_SCREEN_TS, NATIVE_SCREEN_TS_TEST),
                (true, false) => (NATIVE_SCREEN_JS, NATIVE_SCREEN_JS_TEST),
            };
            Blueprint {
                source,
                test: Some(test),
                stand_in: Some("Screen"),
            }
        }
        ComponentKind::Shared => {
            let (source, test) = match (native, ts) {
                (false, true) => (REACT_SHARED_TS, REACT_SHARED_TS_TEST),
                (false, false) => (REACT_SHARED_JS, REACT_SHARED_JS_TEST),
                (true, true) => (NATIVE_SHARED_TS, NATIVE_SHARED_TS_TEST),
                (true, false) => (NATIVE_SHARED_JS, NATIVE_SHARED_JS_TEST),
            };
            Blueprint {
                source,
                test: Some(test),
                stand_in: Some("Shared"),
            }
        }
        ComponentKind::Model => Blueprint {
            source: if ts { COMMON_MODEL_TS } else { COMMON_MODEL_JS },
            test: None,
            stand_in: Some("Model"),
        },
        ComponentKind::Store => Blueprint {
            source: if ts { COMMON_STORE_TS } else { COMMON_STORE_JS },
            test: None,
            stand_in: Some("Store"),
        },
        ComponentKind::Api => Blueprint {
            source: if ts { COMMON_API_TS } else { COMMON_API_JS },
            test: None,
            stand_in: None,
        },
    }
}

impl Blueprint {
    /// Render the source blueprint for a concrete component name.
    pub fn render_source(&self, upper_camel: &str) -> String {
        render(self.source, self.stand_in, upper_camel)
    }

    /// Render the test blueprint, if this kind has one. The stand-in also
    /// appears in the test's `../<StandIn>` import, which the same
    /// substitution rewrites.
    pub fn render_test(&self, upper_camel: &str) -> Option<String> {
        self.test.map(|t| render(t, self.stand_in, upper_camel))
    }
}

fn render(template: &'static str, stand_in: Option<&str>, upper_camel: &str) -> String {
    match stand_in {
        Some(placeholder) => template.replace(placeholder, upper_camel),
        None => template.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_rendering_substitutes_the_component_name() {
        let flavor = Flavor::new(Framework::React, SourceLang::TypeScript);
        let blueprint = for_kind(ComponentKind::Screen, &flavor);

        let source = blueprint.render_source("ProfileDetail");
        assert!(source.contains("function ProfileDetail()"));
        assert!(source.contains("export default ProfileDetail;"));
        assert!(!source.contains("Screen"));

        let test = blueprint.render_test("ProfileDetail").unwrap();
        assert!(test.contains("import ProfileDetail from '../ProfileDetail';"));
    }

    #[test]
    fn native_screens_use_react_native_primitives() {
        let flavor = Flavor::new(Framework::ReactNative, SourceLang::TypeScript);
        let blueprint = for_kind(ComponentKind::Screen, &flavor);
        assert!(blueprint.source.contains("react-native"));
        assert!(blueprint.source.contains("StyleSheet"));
    }

    #[test]
    fn plain_source_blueprints_have_no_type_annotations() {
        let flavor = Flavor::new(Framework::React, SourceLang::PlainSource);
        let blueprint = for_kind(ComponentKind::Screen, &flavor);
        assert!(!blueprint.source.contains("React.ReactElement"));
    }

    #[test]
    fn store_rendering_renames_the_class() {
        let flavor = Flavor::new(Framework::React, SourceLang::TypeScript);
        let blueprint = for_kind(ComponentKind::Store, &flavor);
        let source = blueprint.render_source("Session");
        assert!(source.contains("export default class Session"));
    }

    #[test]
    fn api_blueprint_renders_verbatim() {
        let flavor = Flavor::new(Framework::React, SourceLang::PlainSource);
        let blueprint = for_kind(ComponentKind::Api, &flavor);
        assert!(blueprint.test.is_none());
        assert_eq!(blueprint.render_source("Anything"), blueprint.source);
    }
}
