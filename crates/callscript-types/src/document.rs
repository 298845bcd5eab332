//! The script document envelope: named sections holding ordered steps.
//!
//! A document is the sole artifact this workspace produces. It is a mapping
//! with one key, `sections`, from section name to an ordered step list. The
//! `main` section always exists and is executed first by the platform;
//! additional sections act as subroutines reachable via `execute`/`transfer`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ScriptError;
use crate::method::Method;
use crate::statement::Statement;

/// Name of the entry section every document starts with.
pub const MAIN_SECTION: &str = "main";

/// A complete call-control script.
///
/// Serializes to `{"sections": {"main": [...], ...}}`. Section order in the
/// output is not significant; the platform looks sections up by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Section name to section body. `main` is present from creation.
    pub sections: HashMap<String, Section>,
}

impl Document {
    /// An empty document: `{"sections": {"main": []}}`.
    pub fn new() -> Self {
        let mut sections = HashMap::new();
        sections.insert(MAIN_SECTION.to_owned(), Section::Steps(Vec::new()));
        Self { sections }
    }

    /// The steps of the `main` section, or `None` if `main` was overwritten
    /// with a non-list body via a section registration.
    pub fn main(&self) -> Option<&[Step]> {
        match self.sections.get(MAIN_SECTION) {
            Some(Section::Steps(steps)) => Some(steps),
            _ => None,
        }
    }

    /// Append one step to the end of the `main` section.
    ///
    /// If `main` was overwritten with a non-list body, it is replaced with a
    /// fresh list holding just this step.
    pub fn push_main(&mut self, step: impl Into<Step>) {
        let section = self
            .sections
            .entry(MAIN_SECTION.to_owned())
            .or_insert_with(|| Section::Steps(Vec::new()));
        match section {
            Section::Steps(steps) => steps.push(step.into()),
            other => *other = Section::Steps(vec![step.into()]),
        }
    }

    /// Register a section under `name`, overwriting any existing section of
    /// that name. Last write wins, including for `main`.
    pub fn set_section(&mut self, name: impl Into<String>, body: impl Into<Section>) {
        self.sections.insert(name.into(), body.into());
    }

    /// Render the document as compact JSON.
    pub fn to_json(&self) -> Result<String, ScriptError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render the document as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ScriptError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// The body of a named section.
///
/// Normally an ordered step list. Subroutine sections may instead carry the
/// `{meta, code}` wrapped form, or an arbitrary value for shapes this crate
/// does not model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Section {
    /// An ordered list of steps, executed top to bottom.
    Steps(Vec<Step>),
    /// The wrapped subroutine form with optional `meta` and `code` fields.
    Subroutine(Subroutine),
    /// An arbitrarily-shaped body, passed through as-is.
    Value(Value),
}

impl From<Vec<Step>> for Section {
    fn from(steps: Vec<Step>) -> Self {
        Section::Steps(steps)
    }
}

impl From<Subroutine> for Section {
    fn from(subroutine: Subroutine) -> Self {
        Section::Subroutine(subroutine)
    }
}

impl From<Value> for Section {
    fn from(value: Value) -> Self {
        Section::Value(value)
    }
}

/// Wrapped subroutine body: user-defined data plus the steps to execute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subroutine {
    /// User data, ignored by the platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<HashMap<String, Value>>,
    /// The steps the subroutine executes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Vec<Step>>,
}

/// One action in a section.
///
/// Either a bare method name (`"answer"`) for the methods that run with
/// default parameters, or a single-key `{action: params}` map. The
/// single-key form falls out of serde's external tagging on [`Statement`]
/// and [`Method`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    /// A zero-parameter method invocation, serialized as a bare string.
    Bare(BareMethod),
    /// A control-flow statement with its parameter object.
    Statement(Statement),
    /// A call-control/media method with its parameter object.
    Method(Method),
}

impl From<BareMethod> for Step {
    fn from(method: BareMethod) -> Self {
        Step::Bare(method)
    }
}

impl From<Statement> for Step {
    fn from(statement: Statement) -> Self {
        Step::Statement(statement)
    }
}

impl From<Method> for Step {
    fn from(method: Method) -> Self {
        Step::Method(method)
    }
}

/// The methods that may appear as a bare string, meaning "invoke with
/// default/no parameters".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BareMethod {
    Answer,
    Hangup,
    StopRecordCall,
    Denoise,
    StopDenoise,
    ReceiveFax,
    StopTap,
}

/// A field accepting either a single string or a list of strings.
///
/// Used where the wire format allows `string | string[]`, e.g. `prompt.play`
/// and `unset.vars`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<String> for OneOrMany {
    fn from(value: String) -> Self {
        OneOrMany::One(value)
    }
}

impl From<&str> for OneOrMany {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_owned())
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(values: Vec<String>) -> Self {
        OneOrMany::Many(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_document_shape() {
        let doc = Document::new();
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({"sections": {"main": []}})
        );
    }

    #[test]
    fn test_bare_method_serializes_as_string() {
        let step = Step::Bare(BareMethod::StopRecordCall);
        assert_eq!(
            serde_json::to_value(&step).unwrap(),
            json!("stop_record_call")
        );
    }

    #[test]
    fn test_push_main_preserves_order() {
        let mut doc = Document::new();
        doc.push_main(BareMethod::Answer);
        doc.push_main(BareMethod::Denoise);
        doc.push_main(BareMethod::Hangup);
        let main = doc.main().unwrap();
        assert_eq!(main.len(), 3);
        assert_eq!(main[0], Step::Bare(BareMethod::Answer));
        assert_eq!(main[2], Step::Bare(BareMethod::Hangup));
    }

    #[test]
    fn test_push_main_after_overwrite_resets_to_list() {
        let mut doc = Document::new();
        doc.set_section(MAIN_SECTION, json!({"not": "a list"}));
        assert!(doc.main().is_none());
        doc.push_main(BareMethod::Hangup);
        assert_eq!(doc.main().unwrap(), &[Step::Bare(BareMethod::Hangup)]);
    }

    #[test]
    fn test_set_section_does_not_touch_main() {
        let mut doc = Document::new();
        doc.set_section("greet", vec![Step::Bare(BareMethod::Answer)]);
        assert_eq!(doc.main().unwrap(), &[]);
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({"sections": {"main": [], "greet": ["answer"]}})
        );
    }

    #[test]
    fn test_set_section_last_write_wins() {
        let mut doc = Document::new();
        doc.set_section("greet", vec![Step::Bare(BareMethod::Answer)]);
        doc.set_section("greet", vec![Step::Bare(BareMethod::Hangup)]);
        assert_eq!(
            doc.sections.get("greet"),
            Some(&Section::Steps(vec![Step::Bare(BareMethod::Hangup)]))
        );
    }

    #[test]
    fn test_subroutine_wrapped_form() {
        let sub = Subroutine {
            meta: None,
            code: Some(vec![Step::Bare(BareMethod::Hangup)]),
        };
        assert_eq!(
            serde_json::to_value(&sub).unwrap(),
            json!({"code": ["hangup"]})
        );
    }

    #[test]
    fn test_one_or_many_untagged() {
        assert_eq!(
            serde_json::to_value(OneOrMany::from("say:Hi")).unwrap(),
            json!("say:Hi")
        );
        assert_eq!(
            serde_json::to_value(OneOrMany::from(vec!["a".to_owned(), "b".to_owned()]))
                .unwrap(),
            json!(["a", "b"])
        );
    }

    #[test]
    fn test_step_deserialize_roundtrip() {
        let value = json!(["answer", {"set": {"x": 1}}, "hangup"]);
        let steps: Vec<Step> = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&steps).unwrap(), value);
    }

    #[test]
    fn test_to_json_compact() {
        let doc = Document::new();
        assert_eq!(doc.to_json().unwrap(), r#"{"sections":{"main":[]}}"#);
    }
}
