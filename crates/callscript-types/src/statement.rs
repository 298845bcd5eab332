//! Control-flow statements: transfer, execute, return, request, switch,
//! cond, set, unset.
//!
//! Each variant carries the parameter object the platform expects under the
//! statement's name. Fields are passed through as given; defaults mentioned
//! in the docs are applied by the platform when a field is omitted, never by
//! this crate.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::{OneOrMany, Step};

/// A control-flow statement, externally tagged so each serializes as the
/// single-key `{name: params}` map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    /// Jump to a section, URL, or relay context. Analogous to a goto.
    Transfer(Transfer),
    /// Run a section or URL as a subroutine, then return here.
    Execute(Execute),
    /// Return from `execute`, or exit the script, with an optional value.
    Return(HashMap<String, Value>),
    /// Send an HTTP request to a remote URL.
    Request(Request),
    /// Branch on which value matches a variable.
    Switch(Switch),
    /// Branch on a boolean condition expression.
    Cond(Cond),
    /// Set script variables to the given values.
    Set(HashMap<String, Value>),
    /// Unset the named variables.
    Unset(Unset),
}

/// Transfer execution to a new section, URL, or relay context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    /// Where to transfer to. A section label in the current document,
    /// `relay:<context>`, or an `https://` URL to fetch the next document
    /// from (sent as HTTP POST).
    pub dest: String,
    /// Named parameters to send to the destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<HashMap<String, Value>>,
    /// User data, ignored by the platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<HashMap<String, Value>>,
}

impl Transfer {
    /// Transfer to `dest` with no parameters or user data.
    pub fn new(dest: impl Into<String>) -> Self {
        Self {
            dest: dest.into(),
            params: None,
            meta: None,
        }
    }
}

/// Execute a section or URL as a subroutine and return to the current
/// document when it finishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Execute {
    /// The section label or URL to execute.
    pub dest: String,
    /// Named parameters to send to the section or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<HashMap<String, Value>>,
    /// User data, ignored by the platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<HashMap<String, Value>>,
}

impl Execute {
    /// Execute `dest` with no parameters or user data.
    pub fn new(dest: impl Into<String>) -> Self {
        Self {
            dest: dest.into(),
            params: None,
            meta: None,
        }
    }
}

/// Outbound HTTP call with optional variable capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// URL to send the request to.
    pub url: String,
    /// Request method.
    pub method: HttpMethod,
    /// HTTP headers to set. Valid values are `Accept`, `Authorization`,
    /// `Content-Type`, `Range`, and custom `X-` headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    /// Request body. `Content-Type` should be set explicitly; otherwise the
    /// platform guesses from the first non-whitespace character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,
    /// Maximum time in seconds to wait for a response. Platform default 5.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<f64>,
    /// Maximum time in seconds to wait for a connection. Platform default 5.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<f64>,
    /// Store the parsed JSON response as variables. Platform default false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_variables: Option<bool>,
}

impl Request {
    /// A request to `url` with `method` and every optional field unset.
    pub fn new(url: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            url: url.into(),
            method,
            headers: None,
            body: None,
            timeout: None,
            connect_timeout: None,
            save_variables: None,
        }
    }
}

/// HTTP method for a `request` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "POST")]
    Post,
    #[serde(rename = "PUT")]
    Put,
    #[serde(rename = "DELETE")]
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
            HttpMethod::Put => write!(f, "PUT"),
            HttpMethod::Delete => write!(f, "DELETE"),
        }
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(format!("invalid http method: '{other}'")),
        }
    }
}

/// Body of a `request` statement: raw text or string-valued fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestBody {
    Text(String),
    Fields(HashMap<String, String>),
}

/// Multi-way branch keyed by a variable's string value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Switch {
    /// Name of the variable whose value is compared.
    pub variable: String,
    /// Maps each candidate value to the steps to run when it matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<HashMap<String, Vec<Step>>>,
    /// Steps to run when no case matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Vec<Step>>,
}

impl Switch {
    /// A switch on `variable` with no cases and no default arm.
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            case: None,
            default: None,
        }
    }
}

/// Two-way branch on a boolean condition expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cond {
    /// The condition expression to evaluate.
    pub when: String,
    /// Steps to run when the condition is true.
    pub then: Vec<Step>,
    /// Steps to run when the condition is false.
    #[serde(rename = "else")]
    pub otherwise: Vec<Step>,
}

impl Cond {
    pub fn new(when: impl Into<String>, then: Vec<Step>, otherwise: Vec<Step>) -> Self {
        Self {
            when: when.into(),
            then,
            otherwise,
        }
    }
}

/// Unset the named script variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unset {
    /// Name or names of the variables to unset.
    pub vars: OneOrMany,
}

impl Unset {
    pub fn new(vars: impl Into<OneOrMany>) -> Self {
        Self { vars: vars.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::BareMethod;
    use serde_json::json;

    #[test]
    fn test_transfer_single_key_shape() {
        let stmt = Statement::Transfer(Transfer {
            dest: "https://example.com/next".to_owned(),
            params: None,
            meta: None,
        });
        assert_eq!(
            serde_json::to_value(&stmt).unwrap(),
            json!({"transfer": {"dest": "https://example.com/next"}})
        );
    }

    #[test]
    fn test_request_optional_fields_omitted() {
        let stmt = Statement::Request(Request {
            url: "https://api.example.com/hook".to_owned(),
            method: HttpMethod::Post,
            headers: None,
            body: Some(RequestBody::Text("ping".to_owned())),
            timeout: None,
            connect_timeout: None,
            save_variables: None,
        });
        assert_eq!(
            serde_json::to_value(&stmt).unwrap(),
            json!({"request": {
                "url": "https://api.example.com/hook",
                "method": "POST",
                "body": "ping"
            }})
        );
    }

    #[test]
    fn test_http_method_spelling() {
        for (method, s) in [
            (HttpMethod::Get, "GET"),
            (HttpMethod::Post, "POST"),
            (HttpMethod::Put, "PUT"),
            (HttpMethod::Delete, "DELETE"),
        ] {
            assert_eq!(serde_json::to_value(method).unwrap(), json!(s));
            assert_eq!(method.to_string(), s);
            assert_eq!(s.parse::<HttpMethod>().unwrap(), method);
        }
        assert!("PATCH".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_switch_with_step_arms() {
        let mut case = HashMap::new();
        case.insert(
            "1".to_owned(),
            vec![Step::Bare(BareMethod::Hangup)],
        );
        let stmt = Statement::Switch(Switch {
            variable: "digit".to_owned(),
            case: Some(case),
            default: Some(vec![]),
        });
        assert_eq!(
            serde_json::to_value(&stmt).unwrap(),
            json!({"switch": {
                "variable": "digit",
                "case": {"1": ["hangup"]},
                "default": []
            }})
        );
    }

    #[test]
    fn test_cond_else_spelling() {
        let stmt = Statement::Cond(Cond {
            when: "answered == true".to_owned(),
            then: vec![Step::Bare(BareMethod::Denoise)],
            otherwise: vec![Step::Bare(BareMethod::Hangup)],
        });
        assert_eq!(
            serde_json::to_value(&stmt).unwrap(),
            json!({"cond": {
                "when": "answered == true",
                "then": ["denoise"],
                "else": ["hangup"]
            }})
        );
    }

    #[test]
    fn test_set_and_return_open_bags() {
        let mut vars = HashMap::new();
        vars.insert("count".to_owned(), json!(3));
        let set = Statement::Set(vars.clone());
        assert_eq!(
            serde_json::to_value(&set).unwrap(),
            json!({"set": {"count": 3}})
        );
        let ret = Statement::Return(vars);
        assert_eq!(
            serde_json::to_value(&ret).unwrap(),
            json!({"return": {"count": 3}})
        );
    }

    #[test]
    fn test_unset_one_or_many() {
        let one = Statement::Unset(Unset {
            vars: OneOrMany::from("count"),
        });
        assert_eq!(
            serde_json::to_value(&one).unwrap(),
            json!({"unset": {"vars": "count"}})
        );
        let many = Statement::Unset(Unset {
            vars: OneOrMany::from(vec!["a".to_owned(), "b".to_owned()]),
        });
        assert_eq!(
            serde_json::to_value(&many).unwrap(),
            json!({"unset": {"vars": ["a", "b"]}})
        );
    }
}
