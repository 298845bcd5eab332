//! Configuration for the `ai` method: conversational agent prompts,
//! sampling parameters, status callbacks, callable functions, and language
//! settings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Hand the call to an AI agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Ai {
    /// TTS engine the agent uses. Platform picks one when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    /// TTS voice the agent uses. Platform picks one when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    /// Initial instructions and settings for the agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<AiPrompt>,
    /// Final instructions sent to the agent when the dialogue ends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_prompt: Option<AiPrompt>,
    /// URL to send status callbacks and reports to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_prompt_url: Option<String>,
    /// Auth username for the `post_prompt_url` endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_prompt_auth_user: Option<String>,
    /// Auth password for the `post_prompt_url` endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_prompt_auth_password: Option<String>,
    /// Experimental parameters (sms, background audio, attention_timeout,
    /// etc.).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<HashMap<String, Value>>,
    /// User-defined functions the agent can call during the dialogue.
    /// Serialized under the platform's uppercase `SWAIG` key.
    #[serde(rename = "SWAIG", default, skip_serializing_if = "Option::is_none")]
    pub swaig: Option<Swaig>,
    /// Hints providing context to the dialogue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<String>>,
    /// Languages supported in the conversation. Platform default `en-us`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<AiLanguage>>,
}

/// Prompt text plus sampling parameters for the agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AiPrompt {
    /// The instruction text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barge_confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
}

/// Caller-defined callable functions with their webhooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Swaig {
    /// Defaults applied to every function that does not override them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<SwaigDefaults>,
    /// The callable functions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions: Option<Vec<SwaigFunction>>,
}

/// Shared webhook settings for callable functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SwaigDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_hook_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_hook_auth_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_hook_auth_pass: Option<String>,
    /// User data attached to every webhook invocation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<HashMap<String, Value>>,
}

/// One function the agent may call during the dialogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwaigFunction {
    /// Function name the agent invokes.
    pub function: String,
    /// What the function is for, in natural language.
    pub purpose: String,
    /// Description of the argument the agent should pass.
    pub argument: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_hook_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_hook_auth_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_hook_auth_pass: Option<String>,
}

/// A language supported in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AiLanguage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
}
