//! The `ScriptBuilder` accumulator.
//!
//! Owns exactly one in-progress [`Document`]. Every append method pushes one
//! step onto the `main` section and returns `&mut Self` so calls chain; the
//! accumulated document is read at any point through [`ScriptBuilder::get`]
//! or taken with [`ScriptBuilder::into_document`]. Appends are monotonic --
//! nothing ever reorders, edits, or removes a step that was pushed.

use std::collections::HashMap;

use serde_json::Value;

use callscript_types::ai::Ai;
use callscript_types::document::{BareMethod, Document, Section, Step};
use callscript_types::method::{
    Answer, Connect, Denoise, Hangup, JoinRoom, Method, Play, Prompt, Record, RecordCall,
    SendDigits, SendFax, SendSms, SipRefer, StopDenoise, StopRecordCall, StopTap, Tap,
};
use callscript_types::statement::{Cond, Execute, Request, Statement, Switch, Transfer, Unset};

/// Accumulates one call-control script document.
///
/// ```
/// use callscript_builder::ScriptBuilder;
/// use callscript_types::method::Play;
///
/// let mut builder = ScriptBuilder::new();
/// builder
///     .answer()
///     .play(Play::new("say:Hello"))
///     .hangup();
/// let json = builder.get().to_json().unwrap();
/// assert_eq!(
///     json,
///     r#"{"sections":{"main":["answer",{"play":{"url":"say:Hello"}},"hangup"]}}"#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptBuilder {
    document: Document,
}

impl ScriptBuilder {
    /// A builder holding an empty document: `{"sections": {"main": []}}`.
    pub fn new() -> Self {
        Self {
            document: Document::new(),
        }
    }

    /// The document as accumulated so far.
    pub fn get(&self) -> &Document {
        &self.document
    }

    /// Consume the builder and take the document.
    pub fn into_document(self) -> Document {
        self.document
    }

    fn push(&mut self, step: impl Into<Step>) -> &mut Self {
        self.document.push_main(step);
        self
    }

    // -----------------------------------------------------------------------
    // Statements
    // -----------------------------------------------------------------------

    /// Transfer execution to a section, URL, or relay context. Analogous to
    /// a goto.
    pub fn transfer(&mut self, params: Transfer) -> &mut Self {
        self.push(Statement::Transfer(params))
    }

    /// Execute a section or URL as a subroutine, returning here when it
    /// finishes.
    pub fn execute(&mut self, params: Execute) -> &mut Self {
        self.push(Statement::Execute(params))
    }

    /// Return from `execute`, or exit the script, yielding `value`.
    pub fn return_(&mut self, value: HashMap<String, Value>) -> &mut Self {
        self.push(Statement::Return(value))
    }

    /// Send a GET, POST, PUT, or DELETE request to a remote URL.
    pub fn request(&mut self, params: Request) -> &mut Self {
        self.push(Statement::Request(params))
    }

    /// Branch on which value matches a variable.
    pub fn switch(&mut self, params: Switch) -> &mut Self {
        self.push(Statement::Switch(params))
    }

    /// Branch on a boolean condition expression.
    pub fn cond(&mut self, params: Cond) -> &mut Self {
        self.push(Statement::Cond(params))
    }

    /// Set script variables to the given values.
    pub fn set(&mut self, vars: HashMap<String, Value>) -> &mut Self {
        self.push(Statement::Set(vars))
    }

    /// Unset the named script variables.
    pub fn unset(&mut self, params: Unset) -> &mut Self {
        self.push(Statement::Unset(params))
    }

    // -----------------------------------------------------------------------
    // Methods
    // -----------------------------------------------------------------------

    /// Answer the call with default parameters.
    pub fn answer(&mut self) -> &mut Self {
        self.push(BareMethod::Answer)
    }

    /// Answer the call with an explicit maximum duration.
    pub fn answer_with(&mut self, params: Answer) -> &mut Self {
        self.push(Method::Answer(params))
    }

    /// End the call with the default reason.
    pub fn hangup(&mut self) -> &mut Self {
        self.push(BareMethod::Hangup)
    }

    /// End the call with a reason, either the bare literal or the object
    /// form.
    pub fn hangup_with(&mut self, params: impl Into<Hangup>) -> &mut Self {
        self.push(Method::Hangup(params.into()))
    }

    /// Play a prompt and wait for digit or speech input.
    pub fn prompt(&mut self, params: Prompt) -> &mut Self {
        self.push(Method::Prompt(params))
    }

    /// Play files, ringtones, speech, or silence.
    pub fn play(&mut self, params: Play) -> &mut Self {
        self.push(Method::Play(params))
    }

    /// Record call audio in the foreground, e.g. voicemail.
    pub fn record(&mut self, params: Record) -> &mut Self {
        self.push(Method::Record(params))
    }

    /// Record the call in the background.
    pub fn record_call(&mut self, params: RecordCall) -> &mut Self {
        self.push(Method::RecordCall(params))
    }

    /// Stop the most recently started background recording.
    pub fn stop_record_call(&mut self) -> &mut Self {
        self.push(BareMethod::StopRecordCall)
    }

    /// Stop the background recording named by `control_id`.
    pub fn stop_record_call_with(&mut self, params: StopRecordCall) -> &mut Self {
        self.push(Method::StopRecordCall(params))
    }

    /// Join a relay room.
    pub fn join_room(&mut self, params: JoinRoom) -> &mut Self {
        self.push(Method::JoinRoom(params))
    }

    /// Start noise reduction.
    pub fn denoise(&mut self) -> &mut Self {
        self.push(BareMethod::Denoise)
    }

    /// Start noise reduction with an explicit result field.
    pub fn denoise_with(&mut self, params: Denoise) -> &mut Self {
        self.push(Method::Denoise(params))
    }

    /// Stop noise reduction.
    pub fn stop_denoise(&mut self) -> &mut Self {
        self.push(BareMethod::StopDenoise)
    }

    /// Stop noise reduction with an explicit result field.
    pub fn stop_denoise_with(&mut self, params: StopDenoise) -> &mut Self {
        self.push(Method::StopDenoise(params))
    }

    /// Receive a fax being delivered to this call.
    pub fn receive_fax(&mut self) -> &mut Self {
        self.push(BareMethod::ReceiveFax)
    }

    /// Receive a fax with an explicit parameter value.
    pub fn receive_fax_with(&mut self, params: Value) -> &mut Self {
        self.push(Method::ReceiveFax(params))
    }

    /// Send a fax.
    pub fn send_fax(&mut self, params: SendFax) -> &mut Self {
        self.push(Method::SendFax(params))
    }

    /// Send SIP REFER to a SIP call.
    pub fn sip_refer(&mut self, params: SipRefer) -> &mut Self {
        self.push(Method::SipRefer(params))
    }

    /// Dial a SIP URI or phone number.
    pub fn connect(&mut self, params: Connect) -> &mut Self {
        self.push(Method::Connect(params))
    }

    /// Start a background tap of the call media.
    pub fn tap(&mut self, params: Tap) -> &mut Self {
        self.push(Method::Tap(params))
    }

    /// Stop the most recently started tap stream.
    pub fn stop_tap(&mut self) -> &mut Self {
        self.push(BareMethod::StopTap)
    }

    /// Stop the tap stream named by `control_id`.
    pub fn stop_tap_with(&mut self, params: StopTap) -> &mut Self {
        self.push(Method::StopTap(params))
    }

    /// Send digit presses as DTMF tones.
    pub fn send_digits(&mut self, params: SendDigits) -> &mut Self {
        self.push(Method::SendDigits(params))
    }

    /// Send an outbound SMS to a PSTN number.
    pub fn send_sms(&mut self, params: SendSms) -> &mut Self {
        self.push(Method::SendSms(params))
    }

    /// Hand the call to an AI agent.
    pub fn ai(&mut self, params: Ai) -> &mut Self {
        self.push(Method::Ai(Box::new(params)))
    }

    // -----------------------------------------------------------------------
    // Sections
    // -----------------------------------------------------------------------

    /// Register `body` as a section named `name`, overwriting any existing
    /// section of that name. The section becomes a subroutine reachable via
    /// `execute` or `transfer`.
    pub fn subroutine(&mut self, name: impl Into<String>, body: impl Into<Section>) -> &mut Self {
        self.document.set_section(name, body);
        self
    }
}
