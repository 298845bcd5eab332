//! Call-control and media methods: answer, hangup, prompt, play, record,
//! connect, tap, send_sms, and the rest.
//!
//! The `ai` method lives in its own module (`crate::ai`) because its
//! configuration dwarfs every other parameter shape.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ai::Ai;
use crate::document::OneOrMany;

/// A call-control/media method, externally tagged so each serializes as the
/// single-key `{name: params}` map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Answer the call.
    Answer(Answer),
    /// End the call.
    Hangup(Hangup),
    /// Play a prompt and wait for digit or speech input.
    Prompt(Prompt),
    /// Play files, ringtones, speech, or silence without blocking on input.
    Play(Play),
    /// Record call audio in the foreground (e.g. voicemail).
    Record(Record),
    /// Record the call in the background.
    RecordCall(RecordCall),
    /// Stop an active background recording.
    StopRecordCall(StopRecordCall),
    /// Join a relay room.
    JoinRoom(JoinRoom),
    /// Start noise reduction.
    Denoise(Denoise),
    /// Stop noise reduction.
    StopDenoise(StopDenoise),
    /// Receive a fax being delivered to this call.
    ReceiveFax(Value),
    /// Send a fax.
    SendFax(SendFax),
    /// Send SIP REFER to a SIP call.
    SipRefer(SipRefer),
    /// Dial a SIP URI or phone number.
    Connect(Connect),
    /// Start a background media tap.
    Tap(Tap),
    /// Stop an active tap stream.
    StopTap(StopTap),
    /// Send digit presses as DTMF tones.
    SendDigits(SendDigits),
    /// Send an outbound SMS to a PSTN number.
    SendSms(SendSms),
    /// Hand the call to an AI agent.
    Ai(Box<Ai>),
}

/// Answer the call and set an optional maximum duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Answer {
    /// Maximum call duration in seconds. May not be less than 7. Platform
    /// default is 14100 (4 hours).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<u32>,
}

/// Parameters for `hangup`: either the bare reason literal or the `{reason}`
/// object form. Both spellings are accepted by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Hangup {
    /// `{"hangup": "busy"}`
    Reason(HangupReason),
    /// `{"hangup": {"reason": "busy"}}`
    Params(HangupParams),
}

impl From<HangupReason> for Hangup {
    fn from(reason: HangupReason) -> Self {
        Hangup::Reason(reason)
    }
}

impl From<HangupParams> for Hangup {
    fn from(params: HangupParams) -> Self {
        Hangup::Params(params)
    }
}

/// Object form of the `hangup` parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HangupParams {
    pub reason: HangupReason,
}

/// Why the call is being ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HangupReason {
    Hangup,
    Busy,
    Decline,
}

impl fmt::Display for HangupReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HangupReason::Hangup => write!(f, "hangup"),
            HangupReason::Busy => write!(f, "busy"),
            HangupReason::Decline => write!(f, "decline"),
        }
    }
}

impl FromStr for HangupReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hangup" => Ok(HangupReason::Hangup),
            "busy" => Ok(HangupReason::Busy),
            "decline" => Ok(HangupReason::Decline),
            other => Err(format!("invalid hangup reason: '{other}'")),
        }
    }
}

/// Play a prompt and wait for digit or speech input.
///
/// Speech detection is enabled only when at least one speech parameter is
/// set; digit detection only when at least one digit parameter is set. Set
/// one of each to enable both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    /// URL or list of URLs to play: `http(s)://` audio,
    /// `ring:[duration:]<country>`, `say:<text>`, or `silence:<seconds>`.
    pub play: OneOrMany,
    /// Volume gain to apply to the played URLs. Platform default 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    /// Voice for text to speech.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub say_voice: Option<String>,
    /// Language for text to speech. Platform default `en-US`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub say_language: Option<String>,
    /// Gender for text to speech. Platform default `female`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub say_gender: Option<String>,
    /// Number of digits to collect. Platform default 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_digits: Option<u32>,
    /// Digits that terminate digit collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminators: Option<String>,
    /// Seconds to wait for the next digit. Platform default 5.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digit_timeout: Option<f64>,
    /// Seconds to wait for the start of input. Platform default 5.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_timeout: Option<f64>,
    /// Maximum seconds to wait for a speech result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speech_timeout: Option<f64>,
    /// Seconds to wait for the end of a speech utterance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speech_end_timeout: Option<f64>,
    /// Language to detect speech in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speech_language: Option<String>,
    /// Expected words to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speech_hints: Option<Vec<String>>,
}

impl Prompt {
    /// A prompt playing `play` with every optional field unset.
    pub fn new(play: impl Into<OneOrMany>) -> Self {
        Self {
            play: play.into(),
            volume: None,
            say_voice: None,
            say_language: None,
            say_gender: None,
            max_digits: None,
            terminators: None,
            digit_timeout: None,
            initial_timeout: None,
            speech_timeout: None,
            speech_end_timeout: None,
            speech_language: None,
            speech_hints: None,
        }
    }
}

/// Play files, ringtones, speech, or silence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Play {
    /// URL to play. Same schemes as [`Prompt::play`].
    pub url: String,
    /// Additional URLs to play.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,
    /// Volume gain, from -40.0 to 40.0. Platform default 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    /// Voice for text to speech.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub say_voice: Option<String>,
    /// Language for text to speech. Platform default `en-US`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub say_language: Option<String>,
    /// Gender for text to speech. Platform default `female`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub say_gender: Option<String>,
}

impl Play {
    /// Play a single `url` with every optional field unset.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            urls: None,
            volume: None,
            say_voice: None,
            say_language: None,
            say_gender: None,
        }
    }
}

/// Record call audio in the foreground, e.g. for voicemail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Record {
    /// Record in stereo. Platform default false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stereo: Option<bool>,
    /// Recording format, `wav` or `mp3`. Platform default `wav`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Audio direction: `speak` for what the party says, `hear` for what it
    /// hears. Platform default `speak`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// Digits that stop the recording when pressed. Platform default `#`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminators: Option<String>,
    /// Play a beep before recording. Platform default false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beep: Option<bool>,
    /// Voice activity detector sensitivity, 0.0 to 100.0 (larger is more
    /// sensitive). Platform default 44.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_sensitivity: Option<f64>,
    /// Seconds to wait for speech to start. Platform default 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_timeout: Option<f64>,
    /// Seconds of silence that end the recording. Platform default 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_silence_timeout: Option<f64>,
}

/// Record the call in the background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RecordCall {
    /// Identifier for this recording, for use with `stop_record_call`. When
    /// omitted one is generated and saved to the `record_control_id`
    /// variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_id: Option<String>,
    /// Record in stereo. Platform default false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stereo: Option<bool>,
    /// Recording format, `wav` or `mp3`. Platform default `wav`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Audio direction: `speak`, `hear`, or `both`. Platform default `both`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// Digits that stop the recording when pressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminators: Option<String>,
    /// Play a beep before recording. Platform default false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beep: Option<bool>,
    /// Voice activity detector sensitivity, 0.0 to 100.0. Platform default
    /// 44.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_sensitivity: Option<f64>,
    /// Seconds to wait for speech to start. Platform default 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_timeout: Option<f64>,
    /// Seconds of silence that end the recording. Platform default 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_silence_timeout: Option<f64>,
}

/// Stop an active background recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StopRecordCall {
    /// Identifier of the recording to stop. When omitted, the last recording
    /// started is stopped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_id: Option<String>,
}

/// Join a relay room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinRoom {
    /// Name of the room to join.
    pub name: String,
}

/// Start noise reduction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Denoise {
    /// Result echoed back by the platform: `on` or `failed`.
    pub denoise_result: DenoiseResult,
}

/// Stop noise reduction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopDenoise {
    /// Result echoed back by the platform. Fixed value `off`.
    pub denoise_result: DenoiseResult,
}

/// Noise reduction result literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DenoiseResult {
    On,
    Failed,
    Off,
}

impl fmt::Display for DenoiseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenoiseResult::On => write!(f, "on"),
            DenoiseResult::Failed => write!(f, "failed"),
            DenoiseResult::Off => write!(f, "off"),
        }
    }
}

/// Send a fax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendFax {
    /// URL of the PDF document to fax.
    pub document: String,
    /// Text to add to the fax header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_info: Option<String>,
    /// Station identity to report. Platform default is the caller ID number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
}

/// Send SIP REFER to a SIP call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipRefer {
    /// The SIP URI to REFER to.
    pub to_uri: String,
}

/// Dial a SIP URI or phone number.
///
/// Exactly one destination shape is set, enforced by
/// [`ConnectDestination`]; the dialing options apply to whichever shape is
/// chosen. The SIP-only options (`headers`, `codecs`, `webrtc_media`,
/// `session_timeout`) have no effect on calls to phone numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connect {
    /// The destination(s) to dial, flattened into the parameter object.
    #[serde(flatten)]
    pub destination: ConnectDestination,
    /// Caller ID number. Platform default is the calling party's number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Custom SIP headers to add to the INVITE.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, Value>>,
    /// Comma-separated codecs to offer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codecs: Option<String>,
    /// Offer WebRTC media to the SIP endpoint. Platform default false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webrtc_media: Option<bool>,
    /// Seconds for the SIP Session-Expires header. Must be positive and
    /// non-zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_timeout: Option<u32>,
    /// Play URIs to use as the ringback tone. Platform default plays audio
    /// from the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ringback: Option<Vec<String>>,
}

impl Connect {
    /// Connect to `destination` with every dialing option unset.
    pub fn new(destination: ConnectDestination) -> Self {
        Self {
            destination,
            from: None,
            headers: None,
            codecs: None,
            webrtc_media: None,
            session_timeout: None,
            ringback: None,
        }
    }

    /// Dial a single destination.
    pub fn to(dest: impl Into<String>) -> Self {
        Self::new(ConnectDestination::To { to: dest.into() })
    }

    /// Dial each destination in order until one answers.
    pub fn serial(dests: Vec<String>) -> Self {
        Self::new(ConnectDestination::Serial { serial: dests })
    }

    /// Dial all destinations simultaneously.
    pub fn parallel(dests: Vec<String>) -> Self {
        Self::new(ConnectDestination::Parallel { parallel: dests })
    }

    /// Attempt each group in order, dialing within a group simultaneously.
    pub fn serial_parallel(groups: Vec<Vec<String>>) -> Self {
        Self::new(ConnectDestination::SerialParallel {
            serial_parallel: groups,
        })
    }
}

/// The four mutually exclusive destination shapes for `connect`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConnectDestination {
    /// Dial a single destination.
    To { to: String },
    /// Dial a list of destinations one after another.
    Serial { serial: Vec<String> },
    /// Dial a list of destinations simultaneously.
    Parallel { parallel: Vec<String> },
    /// Attempt each inner group in order, dialing the destinations within a
    /// group simultaneously.
    SerialParallel { serial_parallel: Vec<Vec<String>> },
}

/// Start a background call tap. Media is streamed over WebSocket or RTP to
/// the given URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tap {
    /// Destination of the tap media stream: `rtp://<IP:port>`, `ws://<URL>`,
    /// or `wss://<URL>`.
    pub uri: String,
    /// Identifier for this tap, for use with `stop_tap`. When omitted one is
    /// generated and stored in the `tap_control_id` variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_id: Option<String>,
    /// Audio direction: `speak`, `hear`, or `both`. Platform default `both`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// Audio codec, `PCMU` or `PCMA`. Platform default `PCMU`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
    /// Packetization time in milliseconds, RTP URIs only. Platform default
    /// 20.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rtp_ptime: Option<u32>,
}

impl Tap {
    /// Tap to `uri` with every optional field unset.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            control_id: None,
            direction: None,
            codec: None,
            rtp_ptime: None,
        }
    }
}

/// Stop an active tap stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StopTap {
    /// Control ID of the tap to stop. When omitted, the last tap started is
    /// stopped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_id: Option<String>,
}

/// Send digit presses as DTMF tones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendDigits {
    /// The digits to send. Valid characters are `0123456789*#ABCDWw`; `W` is
    /// a 1 second delay and `w` a 500 ms delay.
    pub digits: String,
}

/// Send an outbound message to a PSTN phone number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendSms {
    /// Number to send the message to, in e.164 format.
    pub to_number: String,
    /// Number the message is sent from.
    pub from_number: String,
    /// Body of the message. Required unless media is included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Media URLs to include. Required unless a body is included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<String>>,
    /// Region of the world to originate the message from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Tags to associate with the message, to ease log searches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl SendSms {
    /// A message from `from_number` to `to_number` with no body or media
    /// yet.
    pub fn new(to_number: impl Into<String>, from_number: impl Into<String>) -> Self {
        Self {
            to_number: to_number.into(),
            from_number: from_number.into(),
            body: None,
            media: None,
            region: None,
            tags: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answer_with_max_duration() {
        let method = Method::Answer(Answer {
            max_duration: Some(30),
        });
        assert_eq!(
            serde_json::to_value(&method).unwrap(),
            json!({"answer": {"max_duration": 30}})
        );
    }

    #[test]
    fn test_hangup_bare_reason_and_object_form() {
        let bare = Method::Hangup(Hangup::from(HangupReason::Busy));
        assert_eq!(serde_json::to_value(&bare).unwrap(), json!({"hangup": "busy"}));

        let object = Method::Hangup(Hangup::from(HangupParams {
            reason: HangupReason::Decline,
        }));
        assert_eq!(
            serde_json::to_value(&object).unwrap(),
            json!({"hangup": {"reason": "decline"}})
        );
    }

    #[test]
    fn test_hangup_reason_roundtrip() {
        for reason in [HangupReason::Hangup, HangupReason::Busy, HangupReason::Decline] {
            let parsed: HangupReason = reason.to_string().parse().unwrap();
            assert_eq!(parsed, reason);
        }
    }

    #[test]
    fn test_prompt_play_accepts_one_or_many() {
        let method = Method::Prompt(Prompt {
            play: OneOrMany::from("say:Enter your PIN"),
            volume: None,
            say_voice: None,
            say_language: None,
            say_gender: None,
            max_digits: Some(4),
            terminators: Some("#".to_owned()),
            digit_timeout: None,
            initial_timeout: None,
            speech_timeout: None,
            speech_end_timeout: None,
            speech_language: None,
            speech_hints: None,
        });
        assert_eq!(
            serde_json::to_value(&method).unwrap(),
            json!({"prompt": {
                "play": "say:Enter your PIN",
                "max_digits": 4,
                "terminators": "#"
            }})
        );
    }

    #[test]
    fn test_connect_to_shape_only() {
        let method = Method::Connect(Connect {
            destination: ConnectDestination::To {
                to: "+15551234567".to_owned(),
            },
            from: None,
            headers: None,
            codecs: None,
            webrtc_media: None,
            session_timeout: None,
            ringback: None,
        });
        assert_eq!(
            serde_json::to_value(&method).unwrap(),
            json!({"connect": {"to": "+15551234567"}})
        );
    }

    #[test]
    fn test_connect_serial_parallel_shapes() {
        let serial = Connect {
            destination: ConnectDestination::Serial {
                serial: vec!["+15550001111".to_owned(), "+15550002222".to_owned()],
            },
            from: Some("+15559998888".to_owned()),
            headers: None,
            codecs: None,
            webrtc_media: None,
            session_timeout: None,
            ringback: None,
        };
        assert_eq!(
            serde_json::to_value(&serial).unwrap(),
            json!({
                "serial": ["+15550001111", "+15550002222"],
                "from": "+15559998888"
            })
        );

        let groups = Connect {
            destination: ConnectDestination::SerialParallel {
                serial_parallel: vec![
                    vec!["sip:a@example.com".to_owned()],
                    vec!["sip:b@example.com".to_owned(), "sip:c@example.com".to_owned()],
                ],
            },
            from: None,
            headers: None,
            codecs: None,
            webrtc_media: None,
            session_timeout: None,
            ringback: None,
        };
        assert_eq!(
            serde_json::to_value(&groups).unwrap(),
            json!({"serial_parallel": [
                ["sip:a@example.com"],
                ["sip:b@example.com", "sip:c@example.com"]
            ]})
        );
    }

    #[test]
    fn test_denoise_result_literals() {
        let method = Method::Denoise(Denoise {
            denoise_result: DenoiseResult::On,
        });
        assert_eq!(
            serde_json::to_value(&method).unwrap(),
            json!({"denoise": {"denoise_result": "on"}})
        );
        let method = Method::StopDenoise(StopDenoise {
            denoise_result: DenoiseResult::Off,
        });
        assert_eq!(
            serde_json::to_value(&method).unwrap(),
            json!({"stop_denoise": {"denoise_result": "off"}})
        );
    }

    #[test]
    fn test_tap_and_stop_tap() {
        let method = Method::Tap(Tap {
            uri: "wss://media.example.com/tap".to_owned(),
            control_id: Some("tap-1".to_owned()),
            direction: Some("both".to_owned()),
            codec: None,
            rtp_ptime: None,
        });
        assert_eq!(
            serde_json::to_value(&method).unwrap(),
            json!({"tap": {
                "uri": "wss://media.example.com/tap",
                "control_id": "tap-1",
                "direction": "both"
            }})
        );
        let method = Method::StopTap(StopTap { control_id: None });
        assert_eq!(
            serde_json::to_value(&method).unwrap(),
            json!({"stop_tap": {}})
        );
    }

    #[test]
    fn test_send_sms_shape() {
        let method = Method::SendSms(SendSms {
            to_number: "+15551234567".to_owned(),
            from_number: "+15557654321".to_owned(),
            body: Some("Your code is 1234".to_owned()),
            media: None,
            region: None,
            tags: Some(vec!["otp".to_owned()]),
        });
        assert_eq!(
            serde_json::to_value(&method).unwrap(),
            json!({"send_sms": {
                "to_number": "+15551234567",
                "from_number": "+15557654321",
                "body": "Your code is 1234",
                "tags": ["otp"]
            }})
        );
    }
}
