//! Seal requests and the status object returned to callers.
//!
//! The wire payload is a flat JSON object keyed by `sealStyle`. It is parsed
//! into [`SealPayload`] (everything optional) and then validated into a typed
//! [`SealRequest`], so a missing field becomes a descriptive `InvalidRequest`
//! rather than a deserializer error.

use super::config::RectangleSealLayout;
use super::error::{SealError, SealResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_INNER_WORD_UPPER: &str = "NOTARY";
pub const DEFAULT_INNER_WORD_LOWER: &str = "PUBLIC";

/// Circular notary seal.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleSeal {
    pub upper_text: String,
    pub lower_text: String,
    pub inner_word_upper: String,
    pub inner_word_lower: String,
    pub notary_id: String,
    pub expiry_date: String,
    pub output_path: PathBuf,
}

impl CircleSeal {
    /// Circle seal with the default inner words.
    pub fn new(
        upper_text: impl Into<String>,
        lower_text: impl Into<String>,
        notary_id: impl Into<String>,
        expiry_date: impl Into<String>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        CircleSeal {
            upper_text: upper_text.into(),
            lower_text: lower_text.into(),
            inner_word_upper: DEFAULT_INNER_WORD_UPPER.to_string(),
            inner_word_lower: DEFAULT_INNER_WORD_LOWER.to_string(),
            notary_id: notary_id.into(),
            expiry_date: expiry_date.into(),
            output_path: output_path.into(),
        }
    }
}

/// Rectangular notary stamp.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleSeal {
    pub top_text: String,
    pub bottom_text: String,
    pub signer_name: String,
    pub notary_id: String,
    pub expiry_date: String,
    pub output_path: PathBuf,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl RectangleSeal {
    /// Rectangle stamp on the default 600x250 canvas.
    pub fn new(
        top_text: impl Into<String>,
        bottom_text: impl Into<String>,
        signer_name: impl Into<String>,
        notary_id: impl Into<String>,
        expiry_date: impl Into<String>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        RectangleSeal {
            top_text: top_text.into(),
            bottom_text: bottom_text.into(),
            signer_name: signer_name.into(),
            notary_id: notary_id.into(),
            expiry_date: expiry_date.into(),
            output_path: output_path.into(),
            canvas_width: RectangleSealLayout::DEFAULT_WIDTH,
            canvas_height: RectangleSealLayout::DEFAULT_HEIGHT,
        }
    }
}

/// A validated seal request. Exactly one style per request.
#[derive(Debug, Clone, PartialEq)]
pub enum SealRequest {
    Circle(CircleSeal),
    Rectangle(RectangleSeal),
}

impl SealRequest {
    pub fn output_path(&self) -> &Path {
        match self {
            SealRequest::Circle(seal) => &seal.output_path,
            SealRequest::Rectangle(seal) => &seal.output_path,
        }
    }

    pub fn style(&self) -> &'static str {
        match self {
            SealRequest::Circle(_) => "circle",
            SealRequest::Rectangle(_) => "rectangle",
        }
    }

    /// Parse and validate a JSON request.
    pub fn from_json(json: &str) -> SealResult<Self> {
        let payload: SealPayload = serde_json::from_str(json)
            .map_err(|e| SealError::invalid(format!("malformed request JSON: {e}")))?;
        SealRequest::try_from(payload)
    }
}

/// Raw request as delivered by the calling service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SealPayload {
    pub seal_style: Option<String>,
    pub out_file: Option<PathBuf>,
    pub notary_id: Option<String>,
    pub expire_on: Option<String>,

    // circle
    pub upper_circle_text: Option<String>,
    pub lower_circle_text: Option<String>,
    pub inner_word_upper: Option<String>,
    pub inner_word_lower: Option<String>,

    // rectangle
    #[serde(alias = "topCurevedText")]
    pub top_curved_text: Option<String>,
    pub bottom_curved_text: Option<String>,
    pub notary_name: Option<String>,
    pub canvas_width: Option<u32>,
    pub canvas_height: Option<u32>,
}

fn required<T>(value: Option<T>, field: &str) -> SealResult<T> {
    value.ok_or_else(|| SealError::invalid(format!("missing required field `{field}`")))
}

impl TryFrom<SealPayload> for SealRequest {
    type Error = SealError;

    fn try_from(payload: SealPayload) -> SealResult<Self> {
        let style = required(payload.seal_style, "sealStyle")?;
        let output_path = required(payload.out_file, "outFile")?;
        if output_path.as_os_str().is_empty() {
            return Err(SealError::invalid("`outFile` is empty"));
        }

        match style.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(SealRequest::Circle(CircleSeal {
                upper_text: required(payload.upper_circle_text, "upperCircleText")?,
                lower_text: required(payload.lower_circle_text, "lowerCircleText")?,
                inner_word_upper: payload
                    .inner_word_upper
                    .unwrap_or_else(|| DEFAULT_INNER_WORD_UPPER.to_string()),
                inner_word_lower: payload
                    .inner_word_lower
                    .unwrap_or_else(|| DEFAULT_INNER_WORD_LOWER.to_string()),
                notary_id: required(payload.notary_id, "notaryId")?,
                expiry_date: required(payload.expire_on, "expireOn")?,
                output_path,
            })),
            "rectangle" => {
                let canvas_width = payload
                    .canvas_width
                    .unwrap_or(RectangleSealLayout::DEFAULT_WIDTH);
                let canvas_height = payload
                    .canvas_height
                    .unwrap_or(RectangleSealLayout::DEFAULT_HEIGHT);
                if canvas_width == 0 || canvas_height == 0 {
                    return Err(SealError::invalid(format!(
                        "canvas must be non-empty, got {canvas_width}x{canvas_height}"
                    )));
                }
                let max = RectangleSealLayout::MAX_SIDE;
                if canvas_width > max || canvas_height > max {
                    return Err(SealError::invalid(format!(
                        "canvas {canvas_width}x{canvas_height} exceeds {max}x{max}"
                    )));
                }
                Ok(SealRequest::Rectangle(RectangleSeal {
                    top_text: required(payload.top_curved_text, "topCurvedText")?,
                    bottom_text: required(payload.bottom_curved_text, "bottomCurvedText")?,
                    signer_name: required(payload.notary_name, "notaryName")?,
                    notary_id: required(payload.notary_id, "notaryId")?,
                    expiry_date: required(payload.expire_on, "expireOn")?,
                    output_path,
                    canvas_width,
                    canvas_height,
                }))
            }
            other => Err(SealError::invalid(format!("invalid style of seal: '{other}'"))),
        }
    }
}

/// Uniform result handed back to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SealStatus {
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SealStatus {
    pub fn success(out_file: impl Into<PathBuf>) -> Self {
        SealStatus {
            status: true,
            out_file: Some(out_file.into()),
            message: None,
        }
    }

    pub fn failure(out_file: Option<PathBuf>, error: &SealError) -> Self {
        SealStatus {
            status: false,
            out_file,
            message: Some(error.to_string()),
        }
    }

    /// Status as a JSON string.
    pub fn to_json(&self) -> String {
        // Only strings, bools and paths: serialization cannot fail
        serde_json::to_string(self).unwrap_or_else(|_| format!("{{\"status\":{}}}", self.status))
    }
}
