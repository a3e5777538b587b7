//! Boundary to the external generative text service
//!
//! A [`PlanSource`] turns a request into free text that is expected to hold a
//! plan-shaped JSON object. The text is cleaned ([`extract`]), strictly
//! decoded ([`decode`]), completed with defaults ([`defaults`]) and finally
//! re-placed by the layout engine. Any failure along the way yields the
//! deterministic fallback plan instead, so [`generate`] always returns a plan.

pub mod decode;
pub mod defaults;
pub mod extract;

use std::fmt;
use std::path::Path;

use log::{debug, warn};

use crate::error::{DecodeError, SourceError};
use crate::layout::{assemble_plan, fallback_plan, LayoutConfig, PlacementReport};
use crate::model::{FloorPlan, PlanRequest};

/// A producer of plan-shaped text for a request
pub trait PlanSource {
    fn complete(&self, request: &PlanRequest) -> Result<String, SourceError>;
}

impl<F> PlanSource for F
where
    F: Fn(&PlanRequest) -> Result<String, SourceError>,
{
    fn complete(&self, request: &PlanRequest) -> Result<String, SourceError> {
        self(request)
    }
}

/// A source that answers every request with the same text
#[derive(Debug, Clone, PartialEq)]
pub struct CannedResponse {
    text: String,
}

impl CannedResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Read the canned text from a file
    pub fn from_file(path: &Path) -> Result<Self, SourceError> {
        Ok(Self::new(std::fs::read_to_string(path)?))
    }
}

impl PlanSource for CannedResponse {
    fn complete(&self, _request: &PlanRequest) -> Result<String, SourceError> {
        if self.text.trim().is_empty() {
            return Err(SourceError::EmptyResponse);
        }
        Ok(self.text.clone())
    }
}

/// Configuration for the generation pipeline
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    pub layout: LayoutConfig,
}

impl GenerateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }
}

/// Why the deterministic plan was used instead of the generated one
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackReason {
    /// The source failed to produce any text
    Source(String),
    /// The text could not be decoded; `payload` is the text that was decoded
    Decode { error: DecodeError, payload: String },
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::Source(message) => write!(f, "{}", message),
            FallbackReason::Decode { error, .. } => write!(f, "{}", error),
        }
    }
}

/// Where a generated plan came from
#[derive(Debug, Clone, PartialEq)]
pub enum Provenance {
    Generative,
    Fallback { reason: FallbackReason },
}

impl Provenance {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Provenance::Fallback { .. })
    }
}

/// Result of [`generate`]
#[derive(Debug, Clone)]
pub struct Generated {
    pub plan: FloorPlan,
    pub provenance: Provenance,
    /// Placement outcome per room; empty for fallback plans
    pub placement: Vec<PlacementReport>,
}

/// Ask `source` for a plan, falling back to the deterministic engine on any failure
pub fn generate(request: &PlanRequest, source: &dyn PlanSource, config: &GenerateConfig) -> Generated {
    let text = match source.complete(request) {
        Ok(text) => text,
        Err(err) => {
            warn!("generative source failed, using fallback plan: {}", err);
            return generate_fallback(request, config, FallbackReason::Source(err.to_string()));
        }
    };

    let payload = match extract::clean_payload(&text) {
        Ok(payload) => payload,
        Err(error) => {
            warn!("no plan in generative response, using fallback plan: {}", error);
            let reason = FallbackReason::Decode {
                error,
                payload: text,
            };
            return generate_fallback(request, config, reason);
        }
    };

    match decode::decode_payload(&payload) {
        Ok(draft) => {
            debug!("decoded generative draft with {} rooms", draft.rooms.len());
            let (plan, placement) = assemble_plan(draft, request, &config.layout);
            Generated {
                plan,
                provenance: Provenance::Generative,
                placement,
            }
        }
        Err(error) => {
            warn!("generative response rejected, using fallback plan: {}", error);
            generate_fallback(request, config, FallbackReason::Decode { error, payload })
        }
    }
}

/// Build the deterministic plan and record why it was used
pub fn generate_fallback(
    request: &PlanRequest,
    config: &GenerateConfig,
    reason: FallbackReason,
) -> Generated {
    Generated {
        plan: fallback_plan(request, &config.layout),
        provenance: Provenance::Fallback { reason },
        placement: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PlanRequest {
        PlanRequest::new(12.0, 15.0)
    }

    #[test]
    fn test_canned_response_generates_plan() {
        let source = CannedResponse::new(
            r#"Here you go: {"name": "Cottage", "rooms": [{"type": "kitchen", "width": 4, "length": 4}]}"#,
        );
        let generated = generate(&request(), &source, &GenerateConfig::default());
        assert_eq!(generated.provenance, Provenance::Generative);
        assert_eq!(generated.plan.name, "Cottage");
        assert_eq!(generated.plan.rooms.len(), 1);
        assert_eq!(generated.placement.len(), 1);
    }

    #[test]
    fn test_empty_canned_response_is_source_error() {
        let source = CannedResponse::new("   ");
        assert!(matches!(
            source.complete(&request()),
            Err(SourceError::EmptyResponse)
        ));

        let generated = generate(&request(), &source, &GenerateConfig::default());
        assert!(matches!(
            generated.provenance,
            Provenance::Fallback {
                reason: FallbackReason::Source(_)
            }
        ));
        assert_eq!(generated.plan.rooms.len(), 13);
        assert!(generated.placement.is_empty());
    }

    #[test]
    fn test_closure_source() {
        let source = |_: &PlanRequest| -> Result<String, SourceError> {
            Err(SourceError::Unavailable("quota exceeded".to_string()))
        };
        let generated = generate(&request(), &source, &GenerateConfig::default());
        match generated.provenance {
            Provenance::Fallback { reason } => {
                assert_eq!(reason.to_string(), "generative service unavailable: quota exceeded")
            }
            other => panic!("expected fallback, got {:?}", other),
        }
    }

    #[test]
    fn test_no_json_falls_back_with_payload() {
        let source = CannedResponse::new("Sorry, I cannot help with that.");
        let generated = generate(&request(), &source, &GenerateConfig::default());
        match generated.provenance {
            Provenance::Fallback {
                reason: FallbackReason::Decode { error, payload },
            } => {
                assert_eq!(error, DecodeError::NoPayload);
                assert_eq!(payload, "Sorry, I cannot help with that.");
            }
            other => panic!("expected decode fallback, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_config_builder() {
        let config = GenerateConfig::new().with_layout(LayoutConfig::new().with_margin(0.1));
        assert_eq!(config.layout.margin, 0.1);
    }
}
