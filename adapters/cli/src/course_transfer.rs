//! Single-line course transfer strings for clipboard-friendly exchange.

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use coursewalk_core::Obstacle;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const TRANSFER_DOMAIN: &str = "course";
const TRANSFER_VERSION: &str = "v1";

/// Identifier prefix emitted before the encoded course payload.
pub(crate) const TRANSFER_HEADER: &str = "course:v1";
/// Delimiter separating the prefix, arena dimensions and payload.
const FIELD_DELIMITER: char = ':';

/// Snapshot of a course together with the arena it was laid out in.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CourseTransferSnapshot {
    /// Arena width in metres.
    pub width: f32,
    /// Arena length in metres.
    pub length: f32,
    /// Obstacles in riding order.
    pub obstacles: Vec<Obstacle>,
}

impl CourseTransferSnapshot {
    /// Encodes the snapshot into a single-line string suitable for clipboard transfer.
    #[must_use]
    pub(crate) fn encode(&self) -> String {
        let payload = SerializablePayload {
            obstacles: self.obstacles.clone(),
        };
        let json = serde_json::to_vec(&payload).expect("course snapshot serialization never fails");
        let encoded = STANDARD_NO_PAD.encode(json);
        format!("{TRANSFER_HEADER}:{}x{}:{encoded}", self.width, self.length)
    }

    /// Decodes a snapshot from the provided string representation.
    pub(crate) fn decode(value: &str) -> Result<Self, CourseTransferError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CourseTransferError::EmptyPayload);
        }

        let mut parts = trimmed.split(FIELD_DELIMITER);
        let domain = parts.next().ok_or(CourseTransferError::MissingPrefix)?;
        let version = parts.next().ok_or(CourseTransferError::MissingVersion)?;
        let dimensions = parts.next().ok_or(CourseTransferError::MissingDimensions)?;
        let payload = parts.next().ok_or(CourseTransferError::MissingPayload)?;

        if domain != TRANSFER_DOMAIN {
            return Err(CourseTransferError::InvalidPrefix(domain.to_owned()));
        }
        if version != TRANSFER_VERSION {
            return Err(CourseTransferError::UnsupportedVersion(version.to_owned()));
        }

        let (width, length) = parse_dimensions(dimensions)?;
        let bytes = STANDARD_NO_PAD
            .decode(payload.as_bytes())
            .map_err(CourseTransferError::InvalidEncoding)?;
        let decoded: SerializablePayload =
            serde_json::from_slice(&bytes).map_err(CourseTransferError::InvalidPayload)?;

        Ok(Self {
            width,
            length,
            obstacles: decoded.obstacles,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct SerializablePayload {
    obstacles: Vec<Obstacle>,
}

/// Errors that can occur while decoding course transfer strings.
#[derive(Debug, Error)]
pub(crate) enum CourseTransferError {
    /// The provided string was empty or contained only whitespace.
    #[error("course string was empty")]
    EmptyPayload,
    /// The prefix segment was missing from the encoded course.
    #[error("course string is missing the prefix")]
    MissingPrefix,
    /// The encoded course did not contain a version segment.
    #[error("course string is missing the version")]
    MissingVersion,
    /// The encoded course did not include arena dimensions.
    #[error("course string is missing the arena dimensions")]
    MissingDimensions,
    /// The encoded course did not include the payload segment.
    #[error("course string is missing the payload")]
    MissingPayload,
    /// The encoded course used an unexpected prefix segment.
    #[error("course prefix '{0}' is not supported")]
    InvalidPrefix(String),
    /// The encoded course used an unsupported version identifier.
    #[error("course version '{0}' is not supported")]
    UnsupportedVersion(String),
    /// The arena dimensions could not be parsed from the encoded course.
    #[error("could not parse arena dimensions '{0}'")]
    InvalidDimensions(String),
    /// The base64 payload could not be decoded.
    #[error("could not decode course payload: {0}")]
    InvalidEncoding(base64::DecodeError),
    /// The decoded payload could not be deserialised.
    #[error("could not parse course payload: {0}")]
    InvalidPayload(serde_json::Error),
}

fn parse_dimensions(dimensions: &str) -> Result<(f32, f32), CourseTransferError> {
    let (width, length) = dimensions
        .split_once(['x', 'X'])
        .ok_or_else(|| CourseTransferError::InvalidDimensions(dimensions.to_owned()))?;

    let width = width
        .trim()
        .parse::<f32>()
        .map_err(|_| CourseTransferError::InvalidDimensions(dimensions.to_owned()))?;
    let length = length
        .trim()
        .parse::<f32>()
        .map_err(|_| CourseTransferError::InvalidDimensions(dimensions.to_owned()))?;

    if !width.is_finite() || !length.is_finite() || width <= 0.0 || length <= 0.0 {
        return Err(CourseTransferError::InvalidDimensions(
            dimensions.to_owned(),
        ));
    }

    Ok((width, length))
}
