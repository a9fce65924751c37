//! Input validation for user-typed simulation parameters.
//!
//! Raw text from a form or the command line is checked here and turned into
//! a [`SimulationRequest`]. The engine trusts whatever it is given, so every
//! user-facing bound lives in [`InputLimits`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::config::{MAX_FRAMES, MAX_REFERENCE_LEN, MIN_FRAMES};
use crate::common::{Error, PageId, Result};
use crate::simulation::{FaultPolicy, SimulationRequest};

/// Field names used in error messages.
const REFERENCE_FIELD: &str = "reference string";
const FRAMES_FIELD: &str = "frame count";
const REQUIRED_FIELD: &str = "required pages";

/// Unparsed form fields, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub reference: String,
    pub frames: String,
    pub required: String,
}

impl RawInput {
    pub fn new(
        reference: impl Into<String>,
        frames: impl Into<String>,
        required: impl Into<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            frames: frames.into(),
            required: required.into(),
        }
    }
}

/// Bounds applied to user input before a simulation is built.
///
/// # Example
/// ```
/// use fifosim::input::{InputLimits, RawInput};
/// use fifosim::FaultPolicy;
///
/// let limits = InputLimits::default();
/// let raw = RawInput::new("1 2 3 4", "3", "2, 4");
/// let request = limits.validate(&raw, FaultPolicy::Drain).unwrap();
/// assert_eq!(request.reference_string.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    pub min_frames: usize,
    pub max_frames: usize,
    pub max_reference_len: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_frames: MIN_FRAMES,
            max_frames: MAX_FRAMES,
            max_reference_len: MAX_REFERENCE_LEN,
        }
    }
}

impl InputLimits {
    /// Parse and bound-check raw input.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// reference string, then frame count, then required pages.
    ///
    /// # Errors
    /// - `Error::EmptyReferenceString` if no reference pages were typed
    /// - `Error::NonNumericToken` for any token that is not a page number
    /// - `Error::ReferenceStringTooLong` past `max_reference_len`
    /// - `Error::FrameCountOutOfRange` outside `[min_frames, max_frames]`
    pub fn validate(&self, raw: &RawInput, policy: FaultPolicy) -> Result<SimulationRequest> {
        let reference = parse_pages(REFERENCE_FIELD, &raw.reference)?;
        self.check_reference(&reference)?;

        let frames_text = raw.frames.trim();
        let frame_count: usize = frames_text.parse().map_err(|_| Error::NonNumericToken {
            field: FRAMES_FIELD,
            token: frames_text.to_string(),
        })?;
        self.check_frames(frame_count)?;

        let required = parse_pages(REQUIRED_FIELD, &raw.required)?;

        Ok(SimulationRequest::new(reference, frame_count)
            .with_required(required)
            .with_policy(policy))
    }

    /// Re-apply the bounds to a request that did not come from text.
    pub fn check_request(&self, request: &SimulationRequest) -> Result<()> {
        self.check_reference(&request.reference_string)?;
        self.check_frames(request.frame_count)
    }

    fn check_reference(&self, reference: &[PageId]) -> Result<()> {
        if reference.is_empty() {
            return Err(Error::EmptyReferenceString);
        }
        if reference.len() > self.max_reference_len {
            return Err(Error::ReferenceStringTooLong {
                len: reference.len(),
                max: self.max_reference_len,
            });
        }
        Ok(())
    }

    fn check_frames(&self, count: usize) -> Result<()> {
        if count < self.min_frames || count > self.max_frames {
            return Err(Error::FrameCountOutOfRange {
                count,
                min: self.min_frames,
                max: self.max_frames,
            });
        }
        Ok(())
    }
}

/// Split a page list on whitespace and/or commas and parse each token.
///
/// Empty input yields an empty list; `field` only names the list in errors.
pub fn parse_pages(field: &'static str, text: &str) -> Result<Vec<PageId>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|token| {
            token.parse::<PageId>().map_err(|_| Error::NonNumericToken {
                field,
                token: token.to_string(),
            })
        })
        .collect()
}

/// On-disk request: a [`SimulationRequest`] plus optional bounds.
///
/// ```json
/// {
///   "reference_string": [1, 2, 3, 4],
///   "frame_count": 3,
///   "required_pages": [2, 4],
///   "policy": "drain",
///   "limits": { "max_reference_len": 20 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestFile {
    #[serde(flatten)]
    pub request: SimulationRequest,

    #[serde(default)]
    pub limits: InputLimits,
}

impl RequestFile {
    /// Parse a request file from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a request file.
    ///
    /// # Errors
    /// - `Error::Io` if the file cannot be read
    /// - `Error::Config` if it is not a valid request
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    /// Bound-check the request against the file's own limits.
    pub fn into_request(self) -> Result<SimulationRequest> {
        self.limits.check_request(&self.request)?;
        Ok(self.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(ids: &[u32]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    fn validate(reference: &str, frames: &str, required: &str) -> Result<SimulationRequest> {
        InputLimits::default().validate(
            &RawInput::new(reference, frames, required),
            FaultPolicy::Drain,
        )
    }

    // ========================================================================
    // parse_pages
    // ========================================================================

    #[test]
    fn test_parse_pages_separators() {
        assert_eq!(
            parse_pages("x", "1 2,3 ,\t4\n5").unwrap(),
            pages(&[1, 2, 3, 4, 5])
        );
        assert_eq!(parse_pages("x", "  ").unwrap(), pages(&[]));
    }

    #[test]
    fn test_parse_pages_rejects_non_numeric() {
        let err = parse_pages("required pages", "1 two 3").unwrap_err();
        match err {
            Error::NonNumericToken { field, token } => {
                assert_eq!(field, "required pages");
                assert_eq!(token, "two");
            }
            other => panic!("Expected NonNumericToken, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_pages_rejects_negative() {
        assert!(matches!(
            parse_pages("x", "-3"),
            Err(Error::NonNumericToken { .. })
        ));
    }

    // ========================================================================
    // validate
    // ========================================================================

    #[test]
    fn test_validate_ok() {
        let req = validate("1 2 3 4", " 3 ", "2 4").unwrap();
        assert_eq!(req.reference_string, pages(&[1, 2, 3, 4]));
        assert_eq!(req.frame_count, 3);
        assert_eq!(req.required_pages.len(), 2);
        assert_eq!(req.policy, FaultPolicy::Drain);
    }

    #[test]
    fn test_validate_empty_reference() {
        assert!(matches!(
            validate("   ", "3", ""),
            Err(Error::EmptyReferenceString)
        ));
    }

    #[test]
    fn test_validate_reference_too_long() {
        assert!(matches!(
            validate("1 2 3 4 5 6 7 8 9 10", "3", ""),
            Err(Error::ReferenceStringTooLong { len: 10, max: 9 })
        ));
        assert!(validate("1 2 3 4 5 6 7 8 9", "3", "").is_ok());
    }

    #[test]
    fn test_validate_frame_bounds() {
        assert!(matches!(
            validate("1", "2", ""),
            Err(Error::FrameCountOutOfRange { count: 2, .. })
        ));
        assert!(matches!(
            validate("1", "6", ""),
            Err(Error::FrameCountOutOfRange { count: 6, .. })
        ));
        assert!(validate("1", "5", "").is_ok());
    }

    #[test]
    fn test_validate_frame_count_not_numeric() {
        assert!(matches!(
            validate("1", "three", ""),
            Err(Error::NonNumericToken { field: "frame count", .. })
        ));
    }

    #[test]
    fn test_validate_reference_checked_first() {
        // Both fields are bad; the reference string is reported.
        assert!(matches!(
            validate("a", "9", "b"),
            Err(Error::NonNumericToken { field: "reference string", .. })
        ));
    }

    #[test]
    fn test_custom_limits() {
        let limits = InputLimits {
            min_frames: 1,
            max_frames: 8,
            max_reference_len: 32,
        };
        let req = limits
            .validate(
                &RawInput::new("1 2 3 4 5 6 7 8 9 10 11", "1", ""),
                FaultPolicy::Lookahead,
            )
            .unwrap();
        assert_eq!(req.frame_count, 1);
        assert_eq!(req.policy, FaultPolicy::Lookahead);
    }

    // ========================================================================
    // RequestFile
    // ========================================================================

    #[test]
    fn test_request_file_partial_limits() {
        let file = RequestFile::from_json(
            r#"{"reference_string":[1,2],"frame_count":2,"limits":{"min_frames":1}}"#,
        )
        .unwrap();

        assert_eq!(file.limits.min_frames, 1);
        assert_eq!(file.limits.max_frames, MAX_FRAMES);
        assert_eq!(file.into_request().unwrap().frame_count, 2);
    }

    #[test]
    fn test_request_file_enforces_default_limits() {
        let file =
            RequestFile::from_json(r#"{"reference_string":[1],"frame_count":9}"#).unwrap();
        assert!(matches!(
            file.into_request(),
            Err(Error::FrameCountOutOfRange { .. })
        ));
    }

    #[test]
    fn test_request_file_bad_json() {
        assert!(matches!(
            RequestFile::from_json("{"),
            Err(Error::Config(_))
        ));
    }
}
