//! Local checks applied to chat completion requests before they are sent.

use crate::error::ValidationError;
use crate::models::{ChatCompletionRequest, ChatModel, ChatRole};
use std::ops::RangeInclusive;

const TEMPERATURE_RANGE: RangeInclusive<f64> = 0.0..=2.0;
const PENALTY_RANGE: RangeInclusive<f64> = -2.0..=2.0;

/// Check a chat completion request against the service's constraints.
///
/// Checks run in a fixed order and the first failure is returned:
/// model, non-empty messages, message roles, temperature, presence penalty,
/// frequency penalty. Unset sampling parameters are not checked; `NaN` is
/// outside every range.
pub fn validate(request: &ChatCompletionRequest) -> Result<(), ValidationError> {
    if request.model.parse::<ChatModel>().is_err() {
        return Err(ValidationError::InvalidModel);
    }

    if request.messages.is_empty() {
        return Err(ValidationError::NoMessages);
    }

    if request
        .messages
        .iter()
        .any(|message| message.role.parse::<ChatRole>().is_err())
    {
        return Err(ValidationError::InvalidRole);
    }

    check_range(
        request.temperature,
        &TEMPERATURE_RANGE,
        ValidationError::InvalidTemperature,
    )?;
    check_range(
        request.presence_penalty,
        &PENALTY_RANGE,
        ValidationError::InvalidPresencePenalty,
    )?;
    check_range(
        request.frequency_penalty,
        &PENALTY_RANGE,
        ValidationError::InvalidFrequencyPenalty,
    )?;

    Ok(())
}

fn check_range(
    value: Option<f64>,
    range: &RangeInclusive<f64>,
    error: ValidationError,
) -> Result<(), ValidationError> {
    match value {
        Some(value) if !range.contains(&value) => Err(error),
        _ => Ok(()),
    }
}

impl ChatCompletionRequest {
    /// See [`validate`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(self)
    }
}
