//! Capture domain module.
//!
//! This module defines the capture-to-result state machine types and the
//! failure taxonomy.

mod failure;
pub mod state_machine;

pub use failure::{
    CaptureFailure, FailureKind, DEVICE_ERROR_MESSAGE, NOT_FOOD_MESSAGE,
    PERMISSION_DENIED_MESSAGE, SERVICE_FAILURE_MESSAGE, TRANSPORT_FAILURE_MESSAGE,
};
pub use state_machine::{CaptureAction, CaptureEvent, CaptureState, CaptureStateMachine};
