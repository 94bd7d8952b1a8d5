//! Error types
//!
//! [`RenderError`] is fatal to the render path and is returned as a `Result`.
//! [`InputError`] is never propagated: it is logged where the input is read
//! and the previous value is kept.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to request a GPU adapter")]
    AdapterRequestFailed,

    #[error("Failed to create render surface: {0}")]
    SurfaceCreateFailed(#[from] wgpu::CreateSurfaceError),

    #[error("Failed to create GPU device: {0}")]
    DeviceCreateFailed(#[from] wgpu::RequestDeviceError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Control '{0}' is missing")]
    MissingControl(String),

    #[error("Control '{control}' holds '{text}', which is not a finite number")]
    InvalidNumber { control: String, text: String },

    #[error("Button '{0}' is not bound to any joint")]
    UnboundButton(String),
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;
