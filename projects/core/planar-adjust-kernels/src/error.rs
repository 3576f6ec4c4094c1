use crate::AdjustmentKind;
use thiserror::Error;

/// Errors returned by the kernel entry points that take caller-provided output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    /// The output image does not have the same dimensions as the input.
    #[error(
        "Output image is {output_width}x{output_height}, expected {input_width}x{input_height}"
    )]
    DimensionMismatch {
        /// Input width.
        input_width: u32,
        /// Input height.
        input_height: u32,
        /// Output width.
        output_width: u32,
        /// Output height.
        output_height: u32,
    },

    /// A scaling factor is NaN or infinite.
    #[error("{kind} factor must be finite, got {factor}")]
    NonFiniteFactor {
        /// The adjustment the factor belongs to.
        kind: AdjustmentKind,
        /// The rejected factor.
        factor: f32,
    },
}
