//! Runtime selection of a single adjustment.
//!
//! [`Adjustment`] carries both the choice of kernel and its parameter, so a
//! caller (the CLI, a config loader, a test) builds one value and dispatches
//! it with [`Adjustment::apply`] instead of matching on raw menu numbers.

use crate::pixel_map::check_output;
use crate::{
    adjust_contrast, adjust_contrast_into, brighten, brighten_into, invert, invert_into, saturate,
    saturate_into, KernelError,
};
use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;
use log::debug;
use planar_adjust_common::PlanarImage;

/// Brightness shift used when no explicit delta is given.
pub const DEFAULT_BRIGHTNESS_DELTA: i32 = 50;

/// Saturation factor used when no explicit factor is given.
pub const DEFAULT_SATURATION_FACTOR: f32 = 1.5;

/// Contrast factor used when no explicit factor is given.
pub const DEFAULT_CONTRAST_FACTOR: f32 = 2.0;

/// One of the four supported adjustments, together with its parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    /// Add `delta` to every sample. See [`brighten`].
    Brighten {
        /// Amount added to each sample; may be negative.
        delta: i32,
    },
    /// Scale each pixel's distance from grey. See [`saturate`].
    Saturate {
        /// Saturation multiplier.
        factor: f32,
    },
    /// Replace every sample with `255 - s`. See [`invert`].
    Invert,
    /// Scale each sample's distance from 128. See [`adjust_contrast`].
    Contrast {
        /// Contrast multiplier.
        factor: f32,
    },
}

/// The kind of an [`Adjustment`], without its parameter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AllValues)]
pub enum AdjustmentKind {
    /// [`Adjustment::Brighten`]
    Brighten,
    /// [`Adjustment::Saturate`]
    Saturate,
    /// [`Adjustment::Invert`]
    Invert,
    /// [`Adjustment::Contrast`]
    Contrast,
}

impl AdjustmentKind {
    /// Short lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            AdjustmentKind::Brighten => "brighten",
            AdjustmentKind::Saturate => "saturate",
            AdjustmentKind::Invert => "invert",
            AdjustmentKind::Contrast => "contrast",
        }
    }

    /// Human readable description, as shown in the interactive menu.
    pub const fn description(self) -> &'static str {
        match self {
            AdjustmentKind::Brighten => "Increase brightness",
            AdjustmentKind::Saturate => "Increase saturation",
            AdjustmentKind::Invert => "Perform color inversion",
            AdjustmentKind::Contrast => "Increase contrast",
        }
    }

    /// Number of this adjustment in the interactive menu (1-based).
    pub const fn menu_choice(self) -> u32 {
        match self {
            AdjustmentKind::Brighten => 1,
            AdjustmentKind::Saturate => 2,
            AdjustmentKind::Invert => 3,
            AdjustmentKind::Contrast => 4,
        }
    }

    /// Maps an interactive menu number back to its adjustment.
    pub fn from_menu_choice(choice: u32) -> Option<Self> {
        AdjustmentKind::all_values()
            .iter()
            .copied()
            .find(|kind| kind.menu_choice() == choice)
    }
}

impl fmt::Display for AdjustmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AdjustmentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brighten" => Ok(AdjustmentKind::Brighten),
            "saturate" => Ok(AdjustmentKind::Saturate),
            "invert" => Ok(AdjustmentKind::Invert),
            "contrast" => Ok(AdjustmentKind::Contrast),
            _ => Err(format!(
                "Unknown adjustment: {s}. Valid options: brighten, saturate, invert, contrast"
            )),
        }
    }
}

impl Adjustment {
    /// The adjustment of the given kind with its default parameter
    /// (brightness +50, saturation x1.5, contrast x2).
    pub const fn with_defaults(kind: AdjustmentKind) -> Self {
        match kind {
            AdjustmentKind::Brighten => Adjustment::Brighten {
                delta: DEFAULT_BRIGHTNESS_DELTA,
            },
            AdjustmentKind::Saturate => Adjustment::Saturate {
                factor: DEFAULT_SATURATION_FACTOR,
            },
            AdjustmentKind::Invert => Adjustment::Invert,
            AdjustmentKind::Contrast => Adjustment::Contrast {
                factor: DEFAULT_CONTRAST_FACTOR,
            },
        }
    }

    /// The kind of this adjustment.
    pub const fn kind(&self) -> AdjustmentKind {
        match self {
            Adjustment::Brighten { .. } => AdjustmentKind::Brighten,
            Adjustment::Saturate { .. } => AdjustmentKind::Saturate,
            Adjustment::Invert => AdjustmentKind::Invert,
            Adjustment::Contrast { .. } => AdjustmentKind::Contrast,
        }
    }

    /// Checks that the parameter is usable.
    ///
    /// # Errors
    ///
    /// [`KernelError::NonFiniteFactor`] if a saturation or contrast factor is NaN or infinite.
    pub fn validate(&self) -> Result<(), KernelError> {
        match *self {
            Adjustment::Saturate { factor } | Adjustment::Contrast { factor }
                if !factor.is_finite() =>
            {
                Err(KernelError::NonFiniteFactor {
                    kind: self.kind(),
                    factor,
                })
            }
            _ => Ok(()),
        }
    }

    /// Runs the selected kernel, returning a new image of the same size.
    pub fn apply(&self, input: &PlanarImage) -> PlanarImage {
        debug!(
            "Applying {self} to {}x{} image",
            input.width(),
            input.height()
        );

        match *self {
            Adjustment::Brighten { delta } => brighten(input, delta),
            Adjustment::Saturate { factor } => saturate(input, factor),
            Adjustment::Invert => invert(input),
            Adjustment::Contrast { factor } => adjust_contrast(input, factor),
        }
    }

    /// Runs the selected kernel into an existing image.
    ///
    /// # Errors
    ///
    /// - [`KernelError::NonFiniteFactor`] if the parameter is rejected by [`Adjustment::validate`]
    /// - [`KernelError::DimensionMismatch`] if `output` is not the same size as `input`
    pub fn apply_into(
        &self,
        input: &PlanarImage,
        output: &mut PlanarImage,
    ) -> Result<(), KernelError> {
        self.validate()?;
        check_output(input, output)?;
        debug!(
            "Applying {self} to {}x{} image (caller-provided output)",
            input.width(),
            input.height()
        );

        match *self {
            Adjustment::Brighten { delta } => brighten_into(input, output, delta),
            Adjustment::Saturate { factor } => saturate_into(input, output, factor),
            Adjustment::Invert => invert_into(input, output),
            Adjustment::Contrast { factor } => adjust_contrast_into(input, output, factor),
        }
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Adjustment::Brighten { delta } => write!(f, "brighten (delta {delta:+})"),
            Adjustment::Saturate { factor } => write!(f, "saturate (factor {factor})"),
            Adjustment::Invert => f.write_str("invert"),
            Adjustment::Contrast { factor } => write!(f, "contrast (factor {factor})"),
        }
    }
}
