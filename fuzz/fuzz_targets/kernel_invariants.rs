#![no_main]

// Checks the per-kernel laws on small random images and parameters.

use libfuzzer_sys::{arbitrary, fuzz_target};
use planar_adjust_common::PlanarImage;
use planar_adjust_kernels::{adjust_contrast, brighten, invert, saturate, Adjustment};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub width: u8,
    pub height: u8,
    pub samples: Vec<u8>,
    pub delta: i32,
    pub factor: f32,
}

fuzz_target!(|input: Input| {
    let width = u32::from(input.width.max(1));
    let height = u32::from(input.height.max(1));
    let len = width as usize * height as usize;
    if input.samples.len() < len * 3 {
        return;
    }

    let red = input.samples[..len].to_vec();
    let green = input.samples[len..len * 2].to_vec();
    let blue = input.samples[len * 2..len * 3].to_vec();
    let image = PlanarImage::from_planes(width, height, red, green, blue).expect("valid planes");

    // Involution and identities.
    assert_eq!(invert(&invert(&image)), image);
    assert_eq!(brighten(&image, 0), image);
    assert_eq!(saturate(&image, 1.0), image);
    assert_eq!(adjust_contrast(&image, 1.0), image);

    // Brightness clamp law.
    let brightened = brighten(&image, input.delta);
    for (src, dst) in image.planes().into_iter().zip(brightened.planes()) {
        for (&s, &d) in src.iter().zip(dst) {
            let expected = (i64::from(s) + i64::from(input.delta)).clamp(0, 255) as u8;
            assert_eq!(d, expected);
        }
    }

    // Every kernel keeps the dimensions, for any finite factor.
    if input.factor.is_finite() {
        for adjustment in [
            Adjustment::Saturate {
                factor: input.factor,
            },
            Adjustment::Contrast {
                factor: input.factor,
            },
        ] {
            let output = adjustment.apply(&image);
            assert!(output.same_dimensions(&image));
        }
    }
});
