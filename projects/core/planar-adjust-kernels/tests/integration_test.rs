//! Integration tests for the public kernel API

use planar_adjust_common::PlanarImage;
use planar_adjust_kernels::{
    adjust_contrast, brighten, invert, saturate, Adjustment, AdjustmentKind,
};
use rstest::rstest;

fn create_test_image(width: u32, height: u32) -> PlanarImage {
    let len = width as usize * height as usize;
    let red = (0..len).map(|i| (i * 7 % 256) as u8).collect();
    let green = (0..len).map(|i| (i * 13 % 256) as u8).collect();
    let blue = (0..len).map(|i| (255 - i % 256) as u8).collect();
    PlanarImage::from_planes(width, height, red, green, blue).unwrap()
}

#[rstest]
fn every_kernel_preserves_dimensions(
    #[values(
        AdjustmentKind::Brighten,
        AdjustmentKind::Saturate,
        AdjustmentKind::Invert,
        AdjustmentKind::Contrast
    )]
    kind: AdjustmentKind,
    #[values((1, 1), (2, 1), (1, 9), (640, 3))] size: (u32, u32),
) {
    let input = create_test_image(size.0, size.1);
    let output = Adjustment::with_defaults(kind).apply(&input);

    assert_eq!(output.width(), input.width());
    assert_eq!(output.height(), input.height());
    assert_eq!(output.pixel_count(), input.pixel_count());
}

#[test]
fn two_pixel_scenario() {
    let input =
        PlanarImage::from_planes(2, 1, vec![10, 200], vec![10, 200], vec![10, 200]).unwrap();

    assert_eq!(brighten(&input, 100).red(), &[110, 255]);
    assert_eq!(invert(&input).red(), &[245, 55]);
    assert_eq!(adjust_contrast(&input, 2.0).red(), &[0, 255]);
    // Grey pixels are fixed points of saturation.
    assert_eq!(saturate(&input, 1.5), input);
}

#[test]
fn input_is_left_untouched() {
    let input = create_test_image(64, 64);
    let snapshot = input.clone();

    for &kind in AdjustmentKind::all_values() {
        let _ = Adjustment::with_defaults(kind).apply(&input);
    }

    assert_eq!(input, snapshot);
}

#[test]
fn identities_hold_on_large_images() {
    // Large enough to be split into several chunks.
    let input = create_test_image(1024, 200);

    assert_eq!(brighten(&input, 0), input);
    assert_eq!(saturate(&input, 1.0), input);
    assert_eq!(adjust_contrast(&input, 1.0), input);
    assert_eq!(invert(&invert(&input)), input);
}
