//! End to end tests: files on disk through the codec and the kernels.

use planar_adjust_common::PlanarImage;
use planar_adjust_kernels::{Adjustment, AdjustmentKind};
use planar_adjust_ppm::file_io::{read_ppm_file, write_ppm_file};
use planar_adjust_ppm::{decode_ppm, encode_ppm_to_vec, likely_ppm, ErrorCategory, PpmError};
use rstest::rstest;
use std::fs;
use tempfile::tempdir;

const TWO_GREY_PIXELS: &[u8] = b"P6\n2 1\n255\n\x0a\xc8\x0a\xc8\x0a\xc8";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[rstest]
#[case::brighten(Adjustment::Brighten { delta: 100 }, b"P6\n2 1\n255\n\x6e\xff\x6e\xff\x6e\xff")]
#[case::invert(Adjustment::Invert, b"P6\n2 1\n255\n\xf5\x37\xf5\x37\xf5\x37")]
#[case::contrast(Adjustment::Contrast { factor: 2.0 }, b"P6\n2 1\n255\n\x00\xff\x00\xff\x00\xff")]
#[case::saturate(Adjustment::Saturate { factor: 1.5 }, TWO_GREY_PIXELS)]
fn adjusts_two_pixel_file(#[case] adjustment: Adjustment, #[case] expected: &[u8]) {
    init_logging();
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.ppm");
    let output = dir.path().join("output.ppm");
    fs::write(&input, TWO_GREY_PIXELS).unwrap();

    let image = read_ppm_file(&input).unwrap();
    write_ppm_file(&adjustment.apply(&image), &output).unwrap();

    assert_eq!(fs::read(&output).unwrap(), expected);
    // The input file is never modified.
    assert_eq!(fs::read(&input).unwrap(), TWO_GREY_PIXELS);
}

#[test]
fn every_adjustment_writes_a_readable_file() {
    init_logging();
    let dir = tempdir().unwrap();
    let len = 40 * 30;
    let image = PlanarImage::from_planes(
        40,
        30,
        (0..len).map(|i| i as u8).collect(),
        (0..len).map(|i| (i / 3) as u8).collect(),
        (0..len).map(|i| (i * 5) as u8).collect(),
    )
    .unwrap();

    for &kind in AdjustmentKind::all_values() {
        let path = dir.path().join(format!("{kind}.ppm"));
        let adjusted = Adjustment::with_defaults(kind).apply(&image);

        write_ppm_file(&adjusted, &path).unwrap();
        let data = fs::read(&path).unwrap();

        assert!(likely_ppm(&data));
        assert_eq!(decode_ppm(&data).unwrap(), adjusted);
    }
}

#[test]
fn malformed_files_are_reported_by_category() {
    init_logging();
    let dir = tempdir().unwrap();
    let cases: [(&str, &[u8], ErrorCategory); 4] = [
        ("magic.ppm", b"P3\n2 1\n255\n10 200", ErrorCategory::Format),
        ("maxval.ppm", b"P6\n2 1\n65535\n", ErrorCategory::Format),
        ("zero.ppm", b"P6\n0 1\n255\n", ErrorCategory::Format),
        ("short.ppm", b"P6\n2 1\n255\n\x0a\xc8\x0a\xc8\x0a", ErrorCategory::IncompleteData),
    ];

    for (name, contents, category) in cases {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();

        let error = read_ppm_file(&path).unwrap_err();
        assert_eq!(error.category(), category, "{name}: {error}");
    }
}

#[test]
fn missing_input_reports_io_error() {
    let dir = tempdir().unwrap();
    let error = read_ppm_file(&dir.path().join("input.ppm")).unwrap_err();

    assert!(matches!(error, PpmError::Io(_)));
}

#[test]
fn canonical_bytes_survive_a_round_trip() {
    let image = decode_ppm(TWO_GREY_PIXELS).unwrap();
    assert_eq!(encode_ppm_to_vec(&image), TWO_GREY_PIXELS);
}
