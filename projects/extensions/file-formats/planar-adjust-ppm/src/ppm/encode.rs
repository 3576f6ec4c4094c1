use super::constants::{PPM_MAGIC, PPM_MAX_VALUE};
use planar_adjust_common::PlanarImage;
use std::io::{self, Write};

/// Canonical header for `image`: `"P6\n{width} {height}\n255\n"`.
pub fn encode_header(image: &PlanarImage) -> Vec<u8> {
    let mut header = PPM_MAGIC.to_vec();
    header.extend_from_slice(
        format!("\n{} {}\n{}\n", image.width(), image.height(), PPM_MAX_VALUE).as_bytes(),
    );
    header
}

/// Exact size in bytes of the canonical encoding of `image`.
pub fn encoded_len(image: &PlanarImage) -> usize {
    encode_header(image).len() + image.sample_count()
}

/// Writes `image` in canonical form: header, then the red, green and blue planes.
///
/// The writer is flushed before returning. Wrap unbuffered writers (such as
/// [`std::fs::File`]) in a [`std::io::BufWriter`].
///
/// # Errors
///
/// Propagates any error from `writer`.
pub fn encode_ppm<W: Write>(image: &PlanarImage, mut writer: W) -> io::Result<()> {
    writer.write_all(&encode_header(image))?;
    for plane in image.planes() {
        writer.write_all(plane)?;
    }
    writer.flush()
}

/// Encodes `image` into a new buffer of exactly [`encoded_len`] bytes.
pub fn encode_ppm_to_vec(image: &PlanarImage) -> Vec<u8> {
    let mut output = encode_header(image);
    output.reserve_exact(image.sample_count());
    for plane in image.planes() {
        output.extend_from_slice(plane);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode_ppm;
    use crate::test_prelude::*;

    #[test]
    fn encodes_canonical_bytes() {
        let image =
            PlanarImage::from_planes(2, 1, vec![110, 255], vec![110, 255], vec![110, 255])
                .unwrap();

        assert_eq!(
            encode_ppm_to_vec(&image),
            b"P6\n2 1\n255\n\x6e\xff\x6e\xff\x6e\xff".to_vec()
        );
        assert_eq!(encoded_len(&image), 17);
    }

    #[test]
    fn writer_and_vec_outputs_match() {
        let image = PlanarImage::from_planes(3, 1, vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9])
            .unwrap();
        let mut written = Vec::new();

        encode_ppm(&image, &mut written).unwrap();
        assert_eq!(written, encode_ppm_to_vec(&image));
    }

    #[test]
    fn canonical_files_reencode_identically() {
        let data = build_ppm(3, 2, &[0, 1, 2, 3, 4, 5], &[6; 6], &[255; 6]);

        let image = decode_ppm(&data).unwrap();
        assert_eq!(encode_ppm_to_vec(&image), data);
    }

    #[test]
    fn non_canonical_headers_are_normalised() {
        let image = decode_ppm(b"P6 # comment\n1\t1 255\r\x01\x02\x03").unwrap();
        assert_eq!(encode_ppm_to_vec(&image), b"P6\n1 1\n255\n\x01\x02\x03".to_vec());
    }

    #[test]
    fn writer_errors_propagate() {
        struct FailingWriter;
        impl Write for FailingWriter {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("disk full"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let image = PlanarImage::new(1, 1).unwrap();
        assert!(encode_ppm(&image, FailingWriter).is_err());
    }
}
