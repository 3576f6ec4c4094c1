#![no_main]

// Arbitrary bytes must either fail to decode or decode to an image whose canonical
// encoding decodes back to the same image.

use libfuzzer_sys::fuzz_target;
use planar_adjust_ppm::{decode_ppm, encode_ppm_to_vec, encoded_len, parse_ppm_header};

fuzz_target!(|data: &[u8]| {
    let Ok(image) = decode_ppm(data) else {
        return;
    };

    let header = parse_ppm_header(data).expect("decoded data has a valid header");
    assert_eq!((image.width(), image.height()), (header.width, header.height));
    assert!(data.len() >= header.data_offset + header.data_len());

    let encoded = encode_ppm_to_vec(&image);
    assert_eq!(encoded.len(), encoded_len(&image));

    let decoded = decode_ppm(&encoded).expect("canonical encoding decodes");
    assert_eq!(decoded, image);
});
