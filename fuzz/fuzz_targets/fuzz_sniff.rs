#![no_main]

use imgsniff::{FormatError, ImageFormat};
use libfuzzer_sys::fuzz_target;

// Detection must be total and agree with the name table on every input.
fuzz_target!(|data: &[u8]| {
    let format = ImageFormat::detect(data);
    assert_eq!(ImageFormat::detect_name(data), format.name());
    assert_eq!(ImageFormat::from_name(format.name()), format);
    if format != ImageFormat::Unknown {
        assert!(!format.name().is_empty());
    }

    let _ = imgsniff::is_svg_image(data);

    let support = imgsniff::support_for(format);
    if format == ImageFormat::Unknown {
        assert!(!support.decode);
        assert!(!support.encode);
    }

    match imgsniff::detect_decodable(data) {
        Ok(decodable) => assert_eq!(decodable, format),
        Err(FormatError::Unrecognized) => assert_eq!(format, ImageFormat::Unknown),
        Err(FormatError::DecodeUnsupported(refused)) => assert_eq!(refused, format),
        Err(other) => panic!("unexpected gate error: {other}"),
    }
});
