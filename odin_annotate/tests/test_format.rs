/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use image::ImageFormat;
use odin_annotate::{resolve_output_format, AnnotateError, OutputFormat};

#[test]
fn test_supported_extensions() {
    assert_eq!( resolve_output_format("a.png").unwrap(), OutputFormat::Png);
    assert_eq!( resolve_output_format("a.GIF").unwrap(), OutputFormat::Gif);
    assert_eq!( resolve_output_format("a.jpeg").unwrap(), OutputFormat::Jpg);
    assert_eq!( resolve_output_format("a.JPG").unwrap(), OutputFormat::Jpg);
    assert_eq!( resolve_output_format("some.dir/out.v1.png").unwrap(), OutputFormat::Png);

    assert_eq!( OutputFormat::Jpg.image_format(), ImageFormat::Jpeg);
    assert_eq!( OutputFormat::Jpg.to_string(), "jpg");
}

#[test]
fn test_missing_extension() {
    for path in ["a", ".png", ""] {
        assert!( matches!( resolve_output_format(path), Err(AnnotateError::MissingExtension(_))), "{path:?}");
    }
}

#[test]
fn test_unsupported_extension() {
    match resolve_output_format("a.bmp") {
        Err(AnnotateError::UnsupportedFormat(ext)) => assert_eq!( ext, "bmp"),
        other => panic!("expected UnsupportedFormat, got {other:?}")
    }

    match resolve_output_format("a.") {
        Err(AnnotateError::UnsupportedFormat(ext)) => assert!( ext.is_empty()),
        other => panic!("expected UnsupportedFormat, got {other:?}")
    }

    // the last '.' of the whole path counts, not the one of the filename
    assert!( matches!( resolve_output_format("out.d/image"), Err(AnnotateError::UnsupportedFormat(_))));
}
