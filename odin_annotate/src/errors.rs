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

use crate::define_error;
use crate::color::ColorChannel;

pub type Result<T> = std::result::Result<T, AnnotateError>;

define_error!{ pub AnnotateError =
    InvalidColorFormat(String) : "invalid color '{0}', must be 4 hexadecimals of two characters (RRGGBBAA)",
    InvalidColorComponent(ColorChannel, String) : "invalid color, {0} component '{1}' isn't a hexadecimal number between 00 and ff",
    MissingExtension(String) : "destination image file '{0}' doesn't have any extension",
    UnsupportedFormat(String) : "destination image format is unknown, extension: '{0}' (must be png, gif, jpg or jpeg)",
    PlacementOutOfRange(String) : "positions must be a value between 0 and 100: {0}",
    MissingArgument(&'static str) : "missing required argument: {0}",
    FontFileUnreadable(String, #[source] std::io::Error) : "error reading font file {0}",
    FontParseFailed(String, #[source] ab_glyph::InvalidFont) : "error parsing font data of {0}",
    ImageFileUnreadable(String, #[source] std::io::Error) : "error reading source image file {0}",
    ImageDecodeFailed(String, #[source] image::ImageError) : "error decoding image file {0}",
    CopyFailed(#[source] image::ImageError) : "error copying source image into output buffer",
    RenderFailed(String) : "error drawing the message into the image: {0}",
    OutputFileUnwritable(String, #[source] std::io::Error) : "error writing image file {0}",
    EncodeFailed(String, #[source] image::ImageError) : "error encoding image file {0}"
}

/// the coarse failure categories we report to users. Only `Render` is recoverable
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum ErrorKind {
    Validation,
    Io,
    Decode,
    FontParse,
    Composite,
    Render,
    Encode,
}

impl AnnotateError {
    pub fn kind (&self)->ErrorKind {
        use AnnotateError::*;
        match self {
            InvalidColorFormat(..) | InvalidColorComponent(..) | MissingExtension(..) |
            UnsupportedFormat(..) | PlacementOutOfRange(..) | MissingArgument(..) => ErrorKind::Validation,
            FontFileUnreadable(..) | ImageFileUnreadable(..) | OutputFileUnwritable(..) => ErrorKind::Io,
            ImageDecodeFailed(..) => ErrorKind::Decode,
            FontParseFailed(..) => ErrorKind::FontParse,
            CopyFailed(..) => ErrorKind::Composite,
            RenderFailed(..) => ErrorKind::Render,
            EncodeFailed(..) => ErrorKind::Encode,
        }
    }

    pub fn is_fatal (&self)->bool {
        self.kind() != ErrorKind::Render
    }

    /// short diagnostic tag that is printed along with the message
    pub fn code (&self)->&'static str {
        use AnnotateError::*;
        match self {
            InvalidColorFormat(..) => "InvalidColorFormat",
            InvalidColorComponent(..) => "InvalidColorComponent",
            MissingExtension(..) => "MissingExtension",
            UnsupportedFormat(..) => "UnsupportedFormat",
            PlacementOutOfRange(..) => "PlacementOutOfRange",
            MissingArgument(..) => "MissingArgument",
            FontFileUnreadable(..) => "FontFileUnreadable",
            FontParseFailed(..) => "FontParseFailed",
            ImageFileUnreadable(..) => "ImageFileUnreadable",
            ImageDecodeFailed(..) => "ImageDecodeFailed",
            CopyFailed(..) => "CopyFailed",
            RenderFailed(..) => "RenderFailed",
            OutputFileUnwritable(..) => "OutputFileUnwritable",
            EncodeFailed(..) => "EncodeFailed",
        }
    }
}
