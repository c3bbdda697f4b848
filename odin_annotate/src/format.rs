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

use std::fmt;
use image::ImageFormat;
use crate::errors::{Result, AnnotateError};

/// the output codecs we support
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum OutputFormat { Png, Gif, Jpg }

impl OutputFormat {
    pub fn image_format (&self)->ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Gif => ImageFormat::Gif,
            OutputFormat::Jpg => ImageFormat::Jpeg,
        }
    }

    pub fn has_alpha (&self)->bool {
        !matches!(self, OutputFormat::Jpg)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        let s = match self {
            OutputFormat::Png => "png",
            OutputFormat::Gif => "gif",
            OutputFormat::Jpg => "jpg",
        };
        write!(f, "{s}")
    }
}

/// get the output codec from the extension of the destination path.
/// This looks at the last '.' of the whole path string, a leading '.' does not count as extension
pub fn resolve_output_format (path: &str)->Result<OutputFormat> {
    match path.rfind('.') {
        Some(idx) if idx > 0 => {
            let ext = path[idx+1..].to_lowercase();
            match ext.as_str() {
                "png" => Ok( OutputFormat::Png ),
                "gif" => Ok( OutputFormat::Gif ),
                "jpg" | "jpeg" => Ok( OutputFormat::Jpg ),
                _ => Err( AnnotateError::UnsupportedFormat( ext) )
            }
        }
        _ => Err( AnnotateError::MissingExtension( path.to_string()) )
    }
}
