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

//! reading source images and writing annotated results.
//! Codecs are provided by the `image` crate, we only pick the format and map errors

use std::io::{Write, Seek, BufWriter};
use std::path::Path;
use image::{buffer::ConvertBuffer, DynamicImage, ImageFormat, ImageReader, RgbImage, RgbaImage};
use tracing::debug;
use crate::errors::{Result, AnnotateError};
use crate::format::OutputFormat;
use crate::fs::{create_buffered, sibling_temp_file, path_to_lossy_string};

/// a decoded source image along with the format that was detected from its content
pub struct SourceImage {
    pub image: DynamicImage,
    pub format: Option<ImageFormat>,
}

impl SourceImage {
    pub fn dimensions (&self)->(u32,u32) {
        (self.image.width(), self.image.height())
    }
}

/// how the destination file is produced
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub enum WriteMode {
    /// create/truncate the destination and encode straight into it. A failed encode can leave
    /// a truncated file behind
    #[default]
    InPlace,

    /// encode into a temp file next to the destination and rename it on success
    Atomic,
}

/// open and decode the image at `path`. The format is sniffed from the file content, the
/// extension is not used
pub fn load_image<P> (path: P)->Result<SourceImage> where P: AsRef<Path> {
    let path = path.as_ref();
    let unreadable = |e| AnnotateError::ImageFileUnreadable( path_to_lossy_string(path), e);

    let reader = ImageReader::open( path).map_err( unreadable)?.with_guessed_format().map_err( unreadable)?;
    let format = reader.format();
    let image = reader.decode().map_err( |e| AnnotateError::ImageDecodeFailed( path_to_lossy_string(path), e))?;
    debug!("decoded {:?} image {}x{} from {:?}", format, image.width(), image.height(), path);

    Ok( SourceImage { image, format } )
}

pub fn save_image<P> (path: P, format: OutputFormat, img: &RgbaImage, mode: WriteMode)->Result<()> where P: AsRef<Path> {
    let path = path.as_ref();
    let unwritable = |e| AnnotateError::OutputFileUnwritable( path_to_lossy_string(path), e);

    match mode {
        WriteMode::InPlace => {
            let mut writer = create_buffered( path).map_err( unwritable)?;
            encode_image( &mut writer, format, img).map_err( |e| AnnotateError::EncodeFailed( path_to_lossy_string(path), e))?;
            writer.flush().map_err( unwritable)?;
        }
        WriteMode::Atomic => {
            // the temp file is removed when dropped on any of the error paths
            let mut tmp_file = sibling_temp_file( path).map_err( unwritable)?;
            {
                let mut writer = BufWriter::new( tmp_file.as_file_mut());
                encode_image( &mut writer, format, img).map_err( |e| AnnotateError::EncodeFailed( path_to_lossy_string(path), e))?;
                writer.flush().map_err( unwritable)?;
            }
            tmp_file.persist( path).map_err( |e| unwritable( e.error))?;
        }
    }

    debug!("saved {} image {}x{} to {:?}", format, img.width(), img.height(), path);
    Ok(())
}

/// encode with the codec defaults of the `image` crate
pub fn encode_image<W> (writer: &mut W, format: OutputFormat, img: &RgbaImage)->image::ImageResult<()> where W: Write + Seek {
    if format.has_alpha() {
        img.write_to( writer, format.image_format())
    } else {
        // JPEG cannot store alpha, it is dropped (not composited against a background)
        let rgb: RgbImage = img.convert();
        rgb.write_to( writer, format.image_format())
    }
}
