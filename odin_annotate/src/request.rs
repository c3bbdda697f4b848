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

use std::path::PathBuf;
use crate::color::{parse_hex_rgba, Color};
use crate::compositor::{ClipRegion, PaintPolicy};
use crate::errors::{Result, AnnotateError};
use crate::format::{resolve_output_format, OutputFormat};
use crate::image_io::WriteMode;
use crate::placement::PlacementPolicy;

/// font point size for solid color labels at percent positions
pub const LABEL_FONT_SIZE: f32 = 30.0;

/// font point size for text stamped with the source image as paint
pub const STAMP_FONT_SIZE: f32 = 20.0;

pub const DEFAULT_MESSAGE: &str = "Default message";
pub const DEFAULT_XPOS: u32 = 5;
pub const DEFAULT_YPOS: u32 = 90;
pub const DEFAULT_COLOR: &str = "ffffffff";

/// everything a single annotation run needs. Created once from validated arguments and not
/// modified afterwards
#[derive(Debug,Clone,PartialEq)]
pub struct RenderRequest {
    pub src: PathBuf,
    pub dst: PathBuf,
    pub font: PathBuf,
    pub message: String,

    /// the message was not valid UTF-8 and contains replacement chars
    pub message_lossy: bool,

    pub font_size: f32,
    pub placement: PlacementPolicy,
    pub paint: PaintPolicy,
    pub clip: Option<ClipRegion>,
    pub format: OutputFormat,
    pub write_mode: WriteMode,
}

impl RenderRequest {
    /// a solid color label at percent positions. Fails if the destination extension is not supported
    pub fn label (src: impl Into<PathBuf>, dst: impl Into<PathBuf>, font: impl Into<PathBuf>, message: impl Into<String>,
                  placement: PlacementPolicy, color: Color)->Result<Self> {
        Self::with_policies( src, dst, font, message, LABEL_FONT_SIZE, placement, PaintPolicy::Solid(color))
    }

    /// text that is filled with the source image, at fixed fractions of the image size
    pub fn stamp (src: impl Into<PathBuf>, dst: impl Into<PathBuf>, font: impl Into<PathBuf>, message: impl Into<String>)->Result<Self> {
        Self::with_policies( src, dst, font, message, STAMP_FONT_SIZE, PlacementPolicy::FixedFraction, PaintPolicy::SourcePattern)
    }

    pub fn with_policies (src: impl Into<PathBuf>, dst: impl Into<PathBuf>, font: impl Into<PathBuf>, message: impl Into<String>,
                          font_size: f32, placement: PlacementPolicy, paint: PaintPolicy)->Result<Self> {
        let dst: PathBuf = dst.into();
        let format = resolve_output_format( &dst.to_string_lossy())?;

        Ok( RenderRequest {
            src: src.into(),
            dst,
            font: font.into(),
            message: message.into(),
            message_lossy: false,
            font_size,
            placement,
            paint,
            clip: None,
            format,
            write_mode: WriteMode::InPlace,
        })
    }

    pub fn with_clip (mut self, clip: ClipRegion)->Self {
        self.clip = Some(clip);
        self
    }

    pub fn with_lossy_message (mut self, message_lossy: bool)->Self {
        self.message_lossy = message_lossy;
        self
    }

    pub fn with_write_mode (mut self, write_mode: WriteMode)->Self {
        self.write_mode = write_mode;
        self
    }
}

/// raw (unvalidated) command line values
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct RequestArgs {
    pub src: String,
    pub dst: String,
    pub font: String,
    pub msg: String,
    pub msg_lossy: bool,
    pub xpos: u32,
    pub ypos: u32,
    pub color: String,
    pub stamp: bool,
    pub atomic: bool,
}

impl Default for RequestArgs {
    fn default()->Self {
        RequestArgs {
            src: String::new(),
            dst: String::new(),
            font: String::new(),
            msg: DEFAULT_MESSAGE.to_string(),
            msg_lossy: false,
            xpos: DEFAULT_XPOS,
            ypos: DEFAULT_YPOS,
            color: DEFAULT_COLOR.to_string(),
            stamp: false,
            atomic: false,
        }
    }
}

impl RequestArgs {
    /// the validation gate. This does not touch the file system
    pub fn validate (&self)->Result<RenderRequest> {
        if self.src.is_empty() { return Err( AnnotateError::MissingArgument("src")) }
        if self.dst.is_empty() { return Err( AnnotateError::MissingArgument("dst")) }
        if self.font.is_empty() { return Err( AnnotateError::MissingArgument("font")) }

        let request = if self.stamp {
            // xpos/ypos/color do not apply to stamps
            RenderRequest::stamp( &self.src, &self.dst, &self.font, &self.msg)?
        } else {
            let placement = PlacementPolicy::percent( self.xpos, self.ypos)?;
            let color = parse_hex_rgba( &self.color)?;
            RenderRequest::label( &self.src, &self.dst, &self.font, &self.msg, placement, color)?
        };

        let write_mode = if self.atomic { WriteMode::Atomic } else { WriteMode::InPlace };
        Ok( request.with_write_mode( write_mode).with_lossy_message( self.msg_lossy) )
    }
}
