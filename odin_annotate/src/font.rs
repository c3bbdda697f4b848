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

use std::path::Path;
use ab_glyph::{Font, FontVec, PxScale};
use tracing::debug;
use crate::errors::{Result, AnnotateError};
use crate::fs::{filepath_contents, path_to_lossy_string};

/// a parsed ttf/otf/ttc font. Owned by the pipeline run, read-only for rendering
pub type FontHandle = FontVec;

pub fn load_font<P> (path: P)->Result<FontHandle> where P: AsRef<Path> {
    let path = path.as_ref();
    let data = filepath_contents( &path).map_err( |e| AnnotateError::FontFileUnreadable( path_to_lossy_string(path), e))?;
    debug!("read {} bytes of font data from {:?}", data.len(), path);

    FontVec::try_from_vec( data).map_err( |e| AnnotateError::FontParseFailed( path_to_lossy_string(path), e))
}

/// get the px scale for a point size, assuming 72 dpi (i.e. one pixel per point and em).
/// Note that `Font::pt_to_px_scale` uses 96 dpi, which would render noticeably larger text.
/// Returns None if the font has no usable units_per_em
pub fn font_px_scale<F> (font: &F, pt_size: f32)->Option<PxScale> where F: Font {
    let units_per_em = font.units_per_em()?;
    if units_per_em <= 0.0 || !pt_size.is_finite() || pt_size <= 0.0 {
        return None
    }

    let height = font.height_unscaled();
    Some( PxScale::from( pt_size * height / units_per_em) )
}
