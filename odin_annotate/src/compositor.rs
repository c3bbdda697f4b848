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

//! drawing text onto a copy of the source image.
//! Glyph outlines and coverage come from `ab_glyph`, the layout along the baseline and the
//! compositing of the paint into the output buffer happen here

use ab_glyph::{Font, GlyphId, OutlinedGlyph, PxScale, ScaleFont};
use image::{DynamicImage, GenericImage, GenericImageView, Rgba, RgbaImage};
use imageproc::rect::Rect;
use tracing::{debug, trace};
use crate::color::Color;
use crate::errors::{Result, AnnotateError};
use crate::font::{font_px_scale, FontHandle};
use crate::placement::AnchorPoint;
use crate::request::RenderRequest;

/// the region of the output image that text may change
pub type ClipRegion = Rect;

/// what we fill glyph shapes with
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum PaintPolicy {
    Solid(Color),

    /// the source image itself is used as fill pattern, anchored at the top left of each glyph
    SourcePattern,
}

/// something that can provide the fill color for glyph pixels.
/// Coordinates are glyph-local, i.e. relative to the top left corner of the glyph pixel bounds
pub trait Paint {
    fn sample (&self, x: u32, y: u32)->Rgba<u8>;
}

impl Paint for Color {
    fn sample (&self, _x: u32, _y: u32)->Rgba<u8> { self.to_rgba() }
}

/// glyph pixels beyond the image bounds get a transparent paint, i.e. they are clipped (not tiled)
impl Paint for DynamicImage {
    fn sample (&self, x: u32, y: u32)->Rgba<u8> {
        if self.in_bounds( x, y) {
            self.get_pixel( x, y)
        } else {
            Rgba([0,0,0,0])
        }
    }
}

/// outcome of drawing a text string. Rendering problems are reported but do not abort
#[derive(Debug)]
pub struct TextResult {
    /// horizontal pen advance in pixels
    pub advance: f32,
    pub error: Option<AnnotateError>,
}

/// the composited output image plus what happened while drawing the text
#[derive(Debug)]
pub struct Rendered {
    pub image: RgbaImage,
    pub advance: f32,
    pub render_error: Option<AnnotateError>,
}

/// copy `source` into a new RGBA buffer of the same size and draw the request message at `anchor`.
/// Only failing to copy the source is an error - text rendering problems (including messages that
/// were not valid UTF-8) end up in `Rendered::render_error`
pub fn composite (request: &RenderRequest, source: &DynamicImage, font: &FontHandle, anchor: AnchorPoint)->Result<Rendered> {
    let (width,height) = source.dimensions();

    let mut image = RgbaImage::new( width, height);
    image.copy_from( source, 0, 0).map_err( AnnotateError::CopyFailed)?;

    if request.message.is_empty() {
        return Ok( Rendered { image, advance: 0.0, render_error: None } )
    }

    // replacement chars are still drawn, we just report the message could not be decoded
    let decode_error = request.message_lossy.then( || format!("message is not valid UTF-8: {:?}", request.message));

    let Some(clip) = clip_region( request.clip, width, height) else {
        debug!("clip region outside of {width}x{height} image, no text drawn");
        let render_error = decode_error.map( AnnotateError::RenderFailed);
        return Ok( Rendered { image, advance: 0.0, render_error } )
    };

    let Some(scale) = font_px_scale( font, request.font_size) else {
        let err = AnnotateError::RenderFailed( format!("no pixel scale for font size {}", request.font_size));
        return Ok( Rendered { image, advance: 0.0, render_error: Some(err) } )
    };

    let res = match &request.paint {
        PaintPolicy::Solid(color) => draw_text( &mut image, font, scale, color, clip, anchor, &request.message),
        PaintPolicy::SourcePattern => draw_text( &mut image, font, scale, source, clip, anchor, &request.message),
    };

    let render_error = match (decode_error, res.error) {
        (Some(msg), Some(AnnotateError::RenderFailed(glyph_msg))) => Some( AnnotateError::RenderFailed( format!("{msg}, {glyph_msg}"))),
        (Some(msg), None) => Some( AnnotateError::RenderFailed( msg)),
        (_, e) => e,
    };

    Ok( Rendered { image, advance: res.advance, render_error } )
}

/// the effective clip region: the requested one (if any) intersected with the image bounds
pub fn clip_region (requested: Option<ClipRegion>, width: u32, height: u32)->Option<ClipRegion> {
    if width == 0 || height == 0 {
        return None
    }

    let bounds = Rect::at( 0, 0).of_size( width, height);
    match requested {
        Some(rect) => rect.intersect( bounds),
        None => Some(bounds)
    }
}

/// draw `text` glyph by glyph, starting with the baseline origin at `origin` and advancing by the
/// (kerned) horizontal font metrics. Chars the font has no glyph for are rendered as the font's
/// .notdef glyph and reported through `TextResult::error`
pub fn draw_text<F,P> (dst: &mut RgbaImage, font: &F, scale: PxScale, paint: &P, clip: ClipRegion, origin: AnchorPoint, text: &str)->TextResult
    where F: Font, P: Paint + ?Sized
{
    let scaled_font = font.as_scaled( scale);
    let mut caret = origin.to_point();
    let mut prev_id: Option<GlyphId> = None;
    let mut missing: Vec<char> = Vec::new();

    for c in text.chars() {
        let id = font.glyph_id(c);
        if id.0 == 0 {
            missing.push(c);
        }

        if let Some(prev_id) = prev_id {
            caret.x += scaled_font.kern( prev_id, id);
        }

        let glyph = id.with_scale_and_position( scale, caret);
        if let Some(outlined) = font.outline_glyph( glyph) {
            draw_glyph( dst, &outlined, paint, &clip);
        }

        caret.x += scaled_font.h_advance( id);
        prev_id = Some(id);
    }

    let advance = caret.x - origin.x;
    trace!("drew {} chars with advance {advance}", text.chars().count());

    let error = if missing.is_empty() {
        None
    } else {
        Some( AnnotateError::RenderFailed( format!("font has no glyph for {:?}", missing.iter().collect::<String>())) )
    };

    TextResult { advance, error }
}

fn draw_glyph<P> (dst: &mut RgbaImage, outlined: &OutlinedGlyph, paint: &P, clip: &ClipRegion) where P: Paint + ?Sized {
    let bounds = outlined.px_bounds();
    let x0 = bounds.min.x as i32;
    let y0 = bounds.min.y as i32;

    outlined.draw( |gx, gy, coverage| {
        let x = x0 + gx as i32;
        let y = y0 + gy as i32;

        if x >= clip.left() && x <= clip.right() && y >= clip.top() && y <= clip.bottom() {
            let pixel = dst.get_pixel_mut( x as u32, y as u32);
            blend_over( pixel, paint.sample( gx, gy), coverage);
        }
    });
}

/// straight alpha 'over' compositing of `src` scaled by glyph `coverage` onto `dst`
pub fn blend_over (dst: &mut Rgba<u8>, src: Rgba<u8>, coverage: f32) {
    let sa = (src[3] as f32 / 255.0) * coverage.clamp( 0.0, 1.0);
    if sa <= 0.0 {
        return
    }

    let da = dst[3] as f32 / 255.0;
    let oa = sa + da * (1.0 - sa);

    for i in 0..3 {
        let c = (src[i] as f32 * sa + dst[i] as f32 * da * (1.0 - sa)) / oa;
        dst[i] = c.round().clamp( 0.0, 255.0) as u8;
    }
    dst[3] = (oa * 255.0).round().clamp( 0.0, 255.0) as u8;
}
