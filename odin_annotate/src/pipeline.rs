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

//! the linear annotation pipeline:
//! `ParseArgs → ValidateArgs → LoadSource → LoadFont → ComputePlacement → Composite → Write → Done`.
//! Every stage error is fatal except for text rendering problems in `Composite`, which are
//! logged and reported while the (partially) annotated image still gets written

use std::fmt;
use image::ImageFormat;
use tracing::{debug, info, warn};
use crate::compositor::composite;
use crate::errors::AnnotateError;
use crate::font::load_font;
use crate::format::OutputFormat;
use crate::image_io::{load_image, save_image};
use crate::placement::{compute_anchor, AnchorPoint};
use crate::request::RenderRequest;

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Stage {
    ParseArgs,
    ValidateArgs,
    LoadSource,
    LoadFont,
    ComputePlacement,
    Composite,
    Write,
    Done,
}

impl fmt::Display for Stage {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        let s = match self {
            Stage::ParseArgs => "parse arguments",
            Stage::ValidateArgs => "validate arguments",
            Stage::LoadSource => "load source image",
            Stage::LoadFont => "load font",
            Stage::ComputePlacement => "compute placement",
            Stage::Composite => "composite text",
            Stage::Write => "write image",
            Stage::Done => "done",
        };
        write!(f, "{s}")
    }
}

/// a fatal error along with the stage it happened in
#[derive(Debug)]
pub struct StageError {
    pub stage: Stage,
    pub error: AnnotateError,
}

impl StageError {
    pub fn new (stage: Stage, error: AnnotateError)->Self { StageError { stage, error } }
}

impl fmt::Display for StageError {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "{} failed ({})", self.stage, self.error.code())
    }
}

impl std::error::Error for StageError {
    fn source (&self)->Option<&(dyn std::error::Error + 'static)> {
        Some( &self.error)
    }
}

/// what a successful run produced
#[derive(Debug)]
pub struct RunReport {
    pub width: u32,
    pub height: u32,
    pub source_format: Option<ImageFormat>,
    pub output_format: OutputFormat,
    pub anchor: AnchorPoint,
    pub advance: f32,

    /// the non-fatal text rendering error, if any
    pub render_error: Option<AnnotateError>,
}

/// run all stages after argument validation for one request. There are no retries, the first
/// fatal error ends the run
pub fn run (request: &RenderRequest)->Result<RunReport, StageError> {
    let at = |stage: Stage| move |e: AnnotateError| StageError::new( stage, e);

    debug!("{}: {:?}", Stage::LoadSource, request.src);
    let source = load_image( &request.src).map_err( at(Stage::LoadSource))?;
    let (width,height) = source.dimensions();

    debug!("{}: {:?}", Stage::LoadFont, request.font);
    let font = load_font( &request.font).map_err( at(Stage::LoadFont))?;

    let anchor = compute_anchor( &request.placement, width, height);
    debug!("{}: {:?} for {width}x{height} -> {anchor:?}", Stage::ComputePlacement, request.placement);

    debug!("{}: {:?} at size {}", Stage::Composite, request.message, request.font_size);
    let rendered = composite( request, &source.image, &font, anchor).map_err( at(Stage::Composite))?;
    if let Some(e) = &rendered.render_error {
        warn!("{}: {e}, writing image anyway", Stage::Composite);
    }

    debug!("{}: {:?} as {}", Stage::Write, request.dst, request.format);
    save_image( &request.dst, request.format, &rendered.image, request.write_mode).map_err( at(Stage::Write))?;

    info!("annotated {:?} -> {:?} ({width}x{height} {})", request.src, request.dst, request.format);

    Ok( RunReport {
        width,
        height,
        source_format: source.format,
        output_format: request.format,
        anchor,
        advance: rendered.advance,
        render_error: rendered.render_error,
    })
}
