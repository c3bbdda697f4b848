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

//! text annotation of images for ODIN.
//! This draws a message onto a copy of a source image and saves the result as PNG, GIF or JPEG,
//! wrapping the external `image` (codecs) and `ab_glyph` (font outlines) crates

pub mod macros;
pub mod errors;
pub use errors::{Result, AnnotateError, ErrorKind};

mod fs;

pub mod color;
pub use color::{Color, ColorChannel, parse_hex_rgba};

pub mod format;
pub use format::{OutputFormat, resolve_output_format};

pub mod font;
pub use font::{FontHandle, load_font, font_px_scale};

pub mod image_io;
pub use image_io::{SourceImage, WriteMode, load_image, save_image};

pub mod placement;
pub use placement::{AnchorPoint, PlacementPolicy, compute_anchor};

pub mod compositor;
pub use compositor::{ClipRegion, Paint, PaintPolicy, Rendered, TextResult, composite, draw_text};

pub mod request;
pub use request::{RenderRequest, RequestArgs, LABEL_FONT_SIZE, STAMP_FONT_SIZE};

pub mod pipeline;
pub use pipeline::{RunReport, Stage, StageError, run};

pub mod cli;
pub use cli::{CliArgs, parse_args};
