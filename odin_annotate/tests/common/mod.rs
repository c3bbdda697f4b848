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
#![allow(unused)]

use std::path::{Path, PathBuf};
use image::{Rgba, RgbaImage};

/// font files we try if ODIN_ANNOTATE_TEST_FONT is not set
const SYSTEM_FONTS: [&str;5] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
];

/// a TrueType font to render with, or None (the calling test should then skip)
pub fn test_font_path()->Option<PathBuf> {
    if let Ok(path) = std::env::var("ODIN_ANNOTATE_TEST_FONT") {
        let path = PathBuf::from(path);
        if path.is_file() { return Some(path) }
    }

    let found = SYSTEM_FONTS.iter().map(PathBuf::from).find(|p| p.is_file());
    if found.is_none() {
        println!("no test font found (set ODIN_ANNOTATE_TEST_FONT), skipping");
    }
    found
}

pub fn solid_image (width: u32, height: u32, color: [u8;4])->RgbaImage {
    RgbaImage::from_pixel( width, height, Rgba(color))
}

/// a red top-left quadrant on a blue background
pub fn quadrant_image (width: u32, height: u32)->RgbaImage {
    RgbaImage::from_fn( width, height, |x,y| {
        if x < width/2 && y < height/2 { Rgba([255,0,0,255]) } else { Rgba([0,0,255,255]) }
    })
}

pub fn write_png (dir: &Path, name: &str, img: &RgbaImage)->PathBuf {
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

pub fn write_file (dir: &Path, name: &str, contents: &[u8])->PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
