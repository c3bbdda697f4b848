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

use std::{fmt, str::FromStr};
use image::Rgba;
use crate::errors::{Result, AnnotateError};

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum ColorChannel { Red, Green, Blue, Alpha }

impl ColorChannel {
    pub const ALL: [ColorChannel;4] = [ColorChannel::Red, ColorChannel::Green, ColorChannel::Blue, ColorChannel::Alpha];
}

impl fmt::Display for ColorChannel {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        let s = match self {
            ColorChannel::Red => "red",
            ColorChannel::Green => "green",
            ColorChannel::Blue => "blue",
            ColorChannel::Alpha => "alpha",
        };
        write!(f, "{s}")
    }
}

/// straight (non-premultiplied) 8bit RGBA color
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8
}

impl Color {
    pub const WHITE: Color = Color { r: 0xff, g: 0xff, b: 0xff, a: 0xff };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 0xff };

    pub fn new (r: u8, g: u8, b: u8, a: u8)->Self {
        Color { r, g, b, a }
    }

    pub fn to_rgba (&self)->Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

impl From<Color> for Rgba<u8> {
    fn from (c: Color)->Self { c.to_rgba() }
}

impl FromStr for Color {
    type Err = AnnotateError;

    fn from_str (s: &str)->Result<Self> {
        parse_hex_rgba(s)
    }
}

/// parse a "RRGGBBAA" hex color spec such as "ff00807f"
pub fn parse_hex_rgba (hex_color: &str)->Result<Color> {
    if hex_color.len() != 8 {
        return Err( AnnotateError::InvalidColorFormat( hex_color.to_string()) )
    }

    let mut channels = [0u8;4];
    for (i,channel) in ColorChannel::ALL.iter().enumerate() {
        channels[i] = parse_hex_byte( hex_color, i*2, *channel)?;
    }

    let [r,g,b,a] = channels;
    Ok( Color { r, g, b, a } )
}

fn parse_hex_byte (hex_color: &str, i0: usize, channel: ColorChannel)->Result<u8> {
    // byte length 8 does not mean 8 chars, slicing has to be checked
    let group = hex_color.get(i0..i0+2).ok_or_else( || {
        AnnotateError::InvalidColorComponent( channel, String::from_utf8_lossy( &hex_color.as_bytes()[i0..i0+2]).into_owned())
    })?;

    // from_str_radix would also accept a leading '+'
    if !group.bytes().all( |b| b.is_ascii_hexdigit()) {
        return Err( AnnotateError::InvalidColorComponent( channel, group.to_string()) )
    }

    u8::from_str_radix( group, 16).map_err( |_| AnnotateError::InvalidColorComponent( channel, group.to_string()))
}
