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

use std::ffi::OsString;
use clap::{CommandFactory, Parser};
use crate::define_cli;
use crate::request::RequestArgs;

define_cli! { pub CliArgs [name="odin_annotate", about="draw a text message onto a copy of an image"] =
    src: String [help="Path to the source image file", long, default_value=""],
    dst: String [help="Path to the destination image file (.png, .gif, .jpg or .jpeg)", long, default_value=""],
    font: String [help="Path to the ttf/ttc font file", long, default_value=""],
    msg: OsString [help="The message to draw on the image", long, default_value="Default message", allow_hyphen_values=true],
    xpos: u32 [help="% of the image width to place the beginning of the message", long, default_value="5"],
    ypos: u32 [help="% of the image height to place the beginning of the message", long, default_value="90"],
    color: String [help="The text color to use (RRGGBBAA)", long, default_value="ffffffff"],
    stamp: bool [help="fill the text with the source image at a fixed position instead of a solid color", long],
    atomic: bool [help="write to a temporary file and rename it, leaving no partial output on failure", long]
}

// long options that can also be given with a single dash (e.g. "-src img.png")
const VALUE_FLAGS: [&str;7] = ["src", "dst", "font", "msg", "xpos", "ypos", "color"];
const SWITCH_FLAGS: [&str;3] = ["stamp", "atomic", "help"];

impl CliArgs {
    /// the message is converted lossily, invalid UTF-8 sequences become U+FFFD and are reported
    /// when the text gets drawn
    pub fn to_request_args (&self)->RequestArgs {
        RequestArgs {
            src: self.src.clone(),
            dst: self.dst.clone(),
            font: self.font.clone(),
            msg: self.msg.to_string_lossy().into_owned(),
            msg_lossy: self.msg.to_str().is_none(),
            xpos: self.xpos,
            ypos: self.ypos,
            color: self.color.clone(),
            stamp: self.stamp,
            atomic: self.atomic,
        }
    }
}

/// parse command line args (including the program name). Accepts both "--src x" and "-src x"
pub fn parse_args<I,T> (args: I)->Result<CliArgs,clap::Error> where I: IntoIterator<Item=T>, T: Into<OsString> {
    CliArgs::try_parse_from( normalize_args( args))
}

pub fn usage ()->String {
    CliArgs::command().render_help().to_string()
}

/// rewrite single dash long options into their double dash form. Values of options are never
/// rewritten, and neither is anything after a "--" terminator
pub fn normalize_args<I,T> (args: I)->Vec<OsString> where I: IntoIterator<Item=T>, T: Into<OsString> {
    let mut normalized: Vec<OsString> = Vec::new();
    let mut expect_value = false;
    let mut passthrough = false;

    for arg in args {
        let arg: OsString = arg.into();

        if passthrough || expect_value {
            expect_value = false;
            normalized.push( arg);
            continue;
        }

        if arg == "--" {
            passthrough = true;
            normalized.push( arg);
            continue;
        }

        if let Some(s) = arg.to_str() {
            if let Some((name, has_inline_value)) = long_option_name(s) {
                expect_value = VALUE_FLAGS.contains( &name) && !has_inline_value;
                if !s.starts_with("--") && (VALUE_FLAGS.contains( &name) || SWITCH_FLAGS.contains( &name)) {
                    normalized.push( OsString::from( format!("-{s}")));
                    continue;
                }
            }
        }

        normalized.push( arg);
    }

    normalized
}

/// the option name of "-name", "--name", "-name=v" or "--name=v" args
fn long_option_name (s: &str)->Option<(&str,bool)> {
    let rest = s.strip_prefix("--").or_else( || s.strip_prefix('-'))?;
    if rest.is_empty() {
        return None
    }

    match rest.split_once('=') {
        Some((name,_)) => Some( (name, true) ),
        None => Some( (rest, false) )
    }
}
