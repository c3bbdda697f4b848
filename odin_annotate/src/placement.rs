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

use ab_glyph::{point, Point};
use crate::errors::{Result, AnnotateError};

/// where the text origin (start of the baseline) goes
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum PlacementPolicy {
    /// percent of image width/height, each in [0,100]
    Percent { x: u32, y: u32 },

    /// x = width/10, y = height - height/4
    FixedFraction,
}

impl PlacementPolicy {
    pub fn percent (x: u32, y: u32)->Result<Self> {
        if x > 100 || y > 100 {
            Err( AnnotateError::PlacementOutOfRange( format!("xpos={x}, ypos={y}")) )
        } else {
            Ok( PlacementPolicy::Percent { x, y } )
        }
    }
}

/// sub-pixel position of the text origin in image coordinates
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct AnchorPoint {
    pub x: f32,
    pub y: f32
}

impl AnchorPoint {
    pub fn new (x: f32, y: f32)->Self { AnchorPoint { x, y } }

    pub fn to_point (&self)->Point { point( self.x, self.y) }
}

/// compute the absolute pixel anchor. This does not clamp - the text itself is allowed to
/// extend beyond the image
pub fn compute_anchor (policy: &PlacementPolicy, width: u32, height: u32)->AnchorPoint {
    let (w,h) = (width as u64, height as u64);

    // integer arithmetic so that we land on whole pixels
    let (x,y) = match policy {
        PlacementPolicy::Percent { x, y } => ( w * (*x as u64) / 100, h * (*y as u64) / 100 ),
        PlacementPolicy::FixedFraction => ( w / 10, h - h / 4 ),
    };

    AnchorPoint::new( x as f32, y as f32)
}
