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

use odin_annotate::{compute_anchor, AnchorPoint, AnnotateError, PlacementPolicy};

#[test]
fn test_percent_anchor() {
    let policy = PlacementPolicy::percent( 50, 10).unwrap();
    assert_eq!( compute_anchor( &policy, 200, 100), AnchorPoint::new( 100.0, 10.0));

    let policy = PlacementPolicy::percent( 0, 0).unwrap();
    assert_eq!( compute_anchor( &policy, 200, 100), AnchorPoint::new( 0.0, 0.0));

    let policy = PlacementPolicy::percent( 100, 100).unwrap();
    assert_eq!( compute_anchor( &policy, 200, 100), AnchorPoint::new( 200.0, 100.0));

    // integer division, as in whole pixels
    let policy = PlacementPolicy::percent( 5, 90).unwrap();
    assert_eq!( compute_anchor( &policy, 333, 77), AnchorPoint::new( 16.0, 69.0));
}

#[test]
fn test_percent_out_of_range() {
    assert!( matches!( PlacementPolicy::percent( 101, 0), Err(AnnotateError::PlacementOutOfRange(_))));
    assert!( matches!( PlacementPolicy::percent( 0, 101), Err(AnnotateError::PlacementOutOfRange(_))));
}

#[test]
fn test_fixed_fraction_anchor() {
    let anchor = compute_anchor( &PlacementPolicy::FixedFraction, 200, 100);
    assert_eq!( anchor, AnchorPoint::new( 20.0, 75.0));

    let anchor = compute_anchor( &PlacementPolicy::FixedFraction, 15, 7);
    assert_eq!( anchor, AnchorPoint::new( 1.0, 6.0));
}

#[test]
fn test_large_dimensions_do_not_overflow() {
    let policy = PlacementPolicy::percent( 100, 100).unwrap();
    let anchor = compute_anchor( &policy, u32::MAX, u32::MAX);
    assert_eq!( anchor.x, u32::MAX as f32);
}
