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

use odin_annotate::{parse_hex_rgba, AnnotateError, Color, ColorChannel, ErrorKind};

// run with "cargo test --test test_color -- --nocapture"

#[test]
fn test_parse_channels() {
    let c = parse_hex_rgba("ff00807f").unwrap();
    assert_eq!( c, Color::new(255, 0, 128, 127));

    let c: Color = "FFFFFFFF".parse().unwrap();
    assert_eq!( c, Color::WHITE);

    let c = parse_hex_rgba("000000ff").unwrap();
    assert_eq!( c, Color::BLACK);
    assert_eq!( c.to_rgba().0, [0,0,0,255]);
}

#[test]
fn test_channels_are_independent() {
    for (i,channel) in ColorChannel::ALL.iter().enumerate() {
        let mut s = String::from("00000000");
        s.replace_range( i*2..i*2+2, "a5");
        let c = parse_hex_rgba(&s).unwrap();
        let expected = [0u8,0,0,0].iter().enumerate().map(|(j,v)| if j == i { 0xa5 } else { *v }).collect::<Vec<u8>>();
        assert_eq!( vec![c.r, c.g, c.b, c.a], expected, "channel {channel}");
    }
}

#[test]
fn test_invalid_length() {
    for s in ["", "fff", "fffffff", "fffffffff", "ffffffffff"] {
        match parse_hex_rgba(s) {
            Err(e @ AnnotateError::InvalidColorFormat(_)) => assert_eq!( e.kind(), ErrorKind::Validation),
            other => panic!("expected InvalidColorFormat for {s:?}, got {other:?}")
        }
    }
}

#[test]
fn test_invalid_component() {
    for (i,channel) in ColorChannel::ALL.iter().enumerate() {
        let mut s = String::from("ffffffff");
        s.replace_range( i*2..i*2+2, "g0");
        match parse_hex_rgba(&s) {
            Err(AnnotateError::InvalidColorComponent(ch, group)) => {
                println!("{s} -> {}", AnnotateError::InvalidColorComponent(ch, group.clone()));
                assert_eq!( ch, *channel);
                assert_eq!( group, "g0");
            }
            other => panic!("expected InvalidColorComponent for {s:?}, got {other:?}")
        }
    }
}

#[test]
fn test_rejects_sign_and_non_ascii() {
    assert!( matches!( parse_hex_rgba("+fffffff"), Err(AnnotateError::InvalidColorComponent(ColorChannel::Red,_))));
    assert!( matches!( parse_hex_rgba("ffff-1ff"), Err(AnnotateError::InvalidColorComponent(ColorChannel::Blue,_))));

    // 8 bytes but only 7 chars, must not panic
    assert!( matches!( parse_hex_rgba("ffffff\u{e9}"), Err(AnnotateError::InvalidColorComponent(ColorChannel::Alpha,_))));
    assert!( matches!( parse_hex_rgba("f\u{e9}fffff"), Err(AnnotateError::InvalidColorComponent(ColorChannel::Red,_))));
}
