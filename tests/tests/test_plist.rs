// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! The ASCII plist dialect through its public entry points.

use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use xcode_pbx_core::plist::reader::MAX_DEPTH;
use xcode_pbx_core::plist::{self, PlistValue};
use xcode_pbx_core::Error;

fn dict(entries: &[(&str, PlistValue)]) -> PlistValue {
    PlistValue::Dictionary(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect::<IndexMap<_, _>>(),
    )
}

#[test]
fn test_data_round_trip() {
    let value = plist::from_str("{ blob = <0fbd77 2a>; }").unwrap();
    assert_eq!(value, dict(&[("blob", PlistValue::Data(vec![0x0f, 0xbd, 0x77, 0x2a]))]));
    assert_eq!(
        plist::to_string(&value, false),
        "// !$*UTF8*$!\n{ blob = <0fbd772a>; }\n"
    );
}

#[test]
fn test_non_ascii_round_trip() {
    let value = dict(&[("name", PlistValue::from("Café 🚀"))]);
    let text = plist::to_string(&value, false);
    assert!(text.contains("\"Caf\\U00e9 \\Ud83d\\Ude80\""), "{text}");
    assert_eq!(plist::from_str(&text).unwrap(), value);
}

#[test]
fn test_octal_and_single_quoted() {
    let value = plist::from_str("{ a = \"\\101\\102\"; b = 'x y'; }").unwrap();
    assert_eq!(
        value,
        dict(&[("a", PlistValue::from("AB")), ("b", PlistValue::from("x y"))])
    );
}

#[test]
fn test_pretty_layout() {
    let value = dict(&[
        ("files", PlistValue::Array(vec!["A".into(), "B".into()])),
        ("empty", PlistValue::Array(Vec::new())),
        ("settings", dict(&[("KEY", "value with space".into())])),
    ]);
    assert_eq!(
        plist::to_string(&value, true),
        "// !$*UTF8*$!\n{\n\tfiles = (\n\t\tA,\n\t\tB,\n\t);\n\tempty = ();\n\tsettings = {\n\t\tKEY = \"value with space\";\n\t};\n}\n"
    );
}

#[test]
fn test_syntax_errors_are_malformed() {
    for input in ["{ a = b }", "{ a = (b c); }", "{ a = \"open; }", "{ a = b; } trailing", "{ a = <0g>; }"] {
        match plist::from_str(input) {
            Err(Error::MalformedProject(_)) => {}
            other => panic!("{input:?} parsed as {other:?}"),
        }
    }
}

#[test]
fn test_comments_anywhere() {
    let value = plist::from_str(
        "// !$*UTF8*$!\n{ /* c */ a /* c */ = /* c */ b /* c */ ; // line\n }",
    )
    .unwrap();
    assert_eq!(value, dict(&[("a", PlistValue::from("b"))]));
}

#[test]
fn test_comment_like_strings_round_trip() {
    let value = dict(&[
        ("//key", PlistValue::from("//net/share/a.c")),
        ("glob", PlistValue::from("/*")),
        ("inner", PlistValue::from("a//b")),
    ]);
    for pretty in [false, true] {
        let text = plist::to_string(&value, pretty);
        assert!(text.contains("\"//net/share/a.c\""), "{text}");
        assert!(text.contains("\"//key\""), "{text}");
        assert_eq!(plist::from_str(&text).unwrap(), value);
    }

    let graph = xcode_pbx::from_str(
        "objects = {
            1 = { isa = PBXProject; targets = (); };
            2 = { isa = PBXFileReference; path = \"//net/share/a.c\"; sourceTree = \"<absolute>\"; };
        };
        rootObject = 1;",
    )
    .unwrap();
    let text = xcode_pbx::to_string(&graph).unwrap();
    let reread = xcode_pbx::from_str(&text).unwrap();
    assert!(graph == reread);
    let file: xcode_pbx::PBXFileReference = reread.get_by_global_id("2").unwrap();
    assert_eq!(file.path().unwrap().as_deref(), Some("//net/share/a.c"));
}

#[test]
fn test_nesting_depth_is_bounded() {
    let nested = |levels: usize| {
        format!("{{ v = {}{}; }}", "(".repeat(levels), ")".repeat(levels))
    };
    // The outer dictionary is one level.
    assert!(plist::from_str(&nested(MAX_DEPTH as usize - 1)).is_ok());
    for levels in [MAX_DEPTH as usize, 200_000] {
        match plist::from_str(&nested(levels)) {
            Err(err @ Error::MalformedProject(_)) => {
                assert!(err.to_string().contains("nesting too deep"), "{err}");
            }
            other => panic!("{levels} levels read as {other:?}"),
        }
    }
}
