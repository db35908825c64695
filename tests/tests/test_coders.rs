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

//! Value coders in isolation.

use xcode_pbx::{
    BuildSetting, BuildSettings, Error, ProductType, ProjectCodec, ProjectGraph, ProxyType,
    SourceTree, SubFolder, Value, ValueCoder, VersionRequirementKind,
};
use xcode_pbx_core::coder::{
    BOOLEAN, BUILD_SETTINGS, DICTIONARY, OBJECT_REF, OBJECT_REF_LIST, PRODUCT_TYPE, PROXY_TYPE,
    SOURCE_TREE, STRING, STRING_LIST, SUB_FOLDER, VERSION_REQUIREMENT_KIND,
};
use xcode_pbx_core::plist::{self, PlistValue};
use xcode_pbx_core::resolver::context::{DecodeContext, EncodeContext};
use xcode_pbx_core::resolver::ref_resolver::GlobalIdResolver;

fn wire(text: &str) -> PlistValue {
    match plist::from_str(&format!("{{ v = {text}; }}")).unwrap() {
        PlistValue::Dictionary(mut dict) => dict.shift_remove("v").unwrap(),
        other => panic!("unexpected document {other:?}"),
    }
}

fn decode(coder: &dyn ValueCoder, text: &str) -> Result<Value, Error> {
    let graph = ProjectGraph::new();
    coder.decode(&wire(text), &DecodeContext::new(&graph))
}

fn encode(coder: &dyn ValueCoder, value: &Value) -> Result<PlistValue, Error> {
    let graph = ProjectGraph::new();
    let mut ids = GlobalIdResolver::new(&graph);
    coder.encode(value, &mut EncodeContext::new(&graph, &mut ids, true))
}

fn recode(coder: &dyn ValueCoder, text: &str) -> PlistValue {
    encode(coder, &decode(coder, text).unwrap()).unwrap()
}

#[test]
fn test_string_and_list() {
    assert_eq!(decode(&STRING, "abc").unwrap(), Value::from("abc"));
    assert!(matches!(decode(&STRING, "(abc)"), Err(Error::CoderMismatch(_))));
    assert_eq!(
        decode(&STRING_LIST, "(a, \"b c\",)").unwrap(),
        Value::from(vec!["a".to_owned(), "b c".to_owned()])
    );
    assert!(matches!(decode(&STRING_LIST, "(a, (b))"), Err(Error::CoderMismatch(_))));
    assert_eq!(recode(&STRING_LIST, "()"), PlistValue::Array(Vec::new()));
}

#[test]
fn test_zero_one_boolean() {
    assert_eq!(decode(&BOOLEAN, "1").unwrap(), Value::Bool(true));
    assert_eq!(decode(&BOOLEAN, "0").unwrap(), Value::Bool(false));
    for bad in ["YES", "2", "true", "()"] {
        assert!(matches!(decode(&BOOLEAN, bad), Err(Error::CoderMismatch(_))), "{bad}");
    }
    assert_eq!(encode(&BOOLEAN, &Value::Bool(true)).unwrap(), PlistValue::from("1"));
    assert!(encode(&BOOLEAN, &Value::from("1")).is_err());
}

#[test]
fn test_enumerations() {
    assert_eq!(
        decode(&PRODUCT_TYPE, "\"com.apple.product-type.framework\"").unwrap(),
        Value::ProductType(ProductType::Framework)
    );
    assert_eq!(
        decode(&PRODUCT_TYPE, "com.example.custom").unwrap(),
        Value::ProductType(ProductType::Other("com.example.custom".to_owned()))
    );
    assert_eq!(
        recode(&PRODUCT_TYPE, "com.example.custom"),
        PlistValue::from("com.example.custom")
    );

    assert_eq!(
        decode(&PROXY_TYPE, "2").unwrap(),
        Value::ProxyType(ProxyType::Reference)
    );
    assert!(decode(&PROXY_TYPE, "3").is_err());

    assert_eq!(
        decode(&SUB_FOLDER, "16").unwrap(),
        Value::SubFolder(SubFolder::ProductsDirectory)
    );
    assert!(decode(&SUB_FOLDER, "2").is_err());
    assert_eq!(recode(&SUB_FOLDER, "13"), PlistValue::from("13"));

    assert_eq!(
        decode(&SOURCE_TREE, "\"<group>\"").unwrap(),
        Value::SourceTree(SourceTree::Group)
    );
    assert_eq!(
        decode(&SOURCE_TREE, "PLATFORM_DIR").unwrap(),
        Value::SourceTree(SourceTree::BuildSetting("PLATFORM_DIR".to_owned()))
    );
    assert_eq!(recode(&SOURCE_TREE, "SDKROOT"), PlistValue::from("SDKROOT"));

    assert_eq!(
        decode(&VERSION_REQUIREMENT_KIND, "upToNextMinorVersion").unwrap(),
        Value::VersionRequirementKind(VersionRequirementKind::UpToNextMinorVersion)
    );
    assert!(decode(&VERSION_REQUIREMENT_KIND, "latest").is_err());
}

#[test]
fn test_dictionary_is_opaque() {
    let text = "{ ATTRIBUTES = (Weak, CodeSignOnCopy); COMPILER_FLAGS = \"-fno-objc-arc\"; }";
    let decoded = decode(&DICTIONARY, text).unwrap();
    let Value::Dictionary(dict) = &decoded else {
        panic!("expected dictionary, got {decoded:?}");
    };
    assert_eq!(dict.len(), 2);
    assert_eq!(encode(&DICTIONARY, &decoded).unwrap(), wire(text));
    assert!(decode(&DICTIONARY, "flat").is_err());
}

#[test]
fn test_build_settings() {
    let text = "{ SDKROOT = iphoneos; OTHER_LDFLAGS = (\"-ObjC\", \"$(inherited)\"); }";
    let Value::BuildSettings(settings) = decode(&BUILD_SETTINGS, text).unwrap() else {
        panic!("expected build settings");
    };
    assert_eq!(settings.get_str("SDKROOT"), Some("iphoneos"));
    assert_eq!(
        settings.get("OTHER_LDFLAGS"),
        Some(&BuildSetting::List(vec!["-ObjC".to_owned(), "$(inherited)".to_owned()]))
    );
    assert_eq!(settings.get_str("OTHER_LDFLAGS"), None);
    assert_eq!(recode(&BUILD_SETTINGS, text), wire(text));

    let names: Vec<&str> = settings.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["SDKROOT", "OTHER_LDFLAGS"]);
    assert!(BuildSettings::new().is_empty());
    assert!(decode(&BUILD_SETTINGS, "{ NESTED = { A = B; }; }").is_err());
}

#[test]
fn test_references_resolve_against_graph() {
    let graph = ProjectCodec::default()
        .read_str("objects = { A = { isa = PBXProject; }; B = { isa = PBXGroup; }; }; rootObject = A;")
        .unwrap();
    let context = DecodeContext::new(&graph);
    let b = graph.resolve("B").unwrap();

    assert_eq!(
        OBJECT_REF.decode(&PlistValue::from("B"), &context).unwrap(),
        Value::Reference(b)
    );
    assert!(matches!(
        OBJECT_REF.decode(&PlistValue::from("C"), &context),
        Err(Error::ReferentialIntegrity(_))
    ));
    assert!(OBJECT_REF_LIST
        .decode(&wire("(A, B, C)"), &context)
        .is_err());

    let mut ids = GlobalIdResolver::new(&graph);
    let mut encoder = EncodeContext::new(&graph, &mut ids, true);
    assert_eq!(
        OBJECT_REF_LIST.encode(&Value::from(vec![b]), &mut encoder).unwrap(),
        PlistValue::Array(vec![PlistValue::from("B")])
    );
}
