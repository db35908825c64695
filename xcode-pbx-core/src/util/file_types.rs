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

//! Xcode file type identifiers keyed by file extension.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Identifiers Xcode only honours as `lastKnownFileType`.
pub const EXPLICIT_FILE_TYPE_BROKEN_IDENTIFIERS: &[&str] =
    &["file.xib", "file.storyboard", "wrapper.scnassets"];

/// Identifiers written as `lastKnownFileType` so renaming the file changes its type.
pub const MODIFIABLE_FILE_TYPE_IDENTIFIERS: &[&str] = &[
    "sourcecode.c.c",
    "sourcecode.c.h",
    "sourcecode.cpp.cpp",
    "sourcecode.cpp.h",
    "sourcecode.c.objc",
    "sourcecode.cpp.objcpp",
];

const FILE_EXTENSIONS: &[(&str, &str)] = &[
    ("1", "text.man"),
    ("a", "archive.ar"),
    ("ada", "sourcecode.ada"),
    ("adb", "sourcecode.ada"),
    ("ads", "sourcecode.ada"),
    ("aiff", "audio.aiff"),
    ("app", "wrapper.application"),
    ("appex", "wrapper.app-extension"),
    ("applescript", "sourcecode.applescript"),
    ("archivingdescription", "text.xml.ibArchivingDescription"),
    ("asdictionary", "archive.asdictionary"),
    ("asm", "sourcecode.asm.asm"),
    ("au", "audio.au"),
    ("avi", "video.avi"),
    ("bdic", "file"),
    ("bin", "archive.macbinary"),
    ("bmp", "image.bmp"),
    ("bundle", "wrapper.cfbundle"),
    ("c", "sourcecode.c.c"),
    ("c++", "sourcecode.cpp.cpp"),
    ("cc", "sourcecode.cpp.cpp"),
    ("cdda", "audio.aiff"),
    ("cl", "sourcecode.opencl"),
    ("class", "compiled.javaclass"),
    ("classdescription", "text.plist.ibClassDescription"),
    ("classdescriptions", "text.plist.ibClassDescription"),
    ("codingdescription", "text.xml.ibCodingDescription"),
    ("cp", "sourcecode.cpp.cpp"),
    ("cpp", "sourcecode.cpp.cpp"),
    ("csh", "text.script.csh"),
    ("css", "text.css"),
    ("ctrl", "sourcecode.glsl"),
    ("cxx", "sourcecode.cpp.cpp"),
    ("d", "sourcecode.dtrace"),
    ("dart", "sourcecode"),
    ("data", "compiled"),
    ("defs", "sourcecode.mig"),
    ("dict", "text.plist"),
    ("dsym", "wrapper.dsym"),
    ("dylan", "sourcecode.dylan"),
    ("dylib", "compiled.mach-o.dylib"),
    ("ear", "archive.ear"),
    ("eval", "sourcecode.glsl"),
    ("exp", "sourcecode.exports"),
    ("f", "sourcecode.fortran"),
    ("f77", "sourcecode.fortran.f77"),
    ("f90", "sourcecode.fortran.f90"),
    ("f95", "sourcecode.fortran.f90"),
    ("for", "sourcecode.fortran"),
    ("frag", "sourcecode.glsl"),
    ("fragment", "sourcecode.glsl"),
    ("framework", "wrapper.framework"),
    ("fs", "sourcecode.glsl"),
    ("fsh", "sourcecode.glsl"),
    ("geom", "sourcecode.glsl"),
    ("geometry", "sourcecode.glsl"),
    ("gif", "image.gif"),
    ("gmk", "sourcecode.make"),
    ("gs", "sourcecode.glsl"),
    ("gsh", "sourcecode.glsl"),
    ("gyp", "sourcecode"),
    ("gypi", "text"),
    ("gz", "archive.gzip"),
    ("h", "sourcecode.c.h"),
    ("h++", "sourcecode.cpp.h"),
    ("hh", "sourcecode.cpp.h"),
    ("hp", "sourcecode.cpp.h"),
    ("hpp", "sourcecode.cpp.h"),
    ("hqx", "archive.binhex"),
    ("htm", "text.html"),
    ("html", "text.html"),
    ("htmld", "wrapper.htmld"),
    ("hxx", "sourcecode.cpp.h"),
    ("i", "sourcecode.c.c.preprocessed"),
    ("icns", "image.icns"),
    ("ico", "image.ico"),
    ("iconset", "folder.iconset"),
    ("ii", "sourcecode.cpp.cpp.preprocessed"),
    ("imagecatalog", "folder.imagecatalog"),
    ("inc", "sourcecode.pascal"),
    ("inl", "sourcecode.cpp.h"),
    ("ipp", "sourcecode.cpp.h"),
    ("jam", "sourcecode.jam"),
    ("jar", "archive.jar"),
    ("java", "sourcecode.java"),
    ("javascript", "sourcecode.javascript"),
    ("jpeg", "image.jpeg"),
    ("jpg", "image.jpeg"),
    ("js", "sourcecode.javascript"),
    ("jscript", "sourcecode.javascript"),
    ("json", "text.json"),
    ("jsp", "text.html.other"),
    ("kext", "wrapper.kernel-extension"),
    ("l", "sourcecode.lex"),
    ("lid", "sourcecode.dylan"),
    ("ll", "sourcecode.asm.llvm"),
    ("llx", "sourcecode.asm.llvm"),
    ("lm", "sourcecode.lex"),
    ("lmm", "sourcecode.lex"),
    ("lp", "sourcecode.lex"),
    ("lpp", "sourcecode.lex"),
    ("lxx", "sourcecode.lex"),
    ("m", "sourcecode.c.objc"),
    ("mak", "sourcecode.make"),
    ("map", "sourcecode.module-map"),
    ("markdown", "net.daringfireball.markdown"),
    ("md", "net.daringfireball.markdown"),
    ("mdimporter", "wrapper.spotlight-importer"),
    ("mdown", "net.daringfireball.markdown"),
    ("mi", "sourcecode.c.objc.preprocessed"),
    ("mid", "audio.midi"),
    ("midi", "audio.midi"),
    ("mig", "sourcecode.mig"),
    ("mii", "sourcecode.cpp.objcpp.preprocessed"),
    ("mm", "sourcecode.cpp.objcpp"),
    ("modulemap", "sourcecode.module-map"),
    ("moov", "video.quicktime"),
    ("mov", "video.quicktime"),
    ("mp3", "audio.mp3"),
    ("mpeg", "video.mpeg"),
    ("mpg", "video.mpeg"),
    ("mpkg", "wrapper.installer-mpkg"),
    ("nasm", "sourcecode.nasm"),
    ("nib", "wrapper.nib"),
    ("nib~", "wrapper.nib"),
    ("nqc", "sourcecode.nqc"),
    ("o", "compiled.mach-o.objfile"),
    ("octest", "wrapper.cfbundle"),
    ("p", "sourcecode.pascal"),
    ("pas", "sourcecode.pascal"),
    ("pbfilespec", "text.plist.pbfilespec"),
    ("pblangspec", "text.plist.pblangspec"),
    ("pbxproj", "text.pbxproject"),
    ("pch", "sourcecode.c.h"),
    ("pch++", "sourcecode.cpp.h"),
    ("pct", "image.pict"),
    ("pdf", "image.pdf"),
    ("perl", "text.script.perl"),
    ("php", "text.script.php"),
    ("php3", "text.script.php"),
    ("php4", "text.script.php"),
    ("phtml", "text.script.php"),
    ("pict", "image.pict"),
    ("pkg", "wrapper.installer-pkg"),
    ("pl", "text.script.perl"),
    ("plist", "text.plist"),
    ("pluginkit", "wrapper.app-extension"),
    ("pm", "text.script.perl"),
    ("png", "image.png"),
    ("pp", "sourcecode.pascal"),
    ("ppob", "archive.ppob"),
    ("prefpane", "wrapper.cfbundle"),
    ("proto", "text"),
    ("py", "text.script.python"),
    ("qtz", "video.quartz-composer"),
    ("r", "sourcecode.rez"),
    ("rb", "text.script.ruby"),
    ("rbw", "text.script.ruby"),
    ("rcx", "compiled.rcx"),
    ("rez", "sourcecode.rez"),
    ("rhtml", "text.html.other"),
    ("rsrc", "archive.rsrc"),
    ("rtf", "text.rtf"),
    ("rtfd", "wrapper.rtfd"),
    ("s", "sourcecode.asm"),
    ("scnassets", "wrapper.scnassets"),
    ("scriptSuite", "text.plist.scriptSuite"),
    ("scriptTerminology", "text.plist.scriptTerminology"),
    ("sh", "text.script.sh"),
    ("shtml", "text.html.other"),
    ("sit", "archive.stuffit"),
    ("storyboard", "file.storyboard"),
    ("strings", "text.plist.strings"),
    ("stringsdict", "file.bplist"),
    ("tar", "archive.tar"),
    ("tbd", "sourcecode.text-based-dylib-definition"),
    ("tcc", "sourcecode.cpp.cpp"),
    ("text", "net.daringfireball.markdown"),
    ("tif", "image.tiff"),
    ("tiff", "image.tiff"),
    ("ttf", "file"),
    ("txt", "text"),
    ("uicatalog", "file.uicatalog"),
    ("vert", "sourcecode.glsl"),
    ("vertex", "sourcecode.glsl"),
    ("view", "archive.rsrc"),
    ("vs", "sourcecode.glsl"),
    ("vsh", "sourcecode.glsl"),
    ("war", "archive.war"),
    ("wav", "audio.wav"),
    ("worksheet", "text.script.worksheet"),
    ("xcassets", "folder.assetcatalog"),
    ("xcbuildrules", "text.plist.xcbuildrules"),
    ("xcconfig", "text.xcconfig"),
    ("xcdatamodel", "wrapper.xcdatamodel"),
    ("xcdatamodeld", "wrapper.xcdatamodeld"),
    ("xclangspec", "text.plist.xclangspec"),
    ("xcode", "wrapper.pb-project"),
    ("xcodeproj", "wrapper.pb-project"),
    ("xcspec", "text.plist.xcspec"),
    ("xcsynspec", "text.plist.xcsynspec"),
    ("xctarget", "wrapper.pb-target"),
    ("xctest", "wrapper.cfbundle"),
    ("xctxtmacro", "text.plist.xctxtmacro"),
    ("xcworkspace", "wrapper.workspace"),
    ("xib", "file.xib"),
    ("xpc", "wrapper.xpc-service"),
    ("y", "sourcecode.yacc"),
    ("ym", "sourcecode.yacc"),
    ("ymm", "sourcecode.yacc"),
    ("yp", "sourcecode.yacc"),
    ("ypp", "sourcecode.yacc"),
    ("yxx", "sourcecode.yacc"),
    ("zip", "archive.zip"),
];

static FILE_EXTENSION_TO_IDENTIFIER: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| FILE_EXTENSIONS.iter().copied().collect());

/// Which `PBXFileReference` field an inferred file type belongs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileTypeField {
    LastKnown,
    Explicit,
}

pub fn identifier_for_extension(extension: &str) -> Option<&'static str> {
    FILE_EXTENSION_TO_IDENTIFIER.get(extension).copied()
}

/// Infers the Xcode file type of `path` from its extension.
pub fn infer_file_type(path: &str) -> Option<(FileTypeField, &'static str)> {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let (_, extension) = file_name.rsplit_once('.')?;
    let identifier = identifier_for_extension(extension)?;
    if MODIFIABLE_FILE_TYPE_IDENTIFIERS.contains(&identifier)
        || EXPLICIT_FILE_TYPE_BROKEN_IDENTIFIERS.contains(&identifier)
    {
        Some((FileTypeField::LastKnown, identifier))
    } else {
        Some((FileTypeField::Explicit, identifier))
    }
}
