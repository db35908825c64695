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

use std::fmt::Write as _;

use crate::plist::reader::is_unquoted_char;
use crate::plist::{PlistValue, UTF8_HEADER};

/// Serializes plist values in Xcode's dialect.
///
/// Compact output keeps everything on one line (`{ k = v; }`, `( a, b )`).
/// Pretty output puts one entry per line, indented with tabs, and terminates
/// every array element with a comma the way Xcode does.
#[derive(Default)]
pub struct Writer {
    bf: String,
    pretty: bool,
}

impl Writer {
    pub fn new(pretty: bool) -> Writer {
        Writer {
            bf: String::new(),
            pretty,
        }
    }

    pub fn reset(&mut self) {
        self.bf.clear();
    }

    pub fn dump(&self) -> String {
        self.bf.clone()
    }

    pub fn len(&self) -> usize {
        self.bf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bf.is_empty()
    }

    pub fn write_document(&mut self, value: &PlistValue) {
        self.write_header();
        self.write_value(value, 0);
        self.bf.push('\n');
    }

    pub fn write_header(&mut self) {
        self.bf.push_str(UTF8_HEADER);
        self.bf.push('\n');
    }

    pub fn write_value(&mut self, value: &PlistValue, level: usize) {
        match value {
            PlistValue::String(s) => self.write_string(s),
            PlistValue::Data(bytes) => self.write_data(bytes),
            PlistValue::Array(values) => self.write_array(values, level),
            PlistValue::Dictionary(dict) => {
                self.write_dictionary(dict.iter().map(|(k, v)| (k.as_str(), v)), level)
            }
        }
    }

    /// Writes dictionary entries in the iteration order given.
    pub fn write_dictionary<'v, I>(&mut self, entries: I, level: usize)
    where
        I: IntoIterator<Item = (&'v str, &'v PlistValue)>,
    {
        let mut entries = entries.into_iter().peekable();
        if entries.peek().is_none() {
            self.bf.push_str("{}");
            return;
        }
        self.bf.push('{');
        self.bf.push(if self.pretty { '\n' } else { ' ' });
        for (key, value) in entries {
            if self.pretty {
                self.write_indent(level + 1);
            }
            self.write_string(key);
            self.bf.push_str(" = ");
            self.write_value(value, level + 1);
            self.bf.push(';');
            self.bf.push(if self.pretty { '\n' } else { ' ' });
        }
        if self.pretty {
            self.write_indent(level);
        }
        self.bf.push('}');
    }

    pub fn write_array(&mut self, values: &[PlistValue], level: usize) {
        if values.is_empty() {
            self.bf.push_str("()");
            return;
        }
        if self.pretty {
            self.bf.push_str("(\n");
            for value in values {
                self.write_indent(level + 1);
                self.write_value(value, level + 1);
                self.bf.push_str(",\n");
            }
            self.write_indent(level);
            self.bf.push(')');
        } else {
            self.bf.push_str("( ");
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    self.bf.push_str(", ");
                }
                self.write_value(value, level + 1);
            }
            self.bf.push_str(" )");
        }
    }

    pub fn write_data(&mut self, bytes: &[u8]) {
        self.bf.push('<');
        for byte in bytes {
            let _ = write!(self.bf, "{byte:02x}");
        }
        self.bf.push('>');
    }

    /// Writes a string bare when every character is allowed unquoted,
    /// quoted and escaped otherwise. The empty string is always quoted, and so
    /// is a string that would read back as the start of a comment.
    pub fn write_string(&mut self, s: &str) {
        let opens_comment = s.starts_with("//") || s.starts_with("/*");
        if !s.is_empty()
            && !opens_comment
            && s.bytes().all(|c| is_unquoted_char(c) && c != b'+')
        {
            self.bf.push_str(s);
            return;
        }
        self.bf.push('"');
        for c in s.chars() {
            match c {
                '\\' => self.bf.push_str("\\\\"),
                '"' => self.bf.push_str("\\\""),
                '\u{7}' => self.bf.push_str("\\a"),
                '\u{8}' => self.bf.push_str("\\b"),
                '\n' => self.bf.push_str("\\n"),
                '\r' => self.bf.push_str("\\r"),
                '\t' => self.bf.push_str("\\t"),
                '\u{b}' => self.bf.push_str("\\v"),
                c if c.is_ascii() => self.bf.push(c),
                c => {
                    let mut units = [0u16; 2];
                    for unit in c.encode_utf16(&mut units) {
                        let _ = write!(self.bf, "\\U{unit:04x}");
                    }
                }
            }
        }
        self.bf.push('"');
    }

    fn write_indent(&mut self, level: usize) {
        for _ in 0..level {
            self.bf.push('\t');
        }
    }
}
