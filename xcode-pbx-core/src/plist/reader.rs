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

use crate::error::Error;
use crate::plist::{Dictionary, PlistValue};

/// Characters allowed in an unquoted string.
#[inline(always)]
pub(crate) fn is_unquoted_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'_' | b'$' | b'/' | b':' | b'.' | b'-' | b'+')
}

/// Deepest container nesting accepted before a read fails.
pub const MAX_DEPTH: u32 = 256;

/// Recursive-descent reader over a whole document held in memory.
///
/// Comments (`// ...` and `/* ... */`) are trivia and may appear anywhere
/// whitespace may. Keys of a dictionary keep the order they appear in.
/// Arrays and dictionaries nested deeper than the reader's maximum depth
/// are rejected rather than recursed into.
pub struct Reader<'a> {
    input: &'a str,
    cursor: usize,
    max_depth: u32,
    current_depth: u32,
}

impl<'a> Reader<'a> {
    pub fn new(input: &'a str) -> Reader<'a> {
        Reader::with_max_depth(input, MAX_DEPTH)
    }

    pub fn with_max_depth(input: &'a str, max_depth: u32) -> Reader<'a> {
        Reader {
            input,
            cursor: 0,
            max_depth,
            current_depth: 0,
        }
    }

    pub fn get_cursor(&self) -> usize {
        self.cursor
    }

    /// Reads a single top-level value and requires nothing but trivia after it.
    ///
    /// A document may also be a brace-less `key = value;` sequence, in which
    /// case the final `;` is optional.
    pub fn read_document(&mut self) -> Result<PlistValue, Error> {
        self.skip_trivia()?;
        let value = if self.starts_bare_dictionary()? {
            self.read_bare_dictionary().map(PlistValue::Dictionary)?
        } else {
            self.read_value()?
        };
        self.skip_trivia()?;
        if self.cursor < self.input.len() {
            return Err(self.error("unexpected content after document"));
        }
        Ok(value)
    }

    pub fn read_value(&mut self) -> Result<PlistValue, Error> {
        match self.peek() {
            Some(b'{') => {
                self.inc_depth()?;
                let dict = self.read_dictionary()?;
                self.dec_depth();
                Ok(PlistValue::Dictionary(dict))
            }
            Some(b'(') => {
                self.inc_depth()?;
                let values = self.read_array()?;
                self.dec_depth();
                Ok(PlistValue::Array(values))
            }
            Some(b'<') => self.read_data().map(PlistValue::Data),
            Some(b'"') | Some(b'\'') => self.read_quoted_string().map(PlistValue::String),
            Some(c) if is_unquoted_char(c) => Ok(PlistValue::String(self.read_unquoted_string())),
            Some(_) => {
                let c = self.input[self.cursor..].chars().next().unwrap_or('?');
                Err(self.error(format!("unexpected character '{c}'")))
            }
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn read_dictionary(&mut self) -> Result<Dictionary, Error> {
        self.expect(b'{')?;
        let mut dict = Dictionary::new();
        loop {
            self.skip_trivia()?;
            if self.peek() == Some(b'}') {
                self.cursor += 1;
                return Ok(dict);
            }
            let key = self.read_key()?;
            self.skip_trivia()?;
            self.expect(b'=')?;
            self.skip_trivia()?;
            let value = self.read_value()?;
            self.skip_trivia()?;
            self.expect(b';')?;
            dict.insert(key, value);
        }
    }

    fn starts_bare_dictionary(&mut self) -> Result<bool, Error> {
        if matches!(self.peek(), None | Some(b'{') | Some(b'(') | Some(b'<')) {
            return Ok(false);
        }
        let start = self.cursor;
        let is_bare = self.read_key().is_ok() && {
            self.skip_trivia()?;
            self.peek() == Some(b'=')
        };
        self.cursor = start;
        Ok(is_bare)
    }

    fn read_bare_dictionary(&mut self) -> Result<Dictionary, Error> {
        let mut dict = Dictionary::new();
        loop {
            self.skip_trivia()?;
            if self.peek().is_none() {
                return Ok(dict);
            }
            let key = self.read_key()?;
            self.skip_trivia()?;
            self.expect(b'=')?;
            self.skip_trivia()?;
            let value = self.read_value()?;
            self.skip_trivia()?;
            match self.peek() {
                Some(b';') => self.cursor += 1,
                None => {
                    dict.insert(key, value);
                    return Ok(dict);
                }
                Some(_) => return Err(self.error("expected ';'")),
            }
            dict.insert(key, value);
        }
    }

    fn read_key(&mut self) -> Result<String, Error> {
        match self.peek() {
            Some(b'"') | Some(b'\'') => self.read_quoted_string(),
            Some(c) if is_unquoted_char(c) => Ok(self.read_unquoted_string()),
            Some(_) => Err(self.error("expected dictionary key")),
            None => Err(self.error("unterminated dictionary")),
        }
    }

    fn read_array(&mut self) -> Result<Vec<PlistValue>, Error> {
        self.expect(b'(')?;
        let mut values = Vec::new();
        loop {
            self.skip_trivia()?;
            if self.peek() == Some(b')') {
                self.cursor += 1;
                return Ok(values);
            }
            values.push(self.read_value()?);
            self.skip_trivia()?;
            match self.peek() {
                Some(b',') => self.cursor += 1,
                Some(b')') => {}
                Some(_) => return Err(self.error("expected ',' or ')' in array")),
                None => return Err(self.error("unterminated array")),
            }
        }
    }

    fn read_data(&mut self) -> Result<Vec<u8>, Error> {
        self.expect(b'<')?;
        let mut digits = Vec::new();
        loop {
            match self.peek() {
                Some(b'>') => {
                    self.cursor += 1;
                    break;
                }
                Some(c) if c.is_ascii_whitespace() => self.cursor += 1,
                Some(c) if c.is_ascii_hexdigit() => {
                    digits.push(hex_value(c));
                    self.cursor += 1;
                }
                Some(_) => return Err(self.error("invalid character in data")),
                None => return Err(self.error("unterminated data")),
            }
        }
        if digits.len() % 2 != 0 {
            return Err(self.error("data must contain an even number of hex digits"));
        }
        Ok(digits
            .chunks_exact(2)
            .map(|pair| (pair[0] << 4) | pair[1])
            .collect())
    }

    fn read_unquoted_string(&mut self) -> String {
        let start = self.cursor;
        while matches!(self.peek(), Some(c) if is_unquoted_char(c)) {
            self.cursor += 1;
        }
        self.input[start..self.cursor].to_owned()
    }

    fn read_quoted_string(&mut self) -> Result<String, Error> {
        let quote = self.next_char().ok_or_else(|| self.error("expected string"))?;
        let mut result = String::new();
        loop {
            match self.next_char() {
                Some(c) if c == quote => return Ok(result),
                Some('\\') => self.read_escape(&mut result)?,
                Some(c) => result.push(c),
                None => return Err(self.error("unterminated string")),
            }
        }
    }

    fn read_escape(&mut self, out: &mut String) -> Result<(), Error> {
        let c = self
            .next_char()
            .ok_or_else(|| self.error("unterminated escape sequence"))?;
        match c {
            '\\' | '"' | '\'' => out.push(c),
            'a' => out.push('\u{7}'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{b}'),
            'U' | 'u' => {
                let unit = self.read_hex_unit()?;
                let code_point = if (0xD800..0xDC00).contains(&unit) {
                    if self.next_char() != Some('\\')
                        || !matches!(self.next_char(), Some('U') | Some('u'))
                    {
                        return Err(self.error("high surrogate without low surrogate"));
                    }
                    let low = self.read_hex_unit()?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return Err(self.error("invalid low surrogate"));
                    }
                    0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
                } else {
                    unit
                };
                out.push(
                    char::from_u32(code_point)
                        .ok_or_else(|| self.error("invalid unicode escape"))?,
                );
            }
            '0'..='7' => {
                let mut value = c as u32 - '0' as u32;
                for _ in 0..2 {
                    match self.peek() {
                        Some(d @ b'0'..=b'7') => {
                            value = value * 8 + (d - b'0') as u32;
                            self.cursor += 1;
                        }
                        _ => break,
                    }
                }
                out.push(
                    char::from_u32(value).ok_or_else(|| self.error("invalid octal escape"))?,
                );
            }
            other => return Err(self.error(format!("invalid escape sequence '\\{other}'"))),
        }
        Ok(())
    }

    fn read_hex_unit(&mut self) -> Result<u32, Error> {
        let mut unit = 0u32;
        for _ in 0..4 {
            match self.peek() {
                Some(c) if c.is_ascii_hexdigit() => {
                    unit = unit * 16 + hex_value(c) as u32;
                    self.cursor += 1;
                }
                _ => return Err(self.error("expected 4 hex digits in unicode escape")),
            }
        }
        Ok(unit)
    }

    fn skip_trivia(&mut self) -> Result<(), Error> {
        loop {
            match self.peek() {
                Some(c) if c.is_ascii_whitespace() => self.cursor += 1,
                Some(b'/') if self.peek_at(1) == Some(b'/') => {
                    while !matches!(self.peek(), None | Some(b'\n')) {
                        self.cursor += 1;
                    }
                }
                Some(b'/') if self.peek_at(1) == Some(b'*') => {
                    let start = self.cursor;
                    match self.input[self.cursor + 2..].find("*/") {
                        Some(end) => self.cursor += 2 + end + 2,
                        None => {
                            self.cursor = start;
                            return Err(self.error("unterminated comment"));
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn inc_depth(&mut self) -> Result<(), Error> {
        self.current_depth += 1;
        if self.current_depth > self.max_depth {
            return Err(self.error(format!(
                "nesting too deep (more than {} levels)",
                self.max_depth
            )));
        }
        Ok(())
    }

    fn dec_depth(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }

    fn expect(&mut self, expected: u8) -> Result<(), Error> {
        if self.peek() == Some(expected) {
            self.cursor += 1;
            Ok(())
        } else {
            Err(self.error(format!("expected '{}'", expected as char)))
        }
    }

    #[inline(always)]
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.cursor).copied()
    }

    #[inline(always)]
    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.cursor + offset).copied()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.input[self.cursor..].chars().next()?;
        self.cursor += c.len_utf8();
        Some(c)
    }

    #[cold]
    fn error<S: AsRef<str>>(&self, message: S) -> Error {
        let consumed = &self.input[..self.cursor.min(self.input.len())];
        let line = consumed.matches('\n').count() + 1;
        let column = consumed.len() - consumed.rfind('\n').map_or(0, |i| i + 1) + 1;
        Error::malformed_project(format!(
            "{} at line {line}, column {column}",
            message.as_ref()
        ))
    }
}

#[inline(always)]
fn hex_value(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    }
}
