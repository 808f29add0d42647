//! XML-style tagged parameter parsing
//!
//! LLMs frequently emit tool parameters as nested tags rather than JSON:
//!
//! ```text
//! <question>
//!   <id>framework</id>
//!   <prompt>Pick one</prompt>
//!   <options>
//!     <option><id>react</id><label>React</label></option>
//!     <option><id>vue</id><label>Vue.js</label></option>
//!   </options>
//! </question>
//! ```
//!
//! [`parse_tagged`] turns such text into a JSON tree the builder understands.
//! Text-only elements become strings, elements with children become objects,
//! and repeated sibling tags become arrays. A tag seen once stays bare, which
//! is why the builder accepts both shapes.

use serde_json::{Map, Value};

use super::error::ChoiceError;

/// Deepest element nesting accepted
const MAX_DEPTH: usize = 64;

/// Parse tagged text into a JSON object keyed by top-level tag name
pub fn parse_tagged(text: &str) -> Result<Value, ChoiceError> {
    let mut parser = Parser {
        src: text,
        pos: 0,
        depth: 0,
    };
    match parser.parse_content(None)? {
        value @ Value::Object(_) => Ok(value),
        _ => Err(ChoiceError::Malformed(
            "expected at least one tagged element".to_string(),
        )),
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn malformed(&self, message: impl std::fmt::Display) -> ChoiceError {
        ChoiceError::Malformed(format!("{} at byte {}", message, self.pos))
    }

    /// Parse element content until the closing tag of `parent` (or end of input)
    fn parse_content(&mut self, parent: Option<&str>) -> Result<Value, ChoiceError> {
        let mut text = String::new();
        let mut children: Vec<(String, Value)> = Vec::new();

        loop {
            let rest = self.rest();
            let Some(offset) = rest.find('<') else {
                if let Some(name) = parent {
                    self.pos = self.src.len();
                    return Err(self.malformed(format!("unclosed <{}>", name)));
                }
                text.push_str(&unescape(rest));
                self.pos = self.src.len();
                break;
            };

            text.push_str(&unescape(&rest[..offset]));
            self.pos += offset;
            let rest = self.rest();

            if let Some(after) = rest.strip_prefix("</") {
                let end = after
                    .find('>')
                    .ok_or_else(|| self.malformed("unterminated closing tag"))?;
                let name = after[..end].trim();
                match parent {
                    Some(expected) if expected == name => {
                        self.pos += 2 + end + 1;
                        break;
                    }
                    Some(expected) => {
                        return Err(self.malformed(format!(
                            "expected </{}>, found </{}>",
                            expected, name
                        )));
                    }
                    None => return Err(self.malformed(format!("unexpected </{}>", name))),
                }
            } else if let Some(after) = rest.strip_prefix("<![CDATA[") {
                let end = after
                    .find("]]>")
                    .ok_or_else(|| self.malformed("unterminated CDATA section"))?;
                text.push_str(&after[..end]);
                self.pos += "<![CDATA[".len() + end + "]]>".len();
            } else if rest.starts_with("<!--") {
                let end = rest
                    .find("-->")
                    .ok_or_else(|| self.malformed("unterminated comment"))?;
                self.pos += end + "-->".len();
            } else if rest.starts_with("<?") || rest.starts_with("<!") {
                let end = rest
                    .find('>')
                    .ok_or_else(|| self.malformed("unterminated declaration"))?;
                self.pos += end + 1;
            } else if starts_tag(rest) {
                let (name, value) = self.parse_element()?;
                children.push((name, value));
            } else {
                // A stray '<' in text, e.g. "a < b"
                text.push('<');
                self.pos += 1;
            }
        }

        if children.is_empty() {
            Ok(Value::String(text.trim().to_string()))
        } else {
            Ok(group_children(children))
        }
    }

    /// Parse `<name attr="..">content</name>` or `<name/>` starting at `<`
    fn parse_element(&mut self) -> Result<(String, Value), ChoiceError> {
        let rest = self.rest();
        let end = rest
            .find('>')
            .ok_or_else(|| self.malformed("unterminated opening tag"))?;
        let tag = &rest[1..end];
        let self_closing = tag.ends_with('/');
        let name = tag
            .trim_end_matches('/')
            .split(|c: char| c.is_whitespace())
            .next()
            .unwrap_or_default()
            .to_string();
        self.pos += end + 1;

        if self_closing {
            return Ok((name, Value::String(String::new())));
        }
        if self.depth >= MAX_DEPTH {
            return Err(self.malformed(format!(
                "<{}> is nested deeper than {} levels",
                name, MAX_DEPTH
            )));
        }
        self.depth += 1;
        let value = self.parse_content(Some(&name))?;
        self.depth -= 1;
        Ok((name, value))
    }
}

fn starts_tag(rest: &str) -> bool {
    rest[1..]
        .chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
}

/// Collapse children into an object; repeated tags become arrays in document order
fn group_children(children: Vec<(String, Value)>) -> Value {
    let mut map = Map::new();
    for (name, value) in children {
        match map.get_mut(&name) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                map.insert(name, value);
            }
        }
    }
    Value::Object(map)
}

fn unescape(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
