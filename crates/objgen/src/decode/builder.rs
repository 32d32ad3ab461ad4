//! Model builder: grows the JSON tree one scanned line at a time

use std::collections::HashMap;

use crate::decode::coerce::{self, TypeCode};
use crate::decode::scanner::{self, ArrayMarker};
use crate::options::Options;
use crate::value::Value;

/// Explicit indices above this bound degrade to 0 instead of forcing the
/// array to pad out that far.
const MAX_ARRAY_INDEX: usize = 1 << 20;

/// One step from the root value toward a node's container.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Key(String),
    Index(usize),
}

/// Placement metadata recorded once per unique path key.
#[derive(Debug)]
struct Node {
    name: String,
    type_code: Option<TypeCode>,
    is_array: bool,
    index: Option<usize>,
    /// Arena id of the node one path segment up, when that key exists.
    parent: Option<usize>,
    /// Steps from the root to the container that holds this node's value.
    container: Vec<Step>,
}

/// Builds one JSON value from a stream of `(text, depth)` lines.
///
/// All state lives on the builder: the path stack (one segment per depth
/// level), the node arena with its path-key index, and the root value under
/// construction. Every conversion gets a fresh builder.
pub struct Builder {
    stack: Vec<String>,
    nodes: Vec<Node>,
    by_key: HashMap<String, usize>,
    next_index: HashMap<String, usize>,
    root: Value,
    root_set: bool,
}

/// Convert model text into a JSON value tree.
pub fn build(input: &str, options: &Options) -> Value {
    let mut builder = Builder::new();
    for line in scanner::iter(input, options.spaces_per_level) {
        builder.push_line(line.text, line.depth);
    }
    builder.finish()
}

impl Builder {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            nodes: Vec::new(),
            by_key: HashMap::new(),
            next_index: HashMap::new(),
            root: Value::Object(Vec::new()),
            root_set: false,
        }
    }

    /// Process one content line. `depth` is 1-based; the scanner guarantees
    /// that, but a direct caller passing 0 is treated as 1.
    pub fn push_line(&mut self, text: &str, depth: usize) {
        let text = text.trim();
        if is_comment(text) {
            return;
        }
        let depth = depth.max(1);
        self.stack.resize(depth, String::new());

        let stripped = scanner::strip_array_markers(text);
        let mut type_code = coerce::detect_type(&stripped);
        let marker = scanner::find_array_marker(text);

        let (name_part, raw_value) = match text.find('=') {
            Some(pos) => (&text[..pos], Some(text[pos + 1..].trim())),
            None => (text, None),
        };
        // A value with no declared type makes the line a string line.
        if type_code.is_none() && raw_value.is_some_and(|v| !v.is_empty()) {
            type_code = Some(TypeCode::Str);
        }

        let name = clean_name(name_part, type_code.is_some());

        let parent_key = self.stack[..depth - 1].join(".");
        let index = self.resolve_index(&parent_key, &name, marker);

        let mut segment = name.clone();
        if let Some(i) = index {
            segment.push(':');
            segment.push_str(&i.to_string());
        }
        self.stack[depth - 1] = segment;
        let path_key = self.stack[..depth].join(".");

        if !self.root_set {
            self.root = if depth == 1 && marker.is_some() && name.is_empty() {
                Value::Array(Vec::new())
            } else {
                Value::Object(Vec::new())
            };
            self.root_set = true;
        }

        // Same path key again: the node and its first value stay in place,
        // and children keep merging into the same container.
        if self.by_key.contains_key(&path_key) {
            return;
        }

        let parent = if depth > 1 {
            self.by_key.get(&parent_key).copied()
        } else {
            None
        };
        let container = self.container_steps(parent);
        self.nodes.push(Node {
            name,
            type_code,
            is_array: marker.is_some(),
            index,
            parent,
            container,
        });
        let id = self.nodes.len() - 1;
        self.by_key.insert(path_key, id);

        let value = self.initial_value(id, raw_value);
        self.write_value(id, value);
    }

    /// Hand back the generated tree. An input with no content lines yields
    /// an empty object.
    pub fn finish(self) -> Value {
        self.root
    }

    /// Array index for this line, if it is an array line. Implicit markers
    /// take the next free index of the array identity (parent path + name);
    /// explicit markers advance that identity's counter past themselves so
    /// the two forms compose.
    fn resolve_index(
        &mut self,
        parent_key: &str,
        name: &str,
        marker: Option<ArrayMarker>,
    ) -> Option<usize> {
        let marker = marker?;
        let ident = if parent_key.is_empty() {
            name.to_string()
        } else {
            format!("{parent_key}.{name}")
        };
        let next = self.next_index.entry(ident).or_insert(0);
        let index = match marker {
            ArrayMarker::Implicit => *next,
            ArrayMarker::Explicit(n) if n > MAX_ARRAY_INDEX => 0,
            ArrayMarker::Explicit(n) => n,
        };
        *next = (*next).max(index.saturating_add(1));
        Some(index)
    }

    /// Access path of the container a new node writes into, derived from
    /// its parent node. A missing parent attaches the node at the root.
    fn container_steps(&self, parent: Option<usize>) -> Vec<Step> {
        let Some(pid) = parent else {
            return Vec::new();
        };
        let p = &self.nodes[pid];
        let mut steps = p.container.clone();
        if p.is_array {
            if !self.is_anonymous_element(pid) {
                steps.push(Step::Key(p.name.clone()));
            }
            steps.push(Step::Index(p.index.unwrap_or(0)));
        } else {
            steps.push(Step::Key(p.name.clone()));
        }
        steps
    }

    /// A nameless array line at the root of an array-rooted model is an
    /// element of the root array itself.
    fn is_anonymous_element(&self, id: usize) -> bool {
        let n = &self.nodes[id];
        n.parent.is_none()
            && n.is_array
            && n.name.is_empty()
            && matches!(self.root, Value::Array(_))
    }

    /// The value a newly created node contributes to the tree.
    fn initial_value(&self, id: usize, raw: Option<&str>) -> Value {
        let node = &self.nodes[id];
        match node.type_code {
            Some(code) if node.is_array => coerce::list_value(code, raw),
            Some(code) => coerce::scalar_value(code, raw),
            // No type at all: either a bare '=' with nothing after it, or a
            // structural line that defaults by shape.
            None => match raw {
                Some(raw) => Value::String(raw.to_string()),
                None if self.is_anonymous_element(id) => Value::Object(Vec::new()),
                None if node.index.unwrap_or(0) > 0 => Value::Object(Vec::new()),
                None if node.is_array => Value::Array(Vec::new()),
                None => Value::Object(Vec::new()),
            },
        }
    }

    fn write_value(&mut self, id: usize, value: Value) {
        if self.is_anonymous_element(id) {
            let index = self.nodes[id].index.unwrap_or(0);
            self.root.set_index(index, value);
            return;
        }
        let node = &self.nodes[id];
        let name = node.name.clone();
        let is_array = node.is_array;
        let index = node.index.unwrap_or(0);
        let steps = node.container.clone();
        let Some(container) = walk_ensure(&mut self.root, &steps) else {
            return;
        };
        if is_array && index > 0 {
            match container.get_key_mut(&name) {
                Some(slot) if matches!(slot, Value::Array(_)) => slot.set_index(index, value),
                // First sight of this array at a nonzero index: the value
                // still lands at slot 0.
                _ => {
                    let mut arr = Value::Array(Vec::new());
                    arr.set_index(0, value);
                    container.set_key(&name, arr);
                }
            }
        } else {
            container.set_key(&name, value);
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn is_comment(text: &str) -> bool {
    text == "/" || text.starts_with("//")
}

/// Leaf property name of a line. Typed lines keep only their first
/// whitespace-delimited token; marker groups are stripped, the name is cut
/// at any remaining `[`, and whitespace and `]` are dropped. Dots survive
/// untouched.
fn clean_name(name_part: &str, typed: bool) -> String {
    let base = if typed {
        name_part.split_whitespace().next().unwrap_or("")
    } else {
        name_part
    };
    let stripped = scanner::strip_array_markers(base);
    let cut = match stripped.find('[') {
        Some(pos) => &stripped[..pos],
        None => stripped.as_str(),
    };
    cut.chars()
        .filter(|c| !c.is_whitespace() && *c != ']')
        .collect()
}

/// Walk `steps` from the root, creating containers as needed. Key steps
/// ensure an object or array slot depending on whether an index step
/// follows; index steps ensure an object element, padding holes with null.
/// Returns `None` when the root's own shape contradicts the first step
/// (a named top-level line in an array-rooted model).
fn walk_ensure<'a>(root: &'a mut Value, steps: &[Step]) -> Option<&'a mut Value> {
    steps.iter().enumerate().try_fold(root, |cur, (i, step)| {
        match step {
            Step::Key(key) => {
                let want_array = matches!(steps.get(i + 1), Some(Step::Index(_)));
                let Value::Object(pairs) = cur else {
                    return None;
                };
                let pos = match pairs.iter().position(|(k, _)| k == key) {
                    Some(pos) => pos,
                    None => {
                        pairs.push((key.clone(), empty_container(want_array)));
                        pairs.len() - 1
                    }
                };
                let slot = &mut pairs[pos].1;
                let kind_ok = if want_array {
                    matches!(slot, Value::Array(_))
                } else {
                    matches!(slot, Value::Object(_))
                };
                if !kind_ok {
                    *slot = empty_container(want_array);
                }
                Some(slot)
            }
            Step::Index(index) => {
                let Value::Array(items) = cur else {
                    return None;
                };
                while items.len() <= *index {
                    items.push(Value::Null);
                }
                let slot = &mut items[*index];
                if !matches!(slot, Value::Object(_)) {
                    *slot = Value::Object(Vec::new());
                }
                Some(slot)
            }
        }
    })
}

#[inline]
fn empty_container(array: bool) -> Value {
    if array {
        Value::Array(Vec::new())
    } else {
        Value::Object(Vec::new())
    }
}
