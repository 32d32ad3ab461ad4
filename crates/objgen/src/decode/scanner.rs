/// One content line of model text, trimmed, with its nesting depth.
///
/// Depth starts at 1 for root-level lines and grows by one per leading tab
/// or per full group of `spaces_per_level` spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedLine<'a> {
    pub text: &'a str,
    pub depth: usize,
}

/// Array notation found on a line: `[]` or `[n]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArrayMarker {
    Implicit,
    Explicit(usize),
}

pub fn scan(input: &str, spaces_per_level: usize) -> Vec<ScannedLine<'_>> {
    iter(input, spaces_per_level).collect()
}

pub struct LineIter<'a> {
    rest: &'a str,
    spaces_per_level: usize,
    first: bool,
}

pub fn iter(input: &str, spaces_per_level: usize) -> LineIter<'_> {
    LineIter {
        rest: input,
        spaces_per_level,
        first: true,
    }
}

impl<'a> Iterator for LineIter<'a> {
    type Item = ScannedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.rest.is_empty() {
            let raw = match self.rest.find('\n') {
                Some(pos) => {
                    let (line, remaining) = self.rest.split_at(pos + 1);
                    self.rest = remaining;
                    line.trim_end_matches('\n')
                }
                None => {
                    let line = self.rest;
                    self.rest = "";
                    line
                }
            };
            let raw = raw.strip_suffix('\r').unwrap_or(raw);
            let first = self.first;
            self.first = false;
            if !is_content(raw) {
                continue;
            }
            // The very first line of a model sits at depth 1 no matter how
            // it is indented.
            let depth = if first {
                1
            } else {
                indent_depth(raw, self.spaces_per_level)
            };
            return Some(ScannedLine {
                text: raw.trim(),
                depth,
            });
        }
        None
    }
}

#[inline]
fn indent_depth(line: &str, spaces_per_level: usize) -> usize {
    let mut depth = 1usize;
    let mut run = 0usize;
    for &b in line.as_bytes() {
        match b {
            b'\t' => {
                depth += 1;
                run = 0;
            }
            b' ' => {
                run += 1;
                if run == spaces_per_level {
                    depth += 1;
                    run = 0;
                }
            }
            _ => break,
        }
    }
    depth
}

/// Whether the line survives the blank filter. Lines reduced to nothing by
/// removing whitespace and bracket characters are dropped, unless they carry
/// a well-formed array marker (anonymous array element lines are exactly
/// `[]` or `[n]` and must reach the builder).
fn is_content(line: &str) -> bool {
    if find_array_marker(line).is_some() {
        return true;
    }
    line.chars()
        .any(|c| !c.is_whitespace() && c != '[' && c != ']')
}

/// First well-formed marker group on the line, scanning left to right.
/// Inner whitespace is tolerated; the index is limited to 100 digits.
pub(crate) fn find_array_marker(s: &str) -> Option<ArrayMarker> {
    let b = s.as_bytes();
    for i in 0..b.len() {
        if b[i] == b'[' {
            if let Some((marker, _)) = parse_marker_at(b, i) {
                return Some(marker);
            }
        }
    }
    None
}

/// Copy of `s` with every well-formed marker group removed.
pub(crate) fn strip_array_markers(s: &str) -> String {
    let b = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut seg_start = 0usize;
    let mut i = 0usize;
    while i < b.len() {
        if b[i] == b'[' {
            if let Some((_, end)) = parse_marker_at(b, i) {
                out.push_str(&s[seg_start..i]);
                i = end;
                seg_start = i;
                continue;
            }
        }
        i += 1;
    }
    out.push_str(&s[seg_start..]);
    out
}

fn parse_marker_at(b: &[u8], start: usize) -> Option<(ArrayMarker, usize)> {
    let mut i = start + 1;
    while i < b.len() && (b[i] == b' ' || b[i] == b'\t') {
        i += 1;
    }
    let digit_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let ndigits = i - digit_start;
    if ndigits > 100 {
        return None;
    }
    while i < b.len() && (b[i] == b' ' || b[i] == b'\t') {
        i += 1;
    }
    if i >= b.len() || b[i] != b']' {
        return None;
    }
    if ndigits == 0 {
        return Some((ArrayMarker::Implicit, i + 1));
    }
    let digits = core::str::from_utf8(&b[digit_start..digit_start + ndigits]).ok()?;
    // An index too large for usize degrades to 0 rather than failing the line.
    let n = digits.parse::<usize>().unwrap_or(0);
    Some((ArrayMarker::Explicit(n), i + 1))
}
