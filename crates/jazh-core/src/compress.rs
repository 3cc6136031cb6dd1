//! Range compression of sorted code-point sets into character-class source.
//!
//! A set such as `{0x3041, 0x3042, 0x3043, 0x4E00, 0x4E01, 0x20000}` becomes
//! `\u3041-\u3043\u4e00\u4e01\u{20000}`: runs of three or more collapse to a
//! dashed range, runs of two stay as adjacent literals.

use std::fmt::Write;

/// A maximal run of consecutive code points `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: u32,
    pub end: u32,
}

impl Run {
    /// Number of code points covered by the run.
    pub fn count(&self) -> u32 {
        self.end - self.start + 1
    }

    fn write_to(&self, out: &mut String) {
        push_escaped(out, self.start);
        if self.start == self.end {
            return;
        }
        if self.end - self.start != 1 {
            out.push('-');
        }
        push_escaped(out, self.end);
    }
}

/// Iterator over the maximal runs of a strictly ascending slice.
pub struct Runs<'a> {
    rest: &'a [u32],
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let (&start, tail) = self.rest.split_first()?;
        let mut end = start;
        let mut taken = 0;
        for &cp in tail {
            if end.checked_add(1) != Some(cp) {
                break;
            }
            end = cp;
            taken += 1;
        }
        self.rest = &tail[taken..];
        Some(Run { start, end })
    }
}

/// Split a strictly ascending slice into maximal runs.
pub fn runs(sorted: &[u32]) -> Runs<'_> {
    Runs { rest: sorted }
}

/// Compress a strictly ascending, duplicate-free code-point list into
/// character-class source (without the enclosing brackets).
///
/// Unsorted input is not rejected; it simply yields more, shorter runs.
pub fn compress(sorted: &[u32]) -> String {
    let mut out = String::with_capacity(sorted.len() * 4);
    for run in runs(sorted) {
        run.write_to(&mut out);
    }
    out
}

/// Escape one code point: `\uXXXX` (zero-padded) inside the BMP,
/// `\u{XXXXX}` above it.
fn push_escaped(out: &mut String, cp: u32) {
    // Writing into a String cannot fail.
    let _ = if cp > 0xFFFF {
        write!(out, "\\u{{{cp:x}}}")
    } else {
        write!(out, "\\u{cp:04x}")
    };
}
