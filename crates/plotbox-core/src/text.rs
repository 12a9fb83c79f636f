//! Fixed-capacity text used to build on-screen labels without allocation.

use core::fmt::{self, Write};

use heapless::String;

/// Label capacity that fits any line drawn on the panel.
pub const LINE_CAPACITY: usize = 24;

pub type Line = TextBuffer<LINE_CAPACITY>;

/// Stack string that silently drops whatever does not fit.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TextBuffer<const N: usize> {
    inner: String<N>,
}

impl<const N: usize> TextBuffer<N> {
    pub const fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    pub fn from_fmt(args: fmt::Arguments<'_>) -> Self {
        let mut buffer = Self::new();
        let _ = buffer.write_fmt(args);
        buffer
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }
}

impl<const N: usize> fmt::Write for TextBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.inner.push(ch).is_err() {
                break;
            }
        }
        Ok(())
    }
}

impl<const N: usize> AsRef<str> for TextBuffer<N> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_decimals() {
        let line = Line::from_fmt(format_args!("Value: {:.2}", 1.5f32));
        assert_eq!(line.as_str(), "Value: 1.50");
    }

    #[test]
    fn truncates_instead_of_failing() {
        let mut short = TextBuffer::<4>::new();
        assert!(write!(short, "ABCDEFG").is_ok());
        assert_eq!(short.as_str(), "ABCD");

        short.clear();
        assert!(short.is_empty());
    }
}
