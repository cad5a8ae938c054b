//! Source code span and position tracking.
//! 源码范围和位置跟踪。

use std::fmt;

/// A position in source code: 1-based line/column plus a byte offset.
/// The byte offset is the source of truth; line and column are carried
/// alongside for display and for the wire protocol.
/// 源码中的位置：从 1 开始的行/列，外加字节偏移。
/// 字节偏移是权威数据，行和列用于显示和线上协议。
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// 1-based line number. / 从 1 开始的行号。
    pub line: u32,
    /// 1-based column number. / 从 1 开始的列号。
    pub col: u32,
    /// 0-based byte offset into the source. / 源码中从 0 开始的字节偏移。
    pub offset: u32,
}

impl Position {
    pub const START: Position = Position {
        line: 1,
        col: 1,
        offset: 0,
    };

    pub fn new(line: u32, col: u32, offset: u32) -> Self {
        Position { line, col, offset }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}@{}", self.line, self.col, self.offset)
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.offset.cmp(&other.offset)
    }
}

/// A span representing a range in source code.
/// 表示源码中一个范围的 Span。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start position. / 起始位置。
    pub start: Position,
    /// End position (exclusive). / 结束位置（不包含）。
    pub end: Position,
}

impl Span {
    pub const DUMMY: Span = Span {
        start: Position::START,
        end: Position::START,
    };

    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// Create a span that covers both `self` and `other`.
    /// 创建一个覆盖 `self` 和 `other` 的范围。
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: std::cmp::min(self.start, other.start),
            end: std::cmp::max(self.end, other.end),
        }
    }

    /// Returns the length of this span in bytes.
    /// 返回此范围的字节长度。
    pub fn len(&self) -> usize {
        (self.end.offset - self.start.offset) as usize
    }

    /// Returns true if this span has zero length.
    /// 如果此范围长度为零则返回 true。
    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Returns the byte range for this span.
    /// 返回此范围对应的字节区间。
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start.offset as usize..self.end.offset as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.offset, self.end.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_covers_both() {
        let a = Span::new(Position::new(1, 1, 0), Position::new(1, 4, 3));
        let b = Span::new(Position::new(1, 6, 5), Position::new(1, 9, 8));
        let merged = a.merge(b);
        assert_eq!(merged.start.offset, 0);
        assert_eq!(merged.end.offset, 8);
    }

    #[test]
    fn range_and_len() {
        let s = Span::new(Position::new(2, 1, 10), Position::new(2, 5, 14));
        assert_eq!(s.range(), 10..14);
        assert_eq!(s.len(), 4);
        assert!(!s.is_empty());
        assert!(Span::DUMMY.is_empty());
    }

    #[test]
    fn positions_order_by_offset() {
        let early = Position::new(3, 1, 20);
        let late = Position::new(1, 99, 30);
        assert!(early < late);
    }
}
