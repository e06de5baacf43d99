//! Code-point alphabet and input preprocessing.
//!
//! Raw text is turned into a list of [`Code`]s before tokenizing:
//!
//! - `\r\n`, `\r` and `\n` each become one [`Code::LineEnding`]
//! - a tab becomes [`Code::HorizontalTab`] followed by 0-3
//!   [`Code::VirtualSpace`]s, so the next code starts on a tab stop
//! - everything else is a [`Code::Char`]
//!
//! End of input is the [`Code::Eof`] sentinel, returned for any index at or
//! past the end.

/// Width of a tab stop in columns.
pub const TAB_SIZE: usize = 4;

/// A single unit of the tokenizer's alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Code {
    /// End of input.
    Eof,
    /// A concrete character.
    Char(char),
    /// A normalized line ending (`\r\n`, `\r` or `\n`).
    LineEnding,
    /// The first column of an expanded tab.
    HorizontalTab,
    /// Padding column of an expanded tab.
    VirtualSpace,
}

impl Code {
    /// Whether this is the concrete character `ch`.
    #[must_use]
    pub fn is(self, ch: char) -> bool {
        self == Self::Char(ch)
    }
}

/// A place in the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// 1-indexed line.
    pub line: usize,
    /// 1-indexed column, with tabs expanded.
    pub column: usize,
    /// Byte offset into the source.
    pub offset: usize,
    /// Index into the preprocessed codes.
    pub index: usize,
}

/// Preprocessed source: its codes plus the point of each code.
#[derive(Debug)]
pub struct Input<'a> {
    source: &'a str,
    codes: Vec<Code>,
    /// One more entry than `codes`: the last is the end point.
    points: Vec<Point>,
}

impl<'a> Input<'a> {
    /// Preprocess `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let mut codes = Vec::with_capacity(source.len());
        let mut points = Vec::with_capacity(source.len() + 1);
        let mut line = 1;
        let mut column = 1;
        let mut chars = source.char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            points.push(Point {
                line,
                column,
                offset,
                index: codes.len(),
            });

            match ch {
                '\r' | '\n' => {
                    if ch == '\r' {
                        chars.next_if(|&(_, next)| next == '\n');
                    }
                    codes.push(Code::LineEnding);
                    line += 1;
                    column = 1;
                }
                '\t' => {
                    let width = TAB_SIZE - (column - 1) % TAB_SIZE;
                    codes.push(Code::HorizontalTab);
                    column += 1;

                    for _ in 1..width {
                        // Virtual spaces take no bytes.
                        points.push(Point {
                            line,
                            column,
                            offset: offset + 1,
                            index: codes.len(),
                        });
                        codes.push(Code::VirtualSpace);
                        column += 1;
                    }
                }
                _ => {
                    codes.push(Code::Char(ch));
                    column += 1;
                }
            }
        }

        points.push(Point {
            line,
            column,
            offset: source.len(),
            index: codes.len(),
        });

        Self {
            source,
            codes,
            points,
        }
    }

    /// The original text.
    #[must_use]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// All codes, without the trailing EOF.
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// Number of codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether there are no codes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Code at `index`, or [`Code::Eof`] past the end.
    #[must_use]
    pub fn code(&self, index: usize) -> Code {
        self.codes.get(index).copied().unwrap_or(Code::Eof)
    }

    /// Point of the code at `index`; the end point past the end.
    #[must_use]
    pub fn point(&self, index: usize) -> Point {
        self.points[index.min(self.codes.len())]
    }

    /// Source text between two points.
    #[must_use]
    pub fn slice(&self, start: &Point, end: &Point) -> &'a str {
        &self.source[start.offset..end.offset]
    }
}
