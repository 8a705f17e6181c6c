/// Mutually exclusive classification of a parsed narrative unit.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Word,
    Bold,
    Highlight,
    Image,
    Icon,
}

/// One unit of the flattened narrative sequence.
///
/// `global_index` values over a tokenize result form the contiguous range
/// `[0, N)` and define reveal order.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    /// Original substring, annotation markers included.
    pub raw: String,
    pub kind: TokenKind,
    /// Index of the source line (blank lines dropped).
    pub line_index: usize,
    /// Position within its line.
    pub ordinal_in_line: usize,
    /// Position within the full flattened sequence.
    pub global_index: usize,
}

impl Token {
    /// The string a renderer should show for this token, markers stripped.
    ///
    /// Highlights resolve through their parsed spec; bold spans drop the
    /// `**` pair; everything else displays raw.
    pub fn display_text(&self) -> String {
        match self.kind {
            TokenKind::Highlight => super::highlight::parse_highlight(&self.raw).text,
            TokenKind::Bold => self.raw[2..self.raw.len() - 2].to_string(),
            _ => self.raw.clone(),
        }
    }
}
