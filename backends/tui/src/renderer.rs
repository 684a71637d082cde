use catsearch::{MemoryInput, MemoryResults};
use crossterm::style::{Attribute, Color, ContentStyle, StyledContent, Stylize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Text shown before the query on the first line.
pub const PROMPT: &str = "Search: ";

/// Represents a fully resolved frame ready to be drawn to the terminal.
#[derive(Debug, Default, Clone)]
pub struct RenderFrame {
    lines: Vec<RenderLine>,
    cursor: (u16, u16),
}

impl RenderFrame {
    /// Pushes a new line with the provided indentation level and returns it.
    pub fn push_line(&mut self, indent: usize) -> &mut RenderLine {
        self.lines.push(RenderLine::new(indent));
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }

    /// Returns the set of lines recorded in this frame.
    #[must_use]
    pub fn lines(&self) -> &[RenderLine] {
        &self.lines
    }

    /// Appends a blank line.
    pub fn push_blank(&mut self) {
        self.lines.push(RenderLine::default());
    }

    /// Where the cursor should rest after drawing, as `(column, row)`.
    #[must_use]
    pub const fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    /// The frame as plain text, one line per row.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        self.lines
            .iter()
            .map(RenderLine::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Representation of a single line in the terminal output.
#[derive(Debug, Default, Clone)]
pub struct RenderLine {
    segments: Vec<RenderSegment>,
}

impl RenderLine {
    fn new(indent: usize) -> Self {
        let mut segments = Vec::new();
        if indent > 0 {
            segments.push(RenderSegment::plain(" ".repeat(indent * 2)));
        }
        Self { segments }
    }

    /// Pushes a new segment onto the line.
    pub fn push(&mut self, segment: RenderSegment) {
        self.segments.push(segment);
    }

    /// Returns the list of segments contained in this line.
    #[must_use]
    pub fn segments(&self) -> &[RenderSegment] {
        &self.segments
    }

    /// Concatenated segment text without styling.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(RenderSegment::content).collect()
    }

    /// Display width of the line in terminal columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.segments
            .iter()
            .map(|segment| segment.content().width())
            .sum()
    }
}

/// Atomic piece of content rendered on a line.
#[derive(Debug, Clone)]
pub struct RenderSegment {
    content: String,
    style: ContentStyle,
}

impl RenderSegment {
    /// Creates a plain (unstyled) segment.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: ContentStyle::new(),
        }
    }

    /// Creates a segment with custom styling.
    pub fn styled(content: impl Into<String>, style: ContentStyle) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    /// Borrows the raw text stored in this segment.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Converts this segment into a [`StyledContent`] for printing through crossterm.
    #[must_use]
    pub fn as_styled_content(&self) -> StyledContent<String> {
        self.style.apply(self.content.clone())
    }
}

/// Draws the prompt and the visible categories into frames.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    width: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(80)
    }
}

impl Renderer {
    /// Creates a renderer that clips lines to `width` columns.
    #[must_use]
    pub const fn new(width: usize) -> Self {
        Self { width }
    }

    /// Changes the clipping width, e.g. after a terminal resize.
    pub const fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Renders the prompt line, the visible list items and a status line.
    #[must_use]
    pub fn render(&self, input: &MemoryInput, results: &MemoryResults) -> RenderFrame {
        let mut frame = RenderFrame::default();

        let prompt = frame.push_line(0);
        prompt.push(RenderSegment::styled(PROMPT, ContentStyle::new().bold()));
        prompt.push(RenderSegment::plain(clip(
            input.value(),
            self.width.saturating_sub(PROMPT.width()),
        )));
        let cursor_column = prompt.width().min(self.width);
        frame.cursor = (u16::try_from(cursor_column).unwrap_or(u16::MAX), 0);

        frame.push_blank();

        let key_style = ContentStyle::new().with(Color::DarkGrey);
        let label_width = self.width.saturating_sub(2);
        for item in results.visible_items() {
            let line = frame.push_line(1);
            let text = clip(&item.fragment.text, label_width);
            match text.split_once(' ') {
                Some((key, rest)) => {
                    line.push(RenderSegment::styled(key.to_owned(), key_style));
                    line.push(RenderSegment::plain(format!(" {rest}")));
                }
                None => line.push(RenderSegment::styled(text, key_style)),
            }
        }

        let shown = results.visible_items().count();
        let total = results.items().len();
        frame.push_blank();
        let status = frame.push_line(0);
        let mut status_style = ContentStyle::new();
        status_style.attributes.set(Attribute::Dim);
        status.push(RenderSegment::styled(
            clip(&format!("{shown} of {total} categories"), self.width),
            status_style,
        ));

        frame
    }
}

/// Truncates `text` to at most `max` terminal columns.
fn clip(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_owned();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width > max {
            break;
        }
        used += width;
        out.push(ch);
    }
    out
}
