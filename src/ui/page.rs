//! Line-oriented page model rendered with crossterm colours.

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use std::io::Write;

use super::colors::{header_bg, subheader_fg, text_fg};

const PAGE_WIDTH: usize = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct PageLine {
    pub text: String,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    title: String,
    lines: Vec<PageLine>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[PageLine] {
        &self.lines
    }

    pub fn push(&mut self, text: impl Into<String>, color: Color) {
        self.lines.push(PageLine {
            text: text.into(),
            color,
        });
    }

    pub fn text(&mut self, text: impl Into<String>) {
        self.push(text, text_fg());
    }

    pub fn section(&mut self, heading: &str) {
        if !self.lines.is_empty() {
            self.blank();
        }
        self.push(heading.to_uppercase(), subheader_fg());
    }

    pub fn blank(&mut self) {
        self.push(String::new(), text_fg());
    }

    /// Page content without colour codes, one line per row.
    pub fn plain_text(&self) -> String {
        std::iter::once(self.title.as_str())
            .chain(self.lines.iter().map(|l| l.text.as_str()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        queue!(
            out,
            SetBackgroundColor(header_bg()),
            SetForegroundColor(text_fg()),
            Print(format!(" {:<width$}", self.title, width = PAGE_WIDTH - 1)),
            ResetColor,
            Print("\n"),
        )?;

        for line in &self.lines {
            queue!(
                out,
                SetForegroundColor(line.color),
                Print(&line.text),
                ResetColor,
                Print("\n"),
            )?;
        }
        out.flush()
    }
}
