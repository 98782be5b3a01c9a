//! HTML fragment to terminal text conversion.
//!
//! Slide bodies are stored as small HTML fragments (`<p>`, `<strong>`,
//! `<br>`, `<em>`). This converts them into styled ratatui lines: paragraphs
//! become blank-line-separated blocks, `<strong>` becomes bold, `<em>`
//! becomes italic, and anything else is stripped. Wrapping is left to the
//! rendering `Paragraph`.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Convert an HTML fragment into styled lines.
pub fn fragment_to_lines(html: &str, base: Style) -> Vec<Line<'static>> {
    let mut builder = LineBuilder::new(base);
    let mut chars = html.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '<' => {
                let mut tag = String::new();
                for t in chars.by_ref() {
                    if t == '>' {
                        break;
                    }
                    tag.push(t);
                }
                builder.apply_tag(&tag);
            }
            '&' => {
                let entity = read_entity(&mut chars);
                builder.push_str(&entity);
            }
            c if c.is_whitespace() => builder.push_space(),
            c => builder.push_char(c),
        }
    }

    builder.finish()
}

/// Read the remainder of an `&entity;`, returning its decoded text. Leaves
/// unknown or unterminated entities as-is.
fn read_entity(chars: &mut std::iter::Peekable<std::str::Chars>) -> String {
    let mut name = String::new();
    loop {
        match chars.peek() {
            Some(&c) if c == ';' => {
                chars.next();
                break;
            }
            Some(&c) if c.is_ascii_alphanumeric() || c == '#' => {
                name.push(c);
                chars.next();
            }
            _ => return format!("&{name}"),
        }
        if name.len() > 8 {
            return format!("&{name}");
        }
    }

    match name.as_str() {
        "amp" => "&".to_string(),
        "lt" => "<".to_string(),
        "gt" => ">".to_string(),
        "quot" => "\"".to_string(),
        "#39" | "apos" => "'".to_string(),
        "nbsp" => " ".to_string(),
        _ => format!("&{name};"),
    }
}

struct LineBuilder {
    base: Style,
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    text: String,
    bold: usize,
    italic: usize,
}

impl LineBuilder {
    fn new(base: Style) -> Self {
        Self {
            base,
            lines: Vec::new(),
            spans: Vec::new(),
            text: String::new(),
            bold: 0,
            italic: 0,
        }
    }

    fn current_style(&self) -> Style {
        let mut style = self.base;
        if self.bold > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }

    fn push_char(&mut self, c: char) {
        self.text.push(c);
    }

    fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Collapse whitespace runs, dropping leading whitespace on a line.
    fn push_space(&mut self) {
        let at_line_start = self.spans.is_empty() && self.text.is_empty();
        if !at_line_start && !self.text.ends_with(' ') {
            self.text.push(' ');
        }
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            let style = self.current_style();
            self.spans.push(Span::styled(std::mem::take(&mut self.text), style));
        }
    }

    fn end_line(&mut self) {
        self.flush_text();
        // Trailing space at a line break is collapse residue
        if let Some(last) = self.spans.last_mut() {
            if last.content.ends_with(' ') {
                let trimmed = last.content.trim_end().to_string();
                last.content = trimmed.into();
            }
        }
        if !self.spans.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.spans)));
        }
    }

    fn paragraph_break(&mut self) {
        self.end_line();
        if !self.lines.is_empty() {
            self.lines.push(Line::from(""));
        }
    }

    fn apply_tag(&mut self, tag: &str) {
        // First token only: attributes are presentation and get dropped
        let name = tag
            .trim_end_matches('/')
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();

        match name.as_str() {
            "p" => {
                // An unclosed previous paragraph still breaks here
                if !self.spans.is_empty() || !self.text.is_empty() {
                    self.paragraph_break();
                }
            }
            "/p" => self.paragraph_break(),
            "br" => self.end_line(),
            "strong" | "b" => {
                self.flush_text();
                self.bold += 1;
            }
            "/strong" | "/b" => {
                self.flush_text();
                self.bold = self.bold.saturating_sub(1);
            }
            "em" | "i" => {
                self.flush_text();
                self.italic += 1;
            }
            "/em" | "/i" => {
                self.flush_text();
                self.italic = self.italic.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.end_line();
        // Drop a trailing paragraph separator
        while matches!(self.lines.last(), Some(line) if line.width() == 0) {
            self.lines.pop();
        }
        self.lines
    }
}
