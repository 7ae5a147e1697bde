//! Text box definitions.

use crate::plot::{line_height, Vertices};
use crate::style::TextStyle;

/// A text box: free lines of text anchored in a normalized box.
#[derive(Debug, Clone)]
pub struct TextBox {
    lines: Vec<String>,
    vertices: Vertices,
    text: TextStyle,
    border: bool,
}

impl TextBox {
    /// Create an empty, borderless text box at a position.
    #[must_use]
    pub fn new(vertices: Vertices) -> Self {
        Self {
            lines: Vec::new(),
            vertices,
            text: TextStyle::default(),
            border: false,
        }
    }

    /// Create a text box with initial lines.
    #[must_use]
    pub fn with_lines(vertices: Vertices, lines: &[&str]) -> Self {
        let mut text_box = Self::new(vertices);
        for line in lines {
            text_box.add_line(line);
        }
        text_box
    }

    /// Set the text style.
    #[must_use]
    pub fn with_text(mut self, text: TextStyle) -> Self {
        self.text = text;
        self
    }

    /// Draw a border around the box.
    #[must_use]
    pub const fn with_border(mut self) -> Self {
        self.border = true;
        self
    }

    /// Append a line of text.
    pub fn add_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    /// Replace all lines.
    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }

    /// The text lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The placement box.
    #[must_use]
    pub const fn vertices(&self) -> Vertices {
        self.vertices
    }

    /// Move the box.
    pub fn set_vertices(&mut self, vertices: Vertices) {
        self.vertices = vertices;
    }

    /// The text style.
    #[must_use]
    pub const fn text(&self) -> TextStyle {
        self.text
    }

    /// Whether a border is drawn.
    #[must_use]
    pub const fn border(&self) -> bool {
        self.border
    }

    /// Normalized height needed for the current lines.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        line_height(self.lines.len(), self.text.spacing, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner() -> Vertices {
        Vertices::new(0.1, 0.7, 0.5, 0.9).expect("valid vertices")
    }

    #[test]
    fn test_textbox_lines() {
        let mut text_box = TextBox::new(corner());
        text_box.add_line("simulation");
        text_box.add_line("10k events");
        assert_eq!(text_box.lines().len(), 2);
        assert_eq!(text_box.lines()[1], "10k events");
    }

    #[test]
    fn test_textbox_with_lines() {
        let text_box = TextBox::with_lines(corner(), &["a", "b", "c"]);
        assert_eq!(text_box.lines().len(), 3);
    }

    #[test]
    fn test_textbox_border_flag() {
        assert!(!TextBox::new(corner()).border());
        assert!(TextBox::new(corner()).with_border().border());
    }

    #[test]
    fn test_textbox_content_height() {
        let text_box = TextBox::with_lines(corner(), &["a", "b"]);
        assert!(text_box.content_height() > 0.0);
    }

    #[test]
    fn test_textbox_set_lines() {
        let mut text_box = TextBox::new(corner());
        text_box.set_lines(vec!["x".to_string()]);
        assert_eq!(text_box.lines(), &["x".to_string()]);
    }
}
