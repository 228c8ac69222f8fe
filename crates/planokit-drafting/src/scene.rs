//! Framework-free scene graph.
//!
//! Sheet composers emit a flat list of drawing primitives with absolute
//! coordinates in sheet pixels. The scene carries no styling beyond semantic
//! palette colors; the SVG serializer (or an on-screen canvas adapter) maps
//! those to concrete presentation.
//!
//! Scenes are plain data: cloneable, comparable, and cheap to translate when
//! sheets are stacked into one export document.

use planokit_core::model::ElementKind;

/// Semantic palette entry. Serializers resolve these to concrete colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Sheet background.
    Bg,
    /// Raised band background (section headers).
    Surface,
    /// Background grid / watermark tone.
    Grid,
    /// Neutral frame stroke around view cells.
    Frame,
    /// Primary object line work.
    Line,
    /// Dimension line work and labels.
    Dim,
    /// Accent (view captions, title block border, step arrows).
    Gold,
    /// Secondary text.
    Muted,
    /// Primary text.
    Label,
    /// Section cut-line markers.
    Cut,
    /// Hole centerlines.
    Center,
    /// Groove notch fill.
    GrooveFill,
    /// Element fill by cosmetic kind.
    ElementFill(ElementKind),
    /// Rotating fills for step-diagram pieces (0..=2).
    StepFill(u8),
}

/// Stroke description for outlined primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    /// SVG-style dash pattern, e.g. `"3,2"`.
    pub dash: Option<&'static str>,
}

impl Stroke {
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub fn dashed(color: Color, width: f64, dash: &'static str) -> Self {
        Self {
            color,
            width,
            dash: Some(dash),
        }
    }
}

/// Horizontal anchoring of a text run relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Rotation of a text run about a fixed point, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRotation {
    pub degrees: f64,
    pub cx: f64,
    pub cy: f64,
}

/// One positioned monospace text run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub size: f64,
    pub color: Color,
    pub anchor: TextAnchor,
    pub bold: bool,
    pub rotation: Option<TextRotation>,
}

impl TextItem {
    pub fn new(x: f64, y: f64, content: impl Into<String>, size: f64, color: Color) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            size,
            color,
            anchor: TextAnchor::Start,
            bold: false,
            rotation: None,
        }
    }

    pub fn anchored(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn rotated(mut self, degrees: f64, cx: f64, cy: f64) -> Self {
        self.rotation = Some(TextRotation { degrees, cx, cy });
        self
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RectItem {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

/// Straight line, optionally arrow-terminated.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Stroke,
    pub arrow_start: bool,
    pub arrow_end: bool,
}

/// Circle (hole outlines).
#[derive(Debug, Clone, PartialEq)]
pub struct CircleItem {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

/// Filled polygon (step-diagram faces, arrowheads).
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonItem {
    pub points: Vec<(f64, f64)>,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
    pub opacity: f64,
}

/// One drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Rect(RectItem),
    Line(LineItem),
    Circle(CircleItem),
    Polygon(PolygonItem),
    Text(TextItem),
}

impl Item {
    fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Item::Rect(r) => {
                r.x += dx;
                r.y += dy;
            }
            Item::Line(l) => {
                l.x1 += dx;
                l.y1 += dy;
                l.x2 += dx;
                l.y2 += dy;
            }
            Item::Circle(c) => {
                c.cx += dx;
                c.cy += dy;
            }
            Item::Polygon(p) => {
                for (x, y) in &mut p.points {
                    *x += dx;
                    *y += dy;
                }
            }
            Item::Text(t) => {
                t.x += dx;
                t.y += dy;
                if let Some(rot) = &mut t.rotation {
                    rot.cx += dx;
                    rot.cy += dy;
                }
            }
        }
    }
}

/// An immutable-once-built drawing: fixed canvas size plus an ordered list of
/// primitives (painter's order).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    /// Background grid pitch in pixels, when the sheet shows one.
    pub grid_step: Option<f64>,
    pub items: Vec<Item>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            grid_step: None,
            items: Vec::new(),
        }
    }

    pub fn with_grid(width: f64, height: f64, step: f64) -> Self {
        Self {
            width,
            height,
            grid_step: Some(step),
            items: Vec::new(),
        }
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: Option<Color>, stroke: Option<Stroke>) {
        self.items.push(Item::Rect(RectItem {
            x,
            y,
            width,
            height,
            fill,
            stroke,
        }));
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: Stroke) {
        self.items.push(Item::Line(LineItem {
            x1,
            y1,
            x2,
            y2,
            stroke,
            arrow_start: false,
            arrow_end: false,
        }));
    }

    /// Line with arrowheads at both ends (dimension span lines).
    pub fn arrow_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: Stroke) {
        self.items.push(Item::Line(LineItem {
            x1,
            y1,
            x2,
            y2,
            stroke,
            arrow_start: true,
            arrow_end: true,
        }));
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: Option<Color>, stroke: Option<Stroke>) {
        self.items.push(Item::Circle(CircleItem {
            cx,
            cy,
            r,
            fill,
            stroke,
        }));
    }

    pub fn polygon(&mut self, points: Vec<(f64, f64)>, fill: Option<Color>, stroke: Option<Stroke>, opacity: f64) {
        self.items.push(Item::Polygon(PolygonItem {
            points,
            fill,
            stroke,
            opacity,
        }));
    }

    pub fn text(&mut self, item: TextItem) {
        self.items.push(Item::Text(item));
    }

    /// Append another scene's items shifted by `(dx, dy)`, growing the canvas
    /// as needed. Used to stack sheet scenes into one export document.
    pub fn merge_translated(&mut self, other: Scene, dx: f64, dy: f64) {
        self.width = self.width.max(other.width + dx);
        self.height = self.height.max(other.height + dy);
        for mut item in other.items {
            item.translate(dx, dy);
            self.items.push(item);
        }
    }

    /// Texts in insertion order (test/introspection helper).
    pub fn texts(&self) -> impl Iterator<Item = &TextItem> {
        self.items.iter().filter_map(|item| match item {
            Item::Text(t) => Some(t),
            _ => None,
        })
    }

    /// Rects in insertion order (test/introspection helper).
    pub fn rects(&self) -> impl Iterator<Item = &RectItem> {
        self.items.iter().filter_map(|item| match item {
            Item::Rect(r) => Some(r),
            _ => None,
        })
    }

    /// Lines in insertion order (test/introspection helper).
    pub fn lines(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter_map(|item| match item {
            Item::Line(l) => Some(l),
            _ => None,
        })
    }
}

/// Truncate `s` to at most `max` characters, replacing the tail with `…`.
/// Char-based, so multi-byte names never split mid-codepoint.
pub fn ellipsize(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ellipsize_is_char_safe() {
        assert_eq!(ellipsize("Cajón frontal", 20), "Cajón frontal");
        assert_eq!(ellipsize("Panel lateral izquierdo", 14), "Panel lateral…");
        assert_eq!(ellipsize("ñññññ", 3), "ññ…");
    }

    #[test]
    fn merge_translated_shifts_and_grows() {
        let mut base = Scene::new(100.0, 100.0);
        let mut other = Scene::new(80.0, 50.0);
        other.line(0.0, 0.0, 10.0, 0.0, Stroke::solid(Color::Line, 1.0));
        base.merge_translated(other, 40.0, 90.0);
        assert_eq!(base.height, 140.0);
        let line = base.lines().next().unwrap();
        assert_eq!((line.x1, line.y1), (40.0, 90.0));
    }
}
