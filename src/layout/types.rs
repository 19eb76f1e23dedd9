//! Core types for the layout renderer

/// A 2D point in canvas coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned box on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Check if this bounding box fully contains another
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        other.x >= self.x
            && other.right() <= self.right()
            && other.y >= self.y
            && other.bottom() <= self.bottom()
    }
}

/// Placement of a rectangle scaled onto the canvas
///
/// One uniform `scale` applies to both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledGeometry {
    pub origin_x: f64,
    pub origin_y: f64,
    pub draw_width: f64,
    pub draw_height: f64,
    pub scale: f64,
}

impl ScaledGeometry {
    /// The drawn rectangle as a box
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.origin_x, self.origin_y, self.draw_width, self.draw_height)
    }
}

/// A dimension label to draw next to the shape, centered on `position`
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionLabel {
    pub text: String,
    pub position: Point,
    /// Rotation in degrees around `position` (negative is counter-clockwise)
    pub rotation: f64,
}

/// A dashed guide line running along one side of the shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLine {
    pub start: Point,
    pub end: Point,
    /// Dash pattern as (on, off) lengths
    pub dash: (f64, f64),
}

impl GuideLine {
    pub fn length(&self) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Everything needed to draw one solved rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleLayout {
    /// The whole drawing surface
    pub canvas: BoundingBox,
    pub geometry: ScaledGeometry,
    /// The filled and stroked shape
    pub shape: BoundingBox,
    /// Label for the longer side, below the shape
    pub length_label: DimensionLabel,
    /// Label for the shorter side, right of the shape
    pub width_label: DimensionLabel,
    pub length_guide: GuideLine,
    pub width_guide: GuideLine,
}
