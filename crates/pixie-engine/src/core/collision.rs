//! Point, circle, line and rectangle hitboxes with pairwise intersection tests.
//!
//! All tests are inclusive: shapes that merely touch collide.

use glam::Vec2;

/// Tolerance for "point lies on segment".
pub const LINE_EPSILON: f32 = 1.0e-3;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

/// Axis-aligned rectangle anchored at its top-left corner.
/// Negative sizes are accepted and treated as extending the other way.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl Line {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
        }
    }

    /// Shortest distance from `p` to this segment.
    pub fn distance_to(&self, p: Vec2) -> f32 {
        let a = self.start.to_vec2();
        let ab = self.end.to_vec2() - a;
        let len_sq = ab.length_squared();
        if len_sq == 0.0 {
            return p.distance(a);
        }
        let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
        p.distance(a + ab * t)
    }
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Same area with non-negative width and height.
    pub fn normalized(&self) -> Rect {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Rect { x, y, width, height }
    }

    /// (min, max) corners.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let r = self.normalized();
        (Vec2::new(r.x, r.y), Vec2::new(r.x + r.width, r.y + r.height))
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let (min, max) = self.bounds();
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    fn edges(&self) -> [Line; 4] {
        let (min, max) = self.bounds();
        [
            Line::new(min.x, min.y, max.x, min.y),
            Line::new(max.x, min.y, max.x, max.y),
            Line::new(max.x, max.y, min.x, max.y),
            Line::new(min.x, max.y, min.x, min.y),
        ]
    }
}

/// Pairwise intersection test.
pub trait Collide<Rhs = Self> {
    fn collides(&self, other: &Rhs) -> bool;
}

// -- Point --

impl Collide for Point {
    fn collides(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Collide<Circle> for Point {
    fn collides(&self, c: &Circle) -> bool {
        self.to_vec2().distance_squared(c.center()) <= c.radius * c.radius
    }
}

impl Collide<Line> for Point {
    fn collides(&self, l: &Line) -> bool {
        l.distance_to(self.to_vec2()) <= LINE_EPSILON
    }
}

impl Collide<Rect> for Point {
    fn collides(&self, r: &Rect) -> bool {
        r.contains(self.to_vec2())
    }
}

// -- Circle --

impl Collide<Point> for Circle {
    fn collides(&self, p: &Point) -> bool {
        p.collides(self)
    }
}

impl Collide for Circle {
    fn collides(&self, other: &Circle) -> bool {
        let reach = self.radius + other.radius;
        self.center().distance_squared(other.center()) <= reach * reach
    }
}

impl Collide<Line> for Circle {
    fn collides(&self, l: &Line) -> bool {
        l.distance_to(self.center()) <= self.radius
    }
}

impl Collide<Rect> for Circle {
    fn collides(&self, r: &Rect) -> bool {
        let (min, max) = r.bounds();
        let nearest = self.center().clamp(min, max);
        nearest.distance_squared(self.center()) <= self.radius * self.radius
    }
}

// -- Line --

impl Collide<Point> for Line {
    fn collides(&self, p: &Point) -> bool {
        p.collides(self)
    }
}

impl Collide<Circle> for Line {
    fn collides(&self, c: &Circle) -> bool {
        c.collides(self)
    }
}

impl Collide for Line {
    fn collides(&self, other: &Line) -> bool {
        segments_intersect(
            self.start.to_vec2(),
            self.end.to_vec2(),
            other.start.to_vec2(),
            other.end.to_vec2(),
        )
    }
}

impl Collide<Rect> for Line {
    fn collides(&self, r: &Rect) -> bool {
        r.contains(self.start.to_vec2())
            || r.contains(self.end.to_vec2())
            || r.edges().iter().any(|edge| edge.collides(self))
    }
}

// -- Rect --

impl Collide<Point> for Rect {
    fn collides(&self, p: &Point) -> bool {
        p.collides(self)
    }
}

impl Collide<Circle> for Rect {
    fn collides(&self, c: &Circle) -> bool {
        c.collides(self)
    }
}

impl Collide<Line> for Rect {
    fn collides(&self, l: &Line) -> bool {
        l.collides(self)
    }
}

impl Collide for Rect {
    fn collides(&self, other: &Rect) -> bool {
        let (a_min, a_max) = self.bounds();
        let (b_min, b_max) = other.bounds();
        a_min.x <= b_max.x && b_min.x <= a_max.x && a_min.y <= b_max.y && b_min.y <= a_max.y
    }
}

fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Parametric segment test, including collinear overlap.
fn segments_intersect(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> bool {
    let r = p2 - p1;
    let s = q2 - q1;
    let denom = cross(r, s);
    let qp = q1 - p1;

    if denom.abs() <= f32::EPSILON {
        if cross(qp, r).abs() > f32::EPSILON {
            return false; // parallel, disjoint
        }
        // collinear: project q onto p's parameter range
        let len_sq = r.length_squared();
        if len_sq == 0.0 {
            return Line::new(q1.x, q1.y, q2.x, q2.y).distance_to(p1) <= LINE_EPSILON;
        }
        let t0 = qp.dot(r) / len_sq;
        let t1 = t0 + s.dot(r) / len_sq;
        let (lo, hi) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
        return lo <= 1.0 && hi >= 0.0;
    }

    let t = cross(qp, s) / denom;
    let u = cross(qp, r) / denom;
    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

/// Any of the four shapes, for heterogeneous collision lists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hitbox {
    Point(Point),
    Circle(Circle),
    Line(Line),
    Rect(Rect),
}

impl Hitbox {
    pub fn collides(&self, other: &Hitbox) -> bool {
        match self {
            Hitbox::Point(a) => other.collides_with(a),
            Hitbox::Circle(a) => other.collides_with(a),
            Hitbox::Line(a) => other.collides_with(a),
            Hitbox::Rect(a) => other.collides_with(a),
        }
    }

    /// Test this hitbox against a concrete shape.
    pub fn collides_with<T>(&self, shape: &T) -> bool
    where
        Point: Collide<T>,
        Circle: Collide<T>,
        Line: Collide<T>,
        Rect: Collide<T>,
    {
        match self {
            Hitbox::Point(p) => p.collides(shape),
            Hitbox::Circle(c) => c.collides(shape),
            Hitbox::Line(l) => l.collides(shape),
            Hitbox::Rect(r) => r.collides(shape),
        }
    }
}

impl From<Point> for Hitbox {
    fn from(p: Point) -> Self {
        Hitbox::Point(p)
    }
}

impl From<Circle> for Hitbox {
    fn from(c: Circle) -> Self {
        Hitbox::Circle(c)
    }
}

impl From<Line> for Hitbox {
    fn from(l: Line) -> Self {
        Hitbox::Line(l)
    }
}

impl From<Rect> for Hitbox {
    fn from(r: Rect) -> Self {
        Hitbox::Rect(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_point_is_exact() {
        assert!(Point::new(1.0, 2.0).collides(&Point::new(1.0, 2.0)));
        assert!(!Point::new(1.0, 2.0).collides(&Point::new(1.0, 2.001)));
    }

    #[test]
    fn point_in_circle_is_inclusive() {
        let c = Circle::new(0.0, 0.0, 5.0);
        assert!(Point::new(0.0, 0.0).collides(&c));
        assert!(Point::new(3.0, 4.0).collides(&c)); // on the rim
        assert!(!Point::new(4.0, 4.0).collides(&c));
        assert!(c.collides(&Point::new(-3.0, -4.0)));
        assert!(!c.collides(&Point::new(10.0, 0.0)));
    }

    #[test]
    fn circle_circle() {
        let a = Circle::new(0.0, 0.0, 3.0);
        assert!(a.collides(&Circle::new(4.0, 0.0, 2.0)));
        assert!(a.collides(&Circle::new(5.0, 0.0, 2.0))); // touching
        assert!(!Circle::new(0.0, 0.0, 1.0).collides(&Circle::new(10.0, 0.0, 1.0)));
    }

    #[test]
    fn point_rect_is_inclusive() {
        let r = Rect::new(10.0, 10.0, 20.0, 5.0);
        assert!(Point::new(10.0, 10.0).collides(&r));
        assert!(Point::new(30.0, 15.0).collides(&r));
        assert!(r.collides(&Point::new(20.0, 12.0)));
        assert!(!Point::new(30.1, 12.0).collides(&r));
        assert!(!r.collides(&Point::new(9.0, 12.0)));
    }

    #[test]
    fn negative_rects_are_normalized() {
        let r = Rect::new(30.0, 15.0, -20.0, -5.0);
        assert_eq!(r.normalized(), Rect::new(10.0, 10.0, 20.0, 5.0));
        assert!(Point::new(20.0, 12.0).collides(&r));
        assert!(r.collides(&Rect::new(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn rect_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.collides(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.collides(&Rect::new(10.0, 0.0, 5.0, 5.0))); // shared edge
        assert!(a.collides(&Rect::new(2.0, 2.0, 1.0, 1.0))); // contained
        assert!(!a.collides(&Rect::new(11.0, 0.0, 5.0, 5.0)));
        assert!(!a.collides(&Rect::new(0.0, -6.0, 5.0, 5.0)));
    }

    #[test]
    fn point_on_line() {
        let l = Line::new(0.0, 0.0, 10.0, 10.0);
        assert!(Point::new(5.0, 5.0).collides(&l));
        assert!(l.collides(&Point::new(10.0, 10.0)));
        assert!(!Point::new(5.0, 6.0).collides(&l));
        assert!(!Point::new(11.0, 11.0).collides(&l)); // past the end
    }

    #[test]
    fn line_line() {
        let a = Line::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.collides(&Line::new(0.0, 10.0, 10.0, 0.0)));
        assert!(a.collides(&Line::new(10.0, 10.0, 20.0, 0.0))); // shared endpoint
        assert!(!a.collides(&Line::new(0.0, 1.0, 10.0, 11.0))); // parallel
        assert!(!a.collides(&Line::new(6.0, 0.0, 10.0, 0.0)));
    }

    #[test]
    fn collinear_lines_overlap_only_when_ranges_meet() {
        let a = Line::new(0.0, 0.0, 4.0, 0.0);
        assert!(a.collides(&Line::new(3.0, 0.0, 8.0, 0.0)));
        assert!(a.collides(&Line::new(8.0, 0.0, 4.0, 0.0)));
        assert!(!a.collides(&Line::new(5.0, 0.0, 8.0, 0.0)));
    }

    #[test]
    fn circle_line() {
        let c = Circle::new(5.0, 5.0, 2.0);
        assert!(c.collides(&Line::new(0.0, 6.0, 10.0, 6.0)));
        assert!(c.collides(&Line::new(0.0, 7.0, 10.0, 7.0))); // tangent
        assert!(!c.collides(&Line::new(0.0, 8.0, 10.0, 8.0)));
        assert!(!Line::new(0.0, 0.0, 1.0, 0.0).collides(&c)); // segment ends early
    }

    #[test]
    fn circle_rect() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(Circle::new(12.0, 5.0, 2.0).collides(&r));
        assert!(Circle::new(5.0, 5.0, 1.0).collides(&r)); // inside
        assert!(!Circle::new(12.0, 12.0, 2.0).collides(&r)); // corner gap
        assert!(r.collides(&Circle::new(11.0, 11.0, 1.5)));
    }

    #[test]
    fn line_rect() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(Line::new(-5.0, 5.0, 15.0, 5.0).collides(&r)); // crosses through
        assert!(Line::new(2.0, 2.0, 3.0, 3.0).collides(&r)); // fully inside
        assert!(r.collides(&Line::new(5.0, -5.0, 5.0, 0.0))); // touches top edge
        assert!(!Line::new(-5.0, -5.0, -1.0, 20.0).collides(&r));
    }

    #[test]
    fn hitbox_dispatch_is_symmetric() {
        let shapes: Vec<Hitbox> = vec![
            Point::new(5.0, 5.0).into(),
            Circle::new(6.0, 5.0, 2.0).into(),
            Line::new(0.0, 5.0, 10.0, 5.0).into(),
            Rect::new(4.0, 4.0, 3.0, 3.0).into(),
        ];
        for a in &shapes {
            for b in &shapes {
                assert_eq!(a.collides(b), b.collides(a), "{a:?} vs {b:?}");
                assert!(a.collides(b), "{a:?} vs {b:?}");
            }
        }
        let far: Hitbox = Circle::new(100.0, 100.0, 1.0).into();
        assert!(shapes.iter().all(|s| !s.collides(&far)));
    }
}
