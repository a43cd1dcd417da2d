//--------------------------------------------------------------------
// rect.rs
//--------------------------------------------------------------------
// Provides an axis-aligned rectangle class
//--------------------------------------------------------------------

use crate::derive_more::*;

use ordered_float::OrderedFloat;
use rand::Rng;
use std::hash::{Hash, Hasher};

use super::*;
use crate::log::debug;
use CoordM::INFINITY;

/// Which way the y axis grows, deciding which edge of a rectangle is the top.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum CoordinatesDirection {
    /// y grows downwards: the top edge has the smaller y.
    Screen,
    /// y grows upwards: the top edge has the larger y.
    AntiScreen,
}

/// A rectangle spanned by two corner points.
///
/// Every derived point is computed when the corners are set, so the
/// getters are plain field reads.
#[derive(Copy, Clone, Debug, Display)]
#[display(fmt = "coordinates: {}; <Rect {}-{}>", direction, top_left, bottom_right)]
pub struct Rect {
    direction: CoordinatesDirection,
    left: Coord,
    right: Coord,
    top: Coord,
    bottom: Coord,
    width: Coord,
    height: Coord,
    top_left: Point,
    top_right: Point,
    bottom_left: Point,
    bottom_right: Point,
    center: Point,
    mid_top: Point,
    mid_bottom: Point,
    mid_left: Point,
    mid_right: Point,
}

fn random_between(rng: &mut impl Rng, a: Coord, b: Coord) -> Coord {
    let (min, max) = (a.min(b), a.max(b));
    rng.gen::<Coord>() * (max - min) + min
}

impl Rect {
    pub fn new(direction: CoordinatesDirection, p1: Point, p2: Point) -> Rect {
        let mut rect = Rect {
            direction,
            left: 0.0, right: 0.0, top: 0.0, bottom: 0.0, width: 0.0, height: 0.0,
            top_left: Point::ORIGIN, top_right: Point::ORIGIN,
            bottom_left: Point::ORIGIN, bottom_right: Point::ORIGIN,
            center: Point::ORIGIN, mid_top: Point::ORIGIN, mid_bottom: Point::ORIGIN,
            mid_left: Point::ORIGIN, mid_right: Point::ORIGIN,
        };
        rect.set_points(p1, p2);
        rect
    }

    /// A screen-direction rectangle growing right and down from `(left, top)`.
    pub fn from_top_left_width_height(left: Coord, top: Coord, width: Coord, height: Coord) -> Rect {
        Rect::new(CoordinatesDirection::Screen, Point::new(left, top), Point::new(left + width, top + height))
    }

    pub fn set_points(&mut self, p1: Point, p2: Point) -> &mut Self {
        let (y_min, y_max) = (p1.y.min(p2.y), p1.y.max(p2.y));

        self.left = p1.x.min(p2.x);
        self.right = p1.x.max(p2.x);
        match self.direction {
            CoordinatesDirection::Screen => { self.top = y_min; self.bottom = y_max; }
            CoordinatesDirection::AntiScreen => { self.top = y_max; self.bottom = y_min; }
        }

        let mid_x = (self.left + self.right) / 2.0;
        let mid_y = (self.top + self.bottom) / 2.0;

        self.width = self.right - self.left;
        self.height = y_max - y_min;
        self.top_left = Point::new(self.left, self.top);
        self.top_right = Point::new(self.right, self.top);
        self.bottom_left = Point::new(self.left, self.bottom);
        self.bottom_right = Point::new(self.right, self.bottom);
        self.center = Point::new(mid_x, mid_y);
        self.mid_top = Point::new(mid_x, self.top);
        self.mid_bottom = Point::new(mid_x, self.bottom);
        self.mid_left = Point::new(self.left, mid_y);
        self.mid_right = Point::new(self.right, mid_y);
        self
    }

    pub fn direction(&self) -> CoordinatesDirection { self.direction }
    pub fn left(&self) -> Coord { self.left }
    pub fn right(&self) -> Coord { self.right }
    pub fn top(&self) -> Coord { self.top }
    pub fn bottom(&self) -> Coord { self.bottom }
    pub fn width(&self) -> Coord { self.width }
    pub fn height(&self) -> Coord { self.height }

    pub fn top_left(&self) -> Point { self.top_left }
    pub fn top_right(&self) -> Point { self.top_right }
    pub fn bottom_left(&self) -> Point { self.bottom_left }
    pub fn bottom_right(&self) -> Point { self.bottom_right }
    pub fn center(&self) -> Point { self.center }
    pub fn mid_top(&self) -> Point { self.mid_top }
    pub fn mid_bottom(&self) -> Point { self.mid_bottom }
    pub fn mid_left(&self) -> Point { self.mid_left }
    pub fn mid_right(&self) -> Point { self.mid_right }

    // smallest and largest y, whatever the direction
    fn y_extent(&self) -> (Coord, Coord) { (self.top.min(self.bottom), self.top.max(self.bottom)) }

    /// Whether the point lies inside the rectangle or on its border.
    pub fn contains(&self, pt: Point) -> bool {
        let on_x = self.left <= pt.x && pt.x <= self.right;
        let on_y = match self.direction {
            CoordinatesDirection::Screen => self.top <= pt.y && pt.y <= self.bottom,
            CoordinatesDirection::AntiScreen => self.top >= pt.y && pt.y >= self.bottom,
        };
        on_x && on_y
    }

    /// Whether the interiors of both rectangles intersect; touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (y1, y2) = self.y_extent();
        let (oy1, oy2) = other.y_extent();
        self.right > other.left && self.left < other.right && y1 < oy2 && y2 > oy1
    }

    /// Every side pushed outwards by `n` (inwards when negative).
    pub fn expanded_by(&self, n: Coord) -> Rect {
        let (y1, y2) = self.y_extent();
        Rect::new(self.direction, Point::new(self.left - n, y1 - n), Point::new(self.right + n, y2 + n))
    }

    pub fn random_point(&self, rng: &mut impl Rng) -> Point {
        let x = random_between(rng, self.right, self.left);
        let y = random_between(rng, self.top, self.bottom);
        Point::new(x, y)
    }

    /// The common area of both rectangles, borders included; keeps this rectangle's direction.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let (y1, y2) = self.y_extent();
        let (oy1, oy2) = other.y_extent();

        let x1 = self.left.max(other.left);
        let x2 = self.right.min(other.right);
        let y1 = y1.max(oy1);
        let y2 = y2.min(oy2);

        if x1 > x2 || y1 > y2 { None }
        else { Some(Rect::new(self.direction, Point::new(x1, y1), Point::new(x2, y2))) }
    }

    pub fn enclosing_rect(direction: CoordinatesDirection, pts: impl IntoIterator<Item = Point>) -> Option<Rect> {
        let mut x1 = INFINITY;
        let mut x2 = -INFINITY;
        let mut y1 = INFINITY;
        let mut y2 = -INFINITY;

        let mut empty = true;
        for pt in pts {
            if x1 > pt.x { x1 = pt.x; }
            if x2 < pt.x { x2 = pt.x; }
            if y1 > pt.y { y1 = pt.y; }
            if y2 < pt.y { y2 = pt.y; }
            empty = false;
        }

        if empty {
            debug!("no points to enclose");
            None
        } else { Some(Rect::new(direction, Point::new(x1, y1), Point::new(x2, y2))) }
    }

    fn key(&self) -> (CoordinatesDirection, [OrderedFloat<Coord>; 4]) {
        (self.direction, [self.left, self.right, self.top, self.bottom].map(OrderedFloat))
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Rect) -> bool { self.key() == other.key() }
}

impl Eq for Rect {}

impl Hash for Rect {
    fn hash<H: Hasher>(&self, state: &mut H) { self.key().hash(state) }
}
