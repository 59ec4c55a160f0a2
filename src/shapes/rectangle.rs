use std::fmt;

use getset::{CopyGetters, Getters};
use glam::DVec2;

use super::Bounds;

/// An axis-aligned rectangle carrying a caller-assigned id.
///
/// `right`, `bottom` and `area` are stored rather than computed on access.
/// Every mutation goes through [`Rectangle::reset`] or
/// [`Rectangle::shrink`], which keep them in step with the primary fields.
///
/// No validation is performed: negative sizes, NaN and infinities are
/// accepted and carried through the arithmetic as is.
///
/// All fields are read through getters, so they can only change via
/// `reset` and `shrink`.
#[derive(Clone, Copy, Debug, PartialEq, Getters, CopyGetters)]
pub struct Rectangle<Id = String> {
    #[getset(get = "pub")]
    id:     Id,
    #[getset(get_copy = "pub")]
    left:   f64,
    #[getset(get_copy = "pub")]
    top:    f64,
    #[getset(get_copy = "pub")]
    width:  f64,
    #[getset(get_copy = "pub")]
    height: f64,
    #[getset(get_copy = "pub")]
    right:  f64,
    #[getset(get_copy = "pub")]
    bottom: f64,
    #[getset(get_copy = "pub")]
    area:   f64,
}

impl<Id> Rectangle<Id> {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64, id: Id) -> Self {
        let mut rectangle = Self {
            id,
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            right: 0.0,
            bottom: 0.0,
            area: 0.0,
        };
        rectangle.reset(left, top, width, height);
        rectangle
    }

    #[must_use]
    #[inline(always)]
    pub fn from_bounds(bounds: Bounds, id: Id) -> Self {
        Self::new(bounds.left, bounds.top, bounds.width, bounds.height, id)
    }

    /// Replaces the geometry and recomputes the derived edges and area.
    /// The id is left untouched.
    pub fn reset(&mut self, left: f64, top: f64, width: f64, height: f64) {
        self.left = left;
        self.top = top;
        self.width = width;
        self.height = height;
        self.right = self.left + self.width;
        self.bottom = self.top + self.height;
        self.area = self.width * self.height;
    }

    #[inline(always)]
    pub fn reset_to(&mut self, bounds: Bounds) {
        self.reset(bounds.left, bounds.top, bounds.width, bounds.height);
    }

    /// Returns `true` if `other` lies inside `self` or on its boundary.
    ///
    /// Reads the stored `right` and `bottom` of `other`.
    #[must_use]
    pub fn contains<OtherId>(&self, other: &Rectangle<OtherId>) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }

    /// Moves every edge inward by `amount`. A negative `amount` grows the
    /// rectangle.
    ///
    /// The edges are moved directly while `width` and `height` lose
    /// `2 * amount`; under floating point the two results may differ in the
    /// last bits from `right - left` and `bottom - top`.
    pub fn shrink(&mut self, amount: f64) {
        self.left += amount;
        self.top += amount;
        self.right -= amount;
        self.bottom -= amount;

        let both_sides = amount * 2.0;
        self.width -= both_sides;
        self.height -= both_sides;
        self.area = self.width * self.height;

        if self.is_inverted() {
            tracing::trace!(
                amount,
                width = self.width,
                height = self.height,
                "shrink produced an inverted rectangle"
            );
        }
    }

    #[must_use]
    #[inline(always)]
    pub fn is_inverted(&self) -> bool { self.width < 0.0 || self.height < 0.0 }

    #[must_use]
    #[inline(always)]
    pub const fn bounds(&self) -> Bounds {
        Bounds::new(self.left, self.top, self.width, self.height)
    }

    #[must_use]
    #[inline(always)]
    pub const fn position(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }

    #[must_use]
    #[inline(always)]
    pub const fn size(&self) -> DVec2 { DVec2::new(self.width, self.height) }

    #[must_use]
    #[inline(always)]
    pub fn into_id(self) -> Id { self.id }
}

impl<Id: fmt::Display> fmt::Display for Rectangle<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Rect(id:{}, left:{}, top:{}, w:{}, h:{})]",
            self.id, self.left, self.top, self.width, self.height,
        )
    }
}
