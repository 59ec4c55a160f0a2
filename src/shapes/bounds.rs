use bon::Builder;
use glam::DVec2;

/// Left, top, width and height of a rectangle, without identity or any
/// derived edges.
#[derive(Builder, Clone, Copy, Debug, Default, PartialEq)]
#[builder(const)]
pub struct Bounds {
    #[builder(default = 0.0)]
    pub left:   f64,
    #[builder(default = 0.0)]
    pub top:    f64,
    #[builder(default = 0.0)]
    pub width:  f64,
    #[builder(default = 0.0)]
    pub height: f64,
}

impl Bounds {
    #[must_use]
    #[inline(always)]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    #[inline(always)]
    pub const fn from_position_size(position: DVec2, size: DVec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    #[must_use]
    #[inline(always)]
    pub const fn position(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }

    #[must_use]
    #[inline(always)]
    pub const fn size(&self) -> DVec2 { DVec2::new(self.width, self.height) }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn builder_defaults_to_zero() {
        let bounds = Bounds::builder().width(3.0).build();

        assert_eq!(bounds, Bounds::new(0.0, 0.0, 3.0, 0.0));
        assert_eq!(Bounds::builder().build(), Bounds::default());
    }

    #[test]
    fn builder_is_usable_in_const_context() {
        const UNIT: Bounds = Bounds::builder().width(1.0).height(1.0).build();

        assert_eq!(UNIT.size(), DVec2::ONE);
        assert_eq!(UNIT.position(), DVec2::ZERO);
    }

    #[rstest]
    #[case(DVec2::new(0.0, 0.0), DVec2::new(10.0, 20.0))]
    #[case(DVec2::new(-5.0, 2.5), DVec2::new(4.0, -1.0))]
    fn position_and_size_follow_fields(
        #[case] position: DVec2,
        #[case] size: DVec2,
    ) {
        let bounds = Bounds::from_position_size(position, size);

        assert_eq!(bounds.left, position.x);
        assert_eq!(bounds.top, position.y);
        assert_eq!(bounds.width, size.x);
        assert_eq!(bounds.height, size.y);
        assert_eq!(bounds.position(), position);
        assert_eq!(bounds.size(), size);
    }
}
