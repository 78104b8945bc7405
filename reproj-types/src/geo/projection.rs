/// Two-way conversion between points of two coordinate systems.
///
/// `project` goes from `InPoint` to `OutPoint`, `unproject` goes back. Both return `None`
/// if the result cannot be represented (e.g. a pole in Web Mercator).
pub trait Projection {
    /// Source point type.
    type InPoint;
    /// Target point type.
    type OutPoint;

    /// Converts a point from the source into the target system.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Converts a point from the target back into the source system.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}

impl<P: Projection + ?Sized> Projection for Box<P> {
    type InPoint = P::InPoint;
    type OutPoint = P::OutPoint;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        (**self).project(input)
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        (**self).unproject(input)
    }
}

/// Projection that swaps the direction of the wrapped one.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvertedProjection<P> {
    inner: P,
}

impl<P> InvertedProjection<P> {
    /// Wraps the given projection.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// Returns the wrapped projection.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Projection> Projection for InvertedProjection<P> {
    type InPoint = P::OutPoint;
    type OutPoint = P::InPoint;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        self.inner.unproject(input)
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        self.inner.project(input)
    }
}
