/// Principal axis of 3D space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
pub enum Axis {
    /// X axis, pointing right.
    X,
    /// Y axis, pointing up.
    Y,
    /// Z axis, pointing toward the viewer.
    Z,
}

impl Axis {
    /// All axes, in preference order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the index of the axis's component in a vector.
    pub fn index(self) -> usize {
        self as usize
    }
}
