//! Orientation and device-class state

use crate::grid::GridMetrics;
use crate::math::Size;

/// Active layout orientation
///
/// Fed by the host's fold/rotation signal. Foldable postures collapse onto
/// these two: an unfolded inner display reports as landscape-equivalent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Map the host's `is_landscape_equivalent` flag
    #[inline]
    pub fn from_landscape_flag(is_landscape: bool) -> Self {
        if is_landscape {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    #[inline]
    pub fn is_landscape(&self) -> bool {
        matches!(self, Orientation::Landscape)
    }
}

/// Device class deciding the cell metrics
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    /// Regular phone display
    Phone,
    /// Unfolded foldable or tablet display
    Unfolded,
}

impl DeviceClass {
    /// Cell metrics for this device class
    pub fn metrics(&self) -> GridMetrics {
        match self {
            DeviceClass::Phone => GridMetrics::new(
                Size::new(96.0, 118.0),
                Size::new(64.0, 64.0),
                48.0,
                96.0,
            ),
            DeviceClass::Unfolded => GridMetrics::new(
                Size::new(120.0, 140.0),
                Size::new(72.0, 72.0),
                56.0,
                104.0,
            ),
        }
    }
}
