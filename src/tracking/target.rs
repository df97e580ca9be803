use std::borrow::Borrow;
use std::fmt;

/// Identity assigned to a search target by the tracking engine.
///
/// Anchors produced for the target carry the same identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(String);

impl MarkerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MarkerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MarkerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for MarkerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Which way is "up" in the reference image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

/// A 2D image the tracking engine searches for in the camera feed.
///
/// Immutable once created. It is moved into the registry when linked to a
/// node and handed back when the binding is consumed.
#[derive(Debug, PartialEq)]
pub struct MarkerTarget {
    image: Vec<u8>,
    orientation: Orientation,
    physical_width: f32,
}

impl MarkerTarget {
    /// # Arguments
    /// * `image` - Encoded image bytes, decoded by the tracking engine
    /// * `orientation` - Orientation of the printed image
    /// * `physical_width` - Printed width in metres
    pub fn new(image: Vec<u8>, orientation: Orientation, physical_width: f32) -> Self {
        Self {
            image,
            orientation,
            physical_width,
        }
    }

    pub fn image(&self) -> &[u8] {
        &self.image
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn physical_width(&self) -> f32 {
        self.physical_width
    }
}
