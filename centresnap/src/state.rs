/// Viewport extent along the scroll axis, plus whether it (and the expected item extent) can be
/// trusted for measurement-aware scrolls.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub extent: u32,
    pub measurements_valid: bool,
}

impl Viewport {
    pub fn new(extent: u32) -> Self {
        Self {
            extent,
            measurements_valid: true,
        }
    }

    /// Returns `true` if `extent` differs from the recorded one.
    ///
    /// A changed extent always invalidates previous measurements.
    pub fn is_resize(&self, extent: u32) -> bool {
        self.extent != extent
    }
}
