//! Map layer visibility and opacity state.
//!
//! Layers are registered once with unique identifiers and keep their
//! registration order. Visibility toggles independently of opacity, so a
//! hidden layer retains its opacity for when it is shown again. Opacity is
//! always clamped into `0.0..=1.0` on the way in.

use thiserror::Error;

/// Category of data a layer overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LayerKind {
    /// Solar potential.
    Solar,
    /// Wind potential.
    Wind,
    /// Water availability.
    Water,
    /// Power grid and transport.
    Grid,
    /// Land use.
    Landuse,
    /// Existing infrastructure.
    Infrastructure,
}

impl LayerKind {
    /// Return the kind as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solar => "solar",
            Self::Wind => "wind",
            Self::Water => "water",
            Self::Grid => "grid",
            Self::Landuse => "landuse",
            Self::Infrastructure => "infrastructure",
        }
    }
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown layer kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown layer kind '{0}'")]
pub struct LayerKindParseError(pub String);

impl std::str::FromStr for LayerKind {
    type Err = LayerKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "solar" => Ok(Self::Solar),
            "wind" => Ok(Self::Wind),
            "water" => Ok(Self::Water),
            "grid" => Ok(Self::Grid),
            "landuse" => Ok(Self::Landuse),
            "infrastructure" => Ok(Self::Infrastructure),
            _ => Err(LayerKindParseError(s.to_owned())),
        }
    }
}

/// Errors returned by [`LayerState`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayerError {
    /// No layer is registered under the identifier.
    #[error("no layer registered with id '{id}'")]
    UnknownLayer {
        /// Requested identifier.
        id: String,
    },
    /// A layer with the identifier is already registered.
    #[error("a layer with id '{id}' is already registered")]
    DuplicateLayer {
        /// Conflicting identifier.
        id: String,
    },
}

/// A toggleable, opacity-controlled overlay.
///
/// # Examples
/// ```
/// use siting_core::{LayerDescriptor, LayerKind};
///
/// let layer = LayerDescriptor::new("solar", "Solar Potential", LayerKind::Solar, "#f59e0b")
///     .with_opacity(1.7);
/// assert_eq!(layer.opacity(), 1.0);
/// assert!(layer.is_visible());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayerDescriptor {
    id: String,
    name: String,
    kind: LayerKind,
    visible: bool,
    opacity: f64,
    color: String,
}

impl LayerDescriptor {
    /// Describe a visible, fully opaque layer.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: LayerKind,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            visible: true,
            opacity: 1.0,
            color: color.into(),
        }
    }

    /// Set the initial visibility while returning `self` for chaining.
    #[must_use]
    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the initial opacity, clamped into `0.0..=1.0`.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = clamp_opacity(opacity, self.opacity);
        self
    }

    /// Unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Overlay category.
    #[must_use]
    pub const fn kind(&self) -> LayerKind {
        self.kind
    }

    /// Whether the layer is currently shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current opacity in `0.0..=1.0`.
    #[must_use]
    pub const fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Display colour.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }
}

/// Clamp `value` into `0.0..=1.0`; NaN keeps `current`.
fn clamp_opacity(value: f64, current: f64) -> f64 {
    if value.is_nan() {
        current
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Ordered collection of layers with unique identifiers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayerState {
    layers: Vec<LayerDescriptor>,
}

impl Default for LayerState {
    /// The six dashboard overlays in their default display state.
    fn default() -> Self {
        Self {
            layers: vec![
                LayerDescriptor::new("solar", "Solar Potential", LayerKind::Solar, "#f59e0b")
                    .with_opacity(0.7),
                LayerDescriptor::new("wind", "Wind Potential", LayerKind::Wind, "#3b82f6")
                    .with_opacity(0.7),
                LayerDescriptor::new("water", "Water Availability", LayerKind::Water, "#0ea5e9")
                    .with_opacity(0.7),
                LayerDescriptor::new("grid", "Power Grid & Transport", LayerKind::Grid, "#8b5cf6")
                    .with_opacity(0.8),
                LayerDescriptor::new("landuse", "Land Use", LayerKind::Landuse, "#84cc16")
                    .with_visibility(false)
                    .with_opacity(0.6),
                LayerDescriptor::new(
                    "infrastructure",
                    "Existing Infrastructure",
                    LayerKind::Infrastructure,
                    "#ef4444",
                )
                .with_opacity(0.9),
            ],
        }
    }
}

impl LayerState {
    /// Create an empty layer collection.
    #[must_use]
    pub const fn empty() -> Self {
        Self { layers: Vec::new() }
    }

    /// Build a collection from descriptors, preserving their order.
    ///
    /// # Errors
    /// Returns [`LayerError::DuplicateLayer`] if two descriptors share an id.
    pub fn new<I>(layers: I) -> Result<Self, LayerError>
    where
        I: IntoIterator<Item = LayerDescriptor>,
    {
        let mut state = Self::empty();
        for layer in layers {
            state.register(layer)?;
        }
        Ok(state)
    }

    /// Append a layer after those already registered.
    ///
    /// # Errors
    /// Returns [`LayerError::DuplicateLayer`] if the id is taken; the state is
    /// unchanged.
    pub fn register(&mut self, layer: LayerDescriptor) -> Result<(), LayerError> {
        if self.get(layer.id()).is_some() {
            return Err(LayerError::DuplicateLayer {
                id: layer.id().to_owned(),
            });
        }
        self.layers.push(layer);
        Ok(())
    }

    /// Look up a layer by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&LayerDescriptor> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    /// All layers in registration order.
    #[must_use]
    pub fn layers(&self) -> &[LayerDescriptor] {
        &self.layers
    }

    /// Flip a layer's visibility and return the new value.
    ///
    /// # Errors
    /// Returns [`LayerError::UnknownLayer`] if no layer has the id; nothing
    /// changes.
    pub fn toggle_visibility(&mut self, id: &str) -> Result<bool, LayerError> {
        let layer = self.get_mut(id)?;
        layer.visible = !layer.visible;
        log::debug!("layer '{id}' visible: {}", layer.visible);
        Ok(layer.visible)
    }

    /// Store a clamped opacity and return the value actually stored.
    ///
    /// Values outside `0.0..=1.0` are clamped rather than rejected; NaN leaves
    /// the current opacity in place.
    ///
    /// # Errors
    /// Returns [`LayerError::UnknownLayer`] if no layer has the id.
    pub fn set_opacity(&mut self, id: &str, value: f64) -> Result<f64, LayerError> {
        let layer = self.get_mut(id)?;
        layer.opacity = clamp_opacity(value, layer.opacity);
        log::debug!("layer '{id}' opacity: {}", layer.opacity);
        Ok(layer.opacity)
    }

    /// Visible layers in registration order.
    #[must_use]
    pub fn list_visible(&self) -> Vec<&LayerDescriptor> {
        self.layers.iter().filter(|layer| layer.visible).collect()
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut LayerDescriptor, LayerError> {
        self.layers
            .iter_mut()
            .find(|layer| layer.id == id)
            .ok_or_else(|| {
                log::warn!("ignoring operation on unknown layer '{id}'");
                LayerError::UnknownLayer { id: id.to_owned() }
            })
    }
}
