//! Tagged structured values carried inside effect configurations.
//!
//! Every variant of [`TypedValue`] is recognisable on the wire by a discriminator:
//!
//! - most variants use the general type tag stored under [`TYPE_KEY`] (`"__type"`);
//! - canvas-relative geometry ([`Position`], [`ArcPath`]) uses the separate geometry channel
//!   [`KIND_KEY`] (`"__kind"`).
//!
//! The geometry channel is orthogonal to the type tag. Code that only needs to
//! find scalable geometry (see [`crate::scale_wire`]) can do so by looking at one key, without
//! knowing the rest of the tag vocabulary.

use crate::foundation::core::CanvasDimensions;
use crate::value::config::EffectConfig;

/// Wire key of the general type tag.
pub const TYPE_KEY: &str = "__type";
/// Wire key of the geometry discriminator channel.
pub const KIND_KEY: &str = "__kind";
/// Wire flag set on a percentage range whose bounds could not cross the boundary as data.
pub const NON_DATA_KEY: &str = "__nonData";
/// Property names with this prefix are bookkeeping, not editable configuration.
pub const METADATA_PREFIX: &str = "__";

/// Values of the general type tag.
pub mod tag {
    /// [`super::Range`].
    pub const RANGE: &str = "Range";
    /// [`super::DynamicRange`].
    pub const DYNAMIC_RANGE: &str = "DynamicRange";
    /// [`super::Point`].
    pub const POINT: &str = "Point";
    /// [`super::PercentageOfSide`] measured against the shortest canvas side.
    pub const PERCENTAGE_SHORTEST_SIDE: &str = "PercentageShortestSide";
    /// [`super::PercentageOfSide`] measured against the longest canvas side.
    pub const PERCENTAGE_LONGEST_SIDE: &str = "PercentageLongestSide";
    /// [`super::PercentageRange`].
    pub const PERCENTAGE_RANGE: &str = "PercentageRange";
    /// [`super::ColorSelection`].
    pub const COLOR_SELECTION: &str = "ColorSelection";
    /// A callable that leaked across the boundary ([`crate::Callable`]).
    pub const FUNCTION: &str = "Function";
}

/// Values of the geometry discriminator channel.
pub mod kind {
    /// [`super::Position`].
    pub const POSITION: &str = "position";
    /// [`super::ArcPath`].
    pub const ARC_PATH: &str = "arc-path";
}

/// `true` for property names reserved for wire bookkeeping.
pub fn is_metadata_name(name: &str) -> bool {
    name.starts_with(METADATA_PREFIX)
}

/// Closed numeric interval `[lower, upper]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl Range {
    /// Build a range.
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// A range whose bounds are themselves ranges (randomised min and max).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DynamicRange {
    /// Range the lower bound is drawn from.
    pub bottom: Range,
    /// Range the upper bound is drawn from.
    pub top: Range,
}

/// A bare coordinate with no canvas-relative meaning. Never rescaled.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Build a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A canvas-relative coordinate; rescaled whenever the canvas size changes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    /// Horizontal coordinate in canvas pixels.
    pub x: f64,
    /// Vertical coordinate in canvas pixels.
    pub y: f64,
}

impl Position {
    /// Build a position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub(crate) fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }

    pub(crate) fn from_kurbo(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for Position {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

/// Which canvas side a percentage is measured against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// `min(width, height)`.
    Shortest,
    /// `max(width, height)`.
    Longest,
}

/// A fraction of one canvas side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PercentageOfSide {
    /// Fraction in `[0, 1]`.
    pub percent: f64,
    /// Side the fraction applies to.
    pub side: Side,
}

impl PercentageOfSide {
    /// Build a percentage of the shortest side.
    pub fn shortest(percent: f64) -> Self {
        Self {
            percent,
            side: Side::Shortest,
        }
    }

    /// Build a percentage of the longest side.
    pub fn longest(percent: f64) -> Self {
        Self {
            percent,
            side: Side::Longest,
        }
    }

    /// Wire tag for this value; the side is encoded by the tag itself.
    pub fn tag(self) -> &'static str {
        match self.side {
            Side::Shortest => tag::PERCENTAGE_SHORTEST_SIDE,
            Side::Longest => tag::PERCENTAGE_LONGEST_SIDE,
        }
    }

    /// Resolve to pixels on a concrete canvas.
    pub fn resolve(self, canvas: CanvasDimensions) -> f64 {
        let (w, h) = (f64::from(canvas.width()), f64::from(canvas.height()));
        let side = match self.side {
            Side::Shortest => w.min(h),
            Side::Longest => w.max(h),
        };
        self.percent * side
    }
}

/// A pair of side-relative percentages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PercentageRange {
    /// Lower bound.
    pub lower: PercentageOfSide,
    /// Upper bound.
    pub upper: PercentageOfSide,
}

impl PercentageRange {
    /// Substitute used when the original bounds were not transferable as data:
    /// half the shortest side up to half the longest side.
    pub fn safe_default() -> Self {
        Self {
            lower: PercentageOfSide::shortest(0.5),
            upper: PercentageOfSide::longest(0.5),
        }
    }
}

/// How a colour is chosen at render time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorSelectionType {
    /// Use the literal colour value.
    #[default]
    Single,
    /// Pick from the project's colour bucket.
    ColorBucket,
    /// Pick from the project's neutral bucket.
    NeutralBucket,
    /// A strategy this crate does not know, kept with its wire spelling.
    Other(String),
}

impl ColorSelectionType {
    /// Wire spelling.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Single => "single",
            Self::ColorBucket => "color-bucket",
            Self::NeutralBucket => "neutral-bucket",
            Self::Other(s) => s,
        }
    }

    /// Parse a known wire spelling (case-insensitive, `_` and `-` interchangeable).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "single" => Some(Self::Single),
            "color-bucket" | "colorbucket" => Some(Self::ColorBucket),
            "neutral-bucket" | "neutralbucket" => Some(Self::NeutralBucket),
            _ => None,
        }
    }
}

/// Default colour value filled in when a selection arrives without one.
pub const DEFAULT_COLOR_VALUE: &str = "#000000";

/// A colour choice: either a literal colour or a bucket to draw from.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorSelection {
    /// Selection strategy.
    pub selection_type: ColorSelectionType,
    /// Literal colour (usually `#RRGGBB`); `None` when explicitly unset.
    pub color_value: Option<String>,
}

impl Default for ColorSelection {
    fn default() -> Self {
        Self {
            selection_type: ColorSelectionType::Single,
            color_value: Some(DEFAULT_COLOR_VALUE.to_owned()),
        }
    }
}

/// Sweep direction of an arc.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ArcDirection {
    /// Increasing angle (`+1`).
    #[default]
    Forward,
    /// Decreasing angle (`-1`).
    Reverse,
}

impl ArcDirection {
    /// `+1` or `-1`.
    pub fn signum(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }

    pub(crate) fn from_f64(v: f64) -> Self {
        if v < 0.0 { Self::Reverse } else { Self::Forward }
    }
}

/// A circular arc around a canvas-relative centre. Angles are in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcPath {
    /// Arc centre; rescaled with the canvas.
    pub center: Position,
    /// Radius in canvas pixels.
    pub radius: f64,
    /// Start angle in degrees.
    pub start_angle: f64,
    /// End angle in degrees.
    pub end_angle: f64,
    /// Sweep direction.
    pub direction: ArcDirection,
}

impl Default for ArcPath {
    fn default() -> Self {
        Self {
            center: Position::default(),
            radius: 100.0,
            start_angle: 0.0,
            end_angle: 360.0,
            direction: ArcDirection::Forward,
        }
    }
}

/// A tagged object whose tag is not part of the known vocabulary.
///
/// Produced by newer authorities or plugin-supplied types. The tag and every property are
/// kept so the value re-serializes unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct Opaque {
    /// The unrecognised type tag.
    pub tag: String,
    /// All other properties, recursively decoded.
    pub props: EffectConfig,
}

/// Closed set of tagged structured values.
#[derive(Clone, Debug, PartialEq)]
pub enum TypedValue {
    /// See [`Range`].
    Range(Range),
    /// See [`DynamicRange`].
    DynamicRange(DynamicRange),
    /// See [`Point`].
    Point(Point),
    /// See [`Position`].
    Position(Position),
    /// See [`PercentageOfSide`].
    PercentageOfSide(PercentageOfSide),
    /// See [`PercentageRange`].
    PercentageRange(PercentageRange),
    /// See [`ColorSelection`].
    ColorSelection(ColorSelection),
    /// See [`ArcPath`].
    ArcPath(ArcPath),
    /// See [`Opaque`].
    Opaque(Opaque),
}

/// Which wire key carries a value's discriminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagChannel {
    /// [`TYPE_KEY`].
    Type,
    /// [`KIND_KEY`].
    Kind,
}

impl TypedValue {
    /// The discriminator string written on the wire.
    pub fn tag(&self) -> &str {
        match self {
            Self::Range(_) => tag::RANGE,
            Self::DynamicRange(_) => tag::DYNAMIC_RANGE,
            Self::Point(_) => tag::POINT,
            Self::Position(_) => kind::POSITION,
            Self::PercentageOfSide(p) => p.tag(),
            Self::PercentageRange(_) => tag::PERCENTAGE_RANGE,
            Self::ColorSelection(_) => tag::COLOR_SELECTION,
            Self::ArcPath(_) => kind::ARC_PATH,
            Self::Opaque(o) => &o.tag,
        }
    }

    /// The wire key the discriminator is stored under.
    pub fn channel(&self) -> TagChannel {
        match self {
            Self::Position(_) | Self::ArcPath(_) => TagChannel::Kind,
            _ => TagChannel::Type,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/value/typed.rs"]
mod tests;
