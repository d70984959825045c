//! Closed enumerations shared across the model

use std::fmt;

/// How a scene's vectors snap while being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CoordinateSnapMode {
    /// Integer x/y components; angle derived
    #[default]
    Cartesian,
    /// Integer magnitude and angle on a fixed interval; components derived
    Polar,
}

impl CoordinateSnapMode {
    pub const ALL: [CoordinateSnapMode; 2] = [Self::Cartesian, Self::Polar];
}

impl fmt::Display for CoordinateSnapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cartesian => write!(f, "cartesian"),
            Self::Polar => write!(f, "polar"),
        }
    }
}

/// Which axes a graph allows vectors to extend along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphOrientation {
    /// x axis only
    Horizontal,
    /// y axis only
    Vertical,
    /// Full plane
    #[default]
    TwoDimensional,
}

impl GraphOrientation {
    /// Project components onto the axes this orientation allows
    pub fn constrain(&self, x: f64, y: f64) -> (f64, f64) {
        match self {
            Self::Horizontal => (x, 0.0),
            Self::Vertical => (0.0, y),
            Self::TwoDimensional => (x, y),
        }
    }
}

impl fmt::Display for GraphOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
            Self::TwoDimensional => write!(f, "two-dimensional"),
        }
    }
}

/// How a vector set combines its active vectors into the resultant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EquationType {
    /// a + b = c
    #[default]
    Addition,
    /// a - b = c
    Subtraction,
    /// a + b + c = 0
    Negation,
}

impl EquationType {
    pub const ALL: [EquationType; 3] = [Self::Addition, Self::Subtraction, Self::Negation];

    /// Operator placed between terms when the equation is written out
    pub fn operator(&self) -> char {
        match self {
            Self::Addition | Self::Negation => '+',
            Self::Subtraction => '-',
        }
    }
}

impl fmt::Display for EquationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Addition => write!(f, "addition"),
            Self::Subtraction => write!(f, "subtraction"),
            Self::Negation => write!(f, "negation"),
        }
    }
}

/// How component vectors are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComponentVectorStyle {
    #[default]
    Invisible,
    /// Both components start at the parent's tail
    Parallelogram,
    /// y component starts at the tip of the x component
    Triangle,
    /// Components projected onto the graph axes
    OnAxis,
}

impl ComponentVectorStyle {
    pub const ALL: [ComponentVectorStyle; 4] = [
        Self::Invisible,
        Self::Parallelogram,
        Self::Triangle,
        Self::OnAxis,
    ];
}

/// Which axis a component vector lies along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentVectorType {
    X,
    Y,
}

/// Lifecycle of a pooled vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VectorState {
    /// In the toolbox, not on the graph
    #[default]
    Inactive,
    /// Held by the pointer
    Dragging,
    /// On the graph and part of the resultant
    Active,
    /// Released off the graph, travelling back to the toolbox
    AnimatingBack,
}

impl fmt::Display for VectorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inactive => write!(f, "inactive"),
            Self::Dragging => write!(f, "dragging"),
            Self::Active => write!(f, "active"),
            Self::AnimatingBack => write!(f, "animating-back"),
        }
    }
}

/// The four screens of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Explore1D,
    Explore2D,
    Lab,
    Equations,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 4] = [Self::Explore1D, Self::Explore2D, Self::Lab, Self::Equations];
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explore1D => write!(f, "Explore 1D"),
            Self::Explore2D => write!(f, "Explore 2D"),
            Self::Lab => write!(f, "Lab"),
            Self::Equations => write!(f, "Equations"),
        }
    }
}
