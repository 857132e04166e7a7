//! Quantities describing spring motion.

use crate::fph;
use nalgebra::{Point3, UnitVector3, Vector3};

/// A position in 3D space.
pub type Position = Point3<fph>;

/// A displacement between two positions in 3D space.
pub type Displacement = Vector3<fph>;

/// A unit vector in 3D space.
pub type Direction = UnitVector3<fph>;
