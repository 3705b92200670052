//! Option exercise styles.
//!
//! An [`ExerciseType`] decides how a lattice node combines its immediate
//! exercise value with the discounted continuation value. The backward
//! induction loop is shared; only this per-node reducer differs.

use crate::Real;

/// Type of exercise right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExerciseType {
    /// Can only be exercised at expiry.
    European,
    /// Can be exercised at any node up to expiry.
    #[default]
    American,
}

impl ExerciseType {
    /// Value of an interior node given its intrinsic (immediate exercise)
    /// value and its discounted continuation value.
    ///
    /// ```
    /// use bl_core::ExerciseType;
    /// assert_eq!(ExerciseType::American.node_value(5.0, 3.0), 5.0);
    /// assert_eq!(ExerciseType::European.node_value(5.0, 3.0), 3.0);
    /// ```
    pub fn node_value(self, intrinsic: Real, continuation: Real) -> Real {
        match self {
            ExerciseType::European => continuation,
            ExerciseType::American => intrinsic.max(continuation),
        }
    }

    /// Lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            ExerciseType::European => "european",
            ExerciseType::American => "american",
        }
    }
}
