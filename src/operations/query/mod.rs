mod check_symmetry;

pub use check_symmetry::CheckSymmetry;
