mod derivative_tests;
mod number_tests;
mod simplification_tests;
mod tree_tests;
