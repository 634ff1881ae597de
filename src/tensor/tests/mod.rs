mod new_tests;
mod ops_tests;
