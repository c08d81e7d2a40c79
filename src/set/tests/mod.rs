mod bitand_tests;
mod enumerate_tests;
mod overflow_tests;
