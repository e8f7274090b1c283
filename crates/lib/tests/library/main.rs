mod common;

mod bind_helper_tests;
