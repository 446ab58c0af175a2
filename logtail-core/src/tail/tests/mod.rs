mod params_tests;
mod redact_tests;
mod window_tests;
