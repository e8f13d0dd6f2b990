mod transformers_tests;
mod schema_tests;
