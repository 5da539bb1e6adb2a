mod routes_tests;
mod stubs;
