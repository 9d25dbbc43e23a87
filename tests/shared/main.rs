mod duration_literal_tests;
