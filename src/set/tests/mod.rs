mod cursor_tests;
