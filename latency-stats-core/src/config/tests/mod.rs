mod histogram_config_tests;
