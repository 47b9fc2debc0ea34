mod connection_validator_tests;
