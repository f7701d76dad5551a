mod mapping_invariants_tests;
