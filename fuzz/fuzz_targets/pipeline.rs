#![no_main]

use libfuzzer_sys::fuzz_target;
use rlint::{LintConfig, analyze};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Tokenize, parse and check; only a resource limit may fail the pass
        let config = LintConfig::new().with_max_nesting_depth(64);
        let _ = analyze(s, &config);
    }
});
