//! Fuzz target for the delimited-text loader.
//!
//! Arbitrary bytes must either load or fail with an error; never panic.

#![no_main]

use assay::Parser;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let parser = Parser::new();
    if let Ok(dataset) = parser.parse_bytes(data) {
        assert_eq!(
            dataset.cell_count(),
            dataset.row_count() * dataset.column_count()
        );
    }
});
