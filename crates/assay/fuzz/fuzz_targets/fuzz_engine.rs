//! Fuzz target for the check engine.
//!
//! Whatever loads must check without panicking, in both modes.

#![no_main]

use assay::{Engine, Parser, SchemaConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 50_000 {
        return;
    }

    let Ok(dataset) = Parser::new().parse_bytes(data) else {
        return;
    };

    let report = Engine::new().run(&dataset);
    assert!(report.error_ratio >= 0.0);

    if let Ok(engine) = Engine::schema_aware(SchemaConfig::default()) {
        let report = engine.run(&dataset);
        assert_eq!(report.results.last().map(|r| r.label()), Some("Error Ratio"));
    }
});
