use std::fs;

use jslet::evaluate;
use walkdir::WalkDir;

#[test]
fn fixture_scripts_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/fixtures").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "js")
                                      })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                           panic!("Failed to read {expected_path:?}: {e}")
                       });

        let lines = match evaluate(&source) {
            Ok(lines) => lines,
            Err(e) => panic!("Fixture {path:?} failed: {e}"),
        };

        assert_eq!(lines.join("\n"),
                   expected.trim_end_matches('\n'),
                   "output mismatch for {path:?}");
        count += 1;
    }

    assert!(count > 0, "No fixture scripts found in tests/fixtures");
}
