#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(solution) = sole::parse_str(data) {
        let printed = solution.to_string();
        let reparsed = sole::parse_str(&printed).expect("printed solution must parse again");
        assert_eq!(printed, reparsed.to_string());
    }
});
