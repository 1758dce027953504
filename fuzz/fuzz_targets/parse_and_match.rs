#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, String)| {
    let (path, candidate) = data;

    if let Ok(tokens) = routex::parse(&path) {
        let options = routex::Options::default();
        let _ = routex::tokens_to_pattern(&tokens, &options);
        let _ = routex::match_path(path.as_str(), &candidate, &options);

        if let Ok(builder) = routex::tokens_to_builder(&tokens) {
            let _ = builder.render(&Default::default());
        }
    }
});
