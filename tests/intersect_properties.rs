use wildcard_intersect_rs::{Intersection, Pattern, intersect_patterns};

fn all_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    let mut frontier = vec![String::new()];

    for _ in 0..max_len {
        let mut next = Vec::with_capacity(frontier.len() * alphabet.len());
        for s in &frontier {
            for &c in alphabet {
                let mut grown = s.clone();
                grown.push(c);
                next.push(grown);
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }

    out
}

fn well_formed_patterns() -> Vec<String> {
    all_strings(&['a', 'b', '*'], 4)
        .into_iter()
        .filter(|p| Pattern::new(p).is_well_formed())
        .collect()
}

fn intersect(x: &str, y: &str) -> Intersection {
    intersect_patterns(x, y)
        .unwrap_or_else(|err| panic!("'{x}' and '{y}' should intersect: {err}"))
}

#[test]
fn intersect_when_arguments_swapped_then_result_is_unchanged() {
    let patterns = well_formed_patterns();
    for x in &patterns {
        for y in &patterns {
            assert_eq!(intersect(x, y), intersect(y, x), "x='{x}' y='{y}'");
        }
    }
}

#[test]
fn intersect_when_pattern_meets_itself_then_returns_it() {
    for x in well_formed_patterns() {
        assert_eq!(intersect(&x, &x), Intersection::Pattern(x.clone()), "x='{x}'");
    }
}

#[test]
fn intersect_when_literal_meets_its_wildcard_extension_then_returns_literal() {
    for x in all_strings(&['a', 'b'], 4) {
        let extended = format!("{x}*");
        assert_eq!(
            intersect(&x, &extended),
            Intersection::Pattern(x.clone()),
            "x='{x}'"
        );
    }
}

#[test]
fn intersect_when_result_computed_then_it_is_well_formed() {
    let patterns = well_formed_patterns();
    for x in &patterns {
        for y in &patterns {
            if let Intersection::Pattern(out) = intersect(x, y) {
                assert!(
                    Pattern::new(&out).is_well_formed(),
                    "x='{x}' y='{y}' produced '{out}'"
                );
            }
        }
    }
}

#[test]
fn intersect_when_string_matches_both_then_result_matches_it() {
    let patterns = well_formed_patterns();
    let texts = all_strings(&['a', 'b'], 6);

    for x in &patterns {
        for y in &patterns {
            let out = intersect(x, y);
            let (px, py) = (Pattern::new(x), Pattern::new(y));

            for text in texts.iter().filter(|t| px.matches(t) && py.matches(t)) {
                match &out {
                    Intersection::Pattern(p) => assert!(
                        Pattern::new(p).matches(text),
                        "x='{x}' y='{y}' result '{p}' misses '{text}'"
                    ),
                    Intersection::Empty => {
                        panic!("x='{x}' y='{y}' reported empty but both match '{text}'")
                    }
                }
            }
        }
    }
}

#[test]
fn intersect_when_no_compression_needed_then_result_is_exact() {
    let patterns = well_formed_patterns();
    let texts = all_strings(&['a', 'b'], 6);

    // without facing wildcards the result is one of the inputs or empty
    for x in &patterns {
        for y in &patterns {
            let (px, py) = (Pattern::new(x), Pattern::new(y));
            if px.has_wildcard() && py.has_wildcard() {
                continue;
            }

            let out = intersect(x, y);
            for text in &texts {
                let expected = px.matches(text) && py.matches(text);
                let actual = out
                    .as_pattern()
                    .is_some_and(|p| Pattern::new(p).matches(text));
                assert_eq!(actual, expected, "x='{x}' y='{y}' text='{text}'");
            }
        }
    }
}
