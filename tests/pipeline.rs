use lemma_core::config::{
    NOT_IN_REFERENCE, REFERENCE_LEMMATIZED, REFERENCE_SKIPPED, TARGET_LEMMATIZED, TARGET_SKIPPED,
};
use lemma_core::core::types::{SkipKey, SkipReason};
use lemma_core::persistence::{load_frequency_table, load_skip_table};
use lemma_core::{run, Config, LemmaError};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

fn counts(path: &Path) -> Vec<(String, u64)> {
    load_frequency_table(path)
        .unwrap()
        .iter()
        .map(|(w, c)| (w.clone(), c))
        .collect()
}

#[test]
fn cats_and_dogs() {
    let dir = tempdir().unwrap();
    let target = write(dir.path(), "target.txt", "I saw 3 cats. I saw 3 dogs.");
    let reference = write(dir.path(), "reference.txt", "I saw one cat.");
    let out = dir.path().join("out");

    let report = run(&Config::new(&target, &reference).with_output_dir(&out)).unwrap();

    assert_eq!(report.target.frequencies.get(&"see".to_string()), Some(2));
    assert_eq!(report.target.frequencies.get(&"cat".to_string()), Some(1));
    assert_eq!(report.target.frequencies.get(&"dog".to_string()), Some(1));
    assert!(!report.target.frequencies.contains(&"3".to_string()));
    assert_eq!(report.reference.frequencies.get(&"one".to_string()), Some(1));

    assert_eq!(counts(&out.join(NOT_IN_REFERENCE)), vec![("dog".to_string(), 1)]);
    assert_eq!(
        counts(&out.join(TARGET_LEMMATIZED)),
        vec![("see".to_string(), 2), ("cat".to_string(), 1), ("dog".to_string(), 1)]
    );

    let skipped = load_skip_table(&out.join(TARGET_SKIPPED)).unwrap();
    let pronoun = SkipKey { token: "I".into(), lemma: "i".into(), reason: SkipReason::SingleLetter };
    assert_eq!(skipped.get(&pronoun), Some(2));
}

#[test]
fn writes_all_five_files_with_headers() {
    let dir = tempdir().unwrap();
    let target = write(dir.path(), "t.txt", "Prices rose to $21 on 日本 markets.");
    let reference = write(dir.path(), "r.txt", "Markets rose.");
    let out = dir.path().join("a").join("b");

    run(&Config::new(&target, &reference).with_output_dir(&out)).unwrap();

    for name in [TARGET_LEMMATIZED, REFERENCE_LEMMATIZED, NOT_IN_REFERENCE] {
        let text = fs::read_to_string(out.join(name)).unwrap();
        assert!(text.starts_with("word,frequency\n"), "{name}: {text}");
    }
    for name in [TARGET_SKIPPED, REFERENCE_SKIPPED] {
        let text = fs::read_to_string(out.join(name)).unwrap();
        assert!(text.starts_with("token,lemma,reason,frequency\n"), "{name}: {text}");
    }

    let skipped = load_skip_table(&out.join(TARGET_SKIPPED)).unwrap();
    assert!(skipped.iter().any(|(key, _)| key.reason == SkipReason::ContainsCjk && key.token.contains("日本")));

    let leftovers: Vec<_> = fs::read_dir(&out).unwrap().map(|e| e.unwrap().file_name()).collect();
    assert_eq!(leftovers.len(), 5, "unexpected files: {leftovers:?}");
}

#[test]
fn difference_ignores_reference_counts() {
    let dir = tempdir().unwrap();
    let target = write(dir.path(), "t.txt", "apple apple banana cherry");
    let reference = write(dir.path(), "r.txt", "apple");
    let out = dir.path().join("out");

    let report = run(&Config::new(&target, &reference).with_output_dir(&out)).unwrap();
    let diff: Vec<(String, u64)> = report.difference.sorted().into_iter().map(|(w, c)| (w.clone(), c)).collect();
    assert_eq!(diff, vec![("banana".to_string(), 1), ("cherry".to_string(), 1)]);
}

#[test]
fn fullwidth_and_list_markers_are_normalized_before_counting() {
    let dir = tempdir().unwrap();
    let target = write(dir.path(), "t.txt", "1.Ｗｏｒｄｓ、ｗｏｒｄｓ。\n2.More words (here)");
    let reference = write(dir.path(), "r.txt", "");
    let out = dir.path().join("out");

    let report = run(&Config::new(&target, &reference).with_output_dir(&out)).unwrap();
    assert_eq!(report.target.frequencies.get(&"word".to_string()), Some(3));
    assert_eq!(report.target.frequencies.get(&"here".to_string()), Some(1));
    assert!(report.reference.frequencies.is_empty());
    assert_eq!(report.difference.len(), report.target.frequencies.len());
}

#[test]
fn missing_input_fails_before_writing_anything() {
    let dir = tempdir().unwrap();
    let target = write(dir.path(), "t.txt", "some words");
    let out = dir.path().join("out");

    let err = run(&Config::new(&target, dir.path().join("missing.txt")).with_output_dir(&out)).unwrap_err();
    assert!(matches!(err, LemmaError::Read { ref path, .. } if path.ends_with("missing.txt")));
    assert!(!out.exists());
}

#[test]
fn inflected_verbs_reduce_to_their_dictionary_form() {
    let dir = tempdir().unwrap();
    let target = write(dir.path(), "t.txt", "She closed the door because it pleased her.");
    let reference = write(dir.path(), "r.txt", "Close the door. Please her.");
    let out = dir.path().join("out");

    let report = run(&Config::new(&target, &reference).with_output_dir(&out)).unwrap();
    assert_eq!(report.target.frequencies.get(&"close".to_string()), Some(1));
    assert_eq!(report.target.frequencies.get(&"please".to_string()), Some(1));

    let diff: Vec<&str> = report.difference.iter().map(|(w, _)| w.as_str()).collect();
    assert!(diff.contains(&"because"), "{diff:?}");
    for word in ["close", "please", "clos", "pleas", "door", "the"] {
        assert!(!diff.contains(&word), "{word} should not be new: {diff:?}");
    }
}

#[test]
fn lemma_overrides_replace_tagger_lemmas() {
    let dir = tempdir().unwrap();
    let overrides = write(dir.path(), "spelling.json", r#"{ "lemmas": { "colour": "color", "colours": "color" } }"#);
    let target = write(dir.path(), "t.txt", "Colours fade.");
    let reference = write(dir.path(), "r.txt", "The color faded.");
    let out = dir.path().join("out");

    let config = Config::new(&target, &reference)
        .with_output_dir(&out)
        .with_lemma_overrides(&overrides);
    let report = run(&config).unwrap();
    assert_eq!(report.target.frequencies.get(&"color".to_string()), Some(1));
    assert!(report.difference.is_empty(), "{:?}", report.difference);
}

#[test]
fn malformed_overrides_fail_before_writing_anything() {
    let dir = tempdir().unwrap();
    let overrides = write(dir.path(), "broken.json", "{ lemmas");
    let target = write(dir.path(), "t.txt", "words");
    let out = dir.path().join("out");

    let config = Config::new(&target, &target)
        .with_output_dir(&out)
        .with_lemma_overrides(&overrides);
    let err = run(&config).unwrap_err();
    assert!(matches!(err, LemmaError::Overrides { .. }));
    assert!(!out.exists());
}

#[test]
fn failure_moving_the_third_file_leaves_no_outputs() {
    let dir = tempdir().unwrap();
    let target = write(dir.path(), "t.txt", "I saw 3 cats. I saw 3 dogs.");
    let reference = write(dir.path(), "r.txt", "I saw one cat.");
    let out = dir.path().join("out");

    // the difference file is moved into place third; a non-empty directory
    // at its path makes that rename fail
    let blocker = out.join(NOT_IN_REFERENCE);
    fs::create_dir_all(&blocker).unwrap();
    fs::write(blocker.join("keep.txt"), "x").unwrap();

    let err = run(&Config::new(&target, &reference).with_output_dir(&out)).unwrap_err();
    assert!(matches!(err, LemmaError::Persist { ref path, .. } if path == &blocker));

    for name in [TARGET_LEMMATIZED, REFERENCE_LEMMATIZED, TARGET_SKIPPED, REFERENCE_SKIPPED] {
        assert!(!out.join(name).exists(), "{name} was left behind");
    }
    let leftovers: Vec<_> = fs::read_dir(&out).unwrap().map(|e| e.unwrap().file_name()).collect();
    assert_eq!(leftovers, [NOT_IN_REFERENCE], "unexpected files: {leftovers:?}");
    assert!(blocker.join("keep.txt").is_file());
}
