use std::path::PathBuf;
use studybuddy::cli::parse_args;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_no_args() {
    let parsed = parse_args(&[]).unwrap();
    assert!(!parsed.help);
    assert_eq!(parsed.root, None);
}

#[test]
fn test_all_options() {
    let parsed = parse_args(&args(&["-r", "/tmp/sb", "--faq", "faq.json", "-t", "0.4"])).unwrap();
    assert_eq!(parsed.root, Some(PathBuf::from("/tmp/sb")));
    assert_eq!(parsed.faq_path, Some(PathBuf::from("faq.json")));
    assert_eq!(parsed.threshold, Some(0.4));
}

#[test]
fn test_bad_threshold() {
    assert!(parse_args(&args(&["--threshold", "abc"])).is_err());
    assert!(parse_args(&args(&["--threshold", "2"])).is_err());
    assert!(parse_args(&args(&["--threshold"])).is_err());
}

#[test]
fn test_help_and_unknown() {
    assert!(parse_args(&args(&["--help"])).unwrap().help);
    assert!(parse_args(&args(&["--bogus"])).is_err());
}
