use mister_bump::domain::{parse_descriptor, Descriptor, SuffixStyle};
use mister_bump::{format_version, resolve, ResolutionContext};

fn bump(raw: Option<&str>, branch: &str, style: SuffixStyle, increment: bool, prefix: &str) -> String {
    let ctx = ResolutionContext {
        version: parse_descriptor(raw, prefix).expect("descriptor should parse"),
        branch: branch.to_string(),
        style,
        increment,
        prefix: prefix.to_string(),
    };
    resolve(&ctx)
}

fn rc(raw: &str, branch: &str) -> String {
    bump(Some(raw), branch, SuffixStyle::ReleaseCandidate, true, "")
}

#[test]
fn test_format_round_trips_numeric_core() {
    for (major, minor, bugfix) in [(0, 0, 0), (0, 1, 0), (1, 2, 3), (10, 200, 3000), (u32::MAX - 1, 0, 7)] {
        let plain = format_version(major, minor, bugfix, None, SuffixStyle::ReleaseCandidate);
        let parsed = parse_descriptor(Some(format!("release-{}", plain).as_str()), "").unwrap();
        let version = parsed.version().expect("tagged").clone();
        assert_eq!(version.triple(), (major, minor, bugfix));
    }
}

#[test]
fn test_no_version_yet_is_always_first_candidate() {
    for branch in ["master", "main", "bugfix-0.2.0", "release-1.0.0", "feature/x", ""] {
        assert_eq!(bump(None, branch, SuffixStyle::ReleaseCandidate, true, ""), "0.1.0rc1");
    }
}

#[test]
fn test_final_on_master_closes_major_line() {
    assert_eq!(rc("release-0.3.0-final-1-gc68c", "master"), "1.0.0rc1");
}

#[test]
fn test_no_increment_renders_deviation() {
    assert_eq!(
        bump(Some("release-0.3.0-final-1-gc68c"), "master", SuffixStyle::DevRelease, false, ""),
        "0.3.0.dev1"
    );
}

#[test]
fn test_candidate_on_bugfix_branch_is_not_advanced() {
    assert_eq!(rc("release-0.2.0-1-gabcd", "bugfix-0.2.0"), "0.2.0rc1");
    assert_eq!(rc("release-0.2.0-2-gabcd", "bugfix-0.2.0"), "0.2.0rc2");
    assert_eq!(rc("release-0.2.0", "bugfix-0.2.0"), "0.2.0rc1");
}

#[test]
fn test_final_on_matching_bugfix_branch_advances_bugfix() {
    assert_eq!(rc("release-0.2.0-final", "bugfix-0.2.0"), "0.2.1rc1");
    assert_eq!(rc("release-0.2.0-final-0-g1f2e", "bugfix-0.2.0"), "0.2.1rc1");
}

#[test]
fn test_bugfix_branch_ignores_newer_master_line() {
    // master has moved on to 0.4.0, the bugfix branch only sees its own tag
    assert_eq!(rc("release-0.2.0-final-5-g9a8b", "bugfix-0.2.0"), "0.2.1rc5");
    assert_eq!(rc("release-0.4.0-final-5-g9a8b", "master"), "1.0.0rc5");
}

#[test]
fn test_overrides_from_documentation() {
    assert_eq!(rc("release-1.2.0-final-456", ""), "2.0.0rc456");
    assert_eq!(rc("release-1.2.0.final-456", ""), "2.0.0rc456");
    assert_eq!(
        bump(
            Some("fred/release-1.2.0.final-456"),
            "",
            SuffixStyle::ReleaseCandidate,
            true,
            "fred/"
        ),
        "2.0.0rc456"
    );
}

#[test]
fn test_malformed_descriptor_never_defaults() {
    for raw in ["v1.2.3", "1.2.3", "release-", "release-a.b.c"] {
        let err = parse_descriptor(Some(raw), "").unwrap_err();
        assert!(err.is_malformed_descriptor());
        assert!(err.to_string().contains(raw));
    }
}

#[test]
fn test_unincrementable_tag_is_rejected_before_resolving() {
    for raw in [
        "release-4294967295.0.0-final-1-gabcd",
        "release-0.4294967295.0-final-1-gabcd",
        "release-0.0.4294967295-final-1-gabcd",
    ] {
        let err = parse_descriptor(Some(raw), "").unwrap_err();
        assert!(err.is_malformed_descriptor(), "{} should be malformed", raw);
    }
}

#[test]
fn test_largest_accepted_components_advance() {
    assert_eq!(rc("release-4294967294.0.0-final-1-gabcd", "master"), "4294967295.0.0rc1");
    assert_eq!(
        rc("release-0.4294967294.0-final-2-gabcd", "bugfix-1.0.0"),
        "0.4294967295.0rc2"
    );
    assert_eq!(
        rc("release-0.0.4294967294-final-3-gabcd", "bugfix-0.0.0"),
        "0.0.4294967295rc3"
    );
}

#[test]
fn test_prefix_never_in_output() {
    let prefix = "fred/";
    let descriptors = [
        None,
        Some("fred/release-0.1.0"),
        Some("fred/release-0.1.0-final"),
        Some("fred/release-0.1.0-final-3-gabcd"),
        Some("fred/release-2.7.1-9-gabcd"),
    ];
    for raw in descriptors {
        for branch in ["fred/bugfix-0.1.0", "master", "fred/master"] {
            for style in [SuffixStyle::ReleaseCandidate, SuffixStyle::DevRelease] {
                for increment in [true, false] {
                    let out = bump(raw, branch, style, increment, prefix);
                    assert!(!out.contains("fred"), "{} leaked the prefix", out);
                }
            }
        }
    }
}

#[test]
fn test_prefixed_bugfix_branch() {
    assert_eq!(
        bump(
            Some("fred/release-0.1.0-final-3-gabcd"),
            "fred/bugfix-0.1.0",
            SuffixStyle::DevRelease,
            true,
            "fred/"
        ),
        "0.1.1.dev3"
    );
}

#[test]
fn test_no_version_yet_descriptor() {
    assert_eq!(parse_descriptor(None, "fred/").unwrap(), Descriptor::NoVersionYet);
}
