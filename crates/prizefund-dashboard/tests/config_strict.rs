#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use prizefund_dashboard::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8501"
fund:
  principle: 100000 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8501");
    assert_eq!(cfg.server.max_score, 1000);
    assert_eq!(cfg.server.max_sessions, 10_000);
    assert_eq!(cfg.fund.principal, 100_000);
    assert_eq!(cfg.fund.interest_rate_bps, 900);
    assert_eq!(cfg.fund.public_share_bps, 6_500);
}

#[test]
fn shipped_config_parses() {
    let s = std::fs::read_to_string("../../prizefund.yaml").unwrap();
    let cfg = config::load_from_str(&s).expect("must parse");
    assert_eq!(cfg.server.session_idle_secs, 3600);
    assert!(cfg.site.subtitle.contains("Tagira"));
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn out_of_range_values_rejected() {
    let cases = [
        "version: 1\nserver:\n  session_idle_secs: 5\n",
        "version: 1\nserver:\n  max_score: 0\n",
        "version: 1\nserver:\n  max_sessions: 0\n",
        "version: 1\nfund:\n  public_share_bps: 10001\n",
        "version: 1\nfund:\n  interest_rate_bps: 20000\n",
    ];
    for case in cases {
        let err = config::load_from_str(case).expect_err(case);
        assert_eq!(err.code().as_str(), "BAD_REQUEST", "{case}");
    }
}
