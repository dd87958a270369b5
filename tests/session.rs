//! End-to-end tests of the session driver.

use enigma::config::load_config;
use enigma::enforcement::{EnforcementBuilder, ViolationError, ViolationStrategy};
use enigma::session::{Session, SessionError};

fn session() -> Session {
    Session::new(load_config(include_str!("fixtures/default.conf")).unwrap())
}

#[test]
fn processes_trivial_input() {
    let output = session()
        .process(include_str!("fixtures/trivial.in"))
        .unwrap();
    assert_eq!(output, include_str!("fixtures/trivial.out"));
}

#[test]
fn strict_rules_pass_historical_layout() {
    let rules = EnforcementBuilder::standard()
        .on_violation(ViolationStrategy::Abort)
        .build();
    let output = session()
        .with_rules(rules)
        .process(include_str!("fixtures/trivial.in"))
        .unwrap();
    assert_eq!(output, include_str!("fixtures/trivial.out"));
}

#[test]
fn strict_rules_reject_thin_wheel_under_pawl() {
    let rules = EnforcementBuilder::standard().build();
    let err = session()
        .with_rules(rules)
        .process("* B III Beta IV I AXLE\nHELLO\n")
        .unwrap_err();
    assert_eq!(
        err,
        SessionError::Violations(vec![
            ViolationError::MovingRotorOutsidePawls {
                rotor: "III".to_string(),
                slot: 1,
            },
            ViolationError::StaticRotorInPawlSlot {
                rotor: "Beta".to_string(),
                slot: 2,
            },
        ])
    );
}

#[test]
fn errors_surface_from_every_layer() {
    assert_eq!(
        session().process("HELLO\n"),
        Err(SessionError::NoConfiguration)
    );
    assert_eq!(
        session()
            .process("* B Beta III IV IX AXLE\n")
            .unwrap_err()
            .to_string(),
        "Rotor 'IX' does not exist"
    );
    assert!(session()
        .process("* B Beta III IV I AXLE\nhello\n")
        .is_err());
}
