use approx::assert_relative_eq;
use mug_types::*;
use param_store::*;

// ── Presets ────────────────────────────────────────────────────────────────

#[test]
fn every_preset_applies_cleanly() {
    let mut store = ParameterStore::new();
    for preset in Preset::ALL {
        store.apply_named_preset(preset).unwrap();
        assert!(store.is_fully_valid(), "{preset:?} left errors");
        assert_eq!(store.current_values(), preset.values());
    }
}

#[test]
fn maximum_to_minimum_switch_succeeds() {
    // Applied field by field this would pass through
    // diameter 70 with handle diameter 91.
    let mut store = ParameterStore::new();
    store.apply_named_preset(Preset::Maximum).unwrap();
    store.apply_named_preset(Preset::Minimum).unwrap();
    assert_eq!(store.current_values(), Preset::Minimum.values());
    assert!(store.is_fully_valid());
}

#[test]
fn presets_pass_under_strict_config() {
    let mut store = ParameterStore::with_config(ConstraintConfig::strict()).unwrap();
    for preset in Preset::ALL {
        store.apply_named_preset(preset).unwrap();
    }
    assert!(store.is_fully_valid());
}

#[test]
fn inconsistent_preset_commits_nothing() {
    let mut store = ParameterStore::new();
    let bad = MugParameters::new(20.0, 95.0, 12.0, 33.25, 66.5);

    let errors = store.apply_preset(&bad).unwrap_err();

    assert!(!errors.is_empty());
    assert_eq!(store.current_values(), Preset::Average.values());
    assert!(!store.is_fully_valid());
    let kinds: Vec<_> = errors.iter().map(|e| e.kind()).collect();
    assert!(kinds.contains(&ParameterKind::Thickness));
    assert!(kinds.contains(&ParameterKind::HandleDiameter));
    assert!(store.error(ParameterKind::Thickness).is_some());
    assert!(store.error(ParameterKind::Height).is_none());
}

#[test]
fn valid_preset_clears_previous_errors() {
    let mut store = ParameterStore::new();
    store.set_parameter_value(ParameterKind::Thickness, 50.0).unwrap_err();
    store.set_parameter_text(ParameterKind::Height, "tall").unwrap_err();
    assert!(!store.is_fully_valid());

    store.apply_named_preset(Preset::Average).unwrap();

    assert!(store.is_fully_valid());
    assert_eq!(store.errors().count(), 0);
}

// ── Standalone range ───────────────────────────────────────────────────────

#[test]
fn negative_and_garbage_rejected_for_every_kind() {
    let mut store = ParameterStore::new();
    let before = store.current_values();

    for kind in ParameterKind::ALL {
        let err = store.set_parameter_value(kind, -1.0).unwrap_err();
        assert_eq!(err.code(), ErrorCode::OutOfRange, "{kind:?}");
        assert_eq!(store.current_values().get(kind), before.get(kind));

        let err = store.set_parameter_text(kind, "12mm").unwrap_err();
        assert_eq!(err.code(), ErrorCode::Unparsable, "{kind:?}");
        assert_eq!(store.current_values().get(kind), before.get(kind));
        assert!(!store.error_message(kind).is_empty());
    }
    assert_eq!(store.current_values(), before);
}

#[test]
fn zero_is_out_of_range() {
    let mut store = ParameterStore::new();
    let err = store.set_parameter_value(ParameterKind::Diameter, 0.0).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::OutOfRange {
            kind: ParameterKind::Diameter,
            ..
        }
    ));
}

#[test]
fn above_absolute_bound_is_out_of_range() {
    let mut store = ParameterStore::new();
    let err = store.set_parameter_value(ParameterKind::Height, 5000.0).unwrap_err();
    match err {
        ValidationError::OutOfRange { value, max, .. } => {
            assert_eq!(value, 5000.0);
            assert_eq!(max, ConstraintConfig::default().max_dimension);
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
}

#[test]
fn empty_text_is_unparsable_not_zero() {
    let mut store = ParameterStore::new();
    let err = store.set_parameter_text(ParameterKind::Diameter, "").unwrap_err();
    assert_eq!(err.code(), ErrorCode::Unparsable);
    assert_eq!(store.current_values().diameter, 87.0);
}

#[test]
fn comma_decimal_text_is_accepted() {
    let mut store = ParameterStore::new();
    store.set_parameter_text(ParameterKind::HandleLength, "30,5").unwrap();
    assert_relative_eq!(store.current_values().handle_length, 30.5);
    assert!(store.is_fully_valid());
}

// ── Cross-parameter constraints ────────────────────────────────────────────

#[test]
fn thickness_at_or_above_radius_is_constraint_violation() {
    let mut store = ParameterStore::new();
    for thickness in [43.5, 50.0, 80.0] {
        let err = store
            .set_parameter_value(ParameterKind::Thickness, thickness)
            .unwrap_err();
        match &err {
            ValidationError::ConstraintViolated {
                kind,
                constraint,
                limit,
                ..
            } => {
                assert_eq!(*kind, ParameterKind::Thickness);
                assert_eq!(*constraint, Constraint::WallThickness);
                assert_relative_eq!(*limit, 43.5);
            }
            other => panic!("expected ConstraintViolated, got {other:?}"),
        }
        assert_eq!(store.current_values().thickness, 7.0);
    }
}

#[test]
fn shrinking_diameter_below_wall_is_rejected() {
    let mut store = ParameterStore::new();
    store.set_parameter_value(ParameterKind::Thickness, 10.0).unwrap();

    let err = store.set_parameter_value(ParameterKind::Diameter, 15.0).unwrap_err();

    assert_eq!(err.code(), ErrorCode::ConstraintViolated);
    assert_eq!(
        err.offending_kinds(),
        vec![ParameterKind::Diameter, ParameterKind::Thickness]
    );
    assert_eq!(store.current_values().diameter, 87.0);
}

#[test]
fn handle_length_outside_height_band_is_rejected() {
    let mut store = ParameterStore::new();

    let short = store.set_parameter_value(ParameterKind::HandleLength, 10.0).unwrap_err();
    assert!(matches!(
        short,
        ValidationError::ConstraintViolated {
            constraint: Constraint::HandleLengthToHeight,
            ..
        }
    ));

    let long = store.set_parameter_value(ParameterKind::HandleLength, 60.0).unwrap_err();
    assert_eq!(long.code(), ErrorCode::ConstraintViolated);
    assert_eq!(store.current_values().handle_length, 33.25);
}

#[test]
fn handle_diameter_larger_than_body_is_rejected() {
    let mut store = ParameterStore::new();
    let err = store
        .set_parameter_value(ParameterKind::HandleDiameter, 90.0)
        .unwrap_err();
    match err {
        ValidationError::ConstraintViolated { constraint, .. } => {
            assert!(constraint.involves(ParameterKind::HandleDiameter));
        }
        other => panic!("expected ConstraintViolated, got {other:?}"),
    }
}

#[test]
fn lowering_height_checks_handle_rules() {
    let mut store = ParameterStore::new();
    // The stored handle no longer fits a 60 mm body.
    let err = store.set_parameter_value(ParameterKind::Height, 60.0).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConstraintViolated);
    assert_eq!(err.kind(), ParameterKind::Height);
    assert_eq!(store.current_values().height, 95.0);
}

#[test]
fn constraint_is_checked_against_stored_values_only() {
    let mut store = ParameterStore::new();
    // Rejected diameter must not be used by the next thickness check.
    store.set_parameter_value(ParameterKind::Diameter, 12.0).unwrap_err();
    store.set_parameter_value(ParameterKind::Thickness, 9.0).unwrap();
    assert_eq!(store.current_values().thickness, 9.0);
}

// ── Error state ────────────────────────────────────────────────────────────

#[test]
fn successful_write_clears_only_its_own_error() {
    let mut store = ParameterStore::new();
    store.set_parameter_value(ParameterKind::Thickness, 50.0).unwrap_err();
    store.set_parameter_text(ParameterKind::Height, "?").unwrap_err();
    assert!(!store.is_fully_valid());

    store.set_parameter_value(ParameterKind::Thickness, 8.0).unwrap();
    assert!(store.error_message(ParameterKind::Thickness).is_empty());
    assert!(!store.is_fully_valid());

    store.set_parameter_text(ParameterKind::Height, "100").unwrap();
    assert!(store.is_fully_valid());
}

#[test]
fn validated_values_reports_blocking_errors() {
    let mut store = ParameterStore::new();
    assert_eq!(store.validated_values().unwrap(), Preset::Average.values());

    store.set_parameter_value(ParameterKind::Thickness, 50.0).unwrap_err();
    let blocking = store.validated_values().unwrap_err();
    assert_eq!(blocking.len(), 1);
    assert_eq!(blocking[0].0, ParameterKind::Thickness);
}

#[test]
fn repeated_valid_write_is_idempotent() {
    let mut store = ParameterStore::new();
    store.set_parameter_value(ParameterKind::Height, 100.0).unwrap();
    let first = store.current_values();
    store.set_parameter_value(ParameterKind::Height, 100.0).unwrap();
    assert_eq!(store.current_values(), first);
    assert!(store.is_fully_valid());
}

#[test]
fn error_message_names_the_field() {
    let mut store = ParameterStore::new();
    store.set_parameter_value(ParameterKind::Thickness, 50.0).unwrap_err();
    let message = store.error_message(ParameterKind::Thickness);
    assert!(message.contains("wall thickness"), "{message}");
    assert!(message.contains("diameter"), "{message}");
}

// ── Scenario ───────────────────────────────────────────────────────────────

#[test]
fn scenario_thickness_round_trip_from_average() {
    let mut store = ParameterStore::new();
    store.apply_named_preset(Preset::Average).unwrap();
    assert!(store.is_fully_valid());

    store.set_parameter_value(ParameterKind::Thickness, 50.0).unwrap_err();
    assert!(!store.is_fully_valid());
    assert!(!store.error_message(ParameterKind::Thickness).is_empty());
    for kind in ParameterKind::ALL {
        if kind != ParameterKind::Thickness {
            assert!(store.error_message(kind).is_empty(), "{kind:?}");
            assert_eq!(
                store.current_values().get(kind),
                Preset::Average.values().get(kind)
            );
        }
    }

    store.set_parameter_value(ParameterKind::Thickness, 7.0).unwrap();
    assert!(store.is_fully_valid());
    assert_eq!(store.current_values(), Preset::Average.values());
}
