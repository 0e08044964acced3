use super::*;

fn env_with(f: impl FnOnce(&mut EnvironmentConfig)) -> EnvironmentConfig {
    let mut env = EnvironmentConfig::default();
    f(&mut env);
    env
}

#[test]
fn test_empty_environment_keeps_intent() {
    let env = EnvironmentConfig::default();
    assert_eq!(
        env.apply_color_config(TerminalCapsDetectIntent::Auto),
        TerminalCapsDetectIntent::Auto
    );
    assert_eq!(
        env.apply_color_config(TerminalCapsDetectIntent::Always),
        TerminalCapsDetectIntent::Always
    );
}

#[test]
fn test_no_color_disables() {
    let env = env_with(|e| e.no_color = Some("1".into()));
    assert_eq!(
        env.apply_color_config(TerminalCapsDetectIntent::Auto),
        TerminalCapsDetectIntent::Never
    );
}

#[test]
fn test_empty_no_color_is_ignored() {
    let env = env_with(|e| e.no_color = Some(String::new()));
    assert_eq!(
        env.apply_color_config(TerminalCapsDetectIntent::Auto),
        TerminalCapsDetectIntent::Auto
    );
}

#[test]
fn test_clicolor_zero_disables() {
    let env = env_with(|e| e.clicolor = Some("0".into()));
    assert_eq!(
        env.apply_color_config(TerminalCapsDetectIntent::Always),
        TerminalCapsDetectIntent::Never
    );
}

#[test]
fn test_force_color_overrides_no_color() {
    let env = env_with(|e| {
        e.clicolor = Some("0".into());
        e.no_color = Some("1".into());
        e.force_color = Some("1".into());
    });
    assert_eq!(
        env.apply_color_config(TerminalCapsDetectIntent::Auto),
        TerminalCapsDetectIntent::Always
    );
}

#[test]
fn test_force_color_false_and_garbage() {
    let off = env_with(|e| e.force_color = Some("false".into()));
    assert_eq!(
        off.apply_color_config(TerminalCapsDetectIntent::Always),
        TerminalCapsDetectIntent::Never
    );

    let garbage = env_with(|e| e.force_color = Some("maybe".into()));
    assert_eq!(
        garbage.apply_color_config(TerminalCapsDetectIntent::Auto),
        TerminalCapsDetectIntent::Auto
    );
}

#[test]
fn test_ci_beats_force_color() {
    let env = env_with(|e| {
        e.ci = Some("true".into());
        e.force_color = Some("1".into());
    });
    assert!(env.is_ci());
    assert_eq!(
        env.apply_color_config(TerminalCapsDetectIntent::Always),
        TerminalCapsDetectIntent::Never
    );
}
