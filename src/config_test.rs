use super::*;

#[test]
fn env_port_defaults_when_unset() {
    let key = "__TEST_TI_PORT_UNSET_4411__";
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_port(key), Ok(DEFAULT_PORT));
}

#[test]
fn env_port_parses_valid_value() {
    let key = "__TEST_TI_PORT_VALID_4412__";
    unsafe { std::env::set_var(key, " 8080 ") };
    assert_eq!(env_port(key), Ok(8080));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_port_blank_falls_back_to_default() {
    let key = "__TEST_TI_PORT_BLANK_4413__";
    unsafe { std::env::set_var(key, "   ") };
    assert_eq!(env_port(key), Ok(DEFAULT_PORT));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_port_rejects_garbage_and_zero() {
    for (i, val) in ["http", "70000", "0", "-1"].iter().enumerate() {
        let key = format!("__TEST_TI_PORT_BAD_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(
            env_port(&key),
            Err(ConfigError::InvalidPort { var: key.clone(), value: (*val).to_owned() }),
            "expected rejection for {val:?}"
        );
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_path_ignores_blank_values() {
    let key = "__TEST_TI_SITE_ROOT_4414__";
    unsafe { std::env::set_var(key, "  ") };
    assert_eq!(env_path(key), None);
    unsafe { std::env::set_var(key, "/srv/site") };
    assert_eq!(env_path(key), Some(PathBuf::from("/srv/site")));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn invalid_port_error_names_the_variable() {
    let err = ConfigError::InvalidPort { var: "PORT".into(), value: "abc".into() };
    assert_eq!(err.to_string(), "invalid PORT: \"abc\" is not a TCP port");
}
