use sql_dam::utils::config::{get_env_flag, get_env_or_default, get_env_or_none, parse_flag};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("DAM_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("DAM_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("DAM_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("DAM_MISSING_VAR");
        let result: u32 = get_env_or_default("DAM_MISSING_VAR", 5);
        assert_eq!(result, 5);
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("DAM_TEST_VAR_INVALID", "not_a_bool");
        let result: bool = get_env_or_default("DAM_TEST_VAR_INVALID", false);
        assert!(!result);
        env::remove_var("DAM_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("DAM_TEST_VAR_OPTION", "123");
        let result: Option<u32> = get_env_or_none("DAM_TEST_VAR_OPTION");
        assert_eq!(result, Some(123));
        env::remove_var("DAM_TEST_VAR_OPTION");

        let missing: Option<u32> = get_env_or_none("DAM_TEST_VAR_OPTION");
        assert_eq!(missing, None);
    }
}

#[test]
fn test_blank_values_count_as_unset() {
    unsafe {
        env::set_var("DAM_TEST_VAR_BLANK", "   ");
        let result: Option<String> = get_env_or_none("DAM_TEST_VAR_BLANK");
        assert_eq!(result, None);
        assert_eq!(get_env_or_default("DAM_TEST_VAR_BLANK", 7u32), 7);
        env::remove_var("DAM_TEST_VAR_BLANK");
    }
}

#[test]
fn test_values_are_trimmed() {
    unsafe {
        env::set_var("DAM_TEST_VAR_PADDED", " 42 ");
        assert_eq!(get_env_or_default("DAM_TEST_VAR_PADDED", 0u32), 42);
        env::remove_var("DAM_TEST_VAR_PADDED");
    }
}

#[test]
fn test_parse_flag() {
    for on in ["1", "true", "YES", " on "] {
        assert_eq!(parse_flag(on), Some(true), "{on}");
    }
    for off in ["0", "False", "no", "OFF"] {
        assert_eq!(parse_flag(off), Some(false), "{off}");
    }
    assert_eq!(parse_flag("maybe"), None);
}

#[test]
fn test_get_env_flag() {
    unsafe {
        env::set_var("DAM_TEST_FLAG_ON", "yes");
        env::set_var("DAM_TEST_FLAG_BAD", "sometimes");
        env::remove_var("DAM_TEST_FLAG_MISSING");

        assert!(get_env_flag("DAM_TEST_FLAG_ON", false));
        assert!(get_env_flag("DAM_TEST_FLAG_BAD", true));
        assert!(!get_env_flag("DAM_TEST_FLAG_MISSING", false));

        env::remove_var("DAM_TEST_FLAG_ON");
        env::remove_var("DAM_TEST_FLAG_BAD");
    }
}
