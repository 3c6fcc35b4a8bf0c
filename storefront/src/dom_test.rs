use super::*;

// =============================================================
// is_loading
// =============================================================

#[test]
fn loading_state_waits_for_dom() {
    assert!(is_loading("loading"));
}

#[test]
fn parsed_states_mount_immediately() {
    assert!(!is_loading("interactive"));
    assert!(!is_loading("complete"));
    assert!(!is_loading(""));
}

// =============================================================
// next_flash_generation
// =============================================================

#[test]
fn first_flash_is_generation_one() {
    assert_eq!(next_flash_generation(None), 1);
}

#[test]
fn repeat_flash_supersedes_pending_one() {
    let first = next_flash_generation(None);
    let second = next_flash_generation(Some(&first.to_string()));
    assert_eq!(second, 2);
    assert_ne!(first.to_string(), second.to_string());
}

#[test]
fn garbled_generation_restarts() {
    assert_eq!(next_flash_generation(Some("abc")), 1);
    assert_eq!(next_flash_generation(Some("")), 1);
}

#[test]
fn generation_wraps_instead_of_overflowing() {
    assert_eq!(next_flash_generation(Some(&u32::MAX.to_string())), 0);
}
