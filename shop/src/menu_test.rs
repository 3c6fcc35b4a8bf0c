use super::*;

#[test]
fn starts_closed() {
    assert!(!MenuState::default().is_open());
}

#[test]
fn icon_opens() {
    let mut m = MenuState::default();
    assert!(m.handle(MenuEvent::IconClicked));
    assert!(m.is_open());
}

#[test]
fn icon_while_open_is_idempotent() {
    let mut m = MenuState::default();
    m.handle(MenuEvent::IconClicked);
    assert!(!m.handle(MenuEvent::IconClicked));
    assert!(m.is_open());
}

#[test]
fn every_close_path_closes() {
    for event in [MenuEvent::CloseClicked, MenuEvent::LinkClicked, MenuEvent::BackdropClicked] {
        let mut m = MenuState::default();
        m.handle(MenuEvent::IconClicked);
        assert!(m.handle(event), "{event:?}");
        assert!(!m.is_open(), "{event:?}");
    }
}

#[test]
fn closing_a_closed_menu_is_a_no_op() {
    let mut m = MenuState::default();
    assert!(!m.handle(MenuEvent::CloseClicked));
    assert!(!m.is_open());
}
