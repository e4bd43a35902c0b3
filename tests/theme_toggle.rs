use std::cell::RefCell;
use std::rc::Rc;

use crypto_tracker_wasm::domain::theme::{PresentationFlag, ThemeController, ThemeMode};
use quickcheck_macros::quickcheck;
use strum::IntoEnumIterator;

/// Naive class list: every enable appends, so a duplicate add would be visible
#[derive(Clone, Default)]
struct ClassList(Rc<RefCell<Vec<&'static str>>>);

impl ClassList {
    fn dark_count(&self) -> usize {
        self.0.borrow().iter().filter(|c| **c == "dark").count()
    }
}

impl PresentationFlag for ClassList {
    fn set_enabled(&self, enabled: bool) {
        let mut classes = self.0.borrow_mut();
        if enabled {
            classes.push("dark");
        } else {
            classes.retain(|c| *c != "dark");
        }
    }
}

#[test]
fn toggle_is_involutive() {
    for mode in ThemeMode::iter() {
        assert_eq!(mode.toggled().toggled(), mode);
        assert_ne!(mode.toggled(), mode);
    }
}

#[test]
fn double_toggle_restores_mode_and_flag() {
    let classes = ClassList::default();
    let mut controller = ThemeController::new(classes.clone());
    controller.toggle();
    assert_eq!(classes.dark_count(), 1);

    let before = controller.current();
    controller.toggle();
    controller.toggle();
    assert_eq!(controller.current(), before);
    assert_eq!(classes.dark_count(), 1);
}

#[quickcheck]
fn flag_tracks_mode_after_any_number_of_toggles(toggles: u8) -> bool {
    let classes = ClassList::default();
    let mut controller = ThemeController::new(classes.clone());
    (0..toggles).all(|_| {
        let mode = controller.toggle();
        classes.dark_count() == usize::from(mode.is_dark())
    })
}

#[test]
fn fresh_controller_is_light() {
    let classes = ClassList::default();
    classes.set_enabled(true);
    let controller = ThemeController::new(classes.clone());
    assert_eq!(controller.current(), ThemeMode::Light);
    assert_eq!(classes.dark_count(), 0);
}
