#![cfg(target_arch = "wasm32")]

use crypto_tracker_wasm::domain::theme::{PresentationFlag, ThemeController, ThemeMode};
use crypto_tracker_wasm::infrastructure::DocumentClassFlag;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn root_classes() -> web_sys::DomTokenList {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .document_element()
        .unwrap()
        .class_list()
}

fn dark_occurrences() -> usize {
    let classes = root_classes();
    (0..classes.length()).filter(|i| classes.item(*i).as_deref() == Some("dark")).count()
}

#[wasm_bindgen_test]
fn enabling_twice_leaves_one_class() {
    let flag = DocumentClassFlag::dark_mode();
    flag.set_enabled(true);
    flag.set_enabled(true);
    assert!(flag.is_set());
    assert_eq!(dark_occurrences(), 1);

    flag.set_enabled(false);
    assert!(!flag.is_set());
    assert_eq!(dark_occurrences(), 0);
}

#[wasm_bindgen_test]
fn controller_drives_root_class() {
    let mut controller = ThemeController::new(DocumentClassFlag::dark_mode());
    assert!(!root_classes().contains("dark"));

    assert_eq!(controller.toggle(), ThemeMode::Dark);
    assert_eq!(dark_occurrences(), 1);

    controller.toggle();
    controller.toggle();
    assert_eq!(controller.current(), ThemeMode::Dark);
    assert_eq!(dark_occurrences(), 1);

    controller.toggle();
    assert_eq!(dark_occurrences(), 0);
}
