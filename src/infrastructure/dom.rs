use crate::domain::{logging::LogComponent, theme::PresentationFlag};
use crate::log_warn;

/// Presentation flag stored as a class on `<html>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentClassFlag {
    class_name: &'static str,
}

impl DocumentClassFlag {
    pub const fn new(class_name: &'static str) -> Self {
        Self { class_name }
    }

    /// The `dark` class the stylesheet keys off
    pub const fn dark_mode() -> Self {
        Self::new("dark")
    }

    pub fn is_set(&self) -> bool {
        root_element().is_some_and(|root| root.class_list().contains(self.class_name))
    }
}

impl PresentationFlag for DocumentClassFlag {
    fn set_enabled(&self, enabled: bool) {
        let Some(root) = root_element() else {
            log_warn!(
                LogComponent::Infrastructure("DocumentClassFlag"),
                "document root not available, '{}' not applied",
                self.class_name
            );
            return;
        };

        // classList.add/remove are no-ops when the class is already in the requested state
        let classes = root.class_list();
        let result = if enabled {
            classes.add_1(self.class_name)
        } else {
            classes.remove_1(self.class_name)
        };

        if let Err(e) = result {
            log_warn!(
                LogComponent::Infrastructure("DocumentClassFlag"),
                "failed to update class '{}': {:?}",
                self.class_name,
                e
            );
        }
    }
}

fn root_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

/// Text of the element with `id`, typically a `<script type="application/json">`
pub fn embedded_json(id: &str) -> Option<String> {
    web_sys::window()?.document()?.get_element_by_id(id)?.text_content()
}
