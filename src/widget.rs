use std::fmt;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::filename::{display_name, LabelStrategy, DEFAULT_PLACEHOLDER};

/// Identifiers the hosting page must render before the widget initializes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub file_input: String,
    pub choose_button: String,
    pub filename_label: String,
    pub submit_button: String,
    pub submit_control: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            file_input: "id_files".to_string(),
            choose_button: "custom-button".to_string(),
            filename_label: "custom-text".to_string(),
            submit_button: "custom-submit".to_string(),
            submit_control: "real-submit".to_string(),
        }
    }
}

/// Widget configuration. The default reproduces the stock markup contract
/// and label behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub ids: ElementIds,
    pub strategy: LabelStrategy,
    pub placeholder: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            strategy: LabelStrategy::default(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum WidgetError {
    /// A required element id was not found in the document.
    MissingElement(String),
    /// An element was found but is not the kind of control its role needs.
    ElementType { id: String, expected: &'static str },
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetError::MissingElement(id) => {
                write!(f, "required element #{} is missing from the document", id)
            }
            WidgetError::ElementType { id, expected } => {
                write!(f, "element #{} is not an {}", id, expected)
            }
        }
    }
}

impl std::error::Error for WidgetError {}

/// Typed handles to the five controls the widget binds.
pub struct UploadElements {
    pub file_input: HtmlInputElement,
    pub choose_button: HtmlElement,
    pub filename_label: HtmlElement,
    pub submit_button: HtmlElement,
    pub submit_control: HtmlElement,
}

impl UploadElements {
    /// Looks up every required element by id. Any absent or mistyped element
    /// is a hard error; the widget never starts half-bound.
    pub fn from_document(document: &Document, ids: &ElementIds) -> Result<Self, WidgetError> {
        Ok(Self {
            file_input: lookup(document, &ids.file_input, "input element")?,
            choose_button: lookup(document, &ids.choose_button, "html element")?,
            filename_label: lookup(document, &ids.filename_label, "html element")?,
            submit_button: lookup(document, &ids.submit_button, "html element")?,
            submit_control: lookup(document, &ids.submit_control, "html element")?,
        })
    }
}

fn lookup<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T, WidgetError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WidgetError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| WidgetError::ElementType {
            id: id.to_string(),
            expected,
        })
}

/// Keeps the styled proxy controls behaviorally equivalent to the native
/// controls they front for: clicks on the proxies are forwarded to the
/// hidden native controls, and the filename label mirrors the file
/// control's current selection.
pub struct UploadWidget {
    elements: UploadElements,
    strategy: LabelStrategy,
    placeholder: String,
}

impl UploadWidget {
    /// Builds a widget from explicit element handles, so hosts that already
    /// hold references (or tests with synthetic elements) never reach into
    /// a global document.
    pub fn new(
        elements: UploadElements,
        strategy: LabelStrategy,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            elements,
            strategy,
            placeholder: placeholder.into(),
        }
    }

    /// Looks the elements up in `document` and builds the widget. Fails
    /// fast if the page does not satisfy the element contract.
    pub fn mount(document: &Document, config: &WidgetConfig) -> Result<Self, WidgetError> {
        let elements = UploadElements::from_document(document, &config.ids)?;
        Ok(Self::new(elements, config.strategy, config.placeholder.clone()))
    }

    /// Recomputes the filename label from the file control's current state.
    /// Idempotent: the label is a pure function of the current selection.
    pub fn refresh_label(&self) {
        let text = label_text(
            &self.elements.file_input,
            self.strategy,
            &self.placeholder,
        );
        self.elements.filename_label.set_text_content(Some(&text));
    }

    /// Wires the three event forwardings and returns the live subscription
    /// set. Dropping the returned value detaches every listener.
    pub fn attach(self) -> Attached {
        // start from a consistent label, e.g. after a remount mid-session
        self.refresh_label();

        let choose = {
            let file_input = self.elements.file_input.clone();
            EventListener::new(&self.elements.choose_button, "click", move |_| {
                file_input.click();
            })
        };

        let submit = {
            let submit_control = self.elements.submit_control.clone();
            EventListener::new(&self.elements.submit_button, "click", move |_| {
                submit_control.click();
            })
        };

        let change = {
            let file_input = self.elements.file_input.clone();
            let label = self.elements.filename_label.clone();
            let strategy = self.strategy;
            let placeholder = self.placeholder.clone();
            EventListener::new(&self.elements.file_input, "change", move |_| {
                let text = label_text(&file_input, strategy, &placeholder);
                label.set_text_content(Some(&text));
            })
        };

        Attached {
            widget: self,
            _listeners: vec![choose, submit, change],
        }
    }
}

fn label_text(input: &HtmlInputElement, strategy: LabelStrategy, placeholder: &str) -> String {
    // A multi-file selection has no single value worth showing; list the
    // chosen names instead.
    if let Some(files) = input.files() {
        if files.length() > 1 {
            let names: Vec<String> = (0..files.length())
                .filter_map(|i| files.get(i))
                .map(|file| file.name())
                .collect();
            return names.join(", ");
        }
    }
    display_name(&input.value(), strategy, placeholder)
}

/// A widget with live event subscriptions. Dropping this removes the DOM
/// listeners, leaving the page's elements untouched.
pub struct Attached {
    widget: UploadWidget,
    _listeners: Vec<EventListener>,
}

impl Attached {
    pub fn widget(&self) -> &UploadWidget {
        &self.widget
    }

    /// Removes the listeners and hands the widget back, so it can be
    /// re-attached later.
    pub fn detach(self) -> UploadWidget {
        self.widget
    }
}
