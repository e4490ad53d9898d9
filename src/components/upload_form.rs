use web_sys::{HtmlElement, HtmlInputElement};
use yew::prelude::*;

use crate::filename::DEFAULT_PLACEHOLDER;
use crate::widget::{Attached, UploadElements, UploadWidget};
use gloo::console::log;

#[derive(Properties, PartialEq)]
pub struct UploadFormProps {
    #[prop_or(true)]
    pub multiple: bool,
}

/// Renders the styled upload controls plus the hidden native controls they
/// front for, and binds them with an [`UploadWidget`] once the markup is in
/// the document.
pub struct UploadForm {
    file_input: NodeRef,
    choose_button: NodeRef,
    filename_label: NodeRef,
    submit_button: NodeRef,
    submit_control: NodeRef,
    attached: Option<Attached>,
}

impl Component for UploadForm {
    type Message = ();
    type Properties = UploadFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            file_input: NodeRef::default(),
            choose_button: NodeRef::default(),
            filename_label: NodeRef::default(),
            submit_button: NodeRef::default(),
            submit_control: NodeRef::default(),
            attached: None,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <form class="upload-form" method="post" enctype="multipart/form-data">
                <input
                    ref={self.file_input.clone()}
                    id="id_files"
                    name="files"
                    type="file"
                    multiple={ctx.props().multiple}
                    style="display: none"
                />
                <button
                    ref={self.choose_button.clone()}
                    id="custom-button"
                    type="button"
                    class="upload-button"
                >
                    { "选择文件" }
                </button>
                <span
                    ref={self.filename_label.clone()}
                    id="custom-text"
                    class="upload-filename"
                >
                    { DEFAULT_PLACEHOLDER }
                </span>
                <input
                    ref={self.submit_control.clone()}
                    id="real-submit"
                    type="submit"
                    style="display: none"
                />
                <button
                    ref={self.submit_button.clone()}
                    id="custom-submit"
                    type="button"
                    class="upload-submit"
                >
                    { "上传" }
                </button>
            </form>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }

        // The refs point at our own markup above, so a failed cast here is
        // a bug in this component, not a host-page contract violation.
        let elements = UploadElements {
            file_input: self
                .file_input
                .cast::<HtmlInputElement>()
                .expect("file input not rendered"),
            choose_button: self
                .choose_button
                .cast::<HtmlElement>()
                .expect("choose button not rendered"),
            filename_label: self
                .filename_label
                .cast::<HtmlElement>()
                .expect("filename label not rendered"),
            submit_button: self
                .submit_button
                .cast::<HtmlElement>()
                .expect("submit button not rendered"),
            submit_control: self
                .submit_control
                .cast::<HtmlElement>()
                .expect("submit control not rendered"),
        };

        let widget = UploadWidget::new(elements, Default::default(), DEFAULT_PLACEHOLDER);
        self.attached = Some(widget.attach());
        log!("upload widget attached");
    }
}
