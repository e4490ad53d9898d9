use crate::components::upload_form::UploadForm;
use yew::prelude::*;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-container">
                <header>
                    <h1>{ "文件上传" }</h1>
                </header>

                <main>
                    <div class="panel">
                        <UploadForm />
                    </div>
                </main>
            </div>
        }
    }
}
