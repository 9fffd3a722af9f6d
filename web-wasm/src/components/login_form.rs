//! ログインフォームコンポーネント
//!
//! 入力値を呼び出し元のコールバックへ渡すだけ。認証・通信・セッション管理は行わない。

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use microspotter_common::LoginFields;

#[component]
pub fn LoginForm<F>(on_login: F) -> impl IntoView
where
    F: Fn(String, String) + 'static,
{
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        LoginFields::new(username.get_untracked(), password.get_untracked()).submit(&on_login);
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <h1>"Login to MicroSpotter"</h1>

            <div class="form-group">
                <label for="username">"Username"</label>
                <input
                    type="text"
                    id="username"
                    name="username"
                    required
                    prop:value=move || username.get()
                    on:input=move |ev| {
                        set_username.set(event_target_value(&ev));
                    }
                />
            </div>

            <div class="form-group">
                <label for="password">"Password"</label>
                <input
                    type="password"
                    id="password"
                    name="password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        set_password.set(event_target_value(&ev));
                    }
                />
            </div>

            <button type="submit" class="btn btn-primary btn-block">
                "Log In"
            </button>
        </form>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Event, HtmlElement, HtmlFormElement, HtmlInputElement};

    wasm_bindgen_test_configure!(run_in_browser);

    type Calls = Rc<RefCell<Vec<(String, String)>>>;

    fn mount_form() -> (Calls, HtmlElement) {
        let document = web_sys::window().unwrap().document().unwrap();
        let host: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
        document.body().unwrap().append_child(&host).unwrap();

        let calls: Calls = Rc::default();
        let recorder = calls.clone();
        let handle = leptos::mount::mount_to(host.clone(), move || {
            let recorder = recorder.clone();
            view! {
                <LoginForm on_login=move |u, p| recorder.borrow_mut().push((u, p)) />
            }
        });
        handle.forget();
        (calls, host)
    }

    fn type_into(host: &HtmlElement, selector: &str, value: &str) {
        let input: HtmlInputElement = host
            .query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        input.set_value(value);
        input
            .dispatch_event(&Event::new("input").unwrap())
            .unwrap();
    }

    fn submit(host: &HtmlElement) {
        let form: HtmlFormElement = host
            .query_selector("form")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        form.request_submit().unwrap();
    }

    #[wasm_bindgen_test]
    fn wasm_submit_forwards_credentials() {
        let (calls, host) = mount_form();
        type_into(&host, "input[name=username]", "alice");
        type_into(&host, "input[name=password]", "secret");
        submit(&host);

        assert_eq!(
            calls.borrow().as_slice(),
            &[("alice".to_string(), "secret".to_string())]
        );
    }

    #[wasm_bindgen_test]
    fn wasm_empty_password_is_blocked() {
        let (calls, host) = mount_form();
        type_into(&host, "input[name=username]", "alice");
        submit(&host);

        assert!(calls.borrow().is_empty());
    }
}
