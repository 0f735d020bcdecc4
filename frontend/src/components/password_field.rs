use shared::FormAction;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PasswordFieldProps {
    pub password: AttrValue,
    pub input_type: AttrValue,
    pub toggle_label: AttrValue,
    pub visible: bool,
    pub on_action: Callback<FormAction>,
}

#[function_component(PasswordField)]
pub fn password_field(props: &PasswordFieldProps) -> Html {
    let on_input = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_action.emit(FormAction::SetPassword(input.value()));
            }
        })
    };

    let on_toggle = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(FormAction::TogglePasswordVisibility))
    };

    html! {
        <div class="form-group">
            <label for="password">{ "Password" }</label>
            <div class="input-with-icon">
                <span class="input-icon" aria-hidden="true">{ "\u{1F512}" }</span>
                <input
                    id="password"
                    type={props.input_type.clone()}
                    placeholder="Your password"
                    value={props.password.clone()}
                    oninput={on_input}
                    autocomplete="current-password"
                    required=true
                />
                <button
                    type="button"
                    class="password-toggle"
                    aria-label={props.toggle_label.clone()}
                    onclick={on_toggle}
                >
                    { if props.visible { "Hide" } else { "Show" } }
                </button>
            </div>
        </div>
    }
}
