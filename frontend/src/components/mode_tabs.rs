use shared::SignInMode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModeTabsProps {
    pub mode: SignInMode,
    pub on_select: Callback<SignInMode>,
}

#[function_component(ModeTabs)]
pub fn mode_tabs(props: &ModeTabsProps) -> Html {
    html! {
        <div class="mode-tabs">
            { for SignInMode::all().iter().map(|&mode| {
                let active = props.mode == mode;
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(mode))
                };
                html! {
                    <button
                        type="button"
                        class={classes!("mode-tab", active.then_some("active"))}
                        aria-pressed={active.to_string()}
                        {onclick}
                    >
                        { mode.as_str() }
                    </button>
                }
            })}
        </div>
    }
}
