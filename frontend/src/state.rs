use std::rc::Rc;

use shared::{FormAction, FormState};
use yew::Reducible;

/// Reducer wrapper so the page can drive [`FormState`] with `use_reducer`.
#[derive(Debug, Default, PartialEq)]
pub struct FormModel {
    pub state: FormState,
}

impl Reducible for FormModel {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.state.clone();
        state.apply(action);
        Rc::new(Self { state })
    }
}
