use shared::BookingField;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub field: BookingField,
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    pub value: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub min: Option<AttrValue>,
    pub oninput: Callback<InputEvent>,
}

/// Single booking input with its inline error message
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    html! {
        <div class="form-field">
            <input
                type={props.input_type.clone()}
                name={props.field.name()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                min={props.min.clone()}
                class={input_class(props.error.is_some())}
                oninput={props.oninput.clone()}
            />
            {if let Some(error) = props.error.as_ref() {
                html! { <p class="field-error">{error.to_string()}</p> }
            } else { html! {} }}
        </div>
    }
}

pub fn input_class(has_error: bool) -> Classes {
    classes!("form-input", has_error.then_some("has-error"))
}
