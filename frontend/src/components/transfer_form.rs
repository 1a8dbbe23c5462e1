use shared::{
    sanitize_account_number, format_amount_input, transfer_success_message, validate_transfer,
    Notification, Severity, TransferRequest,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransferFormProps {
    pub on_notify: Callback<Notification>,
}

/// Funds-transfer form. Local-only simulation: validation happens in
/// `shared`, rejections surface as blocking alerts, and an accepted
/// submission raises a success notification and clears every field.
#[function_component(TransferForm)]
pub fn transfer_form(props: &TransferFormProps) -> Html {
    let from_account = use_state(String::new);
    let recipient = use_state(String::new);
    let account_number = use_state(String::new);
    let amount = use_state(String::new);
    let concept = use_state(String::new);

    let on_from_account_change = {
        let from_account = from_account.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            from_account.set(select.value());
        })
    };

    let on_recipient_change = {
        let recipient = recipient.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            recipient.set(input.value());
        })
    };

    // Per-keystroke guard: digits and hyphens only, rewritten in place.
    let on_account_number_input = {
        let account_number = account_number.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let sanitized = sanitize_account_number(&input.value());
            input.set_value(&sanitized);
            account_number.set(sanitized);
        })
    };

    // On change (not input): rewrite to two decimals, or "NaN" for
    // unparsable text.
    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let formatted = format_amount_input(&input.value());
            input.set_value(&formatted);
            amount.set(formatted);
        })
    };

    let on_concept_change = {
        let concept = concept.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            concept.set(input.value());
        })
    };

    let onsubmit = {
        let from_account = from_account.clone();
        let recipient = recipient.clone();
        let account_number = account_number.clone();
        let amount = amount.clone();
        let concept = concept.clone();
        let on_notify = props.on_notify.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = TransferRequest {
                from_account: (*from_account).clone(),
                recipient: (*recipient).clone(),
                account_number: (*account_number).clone(),
                amount: (*amount).clone(),
                concept: (*concept).clone(),
            };

            match validate_transfer(&request) {
                Ok(_) => {
                    on_notify.emit(Notification::new(
                        transfer_success_message(&request.amount, &request.recipient),
                        Severity::Success,
                    ));
                    from_account.set(String::new());
                    recipient.set(String::new());
                    account_number.set(String::new());
                    amount.set(String::new());
                    concept.set(String::new());
                }
                Err(error) => gloo::dialogs::alert(&error.to_string()),
            }
        })
    };

    html! {
        <section id="transferencias" class="transfer-section">
            <h2>{"Nueva transferencia"}</h2>

            <form class="transfer-form" {onsubmit}>
                <div class="form-group">
                    <label for="from-account">{"Cuenta de origen"}</label>
                    <select
                        id="from-account"
                        value={(*from_account).clone()}
                        onchange={on_from_account_change}
                    >
                        <option value="" selected={from_account.is_empty()}>
                            {"Selecciona una cuenta"}
                        </option>
                        <option value="ahorros-1234">{"Cuenta de Ahorros ****1234"}</option>
                        <option value="corriente-5678">{"Cuenta Corriente ****5678"}</option>
                    </select>
                </div>

                <div class="form-group">
                    <label for="recipient">{"Destinatario"}</label>
                    <input
                        type="text"
                        id="recipient"
                        placeholder="Nombre del destinatario"
                        value={(*recipient).clone()}
                        onchange={on_recipient_change}
                    />
                </div>

                <div class="form-group">
                    <label for="account-number">{"Número de cuenta"}</label>
                    <input
                        type="text"
                        id="account-number"
                        placeholder="0000-0000-0000"
                        value={(*account_number).clone()}
                        oninput={on_account_number_input}
                    />
                </div>

                <div class="form-group">
                    <label for="amount">{"Monto"}</label>
                    <input
                        type="text"
                        inputmode="decimal"
                        id="amount"
                        placeholder="0.00"
                        value={(*amount).clone()}
                        onchange={on_amount_change}
                    />
                </div>

                <div class="form-group">
                    <label for="concept">{"Concepto (opcional)"}</label>
                    <input
                        type="text"
                        id="concept"
                        placeholder="Renta, servicios..."
                        value={(*concept).clone()}
                        onchange={on_concept_change}
                    />
                </div>

                <button type="submit" class="btn btn-primary">
                    {"Realizar transferencia"}
                </button>
            </form>
        </section>
    }
}
