use shared::AccountMovement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub movements: Vec<AccountMovement>,
    pub on_export: Callback<()>,
}

/// Account movements table plus the CSV export button. The exporter
/// re-reads this markup on every call, so class names here are part of
/// its contract.
#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    let on_export_click = {
        let on_export = props.on_export.clone();
        Callback::from(move |_: MouseEvent| {
            on_export.emit(());
        })
    };

    html! {
        <section id="movimientos" class="transactions-section">
            <h2>{"Últimos movimientos"}</h2>

            <div class="table-container">
                <table class="transaction-table">
                    <thead>
                        <tr>
                            <th>{"Fecha"}</th>
                            <th>{"Concepto"}</th>
                            <th>{"Tipo"}</th>
                            <th>{"Monto"}</th>
                            <th>{"Saldo"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for props.movements.iter().map(|movement| {
                            html! {
                                <tr class={movement.kind.label()}>
                                    <td class="date">{&movement.date}</td>
                                    <td class="concept">{&movement.concept}</td>
                                    <td class="type">{movement.kind.label()}</td>
                                    <td class="amount">{&movement.amount}</td>
                                    <td class="balance">{&movement.balance}</td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>

            <button class="btn btn-secondary export-btn" onclick={on_export_click}>
                {"Exportar CSV"}
            </button>
        </section>
    }
}
