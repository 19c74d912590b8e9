use shared::FormattedPaymentRow;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AmortizationTableProps {
    pub rows: Vec<FormattedPaymentRow>,
}

#[function_component(AmortizationTable)]
pub fn amortization_table(props: &AmortizationTableProps) -> Html {
    html! {
        <div class="table-container">
            <table class="amortization-table">
                <thead>
                    <tr>
                        <th scope="col">{"Month"}</th>
                        <th scope="col">{"Payment"}</th>
                        <th scope="col">{"Interest"}</th>
                        <th scope="col">{"Principal"}</th>
                        <th scope="col">{"Remaining balance"}</th>
                    </tr>
                </thead>
                <tbody id="amortization-body">
                    {for props.rows.iter().map(|row| html! {
                        <tr key={row.period}>
                            <th scope="row">{row.period}</th>
                            <td>{&row.payment}</td>
                            <td>{&row.interest_portion}</td>
                            <td>{&row.principal_portion}</td>
                            <td>{&row.remaining_balance}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
