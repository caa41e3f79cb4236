//! Local patient list. Rows are mounted after the first style pass, so they
//! are picked up by the view's watcher.

use leptos::prelude::*;

use crate::state::patients::PatientsState;

pub const PATIENT_ROW_MARKER: &str = "s3";

#[component]
pub fn PatientTable(state: RwSignal<PatientsState>) -> impl IntoView {
    let rows = move || {
        state
            .get()
            .rows
            .into_iter()
            .map(|row| {
                let id = row.id;
                view! {
                    <tr class="patient-row" data-style-id=PATIENT_ROW_MARKER>
                        <td>{row.name}</td>
                        <td>{row.note}</td>
                        <td>{row.category.label()}</td>
                        <td>{if row.active { "Yes" } else { "No" }}</td>
                        <td>
                            <button
                                class="patient-row__remove"
                                type="button"
                                on:click=move |_| {
                                    state.update(|s| {
                                        s.remove(id);
                                    });
                                }
                            >
                                "Remove"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <Show
            when=move || state.with(|s| !s.rows.is_empty())
            fallback=|| view! { <p class="empty-state">"No patients added yet."</p> }
        >
            <table class="patient-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Note"</th>
                        <th>"Category"</th>
                        <th>"Active"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </Show>
    }
}
