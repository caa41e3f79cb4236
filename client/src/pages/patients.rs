//! Patient management page (view identity `PageOne`).
//!
//! Text box 1 and 2 carry markers `s1`/`s2`; table rows carry `s3` and
//! arrive after the first style pass.

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::page_header::PageHeader;
use crate::components::patient_table::PatientTable;
use crate::components::protected::RequireAuth;
use crate::state::patients::{Category, PatientsState};
use crate::util::view_skin::use_view_skin;

pub const VIEW_NAME: &str = "PageOne";

#[component]
pub fn PatientsPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <PatientsView/>
        </RequireAuth>
    }
}

#[component]
fn PatientsView() -> impl IntoView {
    let root = NodeRef::<Div>::new();
    let phase = use_view_skin(VIEW_NAME, root);
    let state = RwSignal::new(PatientsState::default());

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        state.update(|s| {
            if let Ok(id) = s.add_from_draft() {
                log::debug!("added patient row {id}");
            }
        });
    };

    let options = Category::ALL
        .into_iter()
        .map(|c| view! { <option value=c.value()>{c.label()}</option> })
        .collect_view();

    view! {
        <div class="page patients-page" node_ref=root data-skin-phase=move || phase.get().as_str()>
            <PageHeader title="Patient Management"/>
            <ErrorBanner message=Signal::derive(move || state.with(|s| s.error.clone()))/>
            <form class="patient-form" on:submit=on_add>
                <label class="field">
                    "Text Box 1"
                    <input
                        class="field__input"
                        type="text"
                        data-style-id="s1"
                        prop:value=move || state.with(|s| s.draft.text_one.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.draft.text_one = value);
                        }
                    />
                </label>
                <label class="field">
                    "Text Box 2"
                    <input
                        class="field__input"
                        type="text"
                        data-style-id="s2"
                        prop:value=move || state.with(|s| s.draft.text_two.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.draft.text_two = value);
                        }
                    />
                </label>
                <label class="field">
                    "Category"
                    <select
                        class="field__input"
                        prop:value=move || state.with(|s| s.draft.category.value())
                        on:change=move |ev| {
                            if let Some(category) = Category::from_value(&event_target_value(&ev)) {
                                state.update(|s| s.draft.category = category);
                            }
                        }
                    >
                        {options}
                    </select>
                </label>
                <label class="field field--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || state.with(|s| s.draft.active)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            state.update(|s| s.draft.active = checked);
                        }
                    />
                    "Active"
                </label>
                <button class="patient-form__submit" type="submit">"Add patient"</button>
            </form>
            <PatientTable state=state/>
        </div>
    }
}
