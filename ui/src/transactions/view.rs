use dioxus::prelude::*;
use tracing::info;

use super::form::{
    reconcile_selection, visible_options, CategoryOption, Field, FieldError, TransactionDraft,
    TransactionType, ValidTransaction,
};

#[component]
pub fn TransactionFormView(
    categories: Vec<CategoryOption>,
    on_submit: EventHandler<ValidTransaction>,
) -> Element {
    let mut draft = use_signal(TransactionDraft::default);
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut was_validated = use_signal(|| false);

    let current = draft();
    let shown_options: Vec<CategoryOption> = visible_options(&categories, current.kind)
        .into_iter()
        .cloned()
        .collect();
    let selected_value = current
        .category_id
        .map(|id| id.to_string())
        .unwrap_or_default();

    let error_for = {
        let errs = errors();
        move |field: Field| errs.iter().find(|e| e.field == field).map(|e| e.message)
    };
    let description_error = error_for(Field::Description);
    let amount_error = error_for(Field::Amount);
    let category_error = error_for(Field::Category);
    let date_error = error_for(Field::Date);

    let type_options = categories.clone();
    let submit_options = categories.clone();

    rsx! {
        form {
            class: if was_validated() { "transaction-form needs-validation was-validated" } else { "transaction-form needs-validation" },
            novalidate: true,
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                was_validated.set(true);
                match draft().validate(&submit_options) {
                    Ok(tx) => {
                        errors.set(Vec::new());
                        info!(category = tx.category_id, kind = tx.kind.as_str(), "transaction submitted");
                        on_submit.call(tx);
                    }
                    Err(found) => errors.set(found),
                }
            },

            div { class: "form-field",
                label { r#for: "type", "Type" }
                select {
                    id: "type",
                    value: "{current.kind.as_str()}",
                    onchange: move |evt: FormEvent| {
                        let kind = TransactionType::parse(&evt.value());
                        draft.with_mut(|d| {
                            d.kind = kind;
                            d.category_id = reconcile_selection(d.category_id, &type_options, kind);
                        });
                    },
                    for kind in TransactionType::ALL {
                        option { key: "{kind.as_str()}", value: "{kind.as_str()}", "{kind.display_name()}" }
                    }
                }
            }

            div { class: "form-field",
                label { r#for: "categoryId", "Category" }
                select {
                    id: "categoryId",
                    value: "{selected_value}",
                    onchange: move |evt: FormEvent| {
                        let id = evt.value().parse::<i64>().ok();
                        draft.with_mut(|d| d.category_id = id);
                    },
                    option { value: "", "Select a category" }
                    for opt in shown_options {
                        option { key: "{opt.id}", value: "{opt.id}", "{opt.name}" }
                    }
                }
                if let Some(message) = category_error {
                    div { class: "invalid-feedback", "{message}" }
                }
            }

            div { class: "form-field",
                label { r#for: "description", "Description" }
                input {
                    id: "description",
                    r#type: "text",
                    required: true,
                    value: "{current.description}",
                    oninput: move |evt: FormEvent| draft.with_mut(|d| d.description = evt.value()),
                }
                if let Some(message) = description_error {
                    div { class: "invalid-feedback", "{message}" }
                }
            }

            div { class: "form-field",
                label { r#for: "amount", "Amount" }
                input {
                    id: "amount",
                    r#type: "number",
                    step: "0.01",
                    min: "0.01",
                    required: true,
                    value: "{current.amount}",
                    oninput: move |evt: FormEvent| draft.with_mut(|d| d.amount = evt.value()),
                }
                if let Some(message) = amount_error {
                    div { class: "invalid-feedback", "{message}" }
                }
            }

            div { class: "form-field",
                label { r#for: "transactionDate", "Date" }
                input {
                    id: "transactionDate",
                    r#type: "date",
                    value: "{current.date}",
                    oninput: move |evt: FormEvent| draft.with_mut(|d| d.date = evt.value()),
                }
                if let Some(message) = date_error {
                    div { class: "invalid-feedback", "{message}" }
                }
            }

            div { class: "form-field",
                label { r#for: "notes", "Notes" }
                textarea {
                    id: "notes",
                    value: "{current.notes}",
                    oninput: move |evt: FormEvent| draft.with_mut(|d| d.notes = evt.value()),
                }
            }

            button { r#type: "submit", class: "button button--primary", "Save transaction" }
        }
    }
}
