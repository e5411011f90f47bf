use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[serde(alias = "INCOME", alias = "Income")]
    Income,
    #[default]
    #[serde(alias = "EXPENSE", alias = "Expense")]
    Expense,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Expense, TransactionType::Income];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Case-insensitive; unknown values fall back to expense.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("income") {
            Self::Income
        } else {
            Self::Expense
        }
    }
}

/// A selectable category. Options without a type apply to both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub id: i64,
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: Option<TransactionType>,
}

impl CategoryOption {
    pub fn visible_for(&self, kind: TransactionType) -> bool {
        self.kind.map_or(true, |k| k == kind)
    }
}

pub fn visible_options(options: &[CategoryOption], kind: TransactionType) -> Vec<&CategoryOption> {
    options.iter().filter(|opt| opt.visible_for(kind)).collect()
}

/// Keep `selected` only if it still refers to a visible option.
pub fn reconcile_selection(
    selected: Option<i64>,
    options: &[CategoryOption],
    kind: TransactionType,
) -> Option<i64> {
    selected.filter(|id| {
        options
            .iter()
            .any(|opt| opt.id == *id && opt.visible_for(kind))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Description,
    Amount,
    Category,
    Date,
}

impl Field {
    pub fn input_id(self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Amount => "amount",
            Self::Category => "categoryId",
            Self::Date => "transactionDate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Raw form contents as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: String,
    pub kind: TransactionType,
    pub date: String,
    pub notes: String,
    pub category_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidTransaction {
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub date: Option<Date>,
    pub notes: Option<String>,
    pub category_id: i64,
}

const MIN_AMOUNT: f64 = 0.01;

impl TransactionDraft {
    pub fn validate(&self, options: &[CategoryOption]) -> Result<ValidTransaction, Vec<FieldError>> {
        let mut errors = Vec::new();

        let description = self.description.trim();
        if description.is_empty() {
            errors.push(FieldError {
                field: Field::Description,
                message: "Description is required",
            });
        }

        let amount = match self.amount.trim() {
            "" => {
                errors.push(FieldError {
                    field: Field::Amount,
                    message: "Amount is required",
                });
                None
            }
            raw => match raw.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= MIN_AMOUNT => Some(value),
                _ => {
                    errors.push(FieldError {
                        field: Field::Amount,
                        message: "Amount must be greater than 0",
                    });
                    None
                }
            },
        };

        let category_id = reconcile_selection(self.category_id, options, self.kind);
        if category_id.is_none() {
            errors.push(FieldError {
                field: Field::Category,
                message: "Category is required",
            });
        }

        let date = match self.date.trim() {
            "" => None,
            raw => match Date::parse(raw, &format_description!("[year]-[month]-[day]")) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push(FieldError {
                        field: Field::Date,
                        message: "Enter a valid date",
                    });
                    None
                }
            },
        };

        match (amount, category_id) {
            (Some(amount), Some(category_id)) if errors.is_empty() => Ok(ValidTransaction {
                description: description.to_string(),
                amount,
                kind: self.kind,
                date,
                notes: Some(self.notes.trim().to_string()).filter(|n| !n.is_empty()),
                category_id,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<CategoryOption> {
        vec![
            CategoryOption { id: 1, name: "Salary".into(), kind: Some(TransactionType::Income) },
            CategoryOption { id: 2, name: "Rent".into(), kind: Some(TransactionType::Expense) },
            CategoryOption { id: 3, name: "Other".into(), kind: None },
        ]
    }

    #[test]
    fn options_follow_transaction_type() {
        let opts = options();
        let names: Vec<&str> = visible_options(&opts, TransactionType::Income)
            .into_iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(names, vec!["Salary", "Other"]);
    }

    #[test]
    fn hidden_selection_is_cleared() {
        let opts = options();
        assert_eq!(reconcile_selection(Some(2), &opts, TransactionType::Income), None);
        assert_eq!(reconcile_selection(Some(3), &opts, TransactionType::Income), Some(3));
        assert_eq!(reconcile_selection(Some(99), &opts, TransactionType::Expense), None);
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = TransactionDraft::default().validate(&options()).unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Description, Field::Amount, Field::Category]);
    }

    #[test]
    fn amount_must_reach_one_cent() {
        let draft = TransactionDraft {
            description: "Coffee".into(),
            amount: "0.001".into(),
            category_id: Some(2),
            ..Default::default()
        };
        let errors = draft.validate(&options()).unwrap_err();
        assert_eq!(errors[0].message, "Amount must be greater than 0");
    }

    #[test]
    fn valid_draft_produces_transaction() {
        let draft = TransactionDraft {
            description: "  Rent for March ".into(),
            amount: "1200.00".into(),
            kind: TransactionType::Expense,
            date: "2025-03-01".into(),
            notes: "   ".into(),
            category_id: Some(2),
        };
        let tx = draft.validate(&options()).unwrap();
        assert_eq!(tx.description, "Rent for March");
        assert_eq!(tx.amount, 1200.0);
        assert_eq!(tx.notes, None);
        assert_eq!(tx.date.map(|d| d.to_string()), Some("2025-03-01".to_string()));
    }

    #[test]
    fn type_tags_deserialize_from_server_casing() {
        let opt: CategoryOption =
            serde_json::from_str(r#"{"id":4,"name":"Bonus","type":"INCOME"}"#).unwrap();
        assert_eq!(opt.kind, Some(TransactionType::Income));
        assert_eq!(TransactionType::parse("Income"), TransactionType::Income);
        assert_eq!(TransactionType::parse("bogus"), TransactionType::Expense);
    }
}
