use chrono::NaiveDate;
use subtrack_core::core::filter::{filter_and_sort, ExpenseFilter, SortOrder};
use subtrack_core::domain::{Expense, ExpenseCategory, ExpenseType};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn stack() -> Vec<Expense> {
    let mut github = Expense::new(
        "GitHub",
        4.0,
        ExpenseCategory::Development,
        ExpenseType::Recurring,
        date(2023, 7, 5),
    )
    .with_description("Pro plan");
    github.active = true;

    let mut cancelled = Expense::new(
        "Old Analytics",
        40.0,
        ExpenseCategory::Marketing,
        ExpenseType::Recurring,
        date(2023, 1, 1),
    );
    cancelled.active = false;

    vec![
        github,
        Expense::new(
            "OpenAI API",
            50.0,
            ExpenseCategory::Ai,
            ExpenseType::Recurring,
            date(2024, 1, 1),
        )
        .with_description("Model usage"),
        Expense::new(
            "Tailwind UI",
            149.0,
            ExpenseCategory::Design,
            ExpenseType::OneTime,
            date(2024, 2, 5),
        )
        .with_description("Component library"),
        cancelled,
    ]
}

#[test]
fn all_three_predicates_combine_with_and() {
    let filter = ExpenseFilter {
        search: "plan".into(),
        categories: vec![ExpenseCategory::Development],
        active_only: true,
    };
    let result = filter_and_sort(&stack(), &filter, SortOrder::AmountDesc);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "GitHub");
}

#[test]
fn active_only_toggle_controls_the_cancelled_expense() {
    let active_only = ExpenseFilter {
        active_only: true,
        ..Default::default()
    };
    assert_eq!(filter_and_sort(&stack(), &active_only, SortOrder::NameAsc).len(), 3);

    let everything = ExpenseFilter::default();
    assert_eq!(filter_and_sort(&stack(), &everything, SortOrder::NameAsc).len(), 4);
}

#[test]
fn search_is_case_insensitive_over_name_and_description() {
    let by_description = ExpenseFilter {
        search: "COMPONENT".into(),
        ..Default::default()
    };
    let result = filter_and_sort(&stack(), &by_description, SortOrder::NameAsc);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Tailwind UI");
}

#[test]
fn each_sort_order_is_the_reverse_of_its_mirror() {
    let expenses = stack();
    let filter = ExpenseFilter::default();
    for (asc, desc) in [
        (SortOrder::NameAsc, SortOrder::NameDesc),
        (SortOrder::AmountAsc, SortOrder::AmountDesc),
        (SortOrder::StartDateAsc, SortOrder::StartDateDesc),
    ] {
        let mut forward = filter_and_sort(&expenses, &filter, asc);
        let backward = filter_and_sort(&expenses, &filter, desc);
        forward.reverse();
        let forward_ids: Vec<_> = forward.iter().map(|e| e.id).collect();
        let backward_ids: Vec<_> = backward.iter().map(|e| e.id).collect();
        assert_eq!(forward_ids, backward_ids);
    }
}

#[test]
fn filtering_never_mutates_the_input_collection() {
    let expenses = stack();
    let snapshot = expenses.clone();
    let _ = filter_and_sort(&expenses, &ExpenseFilter::default(), SortOrder::AmountDesc);
    assert_eq!(expenses, snapshot);
}
