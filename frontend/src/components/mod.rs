pub mod breakdown_list;
pub mod budget_card;
pub mod charts;
pub mod edit_expense_modal;
pub mod expense_form;
pub mod expense_list;
pub mod header;
pub mod notification;
