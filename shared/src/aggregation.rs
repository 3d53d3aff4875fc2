//! Client-side aggregation over expense records.
//!
//! Pure functions that turn a fetched expense snapshot into time-bucketed
//! trends, category/payment breakdowns, top-N rankings and budget status.
//! Nothing here touches the clock or any shared state: callers pass their own
//! snapshot and an explicit `today`, so every result is reproducible.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashMap;

use crate::{parse_iso_date, Budget, Expense};

/// Time bucketing granularity for the trend and comparison charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::Daily,
        Period::Weekly,
        Period::Monthly,
        Period::Yearly,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Period::Daily => "Daily",
            Period::Weekly => "Weekly",
            Period::Monthly => "Monthly",
            Period::Yearly => "Yearly",
        }
    }

    /// Number of buckets in the trailing window: 30 days, 12 weeks,
    /// 12 months or 5 years. Series lengths are fixed regardless of data.
    pub fn bucket_count(&self) -> usize {
        match self {
            Period::Daily => 30,
            Period::Weekly => 12,
            Period::Monthly => 12,
            Period::Yearly => 5,
        }
    }
}

/// An ordered `(label, total)` series with one entry per bucket.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Totals grouped by a categorical field, in first-seen insertion order.
/// Sorting and truncation are presentation policy on top of this.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Breakdown {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl Breakdown {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Descending by value. The sort is stable, so ties keep the grouping's
    /// insertion order.
    pub fn sorted_desc(&self) -> Breakdown {
        let mut order: Vec<usize> = (0..self.labels.len()).collect();
        order.sort_by(|&a, &b| {
            self.values[b]
                .partial_cmp(&self.values[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Breakdown {
            labels: order.iter().map(|&i| self.labels[i].clone()).collect(),
            values: order.iter().map(|&i| self.values[i]).collect(),
        }
    }

    pub fn top_n(&self, n: usize) -> Breakdown {
        let mut sorted = self.sorted_desc();
        sorted.labels.truncate(n);
        sorted.values.truncate(n);
        sorted
    }
}

/// Per-bucket totals for the top spending categories.
///
/// `series[i]` belongs to `categories[i]` and has the same length and
/// alignment as `labels`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComparisonSeries {
    pub labels: Vec<String>,
    pub categories: Vec<String>,
    pub series: Vec<Vec<f64>>,
}

/// Budget consumption for one category (or the overall cap).
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub budget: f64,
    pub spent: f64,
    pub remaining: f64,
    /// `None` when the budget amount is zero or negative; shown as "N/A"
    /// instead of propagating Infinity into the page.
    pub percentage: Option<f64>,
    /// Strictly greater than 100%; exactly on budget is not over.
    pub over_budget: bool,
}

/// Sum of amounts for the current calendar month: day 1 of `today`'s month
/// through `today`, both inclusive.
pub fn monthly_total(expenses: &[Expense], today: NaiveDate) -> f64 {
    window_total(expenses, start_of_month(today), today, None)
}

/// [`monthly_total`] restricted to one category.
pub fn category_monthly_total(expenses: &[Expense], category: &str, today: NaiveDate) -> f64 {
    window_total(expenses, start_of_month(today), today, Some(category))
}

/// Spending totals over the fixed trailing window of `period`, oldest bucket
/// first. Buckets without expenses contribute `0.0`; the series length is
/// always [`Period::bucket_count`].
pub fn spending_trend(expenses: &[Expense], period: Period, today: NaiveDate) -> TrendSeries {
    let windows = bucket_windows(period, today);
    TrendSeries {
        labels: windows.iter().map(|w| w.label.clone()).collect(),
        values: windows
            .iter()
            .map(|w| window_total(expenses, w.start, w.end, None))
            .collect(),
    }
}

/// All-time totals grouped by category, insertion order, no date filter.
pub fn category_breakdown(expenses: &[Expense]) -> Breakdown {
    grouped_totals(expenses, |e| &e.category)
}

/// All-time totals grouped by payment method.
pub fn payment_method_breakdown(expenses: &[Expense]) -> Breakdown {
    grouped_totals(expenses, |e| &e.payment_method)
}

/// The `n` largest categories by all-time total, descending, ties stable on
/// insertion order.
pub fn top_categories(expenses: &[Expense], n: usize) -> Breakdown {
    category_breakdown(expenses).top_n(n)
}

/// Per-bucket totals for the top five all-time categories over the same
/// bucket windows as [`spending_trend`].
///
/// Monthly labels here carry only the month abbreviation, without the year —
/// the trend labels do carry it. Kept asymmetric on purpose.
pub fn category_comparison(
    expenses: &[Expense],
    period: Period,
    today: NaiveDate,
) -> ComparisonSeries {
    let windows = bucket_windows(period, today);
    let top = top_categories(expenses, 5);

    let series = top
        .labels
        .iter()
        .map(|category| {
            windows
                .iter()
                .map(|w| window_total(expenses, w.start, w.end, Some(category)))
                .collect()
        })
        .collect();

    ComparisonSeries {
        labels: windows.into_iter().map(|w| w.compact_label).collect(),
        categories: top.labels,
        series,
    }
}

/// First budget record for `category`. Duplicates should not exist, but when
/// they do the first one wins, deterministically.
pub fn find_budget<'a>(budgets: &'a [Budget], category: &str) -> Option<&'a Budget> {
    budgets.iter().find(|b| b.category == category)
}

/// Consumption of a budget ceiling by the given spend.
pub fn budget_status(budget: f64, spent: f64) -> BudgetStatus {
    let percentage = if budget > 0.0 {
        Some(spent / budget * 100.0)
    } else {
        None
    };
    BudgetStatus {
        budget,
        spent,
        remaining: budget - spent,
        percentage,
        over_budget: percentage.map(|p| p > 100.0).unwrap_or(false),
    }
}

/// Progress-bar width for a budget: the displayed percentage is never
/// clamped, the bar is.
pub fn progress_width(status: &BudgetStatus) -> f64 {
    status
        .percentage
        .map(|p| p.clamp(0.0, 100.0))
        .unwrap_or(0.0)
}

/// Share of one value in a series total, for breakdown rows and tooltips.
/// Rendered to one decimal place.
pub fn percentage_of_total(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

/// The server summary's category map, sorted descending by amount for
/// display. Ties fall back to the label so the order is deterministic.
pub fn sorted_breakdown(breakdown: &HashMap<String, f64>) -> Vec<(String, f64)> {
    let mut entries: Vec<(String, f64)> = breakdown
        .iter()
        .map(|(k, v)| (k.clone(), *v))
        .collect();
    entries.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    entries
}

/// Three-letter month label, matching the browser's `en-US` short month.
pub fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "Jan",
    }
}

struct BucketWindow {
    start: NaiveDate,
    end: NaiveDate,
    label: String,
    /// Comparison-chart variant of the label (monthly drops the year).
    compact_label: String,
}

fn bucket_windows(period: Period, today: NaiveDate) -> Vec<BucketWindow> {
    let count = period.bucket_count() as i64;
    let mut windows = Vec::with_capacity(count as usize);

    match period {
        Period::Daily => {
            for i in (0..count).rev() {
                let day = today - Duration::days(i);
                let label = format!("{} {}", month_abbrev(day.month()), day.day());
                windows.push(BucketWindow {
                    start: day,
                    end: day,
                    compact_label: label.clone(),
                    label,
                });
            }
        }
        Period::Weekly => {
            // Week starts are offsets from today's position in its Sunday
            // week, not ISO weeks. Labels count up while offsets count down,
            // so the oldest bucket is "Week 1". Kept as the product defined
            // it.
            let weekday = today.weekday().num_days_from_sunday() as i64;
            for i in (0..count).rev() {
                let start = today - Duration::days(i * 7 + weekday);
                let label = format!("Week {}", count - i);
                windows.push(BucketWindow {
                    start,
                    end: start + Duration::days(6),
                    compact_label: label.clone(),
                    label,
                });
            }
        }
        Period::Monthly => {
            for i in (0..count).rev() {
                let (year, month) = months_back(today, i as u32);
                let (start, end) = month_window(year, month);
                windows.push(BucketWindow {
                    start,
                    end,
                    label: format!("{} {}", month_abbrev(month), year),
                    compact_label: month_abbrev(month).to_string(),
                });
            }
        }
        Period::Yearly => {
            for i in (0..count).rev() {
                let year = today.year() - i as i32;
                let start = NaiveDate::from_ymd_opt(year, 1, 1).expect("start of year");
                let end = NaiveDate::from_ymd_opt(year, 12, 31).expect("end of year");
                let label = year.to_string();
                windows.push(BucketWindow {
                    start,
                    end,
                    compact_label: label.clone(),
                    label,
                });
            }
        }
    }

    windows
}

/// Inclusive-range sum. Expenses whose date string does not parse are
/// excluded here, matching the original client where an invalid date
/// compared false against every bucket.
fn window_total(
    expenses: &[Expense],
    start: NaiveDate,
    end: NaiveDate,
    category: Option<&str>,
) -> f64 {
    expenses
        .iter()
        .filter(|e| category.map_or(true, |c| e.category == c))
        .filter(|e| matches!(parse_iso_date(&e.date), Ok(d) if d >= start && d <= end))
        .map(|e| e.amount)
        .sum()
}

fn grouped_totals<F>(expenses: &[Expense], key: F) -> Breakdown
where
    F: Fn(&Expense) -> &str,
{
    let mut breakdown = Breakdown::default();
    for expense in expenses {
        let label = key(expense);
        match breakdown.labels.iter().position(|l| l == label) {
            Some(i) => breakdown.values[i] += expense.amount,
            None => {
                breakdown.labels.push(label.to_string());
                breakdown.values.push(expense.amount);
            }
        }
    }
    breakdown
}

fn start_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).expect("first of month")
}

fn months_back(today: NaiveDate, back: u32) -> (i32, u32) {
    let total = today.year() * 12 + today.month0() as i32 - back as i32;
    (total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
}

fn month_window(year: i32, month: u32) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(year, month, 1).expect("first of month");
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end =
        NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("first of month") - Duration::days(1);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2025-08-29 is a Friday; the containing Sunday week is Aug 24..Aug 30.
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 29).unwrap()
    }

    fn expense(id: &str, amount: f64, date: &str, category: &str, method: &str) -> Expense {
        Expense {
            id: id.to_string(),
            amount,
            date: date.to_string(),
            category: category.to_string(),
            payment_method: method.to_string(),
            notes: None,
        }
    }

    fn budget(id: &str, category: &str, amount: f64) -> Budget {
        Budget {
            id: id.to_string(),
            category: category.to_string(),
            amount,
            period: "monthly".to_string(),
        }
    }

    #[test]
    fn test_monthly_total_bounds() {
        let expenses = vec![
            expense("a", 100.0, "2025-08-29", "Food", "Cash"),
            expense("b", 40.0, "2025-08-01", "Food", "Cash"),
            expense("c", 25.0, "2025-07-31", "Food", "Cash"),
        ];
        assert_eq!(monthly_total(&expenses, today()), 140.0);
    }

    #[test]
    fn test_category_monthly_total_filters_category() {
        let expenses = vec![
            expense("a", 100.0, "2025-08-10", "Food", "Cash"),
            expense("b", 60.0, "2025-08-10", "Bills", "UPI"),
            expense("c", 30.0, "2025-07-10", "Food", "Cash"),
        ];
        assert_eq!(category_monthly_total(&expenses, "Food", today()), 100.0);
        assert_eq!(category_monthly_total(&expenses, "Bills", today()), 60.0);
        assert_eq!(category_monthly_total(&expenses, "Petrol", today()), 0.0);
    }

    #[test]
    fn test_daily_trend_always_thirty_buckets() {
        for expenses in [
            vec![],
            vec![expense("a", 5.0, "2025-08-29", "Food", "Cash")],
            (0..100)
                .map(|i| expense(&i.to_string(), 1.0, "2025-08-15", "Food", "Cash"))
                .collect::<Vec<_>>(),
        ] {
            let trend = spending_trend(&expenses, Period::Daily, today());
            assert_eq!(trend.labels.len(), 30);
            assert_eq!(trend.values.len(), 30);
        }
    }

    #[test]
    fn test_daily_trend_labels_and_placement() {
        let expenses = vec![
            expense("a", 12.0, "2025-08-29", "Food", "Cash"),
            expense("b", 7.0, "2025-08-28", "Food", "Cash"),
            expense("c", 99.0, "2025-07-30", "Food", "Cash"),
        ];
        let trend = spending_trend(&expenses, Period::Daily, today());
        assert_eq!(trend.labels[0], "Jul 31");
        assert_eq!(trend.labels[29], "Aug 29");
        assert_eq!(trend.values[29], 12.0);
        assert_eq!(trend.values[28], 7.0);
        // Jul 30 is outside the 30-day window entirely.
        assert_eq!(trend.values.iter().sum::<f64>(), 19.0);
    }

    #[test]
    fn test_monthly_trend_current_month_membership() {
        let expenses = vec![
            expense("a", 50.0, "2025-08-29", "Food", "Cash"),
            expense("b", 20.0, "2025-07-15", "Food", "Cash"),
        ];
        let trend = spending_trend(&expenses, Period::Monthly, today());
        assert_eq!(trend.labels.len(), 12);
        assert_eq!(trend.labels[11], "Aug 2025");
        assert_eq!(trend.labels[10], "Jul 2025");
        assert_eq!(trend.labels[0], "Sep 2024");
        assert_eq!(trend.values[11], 50.0);
        assert_eq!(trend.values[10], 20.0);
    }

    #[test]
    fn test_weekly_trend_label_oddity() {
        // Labels count up from the oldest bucket while the window offsets
        // count down; the newest bucket is "Week 12" and is anchored to the
        // current Sunday week, not an ISO week.
        let trend = spending_trend(&[], Period::Weekly, today());
        assert_eq!(trend.labels.len(), 12);
        assert_eq!(trend.labels[0], "Week 1");
        assert_eq!(trend.labels[11], "Week 12");
    }

    #[test]
    fn test_weekly_trend_current_week_window() {
        let expenses = vec![
            expense("a", 10.0, "2025-08-24", "Food", "Cash"),
            expense("b", 5.0, "2025-08-30", "Food", "Cash"),
            expense("c", 3.0, "2025-08-23", "Food", "Cash"),
        ];
        let trend = spending_trend(&expenses, Period::Weekly, today());
        // Sunday Aug 24 through Saturday Aug 30 land in the newest bucket;
        // Saturday Aug 23 belongs to the previous one.
        assert_eq!(trend.values[11], 15.0);
        assert_eq!(trend.values[10], 3.0);
    }

    #[test]
    fn test_yearly_trend_five_buckets() {
        let expenses = vec![
            expense("a", 10.0, "2025-01-01", "Food", "Cash"),
            expense("b", 20.0, "2021-06-15", "Food", "Cash"),
            expense("c", 30.0, "2020-06-15", "Food", "Cash"),
        ];
        let trend = spending_trend(&expenses, Period::Yearly, today());
        assert_eq!(trend.labels, vec!["2021", "2022", "2023", "2024", "2025"]);
        assert_eq!(trend.values, vec![20.0, 0.0, 0.0, 0.0, 10.0]);
    }

    #[test]
    fn test_breakdown_sums_match_total_spend() {
        let expenses = vec![
            expense("a", 100.0, "2025-08-01", "Food", "Cash"),
            expense("b", 50.5, "2025-08-02", "Bills", "UPI"),
            expense("c", 24.5, "2025-06-03", "Food", "Credit Card"),
        ];
        let total: f64 = expenses.iter().map(|e| e.amount).sum();
        assert!((category_breakdown(&expenses).total() - total).abs() < 1e-9);
        assert!((payment_method_breakdown(&expenses).total() - total).abs() < 1e-9);
    }

    #[test]
    fn test_category_breakdown_groups_and_preserves_order() {
        let expenses = vec![
            expense("a", 100.0, "2025-08-01", "Food", "Cash"),
            expense("b", 10.0, "2025-08-02", "Bills", "UPI"),
            expense("c", 50.0, "2025-08-03", "Food", "Cash"),
        ];
        let breakdown = category_breakdown(&expenses);
        assert_eq!(breakdown.labels, vec!["Food", "Bills"]);
        assert_eq!(breakdown.values, vec![150.0, 10.0]);
    }

    #[test]
    fn test_breakdown_has_no_date_filter() {
        // Unparsable dates drop out of time-bucketed views but still count
        // toward the all-time breakdowns.
        let expenses = vec![expense("a", 9.0, "not-a-date", "Food", "Cash")];
        assert_eq!(category_breakdown(&expenses).total(), 9.0);
        let trend = spending_trend(&expenses, Period::Daily, today());
        assert_eq!(trend.values.iter().sum::<f64>(), 0.0);
        assert_eq!(monthly_total(&expenses, today()), 0.0);
    }

    #[test]
    fn test_top_categories_picks_five_largest_sorted() {
        let expenses: Vec<Expense> = [
            ("Food", 70.0),
            ("Bills", 10.0),
            ("Petrol", 50.0),
            ("Shopping", 90.0),
            ("Entertainment", 30.0),
            ("Healthcare", 60.0),
            ("Education", 20.0),
        ]
        .iter()
        .enumerate()
        .map(|(i, (cat, amt))| expense(&i.to_string(), *amt, "2025-08-01", cat, "Cash"))
        .collect();

        let top = top_categories(&expenses, 5);
        assert_eq!(
            top.labels,
            vec!["Shopping", "Food", "Healthcare", "Petrol", "Entertainment"]
        );
        assert_eq!(top.values, vec![90.0, 70.0, 60.0, 50.0, 30.0]);
    }

    #[test]
    fn test_top_categories_tie_is_stable_on_insertion_order() {
        let expenses: Vec<Expense> = [
            ("A", 100.0),
            ("B", 90.0),
            ("C", 80.0),
            ("D", 70.0),
            ("E", 60.0),
            ("F", 60.0),
            ("G", 10.0),
        ]
        .iter()
        .enumerate()
        .map(|(i, (cat, amt))| expense(&i.to_string(), *amt, "2025-08-01", cat, "Cash"))
        .collect();

        // E and F tie at the 5/6 boundary; E was seen first and stays.
        let top = top_categories(&expenses, 5);
        assert_eq!(top.labels, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_category_comparison_yearly_shape() {
        let expenses = vec![
            expense("a", 100.0, "2025-08-01", "Food", "Cash"),
            expense("b", 80.0, "2024-03-01", "Bills", "UPI"),
            expense("c", 60.0, "2023-01-15", "Petrol", "Cash"),
        ];
        let comparison = category_comparison(&expenses, Period::Yearly, today());
        assert_eq!(comparison.labels.len(), 5);
        assert_eq!(comparison.categories, vec!["Food", "Bills", "Petrol"]);
        for series in &comparison.series {
            assert_eq!(series.len(), 5);
        }
        // Food spend lands in the 2025 bucket only.
        assert_eq!(comparison.series[0], vec![0.0, 0.0, 0.0, 0.0, 100.0]);
    }

    #[test]
    fn test_category_comparison_monthly_labels_drop_year() {
        let comparison = category_comparison(
            &[expense("a", 1.0, "2025-08-01", "Food", "Cash")],
            Period::Monthly,
            today(),
        );
        assert_eq!(comparison.labels[11], "Aug");
        assert_eq!(comparison.labels[0], "Sep");
    }

    #[test]
    fn test_category_comparison_caps_at_five_categories() {
        let expenses: Vec<Expense> = (0..7)
            .map(|i| {
                expense(
                    &i.to_string(),
                    (i + 1) as f64,
                    "2025-08-01",
                    &format!("Cat{}", i),
                    "Cash",
                )
            })
            .collect();
        let comparison = category_comparison(&expenses, Period::Daily, today());
        assert_eq!(comparison.categories.len(), 5);
        assert_eq!(comparison.series.len(), 5);
    }

    #[test]
    fn test_budget_status_over_budget_is_strict() {
        let over = budget_status(1000.0, 1200.0);
        assert_eq!(over.percentage, Some(120.0));
        assert!(over.over_budget);

        let exact = budget_status(1000.0, 1000.0);
        assert_eq!(exact.percentage, Some(100.0));
        assert!(!exact.over_budget);
        assert_eq!(exact.remaining, 0.0);
    }

    #[test]
    fn test_budget_status_zero_budget_has_no_percentage() {
        let status = budget_status(0.0, 50.0);
        assert_eq!(status.percentage, None);
        assert!(!status.over_budget);
        assert_eq!(progress_width(&status), 0.0);
    }

    #[test]
    fn test_progress_width_clamps_but_percentage_does_not() {
        let status = budget_status(100.0, 250.0);
        assert_eq!(status.percentage, Some(250.0));
        assert_eq!(progress_width(&status), 100.0);
    }

    #[test]
    fn test_find_budget_first_wins_on_duplicates() {
        let budgets = vec![
            budget("b1", "Food", 500.0),
            budget("b2", "Food", 900.0),
            budget("b3", "Overall", 2000.0),
        ];
        assert_eq!(find_budget(&budgets, "Food").map(|b| b.id.as_str()), Some("b1"));
        assert_eq!(
            find_budget(&budgets, crate::OVERALL_CATEGORY).map(|b| b.amount),
            Some(2000.0)
        );
        assert!(find_budget(&budgets, "Petrol").is_none());
    }

    #[test]
    fn test_percentage_of_total() {
        assert_eq!(percentage_of_total(25.0, 50.0), 50.0);
        assert_eq!(percentage_of_total(10.0, 0.0), 0.0);
        assert_eq!(format!("{:.1}", percentage_of_total(1.0, 3.0)), "33.3");
    }

    #[test]
    fn test_sorted_breakdown_descending_with_label_tiebreak() {
        let mut map = HashMap::new();
        map.insert("Food".to_string(), 50.0);
        map.insert("Bills".to_string(), 80.0);
        map.insert("Petrol".to_string(), 50.0);
        assert_eq!(
            sorted_breakdown(&map),
            vec![
                ("Bills".to_string(), 80.0),
                ("Food".to_string(), 50.0),
                ("Petrol".to_string(), 50.0),
            ]
        );
    }

    #[test]
    fn test_empty_expense_list() {
        assert!(category_breakdown(&[]).is_empty());
        assert!(payment_method_breakdown(&[]).is_empty());
        assert!(top_categories(&[], 5).is_empty());

        for period in Period::ALL {
            let trend = spending_trend(&[], period, today());
            assert_eq!(trend.labels.len(), period.bucket_count());
            assert!(trend.values.iter().all(|v| *v == 0.0));

            let comparison = category_comparison(&[], period, today());
            assert_eq!(comparison.labels.len(), period.bucket_count());
            assert!(comparison.categories.is_empty());
            assert!(comparison.series.is_empty());
        }
    }

    #[test]
    fn test_months_back_wraps_across_year() {
        let jan = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(months_back(jan, 0), (2025, 1));
        assert_eq!(months_back(jan, 1), (2024, 12));
        assert_eq!(months_back(jan, 13), (2023, 12));
    }

    #[test]
    fn test_month_window_covers_whole_month() {
        let (start, end) = month_window(2024, 2);
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }
}
