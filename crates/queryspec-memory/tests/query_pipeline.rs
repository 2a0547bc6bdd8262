//! End-to-end tests: transport-level filter/sort/page input, whitelist
//! mapping, specification building, and in-memory execution.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use queryspec_core::{
    FieldFilter, FilterMap, FilterOptions, MultiSortOptions, PageRequest, SortDirection, SortKey,
    SortWhitelist, Specification, SpecificationExecutor,
};
use queryspec_memory::MemoryExecutor;

#[derive(Debug, Clone, PartialEq)]
struct Employee {
    first_name: Option<String>,
    last_name: Option<String>,
    department_id: Uuid,
    created_on: DateTime<Utc>,
}

fn dept_a() -> Uuid {
    Uuid::parse_str("11111111-1111-1111-1111-111111111111").expect("uuid")
}

fn dept_b() -> Uuid {
    Uuid::parse_str("22222222-2222-2222-2222-222222222222").expect("uuid")
}

fn employee(
    first: Option<&str>,
    last: Option<&str>,
    dept: Uuid,
    created: (i32, u32, u32),
) -> Employee {
    Employee {
        first_name: first.map(Into::into),
        last_name: last.map(Into::into),
        department_id: dept,
        created_on: Utc
            .with_ymd_and_hms(created.0, created.1, created.2, 0, 0, 0)
            .unwrap(),
    }
}

fn seeded_executor() -> MemoryExecutor<Employee> {
    MemoryExecutor::new(vec![
        employee(Some("Ali"), Some("Ahmadi"), dept_a(), (2025, 1, 5)),
        employee(Some("Sara"), Some("Babaei"), dept_a(), (2025, 1, 20)),
        employee(Some("Reza"), Some("Rahimi"), dept_b(), (2025, 2, 10)),
        employee(None, None, dept_b(), (2025, 1, 15)),
    ])
}

fn configure(map: &mut FilterMap<Employee>) {
    map.for_contains("firstName", |e: &Employee| e.first_name.as_deref())
        .for_contains("lastName", |e: &Employee| e.last_name.as_deref())
        .for_equals(
            "departmentId",
            |e: &Employee| e.department_id,
            queryspec_core::parsers::parse_uuid,
        )
        .for_between(
            "createdOn",
            |e: &Employee| e.created_on,
            queryspec_core::parsers::parse_datetime,
        );
}

fn sort_whitelist() -> SortWhitelist<Employee> {
    let mut whitelist = SortWhitelist::new();
    whitelist
        .add("firstName", SortKey::by(|e: &Employee| e.first_name.clone()))
        .add("lastName", SortKey::by(|e: &Employee| e.last_name.clone()))
        .add("createdOn", SortKey::by(|e: &Employee| e.created_on));
    whitelist
}

#[tokio::test]
async fn test_filters_from_transport_json() {
    let filters: FilterOptions = serde_json::from_str(
        r#"{
            "filters": [
                {"field": "firstName", "operator": "contains", "value": "  li "},
                {"field": "createdOn", "operator": "between", "from": "2025-01-01", "to": "2025-02-01", "to_inclusive": false}
            ]
        }"#,
    )
    .expect("deserialize filters");

    let mut spec = Specification::new();
    spec.apply_filters(&filters, configure);

    let rows = seeded_executor().find_all(&spec).await.expect("find_all");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].first_name.as_deref(), Some("Ali"));
}

#[tokio::test]
async fn test_intersection_of_multiple_terms() {
    let filters = FilterOptions::new(vec![
        FieldFilter::contains("firstName", "a"),
        FieldFilter::between(
            "createdOn",
            Some("2025-01-10".into()),
            Some("2025-01-31".into()),
        ),
        FieldFilter::equals("departmentId", dept_a().to_string()),
    ]);

    let mut spec = Specification::new();
    spec.apply_filters(&filters, configure);

    let executor = seeded_executor();
    let rows = executor.find_all(&spec).await.expect("find_all");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].first_name.as_deref(), Some("Sara"));
    assert_eq!(executor.count(&spec).await.expect("count"), 1);
}

#[tokio::test]
async fn test_hostile_input_degrades_to_no_filter() {
    let filters = FilterOptions::new(vec![
        FieldFilter::equals("departmentId", "'; DROP TABLE employees; --"),
        FieldFilter::equals("__proto__", "x"),
        FieldFilter::contains("firstName", "   "),
    ]);

    let mut spec = Specification::new();
    spec.apply_filters(&filters, configure);

    assert_eq!(seeded_executor().count(&spec).await.expect("count"), 4);
}

#[tokio::test]
async fn test_sorted_page_with_default_order_suppressed() {
    let sort = MultiSortOptions::parse("lastName,-createdOn");
    let default_order = [(
        SortKey::by(|e: &Employee| e.created_on),
        SortDirection::Desc,
    )];

    let mut spec = Specification::new();
    spec.apply_sorts(&sort, &sort_whitelist(), &default_order);
    assert_eq!(spec_order_len(&spec), 2);

    let page = PageRequest::new(1, 2);
    let resp = seeded_executor()
        .find_page(&spec, &page)
        .await
        .expect("find_page");

    // None sorts before Some under Option's ordering.
    assert_eq!(resp.items[0].last_name, None);
    assert_eq!(resp.items[1].last_name.as_deref(), Some("Ahmadi"));
    assert_eq!(resp.total_count, 4);
    assert_eq!(resp.total_pages, 2);
}

#[tokio::test]
async fn test_unmatched_sort_falls_back_to_default() {
    let sort = MultiSortOptions::parse("salary");
    let default_order = [(
        SortKey::by(|e: &Employee| e.created_on),
        SortDirection::Desc,
    )];

    let mut spec = Specification::new();
    spec.apply_sorts(&sort, &sort_whitelist(), &default_order);

    let rows = seeded_executor().find_all(&spec).await.expect("find_all");
    assert_eq!(rows[0].first_name.as_deref(), Some("Reza"));
    assert_eq!(rows[3].first_name.as_deref(), Some("Ali"));
}

#[tokio::test]
async fn test_full_pipeline_filter_sort_page() {
    let filters = FilterOptions::new(vec![FieldFilter::between(
        "createdOn",
        Some("2025-01-01".into()),
        None,
    )]);
    let sort = MultiSortOptions::parse("-createdOn");
    let page = PageRequest::new(2, 2);

    let mut spec = Specification::new();
    spec.apply_filters(&filters, configure)
        .apply_sorts(&sort, &sort_whitelist(), &[]);

    let resp = seeded_executor()
        .find_page(&spec, &page)
        .await
        .expect("find_page");

    assert_eq!(resp.total_count, 4);
    assert_eq!(resp.items.len(), 2);
    assert_eq!(resp.items[0].last_name, None);
    assert_eq!(resp.items[1].last_name.as_deref(), Some("Ahmadi"));
    assert_eq!(resp.page_number, 2);
    assert_eq!(resp.total_pages, 2);
}

fn spec_order_len(spec: &Specification<Employee>) -> usize {
    use queryspec_core::QueryPlan;
    spec.order_by().len()
}
